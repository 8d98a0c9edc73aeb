//! sevens - Solve or play a deal of Sevens against the solver
//!
//! Usage:
//!   sevens solve [--hand <TEXT> | --seed <N>]
//!   sevens play  [--hand <TEXT> | --seed <N>]
//!
//! Hands are given as player A's cards, suits separated by dots and `-` for a
//! void, e.g. "A27.K.-.789". Player B receives every other card.

use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sevens_solver::cards::{card_of, name_of, rank_of, suit_of};
use sevens_solver::types::{player_name, suit_name};
use sevens_solver::{Cards, GameState, Geometry, Hands, Solver, SolverError, PLAYER_A};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "sevens")]
#[command(about = "Exact solver for the card game Sevens")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Ranks below the anchor, anchor included
    #[arg(long = "low-span", default_value_t = 7, global = true)]
    low_span: usize,

    /// Ranks above the anchor, anchor included
    #[arg(long = "high-span", default_value_t = 7, global = true)]
    high_span: usize,

    /// Number of suits in play
    #[arg(long = "suits", default_value_t = 4, global = true)]
    suits: usize,

    /// Verbose output - log search statistics
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the winner and best opening move of a deal
    Solve(DealArgs),
    /// Play a deal against the computer (you are player B)
    Play(DealArgs),
}

#[derive(Args)]
struct DealArgs {
    /// Player A's hand, e.g. "A27.K.-.789"
    #[arg(long = "hand", conflicts_with = "seed")]
    hand: Option<String>,

    /// Seed for a random deal
    #[arg(long = "seed")]
    seed: Option<u64>,
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let geometry = Geometry::new(cli.low_span, cli.high_span, cli.suits)?;
    match cli.command {
        Command::Solve(args) => solve(geometry, &args),
        Command::Play(args) => play(geometry, &args),
    }
}

/// Build the deal from `--hand`, or shuffle the deck
fn deal(geometry: Geometry, args: &DealArgs) -> Result<Hands, SolverError> {
    if let Some(text) = &args.hand {
        return Hands::parse(geometry, text);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("dealing with seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut deck: Vec<usize> = Cards::full_deck(&geometry).iter().collect();
    deck.shuffle(&mut rng);

    let mut hand_a = vec![0u16; geometry.suit_count];
    for &card in deck.iter().take(geometry.deck_size() / 2) {
        hand_a[suit_of(card)] |= 1 << rank_of(card);
    }
    Hands::from_suit_bits(geometry, &hand_a)
}

fn solve(geometry: Geometry, args: &DealArgs) -> CliResult<()> {
    let hands = deal(geometry, args)?;
    print!("{}", hands);

    let mut solver = Solver::new(geometry)?;
    let first = solver.initialize_hands(hands)?;
    println!("{} plays first", player_name(first));

    let state = solver.initial_state()?;
    let winner = solver.query_verdict(&state)?;
    println!("{} wins with perfect play", player_name(winner));

    match solver.query_best_move(&state)? {
        Some(best) => println!("Best move: {}", best.mv.name(&geometry)),
        None => println!("Best move: none"),
    }

    let stats = solver.stats();
    log::debug!(
        "{} nodes, {} memo hits, {} memo entries",
        stats.nodes,
        stats.memo_hits,
        solver.memo_entries()
    );
    Ok(())
}

fn play(geometry: Geometry, args: &DealArgs) -> CliResult<()> {
    let hands = deal(geometry, args)?;
    println!("I am player A, you are player B");
    print!("{}", hands);

    let mut solver = Solver::new(geometry)?;
    solver.initialize_hands(hands)?;
    let mut state = solver.initial_state()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    while solver.opponent_has_remaining_play(&state)? {
        if state.to_move == PLAYER_A {
            computer_turn(&mut solver, &mut state)?;
        } else {
            human_turn(&solver, &mut state, &mut input)?;
        }
        state.switch_players();
    }

    if state.to_move == PLAYER_A {
        println!("You win!");
    } else {
        println!("I win!");
    }
    Ok(())
}

fn computer_turn(solver: &mut Solver, state: &mut GameState) -> CliResult<()> {
    match solver.query_best_move(state)? {
        Some(best) => {
            solver.apply_move(state, best.mv.suit, best.mv.rank)?;
            println!("I play {}", best.mv.name(solver.geometry()));
        }
        None => println!("I have to pass!"),
    }
    Ok(())
}

fn human_turn(solver: &Solver, state: &mut GameState, input: &mut impl BufRead) -> CliResult<()> {
    if !solver.has_any_legal_move(state)? {
        println!("You have no moves to play!");
        return Ok(());
    }

    let geometry = *solver.geometry();
    let suits: Vec<String> = (0..geometry.suit_count)
        .map(|suit| suit_name(suit).to_string())
        .collect();
    let ranks: Vec<String> = (0..geometry.suit_window())
        .map(|rank| geometry.rank_name(rank).to_string())
        .collect();

    loop {
        let suit = ask_choice(input, "suit", &suits)?;
        let rank = ask_choice(input, "card", &ranks)?;
        if solver.is_move_legal(state, suit, rank)? {
            solver.apply_move(state, suit, rank)?;
            println!("You play {}", name_of(&geometry, card_of(suit, rank)));
            return Ok(());
        }
        println!("You can't play that card");
    }
}

/// Prompt with a numbered list until a valid number is entered
fn ask_choice(input: &mut impl BufRead, name: &str, options: &[String]) -> CliResult<usize> {
    println!("Pick a {}:", name);
    for (i, option) in options.iter().enumerate() {
        println!("({}) {}", i + 1, option);
    }

    let mut line = String::new();
    loop {
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err("input closed".into());
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            _ => print!("Invalid input, please enter a valid number: "),
        }
    }
}
