//! Example demonstrating Calcudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a chosen grid size
//! - Generate a random or seed-replayed puzzle
//! - Display the cage layout, cage constraints, and solution
//! - Filter puzzles by the operations their cages use
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a grid size (default: 4):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --size 6
//! ```
//!
//! Replay a specific puzzle from its 64-digit hex seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample puzzles and keep the one whose cages use the requested operations
//! the most:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --op ÷ --op -
//! ```
//!
//! Control how many puzzles the search samples (default: 10000):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --op ÷ --max-tries 50000
//! ```

use std::{collections::HashMap, process};

use calcudoku_core::{Operation, Position, Puzzle};
use calcudoku_generator::{DEFAULT_SIZE, PuzzleGenerator, PuzzleSeed};
use clap::Parser;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid size (rows and columns).
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SIZE)]
    size: u8,

    /// Seed as 64 hex digits; a fresh random seed is drawn when omitted.
    #[arg(long, value_name = "HEX", conflicts_with = "ops")]
    seed: Option<PuzzleSeed>,

    /// Operation symbol to favor (+, -, x, /). Repeatable.
    #[arg(short, long = "op", value_name = "SYMBOL", num_args = 1..)]
    ops: Vec<String>,

    /// Maximum puzzles to sample when favoring operations.
    #[arg(long, value_name = "COUNT", default_value_t = 10_000)]
    max_tries: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.size == 0 {
        eprintln!("--size must be at least 1.");
        process::exit(2);
    }
    let generator = PuzzleGenerator::new(args.size);

    let mut favored = Vec::new();
    for symbol in &args.ops {
        let Some(op) = parse_operation(symbol) else {
            eprintln!("Unknown operation: {symbol}");
            eprintln!("Available operations: + - x /");
            process::exit(2);
        };
        favored.push(op);
    }

    if favored.is_empty() {
        let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
        let puzzle = generator.generate_with_seed(seed);
        print_puzzle(&puzzle, seed, None);
        return;
    }

    let max_tries = args.max_tries;
    if max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..max_tries)
        .into_par_iter()
        .map(|_| {
            let seed = PuzzleSeed::random();
            let puzzle = generator.generate_with_seed(seed);
            let score = operations_score(&puzzle, &favored);
            (puzzle, seed, score)
        })
        .max_by(|a, b| a.2.cmp(&b.2));

    if let Some((puzzle, seed, score)) = best {
        print_puzzle(&puzzle, seed, Some((max_tries, score)));
        return;
    }

    eprintln!("No puzzle generated.");
    process::exit(1);
}

fn parse_operation(symbol: &str) -> Option<Operation> {
    match symbol {
        "+" | "add" => Some(Operation::Add),
        "-" | "sub" => Some(Operation::Subtract),
        "×" | "x" | "*" | "mul" => Some(Operation::Multiply),
        "÷" | "/" | "div" => Some(Operation::Divide),
        _ => None,
    }
}

/// Number of cages using any of the favored operations.
fn operations_score(puzzle: &Puzzle, favored: &[Operation]) -> usize {
    puzzle.cages().iter().filter(|cage| favored.contains(&cage.op())).count()
}

fn print_puzzle(puzzle: &Puzzle, seed: PuzzleSeed, selection: Option<(usize, usize)>) {
    println!("Seed:");
    println!("  {seed}");
    println!();

    if let Some((max_tries, best_score)) = selection {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!("  Best score: {best_score} matching cage(s)");
        println!();
    }

    println!("Puzzle {}:", puzzle.id());
    let owner: HashMap<Position, &str> = puzzle
        .cages()
        .iter()
        .flat_map(|cage| cage.cells().iter().map(move |&cell| (cell, cage.id())))
        .collect();
    let width = puzzle.cages().iter().map(|cage| cage.id().len()).max().unwrap_or(1);
    for row in 0..puzzle.size() {
        print!(" ");
        for col in 0..puzzle.size() {
            let id = owner[&Position::new(row, col)];
            print!(" {id:>width$}");
        }
        println!();
    }
    println!();

    println!("Cages:");
    for cage in puzzle.cages() {
        let cells: Vec<String> =
            cage.cells().iter().map(std::string::ToString::to_string).collect();
        println!("  {:>width$}: {} at {}", cage.id(), cage.label(), cells.join(" "));
    }
    println!();

    println!("Solution:");
    for line in puzzle.solution().to_string().lines() {
        println!("  {line}");
    }
}
