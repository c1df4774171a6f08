//! Perft runner.
//!
//! Usage:
//! `cargo run --release --bin perft -- --depth 4`
//! `cargo run --release --bin perft -- --depth 3 --moves e2e4,e7e5 --divide`

use std::time::Instant;

use clap::Parser;

use chess_position::chess_errors::ChessErrors;
use chess_position::game_state::game_state::GameState;
use chess_position::move_generation::perft::{perft, perft_divide};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Comma-separated coordinate moves played from the start position first.
    #[arg(short, long, value_delimiter = ',')]
    moves: Vec<String>,

    /// Print the node count below each root move.
    #[arg(long)]
    divide: bool,
}

fn main() -> Result<(), ChessErrors> {
    let args = Args::parse();

    let mut game = GameState::new_game();
    for text in &args.moves {
        game.play_long_algebraic(text)?;
    }

    println!("Running perft at depth {} after {} move(s)", args.depth, args.moves.len());

    let start = Instant::now();
    if args.divide {
        let mut total = 0;
        for (mv, counts) in perft_divide(&mut game, args.depth) {
            println!("{}: {}", mv.chess_notation(), counts.nodes);
            total += counts.nodes;
        }
        println!("total: {total}");
    } else {
        let counts = perft(&mut game, args.depth);
        println!(
            "nodes={} captures={} en_passant={} castles={} promotions={} checks={} checkmates={}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks,
            counts.checkmates
        );
    }
    println!("elapsed_ms={}", start.elapsed().as_millis());

    Ok(())
}
