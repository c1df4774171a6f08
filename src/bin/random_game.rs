//! Plays one random game from the start position and prints it.
//!
//! Usage:
//! `cargo run --release --bin random_game -- --seed 42 --max-plies 200`

use clap::Parser;

use chess_position::game_state::game_state::GameState;
use chess_position::utils::random_playout::{random_playout, PlayoutConfig};
use chess_position::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = PlayoutConfig::default().max_plies)]
    max_plies: u16,
}

fn main() {
    let args = Args::parse();
    let config = PlayoutConfig {
        max_plies: args.max_plies,
        seed: args.seed,
    };

    let mut game = GameState::new_game();
    let result = random_playout(&mut game, &config);

    for (ply, text) in game.move_log_long_algebraic().iter().enumerate() {
        if ply % 2 == 0 {
            print!("{}. ", ply / 2 + 1);
        }
        print!("{text} ");
    }
    println!();
    println!("{}", render_game_state(&game));
    println!("{:?} after {} plies", result.outcome, result.moves_played.len());
}
