//! Demo command - self-playing game with random moves

use anyhow::Result;
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hexmerge_core::{Board, ALL_DIRECTIONS};

use crate::render::render_board;
use crate::spawner::RandomSpawner;

#[derive(Args)]
pub struct DemoArgs {
    /// Grid radius
    #[arg(long, default_value = "3")]
    pub radius: u32,

    /// RNG seed for reproducible games
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Maximum number of moves before stopping
    #[arg(long, default_value = "1000")]
    pub moves: usize,

    /// Dump the final board as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &DemoArgs) -> Result<()> {
    let mut board = Board::new(args.radius);
    let mut spawner = RandomSpawner::new(Some(args.seed));
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    board.init(&mut spawner);

    let mut played = 0;
    let mut attempts = 0;
    // Attempt cap guards against a run of no-op directions
    while played < args.moves && attempts < args.moves * 10 && board.has_moves() {
        attempts += 1;
        let direction = *ALL_DIRECTIONS
            .choose(&mut rng)
            .expect("direction set is never empty");
        let outcome = board.merge_all(direction, &mut spawner);
        if outcome.changed {
            played += 1;
            tracing::debug!(?direction, actions = outcome.actions.len(), "move applied");
        }
    }

    let best = board.tiles().iter().map(|tile| tile.value).max().unwrap_or(0);
    println!("{}", render_board(board.grid(), board.tiles()));
    println!("moves played: {}, best tile: {}", played, best);
    if !board.has_moves() {
        println!("game over");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(board.tiles())?);
    }

    Ok(())
}
