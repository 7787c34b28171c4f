//! Interactive play command

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use hexmerge_core::{Board, MoveDirection};

use crate::render::render_board;
use crate::spawner::RandomSpawner;

#[derive(Args)]
pub struct PlayArgs {
    /// Grid radius (2 = 7 cells, 3 = 19 cells, ...)
    #[arg(long, default_value = "3")]
    pub radius: u32,

    /// RNG seed for reproducible spawns
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: &PlayArgs) -> Result<()> {
    let mut board = Board::new(args.radius);
    let mut spawner = RandomSpawner::new(args.seed);
    board.init(&mut spawner);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", render_board(board.grid(), board.tiles()));
    println!("moves: w=top e=top-right d=bottom-right s=bottom a=bottom-left q=top-left, quit to exit");

    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let direction = match parse_direction(line.trim()) {
            Some(direction) => direction,
            None => {
                if line.trim() == "quit" {
                    break;
                }
                println!("unrecognized move: {}", line.trim());
                continue;
            }
        };

        let outcome = board.merge_all(direction, &mut spawner);
        if !outcome.changed {
            println!("nothing moved");
        }
        println!("{}", render_board(board.grid(), board.tiles()));

        if !board.has_moves() {
            println!("game over, best tile: {}", max_value(&board));
            break;
        }
    }

    Ok(())
}

fn max_value(board: &Board) -> u32 {
    board.tiles().iter().map(|tile| tile.value).max().unwrap_or(0)
}

pub fn parse_direction(input: &str) -> Option<MoveDirection> {
    match input {
        "w" | "top" => Some(MoveDirection::Top),
        "s" | "bottom" => Some(MoveDirection::Bottom),
        "e" | "top-right" => Some(MoveDirection::TopRight),
        "q" | "top-left" => Some(MoveDirection::TopLeft),
        "d" | "bottom-right" => Some(MoveDirection::BottomRight),
        "a" | "bottom-left" => Some(MoveDirection::BottomLeft),
        _ => None,
    }
}
