//! hexmerge CLI - play the hexagonal 2048 in a terminal
//!
//! Commands:
//! - play: interactive game driven from stdin
//! - demo: self-playing game with random moves

mod demo;
mod play;
mod render;
mod spawner;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexmerge")]
#[command(about = "Hexagonal 2048 puzzle engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively
    Play(play::PlayArgs),
    /// Watch a random self-playing game
    Demo(demo::DemoArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(&args),
        Commands::Demo(args) => demo::run(&args),
    }
}
