use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config;
use crate::domain::puzzle::PuzzleId;
use crate::game::{grader, operations::Game};

#[derive(Parser)]
#[command(name = "dailytune")]
#[command(version = "0.1")]
#[command(about = "Daily song guessing game server")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run http server hosting the game
    Serve,
    /// Show the puzzle of a day, answer included
    Today {
        /// Day to show instead of today (UTC), as YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Grade a guess against an answer with the configured policy
    Grade { guess: String, answer: String },
    /// Validate the catalog and report shadowed tracks
    Check,
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let cfg = config::Config::load(&cli.config)?;

    match &cli.command {
        Commands::Serve => {
            let game = load_game(&cfg)?;
            info!(
                "Catalog loaded: {} tracks, grading {:?}, fallback {:?}, authority {:?}",
                game.catalog().all_records().len(),
                cfg.game.grading,
                cfg.game.fallback,
                cfg.game.authority
            );

            let http_server =
                crate::http::server::HttpServer::new(game, cfg.http, cfg.public_endpoint);

            println!(
                "HTTP server running at http://{}:{}",
                http_server.config.bind_addr, http_server.config.port
            );
            http_server.run();
        }

        Commands::Today { date } => {
            let game = load_game(&cfg)?;
            let id = match date {
                Some(date) => date.parse::<PuzzleId>()?,
                None => PuzzleId::today(),
            };

            let view = game.puzzle_for(id);
            println!("Puzzle: {}", view.puzzle_id);
            if view.available {
                println!("  Reference: {}", view.reference);
                println!("  Answer: {}", view.answer);
            } else {
                println!("  {}", view.answer);
            }
        }

        Commands::Grade { guess, answer } => {
            let outcome = grader::grade(guess, answer, cfg.game.grading);
            println!("{outcome}");
        }

        Commands::Check => {
            let catalog = Catalog::load(&cfg.catalog.path).with_context(|| {
                format!("Invalid catalog {}", cfg.catalog.path.to_string_lossy())
            })?;

            println!(
                "Catalog contains {} tracks: {} dated, {} fallback",
                catalog.all_records().len(),
                catalog.dated_count(),
                catalog.undated_count()
            );

            let shadowed = catalog.duplicate_dates();
            if !shadowed.is_empty() {
                println!("Some tracks share a date, only the first one is ever played:");
                for (date, index) in shadowed {
                    let record = &catalog.all_records()[index];
                    println!("    - #{index} {date}: {}", record.reference);
                }
            }
        }
    }

    Ok(())
}

fn load_game(cfg: &config::Config) -> anyhow::Result<Game> {
    let catalog = Catalog::load(&cfg.catalog.path)
        .with_context(|| format!("Failed to load catalog {}", cfg.catalog.path.to_string_lossy()))?;
    Ok(Game::new(catalog, cfg.game.clone()))
}
