use crate::cli::run;

mod catalog;
pub mod cli;
mod config;
pub mod domain;
mod game;
pub mod http;
mod public_endpoint;

fn main() -> anyhow::Result<()> {
    run()
}
