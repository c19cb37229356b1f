use anyhow::Result;
use clap::Parser as _;

mod cli;
mod config;
mod users;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = cli::Args::parse();
    cli::run(args).await
}
