//! Periodize CLI
//!
//! Command-line interface and MCP server for the periodization engine.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, PeriodizeMcpServer};
use periodize_core::{params::ListPlans, PlannerBuilder};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("Periodize started with {}", planner.database_path().display());

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Commands::Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Commands::Context(args)) => {
            Cli::new(planner, renderer)
                .show_context(&args.into())
                .await
        }
        Some(Commands::Load(args)) => Cli::new(planner, renderer).show_load(&args.into()).await,
        Some(Commands::Day { command }) => {
            Cli::new(planner, renderer)
                .handle_day_command(command)
                .await
        }
        Some(Commands::Serve) => {
            info!("Starting Periodize MCP server");
            run_stdio_server(PeriodizeMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(planner, renderer)
                .list_plans(&ListPlans::default())
                .await
        }
    }
}
