mod board;
mod cli;
mod config;
mod error;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use board::{BoardContext, ExternalPlayer, Player};
use cli::args::{Cli, Commands, ConfigCommands};
use cli::handlers;
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(p) => p.clone(),
        None => AppConfig::config_path()?,
    };
    let location = cli.location.as_deref();
    let now = Local::now().naive_local();
    let mut out = io::stdout().lock();

    match cli.command {
        // Config management works even when the current file is broken
        Some(Commands::Config { action }) => match action {
            ConfigCommands::Path => writeln!(out, "{}", config_path.display())?,
            ConfigCommands::Init { force } => {
                handlers::handle_config_init(&mut out, &config_path, force)?
            }
        },
        Some(Commands::Times { json }) => {
            let (_, ctx) = load_board(&config_path, location)?;
            handlers::handle_times(&mut out, &ctx, now, json)?
        }
        Some(Commands::Locations) => {
            let (_, ctx) = load_board(&config_path, location)?;
            handlers::handle_locations(&mut out, &ctx)?
        }
        Some(Commands::Reminder { index }) => {
            let (_, ctx) = load_board(&config_path, location)?;
            handlers::handle_reminder(&mut out, &ctx, index)?
        }
        Some(Commands::Events) => {
            let (_, ctx) = load_board(&config_path, location)?;
            handlers::handle_events(&mut out, &ctx)?
        }
        Some(Commands::Recitations) => {
            let (_, ctx) = load_board(&config_path, location)?;
            handlers::handle_recitations(&mut out, &ctx)?
        }

        // No subcommand → launch TUI
        None => {
            drop(out);
            let (config, ctx) = load_board(&config_path, location)?;
            let player = Player::new(Box::new(ExternalPlayer::new(&config.player)));
            let tick = Duration::from_millis(config.board.tick_ms.max(1));
            let app = tui::app::App::new(ctx, player, tick, config.board.hijri_offset);
            tui::app::run(app)?;
        }
    }

    Ok(())
}

fn load_board(path: &Path, location: Option<&str>) -> Result<(AppConfig, BoardContext)> {
    let config = AppConfig::load_from(path).context("Loading config")?;
    let ctx = BoardContext::from_config(&config, location)?;
    Ok((config, ctx))
}
