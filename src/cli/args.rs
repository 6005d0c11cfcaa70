use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mihrab", version, author, about = "A terminal prayer board for community mosques")]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start on this location instead of the configured default
    #[arg(long, short, global = true, value_name = "NAME")]
    pub location: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's prayer times and the countdown to the next prayer
    Times {
        /// Print the next prayer as JSON
        #[arg(long)]
        json: bool,
    },
    /// List configured locations
    Locations,
    /// Show a reminder
    Reminder {
        /// Rotation index (wraps around the list)
        #[arg(long, default_value_t = 0)]
        index: usize,
    },
    /// List upcoming community events
    Events,
    /// List available recitations
    Recitations,
    /// Config file management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write the built-in defaults to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
