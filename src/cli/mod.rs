//! Command-line interface for tdo
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::ops::TaskOps;

mod add;
mod done;
mod get;
mod list;
mod rm;
mod serve;
mod status;
mod update;

/// tdo - tiny task tracker
///
/// Tracks short text tasks in a single JSON file, with a CLI and a minimal
/// HTTP API over the same collection.
#[derive(Parser, Debug)]
#[command(name = "tdo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the tasks file (defaults to the platform data dir)
    #[arg(long, global = true, env = "TDO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task text
        text: String,
    },

    /// Show all tasks
    List,

    /// Show a single task by id
    Get {
        /// Task id
        id: String,
    },

    /// Toggle a task between done and pending
    Done {
        /// Task id
        id: String,
    },

    /// Replace the text of a task
    Update {
        /// Task id
        id: String,

        /// New task text
        text: String,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: String,
    },

    /// Show summary counts (total, done, pending)
    Status,

    /// Run the HTTP API server (blocks)
    Serve {
        /// Listen address (default from .tdo.toml, then 127.0.0.1:8080)
        #[arg(long)]
        addr: Option<String>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { text } => add::run(add::AddOptions {
                text,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List => list::run(list::ListOptions {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Get { id } => get::run(get::GetOptions {
                id,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Done { id } => done::run(done::DoneOptions {
                id,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Update { id, text } => update::run(update::UpdateOptions {
                id,
                text,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rm { id } => rm::run(rm::RmOptions {
                id,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Status => status::run(status::StatusOptions {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Serve { addr } => serve::run(serve::ServeOptions {
                addr,
                data_dir: self.data_dir,
                quiet: self.quiet,
            }),
        }
    }
}

/// Open the operations layer over the resolved tasks file
fn open_ops(data_dir: Option<&Path>) -> Result<TaskOps> {
    let config = Config::load()?;
    TaskOps::open(config.tasks_file(data_dir))
}
