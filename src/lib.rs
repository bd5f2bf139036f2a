//! tdo - Tiny Task Tracker Library
//!
//! This library provides the core functionality for the tdo CLI tool and
//! its HTTP API: CRUD over short text tasks kept in memory and persisted
//! to a single JSON file.
//!
//! # Core Concepts
//!
//! - **Task**: plain record of id, text, and done flag
//! - **Store**: JSON file loaded into memory, rewritten on every mutation
//! - **Operations layer**: validation and error classification shared by
//!   both adapters
//! - **Adapters**: a clap CLI and an axum route table, both thin
//!   translators into the operations layer
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Configuration loading from `.tdo.toml`
//! - `error`: Error types and result aliases
//! - `ops`: Task operations layer
//! - `output`: Shared CLI output formatting
//! - `server`: HTTP API using axum
//! - `store`: JSON file persistence
//! - `task`: Task entity and status report

pub mod cli;
pub mod config;
pub mod error;
pub mod ops;
pub mod output;
pub mod server;
pub mod store;
pub mod task;

pub use error::{Error, Result};
