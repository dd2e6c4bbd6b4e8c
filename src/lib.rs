//! Tally - expense and salary tracker
//!
//! This library provides the core of the Tally command-line tracker: daily
//! expenses by category, jobs with their work entries (money earned) and
//! salary payments (money received), and the figures derived from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Records, drafts, money and calendar month types
//! - `engine`: Pure aggregation (totals, month filters, projections, per-job stats)
//! - `backend`: The persistence seam the application talks to
//! - `storage`: JSON file implementation of the backend
//! - `state`: Application state with optimistic, rollback-on-failure commands
//! - `display`: Terminal formatting
//! - `export`: JSON, YAML and CSV export of a month
//! - `config`: Configuration and path management
//! - `cli`: Command handlers for the `tally` binary
//! - `error`: Custom error types
//! - `logging`: Logger setup
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::{paths::TallyPaths, settings::Settings};
//! use tally::state::AppState;
//! use tally::storage::JsonStorage;
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let state = AppState::load(JsonStorage::open(paths)?)?;
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod state;
pub mod storage;

pub use error::{TallyError, TallyResult};
