//! # CLI Behavior
//!
//! This is **one possible UI client** for sift. The CLI is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Commands
//!
//! - `sift` / `sift products`: list the catalog
//! - `sift filter --where color=green --where size=large`: every criterion must hold
//! - `sift filter --any --where color=red --where size=small`: any criterion may hold
//! - `sift filter --exclude color=blue`: drop items matching a criterion
//! - `sift journal add|remove|list|export`: journal entries, stored in the data dir
//! - `sift config [key] [value]`: show or change configuration
//!
//! The data directory defaults to the platform data dir and can be moved with
//! `--data-dir` or `SIFT_HOME`.
//!
//! ## Module Structure
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context wiring, logging setup, per-command handlers
//! - `print`: output formatting (tables, colors, messages)

mod commands;
mod print;
pub mod setup;

pub use commands::run;
