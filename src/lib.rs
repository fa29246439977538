//! A library for defining inventories of phonemes as bundles of binary features, and for maintaining minimal collections of implications between bundles.
//!
//! pyre is used interactively: each line read is a short statement which either defines some symbols or asserts some implication, and after each line the resulting symbols or implications are shown.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context holds two databases:
//! - A [symbol database](crate::db::symbol), binding names (such as `m`) to [phonemes](crate::structures::phoneme).
//! - An [implication database](crate::db::implication), holding implications between phonemes (such as 'nasals are voiced').
//!
//! Lines are read through the [rule language](crate::language), and each line results in a [report](crate::reports).
//!
//! Useful starting points, then, may be:
//! - The [phoneme](crate::structures::phoneme) structure, for the order on phonemes and merges of phonemes.
//! - The [implication database](crate::db::implication), for how implications are kept minimal.
//! - The [rule language](crate::language), for what may be written.
//!
//! # Examples
//!
//! + Build a small inventory, and assert an implication.
//!
//! ```rust
//! # use pyre::config::Config;
//! # use pyre::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//!
//! for line in ["nasal voice : m n", "labial : m b", "coronal : n", "voice : b"] {
//!     assert!(the_context.read_line(line).is_ok());
//! }
//!
//! assert_eq!(the_context.resolve_symbol("m").unwrap().to_string(), "[+labial +nasal +voice]");
//!
//! assert!(the_context.read_line("+nasal => +voice").is_ok());
//! assert_eq!(the_context.implication_db.count(), 1);
//! ```
//!
//! + Inconsistent definitions are noted, and skipped.
//!
//! ```rust
//! # use pyre::config::Config;
//! # use pyre::context::Context;
//! let mut the_context = Context::from_config(Config::default());
//! assert!(the_context.read_line("nasal : m").is_ok());
//!
//! let report = the_context.read_line("m = -nasal +labial").unwrap().unwrap();
//! assert_eq!(report.warnings().len(), 1);
//! assert_eq!(report.to_string(), "m = [+labial +nasal]");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made when a database is revised, and when a line is abandoned.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the implication database](crate::db::implication) can be filtered with `RUST_LOG=implication_db …` or,
//! - Logs of conflicting definitions can be found with `RUST_LOG=symbol_db=warn …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod db;
pub mod language;
pub mod misc;
pub mod reports;
pub mod structures;
pub mod types;
