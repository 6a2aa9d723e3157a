//! Core shared library for the spoken-time workspace.
//!
//! This crate holds the ambient pieces every other crate leans on: the
//! canonical error type, configuration loading from the environment and
//! the tracing subscriber setup used by binaries.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::{Environment, SpokenTimeConfig};
pub use errors::{ConfigError, Result as CoreResult, SpokenTimeError};
