//! Limpid CLI library.
//!
//! Everything the `limpid` binary needs around the engine: argument
//! parsing, credential collection, document input, and the staged
//! progress bar.

pub mod cli;
pub mod credentials;
pub mod error;
pub mod input;
pub mod progress;

pub use cli::Cli;
pub use error::{CliError, Result};
