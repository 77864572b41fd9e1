//! # Host Error Types
//!
//! Everything that can go wrong outside the engine: configuration, input
//! tokens, logging setup and terminal I/O.

use std::path::PathBuf;

use kalkulator_core::CalcError;
use thiserror::Error;

/// Errors raised by the terminal host.
#[derive(Error, Debug)]
pub enum AppError {
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    ConfigRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has invalid values.
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A REPL token matched nothing.
    #[error("unknown token `{0}`")]
    UnknownToken(String),

    /// A REPL keyword is missing its argument.
    #[error("`{0}` needs a value")]
    MissingArgument(String),

    /// A value failed to parse as an operator, mode or precision.
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// The tracing subscriber could not be installed.
    #[error("cannot install logger: {0}")]
    Logging(String),

    /// The loader thread went away before sending the calculator.
    #[error("loader thread exited before the calculator was ready")]
    LoaderGone,

    /// Reading stdin or writing stdout failed.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for host operations.
pub type AppResult<T> = Result<T, AppError>;
