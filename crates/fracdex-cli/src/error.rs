use fracdex::core::{KeyError, SequenceError};
use std::{io, path::PathBuf};
use thiserror::Error as ThisError;

/// Exit codes for the CLI.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

pub type CliResult<T> = Result<T, CliError>;

///
/// CliError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum CliError {
    #[error("invalid config: {0}")]
    Config(String),

    #[error("invalid config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot read config file '{path}': {source}")]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Key(#[from] fracdex::Error),
}

impl CliError {
    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::ConfigParse { .. } | Self::ConfigRead { .. } => EXIT_USAGE,
            Self::Io(_) | Self::Json(_) | Self::Key(_) => EXIT_FAILURE,
        }
    }
}

impl From<KeyError> for CliError {
    fn from(err: KeyError) -> Self {
        Self::Key(err.into())
    }
}

impl From<SequenceError> for CliError {
    fn from(err: SequenceError) -> Self {
        Self::Key(err.into())
    }
}
