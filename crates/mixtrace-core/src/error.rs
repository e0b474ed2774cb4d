//! Error type shared by every stage of the transform.

use std::num::ParseIntError;

/// Result alias used throughout mixtrace-core.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule matched but one of its numeric captures is not an integer.
    /// Fatal for the whole run.
    #[error("line {line}: {rule} rule captured non-integer {field} {value:?}")]
    Parse {
        line: usize,
        rule: &'static str,
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when the error is a write to a reader that went away.
    ///
    /// The csv writer wraps io errors, so both layers are checked.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Error::Io(err) => err.kind() == std::io::ErrorKind::BrokenPipe,
            Error::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(err) => err.kind() == std::io::ErrorKind::BrokenPipe,
                _ => false,
            },
            _ => false,
        }
    }
}
