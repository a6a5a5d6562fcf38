//! # Fleet Errors
//!
//! Errors raised while reading a fleet data file.

use crate::domain::errors::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for fleet loading.
#[derive(Debug, Error)]
pub enum FleetError {
    /// The file could not be read.
    #[error("failed to read fleet file {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line could not be parsed.
    #[error("fleet data line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The data has no `-name,regions` header line.
    #[error("fleet data has no company header")]
    MissingHeader,

    /// The parsed fleet does not form a valid company.
    #[error("inconsistent fleet: {0}")]
    Inconsistent(#[from] DomainError),
}

impl FleetError {
    /// Creates an I/O error for a path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error at a 1-based line.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Returns true if the data itself is malformed, as opposed to unreadable.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::MissingHeader | Self::Inconsistent(_)
        )
    }
}

/// Result type for fleet loading.
pub type FleetResult<T> = Result<T, FleetError>;
