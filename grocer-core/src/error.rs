//! Failures of the two I/O collaborators around a [`FrequencyTable`].
//!
//! Neither is fatal: a table that was never loaded answers every lookup with
//! zero, and a missing backup leaves the table untouched.
//!
//! [`FrequencyTable`]: crate::table::FrequencyTable

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// The input source could not supply tokens.
#[derive(Debug)]
pub enum LoadError {
    Open { path: PathBuf, source: io::Error },
    Read { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Open { path, source } => {
                write!(f, "could not open {}: {}", path.display(), source)
            }
            LoadError::Read { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Open { source, .. } | LoadError::Read { source, .. } => Some(source),
        }
    }
}

/// The backup sink could not be created or written.
#[derive(Debug)]
pub enum BackupError {
    Create { path: PathBuf, source: io::Error },
    Write(io::Error),
}

impl fmt::Display for BackupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackupError::Create { path, source } => {
                write!(f, "could not create backup {}: {}", path.display(), source)
            }
            BackupError::Write(source) => write!(f, "could not write backup: {}", source),
        }
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BackupError::Create { source, .. } | BackupError::Write(source) => Some(source),
        }
    }
}

impl From<io::Error> for BackupError {
    fn from(err: io::Error) -> Self {
        BackupError::Write(err)
    }
}

impl From<csv::Error> for BackupError {
    fn from(err: csv::Error) -> Self {
        BackupError::Write(io::Error::from(err))
    }
}
