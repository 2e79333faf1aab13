use std::{ffi::OsString, path::PathBuf};

use crate::options::IllegalOption;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorKind {
    ArgumentError,
    FileError,
    SpawnError,
    OptionsError,
}

impl std::fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self, f)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("missing value for argument: {0}")]
    MissingValue(String),

    #[error("missing command")]
    MissingCommand,

    #[error("{0}")]
    Lexopt(#[from] lexopt::Error),

    #[error("{}: {source}", .path.to_string_lossy())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", .program.to_string_lossy())]
    Spawn {
        program: OsString,
        source: std::io::Error,
    },

    #[error(transparent)]
    IllegalOption(#[from] IllegalOption),
}

impl Error {
    #[inline]
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File { path: path.into(), source }
    }

    #[inline]
    pub fn spawn(program: impl Into<OsString>, source: std::io::Error) -> Self {
        Self::Spawn { program: program.into(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalArgument(_) |
            Self::MissingValue(_) |
            Self::MissingCommand |
            Self::Lexopt(_) => ErrorKind::ArgumentError,
            Self::File { .. } => ErrorKind::FileError,
            Self::Spawn { .. } => ErrorKind::SpawnError,
            Self::IllegalOption(_) => ErrorKind::OptionsError,
        }
    }
}
