// SPDX-License-Identifier: MPL-2.0
//! Errors of the settings layer.
//!
//! Toast and banner operations are in-memory transitions and cannot fail;
//! only reading or writing `settings.toml` produces an [`Error`].

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The settings file could not be read or written.
    Io(String),
    /// The settings file is not valid TOML or has fields of the wrong type.
    InvalidSettings(String),
    /// The in-memory settings could not be rendered as TOML.
    Serialize(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(reason) => write!(f, "settings file unavailable: {reason}"),
            Error::InvalidSettings(reason) => write!(f, "invalid settings file: {reason}"),
            Error::Serialize(reason) => write!(f, "settings could not be written: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::InvalidSettings(err.message().to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
