// SPDX-License-Identifier: GPL-3.0-or-later
use std::error::Error as StdError;
use std::fmt;

/// The required inputs of a [`SpotPair`](crate::SpotPair).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Spot,
    FirstPoint,
    SecondPoint,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Spot => "fitted spot",
            Self::FirstPoint => "first point",
            Self::SecondPoint => "second point",
        })
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was absent when building a pair.
    InvalidArgument(Field),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The field that caused this error.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidArgument(field) => *field,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(field) => f.debug_tuple("InvalidArgument").field(field).finish(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidArgument(field) => write!(f, "invalid argument: missing {}", field),
        }
    }
}

impl StdError for Error {}
