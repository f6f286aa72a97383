// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by search backends.
//!
//! The local engine never fails on valid input. Everything here comes from
//! the remote side, configuration, or the tool-call boundary. The enum is
//! `Clone` because one in-flight request hands its outcome to every caller
//! waiting on it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("search endpoint returned HTTP {0}")]
    Status(u16),

    #[error("malformed search response: {0}")]
    Decode(String),

    /// The caller's cancellation token fired. Never shown to users.
    #[error("search cancelled")]
    Cancelled,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(String),

    #[error("invalid tool arguments: {0}")]
    InvalidArguments(String),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
