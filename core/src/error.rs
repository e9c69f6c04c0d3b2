// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;
use thiserror::Error;

/// The error type for cldsign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration is malformed (bad connection string, bad percent encoding, etc.)
    ConfigInvalid,

    /// No cloud name is available to qualify the URL
    CloudNameMissing,

    /// The api key or api secret required for signing is absent
    CredentialMissing,

    /// Input of a request cannot be used (missing required fields, etc.)
    RequestInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error is caused by a missing cloud name or credential
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::CloudNameMissing | ErrorKind::CredentialMissing
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a cloud name missing error
    pub fn cloud_name_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CloudNameMissing, message)
    }

    /// Create a credential missing error
    pub fn credential_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialMissing, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::CloudNameMissing => write!(f, "missing cloud name"),
            ErrorKind::CredentialMissing => write!(f, "missing credential"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::config_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_kind() {
        let err = Error::credential_missing("must supply api_key");
        assert_eq!(err.to_string(), "missing credential: must supply api_key");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_credential_error_classification() {
        let cases = vec![
            (Error::config_invalid("x"), false),
            (Error::cloud_name_missing("x"), true),
            (Error::credential_missing("x"), true),
            (Error::request_invalid("x"), false),
            (Error::unexpected("x"), false),
        ];

        for (err, expected) in cases {
            assert_eq!(err.is_credential_error(), expected, "kind: {:?}", err.kind());
        }
    }

    #[test]
    fn test_with_source() {
        let err = Error::config_invalid("bad connection string")
            .with_source(anyhow::anyhow!("invalid percent sequence"));
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(
            err.source().map(|e| e.to_string()).as_deref(),
            Some("invalid percent sequence")
        );
    }
}
