//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Zi Table Error Module
//!
//! This module defines the error types used by every table transformer.
//!
//! Every error aborts the whole transformer call. Errors raised by collaborators
//! (table sources, expression resolvers) are propagated as-is.
//!
//! ## Usage
//!
//! ```rust
//! use zitable::errors::{Result, ZiError};
//!
//! fn require(value: Option<&str>) -> Result<&str> {
//!     value.ok_or_else(|| ZiError::configuration("'times' is not set"))
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zi Table.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi Table.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// Missing, conflicting or absent properties.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A column or row referenced by name/position that does not exist.
    #[error("referential error: {message}")]
    Referential { message: String },

    /// Malformed values: ranges, numbers, booleans, regexes, table text.
    #[error("format error: {message}")]
    Format { message: String },

    /// Count and set-shape violations.
    #[error("cardinality error: {message}")]
    Cardinality { message: String },

    /// Errors originating from filesystem or other table sources.
    #[error("io error: {0}")]
    Io(String),

    /// Wrapper for serde-style deserialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Failures reported by an expression resolver.
    #[error("resolution error: {0}")]
    Resolution(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct configuration errors.
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        ZiError::Configuration {
            message: message.into(),
        }
    }

    /// Helper to construct referential errors.
    pub fn referential<T: Into<String>>(message: T) -> Self {
        ZiError::Referential {
            message: message.into(),
        }
    }

    /// Helper to construct format errors.
    pub fn format<T: Into<String>>(message: T) -> Self {
        ZiError::Format {
            message: message.into(),
        }
    }

    /// Helper to construct cardinality errors.
    pub fn cardinality<T: Into<String>>(message: T) -> Self {
        ZiError::Cardinality {
            message: message.into(),
        }
    }

    /// Helper to construct resolution errors.
    pub fn resolution<T: Into<String>>(message: T) -> Self {
        ZiError::Resolution(message.into())
    }

    /// Message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            ZiError::Configuration { message }
            | ZiError::Referential { message }
            | ZiError::Format { message }
            | ZiError::Cardinality { message } => message,
            ZiError::Io(message) | ZiError::Serde(message) | ZiError::Resolution(message) => {
                message
            }
        }
    }
}
