//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi GREC.
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

//! # Zi GREC Error Module
//!
//! This module defines the error types used throughout the corpus
//! augmentation tool.
//!
//! ## Error Categories
//!
//! - **MissingDirectory**: The configured input directory does not exist
//! - **MalformedInput**: A corpus file could not be parsed as JSON records
//! - **MissingField**: A record lacks a sub-structure a transform requires
//! - **ResolutionFailure**: The entity resolver could not name an identifier
//! - **CrossReferenceFailure**: The reference index had no match for a name
//! - **Http**: Transport failures and non-success responses
//! - **Validation**: Invalid configuration values
//! - **Operator**: A transform failed; carries the transform name
//! - **Io**: Filesystem errors
//!
//! Resolution and cross-reference failures are recovered inside their
//! transforms and never reach the caller of the corpus driver.

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zi GREC.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zi GREC.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// The input directory was not found.
    #[error("{0} not found")]
    MissingDirectory(String),

    /// A corpus file did not parse as a JSON array or object of records.
    #[error("malformed input in '{source_name}': {message}")]
    MalformedInput { source_name: String, message: String },

    /// A record is missing a field that an enabled transform needs.
    #[error("record is missing field '{field}'")]
    MissingField { field: String },

    /// The entity resolver could not produce a display name.
    #[error("failed to resolve entity '{id}': {message}")]
    ResolutionFailure { id: String, message: String },

    /// The reference index returned no usable reference.
    #[error("no cross-reference for '{name}': {message}")]
    CrossReferenceFailure { name: String, message: String },

    /// Transport errors and non-success HTTP responses.
    #[error("http error: {0}")]
    Http(String),

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Any failure raised by a transform implementation.
    #[error("operator '{operator}' failed: {message}")]
    Operator { operator: String, message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for ZiError {
    fn from(err: reqwest::Error) -> Self {
        ZiError::Http(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct parse errors for a named input.
    pub fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::MalformedInput {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct missing-field errors.
    pub fn missing_field<T: Into<String>>(field: T) -> Self {
        ZiError::MissingField {
            field: field.into(),
        }
    }

    pub fn resolution(id: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::ResolutionFailure {
            id: id.into(),
            message: message.into(),
        }
    }

    pub fn cross_reference(name: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::CrossReferenceFailure {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct operator errors.
    pub fn operator(name: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Operator {
            operator: name.into(),
            message: message.into(),
        }
    }

    /// Whether the error ends the whole run rather than a single field.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ZiError::ResolutionFailure { .. } | ZiError::CrossReferenceFailure { .. }
        )
    }
}
