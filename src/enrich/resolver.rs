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

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{Result, ZiError};

/// Google Knowledge Graph Search API entity endpoint.
pub const GOOGLE_KG_ENDPOINT: &str = "https://kgsearch.googleapis.com/v1/entities:search";

/// Maps an opaque entity identifier to a canonical display name.
pub trait ZiEntityResolver: std::fmt::Debug {
    /// Returns the display name, or `ResolutionFailure` when the identifier is unknown.
    fn resolve(&self, id: &str) -> Result<String>;
}

/// Extracts `itemListElement[0].result.name` from a KG search response.
pub fn parse_entity_name(body: &Value) -> Option<String> {
    body.get("itemListElement")?
        .get(0)?
        .get("result")?
        .get("name")?
        .as_str()
        .map(|name| name.to_string())
}

/// Entity resolver backed by the Google Knowledge Graph Search API.
///
/// The API key is read from `key_path` on every call.
#[derive(Debug, Clone)]
pub struct ZiGoogleKgResolver {
    client: reqwest::blocking::Client,
    endpoint: String,
    key_path: PathBuf,
}

impl ZiGoogleKgResolver {
    pub fn new(key_path: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: GOOGLE_KG_ENDPOINT.to_string(),
            key_path: key_path.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    fn read_key(&self) -> Result<String> {
        let key = std::fs::read_to_string(&self.key_path)?;
        Ok(key.trim().to_string())
    }
}

impl ZiEntityResolver for ZiGoogleKgResolver {
    fn resolve(&self, id: &str) -> Result<String> {
        let key = self.read_key().map_err(|e| {
            ZiError::resolution(
                id,
                format!("cannot read API key {}: {}", self.key_path.display(), e),
            )
        })?;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("ids", id), ("key", key.as_str())])
            .send()
            .map_err(|e| ZiError::resolution(id, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ZiError::resolution(
                id,
                format!("service returned {}", response.status()),
            ));
        }

        let body: Value = response
            .json()
            .map_err(|e| ZiError::resolution(id, format!("unreadable response: {}", e)))?;
        log::debug!("kg response for {}: {}", id, body);

        parse_entity_name(&body).ok_or_else(|| ZiError::resolution(id, "no matching entity"))
    }
}
