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

use serde_json::Value;

use crate::errors::{Result, ZiError};

/// DBpedia Lookup search endpoint.
pub const DBPEDIA_LOOKUP_ENDPOINT: &str = "https://lookup.dbpedia.org/api/search";

/// Maps a display name to candidate reference identifiers, best first.
pub trait ZiReferenceIndex: std::fmt::Debug {
    fn lookup(&self, name: &str) -> Result<Vec<String>>;
}

/// Collects reference URIs from a lookup response.
///
/// Understands the current `docs[].resource[0]` layout and the older
/// `results[].uri` layout of the keyword search API.
pub fn parse_references(body: &Value) -> Vec<String> {
    if let Some(docs) = body.get("docs").and_then(Value::as_array) {
        return docs
            .iter()
            .filter_map(|doc| match doc.get("resource") {
                Some(Value::Array(resources)) => resources.first().and_then(Value::as_str),
                Some(Value::String(resource)) => Some(resource.as_str()),
                _ => None,
            })
            .map(|uri| uri.to_string())
            .collect();
    }

    body.get("results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .filter_map(|result| result.get("uri").and_then(Value::as_str))
                .map(|uri| uri.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Reference index backed by the DBpedia Lookup service.
#[derive(Debug, Clone)]
pub struct ZiDbpediaLookup {
    client: reqwest::blocking::Client,
    endpoint: String,
    max_results: usize,
}

impl Default for ZiDbpediaLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl ZiDbpediaLookup {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: DBPEDIA_LOOKUP_ENDPOINT.to_string(),
            max_results: 1,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.max(1);
        self
    }
}

impl ZiReferenceIndex for ZiDbpediaLookup {
    fn lookup(&self, name: &str) -> Result<Vec<String>> {
        let max_results = self.max_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[
                ("query", name),
                ("format", "JSON"),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .map_err(|e| ZiError::cross_reference(name, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ZiError::cross_reference(
                name,
                format!("service returned {}", response.status()),
            ));
        }

        let body: Value = response
            .json()
            .map_err(|e| ZiError::cross_reference(name, format!("unreadable response: {}", e)))?;
        Ok(parse_references(&body))
    }
}
