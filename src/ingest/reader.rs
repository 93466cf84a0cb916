//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi GREC.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! you may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::errors::{Result, ZiError};
use crate::ingest::format::{ZiFormatDetector, ZiInputFormat};
use crate::record::{ZiRelationBatch, ZiRelationRecord};

fn object_boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"\}(\s+)\{").expect("boundary pattern is valid"))
}

/// Rewrites back-to-back JSON objects into a JSON array.
///
/// A comma is inserted wherever a `}` is followed by whitespace and then a
/// `{`, every backslash is dropped, and the result is wrapped in brackets.
/// This is a whole-text rewrite; it does not track string literals.
pub fn reformat_concatenated(content: &str) -> String {
    let separated = object_boundary().replace_all(content, "},$1{");
    let stripped: String = separated.chars().filter(|&ch| ch != '\\').collect();
    format!("[{}]", stripped)
}

/// Whole-file reader for corpus inputs.
#[derive(Clone, Debug, Default)]
pub struct ZiCorpusReader {
    reformat: bool,
    detector: ZiFormatDetector,
}

impl ZiCorpusReader {
    pub fn new() -> Self {
        Self {
            reformat: false,
            detector: ZiFormatDetector::new(),
        }
    }

    /// Enables the concatenated-object pre-pass.
    pub fn with_reformat(mut self, reformat: bool) -> Self {
        self.reformat = reformat;
        self
    }

    pub fn read_path(&self, path: &Path) -> Result<ZiRelationBatch> {
        let content = std::fs::read_to_string(path)?;
        self.read_str(&content, &path.to_string_lossy())
    }

    /// Parses file contents; `source_name` only labels errors and log lines.
    pub fn read_str(&self, content: &str, source_name: &str) -> Result<ZiRelationBatch> {
        let text = if self.reformat {
            reformat_concatenated(content)
        } else {
            if self.detector.detect_from_content(content) == ZiInputFormat::Concatenated {
                log::warn!(
                    "{} looks like concatenated JSON objects; consider enabling reformat",
                    source_name
                );
            }
            content.to_string()
        };

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| ZiError::malformed(source_name, e.to_string()))?;

        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| {
                    serde_json::from_value::<ZiRelationRecord>(item).map_err(|e| {
                        ZiError::malformed(source_name, format!("record {}: {}", idx, e))
                    })
                })
                .collect(),
            Value::Object(_) => {
                let record = serde_json::from_value(value)
                    .map_err(|e| ZiError::malformed(source_name, e.to_string()))?;
                Ok(vec![record])
            }
            _ => Err(ZiError::malformed(
                source_name,
                "JSON must be array or object",
            )),
        }
    }
}
