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

use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZiInputFormat {
    /// A JSON array, or a single object.
    Json,
    /// Objects written back to back with no separator.
    Concatenated,
    Unknown,
}

#[derive(Clone, Debug)]
pub struct ZiFormatDetector {
    sample_size: usize,
}

impl Default for ZiFormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ZiFormatDetector {
    pub fn new() -> Self {
        Self { sample_size: 8192 }
    }

    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    /// Corpus inputs are picked up by extension.
    pub fn is_corpus_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    /// Looks at the leading `sample_size` bytes of the content.
    pub fn detect_from_content(&self, content: &str) -> ZiInputFormat {
        let mut end = content.len().min(self.sample_size);
        while !content.is_char_boundary(end) {
            end -= 1;
        }
        let trimmed = content[..end].trim();

        if trimmed.starts_with('[') {
            return ZiInputFormat::Json;
        }
        if trimmed.starts_with('{') {
            if trimmed.contains("}\n{") || trimmed.contains("}\r\n{") || trimmed.contains("} {") {
                return ZiInputFormat::Concatenated;
            }
            return ZiInputFormat::Json;
        }
        ZiInputFormat::Unknown
    }
}
