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

//! # Data Writer Module
//!
//! Serializes a batch of relation records as one JSON array per file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::record::ZiRelationBatch;
use crate::relation::ZiRelationType;

/// `<relation><tag>.json`, e.g. `pob-augment_Oct-17-26.json`.
pub fn output_file_name(relation: ZiRelationType, tag: &str) -> Result<String> {
    if relation.is_error() {
        return Err(ZiError::validation(
            "refusing to name output for an unclassified relation",
        ));
    }
    Ok(format!("{}{}.json", relation.as_str(), tag))
}

/// Statistics about write operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ZiWriteStats {
    /// Total number of records written.
    pub records_written: usize,
    /// Total number of bytes written.
    pub bytes_written: usize,
}

/// Writes record batches as pretty-printed JSON arrays.
///
/// Output goes to a hidden temporary file beside the target and is renamed
/// into place, so a failed write never leaves a partial file at `path`.
#[derive(Debug, Default)]
pub struct ZiJsonWriter;

impl ZiJsonWriter {
    pub fn new() -> Self {
        Self
    }

    /// Writes `batch` to `path`, creating parent directories as needed.
    pub fn write(&mut self, batch: &ZiRelationBatch, path: &Path) -> Result<ZiWriteStats> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path(path);
        if let Err(err) = self.write_to_path(batch, &temp_path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(err);
        }
        std::fs::rename(&temp_path, path)?;

        let bytes_written = std::fs::metadata(path)
            .map(|metadata| metadata.len() as usize)
            .unwrap_or(0);
        Ok(ZiWriteStats {
            records_written: batch.len(),
            bytes_written,
        })
    }

    fn write_to_path(&self, batch: &ZiRelationBatch, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let serialized = serde_json::to_string_pretty(batch)
            .map_err(|e| ZiError::Io(format!("cannot serialize records: {}", e)))?;
        writer.write_all(serialized.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Generates temporary path for atomic writes.
    fn temp_path(&self, path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        let parent = path.parent().unwrap_or(Path::new("."));

        parent.join(format!(".{}.tmp", stem))
    }
}
