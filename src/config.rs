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

//! # Zi GREC Configuration
//!
//! Every setting of an augmentation run lives in [`ZiAugmentConfig`]. The
//! binary builds one from an optional JSON or YAML file and then applies
//! command-line overrides; library callers construct it directly. Nothing
//! is read from process-wide state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::enrich::{DBPEDIA_LOOKUP_ENDPOINT, GOOGLE_KG_ENDPOINT};
use crate::errors::{Result, ZiError};

pub const DEFAULT_INPUT_DIR: &str = "../../../data/raw/google-relation-extraction-corpus-db/";
pub const DEFAULT_OUTPUT_DIR: &str = "../../../data/interim/grc_processed/";
pub const DEFAULT_API_KEY_PATH: &str = "../google_api";

/// `-augment_<Mon-dd-yy>` for today's local date, e.g. `-augment_Oct-17-26`.
pub fn default_output_tag() -> String {
    format!("-augment_{}", chrono::Local::now().format("%b-%d-%y"))
}

/// Settings for one augmentation run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZiAugmentConfig {
    /// Rewrite concatenated JSON objects into an array before parsing.
    pub reformat: bool,
    /// Normalize the first evidence snippet to ASCII.
    pub ascii: bool,
    /// Assign a `UID` to every record.
    pub unique_ids: bool,
    /// Store the majority vote under `maj_vote`.
    pub majority_vote: bool,
    /// Replace `sub`/`obj` identifiers with names from the entity resolver.
    pub resolve_entities: bool,
    /// Attach `dbpedia_sub`/`dbpedia_obj` from the reference index.
    pub cross_reference: bool,
    /// Keep replaced identifiers under `sub_id`/`obj_id`.
    pub keep_original_ids: bool,

    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Appended to the relation name to form the output file stem.
    pub output_tag: String,

    /// File holding the entity resolver API key, read on every lookup.
    pub api_key_path: PathBuf,
    pub resolver_endpoint: String,
    pub index_endpoint: String,

    /// Seed for identifier generation; entropy when absent.
    pub seed: Option<u64>,
}

/// Command-line settings layered over a loaded [`ZiAugmentConfig`].
///
/// Toggles can only switch a feature on; `None` leaves the loaded value alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZiConfigOverrides {
    pub reformat: bool,
    pub ascii: bool,
    pub unique_ids: bool,
    pub majority_vote: bool,
    pub resolve_entities: bool,
    pub cross_reference: bool,
    /// Set by `--no-keep-ids`; only ever turns retention off.
    pub drop_original_ids: bool,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub output_tag: Option<String>,
    pub api_key_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for ZiAugmentConfig {
    fn default() -> Self {
        Self {
            reformat: false,
            ascii: false,
            unique_ids: false,
            majority_vote: false,
            resolve_entities: false,
            cross_reference: false,
            keep_original_ids: true,
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            output_tag: default_output_tag(),
            api_key_path: PathBuf::from(DEFAULT_API_KEY_PATH),
            resolver_endpoint: GOOGLE_KG_ENDPOINT.to_string(),
            index_endpoint: DBPEDIA_LOOKUP_ENDPOINT.to_string(),
            seed: None,
        }
    }
}

impl ZiAugmentConfig {
    /// Loads a config file; `.yaml`/`.yml` parse as YAML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let config: Self = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| {
                ZiError::validation(format!("invalid config {}: {}", path.display(), e))
            })?,
            _ => serde_json::from_str(&content).map_err(|e| {
                ZiError::validation(format!("invalid config {}: {}", path.display(), e))
            })?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output_tag.contains('/') || self.output_tag.contains('\\') {
            return Err(ZiError::validation(
                "output tag may not contain path separators",
            ));
        }
        if self.resolve_entities && self.resolver_endpoint.trim().is_empty() {
            return Err(ZiError::validation("resolver endpoint may not be empty"));
        }
        if self.cross_reference && self.index_endpoint.trim().is_empty() {
            return Err(ZiError::validation("index endpoint may not be empty"));
        }
        Ok(())
    }

    /// Applies command-line overrides and re-validates the result.
    pub fn apply_overrides(mut self, overrides: ZiConfigOverrides) -> Result<Self> {
        self.reformat |= overrides.reformat;
        self.ascii |= overrides.ascii;
        self.unique_ids |= overrides.unique_ids;
        self.majority_vote |= overrides.majority_vote;
        self.resolve_entities |= overrides.resolve_entities;
        self.cross_reference |= overrides.cross_reference;
        if overrides.drop_original_ids {
            self.keep_original_ids = false;
        }
        if let Some(dir) = overrides.input_dir {
            self.input_dir = dir;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(tag) = overrides.output_tag {
            self.output_tag = tag;
        }
        if let Some(path) = overrides.api_key_path {
            self.api_key_path = path;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }

    /// Whether any record transform is switched on.
    pub fn has_transforms(&self) -> bool {
        self.unique_ids
            || self.ascii
            || self.majority_vote
            || self.resolve_entities
            || self.cross_reference
    }
}
