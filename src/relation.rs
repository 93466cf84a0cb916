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

//! Relation-type classification of corpus files.
//!
//! The corpus ships one file per relation, and the relation is only
//! recoverable from the file name (`20130403-place_of_birth.json`).

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The five GREC relations plus an explicit sentinel for unknown files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZiRelationType {
    Education,
    Institution,
    DateOfBirth,
    PlaceOfBirth,
    PlaceOfDeath,
    /// No pattern matched. Never used to build an output name.
    Error,
}

/// Substring patterns in priority order; the first hit wins.
const PATTERNS: &[(&[&str], ZiRelationType)] = &[
    (&["education"], ZiRelationType::Education),
    (&["institution"], ZiRelationType::Institution),
    (&["date_of_birth", "dob"], ZiRelationType::DateOfBirth),
    (&["place_of_birth", "pob"], ZiRelationType::PlaceOfBirth),
    (&["place_of_death", "pod"], ZiRelationType::PlaceOfDeath),
];

impl ZiRelationType {
    /// Classifies a file name by substring match.
    pub fn from_file_name(name: &str) -> Self {
        PATTERNS
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| name.contains(needle)))
            .map(|(_, relation)| *relation)
            .unwrap_or(ZiRelationType::Error)
    }

    /// Classifies a path by its final component.
    pub fn from_path(path: &Path) -> Self {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(Self::from_file_name)
            .unwrap_or(ZiRelationType::Error)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZiRelationType::Education => "education",
            ZiRelationType::Institution => "institution",
            ZiRelationType::DateOfBirth => "dob",
            ZiRelationType::PlaceOfBirth => "pob",
            ZiRelationType::PlaceOfDeath => "pod",
            ZiRelationType::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ZiRelationType::Error)
    }

    /// Prefix used in generated identifiers: short names are kept whole,
    /// longer ones are cut to their first character.
    pub fn uid_tag(&self) -> &'static str {
        let name = self.as_str();
        if name.len() < 4 {
            name
        } else {
            &name[..1]
        }
    }

    /// Whether the object of this relation is a knowledge-base entity.
    /// Dates of birth carry a literal date as object.
    pub fn object_is_entity(&self) -> bool {
        !matches!(self, ZiRelationType::DateOfBirth)
    }
}

impl fmt::Display for ZiRelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
