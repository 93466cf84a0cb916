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

//! # Zi GREC Record Module
//!
//! Data structures for a single relation claim of the Google Relation
//! Extraction Corpus.
//!
//! A raw corpus record looks like:
//!
//! ```json
//! {
//!   "pred": "/people/person/place_of_birth",
//!   "sub": "/m/026_tl9",
//!   "obj": "/m/02_286",
//!   "evidences": [{"url": "http://en.wikipedia.org/wiki/Sonny_Clark", "snippet": "..."}],
//!   "judgments": [{"rater": "11595942516201422884", "judgment": "yes"}]
//! }
//! ```
//!
//! Known fields are typed; everything else is kept in a flattened map so a
//! record survives a read/write cycle with all of its fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};

/// Passthrough fields not modelled explicitly.
pub type ZiExtraFields = Map<String, Value>;

/// One supporting evidence for a relation claim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiEvidence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(flatten)]
    pub extra: ZiExtraFields,
}

/// A single rater's vote on a relation claim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiJudgment {
    /// One of `"yes"`, `"no"` or `"skip"` in well-formed input.
    pub judgment: String,
    #[serde(flatten)]
    pub extra: ZiExtraFields,
}

impl ZiJudgment {
    pub fn new(judgment: impl Into<String>) -> Self {
        Self {
            judgment: judgment.into(),
            extra: ZiExtraFields::new(),
        }
    }
}

/// Fundamental data unit processed by the augmentation pipeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiRelationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidences: Option<Vec<ZiEvidence>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub judgments: Option<Vec<ZiJudgment>>,

    /// Generated identifier, `<tag>_<10 alphanumerics>`.
    #[serde(rename = "UID", default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Majority outcome of `judgments`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maj_vote: Option<String>,

    /// Subject identifier before entity resolution overwrote `sub`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<String>,

    /// Object identifier before entity resolution overwrote `obj`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbpedia_sub: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbpedia_obj: Option<String>,

    /// Fields such as `pred` that pass through untouched, written after the
    /// typed fields in their input order.
    #[serde(flatten)]
    pub extra: ZiExtraFields,
}

impl ZiRelationRecord {
    /// Constructs a record holding only a subject and object.
    pub fn new(sub: impl Into<String>, obj: impl Into<String>) -> Self {
        Self {
            sub: Some(sub.into()),
            obj: Some(obj.into()),
            ..Default::default()
        }
    }

    /// Attaches evidences to the record.
    pub fn with_evidences(mut self, evidences: Vec<ZiEvidence>) -> Self {
        self.evidences = Some(evidences);
        self
    }

    /// Attaches judgments to the record.
    pub fn with_judgments(mut self, judgments: Vec<ZiJudgment>) -> Self {
        self.judgments = Some(judgments);
        self
    }

    /// Returns the first evidence, failing when there is none.
    pub fn first_evidence_mut(&mut self) -> Result<&mut ZiEvidence> {
        self.evidences
            .as_mut()
            .and_then(|evidences| evidences.first_mut())
            .ok_or_else(|| ZiError::missing_field("evidences"))
    }

    /// URL of the first evidence, used as the subject's fallback label source.
    pub fn first_evidence_url(&self) -> Option<&str> {
        self.evidences
            .as_ref()
            .and_then(|evidences| evidences.first())
            .and_then(|evidence| evidence.url.as_deref())
    }

    /// Identifier for log lines; falls back to the subject when no UID was assigned.
    pub fn log_label(&self) -> &str {
        self.uid
            .as_deref()
            .or(self.sub.as_deref())
            .unwrap_or("<unnamed>")
    }
}

/// Convenience alias for working on batches of records.
pub type ZiRelationBatch = Vec<ZiRelationRecord>;
