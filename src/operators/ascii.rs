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

use unicode_normalization::UnicodeNormalization;

use crate::errors::{Result, ZiError};
use crate::operator::{ZiOperator, ZiRecordContext};
use crate::record::ZiRelationRecord;

/// NFKD-decomposes `text` and drops everything outside 7-bit ASCII.
///
/// Accents fall away (`café` → `cafe`), ligatures expand (`ﬁ` → `fi`),
/// and characters without an ASCII decomposition disappear.
pub fn to_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Rewrites the snippet of the first evidence as plain ASCII.
#[derive(Debug, Default)]
pub struct ZiAsciiSnippet;

impl ZiAsciiSnippet {
    pub fn new() -> Self {
        Self
    }
}

impl ZiOperator for ZiAsciiSnippet {
    fn name(&self) -> &'static str {
        "augment.ascii"
    }

    fn apply(&mut self, record: &mut ZiRelationRecord, ctx: &mut ZiRecordContext) -> Result<()> {
        let evidence = record.first_evidence_mut()?;
        let snippet = evidence
            .snippet
            .as_mut()
            .ok_or_else(|| ZiError::missing_field("evidences[0].snippet"))?;
        *snippet = to_ascii(snippet);
        ctx.stats.snippets_normalized += 1;
        Ok(())
    }
}
