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

use crate::enrich::ZiEntityResolver;
use crate::errors::{Result, ZiError};
use crate::operator::{ZiOperator, ZiRecordContext};
use crate::record::ZiRelationRecord;

/// Written in place of a name the resolver could not produce.
pub const NEEDS_ENTRY: &str = "needs_entry";

/// Derives a readable label from the last path segment of a URL.
///
/// `http://en.wikipedia.org/wiki/John_Smith` gives `John Smith`;
/// underscores become spaces, periods and commas are removed.
pub fn fallback_label(source: &str) -> Option<String> {
    let segment = source.trim_end_matches('/').rsplit('/').next()?;
    let label: String = segment
        .chars()
        .filter(|ch| *ch != '.' && *ch != ',')
        .map(|ch| if ch == '_' { ' ' } else { ch })
        .collect();
    let label = label.trim();
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}

/// Replaces `sub` (and `obj`, for entity-valued relations) with display
/// names from an entity resolver.
///
/// Resolution failures never fail the record: the subject falls back to a
/// label derived from the first evidence URL, and anything without a usable
/// fallback becomes [`NEEDS_ENTRY`].
#[derive(Debug)]
pub struct ZiEntityResolution {
    resolver: Box<dyn ZiEntityResolver>,
    keep_original_ids: bool,
}

impl ZiEntityResolution {
    pub fn new(resolver: Box<dyn ZiEntityResolver>) -> Self {
        Self {
            resolver,
            keep_original_ids: true,
        }
    }

    /// Whether to copy the original identifiers to `sub_id` / `obj_id`.
    pub fn with_keep_original_ids(mut self, keep: bool) -> Self {
        self.keep_original_ids = keep;
        self
    }

    fn resolve_or_fallback(
        &self,
        id: &str,
        fallback_source: Option<&str>,
        role: &str,
        record_label: &str,
        ctx: &mut ZiRecordContext,
    ) -> String {
        match self.resolver.resolve(id) {
            Ok(name) => {
                ctx.stats.entities_resolved += 1;
                name
            }
            Err(err) => {
                log::error!("{} failed to fetch {}: {}", record_label, role, err);
                match fallback_source.and_then(fallback_label) {
                    Some(label) => {
                        ctx.stats.resolution_fallbacks += 1;
                        label
                    }
                    None => {
                        ctx.stats.resolution_sentinels += 1;
                        NEEDS_ENTRY.to_string()
                    }
                }
            }
        }
    }
}

impl ZiOperator for ZiEntityResolution {
    fn name(&self) -> &'static str {
        "augment.entity"
    }

    fn apply(&mut self, record: &mut ZiRelationRecord, ctx: &mut ZiRecordContext) -> Result<()> {
        let record_label = record.log_label().to_string();

        let sub = record
            .sub
            .clone()
            .ok_or_else(|| ZiError::missing_field("sub"))?;
        let fallback = record.first_evidence_url().map(|url| url.to_string());
        let name = self.resolve_or_fallback(&sub, fallback.as_deref(), "subject", &record_label, ctx);
        if self.keep_original_ids {
            record.sub_id = Some(sub);
        }
        record.sub = Some(name);

        if ctx.relation.object_is_entity() {
            let obj = record
                .obj
                .clone()
                .ok_or_else(|| ZiError::missing_field("obj"))?;
            let name = self.resolve_or_fallback(&obj, None, "object", &record_label, ctx);
            if self.keep_original_ids {
                record.obj_id = Some(obj);
            }
            record.obj = Some(name);
        }

        Ok(())
    }
}
