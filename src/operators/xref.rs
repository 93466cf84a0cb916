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

use crate::enrich::ZiReferenceIndex;
use crate::errors::{Result, ZiError};
use crate::operator::{ZiOperator, ZiRecordContext};
use crate::record::ZiRelationRecord;

/// First reference the index returns for `name`, or `None` on a miss or
/// a failed lookup.
pub fn first_reference(index: &dyn ZiReferenceIndex, name: &str) -> Option<String> {
    let result = index.lookup(name).and_then(|references| {
        references
            .into_iter()
            .next()
            .ok_or_else(|| ZiError::cross_reference(name, "no results"))
    });
    match result {
        Ok(reference) => Some(reference),
        Err(err) => {
            log::debug!("{}", err);
            None
        }
    }
}

/// Attaches `dbpedia_sub` / `dbpedia_obj` from a reference index.
///
/// Each field is looked up independently; a field without a match is left
/// out of the record.
#[derive(Debug)]
pub struct ZiCrossReference {
    index: Box<dyn ZiReferenceIndex>,
}

impl ZiCrossReference {
    pub fn new(index: Box<dyn ZiReferenceIndex>) -> Self {
        Self { index }
    }

    fn lookup_into(&self, name: Option<&str>, ctx: &mut ZiRecordContext) -> Option<String> {
        let reference = name.and_then(|name| first_reference(self.index.as_ref(), name));
        if reference.is_some() {
            ctx.stats.cross_references += 1;
        } else {
            ctx.stats.cross_reference_misses += 1;
        }
        reference
    }
}

impl ZiOperator for ZiCrossReference {
    fn name(&self) -> &'static str {
        "augment.xref"
    }

    fn apply(&mut self, record: &mut ZiRelationRecord, ctx: &mut ZiRecordContext) -> Result<()> {
        record.dbpedia_sub = self.lookup_into(record.sub.as_deref(), ctx);
        record.dbpedia_obj = self.lookup_into(record.obj.as_deref(), ctx);
        Ok(())
    }
}
