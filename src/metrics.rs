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

use std::fmt;

use serde::Serialize;

use crate::operators::vote::ZiVote;

/// Counters collected while augmenting one corpus file.
#[derive(Clone, Debug, Serialize, Default, PartialEq)]
pub struct ZiAugmentStats {
    pub records: usize,
    pub uids_assigned: usize,
    pub snippets_normalized: usize,
    pub votes_yes: usize,
    pub votes_no: usize,
    pub votes_skip: usize,
    pub entities_resolved: usize,
    /// Failed resolutions that fell back to a URL-derived label.
    pub resolution_fallbacks: usize,
    /// Failed resolutions that fell back to the `needs_entry` sentinel.
    pub resolution_sentinels: usize,
    pub cross_references: usize,
    pub cross_reference_misses: usize,
}

impl ZiAugmentStats {
    pub fn record_vote(&mut self, vote: ZiVote) {
        match vote {
            ZiVote::Yes => self.votes_yes += 1,
            ZiVote::No => self.votes_no += 1,
            ZiVote::Skip => self.votes_skip += 1,
        }
    }

    /// Total resolution failures, however they were recovered.
    pub fn resolution_failures(&self) -> usize {
        self.resolution_fallbacks + self.resolution_sentinels
    }
}

impl fmt::Display for ZiAugmentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} records", self.records)?;
        if self.uids_assigned > 0 {
            write!(f, ", {} uids", self.uids_assigned)?;
        }
        if self.snippets_normalized > 0 {
            write!(f, ", {} snippets normalized", self.snippets_normalized)?;
        }
        if self.votes_yes + self.votes_no + self.votes_skip > 0 {
            write!(
                f,
                ", votes yes/no/skip {}/{}/{}",
                self.votes_yes, self.votes_no, self.votes_skip
            )?;
        }
        if self.entities_resolved + self.resolution_failures() > 0 {
            write!(
                f,
                ", {} entities resolved ({} fallback, {} needs_entry)",
                self.entities_resolved, self.resolution_fallbacks, self.resolution_sentinels
            )?;
        }
        if self.cross_references + self.cross_reference_misses > 0 {
            write!(
                f,
                ", {} cross-references ({} missing)",
                self.cross_references, self.cross_reference_misses
            )?;
        }
        Ok(())
    }
}
