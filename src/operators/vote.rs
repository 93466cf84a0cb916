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

//! Majority vote over crowd judgments.
//!
//! Ties are not reported as ties: they go to `yes` before `no` before
//! `skip`. A 2/2/0 split is `yes`, a 1/1/1 split is `yes`, a 0/2/2 split is
//! `no`, and an empty tally is `skip`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::operator::{ZiOperator, ZiRecordContext};
use crate::record::{ZiJudgment, ZiRelationRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiVote {
    Yes,
    No,
    Skip,
}

impl ZiVote {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZiVote::Yes => "yes",
            ZiVote::No => "no",
            ZiVote::Skip => "skip",
        }
    }

    /// Parses a judgment value; anything but the three literals is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "yes" => Some(ZiVote::Yes),
            "no" => Some(ZiVote::No),
            "skip" => Some(ZiVote::Skip),
            _ => None,
        }
    }
}

impl fmt::Display for ZiVote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZiVoteCounts {
    pub yes: usize,
    pub no: usize,
    pub skip: usize,
}

impl ZiVoteCounts {
    pub fn new(yes: usize, no: usize, skip: usize) -> Self {
        Self { yes, no, skip }
    }

    /// Counts judgments by value. Unrecognized values are ignored.
    pub fn from_judgments(judgments: &[ZiJudgment]) -> Self {
        let mut counts = Self::default();
        for vote in judgments.iter().filter_map(|j| ZiVote::parse(&j.judgment)) {
            match vote {
                ZiVote::Yes => counts.yes += 1,
                ZiVote::No => counts.no += 1,
                ZiVote::Skip => counts.skip += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.yes + self.no + self.skip
    }

    /// Applies the yes > no > skip precedence. An empty tally is `skip`;
    /// the comparisons alone would pick `yes` there.
    pub fn majority(&self) -> ZiVote {
        if self.total() == 0 {
            ZiVote::Skip
        } else if self.yes >= self.no && self.yes >= self.skip {
            ZiVote::Yes
        } else if self.no >= self.yes && self.no >= self.skip {
            ZiVote::No
        } else {
            ZiVote::Skip
        }
    }
}

/// Majority outcome of a judgment list.
pub fn tally_votes(judgments: &[ZiJudgment]) -> ZiVote {
    ZiVoteCounts::from_judgments(judgments).majority()
}

/// Stores the majority outcome under `maj_vote`.
#[derive(Debug, Default)]
pub struct ZiMajorityVote;

impl ZiMajorityVote {
    pub fn new() -> Self {
        Self
    }
}

impl ZiOperator for ZiMajorityVote {
    fn name(&self) -> &'static str {
        "augment.majority_vote"
    }

    fn apply(&mut self, record: &mut ZiRelationRecord, ctx: &mut ZiRecordContext) -> Result<()> {
        let judgments = record
            .judgments
            .as_deref()
            .ok_or_else(|| ZiError::missing_field("judgments"))?;
        let vote = tally_votes(judgments);
        record.maj_vote = Some(vote.as_str().to_string());
        ctx.stats.record_vote(vote);
        Ok(())
    }
}
