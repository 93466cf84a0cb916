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

use rand::distributions::Alphanumeric;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::errors::Result;
use crate::operator::{ZiOperator, ZiRecordContext};
use crate::record::ZiRelationRecord;
use crate::relation::ZiRelationType;

/// Length of the random part of a generated identifier.
pub const UID_RANDOM_LEN: usize = 10;

/// Builds `<tag>_<size alphanumerics>` for a relation, e.g. `pob_3jf8jnD8aq`.
///
/// Characters are drawn uniformly with replacement from `[A-Za-z0-9]`.
/// Nothing checks for collisions with earlier identifiers.
pub fn generate_id<R: Rng + ?Sized>(relation: ZiRelationType, size: usize, rng: &mut R) -> String {
    let hash: String = (0..size)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect();
    format!("{}_{}", relation.uid_tag(), hash)
}

/// Assigns a fresh `UID` to every record, replacing any existing one.
#[derive(Debug)]
pub struct ZiAssignUid {
    rng: SmallRng,
}

impl ZiAssignUid {
    /// Seeded generator; the same seed yields the same identifier sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl ZiOperator for ZiAssignUid {
    fn name(&self) -> &'static str {
        "augment.uid"
    }

    fn apply(&mut self, record: &mut ZiRelationRecord, ctx: &mut ZiRecordContext) -> Result<()> {
        record.uid = Some(generate_id(ctx.relation, UID_RANDOM_LEN, &mut self.rng));
        ctx.stats.uids_assigned += 1;
        Ok(())
    }
}
