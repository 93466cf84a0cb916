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

//! # Zi GREC Operator Module
//!
//! Core transform trait for the augmentation pipeline.
//!
//! ## Operator Design
//!
//! Unlike a batch operator, every transform here works on one record at a
//! time. The pipeline walks the records and, for each one, runs the enabled
//! transforms in their fixed order before moving to the next record. A
//! transform therefore sees a record that already carries the results of
//! the transforms ahead of it (the cross-reference lookup sees resolved
//! names, log lines see the freshly assigned UID).
//!
//! ```rust
//! use zi_grec::operator::{ZiOperator, ZiRecordContext};
//! use zi_grec::record::ZiRelationRecord;
//! use zi_grec::errors::Result;
//!
//! #[derive(Debug)]
//! struct UppercaseSubject;
//!
//! impl ZiOperator for UppercaseSubject {
//!     fn name(&self) -> &'static str {
//!         "augment.uppercase"
//!     }
//!
//!     fn apply(&mut self, record: &mut ZiRelationRecord, _ctx: &mut ZiRecordContext) -> Result<()> {
//!         if let Some(sub) = record.sub.as_mut() {
//!             *sub = sub.to_uppercase();
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use crate::errors::{Result, ZiError};
use crate::metrics::ZiAugmentStats;
use crate::record::ZiRelationRecord;
use crate::relation::ZiRelationType;

/// Per-file state handed to every transform.
#[derive(Debug)]
pub struct ZiRecordContext<'a> {
    /// Relation of the file the record came from.
    pub relation: ZiRelationType,
    /// Counters for the file being processed.
    pub stats: &'a mut ZiAugmentStats,
}

/// Contract every augmentation transform fulfills.
pub trait ZiOperator: std::fmt::Debug {
    /// Unique, human-readable name for the operator.
    fn name(&self) -> &'static str;

    /// Mutates one record in place.
    ///
    /// Errors returned here end the run. Transforms whose failures are
    /// recoverable handle them internally and return `Ok(())`.
    fn apply(&mut self, record: &mut ZiRelationRecord, ctx: &mut ZiRecordContext) -> Result<()>;
}

/// Executes an operator, tagging any error with the operator name.
pub fn execute_operator(
    operator: &mut dyn ZiOperator,
    record: &mut ZiRelationRecord,
    ctx: &mut ZiRecordContext,
) -> Result<()> {
    operator.apply(record, ctx).map_err(|err| match err {
        ZiError::MissingField { .. } => err,
        other => ZiError::operator(operator.name(), other.to_string()),
    })
}
