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

use crate::config::ZiAugmentConfig;
use crate::enrich::{
    ZiDbpediaLookup, ZiEntityResolver, ZiGoogleKgResolver, ZiReferenceIndex,
};
use crate::errors::{Result, ZiError};
use crate::metrics::ZiAugmentStats;
use crate::operator::{execute_operator, ZiOperator, ZiRecordContext};
use crate::operators::{
    ZiAsciiSnippet, ZiAssignUid, ZiCrossReference, ZiEntityResolution, ZiMajorityVote,
};
use crate::record::ZiRelationBatch;
use crate::relation::ZiRelationType;

/// Linear pipeline of record transforms.
///
/// Each record passes through every stage before the next record starts.
#[derive(Debug)]
pub struct ZiPipeline {
    stages: Vec<Box<dyn ZiOperator>>,
}

impl ZiPipeline {
    /// Constructs a pipeline from a list of operators, kept in the given order.
    pub fn new(stages: Vec<Box<dyn ZiOperator>>) -> Self {
        ZiPipeline { stages }
    }

    /// Names of the configured stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage over every record of one file.
    pub fn run(
        &mut self,
        mut batch: ZiRelationBatch,
        relation: ZiRelationType,
    ) -> Result<(ZiRelationBatch, ZiAugmentStats)> {
        if relation.is_error() {
            return Err(ZiError::validation(
                "cannot augment records of an unclassified relation",
            ));
        }

        let mut stats = ZiAugmentStats {
            records: batch.len(),
            ..Default::default()
        };
        for (idx, record) in batch.iter_mut().enumerate() {
            let mut ctx = ZiRecordContext {
                relation,
                stats: &mut stats,
            };
            for stage in self.stages.iter_mut() {
                execute_operator(stage.as_mut(), record, &mut ctx).map_err(|err| {
                    log::error!("record {} failed in {}: {}", idx, stage.name(), err);
                    err
                })?;
            }
        }
        Ok((batch, stats))
    }
}

/// Assembles the transform stages selected by a [`ZiAugmentConfig`].
///
/// Stage order is fixed regardless of the order toggles are set in:
/// identifiers, ASCII snippets, majority vote, entity resolution,
/// cross-reference lookup.
#[derive(Debug, Default)]
pub struct ZiPipelineBuilder {
    unique_ids: bool,
    ascii: bool,
    majority_vote: bool,
    resolve_entities: bool,
    cross_reference: bool,
    keep_original_ids: bool,
    seed: Option<u64>,
    resolver: Option<Box<dyn ZiEntityResolver>>,
    index: Option<Box<dyn ZiReferenceIndex>>,
}

impl ZiPipelineBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            keep_original_ids: true,
            ..Default::default()
        }
    }

    /// Creates a builder with toggles, seed and live collaborators taken from `config`.
    pub fn from_config(config: &ZiAugmentConfig) -> Self {
        let mut builder = Self::new()
            .unique_ids(config.unique_ids)
            .ascii(config.ascii)
            .majority_vote(config.majority_vote)
            .keep_original_ids(config.keep_original_ids);
        builder.seed = config.seed;
        if config.resolve_entities {
            builder = builder.resolver(Box::new(
                ZiGoogleKgResolver::new(config.api_key_path.clone())
                    .with_endpoint(config.resolver_endpoint.clone()),
            ));
        }
        if config.cross_reference {
            builder = builder.reference_index(Box::new(
                ZiDbpediaLookup::new().with_endpoint(config.index_endpoint.clone()),
            ));
        }
        builder
    }

    pub fn unique_ids(mut self, enabled: bool) -> Self {
        self.unique_ids = enabled;
        self
    }

    pub fn ascii(mut self, enabled: bool) -> Self {
        self.ascii = enabled;
        self
    }

    pub fn majority_vote(mut self, enabled: bool) -> Self {
        self.majority_vote = enabled;
        self
    }

    pub fn keep_original_ids(mut self, keep: bool) -> Self {
        self.keep_original_ids = keep;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables entity resolution through `resolver`.
    pub fn resolver(mut self, resolver: Box<dyn ZiEntityResolver>) -> Self {
        self.resolve_entities = true;
        self.resolver = Some(resolver);
        self
    }

    /// Enables cross-reference lookup through `index`.
    pub fn reference_index(mut self, index: Box<dyn ZiReferenceIndex>) -> Self {
        self.cross_reference = true;
        self.index = Some(index);
        self
    }

    pub fn build(self) -> ZiPipeline {
        let mut stages: Vec<Box<dyn ZiOperator>> = Vec::new();

        if self.unique_ids {
            let uid = match self.seed {
                Some(seed) => ZiAssignUid::new(seed),
                None => ZiAssignUid::from_entropy(),
            };
            stages.push(Box::new(uid));
        }
        if self.ascii {
            stages.push(Box::new(ZiAsciiSnippet::new()));
        }
        if self.majority_vote {
            stages.push(Box::new(ZiMajorityVote::new()));
        }
        if let Some(resolver) = self.resolver.filter(|_| self.resolve_entities) {
            stages.push(Box::new(
                ZiEntityResolution::new(resolver).with_keep_original_ids(self.keep_original_ids),
            ));
        }
        if let Some(index) = self.index.filter(|_| self.cross_reference) {
            stages.push(Box::new(ZiCrossReference::new(index)));
        }

        ZiPipeline::new(stages)
    }
}
