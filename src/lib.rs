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

//! # Zi GREC Library
//!
//! Download and augmentation of the Google Relation Extraction Corpus
//! (GREC). The corpus holds crowd-judged relation claims (education,
//! institution, date/place of birth, place of death) extracted from
//! Wikipedia; this crate turns the raw archive files into cleaned,
//! identifier-bearing, vote-tallied and optionally entity-resolved JSON.
//!
//! ## Module Overview
//!
//! - **record**: Relation records and their evidences and judgments
//! - **relation**: Relation-type classification from file names
//! - **ingest**: Whole-file parsing, including the concatenated-object format
//! - **operator**: The per-record transform trait
//! - **operators**: Identifier, ASCII, majority vote, entity and cross-reference transforms
//! - **enrich**: Entity resolver and reference index collaborators
//! - **pipeline**: Fixed-order composition of the enabled transforms
//! - **export**: JSON array output
//! - **corpus**: Directory driver tying reader, pipeline and writer together
//! - **download**: Fetching the raw corpus files
//! - **config**: Run configuration
//! - **metrics**: Per-file augmentation counters
//!
//! ## Quick Start
//!
//! ```ignore
//! use zi_grec::{ZiAugmentConfig, ZiCorpusAugmenter};
//!
//! let config = ZiAugmentConfig {
//!     reformat: true,
//!     unique_ids: true,
//!     majority_vote: true,
//!     input_dir: "grec/".into(),
//!     output_dir: "grec_processed/".into(),
//!     ..Default::default()
//! };
//! let report = ZiCorpusAugmenter::new(config)?.run()?;
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, ZiError>`. Entity-resolution and
//! cross-reference misses are absorbed by their transforms, so a run either
//! fails on a missing directory, unreadable input or missing record field,
//! or writes every record it read.

pub mod config;
pub mod corpus;
pub mod download;
pub mod enrich;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod metrics;
pub mod operator;
pub mod operators;
pub mod pipeline;
pub mod record;
pub mod relation;

pub use config::{ZiAugmentConfig, ZiConfigOverrides};
pub use corpus::{list_corpus_files, ZiCorpusAugmenter, ZiCorpusReport, ZiFileReport};
pub use download::{grec_urls, ZiCorpusDownloader};
pub use enrich::{ZiDbpediaLookup, ZiEntityResolver, ZiGoogleKgResolver, ZiReferenceIndex};
pub use errors::{Result, ZiError};
pub use export::{ZiJsonWriter, ZiWriteStats};
pub use ingest::{reformat_concatenated, ZiCorpusReader};
pub use metrics::ZiAugmentStats;
pub use operator::{execute_operator, ZiOperator, ZiRecordContext};
pub use operators::{fallback_label, generate_id, tally_votes, to_ascii, ZiVote, NEEDS_ENTRY};
pub use pipeline::{ZiPipeline, ZiPipelineBuilder};
pub use record::{ZiEvidence, ZiJudgment, ZiRelationBatch, ZiRelationRecord};
pub use relation::ZiRelationType;
