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

//! # Operators Module
//!
//! The record transforms of the augmentation pipeline, listed in the order
//! the pipeline applies them:
//!
//! - **uid**: Identifier assignment (`augment.uid`)
//! - **ascii**: First-snippet ASCII normalization (`augment.ascii`)
//! - **vote**: Majority vote over crowd judgments (`augment.majority_vote`)
//! - **entity**: Subject/object resolution through an entity resolver (`augment.entity`)
//! - **xref**: Reference index lookup for resolved names (`augment.xref`)

pub mod ascii;
pub mod entity;
pub mod uid;
pub mod vote;
pub mod xref;

pub use ascii::{to_ascii, ZiAsciiSnippet};
pub use entity::{fallback_label, ZiEntityResolution, NEEDS_ENTRY};
pub use uid::{generate_id, ZiAssignUid, UID_RANDOM_LEN};
pub use vote::{tally_votes, ZiMajorityVote, ZiVote, ZiVoteCounts};
pub use xref::{first_reference, ZiCrossReference};
