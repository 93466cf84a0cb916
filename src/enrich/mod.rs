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

//! # Knowledge-Base Enrichment Module
//!
//! External collaborators used to enrich relation records.
//!
//! ## Module Components
//!
//! - **Resolver** ([resolver.rs](resolver/index.html)): Maps an opaque entity
//!   identifier (a Freebase MID such as `/m/02v_brk`) to a display name
//! - **Reference** ([reference.rs](reference/index.html)): Maps a display name
//!   to candidate reference URIs
//!
//! Both collaborators sit behind traits so the pipeline can run against the
//! live services or against in-memory tables in tests.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use zi_grec::enrich::{ZiEntityResolver, ZiGoogleKgResolver};
//!
//! let resolver = ZiGoogleKgResolver::new("../google_api");
//! let name = resolver.resolve("/m/02v_brk")?;
//! ```

pub mod reference;
pub mod resolver;

pub use reference::{parse_references, ZiDbpediaLookup, ZiReferenceIndex, DBPEDIA_LOOKUP_ENDPOINT};
pub use resolver::{parse_entity_name, ZiEntityResolver, ZiGoogleKgResolver, GOOGLE_KG_ENDPOINT};
