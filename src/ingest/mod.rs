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

//! # Data Ingestion Module
//!
//! Reads corpus files into relation records.
//!
//! ## Module Components
//!
//! - **Format Detection** ([format.rs](format/index.html)): Tells a JSON array apart from concatenated objects
//! - **Reader** ([reader.rs](reader/index.html)): Whole-file parsing with the optional reformat pre-pass
//!
//! ## Supported Input Formats
//!
//! - **JSON**: A JSON array of records, or a single record object
//! - **Concatenated**: Records written back to back without commas or brackets,
//!   as shipped by the raw corpus archive
//!
//! ## Usage Patterns
//!
//! ```rust
//! use zi_grec::ingest::ZiCorpusReader;
//!
//! let reader = ZiCorpusReader::new().with_reformat(true);
//! let batch = reader.read_path(&path)?;
//! ```

pub mod format;
pub mod reader;

pub use format::{ZiFormatDetector, ZiInputFormat};
pub use reader::{reformat_concatenated, ZiCorpusReader};
