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

//! # Corpus Driver
//!
//! Runs the augmentation pipeline over every corpus file of a directory.
//! Files are handled one at a time: read whole, transformed, written, and
//! only then is the next file opened. A failure stops the run; outputs of
//! files finished before it stay on disk.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ZiAugmentConfig;
use crate::errors::{Result, ZiError};
use crate::export::{output_file_name, ZiJsonWriter, ZiWriteStats};
use crate::ingest::{ZiCorpusReader, ZiFormatDetector};
use crate::metrics::ZiAugmentStats;
use crate::pipeline::{ZiPipeline, ZiPipelineBuilder};
use crate::relation::ZiRelationType;

/// Outcome for one augmented input file.
#[derive(Clone, Debug, Serialize)]
pub struct ZiFileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub relation: ZiRelationType,
    pub stats: ZiAugmentStats,
    pub write: ZiWriteStats,
}

/// Outcome of a whole run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ZiCorpusReport {
    pub files: Vec<ZiFileReport>,
    /// Inputs whose name matched no relation.
    pub skipped: Vec<PathBuf>,
}

impl ZiCorpusReport {
    pub fn total_records(&self) -> usize {
        self.files.iter().map(|file| file.stats.records).sum()
    }
}

/// Corpus files of `dir`, sorted by path.
pub fn list_corpus_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ZiError::MissingDirectory(dir.display().to_string()));
    }
    let detector = ZiFormatDetector::new();
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && detector.is_corpus_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads, augments and writes every corpus file of the configured input directory.
#[derive(Debug)]
pub struct ZiCorpusAugmenter {
    config: ZiAugmentConfig,
    reader: ZiCorpusReader,
    pipeline: ZiPipeline,
    writer: ZiJsonWriter,
}

impl ZiCorpusAugmenter {
    /// Builds the pipeline with the live collaborators named in `config`.
    pub fn new(config: ZiAugmentConfig) -> Result<Self> {
        let pipeline = ZiPipelineBuilder::from_config(&config).build();
        Self::with_pipeline(config, pipeline)
    }

    /// Uses a pre-built pipeline, e.g. one wired to local collaborators.
    pub fn with_pipeline(config: ZiAugmentConfig, pipeline: ZiPipeline) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader: ZiCorpusReader::new().with_reformat(config.reformat),
            config,
            pipeline,
            writer: ZiJsonWriter::new(),
        })
    }

    pub fn run(&mut self) -> Result<ZiCorpusReport> {
        log::info!("Beginning Google Relation Extraction Corpus Augmentation");

        let files = match list_corpus_files(&self.config.input_dir) {
            Ok(files) => files,
            Err(err) => {
                log::error!("{}", err);
                return Err(err);
            }
        };
        if !self.config.has_transforms() {
            log::warn!("no transforms enabled; records will only be rewritten");
        }
        log::debug!("pipeline stages: {:?}", self.pipeline.stage_names());

        let mut report = ZiCorpusReport::default();
        for path in files {
            match self.augment_file(&path)? {
                Some(file_report) => report.files.push(file_report),
                None => report.skipped.push(path),
            }
        }

        log::info!(
            "Finished Augmenting Corpus: {} files, {} records",
            report.files.len(),
            report.total_records()
        );
        Ok(report)
    }

    /// Augments one file. Returns `None` when its relation cannot be classified.
    pub fn augment_file(&mut self, path: &Path) -> Result<Option<ZiFileReport>> {
        let relation = ZiRelationType::from_path(path);
        if relation.is_error() {
            log::warn!("Skipping {}: no relation type in file name", path.display());
            return Ok(None);
        }

        log::info!("Processing {}", path.display());
        let batch = self.reader.read_path(path)?;
        let (batch, stats) = self.pipeline.run(batch, relation)?;

        let output = self
            .config
            .output_dir
            .join(output_file_name(relation, &self.config.output_tag)?);
        let write = self.writer.write(&batch, &output)?;

        log::info!("Finished processing {} ({})", path.display(), stats);
        Ok(Some(ZiFileReport {
            input: path.to_path_buf(),
            output,
            relation,
            stats,
            write,
        }))
    }
}
