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

//! Fetches the raw corpus files from the Google Code archive.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::{Result, ZiError};

pub const GREC_BASE_URL: &str = "https://storage.googleapis.com/google-code-archive-downloads/v2/code.google.com/relation-extraction-corpus/";

/// The five relation files of the corpus.
pub const GREC_FILES: [&str; 5] = [
    "20131104-place_of_death.json",
    "20131104-date_of_birth.json",
    "20131104-education-degree.json",
    "20130403-institution.json",
    "20130403-place_of_birth.json",
];

pub const DEFAULT_DATA_DIR: &str = "./grec/";

pub fn grec_urls() -> Vec<String> {
    GREC_FILES
        .iter()
        .map(|name| format!("{}{}", GREC_BASE_URL, name))
        .collect()
}

/// Last path segment of a URL, ignoring any query string.
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next()?;
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Downloads URLs into a directory, one file per URL.
#[derive(Debug, Clone)]
pub struct ZiCorpusDownloader {
    client: reqwest::blocking::Client,
    dest_dir: PathBuf,
}

impl ZiCorpusDownloader {
    pub fn new(dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            dest_dir: dest_dir.into(),
        }
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Streams `url` to `<dest_dir>/<file name>` and returns the written path.
    pub fn download(&self, url: &str) -> Result<PathBuf> {
        let name = file_name_from_url(url)
            .ok_or_else(|| ZiError::validation(format!("no file name in url {}", url)))?;
        std::fs::create_dir_all(&self.dest_dir)?;
        let destination = self.dest_dir.join(name);

        log::info!("Downloading {} ...", name);
        let mut response = self.client.get(url).send()?.error_for_status()?;
        let mut writer = BufWriter::new(File::create(&destination)?);
        let bytes = response.copy_to(&mut writer)?;
        writer.flush()?;
        log::debug!("wrote {} bytes to {}", bytes, destination.display());

        Ok(destination)
    }

    pub fn download_all<S: AsRef<str>>(&self, urls: &[S]) -> Result<Vec<PathBuf>> {
        urls.iter().map(|url| self.download(url.as_ref())).collect()
    }
}
