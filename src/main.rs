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

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use zi_grec::config::ZiConfigOverrides;
use zi_grec::download::DEFAULT_DATA_DIR;
use zi_grec::{grec_urls, ZiAugmentConfig, ZiCorpusAugmenter, ZiCorpusDownloader};

#[derive(Parser)]
#[command(name = "zi-grec")]
#[command(about = "Download and augment the Google Relation Extraction Corpus")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Augment every corpus file of the input directory
    Augment(AugmentArgs),

    /// Fetch the raw corpus files
    Download {
        /// Directory the corpus files are saved into
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,
    },
}

#[derive(Args)]
struct AugmentArgs {
    /// JSON or YAML file with base settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rewrite concatenated JSON objects into an array before parsing
    #[arg(short = 'j', long = "jsonify", visible_alias = "js")]
    jsonify: bool,

    /// Normalize the first evidence snippet to ASCII
    #[arg(short, long)]
    ascii: bool,

    /// Assign a unique identifier to every record
    #[arg(short, long = "unique-ids", visible_alias = "uid")]
    unique_ids: bool,

    /// Store the majority crowd judgment
    #[arg(short, long = "majority-vote", visible_alias = "mv")]
    majority_vote: bool,

    /// Resolve subject/object identifiers through the Google Knowledge Graph
    #[arg(short, long = "google-kg", visible_alias = "gkg")]
    google_kg: bool,

    /// Attach DBpedia references for subject and object
    #[arg(short, long)]
    dbpedia: bool,

    /// Drop replaced identifiers instead of keeping them under sub_id/obj_id
    #[arg(long)]
    no_keep_ids: bool,

    /// Directory holding the raw corpus files
    #[arg(long = "in-dir", visible_alias = "id")]
    in_dir: Option<PathBuf>,

    /// Directory the augmented files are written to
    #[arg(long = "out-dir", visible_alias = "od")]
    out_dir: Option<PathBuf>,

    /// Tag appended to the relation name of each output file
    #[arg(short, long)]
    output: Option<String>,

    /// File holding the Google Knowledge Graph API key
    #[arg(long)]
    api_key: Option<PathBuf>,

    /// Seed for identifier generation
    #[arg(long)]
    seed: Option<u64>,
}

impl AugmentArgs {
    fn into_config(self) -> Result<ZiAugmentConfig> {
        let base = match &self.config {
            Some(path) => ZiAugmentConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ZiAugmentConfig::default(),
        };
        let overrides = ZiConfigOverrides {
            reformat: self.jsonify,
            ascii: self.ascii,
            unique_ids: self.unique_ids,
            majority_vote: self.majority_vote,
            resolve_entities: self.google_kg,
            cross_reference: self.dbpedia,
            drop_original_ids: self.no_keep_ids,
            input_dir: self.in_dir,
            output_dir: self.out_dir,
            output_tag: self.output,
            api_key_path: self.api_key,
            seed: self.seed,
        };
        Ok(base.apply_overrides(overrides)?)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{};{};{}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Augment(args) => {
            let config = args.into_config()?;
            let report = ZiCorpusAugmenter::new(config)?.run()?;
            for file in &report.files {
                log::debug!("{} -> {}", file.input.display(), file.output.display());
            }
        }
        Commands::Download { data_dir } => {
            let downloader = ZiCorpusDownloader::new(data_dir);
            let paths = downloader
                .download_all(&grec_urls())
                .context("downloading corpus")?;
            log::info!(
                "Downloaded {} files into {}",
                paths.len(),
                downloader.dest_dir().display()
            );
        }
    }
    Ok(())
}
