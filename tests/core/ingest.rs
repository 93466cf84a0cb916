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

use std::path::Path;

use zi_grec::errors::ZiError;
use zi_grec::ingest::{reformat_concatenated, ZiCorpusReader, ZiFormatDetector, ZiInputFormat};
use zi_grec::relation::ZiRelationType;

const CONCATENATED: &str = r#"{"pred":"/people/person/education","sub":"/m/01","obj":"/m/02","evidences":[{"url":"http://en.wikipedia.org/wiki/Ada_Lovelace","snippet":"She studied at home."}],"judgments":[{"rater":"1","judgment":"yes"}]}
{"pred":"/people/person/education","sub":"/m/03","obj":"/m/04","evidences":[{"url":"http://en.wikipedia.org/wiki/Alan_Turing","snippet":"He attended Sherborne."}],"judgments":[{"rater":"2","judgment":"no"}]}
"#;

#[test]
fn concatenated_input_parses_like_an_array() {
    let reader = ZiCorpusReader::new().with_reformat(true);
    let concatenated = reader.read_str("{\"a\":1}\n{\"b\":2}", "inline").unwrap();
    let array = ZiCorpusReader::new()
        .read_str("[{\"a\":1},{\"b\":2}]", "inline")
        .unwrap();
    assert_eq!(concatenated, array);
    assert_eq!(array.len(), 2);
    assert_eq!(array[0].extra["a"], 1);
}

#[test]
fn corpus_lines_keep_their_fields() {
    let batch = ZiCorpusReader::new()
        .with_reformat(true)
        .read_str(CONCATENATED, "education.json")
        .unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[1].sub.as_deref(), Some("/m/03"));
    assert_eq!(batch[1].extra["pred"], "/people/person/education");
    let judgments = batch[0].judgments.as_ref().unwrap();
    assert_eq!(judgments[0].judgment, "yes");
    assert_eq!(judgments[0].extra["rater"], "1");
    assert_eq!(
        batch[0].first_evidence_url(),
        Some("http://en.wikipedia.org/wiki/Ada_Lovelace")
    );
}

#[test]
fn concatenated_input_without_reformat_is_malformed() {
    let err = ZiCorpusReader::new()
        .read_str(CONCATENATED, "education.json")
        .unwrap_err();
    assert!(matches!(err, ZiError::MalformedInput { .. }));
}

#[test]
fn reformat_strips_backslashes() {
    let text = reformat_concatenated("{\"s\":\"a\\\\b\"}");
    assert_eq!(text, "[{\"s\":\"ab\"}]");
}

#[test]
fn detector_distinguishes_layouts() {
    let detector = ZiFormatDetector::new();
    assert_eq!(detector.detect_from_content(CONCATENATED), ZiInputFormat::Concatenated);
    assert_eq!(detector.detect_from_content("[{}]"), ZiInputFormat::Json);
    assert_eq!(detector.detect_from_content("sub,obj"), ZiInputFormat::Unknown);
    assert!(detector.is_corpus_file(Path::new("grec/20130403-institution.json")));
    assert!(!detector.is_corpus_file(Path::new("grec/README.txt")));
}

#[test]
fn reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("20131104-date_of_birth.json");
    std::fs::write(&path, CONCATENATED).unwrap();
    let batch = ZiCorpusReader::new().with_reformat(true).read_path(&path).unwrap();
    assert_eq!(batch.len(), 2);
}

#[test]
fn classifies_corpus_file_names() {
    let cases = [
        ("20131104-education-degree.json", ZiRelationType::Education),
        ("20130403-institution.json", ZiRelationType::Institution),
        ("20131104-date_of_birth.json", ZiRelationType::DateOfBirth),
        ("20130403-place_of_birth.json", ZiRelationType::PlaceOfBirth),
        ("20131104-place_of_death.json", ZiRelationType::PlaceOfDeath),
        ("dob-sample.json", ZiRelationType::DateOfBirth),
        ("notes.json", ZiRelationType::Error),
    ];
    for (name, expected) in cases {
        assert_eq!(ZiRelationType::from_file_name(name), expected, "{}", name);
    }
}

#[test]
fn classification_uses_the_file_name_only() {
    let path = Path::new("/data/education/20130403-place_of_birth.json");
    assert_eq!(ZiRelationType::from_path(path), ZiRelationType::PlaceOfBirth);
}

#[test]
fn earlier_patterns_take_priority() {
    assert_eq!(
        ZiRelationType::from_file_name("education_place_of_birth.json"),
        ZiRelationType::Education
    );
}
