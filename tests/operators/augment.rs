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

use std::collections::HashMap;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use zi_grec::enrich::{ZiEntityResolver, ZiReferenceIndex};
use zi_grec::errors::{Result, ZiError};
use zi_grec::metrics::ZiAugmentStats;
use zi_grec::operator::{execute_operator, ZiOperator, ZiRecordContext};
use zi_grec::operators::{
    fallback_label, first_reference, generate_id, to_ascii, ZiAsciiSnippet, ZiAssignUid,
    ZiCrossReference, ZiEntityResolution, NEEDS_ENTRY, UID_RANDOM_LEN,
};
use zi_grec::record::{ZiEvidence, ZiRelationRecord};
use zi_grec::relation::ZiRelationType;

#[derive(Debug, Default)]
struct MapResolver {
    names: HashMap<String, String>,
}

impl MapResolver {
    fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            names: entries
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl ZiEntityResolver for MapResolver {
    fn resolve(&self, id: &str) -> Result<String> {
        self.names
            .get(id)
            .cloned()
            .ok_or_else(|| ZiError::resolution(id, "not found"))
    }
}

#[derive(Debug, Default)]
struct MapIndex {
    references: HashMap<String, Vec<String>>,
}

impl ZiReferenceIndex for MapIndex {
    fn lookup(&self, name: &str) -> Result<Vec<String>> {
        self.references
            .get(name)
            .cloned()
            .ok_or_else(|| ZiError::cross_reference(name, "service unavailable"))
    }
}

fn apply(
    op: &mut dyn ZiOperator,
    record: &mut ZiRelationRecord,
    relation: ZiRelationType,
) -> Result<ZiAugmentStats> {
    let mut stats = ZiAugmentStats::default();
    let mut ctx = ZiRecordContext {
        relation,
        stats: &mut stats,
    };
    execute_operator(op, record, &mut ctx)?;
    Ok(stats)
}

fn wiki_record(sub: &str, obj: &str, page: &str) -> ZiRelationRecord {
    ZiRelationRecord::new(sub, obj).with_evidences(vec![ZiEvidence {
        url: Some(format!("http://en.wikipedia.org/wiki/{}", page)),
        snippet: Some("Zoë was born in Malmö.".into()),
        ..Default::default()
    }])
}

#[test]
fn uid_prefix_follows_relation_name() {
    let mut rng = SmallRng::seed_from_u64(3);
    assert!(generate_id(ZiRelationType::PlaceOfBirth, 10, &mut rng).starts_with("pob_"));
    assert!(generate_id(ZiRelationType::DateOfBirth, 10, &mut rng).starts_with("dob_"));
    assert!(generate_id(ZiRelationType::Education, 10, &mut rng).starts_with("e_"));
    assert!(generate_id(ZiRelationType::Institution, 10, &mut rng).starts_with("i_"));
}

#[test]
fn uid_operator_replaces_existing_ids() {
    let mut record = ZiRelationRecord::new("/m/1", "/m/2");
    record.uid = Some("old".into());
    let stats = apply(&mut ZiAssignUid::new(11), &mut record, ZiRelationType::PlaceOfDeath).unwrap();
    let uid = record.uid.unwrap();
    assert!(uid.starts_with("pod_"));
    assert_eq!(uid.len(), "pod_".len() + UID_RANDOM_LEN);
    assert_eq!(stats.uids_assigned, 1);
}

#[test]
fn ascii_snippet_only_touches_first_evidence() {
    let mut record = wiki_record("/m/1", "/m/2", "Zoe").with_evidences(vec![
        ZiEvidence {
            snippet: Some("café".into()),
            ..Default::default()
        },
        ZiEvidence {
            snippet: Some("naïve".into()),
            ..Default::default()
        },
    ]);
    apply(&mut ZiAsciiSnippet::new(), &mut record, ZiRelationType::Education).unwrap();
    let evidences = record.evidences.unwrap();
    assert_eq!(evidences[0].snippet.as_deref(), Some("cafe"));
    assert_eq!(evidences[1].snippet.as_deref(), Some("naïve"));
}

#[test]
fn ascii_snippet_requires_evidence() {
    let mut record = ZiRelationRecord::new("/m/1", "/m/2");
    let err = apply(&mut ZiAsciiSnippet::new(), &mut record, ZiRelationType::Education).unwrap_err();
    assert!(matches!(err, ZiError::MissingField { .. }));
}

#[test]
fn fallback_labels_come_from_the_url() {
    assert_eq!(
        fallback_label("http://en.wikipedia.org/wiki/John_Smith").as_deref(),
        Some("John Smith")
    );
    assert_eq!(
        fallback_label("http://en.wikipedia.org/wiki/Washington,_D.C.").as_deref(),
        Some("Washington DC")
    );
    assert_eq!(fallback_label("http://en.wikipedia.org/wiki/___"), None);
}

#[test]
fn resolved_names_replace_ids_and_ids_are_kept() {
    let resolver = MapResolver::with(&[("/m/1", "Ada Lovelace"), ("/m/2", "London")]);
    let mut op = ZiEntityResolution::new(Box::new(resolver));
    let mut record = wiki_record("/m/1", "/m/2", "Ada_Lovelace");
    let stats = apply(&mut op, &mut record, ZiRelationType::PlaceOfBirth).unwrap();

    assert_eq!(record.sub.as_deref(), Some("Ada Lovelace"));
    assert_eq!(record.obj.as_deref(), Some("London"));
    assert_eq!(record.sub_id.as_deref(), Some("/m/1"));
    assert_eq!(record.obj_id.as_deref(), Some("/m/2"));
    assert_eq!(stats.entities_resolved, 2);
}

#[test]
fn failed_subject_falls_back_to_url_label() {
    let mut op = ZiEntityResolution::new(Box::new(MapResolver::default()));
    let mut record = wiki_record("/m/1", "/m/2", "John_Smith");
    let stats = apply(&mut op, &mut record, ZiRelationType::PlaceOfBirth).unwrap();

    assert_eq!(record.sub.as_deref(), Some("John Smith"));
    assert_eq!(record.obj.as_deref(), Some(NEEDS_ENTRY));
    assert_eq!(stats.resolution_fallbacks, 1);
    assert_eq!(stats.resolution_sentinels, 1);
}

#[test]
fn failed_subject_without_url_needs_entry() {
    let mut op = ZiEntityResolution::new(Box::new(MapResolver::default()));
    let mut record = ZiRelationRecord::new("/m/1", "/m/2");
    apply(&mut op, &mut record, ZiRelationType::Institution).unwrap();
    assert_eq!(record.sub.as_deref(), Some(NEEDS_ENTRY));
}

#[test]
fn date_objects_are_not_resolved() {
    let resolver = MapResolver::with(&[("/m/1", "Ada Lovelace")]);
    let mut op = ZiEntityResolution::new(Box::new(resolver)).with_keep_original_ids(false);
    let mut record = wiki_record("/m/1", "1815-12-10", "Ada_Lovelace");
    apply(&mut op, &mut record, ZiRelationType::DateOfBirth).unwrap();

    assert_eq!(record.sub.as_deref(), Some("Ada Lovelace"));
    assert_eq!(record.obj.as_deref(), Some("1815-12-10"));
    assert_eq!(record.sub_id, None);
    assert_eq!(record.obj_id, None);
}

#[test]
fn cross_reference_omits_misses() {
    let mut index = MapIndex::default();
    index.references.insert(
        "Ada Lovelace".into(),
        vec![
            "http://dbpedia.org/resource/Ada_Lovelace".into(),
            "http://dbpedia.org/resource/Ada_(language)".into(),
        ],
    );
    index.references.insert("London".into(), vec![]);
    let mut op = ZiCrossReference::new(Box::new(index));
    let mut record = ZiRelationRecord::new("Ada Lovelace", "London");
    let stats = apply(&mut op, &mut record, ZiRelationType::PlaceOfBirth).unwrap();

    assert_eq!(
        record.dbpedia_sub.as_deref(),
        Some("http://dbpedia.org/resource/Ada_Lovelace")
    );
    assert_eq!(record.dbpedia_obj, None);
    assert_eq!(stats.cross_references, 1);
    assert_eq!(stats.cross_reference_misses, 1);

    let value = serde_json::to_value(&record).unwrap();
    assert!(value.get("dbpedia_obj").is_none());
}

#[test]
fn first_reference_absorbs_lookup_errors() {
    assert_eq!(first_reference(&MapIndex::default(), "Nowhere"), None);
}

proptest! {
    #[test]
    fn uid_shape(seed in any::<u64>(), size in 1usize..32) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let uid = generate_id(ZiRelationType::Education, size, &mut rng);
        let (tag, hash) = uid.split_once('_').unwrap();
        prop_assert_eq!(tag, "e");
        prop_assert_eq!(hash.len(), size);
        prop_assert!(hash.chars().all(|ch| ch.is_ascii_alphanumeric()));
    }

    #[test]
    fn ascii_is_idempotent_and_ascii(text in "\\PC{0,64}") {
        let once = to_ascii(&text);
        prop_assert!(once.is_ascii());
        prop_assert_eq!(to_ascii(&once), once.clone());
    }
}
