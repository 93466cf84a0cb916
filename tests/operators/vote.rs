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

use proptest::prelude::*;
use zi_grec::errors::ZiError;
use zi_grec::metrics::ZiAugmentStats;
use zi_grec::operator::{execute_operator, ZiRecordContext};
use zi_grec::operators::{tally_votes, ZiMajorityVote, ZiVote, ZiVoteCounts};
use zi_grec::record::{ZiJudgment, ZiRelationRecord};
use zi_grec::relation::ZiRelationType;

fn judgments(values: &[&str]) -> Vec<ZiJudgment> {
    values.iter().map(|value| ZiJudgment::new(*value)).collect()
}

#[test]
fn ties_break_toward_yes_then_no() {
    assert_eq!(tally_votes(&judgments(&["yes", "yes", "no", "no"])), ZiVote::Yes);
    assert_eq!(tally_votes(&judgments(&["yes", "no", "skip"])), ZiVote::Yes);
    assert_eq!(tally_votes(&judgments(&["no", "no", "skip", "skip"])), ZiVote::No);
}

#[test]
fn clear_majorities_win() {
    assert_eq!(tally_votes(&judgments(&["no", "no", "yes"])), ZiVote::No);
    assert_eq!(tally_votes(&judgments(&["skip", "skip", "yes"])), ZiVote::Skip);
}

#[test]
fn unknown_values_are_not_counted() {
    let counts = ZiVoteCounts::from_judgments(&judgments(&["yes", "maybe", "YES", "no", "no"]));
    assert_eq!(counts, ZiVoteCounts::new(1, 2, 0));
    assert_eq!(counts.majority(), ZiVote::No);
}

#[test]
fn empty_judgments_vote_skip() {
    assert_eq!(tally_votes(&[]), ZiVote::Skip);
    assert_eq!(tally_votes(&judgments(&["unsure"])), ZiVote::Skip);
}

#[test]
fn operator_writes_maj_vote_and_counts() {
    let mut stats = ZiAugmentStats::default();
    let mut op = ZiMajorityVote::new();
    let mut record = ZiRelationRecord::new("/m/1", "/m/2")
        .with_judgments(judgments(&["no", "skip", "no"]));
    {
        let mut ctx = ZiRecordContext {
            relation: ZiRelationType::Institution,
            stats: &mut stats,
        };
        execute_operator(&mut op, &mut record, &mut ctx).unwrap();
    }
    assert_eq!(record.maj_vote.as_deref(), Some("no"));
    assert_eq!(stats.votes_no, 1);

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["maj_vote"], "no");
}

#[test]
fn operator_requires_judgments() {
    let mut stats = ZiAugmentStats::default();
    let mut ctx = ZiRecordContext {
        relation: ZiRelationType::Education,
        stats: &mut stats,
    };
    let mut record = ZiRelationRecord::new("/m/1", "/m/2");
    let err = execute_operator(&mut ZiMajorityVote::new(), &mut record, &mut ctx).unwrap_err();
    assert!(matches!(err, ZiError::MissingField { .. }));
}

proptest! {
    #[test]
    fn majority_has_the_highest_count(yes in 0usize..20, no in 0usize..20, skip in 0usize..20) {
        let counts = ZiVoteCounts::new(yes, no, skip);
        let winner = counts.majority();
        let best = yes.max(no).max(skip);
        let expected = if yes + no + skip == 0 {
            ZiVote::Skip
        } else if yes == best {
            ZiVote::Yes
        } else if no == best {
            ZiVote::No
        } else {
            ZiVote::Skip
        };
        prop_assert_eq!(winner, expected);
    }

    #[test]
    fn tally_ignores_order(values in proptest::collection::vec(prop_oneof![Just("yes"), Just("no"), Just("skip")], 0..30)) {
        let forward = tally_votes(&judgments(&values));
        let reversed: Vec<&str> = values.iter().rev().copied().collect();
        prop_assert_eq!(tally_votes(&judgments(&reversed)), forward);
    }
}
