// Dweve DiffPerf - Ordered-Collection Diff Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Diff algorithm contract and bundled adapters.
//!
//! Every algorithm the harness can time implements [`DiffAlgorithm`]. The
//! harness only observes that `diff` returns; the output type is up to the
//! adapter and is never inspected.
//!
//! Adapters must be pure. `diff` takes `&self` and shared slices, and an
//! adapter must not keep caches, counters, or logging between calls, or
//! repeated trials would stop measuring the algorithm itself.
//!
//! # Bundled adapters
//!
//! | Adapter | Strategy | Moves |
//! |---------|----------|-------|
//! | [`HeckelDiff`] | symbol table, linear time | yes |
//! | [`LcsDiff`] | longest common subsequence table | no |
//! | [`MyersDiff`] | greedy shortest edit script, O(ND) | no |

pub mod heckel;
pub mod lcs;
pub mod myers;

pub use heckel::HeckelDiff;
pub use lcs::LcsDiff;
pub use myers::MyersDiff;

use crate::error::{AlgorithmError, BenchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A diff algorithm under test.
pub trait DiffAlgorithm<T: Eq + Hash> {
    /// Whatever the algorithm produces. Opaque to the harness.
    type Output;

    /// Stable name used in reports.
    fn name(&self) -> &str;

    /// Computes the changes that turn `old` into `new`.
    fn diff(&self, old: &[T], new: &[T]) -> Result<Self::Output, AlgorithmError>;
}

/// One edit in a [`ChangeSet`].
///
/// `Delete` and `Move::from` index into the old collection; `Insert` and
/// `Move::to` index into the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Change {
    Insert { index: usize },
    Delete { index: usize },
    Move { from: usize, to: usize },
}

/// Edits produced by the bundled adapters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    /// Creates an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            changes: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Total number of edits.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if the collections were equal.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Edits in the order the algorithm produced them.
    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    /// Number of insertions.
    pub fn inserts(&self) -> usize {
        self.count(|c| matches!(c, Change::Insert { .. }))
    }

    /// Number of deletions.
    pub fn deletes(&self) -> usize {
        self.count(|c| matches!(c, Change::Delete { .. }))
    }

    /// Number of moves.
    pub fn moves(&self) -> usize {
        self.count(|c| matches!(c, Change::Move { .. }))
    }

    fn count(&self, pred: impl Fn(&Change) -> bool) -> usize {
        self.changes.iter().filter(|c| pred(c)).count()
    }
}

impl From<Vec<Change>> for ChangeSet {
    fn from(changes: Vec<Change>) -> Self {
        Self { changes }
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

/// Runtime selector for the bundled adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Heckel,
    Lcs,
    Myers,
}

impl AlgorithmKind {
    /// All bundled adapters, in report order.
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Heckel,
        AlgorithmKind::Lcs,
        AlgorithmKind::Myers,
    ];

    /// Returns the adapter identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Heckel => heckel::NAME,
            AlgorithmKind::Lcs => lcs::NAME,
            AlgorithmKind::Myers => myers::NAME,
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                BenchError::invalid_config(
                    "algorithm",
                    format!("unknown algorithm '{}', expected heckel, lcs or myers", s),
                )
            })
    }
}

/// Test helper: checks that an insert/delete script turns `old` into `new`.
///
/// Elements of `old` that are not deleted, in order, must equal elements of
/// `new` that are not inserted, in order.
#[cfg(test)]
pub(crate) fn script_is_valid<T: Eq>(old: &[T], new: &[T], changes: &ChangeSet) -> bool {
    use std::collections::HashSet;

    let deleted: HashSet<usize> = changes
        .iter()
        .filter_map(|c| match c {
            Change::Delete { index } => Some(*index),
            _ => None,
        })
        .collect();
    let inserted: HashSet<usize> = changes
        .iter()
        .filter_map(|c| match c {
            Change::Insert { index } => Some(*index),
            _ => None,
        })
        .collect();

    let kept_old = old
        .iter()
        .enumerate()
        .filter(|(i, _)| !deleted.contains(i))
        .map(|(_, v)| v);
    let kept_new = new
        .iter()
        .enumerate()
        .filter(|(i, _)| !inserted.contains(i))
        .map(|(_, v)| v);

    kept_old.eq(kept_new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_set_counts() {
        let set = ChangeSet::from(vec![
            Change::Insert { index: 0 },
            Change::Insert { index: 2 },
            Change::Delete { index: 1 },
            Change::Move { from: 3, to: 1 },
        ]);
        assert_eq!(set.len(), 4);
        assert_eq!(set.inserts(), 2);
        assert_eq!(set.deletes(), 1);
        assert_eq!(set.moves(), 1);
        assert!(!set.is_empty());
        assert!(ChangeSet::new().is_empty());
    }

    #[test]
    fn test_algorithm_kind_roundtrip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.as_str().parse::<AlgorithmKind>().unwrap(), kind);
        }
        assert_eq!("MYERS".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Myers);
        assert!("patience".parse::<AlgorithmKind>().is_err());
    }

    #[test]
    fn test_adapter_names_match_kinds() {
        assert_eq!(
            DiffAlgorithm::<u8>::name(&HeckelDiff),
            AlgorithmKind::Heckel.as_str()
        );
        assert_eq!(
            DiffAlgorithm::<u8>::name(&LcsDiff::default()),
            AlgorithmKind::Lcs.as_str()
        );
        assert_eq!(
            DiffAlgorithm::<u8>::name(&MyersDiff::default()),
            AlgorithmKind::Myers.as_str()
        );
    }

    #[test]
    fn test_script_validator() {
        let old = ["a", "b", "c"];
        let new = ["a", "c", "d"];
        let good = ChangeSet::from(vec![
            Change::Delete { index: 1 },
            Change::Insert { index: 2 },
        ]);
        let bad = ChangeSet::from(vec![Change::Insert { index: 2 }]);
        assert!(script_is_valid(&old, &new, &good));
        assert!(!script_is_valid(&old, &new, &bad));
    }
}
