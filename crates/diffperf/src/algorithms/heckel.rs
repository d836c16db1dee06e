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

//! Paul Heckel's symbol-table diff.
//!
//! Linear in the combined input length. Each distinct element gets one
//! symbol table entry holding the positions it occupies in the old
//! collection; elements of the new collection claim those positions in
//! ascending order. Unclaimed old positions are deletes, unmatched new
//! positions are inserts, and matched pairs whose index does not line up
//! once inserts and deletes are accounted for are moves.
//!
//! When either side is empty the result is produced directly without
//! building the table.

use super::{Change, ChangeSet, DiffAlgorithm};
use crate::error::AlgorithmError;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

pub(crate) const NAME: &str = "heckel";

/// Heckel diff with move detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeckelDiff;

impl<T: Eq + Hash> DiffAlgorithm<T> for HeckelDiff {
    type Output = ChangeSet;

    fn name(&self) -> &str {
        NAME
    }

    fn diff(&self, old: &[T], new: &[T]) -> Result<ChangeSet, AlgorithmError> {
        if let Some(changes) = trivial(old, new) {
            return Ok(changes);
        }
        Ok(heckel(old, new))
    }
}

/// Shortcut for an empty side: everything is an insert or a delete.
fn trivial<T>(old: &[T], new: &[T]) -> Option<ChangeSet> {
    let changes: Vec<Change> = if old.is_empty() {
        (0..new.len()).map(|index| Change::Insert { index }).collect()
    } else if new.is_empty() {
        (0..old.len()).map(|index| Change::Delete { index }).collect()
    } else {
        return None;
    };
    Some(changes.into())
}

fn heckel<T: Eq + Hash>(old: &[T], new: &[T]) -> ChangeSet {
    // Old positions per distinct element, ascending.
    let mut table: HashMap<&T, VecDeque<usize>> = HashMap::with_capacity(old.len());
    for (index, item) in old.iter().enumerate() {
        table.entry(item).or_default().push_back(index);
    }

    let mut new_to_old: Vec<Option<usize>> = Vec::with_capacity(new.len());
    let mut old_matched = vec![false; old.len()];
    for item in new {
        let claimed = table.get_mut(item).and_then(VecDeque::pop_front);
        if let Some(old_index) = claimed {
            old_matched[old_index] = true;
        }
        new_to_old.push(claimed);
    }

    let mut changes = ChangeSet::with_capacity(old.len().max(new.len()));

    let mut insert_offsets = vec![0usize; new.len()];
    let mut running = 0;
    for (index, link) in new_to_old.iter().enumerate() {
        insert_offsets[index] = running;
        if link.is_none() {
            changes.push(Change::Insert { index });
            running += 1;
        }
    }

    let mut delete_offsets = vec![0usize; old.len()];
    running = 0;
    for (index, matched) in old_matched.iter().enumerate() {
        delete_offsets[index] = running;
        if !matched {
            changes.push(Change::Delete { index });
            running += 1;
        }
    }

    for (to, link) in new_to_old.iter().enumerate() {
        if let Some(from) = *link {
            // Where `from` would land if only inserts and deletes were applied.
            let expected = from - delete_offsets[from] + insert_offsets[to];
            if expected != to {
                changes.push(Change::Move { from, to });
            }
        }
    }

    changes
}
