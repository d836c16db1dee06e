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

//! Myers' O(ND) shortest edit script.
//!
//! Runs the greedy forward search and keeps, for every edit distance `d`,
//! the `2d + 1` diagonals of `V` that round `d` can read. Backtracking
//! through those snapshots recovers the script. Cheap for similar inputs;
//! the trace grows as `D^2`, so it is capped like the LCS table.

use super::{Change, ChangeSet, DiffAlgorithm};
use crate::error::AlgorithmError;
use std::hash::Hash;

pub(crate) const NAME: &str = "myers";

/// Trace size above which the adapter refuses to continue (50 million cells).
pub const DEFAULT_MAX_TRACE_CELLS: usize = 50_000_000;

/// Myers diff producing inserts and deletes.
#[derive(Debug, Clone, Copy)]
pub struct MyersDiff {
    max_cells: usize,
}

impl MyersDiff {
    /// Creates an adapter with a custom trace size limit.
    pub fn with_max_cells(max_cells: usize) -> Self {
        Self { max_cells }
    }

    /// Largest number of trace cells the adapter will keep.
    pub fn max_cells(&self) -> usize {
        self.max_cells
    }
}

impl Default for MyersDiff {
    fn default() -> Self {
        Self::with_max_cells(DEFAULT_MAX_TRACE_CELLS)
    }
}

impl<T: Eq + Hash> DiffAlgorithm<T> for MyersDiff {
    type Output = ChangeSet;

    fn name(&self) -> &str {
        NAME
    }

    fn diff(&self, old: &[T], new: &[T]) -> Result<ChangeSet, AlgorithmError> {
        let trace = shortest_edit(old, new, self.max_cells)?;
        Ok(backtrack(&trace, old.len(), new.len()))
    }
}

fn overflow() -> AlgorithmError {
    AlgorithmError::new("input too large for Myers diff")
}

/// Diagonals `-d..=d` of `V` as they stood before round `d`.
struct Round {
    d: isize,
    v: Vec<isize>,
}

impl Round {
    fn get(&self, k: isize) -> isize {
        self.v[(k + self.d) as usize]
    }
}

/// Forward pass. Returns one snapshot per round, ending with the round that
/// reached the bottom-right corner.
fn shortest_edit<T: Eq>(
    old: &[T],
    new: &[T],
    max_cells: usize,
) -> Result<Vec<Round>, AlgorithmError> {
    let n = isize::try_from(old.len()).map_err(|_| overflow())?;
    let m = isize::try_from(new.len()).map_err(|_| overflow())?;
    let max = n.checked_add(m).ok_or_else(overflow)?;
    let offset = max;

    let mut v = vec![0isize; 2 * max as usize + 2];
    let mut trace = Vec::new();
    let mut cells = 0usize;

    for d in 0..=max {
        let lo = (offset - d) as usize;
        let hi = (offset + d) as usize;
        cells = cells
            .checked_add(hi - lo + 1)
            .filter(|cells| *cells <= max_cells)
            .ok_or_else(|| {
                AlgorithmError::new(format!(
                    "Myers trace for {} x {} elements exceeds limit of {} cells at edit distance {}",
                    old.len(),
                    new.len(),
                    max_cells,
                    d
                ))
            })?;
        trace.push(Round {
            d,
            v: v[lo..=hi].to_vec(),
        });

        let mut k = -d;
        while k <= d {
            let slot = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[slot - 1] < v[slot + 1]) {
                v[slot + 1]
            } else {
                v[slot - 1] + 1
            };
            let mut y = x - k;

            while x < n && y < m && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }
            v[slot] = x;

            if x >= n && y >= m {
                return Ok(trace);
            }
            k += 2;
        }
    }

    // d = n + m always reaches the end.
    Ok(trace)
}

fn backtrack(trace: &[Round], old_len: usize, new_len: usize) -> ChangeSet {
    let mut x = old_len as isize;
    let mut y = new_len as isize;
    let mut changes = Vec::new();

    // Round 0 is a single snake back to the origin.
    for round in trace.iter().skip(1).rev() {
        let d = round.d;
        let k = x - y;

        let prev_k = if k == -d || (k != d && round.get(k - 1) < round.get(k + 1)) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = round.get(prev_k);
        let prev_y = prev_x - prev_k;

        // Snake
        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
        }

        if x == prev_x {
            changes.push(Change::Insert {
                index: prev_y as usize,
            });
        } else {
            changes.push(Change::Delete {
                index: prev_x as usize,
            });
        }

        x = prev_x;
        y = prev_y;
    }

    changes.reverse();
    changes.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::script_is_valid;

    #[test]
    fn test_classic_example() {
        let old: Vec<char> = "ABCABBA".chars().collect();
        let new: Vec<char> = "CBABAC".chars().collect();
        let changes = MyersDiff::default().diff(&old, &new).unwrap();

        // D = 5 for this pair
        assert_eq!(changes.len(), 5);
        assert!(script_is_valid(&old, &new, &changes));
    }

    #[test]
    fn test_changed() {
        let old = ["a", "b", "c"];
        let new = ["a", "x", "c", "d"];
        let changes = MyersDiff::default().diff(&old, &new).unwrap();

        assert_eq!(changes.deletes(), 1);
        assert_eq!(changes.inserts(), 2);
        assert!(script_is_valid(&old, &new, &changes));
    }

    #[test]
    fn test_same_and_empty() {
        let items = ["x", "y", "x"];
        assert!(MyersDiff::default().diff(&items, &items).unwrap().is_empty());

        let created = MyersDiff::default().diff(&[], &items).unwrap();
        assert_eq!(created.inserts(), 3);
        assert!(script_is_valid(&[], &items, &created));

        let deleted = MyersDiff::default().diff(&items, &[]).unwrap();
        assert_eq!(deleted.deletes(), 3);

        assert!(DiffAlgorithm::<&str>::diff(&MyersDiff::default(), &[], &[])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_script_is_in_order() {
        let old = [1, 2, 3, 4, 5];
        let new = [0, 2, 3, 9, 5, 6];
        let changes = MyersDiff::default().diff(&old, &new).unwrap();

        assert!(script_is_valid(&old, &new, &changes));
        assert_eq!(changes.len(), 5);
    }

    #[test]
    fn test_trace_is_quadratic_in_edit_distance() {
        // created: D = 3, rounds 0..=3 keep 1 + 3 + 5 + 7 cells
        let new = [1, 2, 3];
        let trace = shortest_edit(&[], &new, usize::MAX).unwrap();
        let cells: usize = trace.iter().map(|round| round.v.len()).sum();
        assert_eq!(trace.len(), 4);
        assert_eq!(cells, 16);

        assert!(MyersDiff::with_max_cells(16).diff(&[], &new).is_ok());
    }

    #[test]
    fn test_trace_limit_is_an_error() {
        let new: Vec<u32> = (0..20_000).collect();
        let err = MyersDiff::with_max_cells(10_000)
            .diff(&[], &new)
            .unwrap_err();
        assert!(err.message.contains("exceeds limit of 10000 cells"));

        // Identical inputs stay at D = 0 regardless of length.
        assert!(MyersDiff::with_max_cells(1).diff(&new, &new).unwrap().is_empty());
    }
}
