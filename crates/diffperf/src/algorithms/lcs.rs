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

//! Longest-common-subsequence diff.
//!
//! Fills the full `(old + 1) x (new + 1)` suffix table and walks it from the
//! top-left corner. Quadratic in time and memory, which is the point of
//! including it: it is the slow baseline the other adapters are compared to.

use super::{Change, ChangeSet, DiffAlgorithm};
use crate::error::AlgorithmError;
use std::hash::Hash;

pub(crate) const NAME: &str = "lcs";

/// Table size above which the adapter refuses to run (100 million cells).
pub const DEFAULT_MAX_CELLS: usize = 100_000_000;

/// Table-based LCS diff producing inserts and deletes.
#[derive(Debug, Clone, Copy)]
pub struct LcsDiff {
    max_cells: usize,
}

impl LcsDiff {
    /// Creates an adapter with a custom table size limit.
    pub fn with_max_cells(max_cells: usize) -> Self {
        Self { max_cells }
    }

    /// Largest table the adapter will allocate.
    pub fn max_cells(&self) -> usize {
        self.max_cells
    }
}

impl Default for LcsDiff {
    fn default() -> Self {
        Self::with_max_cells(DEFAULT_MAX_CELLS)
    }
}

impl<T: Eq + Hash> DiffAlgorithm<T> for LcsDiff {
    type Output = ChangeSet;

    fn name(&self) -> &str {
        NAME
    }

    fn diff(&self, old: &[T], new: &[T]) -> Result<ChangeSet, AlgorithmError> {
        let cells = (old.len() + 1)
            .checked_mul(new.len() + 1)
            .filter(|cells| *cells <= self.max_cells)
            .ok_or_else(|| {
                AlgorithmError::new(format!(
                    "LCS table for {} x {} elements exceeds limit of {} cells",
                    old.len(),
                    new.len(),
                    self.max_cells
                ))
            })?;

        let width = new.len() + 1;
        let mut table = vec![0u32; cells];

        // table[i][j] = LCS length of old[i..] and new[j..]
        for i in (0..old.len()).rev() {
            for j in (0..new.len()).rev() {
                table[i * width + j] = if old[i] == new[j] {
                    table[(i + 1) * width + j + 1] + 1
                } else {
                    table[(i + 1) * width + j].max(table[i * width + j + 1])
                };
            }
        }

        let mut changes = ChangeSet::new();
        let (mut i, mut j) = (0, 0);
        while i < old.len() && j < new.len() {
            if old[i] == new[j] {
                i += 1;
                j += 1;
            } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
                changes.push(Change::Delete { index: i });
                i += 1;
            } else {
                changes.push(Change::Insert { index: j });
                j += 1;
            }
        }
        for index in i..old.len() {
            changes.push(Change::Delete { index });
        }
        for index in j..new.len() {
            changes.push(Change::Insert { index });
        }

        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::script_is_valid;

    #[test]
    fn test_changed() {
        let old = ["a", "b", "c"];
        let new = ["a", "x", "c", "d"];
        let changes = LcsDiff::default().diff(&old, &new).unwrap();

        assert_eq!(changes.deletes(), 1);
        assert_eq!(changes.inserts(), 2);
        assert!(script_is_valid(&old, &new, &changes));
    }

    #[test]
    fn test_same_and_empty() {
        let items = [1, 2, 2, 3];
        let lcs = LcsDiff::default();
        assert!(lcs.diff(&items, &items).unwrap().is_empty());
        assert_eq!(lcs.diff(&[], &items).unwrap().inserts(), 4);
        assert_eq!(lcs.diff(&items, &[]).unwrap().deletes(), 4);
        assert!(DiffAlgorithm::<i32>::diff(&lcs, &[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_minimal_for_known_pair() {
        // LCS of ABCABBA / CBABAC has length 4
        let old: Vec<char> = "ABCABBA".chars().collect();
        let new: Vec<char> = "CBABAC".chars().collect();
        let changes = LcsDiff::default().diff(&old, &new).unwrap();

        assert_eq!(changes.deletes(), 3);
        assert_eq!(changes.inserts(), 2);
        assert!(script_is_valid(&old, &new, &changes));
    }

    #[test]
    fn test_table_limit_is_an_error() {
        let old: Vec<u32> = (0..10).collect();
        let new: Vec<u32> = (5..20).collect();
        let err = LcsDiff::with_max_cells(100).diff(&old, &new).unwrap_err();
        assert!(err.message.contains("exceeds limit of 100 cells"));
    }
}
