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

//! The four canonical diff workloads.
//!
//! Every run derives exactly four (old, new) pairs from two base
//! collections. Workloads borrow the base collections, so nothing can be
//! mutated between trials, and `same` hands the very same slice to both
//! sides.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadKind {
    /// Empty old, `to` as new.
    Created,
    /// `from` as old, empty new.
    Deleted,
    /// `from` on both sides.
    Same,
    /// `from` as old, `to` as new.
    Changed,
}

impl WorkloadKind {
    /// All workloads in report order.
    pub const ALL: [WorkloadKind; 4] = [
        WorkloadKind::Created,
        WorkloadKind::Deleted,
        WorkloadKind::Same,
        WorkloadKind::Changed,
    ];

    /// Returns the workload name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadKind::Created => "created",
            WorkloadKind::Deleted => "deleted",
            WorkloadKind::Same => "same",
            WorkloadKind::Changed => "changed",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diff scenario.
#[derive(Debug)]
pub struct Workload<'a, T> {
    pub kind: WorkloadKind,
    pub old: &'a [T],
    pub new: &'a [T],
}

impl<T> Clone for Workload<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Workload<'_, T> {}

impl<'a, T> Workload<'a, T> {
    /// Builds the workload of the given shape from the base collections.
    pub fn new(kind: WorkloadKind, from: &'a [T], to: &'a [T]) -> Self {
        let (old, new): (&[T], &[T]) = match kind {
            WorkloadKind::Created => (&[], to),
            WorkloadKind::Deleted => (from, &[]),
            WorkloadKind::Same => (from, from),
            WorkloadKind::Changed => (from, to),
        };
        Self { kind, old, new }
    }
}

/// Derives the four workloads, in report order, from `from` and `to`.
///
/// Total over all inputs, including empty collections.
///
/// # Example
///
/// ```
/// use diffperf::generators::{generate_workloads, WorkloadKind};
///
/// let from = ["a", "b", "c"];
/// let to = ["a", "x", "c", "d"];
/// let [created, deleted, same, changed] = generate_workloads(&from, &to);
///
/// assert_eq!(created.kind, WorkloadKind::Created);
/// assert!(created.old.is_empty());
/// assert!(deleted.new.is_empty());
/// assert!(std::ptr::eq(same.old, same.new));
/// assert_eq!(changed.new, &to);
/// ```
pub fn generate_workloads<'a, T>(from: &'a [T], to: &'a [T]) -> [Workload<'a, T>; 4] {
    WorkloadKind::ALL.map(|kind| Workload::new(kind, from, to))
}
