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

//! Benchmark runner: one adapter, four workloads, fixed trial count.

use crate::algorithms::{AlgorithmKind, DiffAlgorithm, HeckelDiff, LcsDiff, MyersDiff};
use crate::core::clock::{Clock, MonotonicClock};
use crate::core::config::BenchConfig;
use crate::core::measurement::{benchmark_with_delay, TrialFailure};
use crate::core::statistics::TimingSeries;
use crate::error::{AlgorithmError, BenchError, Result};
use crate::generators::{generate_workloads, Workload, WorkloadKind};
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::{debug, info, warn};

/// What happened to one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadOutcome {
    /// Every trial ran; one sample per trial.
    Completed(TimingSeries),
    /// The adapter failed; no samples are kept.
    Failed {
        /// Zero-based index of the failing trial.
        trial: usize,
        /// Error returned by the adapter.
        error: AlgorithmError,
    },
}

impl WorkloadOutcome {
    /// Returns the series if the workload completed.
    pub fn series(&self) -> Option<&TimingSeries> {
        match self {
            WorkloadOutcome::Completed(series) => Some(series),
            WorkloadOutcome::Failed { .. } => None,
        }
    }

    /// Returns true if every trial ran.
    pub fn is_completed(&self) -> bool {
        matches!(self, WorkloadOutcome::Completed(_))
    }
}

/// Outcomes of all four workloads for one adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Adapter name.
    pub algorithm: String,
    pub created: WorkloadOutcome,
    pub deleted: WorkloadOutcome,
    pub same: WorkloadOutcome,
    pub changed: WorkloadOutcome,
}

impl BenchmarkResult {
    /// Outcome for the given workload.
    pub fn get(&self, kind: WorkloadKind) -> &WorkloadOutcome {
        match kind {
            WorkloadKind::Created => &self.created,
            WorkloadKind::Deleted => &self.deleted,
            WorkloadKind::Same => &self.same,
            WorkloadKind::Changed => &self.changed,
        }
    }

    /// Outcomes in report order.
    pub fn outcomes(&self) -> impl Iterator<Item = (WorkloadKind, &WorkloadOutcome)> + '_ {
        WorkloadKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Returns true if no workload failed.
    pub fn is_complete(&self) -> bool {
        self.outcomes().all(|(_, outcome)| outcome.is_completed())
    }

    /// Failed workloads, each as a [`BenchError::AlgorithmFailure`].
    pub fn failures(&self) -> impl Iterator<Item = (WorkloadKind, BenchError)> + '_ {
        self.outcomes().filter_map(move |(kind, outcome)| match outcome {
            WorkloadOutcome::Completed(_) => None,
            WorkloadOutcome::Failed { trial, error } => Some((
                kind,
                BenchError::AlgorithmFailure {
                    algorithm: self.algorithm.clone(),
                    trial: *trial,
                    source: error.clone(),
                },
            )),
        })
    }
}

/// Runs adapters against the four workloads with an injected clock.
#[derive(Debug, Clone)]
pub struct BenchmarkRunner<C = MonotonicClock> {
    config: BenchConfig,
    clock: C,
}

impl BenchmarkRunner<MonotonicClock> {
    /// Creates a runner timed by the system monotonic clock.
    pub fn new(config: BenchConfig) -> Result<Self> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> BenchmarkRunner<C> {
    /// Creates a runner timed by `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] if the configuration is invalid.
    pub fn with_clock(config: BenchConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Times `adapter` on all four workloads derived from `from` and `to`.
    ///
    /// A failing workload is recorded as [`WorkloadOutcome::Failed`] and the
    /// remaining workloads still run.
    pub fn run<T, A>(&self, adapter: &A, from: &[T], to: &[T]) -> BenchmarkResult
    where
        T: Eq + Hash,
        A: DiffAlgorithm<T> + ?Sized,
    {
        let name = adapter.name().to_string();
        info!(
            "Benchmarking {}: {} trials per workload, from={} to={}",
            name,
            self.config.trials,
            from.len(),
            to.len()
        );

        let [created, deleted, same, changed] = generate_workloads(from, to)
            .map(|workload| self.run_workload(&name, adapter, workload));

        let result = BenchmarkResult {
            algorithm: name,
            created,
            deleted,
            same,
            changed,
        };
        for (kind, err) in result.failures() {
            warn!("{} workload skipped: {}", kind, err);
        }
        result
    }

    /// Times one of the bundled adapters.
    pub fn run_kind<T: Eq + Hash>(
        &self,
        kind: AlgorithmKind,
        from: &[T],
        to: &[T],
    ) -> BenchmarkResult {
        match kind {
            AlgorithmKind::Heckel => self.run(&HeckelDiff, from, to),
            AlgorithmKind::Lcs => self.run(&LcsDiff::default(), from, to),
            AlgorithmKind::Myers => self.run(&MyersDiff::default(), from, to),
        }
    }

    /// Times each of `kinds` in order.
    pub fn run_all<T: Eq + Hash>(
        &self,
        kinds: &[AlgorithmKind],
        from: &[T],
        to: &[T],
    ) -> Vec<BenchmarkResult> {
        kinds
            .iter()
            .map(|&kind| self.run_kind(kind, from, to))
            .collect()
    }

    fn run_workload<T, A>(
        &self,
        name: &str,
        adapter: &A,
        workload: Workload<'_, T>,
    ) -> WorkloadOutcome
    where
        T: Eq + Hash,
        A: DiffAlgorithm<T> + ?Sized,
    {
        debug!(
            "{} / {}: old={} new={}",
            name,
            workload.kind,
            workload.old.len(),
            workload.new.len()
        );

        let result = benchmark_with_delay(
            &self.clock,
            self.config.trials,
            self.config.trial_delay,
            || adapter.diff(workload.old, workload.new),
        );

        match result {
            Ok(series) => {
                debug!("{} / {}: {} samples", name, workload.kind, series.len());
                WorkloadOutcome::Completed(series)
            }
            Err(TrialFailure { trial, source }) => WorkloadOutcome::Failed {
                trial,
                error: source,
            },
        }
    }
}

/// Times `adapter` on the four workloads with the system monotonic clock.
///
/// # Errors
///
/// Returns [`BenchError::InvalidConfig`] if `config` is invalid. Adapter
/// failures are not errors; they appear as [`WorkloadOutcome::Failed`].
///
/// # Example
///
/// ```
/// use diffperf::algorithms::HeckelDiff;
/// use diffperf::core::BenchConfig;
/// use diffperf::harness::run_benchmark;
///
/// let from = ["a", "b", "c"];
/// let to = ["a", "x", "c", "d"];
/// let result = run_benchmark(&HeckelDiff, &from, &to, &BenchConfig::new(10)).unwrap();
///
/// assert_eq!(result.algorithm, "heckel");
/// assert_eq!(result.changed.series().unwrap().len(), 10);
/// ```
pub fn run_benchmark<T, A>(
    adapter: &A,
    from: &[T],
    to: &[T],
    config: &BenchConfig,
) -> Result<BenchmarkResult>
where
    T: Eq + Hash,
    A: DiffAlgorithm<T> + ?Sized,
{
    Ok(BenchmarkRunner::new(config.clone())?.run(adapter, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::ChangeSet;
    use crate::core::clock::ManualClock;
    use std::cell::Cell;
    use std::time::Duration;

    /// Fails whenever both sides are non-empty.
    struct FailsOnChanged;

    impl<T: Eq + Hash> DiffAlgorithm<T> for FailsOnChanged {
        type Output = ();

        fn name(&self) -> &str {
            "fails-on-changed"
        }

        fn diff(&self, old: &[T], new: &[T]) -> std::result::Result<(), AlgorithmError> {
            if !old.is_empty() && !new.is_empty() {
                return Err(AlgorithmError::new("both sides populated"));
            }
            Ok(())
        }
    }

    /// Counts calls.
    struct Counting(Cell<usize>);

    impl<T: Eq + Hash> DiffAlgorithm<T> for Counting {
        type Output = ChangeSet;

        fn name(&self) -> &str {
            "counting"
        }

        fn diff(&self, _: &[T], _: &[T]) -> std::result::Result<ChangeSet, AlgorithmError> {
            self.0.set(self.0.get() + 1);
            Ok(ChangeSet::new())
        }
    }

    fn manual_runner(trials: usize) -> BenchmarkRunner<ManualClock> {
        BenchmarkRunner::with_clock(
            BenchConfig::new(trials),
            ManualClock::with_step(Duration::from_millis(1)),
        )
        .unwrap()
    }

    #[test]
    fn test_every_sample_is_one_step() {
        let runner = manual_runner(5);
        let result = runner.run(&HeckelDiff, &["a", "b"], &["b", "c"]);

        assert_eq!(result.algorithm, "heckel");
        for (_, outcome) in result.outcomes() {
            let series = outcome.series().unwrap();
            assert_eq!(series.len(), 5);
            assert!(series
                .samples()
                .iter()
                .all(|s| *s == Duration::from_millis(1)));
        }
        assert!(result.is_complete());
    }

    #[test]
    fn test_adapter_called_trials_times_per_workload() {
        let runner = manual_runner(7);
        let adapter = Counting(Cell::new(0));
        runner.run(&adapter, &[1, 2], &[2, 3]);
        assert_eq!(adapter.0.get(), 28);
    }

    #[test]
    fn test_failure_is_recorded_not_zeroed() {
        let runner = manual_runner(3);
        let result = runner.run(&FailsOnChanged, &[1], &[2]);

        assert!(result.created.is_completed());
        assert!(result.deleted.is_completed());
        assert_eq!(
            result.same,
            WorkloadOutcome::Failed {
                trial: 0,
                error: AlgorithmError::new("both sides populated"),
            }
        );
        assert!(result.changed.series().is_none());
        assert!(!result.is_complete());

        let failures: Vec<_> = result.failures().collect();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].0, WorkloadKind::Same);
        assert_eq!(
            failures[1].1.to_string(),
            "algorithm 'fails-on-changed' failed at trial 0: both sides populated"
        );
    }

    #[test]
    fn test_oversized_myers_trace_fails_only_its_workloads() {
        let runner = manual_runner(3);
        let items: Vec<u32> = (0..200).collect();
        let result = runner.run(&MyersDiff::with_max_cells(1_000), &items, &items);

        // created and deleted need D = 200; same and changed stay at D = 0
        for outcome in [&result.created, &result.deleted] {
            match outcome {
                WorkloadOutcome::Failed { trial, error } => {
                    assert_eq!(*trial, 0);
                    assert!(error.message.contains("exceeds limit of 1000 cells"));
                }
                other => panic!("Expected Failed, got {:?}", other),
            }
        }
        assert_eq!(result.same.series().unwrap().len(), 3);
        assert_eq!(result.changed.series().unwrap().len(), 3);
    }

    #[test]
    fn test_run_kind_names() {
        let runner = manual_runner(1);
        let results = runner.run_all(&AlgorithmKind::ALL, &["a"], &["b"]);
        let names: Vec<_> = results.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(names, ["heckel", "lcs", "myers"]);
    }

    #[test]
    fn test_rejects_zero_trials() {
        let err = BenchmarkRunner::new(BenchConfig::new(0)).unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig { .. }));

        let err = run_benchmark(&MyersDiff::default(), &[1], &[1], &BenchConfig::new(0))
            .unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig { .. }));
    }

    #[test]
    fn test_get_matches_fields() {
        let runner = manual_runner(2);
        let result = runner.run(&LcsDiff::default(), &[1, 2, 3], &[3]);
        assert_eq!(result.get(WorkloadKind::Created), &result.created);
        assert_eq!(result.get(WorkloadKind::Changed), &result.changed);
    }
}
