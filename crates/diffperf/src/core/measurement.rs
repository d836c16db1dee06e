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

//! Single-invocation timing primitives.
//!
//! [`measure`] times exactly one call. [`benchmark`] repeats it for a fixed
//! number of trials, strictly one after another, and stops at the first
//! failing trial. There is no warmup and no smoothing: every sample is one
//! raw clock difference.

use crate::core::clock::Clock;
use crate::core::statistics::TimingSeries;
use crate::error::AlgorithmError;
use std::hint::black_box;
use std::time::Duration;
use thiserror::Error;

/// A trial whose operation returned an error.
///
/// The series built so far is discarded; no placeholder sample is recorded
/// for the failing trial.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("trial {trial} failed: {source}")]
pub struct TrialFailure {
    /// Zero-based index of the failing trial.
    pub trial: usize,
    /// Error returned by the operation.
    #[source]
    pub source: AlgorithmError,
}

/// Times exactly one invocation of `op`.
///
/// The clock is read immediately before and immediately after the call.
/// The operation's output is passed through [`black_box`] and dropped only
/// after the second reading.
///
/// # Errors
///
/// Returns the operation's own error unchanged.
///
/// # Example
///
/// ```
/// use diffperf::core::clock::ManualClock;
/// use diffperf::core::measurement::measure;
/// use diffperf::error::AlgorithmError;
/// use std::time::Duration;
///
/// let clock = ManualClock::with_step(Duration::from_micros(3));
/// let elapsed = measure(&clock, || Ok::<_, AlgorithmError>(42)).unwrap();
/// assert_eq!(elapsed, Duration::from_micros(3));
/// ```
pub fn measure<C, F, T, E>(clock: &C, op: F) -> Result<Duration, E>
where
    C: Clock + ?Sized,
    F: FnOnce() -> Result<T, E>,
{
    let start = clock.now();
    let output = black_box(op());
    let end = clock.now();

    output.map(|value| {
        drop(value);
        end.saturating_sub(start)
    })
}

/// Runs `op` `trials` times and collects one sample per trial.
///
/// # Errors
///
/// Stops at the first failing trial and returns [`TrialFailure`].
pub fn benchmark<C, F, T>(clock: &C, trials: usize, op: F) -> Result<TimingSeries, TrialFailure>
where
    C: Clock + ?Sized,
    F: FnMut() -> Result<T, AlgorithmError>,
{
    benchmark_with_delay(clock, trials, None, op)
}

/// Like [`benchmark`], pausing for `delay` between consecutive trials.
///
/// The pause happens outside the measured interval and is skipped after the
/// last trial.
pub fn benchmark_with_delay<C, F, T>(
    clock: &C,
    trials: usize,
    delay: Option<Duration>,
    mut op: F,
) -> Result<TimingSeries, TrialFailure>
where
    C: Clock + ?Sized,
    F: FnMut() -> Result<T, AlgorithmError>,
{
    let mut series = TimingSeries::with_capacity(trials);

    for trial in 0..trials {
        let sample = measure(clock, &mut op).map_err(|source| TrialFailure { trial, source })?;
        series.push(sample);

        if let Some(delay) = delay {
            if trial + 1 < trials && !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::{ManualClock, MonotonicClock};
    use std::cell::Cell;

    #[test]
    fn test_measure_invokes_once() {
        let clock = ManualClock::with_step(Duration::from_millis(1));
        let calls = Cell::new(0);

        let elapsed = measure(&clock, || {
            calls.set(calls.get() + 1);
            Ok::<_, AlgorithmError>(())
        })
        .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(elapsed, Duration::from_millis(1));
    }

    #[test]
    fn test_measure_excludes_outside_work() {
        let clock = ManualClock::with_step(Duration::from_millis(1));
        clock.advance(Duration::from_secs(10));

        let elapsed = measure(&clock, || {
            // Time passing inside the op is part of the sample.
            clock.advance(Duration::from_millis(4));
            Ok::<_, AlgorithmError>(())
        })
        .unwrap();

        assert_eq!(elapsed, Duration::from_millis(5));
    }

    #[test]
    fn test_measure_propagates_error() {
        let clock = ManualClock::new();
        let result = measure(&clock, || Err::<(), _>(AlgorithmError::new("nope")));
        assert_eq!(result, Err(AlgorithmError::new("nope")));
    }

    #[test]
    fn test_benchmark_collects_all_trials() {
        let clock = ManualClock::with_step(Duration::from_micros(10));
        let series = benchmark(&clock, 25, || Ok(())).unwrap();

        assert_eq!(series.len(), 25);
        assert!(series
            .samples()
            .iter()
            .all(|s| *s == Duration::from_micros(10)));
    }

    #[test]
    fn test_benchmark_zero_trials() {
        let clock = ManualClock::new();
        let series = benchmark(&clock, 0, || Ok(())).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_benchmark_stops_on_failure() {
        let clock = ManualClock::with_step(Duration::from_micros(1));
        let mut calls = 0;

        let result = benchmark(&clock, 100, || {
            calls += 1;
            if calls == 4 {
                Err(AlgorithmError::new("fourth call fails"))
            } else {
                Ok(())
            }
        });

        assert_eq!(calls, 4);
        let failure = result.unwrap_err();
        assert_eq!(failure.trial, 3);
        assert_eq!(failure.source.message, "fourth call fails");
    }

    #[test]
    fn test_benchmark_real_clock_non_negative() {
        let clock = MonotonicClock::new();
        let series = benchmark(&clock, 50, || Ok((0..100u64).sum::<u64>())).unwrap();
        assert_eq!(series.len(), 50);
        assert!(series.samples().iter().all(|s| *s >= Duration::ZERO));
    }

    #[test]
    fn test_benchmark_with_delay_keeps_delay_out_of_samples() {
        let clock = MonotonicClock::new();
        let series =
            benchmark_with_delay(&clock, 3, Some(Duration::from_millis(5)), || Ok(())).unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.maximum().unwrap() < Duration::from_millis(5));
    }
}
