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

//! Clock capability used by the timing harness.
//!
//! The harness never touches `Instant` directly. It reads time through a
//! [`Clock`], so tests can substitute [`ManualClock`] and get exact,
//! reproducible timing series.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// Readings are offsets from an arbitrary origin fixed for the lifetime of
/// the clock. Only differences between readings are meaningful.
pub trait Clock {
    /// Returns the current reading.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall-clock time backed by [`std::time::Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Deterministic clock for tests.
///
/// Every call to [`Clock::now`] returns the current reading and then moves
/// the clock forward by `step`, so a single `measure` call observes exactly
/// one step of elapsed time.
#[derive(Debug, Default)]
pub struct ManualClock {
    current: Cell<Duration>,
    step: Duration,
}

impl ManualClock {
    /// Creates a clock that only moves when [`ManualClock::advance`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock that advances by `step` after every reading.
    pub fn with_step(step: Duration) -> Self {
        Self {
            current: Cell::new(Duration::ZERO),
            step,
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }

    /// Returns the current reading without advancing.
    pub fn peek(&self) -> Duration {
        self.current.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        let reading = self.current.get();
        self.current.set(reading + self.step);
        reading
    }
}
