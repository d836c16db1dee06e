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

//! Core benchmark infrastructure.
//!
//! # Modules
//!
//! - `clock`: Injectable monotonic time source
//! - `config`: Run configuration
//! - `measurement`: Single-invocation timing and trial loops
//! - `statistics`: Timing series and summary statistics

pub mod clock;
pub mod config;
pub mod measurement;
pub mod statistics;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{BenchConfig, ExportFormat, DEFAULT_TRIALS};
pub use measurement::{benchmark, benchmark_with_delay, measure, TrialFailure};
pub use statistics::{Summary, TimingSeries, REPORT_PERCENTILES};
