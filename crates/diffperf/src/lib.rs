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

//! DiffPerf Benchmark Harness
//!
//! Measures how long ordered-collection diff algorithms take on four
//! canonical workloads and reports the distribution of per-trial timings.
//!
//! ## Features
//!
//! - **Adapters**: Heckel, LCS and Myers diffs behind one [`DiffAlgorithm`] trait
//! - **Workloads**: created, deleted, same and changed pairs from two base collections
//! - **Statistics**: mean, min, max and nearest-rank percentiles over raw samples
//! - **Reports**: console breakdown lines, JSON and Markdown
//!
//! ## Usage
//!
//! ```
//! use diffperf::algorithms::MyersDiff;
//! use diffperf::core::BenchConfig;
//! use diffperf::harness::run_benchmark;
//! use diffperf::reporters::console;
//!
//! let from = ["a", "b", "c"];
//! let to = ["a", "x", "c", "d"];
//! let myers = MyersDiff::default();
//! let result = run_benchmark(&myers, &from, &to, &BenchConfig::new(10)).unwrap();
//!
//! let text = console::render_result(&result).unwrap();
//! assert!(text.starts_with("=== myers results:\n"));
//! ```
//!
//! Run the micro-benchmarks:
//! ```bash
//! cargo bench --package diffperf
//! ```

pub mod algorithms;
pub mod core;
pub mod error;
pub mod generators;
pub mod harness;
pub mod reporters;

pub use algorithms::{AlgorithmKind, ChangeSet, DiffAlgorithm, HeckelDiff, LcsDiff, MyersDiff};
pub use core::{BenchConfig, Clock, ExportFormat, ManualClock, MonotonicClock, TimingSeries};
pub use error::{validate_collection_size, AlgorithmError, BenchError, Result, MAX_COLLECTION_SIZE};
pub use generators::{generate_collections, generate_workloads, GeneratorConfig, WorkloadKind};
pub use harness::{run_benchmark, BenchmarkResult, BenchmarkRunner, WorkloadOutcome};
pub use reporters::BenchmarkReport;
