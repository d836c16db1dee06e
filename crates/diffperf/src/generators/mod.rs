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

//! Workload and collection generators.
//!
//! - [`workload`]: the four canonical (old, new) pairs derived from two
//!   base collections.
//! - [`collections`]: seeded generation of the base collections themselves.

pub mod collections;
pub mod config;
pub mod workload;

pub use collections::{generate_collections, CollectionGenerator};
pub use config::{GeneratorConfig, DEFAULT_CHANGE_RATIO, DEFAULT_SEED, DEFAULT_SIZE};
pub use workload::{generate_workloads, Workload, WorkloadKind};
