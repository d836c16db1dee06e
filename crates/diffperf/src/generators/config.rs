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

//! Collection generator configuration.

use crate::error::{validate_collection_size, BenchError, Result};

/// Default length of the generated `from` collection.
pub const DEFAULT_SIZE: usize = 1000;

/// Default fraction of `from` that is mutated to produce `to`.
pub const DEFAULT_CHANGE_RATIO: f64 = 0.1;

/// Default generator seed.
pub const DEFAULT_SEED: u64 = 42;

/// Generator configuration with builder pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of elements in `from`.
    pub size: usize,
    /// Mutations applied to the copy, as a fraction of `size`.
    pub change_ratio: f64,
    /// Seed for the random number generator.
    pub seed: u64,
}

impl GeneratorConfig {
    /// Creates a new configuration with default ratio and seed.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            change_ratio: DEFAULT_CHANGE_RATIO,
            seed: DEFAULT_SEED,
        }
    }

    /// Sets the change ratio.
    pub fn with_change_ratio(mut self, change_ratio: f64) -> Self {
        self.change_ratio = change_ratio;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of mutations to apply, rounded to the nearest whole edit.
    pub fn mutation_count(&self) -> usize {
        (self.size as f64 * self.change_ratio).round() as usize
    }

    /// Checks the size cap and that the ratio lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        validate_collection_size(self.size)?;
        if !(0.0..=1.0).contains(&self.change_ratio) {
            return Err(BenchError::invalid_config(
                "change_ratio",
                format!("must be within [0, 1], got {}", self.change_ratio),
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
