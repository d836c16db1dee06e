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

//! Seeded base collection generation.
//!
//! `from` is a run of distinct identifiers. `to` starts as a copy of `from`
//! and receives [`GeneratorConfig::mutation_count`] random edits, each one a
//! deletion, an insertion of a fresh identifier, or a swap of two positions.

use super::config::GeneratorConfig;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy)]
enum Mutation {
    Delete,
    Insert,
    Swap,
}

const MUTATIONS: [Mutation; 3] = [Mutation::Delete, Mutation::Insert, Mutation::Swap];

/// Deterministic generator for `from`/`to` pairs.
#[derive(Debug, Clone)]
pub struct CollectionGenerator {
    config: GeneratorConfig,
}

impl CollectionGenerator {
    /// Creates a generator after validating `config`.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Produces `(from, to)`. The same configuration always yields the same pair.
    pub fn generate(&self) -> (Vec<String>, Vec<String>) {
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        let from: Vec<String> = (0..self.config.size)
            .map(|i| format!("item-{}", i))
            .collect();
        let mut to = from.clone();
        let mut inserted = 0usize;

        for _ in 0..self.config.mutation_count() {
            match MUTATIONS[rng.gen_range(0..MUTATIONS.len())] {
                Mutation::Delete => {
                    if !to.is_empty() {
                        let index = rng.gen_range(0..to.len());
                        to.remove(index);
                    }
                }
                Mutation::Insert => {
                    let index = rng.gen_range(0..=to.len());
                    to.insert(index, format!("new-{}", inserted));
                    inserted += 1;
                }
                Mutation::Swap => {
                    if to.len() >= 2 {
                        let a = rng.gen_range(0..to.len());
                        let b = rng.gen_range(0..to.len());
                        to.swap(a, b);
                    }
                }
            }
        }

        (from, to)
    }
}

/// Validates `config` and generates a `(from, to)` pair.
///
/// # Example
///
/// ```
/// use diffperf::generators::{generate_collections, GeneratorConfig};
///
/// let config = GeneratorConfig::new(100).with_change_ratio(0.2).with_seed(7);
/// let (from, to) = generate_collections(&config).unwrap();
/// assert_eq!(from.len(), 100);
/// assert_eq!(generate_collections(&config).unwrap().1, to);
/// ```
pub fn generate_collections(config: &GeneratorConfig) -> Result<(Vec<String>, Vec<String>)> {
    Ok(CollectionGenerator::new(config.clone())?.generate())
}
