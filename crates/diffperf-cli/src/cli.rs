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

//! Argument parsing and the benchmark command.

use crate::error::CliError;
use clap::Parser;
use diffperf::core::DEFAULT_TRIALS;
use diffperf::generators::{DEFAULT_CHANGE_RATIO, DEFAULT_SEED, DEFAULT_SIZE};
use diffperf::{
    generate_collections, reporters, validate_collection_size, AlgorithmKind, BenchConfig,
    BenchmarkReport, BenchmarkRunner, ExportFormat, GeneratorConfig,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Title used for every rendered report.
pub const REPORT_TITLE: &str = "DiffPerf";

/// DiffPerf - diff algorithm micro-benchmarks
///
/// Times each selected diff algorithm on the created, deleted, same and
/// changed workloads and prints the per-workload timing distribution.
///
/// # Examples
///
/// ```bash
/// # All algorithms on generated collections
/// diffperf
///
/// # Myers only, 200 trials, JSON report
/// diffperf -a myers -n 200 --format json
///
/// # Your own collections, one element per line
/// diffperf --from old.txt --to new.txt
/// ```
#[derive(Debug, Parser)]
#[command(name = "diffperf")]
#[command(author, version, about = "DiffPerf - diff algorithm micro-benchmarks", long_about = None)]
pub struct Cli {
    /// Algorithm to benchmark (heckel, lcs, myers); repeat for several, default all
    #[arg(short, long = "algorithm", value_name = "NAME")]
    pub algorithms: Vec<AlgorithmKind>,

    /// Trials per workload
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Length of the generated `from` collection
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Fraction of `from` mutated to produce `to`
    #[arg(long, default_value_t = DEFAULT_CHANGE_RATIO)]
    pub change_ratio: f64,

    /// Seed for collection generation
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Newline-delimited `from` collection (requires --to)
    #[arg(long, value_name = "FILE", requires = "to")]
    pub from: Option<PathBuf>,

    /// Newline-delimited `to` collection (requires --from)
    #[arg(long, value_name = "FILE", requires = "from")]
    pub to: Option<PathBuf>,

    /// Report format (console, json, markdown)
    #[arg(short, long, default_value_t = ExportFormat::Console)]
    pub format: ExportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pause between consecutive trials, in milliseconds
    #[arg(long, value_name = "MS")]
    pub trial_delay_ms: Option<u64>,
}

impl Cli {
    /// Builds the harness configuration from the flags.
    pub fn bench_config(&self) -> BenchConfig {
        let config = BenchConfig::new(self.trials).with_export_format(self.format);
        match self.trial_delay_ms {
            Some(ms) => config.with_trial_delay(Duration::from_millis(ms)),
            None => config,
        }
    }

    /// Selected algorithms, or all of them if none were named.
    pub fn selected_algorithms(&self) -> Vec<AlgorithmKind> {
        if self.algorithms.is_empty() {
            AlgorithmKind::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    /// Runs the benchmark and writes the report.
    pub fn execute(&self) -> Result<(), CliError> {
        let config = self.bench_config();
        config.validate()?;

        let (from, to) = self.load_collections()?;
        info!("Collections ready: from={} to={}", from.len(), to.len());

        let runner = BenchmarkRunner::new(config)?;
        let results = runner.run_all(&self.selected_algorithms(), &from, &to);

        let report = BenchmarkReport::from_results(REPORT_TITLE, self.trials, &results)?;
        let content = reporters::render(&report, self.format)?;
        write_output(&content, self.output.as_deref())
    }

    fn load_collections(&self) -> Result<(Vec<String>, Vec<String>), CliError> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) => Ok((read_collection(from)?, read_collection(to)?)),
            _ => {
                let generator = GeneratorConfig::new(self.size)
                    .with_change_ratio(self.change_ratio)
                    .with_seed(self.seed);
                debug!("Generating collections: {:?}", generator);
                Ok(generate_collections(&generator)?)
            }
        }
    }
}

/// Reads a newline-delimited collection, one element per line.
///
/// A trailing newline does not add an empty element; `\r\n` endings are
/// accepted.
pub fn read_collection(path: &Path) -> Result<Vec<String>, CliError> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    let items: Vec<String> = content.lines().map(str::to_owned).collect();
    validate_collection_size(items.len())?;
    debug!("Read {} elements from {}", items.len(), path.display());
    Ok(items)
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(|e| CliError::io_error(p, e))?;
            info!("Report written to {}", p.display());
            Ok(())
        }
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::Stdout(e.to_string())),
    }
}
