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

//! Console reporter for benchmark results.
//!
//! Per adapter:
//!
//! ```text
//! === heckel results:
//! created:
//! avg: 0.000001, min: 0.000001, max: 0.000002, p50: 0.000001, p75: 0.000001, p90: 0.000001, p95: 0.000001, p99: 0.000002
//! deleted:
//! ...
//! ```
//!
//! All values are seconds with six decimals.

use crate::core::statistics::TimingSeries;
use crate::error::Result;
use crate::harness::BenchmarkResult;
use crate::reporters::types::{AlgorithmReport, BenchmarkReport, SummarySnapshot, WorkloadStatus};
use std::fmt::Write as _;

/// Formats the breakdown line of one series.
///
/// # Errors
///
/// [`BenchError::EmptySeries`](crate::error::BenchError::EmptySeries) if the
/// series has no samples.
pub fn breakdown(series: &TimingSeries) -> Result<String> {
    Ok(format_breakdown(&SummarySnapshot::from_series(series)?))
}

/// Formats the breakdown line of a snapshot.
pub fn format_breakdown(snapshot: &SummarySnapshot) -> String {
    let mut line = format!(
        "avg: {:.6}, min: {:.6}, max: {:.6}",
        snapshot.mean, snapshot.min, snapshot.max
    );
    for (label, value) in snapshot.percentiles() {
        let _ = write!(line, ", {}: {:.6}", label, value);
    }
    line
}

fn format_status(status: &WorkloadStatus) -> String {
    match status {
        WorkloadStatus::Completed(snapshot) => format_breakdown(snapshot),
        WorkloadStatus::Failed { trial, reason } => {
            format!("failed at trial {}: {}", trial, reason)
        }
    }
}

/// Renders one adapter block.
pub fn render_algorithm(report: &AlgorithmReport) -> String {
    let mut out = format!("=== {} results:\n", report.algorithm);
    for workload in &report.workloads {
        let _ = writeln!(out, "{}:", workload.workload);
        let _ = writeln!(out, "{}", format_status(&workload.status));
    }
    out
}

/// Renders one benchmark result.
pub fn render_result(result: &BenchmarkResult) -> Result<String> {
    Ok(render_algorithm(&AlgorithmReport::from_result(result)?))
}

/// Renders every adapter block, separated by blank lines.
pub fn render_report(report: &BenchmarkReport) -> String {
    report
        .algorithms
        .iter()
        .map(render_algorithm)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints one benchmark result to stdout.
pub fn print_result(result: &BenchmarkResult) -> Result<()> {
    print!("{}", render_result(result)?);
    Ok(())
}

/// Prints the full report to stdout.
pub fn print_report(report: &BenchmarkReport) {
    print!("{}", render_report(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgorithmError;
    use crate::harness::WorkloadOutcome;
    use std::time::Duration;

    fn micros(values: &[u64]) -> TimingSeries {
        values.iter().map(|&us| Duration::from_micros(us)).collect()
    }

    #[test]
    fn test_breakdown_format() {
        let line = breakdown(&micros(&[1, 2, 3, 6])).unwrap();
        assert_eq!(
            line,
            "avg: 0.000003, min: 0.000001, max: 0.000006, p50: 0.000003, p75: 0.000006, \
             p90: 0.000006, p95: 0.000006, p99: 0.000006"
        );
    }

    #[test]
    fn test_breakdown_rounds_to_six_decimals() {
        let series: TimingSeries = [Duration::from_nanos(1_499)].into_iter().collect();
        let line = breakdown(&series).unwrap();
        assert!(line.starts_with("avg: 0.000001, min: 0.000001"));
    }

    #[test]
    fn test_breakdown_empty_series() {
        assert!(breakdown(&TimingSeries::new()).is_err());
    }

    #[test]
    fn test_render_result() {
        let ok = WorkloadOutcome::Completed(micros(&[2, 2]));
        let result = BenchmarkResult {
            algorithm: "myers".to_string(),
            created: ok.clone(),
            deleted: ok.clone(),
            same: WorkloadOutcome::Failed {
                trial: 1,
                error: AlgorithmError::new("out of memory"),
            },
            changed: ok,
        };

        let rendered = render_result(&result).unwrap();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "=== myers results:");
        assert_eq!(lines[1], "created:");
        assert!(lines[2].starts_with("avg: 0.000002"));
        assert_eq!(lines[5], "same:");
        assert_eq!(lines[6], "failed at trial 1: out of memory");
        assert_eq!(lines[7], "changed:");
    }

    #[test]
    fn test_render_report_separates_blocks() {
        let ok = WorkloadOutcome::Completed(micros(&[1]));
        let make = |name: &str| BenchmarkResult {
            algorithm: name.to_string(),
            created: ok.clone(),
            deleted: ok.clone(),
            same: ok.clone(),
            changed: ok.clone(),
        };
        let report = BenchmarkReport::from_results("t", 1, &[make("heckel"), make("lcs")]).unwrap();
        let rendered = render_report(&report);

        assert!(rendered.starts_with("=== heckel results:\n"));
        assert!(rendered.contains("\n\n=== lcs results:\n"));
    }
}
