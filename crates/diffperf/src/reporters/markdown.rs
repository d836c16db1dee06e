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

//! Markdown export for benchmark reports.

use crate::core::statistics::REPORT_PERCENTILES;
use crate::error::Result;
use crate::reporters::types::{BenchmarkReport, WorkloadStatus};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

fn columns() -> Vec<&'static str> {
    let mut columns = vec!["avg", "min", "max"];
    columns.extend(REPORT_PERCENTILES.iter().map(|(label, _)| *label));
    columns
}

/// Renders the report as Markdown, one table per adapter.
pub fn to_markdown(report: &BenchmarkReport) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# {}\n", report.title);
    let _ = writeln!(md, "**Timestamp:** {}\n", report.timestamp);
    let _ = writeln!(md, "**Trials per workload:** {}", report.trials);

    let columns = columns();

    for algorithm in &report.algorithms {
        let _ = writeln!(md, "\n## {}\n", algorithm.algorithm);
        let _ = writeln!(md, "| Workload | {} |", columns.join(" | "));
        let _ = writeln!(md, "|----------|{}", "------|".repeat(columns.len()));

        for row in &algorithm.workloads {
            let cells: Vec<String> = match &row.status {
                WorkloadStatus::Completed(s) => {
                    let mut cells: Vec<String> = [s.mean, s.min, s.max]
                        .iter()
                        .map(|v| format!("{:.6}", v))
                        .collect();
                    cells.extend(s.percentiles().iter().map(|(_, v)| format!("{:.6}", v)));
                    cells
                }
                WorkloadStatus::Failed { trial, reason } => {
                    let mut cells = vec![format!(
                        "failed at trial {}: {}",
                        trial,
                        reason.replace('|', "\\|")
                    )];
                    cells.resize(columns.len(), "-".to_string());
                    cells
                }
            };
            let _ = writeln!(md, "| {} | {} |", row.workload, cells.join(" | "));
        }
    }

    md
}

/// Exports benchmark report as Markdown.
pub fn export_markdown(report: &BenchmarkReport, path: &Path) -> Result<()> {
    fs::write(path, to_markdown(report))?;
    Ok(())
}
