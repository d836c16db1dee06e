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

//! End-to-end runs: adapter, workloads, harness, statistics and reports.

use diffperf::core::clock::ManualClock;
use diffperf::reporters::{self, console, BenchmarkReport, WorkloadStatus};
use diffperf::{
    run_benchmark, AlgorithmError, AlgorithmKind, BenchConfig, BenchmarkRunner, DiffAlgorithm,
    ExportFormat, HeckelDiff, LcsDiff, MyersDiff, WorkloadKind, WorkloadOutcome,
};
use std::time::Duration;

const FROM: [&str; 3] = ["a", "b", "c"];
const TO: [&str; 4] = ["a", "x", "c", "d"];

fn assert_six_decimal_fields(line: &str) {
    let fields: Vec<&str> = line.split(", ").collect();
    assert_eq!(fields.len(), 8, "unexpected line: {}", line);

    let labels = ["avg", "min", "max", "p50", "p75", "p90", "p95", "p99"];
    for (field, label) in fields.iter().zip(labels) {
        let (name, value) = field.split_once(": ").unwrap();
        assert_eq!(name, label);
        let (_, decimals) = value.split_once('.').unwrap();
        assert_eq!(decimals.len(), 6, "value {} in {}", value, line);
        assert!(value.parse::<f64>().unwrap() >= 0.0);
    }
}

#[test]
fn test_small_run_with_system_clock() {
    let config = BenchConfig::new(10);
    let result = run_benchmark(&MyersDiff::default(), &FROM, &TO, &config).unwrap();

    for kind in WorkloadKind::ALL {
        let series = result.get(kind).series().unwrap();
        assert_eq!(series.len(), 10);
        assert!(series.minimum().unwrap() <= series.mean().unwrap());
        assert!(series.mean().unwrap() <= series.maximum().unwrap());
    }

    let rendered = console::render_result(&result).unwrap();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "=== myers results:");
    for (i, kind) in WorkloadKind::ALL.iter().enumerate() {
        assert_eq!(lines[1 + 2 * i], format!("{}:", kind));
        assert_six_decimal_fields(lines[2 + 2 * i]);
    }
}

#[test]
fn test_manual_clock_gives_exact_samples() {
    let runner = BenchmarkRunner::with_clock(
        BenchConfig::new(20),
        ManualClock::with_step(Duration::from_millis(1)),
    )
    .unwrap();

    for result in runner.run_all(&AlgorithmKind::ALL, &FROM, &TO) {
        for (_, outcome) in result.outcomes() {
            let series = outcome.series().unwrap();
            assert_eq!(series.len(), 20);
            assert_eq!(series.mean().unwrap(), Duration::from_millis(1));
            assert_eq!(series.percentile(0.99).unwrap(), Duration::from_millis(1));
        }

        let line = console::render_result(&result).unwrap();
        assert!(line.contains(
            "avg: 0.001000, min: 0.001000, max: 0.001000, p50: 0.001000, p75: 0.001000, \
             p90: 0.001000, p95: 0.001000, p99: 0.001000"
        ));
    }
}

struct AlwaysFails;

impl DiffAlgorithm<&'static str> for AlwaysFails {
    type Output = ();

    fn name(&self) -> &str {
        "always-fails"
    }

    fn diff(&self, _: &[&'static str], _: &[&'static str]) -> Result<(), AlgorithmError> {
        Err(AlgorithmError::new("unsupported"))
    }
}

#[test]
fn test_failing_adapter_reports_trial_zero() {
    let runner = BenchmarkRunner::with_clock(
        BenchConfig::new(5),
        ManualClock::with_step(Duration::from_millis(1)),
    )
    .unwrap();
    let result = runner.run(&AlwaysFails, &FROM, &TO);

    for (_, outcome) in result.outcomes() {
        assert_eq!(
            outcome,
            &WorkloadOutcome::Failed {
                trial: 0,
                error: AlgorithmError::new("unsupported"),
            }
        );
        assert!(outcome.series().is_none());
    }

    let rendered = console::render_result(&result).unwrap();
    assert_eq!(rendered.matches("failed at trial 0: unsupported").count(), 4);
}

#[test]
fn test_lcs_limit_fails_only_large_workloads() {
    let from: Vec<u32> = (0..50).collect();
    let to: Vec<u32> = (25..75).collect();
    let runner = BenchmarkRunner::with_clock(BenchConfig::new(3), ManualClock::new()).unwrap();

    let result = runner.run(&LcsDiff::with_max_cells(100), &from, &to);

    // Tables for an empty side have at most 51 cells.
    assert!(result.created.is_completed());
    assert!(result.deleted.is_completed());
    assert!(matches!(result.same, WorkloadOutcome::Failed { trial: 0, .. }));
    assert!(matches!(result.changed, WorkloadOutcome::Failed { trial: 0, .. }));
}

#[test]
fn test_myers_trace_limit_fails_created_workload() {
    let from: Vec<String> = vec!["a".to_string(), "b".to_string()];
    let to: Vec<String> = (0..20_000).map(|i| format!("item-{}", i)).collect();
    let runner = BenchmarkRunner::with_clock(BenchConfig::new(3), ManualClock::new()).unwrap();

    let result = runner.run(&MyersDiff::with_max_cells(10_000), &from, &to);

    match &result.created {
        WorkloadOutcome::Failed { trial, error } => {
            assert_eq!(*trial, 0);
            assert!(error.message.contains("exceeds limit of 10000 cells"));
        }
        other => panic!("Expected Failed, got {:?}", other),
    }
    assert!(result.deleted.is_completed());
    assert!(result.same.is_completed());
    assert!(!result.is_complete());

    let rendered = console::render_result(&result).unwrap();
    assert!(rendered.contains("created:\nfailed at trial 0: Myers trace"));
}

#[test]
fn test_same_workload_yields_no_changes() {
    let from = ["q", "r", "q", "s"];
    let [_, _, same, _] = diffperf::generate_workloads(&from, &TO);

    assert!(HeckelDiff.diff(same.old, same.new).unwrap().is_empty());
    assert!(LcsDiff::default().diff(same.old, same.new).unwrap().is_empty());
    assert!(MyersDiff::default().diff(same.old, same.new).unwrap().is_empty());
}

#[test]
fn test_report_in_every_format() {
    let runner = BenchmarkRunner::with_clock(
        BenchConfig::new(4),
        ManualClock::with_step(Duration::from_micros(250)),
    )
    .unwrap();
    let results = runner.run_all(&[AlgorithmKind::Heckel, AlgorithmKind::Lcs], &FROM, &TO);
    let report = BenchmarkReport::from_results("DiffPerf", 4, &results).unwrap();

    assert!(matches!(
        report.algorithms[1].workloads[3].status,
        WorkloadStatus::Completed(ref s) if s.trials == 4
    ));

    let console = reporters::render(&report, ExportFormat::Console).unwrap();
    assert_eq!(console.matches("results:").count(), 2);
    assert!(console.contains("p99: 0.000250"));

    let json = reporters::render(&report, ExportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["algorithms"][1]["algorithm"], "lcs");

    let markdown = reporters::render(&report, ExportFormat::Markdown).unwrap();
    assert!(markdown.contains("## heckel"));
    assert!(markdown.contains("| changed | 0.000250 |"));
}
