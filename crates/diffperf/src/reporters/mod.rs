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

//! Benchmark reporters for various output formats.
//!
//! # Modules
//!
//! - `types`: Report data structures
//! - `console`: Plain-text breakdown lines
//! - `json`: JSON export
//! - `markdown`: Markdown export

pub mod console;
pub mod json;
pub mod markdown;
pub mod types;

pub use console::{breakdown, print_report, print_result, render_report, render_result};
pub use json::{export_json, to_json_string};
pub use markdown::{export_markdown, to_markdown};
pub use types::{AlgorithmReport, BenchmarkReport, SummarySnapshot, WorkloadReport, WorkloadStatus};

use crate::core::config::ExportFormat;
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Renders the report in the requested format.
pub fn render(report: &BenchmarkReport, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Console => Ok(render_report(report)),
        ExportFormat::Json => to_json_string(report),
        ExportFormat::Markdown => Ok(to_markdown(report)),
    }
}

/// Renders the report and writes it to `path`.
pub fn export(report: &BenchmarkReport, format: ExportFormat, path: &Path) -> Result<()> {
    fs::write(path, render(report, format)?)?;
    Ok(())
}
