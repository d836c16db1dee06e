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

//! JSON export for benchmark reports.

use crate::error::Result;
use crate::reporters::types::BenchmarkReport;
use std::fs;
use std::path::Path;

/// Serializes the report as pretty-printed JSON.
pub fn to_json_string(report: &BenchmarkReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Exports benchmark report as JSON.
pub fn export_json(report: &BenchmarkReport, path: &Path) -> Result<()> {
    fs::write(path, to_json_string(report)?)?;
    Ok(())
}
