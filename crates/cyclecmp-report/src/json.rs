// cyclecmp - Benchmark cycle comparison toolkit
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

//! JSON export for analysis reports.

use crate::types::AnalysisReport;
use std::fs;
use std::io;
use std::path::Path;

/// Serializes a report as pretty-printed JSON.
pub fn to_json(report: &AnalysisReport) -> io::Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Exports an analysis report as JSON.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
pub fn export_json(report: &AnalysisReport, path: &Path) -> io::Result<()> {
    let json = to_json(report)?;
    fs::write(path, json)?;
    Ok(())
}
