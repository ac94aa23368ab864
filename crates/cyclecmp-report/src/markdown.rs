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

//! Markdown export for analysis reports.

use crate::types::AnalysisReport;
use std::fs;
use std::io;
use std::path::Path;

fn cell(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Renders a report as Markdown.
pub fn to_markdown(report: &AnalysisReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Cycle comparison: {}\n\n", report.source));
    md.push_str(&format!("**Timestamp:** {}\n\n", report.timestamp));
    md.push_str(&format!(
        "**Rows:** {} read, {} normalized, {} kept\n\n",
        report.records_read, report.records_normalized, report.records_kept
    ));

    let lines: Vec<&str> = report.lines().collect();
    if !lines.is_empty() {
        md.push_str("## Summary\n\n");
        for line in lines {
            md.push_str(&format!("- {}\n", line));
        }
        md.push('\n');
    }

    for type_report in &report.types {
        md.push_str(&format!("## {}\n\n", type_report.precision));
        md.push_str("| Exceptions | New | Old | Speedup |\n");
        md.push_str("|-----------:|----:|----:|--------:|\n");
        for row in &type_report.rows {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                row.exceptions,
                cell(row.new, 1),
                cell(row.old, 1),
                cell(row.speedup, 2)
            ));
        }
        md.push('\n');
    }

    md
}

/// Exports an analysis report as Markdown.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
pub fn export_markdown(report: &AnalysisReport, path: &Path) -> io::Result<()> {
    fs::write(path, to_markdown(report))?;
    Ok(())
}
