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

//! Console reporter.
//!
//! [`render_text`] produces only the report lines; [`render_console`] adds a
//! banner, the per-type comparison tables and the row counts.

use crate::types::{AnalysisReport, TypeReport};
use std::fmt::Write;

const WIDTH: usize = 60;

fn cell(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "-".to_string())
}

/// Renders the report lines, one per line.
///
/// Types without both versions contribute nothing.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    for line in report.lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn render_table(out: &mut String, type_report: &TypeReport) {
    let _ = writeln!(
        out,
        "{:>10}  {:>12}  {:>12}  {:>8}",
        "exceptions", "new", "old", "speedup"
    );
    for row in &type_report.rows {
        let _ = writeln!(
            out,
            "{:>10}  {:>12}  {:>12}  {:>8}",
            row.exceptions,
            cell(row.new, 1),
            cell(row.old, 1),
            cell(row.speedup, 2)
        );
    }
}

/// Renders the full console report.
pub fn render_console(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    let _ = writeln!(out, "CYCLE COMPARISON: {}", report.source);
    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    let _ = writeln!(out, "Timestamp: {}", report.timestamp);
    let _ = writeln!(
        out,
        "Rows: {} read, {} normalized, {} kept",
        report.records_read, report.records_normalized, report.records_kept
    );

    for type_report in &report.types {
        let _ = writeln!(out, "\n{}", "-".repeat(WIDTH));
        let _ = writeln!(out, "{}:", type_report.precision.as_str().to_uppercase());
        let _ = writeln!(out, "{}", "-".repeat(WIDTH));
        render_table(&mut out, type_report);

        if type_report.lines.is_empty() {
            let _ = writeln!(out, "\nOnly one version measured, no comparison.");
        } else {
            out.push('\n');
            for line in &type_report.lines {
                let _ = writeln!(out, "{}", line);
            }
        }
    }

    let _ = writeln!(out, "{}", "=".repeat(WIDTH));
    out
}

/// Prints the full console report to stdout.
pub fn print_report(report: &AnalysisReport) {
    print!("{}", render_console(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclecmp_csv::analyze_csv;
    use cyclecmp_test::fixtures;

    fn report(csv: &str) -> AnalysisReport {
        let analysis = analyze_csv(csv).unwrap();
        AnalysisReport::from_analysis("patch.csv", &analysis)
    }

    #[test]
    fn test_render_text_exact() {
        let text = render_text(&report(fixtures::end_to_end_legacy()));
        assert_eq!(
            text,
            "Float: average cycles per run — new: 125.0, old: 155.0.\n\
             Float: new is on average 1.24× faster than old.\n"
        );
    }

    #[test]
    fn test_render_text_float_before_dbl() {
        let text = render_text(&report(fixtures::mixed_types()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Float:"));
        assert!(lines[2].starts_with("Dbl:"));
        assert_eq!(lines[3], "Dbl: new is on average 1.25× faster than old.");
    }

    #[test]
    fn test_render_console() {
        let console = render_console(&report(fixtures::one_sided_dbl()));
        assert!(console.contains("CYCLE COMPARISON: patch.csv"));
        assert!(console.contains("FLOAT:"));
        assert!(console.contains("DBL:"));
        assert!(console.contains("Only one version measured"));
        assert!(console.contains("Rows: 4 read, 4 normalized, 4 kept"));
    }

    #[test]
    fn test_missing_cells_render_as_dash() {
        assert_eq!(cell(None, 1), "-");
        assert_eq!(cell(Some(1.2345), 2), "1.23");
    }
}
