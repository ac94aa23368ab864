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

//! Report types.
//!
//! An [`AnalysisReport`] is a self-contained, serializable snapshot of one
//! pipeline run: where the data came from, how many rows survived each
//! stage, and one [`TypeReport`] per type present.

use cyclecmp_core::report::summary_lines;
use cyclecmp_core::{speedup_series, Analysis, ComparisonSummary, PrecisionType, Version};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of a comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Exception count of this row.
    pub exceptions: u64,
    /// Mean cycles of the `new` version, if measured.
    pub new: Option<f64>,
    /// Mean cycles of the `old` version, if measured.
    pub old: Option<f64>,
    /// `old / new`, when both are present and `new` is non-zero.
    pub speedup: Option<f64>,
}

/// Results for one numeric type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeReport {
    /// The numeric type.
    #[serde(rename = "type")]
    pub precision: PrecisionType,
    /// Comparison table rows, ascending by exception count.
    pub rows: Vec<TableRow>,
    /// New-versus-old summary; absent when only one version was measured.
    pub summary: Option<ComparisonSummary>,
    /// Textual report lines for this type.
    pub lines: Vec<String>,
}

impl TypeReport {
    /// Returns true if both versions were measured.
    pub fn is_comparable(&self) -> bool {
        self.summary.is_some()
    }
}

/// Complete report for one input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Input the report was computed from.
    pub source: String,
    /// Report timestamp (RFC 3339).
    pub timestamp: String,
    /// Data rows in the input, header excluded.
    pub records_read: usize,
    /// Rows with a well-formed id.
    pub records_normalized: usize,
    /// Rows that follow the benchmark naming convention.
    pub records_kept: usize,
    /// One entry per type present, `float` first.
    pub types: Vec<TypeReport>,
}

impl AnalysisReport {
    /// Builds a report from a pipeline run, stamped with the current time.
    pub fn from_analysis(source: impl Into<String>, analysis: &Analysis) -> Self {
        let types = analysis
            .tables
            .iter()
            .map(|(precision, table)| {
                let speedups: BTreeMap<u64, f64> = speedup_series(table).into_iter().collect();
                let rows = table
                    .rows()
                    .map(|(exceptions, cells)| TableRow {
                        exceptions,
                        new: cells.get(&Version::New).copied(),
                        old: cells.get(&Version::Old).copied(),
                        speedup: speedups.get(&exceptions).copied(),
                    })
                    .collect();
                let summary = analysis.summary(*precision).copied();
                let lines = summary
                    .map(|s| summary_lines(*precision, &s))
                    .unwrap_or_default();

                TypeReport {
                    precision: *precision,
                    rows,
                    summary,
                    lines,
                }
            })
            .collect();

        Self {
            source: source.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            records_read: analysis.rows_read,
            records_normalized: analysis.canonical_rows,
            records_kept: analysis.enriched.len(),
            types,
        }
    }

    /// Replaces the timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Returns the report for one type, if present.
    pub fn get(&self, precision: PrecisionType) -> Option<&TypeReport> {
        self.types.iter().find(|t| t.precision == precision)
    }

    /// All report lines, in type order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .flat_map(|t| t.lines.iter().map(String::as_str))
    }

    /// Rows dropped for a malformed id or a non-conforming name.
    pub fn records_dropped(&self) -> usize {
        self.records_read.saturating_sub(self.records_kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyclecmp_csv::analyze_csv;
    use cyclecmp_test::fixtures;

    fn report(csv: &str) -> AnalysisReport {
        let analysis = analyze_csv(csv).unwrap();
        AnalysisReport::from_analysis("test.csv", &analysis)
    }

    #[test]
    fn test_from_analysis_counts() {
        let report = report(fixtures::noisy());
        assert_eq!(report.source, "test.csv");
        assert_eq!(report.records_read, 7);
        assert_eq!(report.records_normalized, 6);
        assert_eq!(report.records_kept, 3);
        assert_eq!(report.records_dropped(), 4);
        assert!(!report.timestamp.is_empty());
    }

    #[test]
    fn test_rows_carry_speedup() {
        let report = report(fixtures::zero_denominator());
        let float = report.get(PrecisionType::Float).unwrap();
        assert_eq!(
            float.rows,
            vec![
                TableRow {
                    exceptions: 0,
                    new: Some(0.0),
                    old: Some(50.0),
                    speedup: None,
                },
                TableRow {
                    exceptions: 1,
                    new: Some(10.0),
                    old: Some(30.0),
                    speedup: Some(3.0),
                },
            ]
        );
    }

    #[test]
    fn test_one_sided_type_has_no_lines() {
        let report = report(fixtures::one_sided_dbl());
        let dbl = report.get(PrecisionType::Dbl).unwrap();
        assert!(!dbl.is_comparable());
        assert!(dbl.lines.is_empty());
        assert!(dbl.rows.iter().all(|r| r.old.is_none()));
        assert!(report.get(PrecisionType::Float).unwrap().is_comparable());
    }

    #[test]
    fn test_lines_match_analysis() {
        let analysis = analyze_csv(fixtures::mixed_types()).unwrap();
        let report = AnalysisReport::from_analysis("mixed.csv", &analysis);
        let lines: Vec<String> = report.lines().map(String::from).collect();
        assert_eq!(lines, analysis.report_lines());
    }

    #[test]
    fn test_with_timestamp() {
        let report = report(fixtures::end_to_end_legacy()).with_timestamp("2024-01-01T00:00:00Z");
        assert_eq!(report.timestamp, "2024-01-01T00:00:00Z");
    }
}
