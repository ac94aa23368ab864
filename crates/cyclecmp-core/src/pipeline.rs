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

//! End-to-end pipeline: normalize, derive, aggregate, compare.

use crate::aggregate::{aggregate, ComparisonTable};
use crate::compare::{compare, ComparisonSummary};
use crate::derive::derive;
use crate::error::{PipelineError, Result};
use crate::normalize::{normalize, InputShape, RawTable};
use crate::record::{EnrichedTable, PrecisionType};
use crate::report::summary_lines;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Everything one pipeline run produces.
///
/// Values are computed fresh on each run and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Layout the input was read as.
    pub shape: InputShape,
    /// Data rows in the input (header excluded).
    pub rows_read: usize,
    /// Rows that survived normalization.
    pub canonical_rows: usize,
    /// Rows that follow the naming convention.
    pub enriched: EnrichedTable,
    /// One comparison table per type present in `enriched`.
    pub tables: BTreeMap<PrecisionType, ComparisonTable>,
    /// Summaries for types where both versions are present.
    pub summaries: BTreeMap<PrecisionType, ComparisonSummary>,
}

impl Analysis {
    pub fn table(&self, precision: PrecisionType) -> Option<&ComparisonTable> {
        self.tables.get(&precision)
    }

    pub fn summary(&self, precision: PrecisionType) -> Option<&ComparisonSummary> {
        self.summaries.get(&precision)
    }

    /// Report lines for every comparable type, `float` before `dbl`.
    pub fn report_lines(&self) -> Vec<String> {
        self.summaries
            .iter()
            .flat_map(|(precision, summary)| summary_lines(*precision, summary))
            .collect()
    }
}

/// Runs the full pipeline over a raw table.
///
/// # Errors
///
/// - [`PipelineError::Schema`] if the columns cannot be resolved.
/// - [`PipelineError::EmptyResult`] if no row follows the naming convention.
///
/// # Examples
///
/// ```
/// use cyclecmp_core::{analyze, RawTable};
///
/// let raw = RawTable::from_rows([
///     ["1", "new_float3", "10", "120.0"],
///     ["2", "old_float3", "10", "150.0"],
///     ["3", "new_float3", "10", "130.0"],
///     ["4", "old_float3", "10", "160.0"],
/// ]);
/// let analysis = analyze(&raw).unwrap();
/// assert_eq!(
///     analysis.report_lines(),
///     vec![
///         "Float: average cycles per run — new: 125.0, old: 155.0.",
///         "Float: new is on average 1.24× faster than old.",
///     ]
/// );
/// ```
pub fn analyze(raw: &RawTable) -> Result<Analysis> {
    let canonical = normalize(raw)?;
    let rows_read = canonical.len() + canonical.dropped;

    let enriched = derive(&canonical);
    if enriched.is_empty() {
        return Err(PipelineError::EmptyResult {
            canonical_rows: canonical.len(),
        });
    }

    let tables = aggregate(&enriched);
    let mut summaries = BTreeMap::new();
    for (precision, table) in &tables {
        match compare(table) {
            Some(summary) => {
                if summary.avg_speedup.is_none() {
                    warn!(
                        %precision,
                        "no exception count has both versions with a non-zero new value, speedup undefined"
                    );
                }
                summaries.insert(*precision, summary);
            }
            None => debug!(
                %precision,
                versions = ?table.versions(),
                "only one version present, skipping comparison"
            ),
        }
    }

    Ok(Analysis {
        shape: canonical.shape,
        rows_read,
        canonical_rows: canonical.len(),
        enriched,
        tables,
        summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use crate::record::Version;

    #[test]
    fn test_analyze_end_to_end() {
        let raw = RawTable::from_rows([
            ["1", "new_float3", "10", "120.0"],
            ["2", "old_float3", "10", "150.0"],
            ["3", "new_float3", "10", "130.0"],
            ["4", "old_float3", "10", "160.0"],
        ]);
        let analysis = analyze(&raw).unwrap();
        assert!(analysis.shape.is_legacy());
        assert_eq!(analysis.rows_read, 4);

        let float = analysis.table(PrecisionType::Float).unwrap();
        assert_eq!(float.get(3, Version::New), Some(125.0));
        assert_eq!(float.get(3, Version::Old), Some(155.0));
        assert!(analysis.table(PrecisionType::Dbl).is_none());

        let summary = analysis.summary(PrecisionType::Float).unwrap();
        assert!((summary.avg_speedup.unwrap() - 1.24).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_empty_result() {
        let raw = RawTable::from_rows([
            ["id", "name", "iterations", "cycles"],
            ["1", "try_float3", "10", "1"],
            ["2", "new_7", "10", "1"],
        ]);
        assert_eq!(
            analyze(&raw),
            Err(PipelineError::EmptyResult { canonical_rows: 2 })
        );
    }

    #[test]
    fn test_analyze_schema_error() {
        let raw = RawTable::from_rows([["id", "name", "cycles"], ["1", "new_float3", "1"]]);
        assert_eq!(
            analyze(&raw),
            Err(PipelineError::Schema(SchemaError::MissingColumns {
                missing: vec!["iterations".to_string()]
            }))
        );
    }

    #[test]
    fn test_one_sided_type_has_no_summary() {
        let raw = RawTable::from_rows([
            ["1", "new_float3", "10", "120.0"],
            ["2", "old_float3", "10", "150.0"],
            ["3", "new_dbl3", "10", "200.0"],
        ]);
        let analysis = analyze(&raw).unwrap();
        assert!(analysis.table(PrecisionType::Dbl).is_some());
        assert!(analysis.summary(PrecisionType::Dbl).is_none());
        assert_eq!(analysis.report_lines().len(), 2);
    }

    #[test]
    fn test_report_lines_float_before_dbl() {
        let raw = RawTable::from_rows([
            ["1", "new_dbl1", "10", "100"],
            ["2", "old_dbl1", "10", "300"],
            ["3", "new_float1", "10", "100"],
            ["4", "old_float1", "10", "200"],
        ]);
        let lines = analyze(&raw).unwrap().report_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Float:"));
        assert!(lines[2].starts_with("Dbl:"));
        assert_eq!(lines[3], "Dbl: new is on average 3.00× faster than old.");
    }
}
