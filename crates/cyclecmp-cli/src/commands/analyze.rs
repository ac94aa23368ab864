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

//! The analyze command: read, compare, report.

use super::{read_file, write_output};
use crate::error::CliError;
use colored::Colorize;
use cyclecmp_csv::analyze_csv;
use cyclecmp_report::{export, print_report, render_text, AnalysisReport};
use std::path::Path;
use tracing::info;

/// Analyzes one benchmark result file.
///
/// Prints the report lines (or the full console report with `detailed`) to
/// stdout and, when `out` is given, exports the report in the format its
/// extension selects.
///
/// # Errors
///
/// Returns [`CliError`] if the file cannot be read, its columns cannot be
/// resolved, no row follows the naming convention, or the export fails.
pub fn analyze(csv_path: &str, out: Option<&str>, detailed: bool) -> Result<(), CliError> {
    let content = read_file(csv_path)?;
    let analysis = analyze_csv(&content)?;
    info!(
        path = csv_path,
        rows = analysis.rows_read,
        kept = analysis.enriched.len(),
        types = analysis.tables.len(),
        "analysis complete"
    );

    let report = AnalysisReport::from_analysis(csv_path, &analysis);
    if detailed {
        print_report(&report);
    } else {
        write_output(&render_text(&report))?;
    }

    if analysis.summaries.is_empty() {
        eprintln!(
            "{} no type was measured in both versions, nothing to compare",
            "Note:".yellow().bold()
        );
    }

    if let Some(path) = out {
        export(&report, Path::new(path)).map_err(|e| CliError::report(path, e))?;
        info!(path, "report written");
    }

    Ok(())
}
