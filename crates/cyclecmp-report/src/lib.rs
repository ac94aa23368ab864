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

//! Reports for cyclecmp comparisons.
//!
//! # Modules
//!
//! - `types`: report data structures
//! - `console`: report lines and console rendering
//! - `json`: JSON export
//! - `markdown`: Markdown export
//! - `csv_export`: long-form CSV export
//!
//! # Examples
//!
//! ```
//! use cyclecmp_core::{analyze, RawTable};
//! use cyclecmp_report::{render_text, AnalysisReport};
//!
//! let raw = RawTable::from_rows([
//!     ["1", "new_float3", "10", "120.0"],
//!     ["2", "old_float3", "10", "150.0"],
//! ]);
//! let report = AnalysisReport::from_analysis("patch.csv", &analyze(&raw).unwrap());
//!
//! assert_eq!(
//!     render_text(&report),
//!     "Float: average cycles per run — new: 120.0, old: 150.0.\n\
//!      Float: new is on average 1.25× faster than old.\n"
//! );
//! ```

pub mod console;
pub mod csv_export;
pub mod json;
pub mod markdown;
pub mod types;

pub use console::{print_report, render_console, render_text};
pub use csv_export::export_csv;
pub use json::export_json;
pub use markdown::export_markdown;
pub use types::{AnalysisReport, TableRow, TypeReport};

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Output format of an exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// The report lines only.
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Markdown with a table per type.
    Markdown,
    /// Long-form `type,exceptions,version,mean_cycles` CSV.
    Csv,
}

impl ReportFormat {
    /// Chooses a format from the file extension, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclecmp_report::ReportFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(ReportFormat::from_path(Path::new("out.JSON")), ReportFormat::Json);
    /// assert_eq!(ReportFormat::from_path(Path::new("out.markdown")), ReportFormat::Markdown);
    /// assert_eq!(ReportFormat::from_path(Path::new("summary")), ReportFormat::Text);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => ReportFormat::Json,
            Some("md") | Some("markdown") => ReportFormat::Markdown,
            Some("csv") => ReportFormat::Csv,
            _ => ReportFormat::Text,
        }
    }
}

/// Writes a report to `path` in the format its extension selects.
pub fn export(report: &AnalysisReport, path: &Path) -> io::Result<()> {
    let format = ReportFormat::from_path(path);
    debug!(path = %path.display(), ?format, "exporting report");
    match format {
        ReportFormat::Text => fs::write(path, render_text(report)),
        ReportFormat::Json => export_json(report, path),
        ReportFormat::Markdown => export_markdown(report, path),
        ReportFormat::Csv => export_csv(report, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ReportFormat::from_path(Path::new("a.csv")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("a.md")), ReportFormat::Markdown);
        assert_eq!(ReportFormat::from_path(Path::new("a.txt")), ReportFormat::Text);
        assert_eq!(ReportFormat::from_path(Path::new(".json")), ReportFormat::Text);
    }
}
