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

//! Builder for custom benchmark-result tables.

use std::fmt::Write;

/// Builder for CSV benchmark-result text.
///
/// # Examples
///
/// ```
/// use cyclecmp_test::fixtures::builders::CsvBuilder;
///
/// let csv = CsvBuilder::legacy()
///     .row(1, "new_dbl0", 5, "42")
///     .build();
/// assert_eq!(csv, "1,new_dbl0,5,42\n");
///
/// let csv = CsvBuilder::with_header(&["benchmark_number", "name", "iterations", "cycles_per_tuple"])
///     .row(7, "old_dbl0", 5, "40")
///     .build();
/// assert!(csv.contains("7,old_dbl0,5,40"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvBuilder {
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl CsvBuilder {
    /// Headerless four-column table.
    pub fn legacy() -> Self {
        Self::default()
    }

    /// Table with the canonical header.
    pub fn modern() -> Self {
        Self::with_header(&["id", "name", "iterations", "cycles"])
    }

    /// Table with a custom header.
    ///
    /// [`row`](Self::row) always writes `id, name, iterations, cycles` in
    /// that order, so use [`raw_row`](Self::raw_row) for reordered headers.
    pub fn with_header(labels: &[&str]) -> Self {
        Self {
            header: Some(labels.iter().map(|s| s.to_string()).collect()),
            rows: Vec::new(),
        }
    }

    /// Adds a row in canonical column order.
    pub fn row(mut self, id: i64, name: &str, iterations: u64, cycles: &str) -> Self {
        self.rows.push(vec![
            id.to_string(),
            name.to_string(),
            iterations.to_string(),
            cycles.to_string(),
        ]);
        self
    }

    /// Adds a row verbatim.
    pub fn raw_row(mut self, cells: &[&str]) -> Self {
        self.rows.push(cells.iter().map(|s| s.to_string()).collect());
        self
    }

    /// All rows, header first if present.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.header
            .iter()
            .cloned()
            .chain(self.rows.iter().cloned())
            .collect()
    }

    /// Renders comma-separated text with a trailing newline per row.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            let _ = writeln!(out, "{}", row.join(","));
        }
        out
    }
}
