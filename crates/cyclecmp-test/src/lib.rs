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

//! Shared test fixtures for the cyclecmp crates.
//!
//! Fixtures are plain CSV text and string rows so that every crate can use
//! them without depending on the types under test.
//!
//! # Quick Start
//!
//! ```rust
//! use cyclecmp_test::fixtures;
//!
//! let legacy = fixtures::end_to_end_legacy();
//! assert_eq!(legacy.lines().count(), 4);
//!
//! use cyclecmp_test::fixtures::builders::CsvBuilder;
//!
//! let csv = CsvBuilder::modern()
//!     .row(1, "new_float3", 10, "120.0")
//!     .row(2, "old_float3", 10, "150.0")
//!     .build();
//! assert!(csv.starts_with("id,name,iterations,cycles\n"));
//! ```

pub mod fixtures;

/// A fixture list: `(name, csv_text)` pairs.
pub type FixtureList = Vec<(&'static str, &'static str)>;

/// Parses CSV text into trimmed string rows, skipping blank lines.
///
/// No row is treated as a header and rows may differ in width, matching
/// what the loader hands to the normalizer.
///
/// # Panics
///
/// Panics on malformed CSV; fixtures are expected to be well-formed.
pub fn split_rows(csv: &str) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv.as_bytes())
        .records()
        .map(|record| {
            record
                .expect("fixture is well-formed CSV")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_rows() {
        let rows = split_rows("a, b\n\n1,2\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["1", "2"]]);
    }

    #[test]
    fn test_split_rows_honours_quotes() {
        let rows = split_rows("1,\"new_float,3\",10,120\n");
        assert_eq!(rows, vec![vec!["1", "new_float,3", "10", "120"]]);
    }

    #[test]
    fn test_all_fixtures_nonempty() {
        for (name, csv) in fixtures::all() {
            assert!(!split_rows(csv).is_empty(), "fixture {} is empty", name);
        }
    }
}
