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

//! Schema normalization.
//!
//! Maps a raw delimited table in either supported layout onto the canonical
//! `{id, name, iterations, cycles}` record shape:
//!
//! - **Modern**: a header row with named columns in any order. The aliases
//!   `benchmark_number` (for `id`) and `cycles_per_tuple` (for `cycles`) are
//!   accepted; extra columns are ignored.
//! - **Legacy**: no header, four positional columns
//!   `id, name, iterations, cycles`.
//!
//! The layout is decided once, from the first row, and carried as an
//! [`InputShape`]. A table is legacy iff its first row has no column that
//! resolves to `id`.

use crate::error::{Result, SchemaError};
use crate::record::CanonicalRecord;
use std::fmt;
use tracing::debug;

/// Number of positional columns in the headerless layout.
pub const LEGACY_WIDTH: usize = 4;

/// Raw rows exactly as read from the delimited input.
///
/// The first row may be a header or data; the normalizer decides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Builds a table from anything that yields rows of string-like cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclecmp_core::RawTable;
    ///
    /// let raw = RawTable::from_rows([["1", "new_float3", "10", "120.0"]]);
    /// assert_eq!(raw.len(), 1);
    /// ```
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The first row, whether it turns out to be a header or data.
    pub fn first_row(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The four canonical columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalColumn {
    Id,
    Name,
    Iterations,
    Cycles,
}

impl CanonicalColumn {
    /// Canonical columns in legacy positional order.
    pub const ALL: [CanonicalColumn; 4] = [
        CanonicalColumn::Id,
        CanonicalColumn::Name,
        CanonicalColumn::Iterations,
        CanonicalColumn::Cycles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalColumn::Id => "id",
            CanonicalColumn::Name => "name",
            CanonicalColumn::Iterations => "iterations",
            CanonicalColumn::Cycles => "cycles",
        }
    }

    /// Resolves a header label through the alias table.
    ///
    /// Matching is exact after trimming surrounding whitespace.
    pub fn resolve(label: &str) -> Option<Self> {
        match label.trim() {
            "id" | "benchmark_number" => Some(CanonicalColumn::Id),
            "name" => Some(CanonicalColumn::Name),
            "iterations" => Some(CanonicalColumn::Iterations),
            "cycles" | "cycles_per_tuple" => Some(CanonicalColumn::Cycles),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positions of the canonical columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub id: usize,
    pub name: usize,
    pub iterations: usize,
    pub cycles: usize,
}

impl ColumnMap {
    /// The fixed positional mapping of the headerless layout.
    pub const LEGACY: ColumnMap = ColumnMap {
        id: 0,
        name: 1,
        iterations: 2,
        cycles: 3,
    };

    fn index(&self, column: CanonicalColumn) -> usize {
        match column {
            CanonicalColumn::Id => self.id,
            CanonicalColumn::Name => self.name,
            CanonicalColumn::Iterations => self.iterations,
            CanonicalColumn::Cycles => self.cycles,
        }
    }

    /// Smallest row width that contains every mapped column.
    fn min_width(&self) -> usize {
        CanonicalColumn::ALL
            .iter()
            .map(|c| self.index(*c))
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Input layout, decided once from the first row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputShape {
    /// Header row present; columns resolved by name.
    Modern(ColumnMap),
    /// No header; columns taken by position.
    Legacy,
}

impl InputShape {
    /// Classifies a table by its first row.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::MissingColumns`] if the header resolves `id` but not
    ///   every other canonical column, or if there is no first row at all.
    /// - [`SchemaError::LegacyWidth`] if there is no `id` column and the first
    ///   row is not exactly four fields wide.
    pub fn detect(first_row: Option<&[String]>) -> std::result::Result<Self, SchemaError> {
        let Some(header) = first_row else {
            return Err(SchemaError::missing(
                CanonicalColumn::ALL.iter().map(|c| c.as_str()),
            ));
        };

        let mut slots: [Option<usize>; 4] = [None; 4];
        for (position, label) in header.iter().enumerate() {
            if let Some(column) = CanonicalColumn::resolve(label) {
                let slot = &mut slots[column as usize];
                // First occurrence wins when two labels alias the same column.
                if slot.is_none() {
                    *slot = Some(position);
                }
            }
        }

        if slots[CanonicalColumn::Id as usize].is_none() {
            if header.len() != LEGACY_WIDTH {
                return Err(SchemaError::LegacyWidth {
                    found: header.len(),
                });
            }
            return Ok(InputShape::Legacy);
        }

        let missing: Vec<&str> = CanonicalColumn::ALL
            .iter()
            .filter(|c| slots[**c as usize].is_none())
            .map(|c| c.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(SchemaError::missing(missing));
        }

        let at = |c: CanonicalColumn| slots[c as usize].unwrap_or_default();
        Ok(InputShape::Modern(ColumnMap {
            id: at(CanonicalColumn::Id),
            name: at(CanonicalColumn::Name),
            iterations: at(CanonicalColumn::Iterations),
            cycles: at(CanonicalColumn::Cycles),
        }))
    }

    pub fn column_map(&self) -> ColumnMap {
        match self {
            InputShape::Modern(map) => *map,
            InputShape::Legacy => ColumnMap::LEGACY,
        }
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, InputShape::Legacy)
    }

    /// Number of leading rows that are header, not data.
    fn header_rows(&self) -> usize {
        match self {
            InputShape::Modern(_) => 1,
            InputShape::Legacy => 0,
        }
    }
}

/// Output of the schema normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalTable {
    /// Layout the input was read as.
    pub shape: InputShape,
    /// Rows with a whole-number id, in input order.
    pub records: Vec<CanonicalRecord>,
    /// Data rows dropped for a malformed id or a short row.
    pub dropped: usize,
}

impl CanonicalTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalizes a raw table into canonical records.
///
/// # Errors
///
/// Returns a schema error when the canonical columns cannot be resolved;
/// see [`InputShape::detect`]. Malformed rows are dropped, never reported.
///
/// # Examples
///
/// ```
/// use cyclecmp_core::{normalize, RawTable};
///
/// let raw = RawTable::from_rows([
///     vec!["benchmark_number", "name", "iterations", "cycles_per_tuple"],
///     vec!["1", "new_float3", "10", "120.0"],
///     vec!["x", "old_float3", "10", "150.0"],
/// ]);
/// let table = normalize(&raw).unwrap();
/// assert_eq!(table.records.len(), 1);
/// assert_eq!(table.records[0].cycles, Some(120.0));
/// ```
pub fn normalize(raw: &RawTable) -> Result<CanonicalTable> {
    let shape = InputShape::detect(raw.first_row())?;
    let map = shape.column_map();
    let min_width = map.min_width();

    let data = &raw.rows()[shape.header_rows()..];
    let records: Vec<CanonicalRecord> = data
        .iter()
        .filter(|row| row.len() >= min_width)
        .filter_map(|row| {
            Some(CanonicalRecord {
                id: parse_id(&row[map.id])?,
                name: row[map.name].clone(),
                iterations: row[map.iterations].trim().to_string(),
                cycles: parse_number(&row[map.cycles]),
            })
        })
        .collect();

    let dropped = data.len() - records.len();
    debug!(
        legacy = shape.is_legacy(),
        kept = records.len(),
        dropped,
        "normalized input rows"
    );

    Ok(CanonicalTable {
        shape,
        records,
        dropped,
    })
}

/// Parses a benchmark id as a whole number.
///
/// Integral decimals such as `"3.0"` are accepted; fractional or
/// non-numeric values are not.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }
    let value = trimmed.parse::<f64>().ok()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// Parses a numeric cell; non-finite and unparsable values are absent.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(CanonicalColumn::resolve("benchmark_number"), Some(CanonicalColumn::Id));
        assert_eq!(CanonicalColumn::resolve("cycles_per_tuple"), Some(CanonicalColumn::Cycles));
        assert_eq!(CanonicalColumn::resolve(" name "), Some(CanonicalColumn::Name));
        assert_eq!(CanonicalColumn::resolve("Name"), None);
        assert_eq!(CanonicalColumn::resolve("extra"), None);
    }

    #[test]
    fn test_detect_modern_any_order() {
        let h = header(&["cycles_per_tuple", "extra", "name", "benchmark_number", "iterations"]);
        let shape = InputShape::detect(Some(&h)).unwrap();
        assert_eq!(
            shape,
            InputShape::Modern(ColumnMap {
                id: 3,
                name: 2,
                iterations: 4,
                cycles: 0,
            })
        );
    }

    #[test]
    fn test_detect_first_alias_wins() {
        let h = header(&["id", "benchmark_number", "name", "iterations", "cycles"]);
        let map = InputShape::detect(Some(&h)).unwrap().column_map();
        assert_eq!(map.id, 0);
    }

    #[test]
    fn test_detect_legacy() {
        let h = header(&["1", "new_float3", "10", "120.0"]);
        assert_eq!(InputShape::detect(Some(&h)).unwrap(), InputShape::Legacy);
    }

    #[test]
    fn test_detect_legacy_wrong_width() {
        let h = header(&["name", "iterations", "cycles"]);
        assert_eq!(
            InputShape::detect(Some(&h)),
            Err(SchemaError::LegacyWidth { found: 3 })
        );
    }

    #[test]
    fn test_detect_missing_columns_sorted() {
        let h = header(&["id", "name"]);
        let err = InputShape::detect(Some(&h)).unwrap_err();
        assert_eq!(err.to_string(), "Missing required columns: cycles, iterations");
    }

    #[test]
    fn test_detect_empty_table() {
        let err = InputShape::detect(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required columns: cycles, id, iterations, name"
        );
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" -7 "), Some(-7));
        assert_eq!(parse_id("3.0"), Some(3));
        assert_eq!(parse_id("3.5"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("NaN"), None);
        assert_eq!(parse_id("inf"), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("120.5"), Some(120.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number("nan"), None);
        assert_eq!(parse_number("-inf"), None);
    }

    #[test]
    fn test_normalize_legacy_keeps_first_row() {
        let raw = RawTable::from_rows([
            ["1", "new_float3", "10", "120.0"],
            ["2", "old_float3", "10", "150.0"],
        ]);
        let table = normalize(&raw).unwrap();
        assert!(table.shape.is_legacy());
        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0], CanonicalRecord::new(1, "new_float3", "10", 120.0));
    }

    #[test]
    fn test_normalize_drops_bad_ids_and_short_rows() {
        let raw = RawTable::from_rows(vec![
            vec!["id", "name", "iterations", "cycles"],
            vec!["1", "new_float3", "10", "120"],
            vec!["one", "new_float3", "10", "120"],
            vec!["2", "new_float3"],
            vec!["3", "old_float3", "10", "bogus"],
        ]);
        let table = normalize(&raw).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.dropped, 2);
        assert_eq!(table.records[1].id, 3);
        assert_eq!(table.records[1].cycles, None);
    }

    #[test]
    fn test_normalize_keeps_iterations_verbatim() {
        let raw = RawTable::from_rows([
            ["id", "name", "iterations", "cycles"],
            ["1", "new_float3", "many", "120"],
            ["2", "old_float3", " 12345678901234567891 ", "150"],
            ["3", "old_float3", "1e3", "150"],
        ]);
        let table = normalize(&raw).unwrap();
        assert_eq!(table.records[0].iterations, "many");
        assert_eq!(table.records[0].cycles, Some(120.0));
        assert_eq!(table.records[1].iterations, "12345678901234567891");
        assert_eq!(table.records[2].iterations, "1e3");
    }

    #[test]
    fn test_normalize_header_only() {
        let raw = RawTable::from_rows([["id", "name", "iterations", "cycles"]]);
        let table = normalize(&raw).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.dropped, 0);
    }
}
