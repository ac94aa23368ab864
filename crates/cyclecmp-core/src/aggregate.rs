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

//! Grouping and reshaping of enriched records.
//!
//! Records are grouped by `(type, exceptions, version)` and the mean of the
//! defined `cycles` values is taken per group. Each type's groups are then
//! laid out as a [`ComparisonTable`]: one row per exception count, one column
//! per version.

use crate::record::{EnrichedTable, PrecisionType, Version};
use std::collections::BTreeMap;
use tracing::debug;

/// Running mean for one group.
///
/// Updated incrementally, so no intermediate sum can overflow while every
/// input is finite.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MeanAccumulator {
    mean: f64,
    count: usize,
}

impl MeanAccumulator {
    pub(crate) fn push(&mut self, value: f64) {
        self.count += 1;
        self.mean += (value - self.mean) / self.count as f64;
    }

    pub(crate) fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }
}

/// Grouped mean cycles for a single precision type.
///
/// Rows are exception counts in ascending order; a cell is absent when no
/// record with a defined `cycles` value maps to it. Rows and columns with no
/// cells at all do not exist.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonTable {
    rows: BTreeMap<u64, BTreeMap<Version, f64>>,
}

impl ComparisonTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell, creating its row if needed.
    pub fn insert(&mut self, exceptions: u64, version: Version, mean_cycles: f64) {
        self.rows
            .entry(exceptions)
            .or_default()
            .insert(version, mean_cycles);
    }

    pub fn get(&self, exceptions: u64, version: Version) -> Option<f64> {
        self.rows
            .get(&exceptions)
            .and_then(|row| row.get(&version))
            .copied()
    }

    /// Exception counts, ascending.
    pub fn exceptions(&self) -> impl Iterator<Item = u64> + '_ {
        self.rows.keys().copied()
    }

    /// Versions that have at least one cell, in column order.
    pub fn versions(&self) -> Vec<Version> {
        Version::ALL
            .into_iter()
            .filter(|v| self.has_version(*v))
            .collect()
    }

    pub fn has_version(&self, version: Version) -> bool {
        self.rows.values().any(|row| row.contains_key(&version))
    }

    /// The present cells of one column as `(exceptions, mean_cycles)`.
    pub fn column(&self, version: Version) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.rows
            .iter()
            .filter_map(move |(exc, row)| row.get(&version).map(|v| (*exc, *v)))
    }

    /// All rows as `(exceptions, cells)`.
    pub fn rows(&self) -> impl Iterator<Item = (u64, &BTreeMap<Version, f64>)> + '_ {
        self.rows.iter().map(|(exc, row)| (*exc, row))
    }

    /// Number of exception rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Groups enriched records and builds one comparison table per type.
///
/// A type is present in the result iff at least one enriched record has it,
/// even if none of its records has a defined `cycles` value (the table is
/// then empty).
///
/// # Examples
///
/// ```
/// use cyclecmp_core::{aggregate, derive, normalize, PrecisionType, RawTable, Version};
///
/// let raw = RawTable::from_rows([
///     ["1", "new_float0", "10", "100"],
///     ["2", "new_float0", "10", "200"],
///     ["3", "old_float0", "10", "50"],
/// ]);
/// let tables = aggregate(&derive(&normalize(&raw).unwrap()));
/// let float = &tables[&PrecisionType::Float];
/// assert_eq!(float.get(0, Version::New), Some(150.0));
/// assert_eq!(float.get(0, Version::Old), Some(50.0));
/// ```
pub fn aggregate(table: &EnrichedTable) -> BTreeMap<PrecisionType, ComparisonTable> {
    let mut groups: BTreeMap<PrecisionType, BTreeMap<(u64, Version), MeanAccumulator>> =
        BTreeMap::new();

    for record in &table.records {
        let by_type = groups.entry(record.precision()).or_default();
        if let Some(cycles) = record.cycles() {
            by_type
                .entry((record.exceptions(), record.version()))
                .or_default()
                .push(cycles);
        }
    }

    groups
        .into_iter()
        .map(|(precision, cells)| {
            let mut comparison = ComparisonTable::new();
            for ((exceptions, version), acc) in cells {
                if let Some(mean) = acc.mean() {
                    comparison.insert(exceptions, version, mean);
                }
            }
            debug!(
                %precision,
                rows = comparison.len(),
                versions = ?comparison.versions(),
                "built comparison table"
            );
            (precision, comparison)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CanonicalRecord, Classification, EnrichedRecord};

    fn rec(precision: PrecisionType, exceptions: u64, version: Version, cycles: Option<f64>) -> EnrichedRecord {
        EnrichedRecord {
            record: CanonicalRecord {
                id: 0,
                name: format!("{}_{}{}", version, precision, exceptions),
                iterations: "1".to_string(),
                cycles,
            },
            class: Classification {
                exceptions,
                version,
                precision,
            },
        }
    }

    #[test]
    fn test_group_mean() {
        let table = EnrichedTable {
            records: vec![
                rec(PrecisionType::Float, 0, Version::New, Some(100.0)),
                rec(PrecisionType::Float, 0, Version::New, Some(200.0)),
                rec(PrecisionType::Float, 0, Version::Old, Some(50.0)),
            ],
        };
        let tables = aggregate(&table);
        assert_eq!(tables.len(), 1);
        let float = &tables[&PrecisionType::Float];
        assert_eq!(float.get(0, Version::New), Some(150.0));
        assert_eq!(float.get(0, Version::Old), Some(50.0));
    }

    #[test]
    fn test_group_mean_near_f64_max() {
        let table = EnrichedTable {
            records: vec![
                rec(PrecisionType::Float, 3, Version::New, Some(1e308)),
                rec(PrecisionType::Float, 3, Version::New, Some(1e308)),
                rec(PrecisionType::Float, 3, Version::Old, Some(f64::MAX)),
                rec(PrecisionType::Float, 3, Version::Old, Some(f64::MAX)),
            ],
        };
        let tables = aggregate(&table);
        let float = &tables[&PrecisionType::Float];
        assert_eq!(float.get(3, Version::New), Some(1e308));
        assert_eq!(float.get(3, Version::Old), Some(f64::MAX));
    }

    #[test]
    fn test_accumulator_mean() {
        let mut acc = MeanAccumulator::default();
        assert_eq!(acc.mean(), None);
        for v in [1.0, 2.0, 3.0, 4.0] {
            acc.push(v);
        }
        assert_eq!(acc.mean(), Some(2.5));
    }

    #[test]
    fn test_rows_sorted_ascending() {
        let table = EnrichedTable {
            records: vec![
                rec(PrecisionType::Dbl, 10, Version::New, Some(1.0)),
                rec(PrecisionType::Dbl, 2, Version::New, Some(1.0)),
                rec(PrecisionType::Dbl, 7, Version::Old, Some(1.0)),
            ],
        };
        let tables = aggregate(&table);
        let rows: Vec<u64> = tables[&PrecisionType::Dbl].exceptions().collect();
        assert_eq!(rows, vec![2, 7, 10]);
    }

    #[test]
    fn test_absent_cells_are_not_zero() {
        let table = EnrichedTable {
            records: vec![
                rec(PrecisionType::Float, 1, Version::New, Some(10.0)),
                rec(PrecisionType::Float, 2, Version::Old, Some(20.0)),
            ],
        };
        let tables = aggregate(&table);
        let float = &tables[&PrecisionType::Float];
        assert_eq!(float.get(1, Version::Old), None);
        assert_eq!(float.get(2, Version::New), None);
        assert_eq!(float.versions(), vec![Version::New, Version::Old]);
    }

    #[test]
    fn test_one_sided_type_has_single_column() {
        let table = EnrichedTable {
            records: vec![
                rec(PrecisionType::Dbl, 1, Version::New, Some(10.0)),
                rec(PrecisionType::Dbl, 3, Version::New, Some(30.0)),
            ],
        };
        let tables = aggregate(&table);
        assert_eq!(tables[&PrecisionType::Dbl].versions(), vec![Version::New]);
        assert!(!tables.contains_key(&PrecisionType::Float));
    }

    #[test]
    fn test_undefined_cycles_skipped() {
        let table = EnrichedTable {
            records: vec![
                rec(PrecisionType::Float, 1, Version::New, Some(10.0)),
                rec(PrecisionType::Float, 1, Version::New, None),
                rec(PrecisionType::Float, 4, Version::Old, None),
            ],
        };
        let tables = aggregate(&table);
        let float = &tables[&PrecisionType::Float];
        assert_eq!(float.get(1, Version::New), Some(10.0));
        // No defined value at all for exceptions=4: no row, no old column.
        assert_eq!(float.len(), 1);
        assert!(!float.has_version(Version::Old));
    }

    #[test]
    fn test_type_without_defined_cycles_is_empty_table() {
        let table = EnrichedTable {
            records: vec![rec(PrecisionType::Dbl, 1, Version::New, None)],
        };
        let tables = aggregate(&table);
        assert!(tables[&PrecisionType::Dbl].is_empty());
    }

    #[test]
    fn test_column_iteration() {
        let mut comparison = ComparisonTable::new();
        comparison.insert(3, Version::Old, 9.0);
        comparison.insert(1, Version::Old, 3.0);
        comparison.insert(2, Version::New, 4.0);
        let old: Vec<(u64, f64)> = comparison.column(Version::Old).collect();
        assert_eq!(old, vec![(1, 3.0), (3, 9.0)]);
    }
}
