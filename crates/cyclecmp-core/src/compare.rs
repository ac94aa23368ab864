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

//! New-versus-old comparison of a single comparison table.

use crate::aggregate::{ComparisonTable, MeanAccumulator};
use crate::record::Version;

/// Summary of one type's new-versus-old comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonSummary {
    /// Mean of the `new` column over its own present cells.
    pub avg_new: f64,
    /// Mean of the `old` column over its own present cells.
    pub avg_old: f64,
    /// Mean of the paired `old / new` ratios; `None` without any pair.
    pub avg_speedup: Option<f64>,
    /// Number of exception rows that contributed a ratio.
    pub paired_rows: usize,
}

/// Arithmetic mean; `None` for an empty sequence.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .fold(MeanAccumulator::default(), |mut acc, v| {
            acc.push(v);
            acc
        })
        .mean()
}

/// Per-row `old / new` ratios.
///
/// A row contributes only when both cells are present, the `new` cell is
/// non-zero and the ratio is finite.
pub fn speedup_series(table: &ComparisonTable) -> Vec<(u64, f64)> {
    table
        .rows()
        .filter_map(|(exceptions, cells)| {
            let new = *cells.get(&Version::New)?;
            let old = *cells.get(&Version::Old)?;
            let ratio = old / new;
            (new != 0.0 && ratio.is_finite()).then_some((exceptions, ratio))
        })
        .collect()
}

/// Compares the `new` and `old` columns of a table.
///
/// Returns `None` when either column is absent; that is the normal outcome
/// for a type measured in only one version.
///
/// # Examples
///
/// ```
/// use cyclecmp_core::{compare, ComparisonTable, Version};
///
/// let mut table = ComparisonTable::new();
/// table.insert(3, Version::New, 125.0);
/// table.insert(3, Version::Old, 155.0);
///
/// let summary = compare(&table).unwrap();
/// assert_eq!(summary.avg_new, 125.0);
/// assert!((summary.avg_speedup.unwrap() - 1.24).abs() < 1e-12);
/// ```
pub fn compare(table: &ComparisonTable) -> Option<ComparisonSummary> {
    let avg_new = mean(table.column(Version::New).map(|(_, v)| v))?;
    let avg_old = mean(table.column(Version::Old).map(|(_, v)| v))?;

    let ratios = speedup_series(table);
    let avg_speedup = mean(ratios.iter().map(|(_, r)| *r));

    Some(ComparisonSummary {
        avg_new,
        avg_old,
        avg_speedup,
        paired_rows: ratios.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cells: &[(u64, Version, f64)]) -> ComparisonTable {
        let mut t = ComparisonTable::new();
        for (exc, version, value) in cells {
            t.insert(*exc, *version, *value);
        }
        t
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean([1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_missing_column_yields_none() {
        let t = table(&[(0, Version::New, 10.0), (1, Version::New, 20.0)]);
        assert_eq!(compare(&t), None);
        let t = table(&[(0, Version::Old, 10.0)]);
        assert_eq!(compare(&t), None);
        assert_eq!(compare(&ComparisonTable::new()), None);
    }

    #[test]
    fn test_column_means_are_independent() {
        let t = table(&[
            (0, Version::New, 10.0),
            (1, Version::New, 30.0),
            (1, Version::Old, 60.0),
            (2, Version::Old, 90.0),
        ]);
        let summary = compare(&t).unwrap();
        assert_eq!(summary.avg_new, 20.0);
        assert_eq!(summary.avg_old, 75.0);
        // Only exceptions=1 is paired.
        assert_eq!(summary.paired_rows, 1);
        assert_eq!(summary.avg_speedup, Some(2.0));
    }

    #[test]
    fn test_mean_of_ratios_not_ratio_of_means() {
        let t = table(&[
            (0, Version::New, 10.0),
            (0, Version::Old, 20.0),
            (1, Version::New, 100.0),
            (1, Version::Old, 100.0),
        ]);
        let summary = compare(&t).unwrap();
        assert_eq!(summary.avg_speedup, Some(1.5));
    }

    #[test]
    fn test_zero_denominator_excluded() {
        let t = table(&[
            (0, Version::New, 0.0),
            (0, Version::Old, 50.0),
            (1, Version::New, 10.0),
            (1, Version::Old, 30.0),
        ]);
        let series = speedup_series(&t);
        assert_eq!(series, vec![(1, 3.0)]);
        let summary = compare(&t).unwrap();
        assert_eq!(summary.avg_speedup, Some(3.0));
        assert!(summary.avg_speedup.unwrap().is_finite());
        // The zero cell still counts toward the column mean.
        assert_eq!(summary.avg_new, 5.0);
    }

    #[test]
    fn test_mean_near_f64_max_stays_finite() {
        assert_eq!(mean([1e308, 1e308]), Some(1e308));
        assert_eq!(mean([f64::MAX, f64::MAX, f64::MAX]), Some(f64::MAX));
    }

    #[test]
    fn test_non_finite_ratio_excluded() {
        let t = table(&[
            (0, Version::New, 1e-308),
            (0, Version::Old, 1e308),
            (1, Version::New, 10.0),
            (1, Version::Old, 20.0),
        ]);
        assert_eq!(speedup_series(&t), vec![(1, 2.0)]);
        assert_eq!(compare(&t).unwrap().avg_speedup, Some(2.0));
    }

    #[test]
    fn test_no_pairs_leaves_speedup_undefined() {
        let t = table(&[(0, Version::New, 10.0), (1, Version::Old, 20.0)]);
        let summary = compare(&t).unwrap();
        assert_eq!(summary.avg_speedup, None);
        assert_eq!(summary.paired_rows, 0);
    }
}
