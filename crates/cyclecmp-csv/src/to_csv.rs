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

//! Write normalized and aggregated tables as CSV.
//!
//! Two shapes are written:
//!
//! - the canonical table, `id,name,iterations,cycles`, which is what a
//!   legacy or aliased input looks like after normalization;
//! - the long-form grouped statistics, `type,exceptions,version,mean_cycles`,
//!   which is the hand-off format for an external plotting tool.

use crate::error::{CsvError, Result};
use cyclecmp_core::{CanonicalTable, ComparisonTable, PrecisionType};
use std::collections::BTreeMap;
use std::io::Write;

/// Header of the long-form comparison table.
pub const COMPARISON_HEADER: [&str; 4] = ["type", "exceptions", "version", "mean_cycles"];

/// Header of the canonical table.
pub const CANONICAL_HEADER: [&str; 4] = ["id", "name", "iterations", "cycles"];

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

fn writer<W: Write>(out: W, config: &ToCsvConfig) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(out)
}

fn number_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn into_string(buffer: Vec<u8>, context: &str) -> Result<String> {
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: context.to_string(),
    })
}

/// Writes a canonical table to CSV text.
///
/// `iterations` is written exactly as it was read; an undefined `cycles`
/// value becomes an empty cell.
pub fn canonical_to_csv(table: &CanonicalTable) -> Result<String> {
    let mut buffer = Vec::with_capacity(table.len() * 32);
    canonical_to_writer(table, &mut buffer, &ToCsvConfig::default())?;
    into_string(buffer, "canonical table")
}

/// Writes a canonical table to any writer.
pub fn canonical_to_writer<W: Write>(
    table: &CanonicalTable,
    out: W,
    config: &ToCsvConfig,
) -> Result<()> {
    let mut wtr = writer(out, config);
    if config.include_headers {
        wtr.write_record(CANONICAL_HEADER)?;
    }
    for record in &table.records {
        wtr.write_record([
            record.id.to_string(),
            record.name.clone(),
            record.iterations.clone(),
            number_cell(record.cycles),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the per-type comparison tables as one long-form CSV.
///
/// Rows are ordered by type (`float` first), then ascending exceptions,
/// then version. Absent cells produce no row.
///
/// # Examples
///
/// ```
/// use cyclecmp_core::{ComparisonTable, PrecisionType, Version};
/// use cyclecmp_csv::comparison_to_csv;
/// use std::collections::BTreeMap;
///
/// let mut table = ComparisonTable::new();
/// table.insert(3, Version::New, 125.0);
/// table.insert(3, Version::Old, 155.0);
/// let tables = BTreeMap::from([(PrecisionType::Float, table)]);
///
/// let csv = comparison_to_csv(&tables).unwrap();
/// assert_eq!(
///     csv,
///     "type,exceptions,version,mean_cycles\nfloat,3,new,125\nfloat,3,old,155\n"
/// );
/// ```
pub fn comparison_to_csv(tables: &BTreeMap<PrecisionType, ComparisonTable>) -> Result<String> {
    let mut buffer = Vec::new();
    comparison_to_writer(tables, &mut buffer, &ToCsvConfig::default())?;
    into_string(buffer, "comparison table")
}

/// Writes the per-type comparison tables to any writer.
pub fn comparison_to_writer<W: Write>(
    tables: &BTreeMap<PrecisionType, ComparisonTable>,
    out: W,
    config: &ToCsvConfig,
) -> Result<()> {
    let mut wtr = writer(out, config);
    if config.include_headers {
        wtr.write_record(COMPARISON_HEADER)?;
    }
    for (precision, table) in tables {
        for (exceptions, cells) in table.rows() {
            for (version, mean) in cells {
                wtr.write_record([
                    precision.as_str().to_string(),
                    exceptions.to_string(),
                    version.as_str().to_string(),
                    mean.to_string(),
                ])?;
            }
        }
    }
    wtr.flush()?;
    Ok(())
}
