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

//! Load delimited benchmark output into a raw table.
//!
//! The loader never interprets the first row: headered and headerless files
//! are read identically and the schema normalizer decides the layout.

use crate::error::{CsvError, Result};
use cyclecmp_core::{analyze, Analysis, RawTable};
use std::io::Read;
use tracing::debug;

/// Default maximum number of rows to prevent memory exhaustion.
///
/// # Examples
///
/// ```
/// # use cyclecmp_csv::FromCsvConfig;
/// let config = FromCsvConfig::default();
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for reading benchmark tables.
///
/// # Examples
///
/// ## Default Configuration
///
/// ```
/// # use cyclecmp_csv::FromCsvConfig;
/// let config = FromCsvConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert!(config.flexible);
/// ```
///
/// ## Semicolon-Delimited Harness Output
///
/// ```
/// # use cyclecmp_csv::FromCsvConfig;
/// let config = FromCsvConfig {
///     delimiter: b';',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields (default: `true`).
    pub trim: bool,

    /// Maximum number of rows to read, header included (default: 1,000,000).
    ///
    /// Reading stops with [`CsvError::SecurityLimit`] past this count.
    pub max_rows: usize,

    /// Accept rows whose width differs from the first row (default: `true`).
    ///
    /// Hand-edited benchmark logs routinely contain short or over-long rows;
    /// the normalizer drops the short ones. With `false` such a file fails
    /// with a parse error instead.
    pub flexible: bool,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
            flexible: true,
        }
    }
}

/// Reads CSV text into a raw table with default configuration.
///
/// # Errors
///
/// - [`CsvError::Empty`] if the text contains no rows.
/// - [`CsvError::ParseError`] for malformed records.
/// - [`CsvError::SecurityLimit`] past [`DEFAULT_MAX_ROWS`] rows.
///
/// # Examples
///
/// ```
/// use cyclecmp_csv::read_table;
///
/// let raw = read_table("id,name,iterations,cycles\n1,new_float3,10,120.0\n").unwrap();
/// assert_eq!(raw.len(), 2);
/// ```
pub fn read_table(csv: &str) -> Result<RawTable> {
    read_table_with_config(csv, &FromCsvConfig::default())
}

/// Reads CSV text into a raw table with custom configuration.
///
/// # Examples
///
/// ```
/// use cyclecmp_csv::{read_table_with_config, FromCsvConfig};
///
/// let config = FromCsvConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// let raw = read_table_with_config("1\tnew_dbl0\t5\t42\n", &config).unwrap();
/// assert_eq!(raw.rows()[0][1], "new_dbl0");
/// ```
pub fn read_table_with_config(csv: &str, config: &FromCsvConfig) -> Result<RawTable> {
    read_table_from_reader_with_config(csv.as_bytes(), config)
}

/// Reads a raw table from any reader with default configuration.
///
/// # Examples
///
/// ```no_run
/// use cyclecmp_csv::read_table_from_reader;
/// use std::fs::File;
///
/// let file = File::open("patch.csv").unwrap();
/// let raw = read_table_from_reader(file).unwrap();
/// ```
pub fn read_table_from_reader<R: Read>(reader: R) -> Result<RawTable> {
    read_table_from_reader_with_config(reader, &FromCsvConfig::default())
}

/// Reads a raw table from any reader with custom configuration.
pub fn read_table_from_reader_with_config<R: Read>(
    reader: R,
    config: &FromCsvConfig,
) -> Result<RawTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(config.flexible)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut table = RawTable::default();
    for (record_idx, result) in csv_reader.records().enumerate() {
        // Security: Limit row count to prevent memory exhaustion
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        let record = result.map_err(|e| CsvError::ParseError {
            line: e
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(record_idx + 1),
            message: e.to_string(),
        })?;

        table.push(record.iter().map(str::to_string).collect());
    }

    if table.is_empty() {
        return Err(CsvError::Empty);
    }

    debug!(rows = table.len(), "read delimited input");
    Ok(table)
}

/// Reads CSV text and runs the full pipeline over it.
///
/// # Examples
///
/// ```
/// use cyclecmp_csv::analyze_csv;
///
/// let analysis = analyze_csv(
///     "1,new_float3,10,120.0\n2,old_float3,10,150.0\n3,new_float3,10,130.0\n4,old_float3,10,160.0\n",
/// )
/// .unwrap();
/// assert_eq!(
///     analysis.report_lines()[1],
///     "Float: new is on average 1.24× faster than old."
/// );
/// ```
pub fn analyze_csv(csv: &str) -> Result<Analysis> {
    analyze_csv_with_config(csv, &FromCsvConfig::default())
}

/// Reads CSV text with custom configuration and runs the full pipeline.
pub fn analyze_csv_with_config(csv: &str, config: &FromCsvConfig) -> Result<Analysis> {
    let raw = read_table_with_config(csv, config)?;
    Ok(analyze(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = FromCsvConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(config.trim);
        assert!(config.flexible);
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
    }

    #[test]
    fn test_read_keeps_first_row_as_data() {
        let raw = read_table("1,new_float3,10,120.0\n").unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.rows()[0], vec!["1", "new_float3", "10", "120.0"]);
    }

    #[test]
    fn test_read_trims_fields() {
        let raw = read_table(" id , name ,iterations,cycles\n 1 , new_float3 ,10, 120 \n").unwrap();
        assert_eq!(raw.rows()[0][0], "id");
        assert_eq!(raw.rows()[1][1], "new_float3");
    }

    #[test]
    fn test_read_without_trim() {
        let config = FromCsvConfig {
            trim: false,
            ..Default::default()
        };
        let raw = read_table_with_config("1, new_float3,10,1\n", &config).unwrap();
        assert_eq!(raw.rows()[0][1], " new_float3");
    }

    #[test]
    fn test_read_quoted_name() {
        let raw = read_table("1,\"new_float,odd3\",10,1\n").unwrap();
        assert_eq!(raw.rows()[0][1], "new_float,odd3");
    }

    #[test]
    fn test_read_flexible_widths() {
        let raw = read_table("id,name,iterations,cycles\n1,new_float3\n2,old_float3,10,1,extra\n").unwrap();
        assert_eq!(raw.rows()[1].len(), 2);
        assert_eq!(raw.rows()[2].len(), 5);
    }

    #[test]
    fn test_read_strict_widths_fail() {
        let config = FromCsvConfig {
            flexible: false,
            ..Default::default()
        };
        let err = read_table_with_config("id,name,iterations,cycles\n1,new_float3\n", &config)
            .unwrap_err();
        assert!(matches!(err, CsvError::ParseError { .. }));
    }

    #[test]
    fn test_read_empty() {
        assert!(matches!(read_table(""), Err(CsvError::Empty)));
    }

    #[test]
    fn test_row_limit() {
        let config = FromCsvConfig {
            max_rows: 2,
            ..Default::default()
        };
        let err = read_table_with_config("1,a,1,1\n2,b,1,1\n3,c,1,1\n", &config).unwrap_err();
        assert!(matches!(
            err,
            CsvError::SecurityLimit {
                limit: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_analyze_csv_schema_error() {
        let err = analyze_csv("id,name\n1,new_float3\n").unwrap_err();
        assert!(matches!(err, CsvError::Pipeline(_)));
        assert_eq!(
            err.to_string(),
            "Missing required columns: cycles, iterations"
        );
    }
}
