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

//! Delimited-text loading and export for cyclecmp benchmark tables.
//!
//! The reader keeps every record as untyped text in a
//! [`RawTable`](cyclecmp_core::RawTable): whether the first record is a
//! header is decided later by [`cyclecmp_core::normalize`]. The writers emit
//! the canonical table and the long-form grouped statistics.
//!
//! # Examples
//!
//! ```
//! use cyclecmp_csv::{analyze_csv, comparison_to_csv};
//!
//! let csv = "benchmark_number,name,iterations,cycles_per_tuple\n\
//!            1,new_dbl_exc0,100,80\n\
//!            2,old_dbl_exc0,100,120\n";
//!
//! let analysis = analyze_csv(csv).unwrap();
//! assert_eq!(
//!     analysis.report_lines(),
//!     vec![
//!         "Dbl: average cycles per run — new: 80.0, old: 120.0.".to_string(),
//!         "Dbl: new is on average 1.50× faster than old.".to_string(),
//!     ]
//! );
//!
//! let long = comparison_to_csv(&analysis.tables).unwrap();
//! assert!(long.contains("dbl,0,old,120"));
//! ```
//!
//! ## Custom configuration
//!
//! ```
//! use cyclecmp_csv::{read_table_with_config, FromCsvConfig};
//!
//! let config = FromCsvConfig {
//!     delimiter: b';',
//!     max_rows: 10,
//!     ..Default::default()
//! };
//! let raw = read_table_with_config("1;new_float0;1;5\n", &config).unwrap();
//! assert_eq!(raw.len(), 1);
//! ```

mod error;
mod from_csv;
mod to_csv;

pub use error::{CsvError, Result};
pub use from_csv::{
    analyze_csv, analyze_csv_with_config, read_table, read_table_from_reader,
    read_table_from_reader_with_config, read_table_with_config, FromCsvConfig, DEFAULT_MAX_ROWS,
};
pub use to_csv::{
    canonical_to_csv, canonical_to_writer, comparison_to_csv, comparison_to_writer, ToCsvConfig,
    CANONICAL_HEADER, COMPARISON_HEADER,
};
