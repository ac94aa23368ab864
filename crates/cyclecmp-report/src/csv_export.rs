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

//! Long-form CSV export for analysis reports.

use crate::types::AnalysisReport;
use cyclecmp_core::ComparisonTable;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Renders the report's comparison tables as `type,exceptions,version,mean_cycles`.
pub fn to_csv(report: &AnalysisReport) -> io::Result<String> {
    let tables: BTreeMap<_, _> = report
        .types
        .iter()
        .map(|type_report| {
            let mut table = ComparisonTable::new();
            for row in &type_report.rows {
                if let Some(new) = row.new {
                    table.insert(row.exceptions, cyclecmp_core::Version::New, new);
                }
                if let Some(old) = row.old {
                    table.insert(row.exceptions, cyclecmp_core::Version::Old, old);
                }
            }
            (type_report.precision, table)
        })
        .collect();

    cyclecmp_csv::comparison_to_csv(&tables)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Exports an analysis report as long-form CSV.
pub fn export_csv(report: &AnalysisReport, path: &Path) -> io::Result<()> {
    fs::write(path, to_csv(report)?)?;
    Ok(())
}
