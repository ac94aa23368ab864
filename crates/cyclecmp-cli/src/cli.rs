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

//! Command-line argument definitions.

use crate::commands;
use crate::error::CliError;
use clap::Parser;

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "patch.csv";

/// cyclecmp - compare new and old benchmark cycle counts
///
/// Reads a benchmark result table (`id, name, iterations, cycles`, with or
/// without a header), groups runs by type, exception count and version, and
/// reports how much faster the new implementation is.
///
/// # Examples
///
/// ```bash
/// # Analyze ./patch.csv
/// cyclecmp
///
/// # Analyze a specific file and keep a JSON copy of the report
/// cyclecmp results/run42.csv --out run42.json
/// ```
#[derive(Parser, Debug)]
#[command(name = "cyclecmp")]
#[command(author, version, about = "cyclecmp - compare new and old benchmark cycle counts", long_about = None)]
pub struct Cli {
    /// Benchmark result CSV
    #[arg(value_name = "CSV", default_value = DEFAULT_INPUT)]
    pub csv: String,

    /// Also write the report here (.json, .md, .csv, anything else as text)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Print comparison tables and row counts, not just the summary lines
    #[arg(short, long)]
    pub detailed: bool,
}

impl Cli {
    /// Runs the command the arguments describe.
    pub fn execute(&self) -> Result<(), CliError> {
        commands::analyze(&self.csv, self.out.as_deref(), self.detailed)
    }
}
