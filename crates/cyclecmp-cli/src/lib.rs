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

//! cyclecmp CLI library.
//!
//! `cyclecmp [CSV] [--out PATH] [--detailed]` reads one benchmark result
//! file (default `patch.csv`), prints the new-versus-old summary lines and
//! optionally exports the full report.
//!
//! # Examples
//!
//! ```no_run
//! use cyclecmp_cli::commands::analyze;
//!
//! # fn main() -> Result<(), cyclecmp_cli::error::CliError> {
//! analyze("patch.csv", Some("report.md"), false)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
