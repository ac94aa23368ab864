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

//! CLI command implementations

mod analyze;

pub use analyze::analyze;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};

/// Default maximum input size (1 GB).
///
/// Can be overridden via the `CYCLECMP_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable that overrides [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "CYCLECMP_MAX_FILE_SIZE";

/// Get the maximum file size from environment or use default.
///
/// Unset or unparsable values fall back to [`DEFAULT_MAX_FILE_SIZE`].
fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// The size is checked against the limit via `fs::metadata()` before any
/// bytes are read.
///
/// # Errors
///
/// - [`CliError::NotFound`] if the file does not exist.
/// - [`CliError::FileTooLarge`] if it exceeds the configured maximum.
/// - [`CliError::Io`] for any other read failure, including invalid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use cyclecmp_cli::commands::read_file;
///
/// # fn main() -> Result<(), cyclecmp_cli::error::CliError> {
/// let content = read_file("patch.csv")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::not_found(path),
        _ => CliError::io_error(path, e),
    })?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(
            path,
            metadata.len(),
            max_file_size,
        ));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to stdout.
///
/// Reports go to files through `cyclecmp_report::export`; this only covers
/// the console.
pub fn write_output(content: &str) -> Result<(), CliError> {
    io::stdout()
        .write_all(content.as_bytes())
        .map_err(|e| CliError::io_error("<stdout>", e))
}
