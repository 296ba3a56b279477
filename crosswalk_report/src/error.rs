// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for report generation and persistence.

use std::path::{Path, PathBuf};

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors surfaced to the caller of the report writer.
///
/// There are no "expected" runtime errors in the parity logic itself; the
/// only fallible step is persisting the finished report. A failed write
/// never leaves a partial report file behind.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing the report file failed.
    #[error("failed to write report '{}': {source}", path.display())]
    Io {
        /// Destination the report was being written to.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
