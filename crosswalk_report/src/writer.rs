// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persisting finished reports to disk.

use std::io::Write;
use std::path::Path;

use crosswalk_markdown::Document;
use crosswalk_model::ApiSurface;
use tempfile::NamedTempFile;

use crate::error::{ReportError, Result};
use crate::query::ParityQuery;
use crate::report::{ReportCounters, build_report};

/// Write `contents` to `path` atomically.
///
/// The text is staged in a temporary file in the destination directory and
/// renamed over the target, so a failed write never leaves a partial report
/// behind. Failures surface as [`ReportError::Io`]; no retry is attempted,
/// since the cause is a local filesystem or permission issue.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir).map_err(|source| ReportError::io(path, source))?;
    staged
        .write_all(contents.as_bytes())
        .map_err(|source| ReportError::io(path, source))?;
    staged
        .persist(path)
        .map_err(|error| ReportError::io(path, error.error))?;
    Ok(())
}

/// Render `document` and write it to `path` atomically.
pub fn write_document(path: &Path, document: &Document) -> Result<()> {
    write_report(path, &document.to_markdown())
}

/// Run the full pipeline: build the parity report for `surface` under
/// `query`, render it, and persist it atomically at `path`.
///
/// Returns the final counters so callers can surface totals without
/// re-parsing the report.
pub fn generate_to_path(
    surface: &ApiSurface,
    query: &ParityQuery,
    path: &Path,
) -> Result<ReportCounters> {
    let (document, counters) = build_report(surface, query);
    write_document(path, &document)?;
    tracing::info!(
        path = %path.display(),
        missing_classes = counters.missing_classes,
        missing_members = counters.missing_properties
            + counters.missing_methods
            + counters.missing_events,
        "wrote parity report"
    );
    Ok(counters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosswalk_model::{NamespaceGroup, Platforms, TypeSymbol};

    #[test]
    fn written_file_holds_the_exact_rendered_bytes() {
        let surface = ApiSurface::new(vec![NamespaceGroup::new(
            "NS",
            vec![TypeSymbol::new("NS.Foo", "Foo", Platforms::MOBILE, vec![])],
        )])
        .unwrap();
        let query = ParityQuery::wasm_gap();
        let (document, _) = build_report(&surface, &query);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wasm-report.md");
        let counters = generate_to_path(&surface, &query, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, document.to_markdown());
        assert_eq!(counters.missing_classes, 1);
    }

    #[test]
    fn write_overwrites_an_existing_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        std::fs::write(&path, "stale").unwrap();

        write_report(&path, "fresh").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn missing_destination_directory_surfaces_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("report.md");

        let err = write_report(&path, "text").unwrap_err();
        let ReportError::Io { path: errored, .. } = err;
        assert_eq!(errored, path);
    }
}
