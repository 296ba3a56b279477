// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Custom parity query written to a file.
//!
//! Compare a Windows baseline against macOS and persist the report with the
//! atomic writer.
//!
//! Run:
//! - `cargo run -p crosswalk_demos --example custom_query`

use crosswalk_model::{ApiSurface, NamespaceGroup, Platforms, Symbol, SymbolKind, TypeSymbol};
use crosswalk_report::{ParityQuery, generate_to_path};

fn main() {
    let pane = TypeSymbol::new(
        "Shell.Pane",
        "Pane",
        Platforms::WINDOWS,
        vec![Symbol::new(
            "Shell.Pane.Dock",
            SymbolKind::Method,
            Platforms::WINDOWS,
        )],
    );
    let window = TypeSymbol::new(
        "Shell.Window",
        "Window",
        Platforms::WINDOWS | Platforms::MACOS,
        vec![Symbol::new(
            "Shell.Window.Title",
            SymbolKind::Property,
            Platforms::WINDOWS,
        )],
    );
    let surface = ApiSurface::new(vec![NamespaceGroup::new("Shell", vec![pane, window])])
        .expect("demo surface is well formed");

    let query = ParityQuery::new(Platforms::WINDOWS, Platforms::MACOS)
        .expect("Windows→macOS is a valid query");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("macos-report.md");
    let counters = generate_to_path(&surface, &query, &path).expect("report write");

    println!("wrote {}", path.display());
    println!("{}", std::fs::read_to_string(&path).expect("read back"));
    println!("(missing classes: {})", counters.missing_classes);
}
