// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! WASM gap report basics.
//!
//! Build a small API surface, run the stock mobile→WASM parity query, and
//! print the rendered markdown.
//!
//! Run:
//! - `cargo run -p crosswalk_demos --example wasm_gap_report`

use crosswalk_model::{ApiSurface, NamespaceGroup, Platforms, Symbol, SymbolKind, TypeSymbol};
use crosswalk_report::{ParityQuery, build_report};

fn main() {
    // A namespace with one type wholly missing on WASM and one type that is
    // present but missing a property and an event.
    let slider = TypeSymbol::new(
        "Ui.Controls.Slider",
        "Slider",
        Platforms::MOBILE,
        vec![Symbol::new(
            "Ui.Controls.Slider.ValueChanged",
            SymbolKind::Event,
            Platforms::MOBILE,
        )],
    );
    let button = TypeSymbol::new(
        "Ui.Controls.Button",
        "Button",
        Platforms::MOBILE | Platforms::WASM,
        vec![
            Symbol::new(
                "Ui.Controls.Button.CornerRadius",
                SymbolKind::Property,
                Platforms::MOBILE,
            ),
            Symbol::new(
                "Ui.Controls.Button.Click",
                SymbolKind::Event,
                Platforms::MOBILE,
            ),
            Symbol::new(
                "Ui.Controls.Button.Focus",
                SymbolKind::Method,
                Platforms::MOBILE | Platforms::WASM,
            ),
        ],
    );
    let surface = ApiSurface::new(vec![NamespaceGroup::new(
        "Ui.Controls",
        vec![slider, button],
    )])
    .expect("demo surface is well formed");

    let (document, counters) = build_report(&surface, &ParityQuery::wasm_gap());
    println!("{}", document.to_markdown());
    println!(
        "(counters: {} classes, {} properties, {} methods, {} events)",
        counters.missing_classes,
        counters.missing_properties,
        counters.missing_methods,
        counters.missing_events,
    );
}
