// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document builder basics.
//!
//! Build a small nested document by hand with the scope-guarded builder and
//! print the rendered markdown. The guards close their sections and tables
//! when they go out of scope, so the nesting below is enforced by the
//! borrow checker rather than by matching close calls.
//!
//! Run:
//! - `cargo run -p crosswalk_demos --example markdown_basics`

use crosswalk_markdown::DocBuilder;

fn main() {
    let mut doc = DocBuilder::new();
    {
        let mut notes = doc.section("Release notes");
        notes.paragraph("Changes since the last release, grouped by area.");
        notes.blank();
        {
            let mut rendering = notes.section("Rendering");
            let mut fixed = rendering.table("Fixed");
            fixed.row("Clipped text no longer overflows rounded borders");
            fixed.row("Hit testing respects z-order for overlapping panes");
        }
        {
            let mut input = notes.section("Input");
            let mut added = input.table("Added");
            added.row("Pen pressure is forwarded to canvas handlers");
        }
        notes.paragraph("2 areas changed.");
    }

    println!("{}", doc.finish().to_markdown());
}
