// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth-first serialization of a document tree to markdown text.

use alloc::string::String;
use core::fmt::Write;

use crate::types::{Document, Node};

impl Document {
    /// Serialize the tree to markdown.
    ///
    /// Sections render as headings with one `#` per nesting level, tables as
    /// a single-column header plus one line per row, paragraphs as plain
    /// text. Every node is followed by a blank line so siblings stay
    /// separated; an empty paragraph contributes exactly one blank line.
    /// Identical trees serialize to identical bytes.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        render_nodes(&mut out, &self.children, 1);
        out
    }
}

fn render_nodes(out: &mut String, nodes: &[Node], depth: usize) {
    for node in nodes {
        match node {
            Node::Paragraph(text) => {
                if text.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(text);
                    out.push_str("\n\n");
                }
            }
            Node::Table(table) => {
                // Infallible: writing to a String cannot fail.
                let _ = writeln!(out, "| {} |", table.title);
                out.push_str("| --- |\n");
                for row in &table.rows {
                    let _ = writeln!(out, "| {row} |");
                }
                out.push('\n');
            }
            Node::Section(section) => {
                for _ in 0..depth {
                    out.push('#');
                }
                out.push(' ');
                out.push_str(&section.title);
                out.push_str("\n\n");
                render_nodes(out, &section.children, depth + 1);
            }
        }
    }
}
