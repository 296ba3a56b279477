// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document tree nodes: sections, tables, and paragraphs.

use alloc::string::String;
use alloc::vec::Vec;

/// A finished document: an ordered sequence of top-level nodes.
///
/// Produced by [`DocBuilder::finish`](crate::DocBuilder::finish); has no
/// identity beyond its content and is serialized exactly once per run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Top-level nodes in append order.
    pub children: Vec<Node>,
}

/// One content node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A paragraph of text; an empty string is a blank separator line.
    Paragraph(String),
    /// A single-column table.
    Table(TableNode),
    /// A nested section.
    Section(SectionNode),
}

/// A titled single-column table: the title renders as the header cell,
/// each row as one cell of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableNode {
    /// Header cell text.
    pub title: String,
    /// Rows in append order.
    pub rows: Vec<String>,
}

/// A titled section holding an ordered sequence of child nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionNode {
    /// Heading text.
    pub title: String,
    /// Child nodes in append order.
    pub children: Vec<Node>,
}
