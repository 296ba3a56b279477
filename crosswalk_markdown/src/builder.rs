// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame-stack builder and its scope guards.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{Document, Node, SectionNode, TableNode};

/// One open container on the builder stack.
#[derive(Debug)]
enum Frame {
    Section(SectionNode),
    Table(TableNode),
}

/// Append-only document builder.
///
/// Content appended while a section or table is open becomes a child of the
/// innermost open container; closing (dropping the guard) restores the
/// previous container as the append target. See the crate docs for the
/// scoping discipline.
#[derive(Debug, Default)]
pub struct DocBuilder {
    root: Vec<Node>,
    frames: Vec<Frame>,
}

impl DocBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a top-level section. The returned guard is the append target
    /// until it is dropped.
    pub fn section(&mut self, title: impl Into<String>) -> Section<'_> {
        self.push_section(title.into());
        Section { doc: self }
    }

    /// Append a top-level paragraph.
    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.append(Node::Paragraph(text.into()));
    }

    /// Consume the builder and return the finished document.
    ///
    /// Panics if any container is still open. The guard API makes that
    /// unreachable from safe callers; the check guards the builder's own
    /// bookkeeping.
    pub fn finish(self) -> Document {
        assert!(
            self.frames.is_empty(),
            "document finished with {} container(s) still open",
            self.frames.len()
        );
        Document {
            children: self.root,
        }
    }

    // --- frame stack internals (guards are the only callers) ---

    fn push_section(&mut self, title: String) {
        self.frames.push(Frame::Section(SectionNode {
            title,
            children: Vec::new(),
        }));
    }

    fn push_table(&mut self, title: String) {
        self.frames.push(Frame::Table(TableNode {
            title,
            rows: Vec::new(),
        }));
    }

    fn pop_section(&mut self) {
        match self.frames.pop() {
            Some(Frame::Section(section)) => self.append(Node::Section(section)),
            other => panic!("section close without matching open (found {other:?})"),
        }
    }

    fn pop_table(&mut self) {
        match self.frames.pop() {
            Some(Frame::Table(table)) => self.append(Node::Table(table)),
            other => panic!("table close without matching open (found {other:?})"),
        }
    }

    fn append(&mut self, node: Node) {
        match self.frames.last_mut() {
            None => self.root.push(node),
            Some(Frame::Section(section)) => section.children.push(node),
            Some(Frame::Table(_)) => panic!("only rows may be appended inside an open table"),
        }
    }

    fn append_row(&mut self, text: String) {
        match self.frames.last_mut() {
            Some(Frame::Table(table)) => table.rows.push(text),
            _ => panic!("row appended with no open table"),
        }
    }
}

/// Guard for an open section. Dropping it closes the section.
#[derive(Debug)]
pub struct Section<'a> {
    doc: &'a mut DocBuilder,
}

impl Section<'_> {
    /// Open a nested section.
    pub fn section(&mut self, title: impl Into<String>) -> Section<'_> {
        self.doc.push_section(title.into());
        Section {
            doc: &mut *self.doc,
        }
    }

    /// Open a table under this section.
    pub fn table(&mut self, title: impl Into<String>) -> Table<'_> {
        self.doc.push_table(title.into());
        Table {
            doc: &mut *self.doc,
        }
    }

    /// Append a paragraph under this section.
    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.doc.append(Node::Paragraph(text.into()));
    }

    /// Append a blank separator paragraph.
    pub fn blank(&mut self) {
        self.paragraph("");
    }
}

impl Drop for Section<'_> {
    fn drop(&mut self) {
        self.doc.pop_section();
    }
}

/// Guard for an open table. Dropping it closes the table.
#[derive(Debug)]
pub struct Table<'a> {
    doc: &'a mut DocBuilder,
}

impl Table<'_> {
    /// Append one single-cell row.
    pub fn row(&mut self, text: impl Into<String>) {
        self.doc.append_row(text.into());
    }
}

impl Drop for Table<'_> {
    fn drop(&mut self) {
        self.doc.pop_table();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn empty_builder_finishes_empty() {
        let doc = DocBuilder::new().finish();
        assert!(doc.children.is_empty());
    }

    #[test]
    fn nested_scopes_build_the_expected_tree() {
        let mut doc = DocBuilder::new();
        {
            let mut outer = doc.section("Outer");
            outer.paragraph("intro");
            {
                let mut inner = outer.section("Inner");
                let mut table = inner.table("T");
                table.row("r1");
                table.row("r2");
            }
            outer.paragraph("outro");
        }
        let doc = doc.finish();

        let Node::Section(outer) = &doc.children[0] else {
            panic!("expected a section at the root");
        };
        assert_eq!(outer.title, "Outer");
        assert_eq!(outer.children.len(), 3);
        assert_eq!(outer.children[0], Node::Paragraph("intro".to_string()));
        let Node::Section(inner) = &outer.children[1] else {
            panic!("expected the nested section second");
        };
        assert_eq!(inner.title, "Inner");
        assert_eq!(
            inner.children,
            vec![Node::Table(TableNode {
                title: "T".to_string(),
                rows: vec!["r1".to_string(), "r2".to_string()],
            })]
        );
        assert_eq!(outer.children[2], Node::Paragraph("outro".to_string()));
    }

    #[test]
    fn guard_drop_closes_on_early_exit() {
        // Simulates an early return: the section guard goes out of scope
        // before any explicit close, and the document is still well formed.
        fn emit(doc: &mut DocBuilder, rows: &[&str]) {
            let mut section = doc.section("Partial");
            let mut table = section.table("Rows");
            for row in rows {
                if row.is_empty() {
                    return;
                }
                table.row(*row);
            }
        }

        let mut doc = DocBuilder::new();
        emit(&mut doc, &["a", "", "never"]);
        let doc = doc.finish();

        let Node::Section(section) = &doc.children[0] else {
            panic!("expected a section at the root");
        };
        let Node::Table(table) = &section.children[0] else {
            panic!("expected the table to have been closed into the section");
        };
        assert_eq!(table.rows, vec!["a".to_string()]);
    }

    #[test]
    fn siblings_preserve_append_order() {
        let mut doc = DocBuilder::new();
        doc.paragraph("first");
        {
            let mut s = doc.section("S");
            s.blank();
        }
        doc.paragraph("last");
        let doc = doc.finish();
        assert_eq!(doc.children.len(), 3);
        assert_eq!(doc.children[0], Node::Paragraph("first".to_string()));
        assert!(matches!(&doc.children[1], Node::Section(s) if s.title == "S"));
        assert_eq!(doc.children[2], Node::Paragraph("last".to_string()));
    }
}
