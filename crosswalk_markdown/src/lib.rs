// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crosswalk Markdown: an append-only, nestable document builder.
//!
//! Documents are trees of sections, each holding an ordered sequence of
//! paragraphs, single-column tables, and nested sections. The builder keeps
//! an explicit stack of open containers and hands out scope guards:
//!
//! - [`DocBuilder::section`] / [`Section::section`] open a nested section;
//! - [`Section::table`] opens a table; [`Table::row`] appends a row;
//! - dropping a guard closes its container.
//!
//! A guard mutably borrows its parent, so all appends flow through the
//! innermost open container and closing out of order is a compile error —
//! there is no way to forget to close a section, including on early-return
//! paths. The internal stack still checks its own bookkeeping and panics on
//! mismatch rather than producing a silently wrong document.
//!
//! [`Document::to_markdown`] serializes the finished tree depth-first with
//! heading markers proportional to nesting depth. Output is byte-stable for
//! identical input.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! # Example
//!
//! ```
//! use crosswalk_markdown::DocBuilder;
//!
//! let mut doc = DocBuilder::new();
//! {
//!     let mut report = doc.section("Report");
//!     report.paragraph("An overview.");
//!     {
//!         let mut details = report.section("Details");
//!         let mut table = details.table("Numbers");
//!         table.row("one");
//!         table.row("two");
//!     }
//!     report.paragraph("A closing note.");
//! }
//! let markdown = doc.finish().to_markdown();
//! assert!(markdown.starts_with("# Report\n"));
//! assert!(markdown.contains("## Details\n"));
//! assert!(markdown.contains("| two |\n"));
//! ```

#![no_std]

extern crate alloc;

pub mod builder;
pub mod render;
pub mod types;

pub use builder::{DocBuilder, Section, Table};
pub use types::{Document, Node, SectionNode, TableNode};
