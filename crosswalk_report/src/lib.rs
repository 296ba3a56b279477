// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crosswalk Report: the cross-platform API parity analyzer.
//!
//! Given a validated [`ApiSurface`](crosswalk_model::ApiSurface) and a
//! [`ParityQuery`] (reference platform set plus a single target platform),
//! this crate finds every symbol that is implemented on all reference
//! platforms but not on the target, and emits a structured markdown report:
//!
//! 1. **Missing classes** — one table per namespace listing types that are
//!    wholly missing on the target.
//! 2. **Missing members** — one section per namespace, one table per type,
//!    listing missing properties, then methods, then events of types that
//!    are otherwise present.
//!
//! The traversal is single-threaded and deterministic: namespace and type
//! order follow the model, member categories always render in
//! property/method/event order, and two runs over the same surface produce
//! byte-identical output. A wholly-missing type's members are never reported
//! individually.
//!
//! [`generate_to_path`] runs the whole pipeline and persists the report
//! atomically; [`build_report`] stops at the in-memory document for callers
//! that render or inspect it themselves.
//!
//! # Example
//!
//! ```
//! use crosswalk_model::{ApiSurface, NamespaceGroup, Platforms, Symbol, SymbolKind, TypeSymbol};
//! use crosswalk_report::{ParityQuery, build_report};
//!
//! let slider = TypeSymbol::new(
//!     "Ui.Slider",
//!     "Slider",
//!     Platforms::MOBILE,
//!     vec![],
//! );
//! let surface = ApiSurface::new(vec![NamespaceGroup::new("Ui", vec![slider])]).unwrap();
//!
//! let (document, counters) = build_report(&surface, &ParityQuery::wasm_gap());
//! assert_eq!(counters.missing_classes, 1);
//! assert!(document.to_markdown().contains("| Ui.Slider |"));
//! ```

pub mod error;
pub mod query;
pub mod report;
pub mod writer;

pub use error::{ReportError, Result};
pub use query::{ParityQuery, QueryError};
pub use report::{GENERATION_TAG, ReportCounters, build_report};
pub use writer::{generate_to_path, write_report};
