// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crosswalk Model: a read-only model of a cross-platform API surface.
//!
//! The model describes an API surface as an ordered hierarchy:
//! namespaces → types → members, with each symbol annotated with the set of
//! platforms it is implemented for.
//!
//! - [`Platforms`]: bitflag set of platform tags, closed under union.
//! - [`Symbol`]: one documented API element (type, property, method, event).
//! - [`TypeSymbol`]: a type together with its ordered member list.
//! - [`NamespaceGroup`]: a namespace key with its ordered type sequence.
//! - [`ApiSurface`]: the validated root handle for a whole surface.
//!
//! The model is built once per report run — typically by external
//! reflection or static-analysis tooling — and is read-only afterwards.
//! [`ApiSurface::new`] validates the whole hierarchy up front, so downstream
//! analysis never observes a malformed model. Insertion order is preserved
//! everywhere; report generators rely on it for reproducible output.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! # Example
//!
//! ```
//! use crosswalk_model::{ApiSurface, NamespaceGroup, Platforms, Symbol, SymbolKind, TypeSymbol};
//!
//! let button = TypeSymbol::new(
//!     "Ui.Controls.Button",
//!     "Button",
//!     Platforms::MOBILE | Platforms::WASM,
//!     vec![Symbol::new(
//!         "Ui.Controls.Button.Click",
//!         SymbolKind::Event,
//!         Platforms::MOBILE,
//!     )],
//! );
//!
//! let surface = ApiSurface::new(vec![NamespaceGroup::new("Ui.Controls", vec![button])]).unwrap();
//! assert_eq!(surface.groups().len(), 1);
//! ```

#![no_std]

extern crate alloc;

pub mod surface;
pub mod types;

pub use surface::{ApiSurface, ModelError};
pub use types::{NamespaceGroup, Platforms, Symbol, SymbolKind, TypeSymbol};
