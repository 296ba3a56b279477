// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The parity predicate: which symbols count as missing on a target.

use crosswalk_model::Platforms;

/// An invalid reference/target pair, rejected at construction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    /// The reference baseline must name at least one platform.
    #[error("reference platform set must not be empty")]
    EmptyReference,

    /// The target must be exactly one platform.
    #[error("target must be a single platform, got {0}")]
    TargetNotSingle(Platforms),
}

/// A parity comparison: a reference baseline and a single target platform.
///
/// A symbol is *missing* on the target iff its implemented set contains
/// **all** reference platforms and does not contain the target. The
/// reference side is deliberately a conjunction: a symbol implemented on
/// neither reference platform is not yet tracked on the baseline, so it is
/// not "missing" and never appears in a report. Do not relax the reference
/// check to an OR; that silently changes report semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParityQuery {
    reference: Platforms,
    target: Platforms,
}

impl ParityQuery {
    /// Create a query. The reference set must be non-empty and the target
    /// exactly one platform.
    pub fn new(reference: Platforms, target: Platforms) -> Result<Self, QueryError> {
        if reference.is_empty() {
            return Err(QueryError::EmptyReference);
        }
        if target.bits().count_ones() != 1 {
            return Err(QueryError::TargetNotSingle(target));
        }
        Ok(Self { reference, target })
    }

    /// The stock comparison: implemented for both mobile platforms but not
    /// for WebAssembly.
    pub fn wasm_gap() -> Self {
        Self {
            reference: Platforms::MOBILE,
            target: Platforms::WASM,
        }
    }

    /// Reference baseline platforms.
    pub fn reference(&self) -> Platforms {
        self.reference
    }

    /// Target platform (a single flag).
    pub fn target(&self) -> Platforms {
        self.target
    }

    /// Display label of the target platform.
    pub fn target_label(&self) -> &'static str {
        self.target
            .label()
            .expect("target is a single named platform by construction")
    }

    /// Whether a symbol with the given implemented set is missing on the
    /// target. Total over any well-formed [`Platforms`] value.
    pub fn is_missing(&self, implemented: Platforms) -> bool {
        implemented.contains(self.reference) && !implemented.contains(self.target)
    }
}
