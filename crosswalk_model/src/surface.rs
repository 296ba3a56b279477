// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The validated API surface and its construction-time checks.
//!
//! Validation is fail-fast: a malformed model never yields an
//! [`ApiSurface`], so analysis code downstream can assume the invariants
//! hold and never has to emit a partially-correct report.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::types::{NamespaceGroup, SymbolKind};

/// A malformed symbol model, detected before any traversal runs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    /// A namespace group was built with an empty namespace key.
    #[error("namespace group at index {index} has an empty namespace key")]
    EmptyNamespace {
        /// Position of the offending group in the surface.
        index: usize,
    },

    /// A type symbol has an empty display or short name.
    #[error("namespace '{namespace}' contains a type with an empty name")]
    UnnamedType {
        /// Namespace the type belongs to.
        namespace: String,
    },

    /// A member symbol has an empty display name.
    #[error("type '{ty}' contains a member with an empty name")]
    UnnamedMember {
        /// Declaring type's display name.
        ty: String,
    },

    /// A member symbol carries the `Type` kind tag.
    #[error("member '{member}' of type '{ty}' must be a property, method, or event")]
    MemberIsType {
        /// Declaring type's display name.
        ty: String,
        /// Offending member's display name.
        member: String,
    },

    /// Two members of one type share a (name, kind) pair.
    #[error("type '{ty}' declares duplicate {kind:?} member '{member}'")]
    DuplicateMember {
        /// Declaring type's display name.
        ty: String,
        /// Duplicated member display name.
        member: String,
        /// Duplicated member kind.
        kind: SymbolKind,
    },
}

/// A validated, read-only API surface: the root handle for analysis.
///
/// Holds the ordered namespace groups exactly as built. Shareable by
/// reference across independent report runs; nothing here is ever mutated
/// after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiSurface {
    groups: Vec<NamespaceGroup>,
}

impl ApiSurface {
    /// Validate and assemble a surface from ordered namespace groups.
    ///
    /// Checks, in order of appearance:
    /// - every group has a non-empty namespace key;
    /// - every type has non-empty display and short names;
    /// - every member has a non-empty name and a member kind
    ///   (not [`SymbolKind::Type`]);
    /// - no type declares two members with the same (name, kind) pair.
    ///
    /// The first violation found is returned; no partial surface exists.
    pub fn new(groups: Vec<NamespaceGroup>) -> Result<Self, ModelError> {
        for (index, group) in groups.iter().enumerate() {
            if group.namespace().is_empty() {
                return Err(ModelError::EmptyNamespace { index });
            }
            for ty in group.types() {
                if ty.display_name().is_empty() || ty.short_name().is_empty() {
                    return Err(ModelError::UnnamedType {
                        namespace: group.namespace().to_string(),
                    });
                }
                let mut seen: Vec<(&str, SymbolKind)> = Vec::with_capacity(ty.members().len());
                for member in ty.members() {
                    if member.display_name().is_empty() {
                        return Err(ModelError::UnnamedMember {
                            ty: ty.display_name().to_string(),
                        });
                    }
                    if member.kind() == SymbolKind::Type {
                        return Err(ModelError::MemberIsType {
                            ty: ty.display_name().to_string(),
                            member: member.display_name().to_string(),
                        });
                    }
                    let key = (member.display_name(), member.kind());
                    if seen.contains(&key) {
                        return Err(ModelError::DuplicateMember {
                            ty: ty.display_name().to_string(),
                            member: member.display_name().to_string(),
                            kind: member.kind(),
                        });
                    }
                    seen.push(key);
                }
            }
        }
        Ok(Self { groups })
    }

    /// Namespace groups in insertion order.
    pub fn groups(&self) -> &[NamespaceGroup] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Platforms, Symbol, TypeSymbol};
    use alloc::vec;

    fn member(name: &str, kind: SymbolKind) -> Symbol {
        Symbol::new(name, kind, Platforms::MOBILE)
    }

    #[test]
    fn valid_surface_round_trips_groups() {
        let ty = TypeSymbol::new(
            "Ns.Widget",
            "Widget",
            Platforms::MOBILE,
            vec![
                member("Ns.Widget.Size", SymbolKind::Property),
                member("Ns.Widget.Show", SymbolKind::Method),
            ],
        );
        let surface = ApiSurface::new(vec![NamespaceGroup::new("Ns", vec![ty])]).unwrap();
        assert_eq!(surface.groups().len(), 1);
        assert_eq!(surface.groups()[0].namespace(), "Ns");
    }

    #[test]
    fn empty_namespace_is_rejected() {
        let err = ApiSurface::new(vec![NamespaceGroup::new("", vec![])]).unwrap_err();
        assert_eq!(err, ModelError::EmptyNamespace { index: 0 });
    }

    #[test]
    fn unnamed_type_is_rejected() {
        let ty = TypeSymbol::new("", "Widget", Platforms::MOBILE, vec![]);
        let err = ApiSurface::new(vec![NamespaceGroup::new("Ns", vec![ty])]).unwrap_err();
        assert!(matches!(err, ModelError::UnnamedType { .. }));
    }

    #[test]
    fn type_kinded_member_is_rejected() {
        let ty = TypeSymbol::new(
            "Ns.Widget",
            "Widget",
            Platforms::MOBILE,
            vec![member("Ns.Widget.Inner", SymbolKind::Type)],
        );
        let err = ApiSurface::new(vec![NamespaceGroup::new("Ns", vec![ty])]).unwrap_err();
        assert!(matches!(err, ModelError::MemberIsType { .. }));
    }

    #[test]
    fn duplicate_member_pair_is_rejected() {
        let ty = TypeSymbol::new(
            "Ns.Widget",
            "Widget",
            Platforms::MOBILE,
            vec![
                member("Ns.Widget.Show", SymbolKind::Method),
                member("Ns.Widget.Show", SymbolKind::Method),
            ],
        );
        let err = ApiSurface::new(vec![NamespaceGroup::new("Ns", vec![ty])]).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateMember { .. }));
    }

    #[test]
    fn same_name_different_kind_is_allowed() {
        let ty = TypeSymbol::new(
            "Ns.Widget",
            "Widget",
            Platforms::MOBILE,
            vec![
                member("Ns.Widget.Focus", SymbolKind::Method),
                member("Ns.Widget.Focus", SymbolKind::Event),
            ],
        );
        assert!(ApiSurface::new(vec![NamespaceGroup::new("Ns", vec![ty])]).is_ok());
    }
}
