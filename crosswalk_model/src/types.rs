// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core model types: platform flags, symbols, types, and namespace groups.

use alloc::string::String;
use alloc::vec::Vec;

bitflags::bitflags! {
    /// Set of platforms a symbol is implemented for.
    ///
    /// Closed under union; equality and flag containment are the operations
    /// the parity analysis relies on. A symbol's set is fixed when the model
    /// is built and never changes afterwards.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Platforms: u8 {
        /// Android.
        const ANDROID = 0b0000_0001;
        /// iOS.
        const IOS     = 0b0000_0010;
        /// WebAssembly.
        const WASM    = 0b0000_0100;
        /// macOS.
        const MACOS   = 0b0000_1000;
        /// Skia-backed desktop targets.
        const SKIA    = 0b0001_0000;
        /// Windows.
        const WINDOWS = 0b0010_0000;

        /// Both mobile platforms. The usual reference baseline.
        const MOBILE = Self::ANDROID.bits() | Self::IOS.bits();
    }
}

impl Default for Platforms {
    fn default() -> Self {
        Self::empty()
    }
}

impl Platforms {
    const NAMED: [(Self, &'static str); 6] = [
        (Self::ANDROID, "Android"),
        (Self::IOS, "iOS"),
        (Self::WASM, "WASM"),
        (Self::MACOS, "macOS"),
        (Self::SKIA, "Skia"),
        (Self::WINDOWS, "Windows"),
    ];

    /// Display label for a single-platform value, `None` for composites
    /// or the empty set.
    pub fn label(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(platform, _)| *platform == self)
            .map(|(_, name)| *name)
    }
}

/// Lists the contained platforms in declaration order, in English list
/// style: `"Android"`, `"Android and iOS"`, `"Android, iOS, and WASM"`.
/// The empty set displays as `"no platforms"`.
impl core::fmt::Display for Platforms {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(platform, _)| self.contains(*platform))
            .map(|(_, name)| *name)
            .collect();
        match names.as_slice() {
            [] => f.write_str("no platforms"),
            [only] => f.write_str(only),
            [first, last] => write!(f, "{first} and {last}"),
            [init @ .., last] => {
                for name in init {
                    write!(f, "{name}, ")?;
                }
                write!(f, "and {last}")
            }
        }
    }
}

/// Kind tag of a documented API element.
///
/// A closed set: the analyzer switches on this tag only where member
/// ordering (properties before methods before events) matters.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SymbolKind {
    /// A class, struct, enum, interface, or delegate.
    Type,
    /// A property member.
    Property,
    /// A method member.
    Method,
    /// An event member.
    Event,
}

/// One documented API element with its implementation-status annotation.
///
/// Display names are fully qualified. Members carry their declaring type's
/// qualification so a report row is meaningful on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    display_name: String,
    kind: SymbolKind,
    implemented: Platforms,
}

impl Symbol {
    /// Create a symbol. The implemented set is fixed from here on.
    pub fn new(display_name: impl Into<String>, kind: SymbolKind, implemented: Platforms) -> Self {
        Self {
            display_name: display_name.into(),
            kind,
            implemented,
        }
    }

    /// Fully qualified display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Kind tag.
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Platforms this symbol is implemented for.
    pub fn implemented(&self) -> Platforms {
        self.implemented
    }
}

/// A type symbol together with its ordered member list.
///
/// Member order is preserved as built; the analyzer imposes its own
/// category order (properties, methods, events) when reporting, so the
/// model does not need to pre-sort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSymbol {
    symbol: Symbol,
    short_name: String,
    members: Vec<Symbol>,
}

impl TypeSymbol {
    /// Create a type symbol from its qualified name, short (unqualified)
    /// name, implemented set, and members.
    ///
    /// Structural rules (member kinds, duplicate members) are checked when
    /// the surface is assembled, not here.
    pub fn new(
        display_name: impl Into<String>,
        short_name: impl Into<String>,
        implemented: Platforms,
        members: Vec<Symbol>,
    ) -> Self {
        Self {
            symbol: Symbol::new(display_name, SymbolKind::Type, implemented),
            short_name: short_name.into(),
            members,
        }
    }

    /// The type viewed as a plain symbol.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Fully qualified display name.
    pub fn display_name(&self) -> &str {
        self.symbol.display_name()
    }

    /// Unqualified name, used as the member-table title in reports.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Platforms this type is implemented for.
    pub fn implemented(&self) -> Platforms {
        self.symbol.implemented()
    }

    /// All members in model order.
    pub fn members(&self) -> &[Symbol] {
        &self.members
    }

    /// Members of one kind, in model order.
    pub fn members_of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &Symbol> + '_ {
        self.members.iter().filter(move |m| m.kind() == kind)
    }
}

/// A namespace key paired with its ordered sequence of types.
///
/// Insertion order is significant: report output follows it, which is what
/// makes two runs over the same model byte-identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceGroup {
    namespace: String,
    types: Vec<TypeSymbol>,
}

impl NamespaceGroup {
    /// Create a group from a namespace display string and its types.
    pub fn new(namespace: impl Into<String>, types: Vec<TypeSymbol>) -> Self {
        Self {
            namespace: namespace.into(),
            types,
        }
    }

    /// Namespace display string (the grouping key).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Types in insertion order.
    pub fn types(&self) -> &[TypeSymbol] {
        &self.types
    }
}
