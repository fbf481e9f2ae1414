//! Type classification
//!
//! Decides which diagram block, if any, a declared type becomes.

use crate::core::TypeKind;
use crate::symbols::TypeSymbol;

/// What a declared type renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Class,
    Interface,
    Enum,
    /// Not drawn at all (structs, delegates, unknown kinds)
    Skip,
}

impl Classification {
    /// Keyword opening this type's block and prefixing its edge lines
    ///
    /// `None` for skipped types.
    pub fn keyword(self, is_abstract: bool) -> Option<&'static str> {
        match self {
            Classification::Class if is_abstract => Some("abstract class"),
            Classification::Class => Some("class"),
            Classification::Interface => Some("interface"),
            Classification::Enum => Some("enum"),
            Classification::Skip => None,
        }
    }

    pub fn is_skip(self) -> bool {
        self == Classification::Skip
    }
}

/// Classify a type by its declared kind
pub fn classify(symbol: &TypeSymbol) -> Classification {
    match symbol.kind {
        TypeKind::Class => Classification::Class,
        TypeKind::Interface => Classification::Interface,
        TypeKind::Enum => Classification::Enum,
        TypeKind::Struct | TypeKind::Delegate | TypeKind::Unknown => Classification::Skip,
    }
}
