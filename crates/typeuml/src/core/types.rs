//! Core type definitions for diagram generation
//!
//! This module contains the small vocabularies shared by the symbol model and
//! the diagram pipeline: declared visibility, declared type kind, method kind,
//! the visibility predicate a rendering pass runs under, and render settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared accessibility of a type or member
///
/// No ordering is implied between variants. Filtering is done by set
/// membership through [`VisibilityFilter`], never by comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Private,
    /// Protected and internal at the same time
    ProtectedInternal,
    Protected,
    Internal,
    /// Internal or protected
    InternalOrProtected,
    #[default]
    Public,
    /// Anything the symbol provider reports that we do not recognize
    #[serde(other)]
    Unknown,
}

impl Visibility {
    /// PlantUML access glyph for this visibility
    ///
    /// Total: unrecognized visibilities map to an empty string.
    pub fn glyph(self) -> &'static str {
        match self {
            Visibility::Private => "-",
            Visibility::ProtectedInternal | Visibility::Protected => "#",
            Visibility::Internal | Visibility::InternalOrProtected => "~",
            Visibility::Public => "+",
            Visibility::Unknown => "",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Private => write!(f, "private"),
            Visibility::ProtectedInternal => write!(f, "protected_internal"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Internal => write!(f, "internal"),
            Visibility::InternalOrProtected => write!(f, "internal_or_protected"),
            Visibility::Public => write!(f, "public"),
            Visibility::Unknown => write!(f, "unknown"),
        }
    }
}

/// Declared kind of a type, as reported by the symbol provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
    Struct,
    Delegate,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Class => write!(f, "class"),
            TypeKind::Interface => write!(f, "interface"),
            TypeKind::Enum => write!(f, "enum"),
            TypeKind::Struct => write!(f, "struct"),
            TypeKind::Delegate => write!(f, "delegate"),
            TypeKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Kind of a method symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    /// Getter backing a property
    PropertyGet,
    /// Setter backing a property
    PropertySet,
    #[serde(other)]
    Other,
}

impl MethodKind {
    /// Returns true for getter/setter methods, which render through their property
    pub fn is_accessor(&self) -> bool {
        matches!(self, MethodKind::PropertyGet | MethodKind::PropertySet)
    }
}

/// Visibility predicate applied to types and members during one rendering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityFilter {
    /// Anything visible within the assembly or beyond
    #[default]
    PublicOrInternal,
    /// Only publicly visible declarations
    PublicOnly,
}

impl VisibilityFilter {
    /// Both fixed predicates, in the order their diagrams are produced
    pub const ALL: [VisibilityFilter; 2] =
        [VisibilityFilter::PublicOrInternal, VisibilityFilter::PublicOnly];

    /// Check whether a declaration with `visibility` passes this predicate
    pub fn allows(self, visibility: Visibility) -> bool {
        match self {
            VisibilityFilter::PublicOrInternal => matches!(
                visibility,
                Visibility::Public | Visibility::Internal | Visibility::InternalOrProtected
            ),
            VisibilityFilter::PublicOnly => visibility == Visibility::Public,
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityFilter::PublicOrInternal => write!(f, "public-or-internal"),
            VisibilityFilter::PublicOnly => write!(f, "public-only"),
        }
    }
}

/// Default PlantUML theme written into every diagram header
pub const DEFAULT_THEME: &str = "cyborg-outline";

/// Configuration for a rendering pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Theme name emitted in the `!theme` directive
    pub theme: String,
}

impl RenderConfig {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}
