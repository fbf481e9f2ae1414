//! Relationship resolution
//!
//! Derives `extends` and `implements` edges for one type against the working
//! set. Edges are only drawn between types rendered in the same pass, and an
//! interface edge is dropped when a more specific interface the type also
//! implements already reaches it.

use std::collections::HashSet;
use std::fmt;
use tracing::{span, trace, warn, Level};

use super::classifier::Classification;
use super::working_set::{WorkingEntry, WorkingSet};
use crate::core::SymbolProvider;
use crate::symbols::{TypeRef, TypeSymbol};

/// Relationship type between two rendered types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// Base class
    Extends,
    /// Implemented interface
    Implements,
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipKind::Extends => write!(f, "extends"),
            RelationshipKind::Implements => write!(f, "implements"),
        }
    }
}

/// An edge from a rendered type to another rendered type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship<'a> {
    pub from: &'a TypeRef,
    pub to: &'a TypeRef,
    pub kind: RelationshipKind,
}

impl<'a> Relationship<'a> {
    /// Render as a re-declaration line, e.g. `class B extends A`
    pub fn render(&self, keyword: &str) -> String {
        format!("{} {} {} {}", keyword, self.from, self.kind, self.to)
    }
}

/// Resolves edges for types of one working set
pub struct RelationshipResolver<'w, 'a, P: SymbolProvider + ?Sized> {
    working_set: &'w WorkingSet<'a>,
    provider: &'a P,
}

impl<'w, 'a, P: SymbolProvider + ?Sized> RelationshipResolver<'w, 'a, P> {
    /// `provider` must be the one the working set was selected from; it is
    /// consulted for the interface sets of types outside the working set.
    pub fn new(working_set: &'w WorkingSet<'a>, provider: &'a P) -> Self {
        Self {
            working_set,
            provider,
        }
    }

    /// Edges of one working-set entry: the base edge first, then interface
    /// edges in reported order
    pub fn resolve(&self, entry: &WorkingEntry<'a>) -> Vec<Relationship<'a>> {
        let symbol = entry.symbol;
        let resolve_span = span!(Level::TRACE, "resolve_relationships", name = %symbol.name);
        let _enter = resolve_span.enter();

        if entry.classification == Classification::Enum {
            return Vec::new();
        }

        let mut edges = Vec::new();

        if let Some(base) = &symbol.base {
            if base != &symbol.name && self.working_set.contains(base.as_str()) {
                edges.push(Relationship {
                    from: &symbol.name,
                    to: base,
                    kind: RelationshipKind::Extends,
                });
            } else {
                trace!(base = %base, "Base not rendered, no edge");
            }
        }

        let mut seen = HashSet::new();
        for interface in &symbol.interfaces {
            if interface == &symbol.name {
                warn!(name = %symbol.name, "Ignoring self-implementation");
                continue;
            }
            if !self.working_set.contains(interface.as_str()) || !seen.insert(interface) {
                continue;
            }
            if self.is_implied(symbol, interface) {
                trace!(interface = %interface, "Implied by a more specific interface");
                continue;
            }
            edges.push(Relationship {
                from: &symbol.name,
                to: interface,
                kind: RelationshipKind::Implements,
            });
        }

        edges
    }

    /// Check whether another interface in the type's full set already
    /// implements `interface`
    ///
    /// Only each candidate's own reported set is consulted, never a closure
    /// over it, so cyclic input cannot make this loop.
    fn is_implied(&self, symbol: &TypeSymbol, interface: &TypeRef) -> bool {
        symbol
            .interfaces
            .iter()
            .filter(|other| *other != interface && *other != &symbol.name)
            .filter_map(|other| self.provider.lookup(other.as_str()))
            .any(|other| other.implements(interface.as_str()))
    }
}
