//! Symbol provider trait
//!
//! The diagram pipeline never talks to a compiler directly. It reads a
//! pre-materialized set of type declarations through this trait, which is
//! implemented by [`SymbolGraph`](crate::symbols::SymbolGraph) and can be
//! implemented by any host that already holds a type graph in memory.

use crate::symbols::TypeSymbol;

/// Read-only source of declared types
///
/// Implementations must hand out types in a stable order; that order becomes
/// the block order of the rendered diagram.
pub trait SymbolProvider: Send + Sync {
    /// All declared types, in declaration order
    fn types(&self) -> &[TypeSymbol];

    /// Look up a type by its qualified display name
    ///
    /// The default implementation scans [`types`](Self::types) and returns the
    /// first match.
    fn lookup(&self, name: &str) -> Option<&TypeSymbol> {
        self.types().iter().find(|t| t.name.as_str() == name)
    }

    /// Number of declared types
    fn type_count(&self) -> usize {
        self.types().len()
    }
}

impl SymbolProvider for Vec<TypeSymbol> {
    fn types(&self) -> &[TypeSymbol] {
        self.as_slice()
    }
}
