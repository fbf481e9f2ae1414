//! Symbol graph
//!
//! An ordered, in-memory collection of type declarations with a name index.
//! This is the plain-data form of what a compiler front end knows about a
//! program's types, and the standard [`SymbolProvider`] implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, span, warn, Level};

use super::TypeSymbol;
use crate::core::{DiagramError, SymbolProvider};

/// Serialized form of a symbol graph
#[derive(Debug, Default, Serialize, Deserialize)]
struct SymbolGraphDocument {
    #[serde(default)]
    types: Vec<TypeSymbol>,
}

/// Ordered collection of declared types
#[derive(Debug, Clone, Default)]
pub struct SymbolGraph {
    types: Vec<TypeSymbol>,
    /// First index of each name
    index: HashMap<String, usize>,
}

impl SymbolGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type, keeping declaration order
    ///
    /// Fails if the type has an empty name. Duplicate names are kept; lookups
    /// resolve to the first declaration.
    pub fn add_type(&mut self, symbol: TypeSymbol) -> Result<(), DiagramError> {
        if symbol.name.as_str().is_empty() {
            return Err(DiagramError::invalid_symbol(format!(
                "type #{} has an empty name",
                self.types.len()
            )));
        }

        let name = symbol.name.as_str();
        if self.index.contains_key(name) {
            warn!(name, "Duplicate type declaration");
        } else {
            self.index.insert(name.to_string(), self.types.len());
        }
        if symbol.implements(name) {
            warn!(name, "Type lists itself among its interfaces");
        }

        self.types.push(symbol);
        Ok(())
    }

    /// Parse a graph from its JSON form
    pub fn from_json(input: &str) -> Result<Self, DiagramError> {
        let load_span = span!(Level::INFO, "load_symbol_graph", input_len = input.len());
        let _enter = load_span.enter();

        let document: SymbolGraphDocument = serde_json::from_str(input)?;
        Self::from_document(document)
    }

    /// Parse a graph from a JSON reader
    pub fn from_reader(reader: impl Read) -> Result<Self, DiagramError> {
        let load_span = span!(Level::INFO, "load_symbol_graph");
        let _enter = load_span.enter();

        let document: SymbolGraphDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Read and parse a graph from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DiagramError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Reading symbol graph");
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn from_document(document: SymbolGraphDocument) -> Result<Self, DiagramError> {
        let mut graph = Self::new();
        for symbol in document.types {
            graph.add_type(symbol)?;
        }
        info!(type_count = graph.len(), "Symbol graph loaded");
        Ok(graph)
    }

    /// Serialize the graph back to pretty JSON
    pub fn to_json(&self) -> Result<String, DiagramError> {
        let document = SymbolGraphDocument {
            types: self.types.clone(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeSymbol> {
        self.types.iter()
    }
}

impl SymbolProvider for SymbolGraph {
    fn types(&self) -> &[TypeSymbol] {
        &self.types
    }

    fn lookup(&self, name: &str) -> Option<&TypeSymbol> {
        self.index.get(name).map(|&i| &self.types[i])
    }
}

impl FromIterator<TypeSymbol> for SymbolGraph {
    /// Collect types into a graph, silently dropping nameless ones
    fn from_iter<I: IntoIterator<Item = TypeSymbol>>(iter: I) -> Self {
        let mut graph = Self::new();
        for symbol in iter {
            if let Err(e) = graph.add_type(symbol) {
                warn!(error = %e, "Dropping type");
            }
        }
        graph
    }
}
