//! Typeuml - Turn a program's type declarations into PlantUML class diagrams
//!
//! A library that takes a pre-materialized symbol graph (classes,
//! interfaces, enums with their members and relationships) and renders a
//! deterministic PlantUML class diagram describing it.
//!
//! # Quick Start
//!
//! ```rust
//! use typeuml::prelude::*;
//!
//! let graph: SymbolGraph = vec![
//!     TypeSymbol::interface("Shop.IA"),
//!     TypeSymbol::class("Shop.A").with_interface("Shop.IA"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let uml = typeuml::render(&graph, VisibilityFilter::PublicOrInternal);
//! assert!(uml.contains("class Shop.A implements Shop.IA"));
//! ```
//!
//! # Loading a graph
//!
//! ```rust
//! let json = r#"{ "types": [ { "name": "Colors", "kind": "enum", "enum_members": ["Red"] } ] }"#;
//! let graph = typeuml::load_graph(json).unwrap();
//! let diagrams = typeuml::render_all(&graph);
//! assert!(diagrams.public_only.contains("enum Colors {\nRed\n}"));
//! ```

pub mod core;
pub mod diagram;
pub mod embed;
pub mod symbols;

pub use crate::core::*;
pub use diagram::{DiagramAssembler, Diagrams};
pub use symbols::{SymbolGraph, TypeRef, TypeSymbol};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        MethodKind, RenderConfig, SymbolProvider, TypeKind, Visibility, VisibilityFilter,
    };
    pub use crate::diagram::{DiagramAssembler, Diagrams};
    pub use crate::symbols::{
        Accessor, FieldSymbol, MemberSymbol, MethodSymbol, Parameter, PropertySymbol, SymbolGraph,
        TypeRef, TypeSymbol,
    };
}

/// Render one diagram with the default configuration
///
/// # Example
/// ```rust
/// use typeuml::{render, TypeSymbol, VisibilityFilter};
///
/// let types = vec![TypeSymbol::class("Zoo.Animal")];
/// let uml = render(&types, VisibilityFilter::PublicOnly);
/// assert!(uml.starts_with("@startuml\n"));
/// assert!(uml.contains("class Zoo.Animal {"));
/// ```
pub fn render<P: SymbolProvider + ?Sized>(provider: &P, filter: VisibilityFilter) -> String {
    DiagramAssembler::new().render(provider, filter)
}

/// Render both fixed variants with the default configuration
pub fn render_all<P: SymbolProvider + ?Sized>(provider: &P) -> Diagrams {
    DiagramAssembler::new().render_all(provider)
}

/// Parse a JSON symbol graph
pub fn load_graph(json: &str) -> Result<SymbolGraph, DiagramError> {
    SymbolGraph::from_json(json)
}
