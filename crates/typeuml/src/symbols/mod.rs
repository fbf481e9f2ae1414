//! Symbol model
//!
//! Plain-data records describing a program's declared types. A host builds
//! these once from its compiler state and hands them to the diagram pipeline,
//! which only ever reads them.

mod graph;
mod member;
mod reference;
mod type_symbol;

pub use graph::SymbolGraph;
pub use member::{Accessor, FieldSymbol, MemberSymbol, MethodSymbol, Parameter, PropertySymbol};
pub use reference::TypeRef;
pub use type_symbol::TypeSymbol;
