//! PlantUML class diagram pipeline
//!
//! Classifier → working set → member lines + relationship edges → assembler.
//! Every stage is a pure function of the symbol provider's contents and the
//! visibility filter of the pass.

mod assembler;
mod classifier;
mod member;
mod relationship;
mod working_set;

pub use assembler::{DiagramAssembler, Diagrams, END_MARKER, START_MARKER};
pub use classifier::{classify, Classification};
pub use member::{MemberRenderer, READ_MARKER, VOID, WRITE_MARKER};
pub use relationship::{Relationship, RelationshipKind, RelationshipResolver};
pub use working_set::{WorkingEntry, WorkingSet};
