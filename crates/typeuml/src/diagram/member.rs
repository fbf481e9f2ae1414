//! Member line rendering
//!
//! Turns one field, method or property into one diagram line.

use super::classifier::Classification;
use super::working_set::WorkingEntry;
use crate::core::VisibilityFilter;
use crate::symbols::{Accessor, FieldSymbol, MemberSymbol, MethodSymbol, PropertySymbol};

/// Appended when a property has a setter visible under the current filter
pub const WRITE_MARKER: &str = " <font color=darkred><==</font>";

/// Appended when a property has a getter visible under the current filter
pub const READ_MARKER: &str = " <font color=darkgreen>==></font>";

/// Return type shown for methods that return nothing
pub const VOID: &str = "void";

/// Renders member lines under one visibility predicate
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberRenderer {
    filter: VisibilityFilter,
}

impl MemberRenderer {
    pub fn new(filter: VisibilityFilter) -> Self {
        Self { filter }
    }

    /// Render one member, or `None` if it is filtered out or is a property
    /// accessor method
    pub fn render(&self, member: &MemberSymbol) -> Option<String> {
        if !self.filter.allows(member.visibility()) {
            return None;
        }
        match member {
            MemberSymbol::Field(field) => Some(self.render_field(field)),
            MemberSymbol::Method(method) if method.method_kind.is_accessor() => None,
            MemberSymbol::Method(method) => Some(self.render_method(method)),
            MemberSymbol::Property(property) => Some(self.render_property(property)),
        }
    }

    /// Render the body lines of a type's block, in declaration order
    ///
    /// Enums list their member names only.
    pub fn render_block(&self, entry: &WorkingEntry<'_>) -> Vec<String> {
        if entry.classification == Classification::Enum {
            return entry.symbol.enum_members.clone();
        }
        entry
            .symbol
            .members
            .iter()
            .filter_map(|m| self.render(m))
            .collect()
    }

    fn render_field(&self, field: &FieldSymbol) -> String {
        format!(
            "{}{} {}",
            field.visibility.glyph(),
            field.type_ref,
            field.name
        )
    }

    fn render_method(&self, method: &MethodSymbol) -> String {
        let return_type = method
            .return_type
            .as_ref()
            .map(|t| t.as_str())
            .unwrap_or(VOID);
        let parameters = method
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.type_ref, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}{} {}({})",
            method.visibility.glyph(),
            return_type,
            method.name,
            parameters
        )
    }

    fn render_property(&self, property: &PropertySymbol) -> String {
        let mut line = format!(
            "{}{} {}",
            property.visibility.glyph(),
            property.type_ref,
            property.name
        );
        if self.accessor_visible(property.setter) {
            line.push_str(WRITE_MARKER);
        }
        if self.accessor_visible(property.getter) {
            line.push_str(READ_MARKER);
        }
        line
    }

    fn accessor_visible(&self, accessor: Option<Accessor>) -> bool {
        accessor.is_some_and(|a| self.filter.allows(a.visibility))
    }
}
