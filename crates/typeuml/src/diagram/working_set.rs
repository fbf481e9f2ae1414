//! Working set selection
//!
//! The working set is the ordered, de-duplicated list of types that survive
//! classification and the visibility predicate for one rendering pass. It is
//! also the membership test for relationship targets.

use std::collections::HashSet;
use tracing::{debug, span, trace, Level};

use super::classifier::{classify, Classification};
use crate::core::{SymbolProvider, VisibilityFilter};
use crate::symbols::TypeSymbol;

/// A type selected for rendering
#[derive(Debug, Clone, Copy)]
pub struct WorkingEntry<'a> {
    pub symbol: &'a TypeSymbol,
    pub classification: Classification,
}

impl<'a> WorkingEntry<'a> {
    /// Block keyword, e.g. `abstract class`
    pub fn keyword(&self) -> &'static str {
        // Skipped types never enter the working set
        self.classification
            .keyword(self.symbol.is_abstract)
            .unwrap_or_default()
    }

    pub fn name(&self) -> &'a str {
        self.symbol.name.as_str()
    }
}

/// Types rendered in one pass, in order of first appearance
#[derive(Debug, Clone)]
pub struct WorkingSet<'a> {
    entries: Vec<WorkingEntry<'a>>,
    names: HashSet<&'a str>,
    filter: VisibilityFilter,
}

impl<'a> WorkingSet<'a> {
    /// Select the working set from everything `provider` declares
    pub fn select<P: SymbolProvider + ?Sized>(provider: &'a P, filter: VisibilityFilter) -> Self {
        let select_span = span!(
            Level::DEBUG,
            "select_working_set",
            %filter,
            type_count = provider.type_count()
        );
        let _enter = select_span.enter();

        let mut entries = Vec::new();
        let mut names = HashSet::new();
        let mut seen = HashSet::new();
        let mut skipped = 0usize;

        for symbol in provider.types() {
            // The first declaration of an identity decides for every pass
            if !seen.insert(symbol.name.as_str()) {
                trace!(name = %symbol.name, "Duplicate identity");
                continue;
            }
            let classification = classify(symbol);
            if classification.is_skip() {
                trace!(name = %symbol.name, kind = %symbol.kind, "Skipping unsupported kind");
                skipped += 1;
                continue;
            }
            if !filter.allows(symbol.visibility) {
                trace!(name = %symbol.name, visibility = %symbol.visibility, "Filtered out");
                skipped += 1;
                continue;
            }
            names.insert(symbol.name.as_str());
            entries.push(WorkingEntry {
                symbol,
                classification,
            });
        }

        debug!(selected = entries.len(), skipped, "Working set selected");

        Self {
            entries,
            names,
            filter,
        }
    }

    /// Check whether a type with this name is rendered in this pass
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkingEntry<'a>> {
        self.entries.iter()
    }

    pub fn filter(&self) -> VisibilityFilter {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
