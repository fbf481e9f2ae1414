//! Diagram assembly
//!
//! Folds the working set into one PlantUML document: a fixed header, one
//! block per type immediately followed by that type's edges, and a footer.

use tracing::{debug, info, span, Level};

use super::member::MemberRenderer;
use super::relationship::RelationshipResolver;
use super::working_set::WorkingSet;
use crate::core::{RenderConfig, SymbolProvider, VisibilityFilter};

/// First line of every diagram
pub const START_MARKER: &str = "@startuml";

/// Last line of every diagram
pub const END_MARKER: &str = "@enduml";

/// Both diagram variants produced for one symbol graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagrams {
    pub public_or_internal: String,
    pub public_only: String,
}

impl Diagrams {
    pub fn get(&self, filter: VisibilityFilter) -> &str {
        match filter {
            VisibilityFilter::PublicOrInternal => &self.public_or_internal,
            VisibilityFilter::PublicOnly => &self.public_only,
        }
    }

    /// Variants paired with their filter, in fixed order
    pub fn iter(&self) -> impl Iterator<Item = (VisibilityFilter, &str)> {
        VisibilityFilter::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Assembles PlantUML class diagrams from a symbol provider
#[derive(Debug, Clone, Default)]
pub struct DiagramAssembler {
    config: RenderConfig,
}

impl DiagramAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one diagram under `filter`
    ///
    /// Pure and deterministic: the same provider contents always yield the
    /// same bytes.
    pub fn render<P: SymbolProvider + ?Sized>(
        &self,
        provider: &P,
        filter: VisibilityFilter,
    ) -> String {
        let render_span = span!(
            Level::INFO,
            "render_diagram",
            %filter,
            type_count = provider.type_count()
        );
        let _enter = render_span.enter();

        let working_set = WorkingSet::select(provider, filter);
        let output = self.assemble(&working_set, provider);

        info!(
            blocks = working_set.len(),
            bytes = output.len(),
            "Diagram rendered"
        );
        output
    }

    /// Render both fixed variants
    pub fn render_all<P: SymbolProvider + ?Sized>(&self, provider: &P) -> Diagrams {
        Diagrams {
            public_or_internal: self.render(provider, VisibilityFilter::PublicOrInternal),
            public_only: self.render(provider, VisibilityFilter::PublicOnly),
        }
    }

    /// Assemble an already selected working set
    ///
    /// `provider` must be the provider `working_set` was selected from.
    pub fn assemble<'a, P: SymbolProvider + ?Sized>(
        &self,
        working_set: &WorkingSet<'a>,
        provider: &'a P,
    ) -> String {
        let members = MemberRenderer::new(working_set.filter());
        let resolver = RelationshipResolver::new(working_set, provider);

        let mut lines = vec![
            START_MARKER.to_string(),
            format!("!theme {}", self.config.theme),
            String::new(),
        ];

        let mut edge_count = 0usize;
        for entry in working_set.iter() {
            let keyword = entry.keyword();
            lines.push(format!("{} {} {{", keyword, entry.name()));
            lines.extend(members.render_block(entry));
            lines.push("}".to_string());

            let edges = resolver.resolve(entry);
            edge_count += edges.len();
            lines.extend(edges.iter().map(|edge| edge.render(keyword)));
        }

        lines.push(END_MARKER.to_string());
        debug!(line_count = lines.len(), edge_count, "Diagram assembled");

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}
