//! Generated source embedding
//!
//! Emits a Rust module exposing both diagram variants as string constants,
//! so a build script can write it to `OUT_DIR` and the program can
//! `include!` its own class diagram.

use crate::core::VisibilityFilter;
use crate::diagram::Diagrams;

/// Name of the constant holding a variant
pub fn const_name(filter: VisibilityFilter) -> &'static str {
    match filter {
        VisibilityFilter::PublicOrInternal => "PUBLIC_OR_INTERNAL_DIAGRAM",
        VisibilityFilter::PublicOnly => "PUBLIC_ONLY_DIAGRAM",
    }
}

/// Wrap `content` in a raw string literal whose fence cannot occur inside it
pub fn raw_string_literal(content: &str) -> String {
    let mut longest = 0usize;
    let mut run: Option<usize> = None;
    for c in content.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = run {
            longest = longest.max(n);
        }
    }

    let fence = "#".repeat(longest + 1);
    format!("r{fence}\"{content}\"{fence}")
}

/// Generate a Rust module with one `&str` constant per diagram variant
pub fn generate_module(diagrams: &Diagrams) -> String {
    let mut out = String::from("// @generated by typeuml. Do not edit.\n");
    for (filter, diagram) in diagrams.iter() {
        out.push('\n');
        out.push_str(&format!(
            "/// PlantUML class diagram ({} declarations)\n",
            filter
        ));
        out.push_str(&format!(
            "pub const {}: &str = {};\n",
            const_name(filter),
            raw_string_literal(diagram)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_literal_plain() {
        assert_eq!(raw_string_literal("@startuml"), "r#\"@startuml\"#");
    }

    #[test]
    fn test_raw_literal_grows_fence() {
        assert_eq!(raw_string_literal("say \"#hi\""), "r##\"say \"#hi\"\"##");
        assert_eq!(raw_string_literal("a\"###b"), "r####\"a\"###b\"####");
        // Hashes not preceded by a quote do not matter
        assert_eq!(raw_string_literal("### x"), "r#\"### x\"#");
    }

    #[test]
    fn test_generate_module() {
        let diagrams = Diagrams {
            public_or_internal: "@startuml\nA\n@enduml\n".to_string(),
            public_only: "@startuml\n@enduml\n".to_string(),
        };
        let module = generate_module(&diagrams);

        assert!(module.starts_with("// @generated"));
        assert!(module.contains(
            "pub const PUBLIC_OR_INTERNAL_DIAGRAM: &str = r#\"@startuml\nA\n@enduml\n\"#;"
        ));
        assert!(
            module.contains("pub const PUBLIC_ONLY_DIAGRAM: &str = r#\"@startuml\n@enduml\n\"#;")
        );
        assert!(
            module.find("PUBLIC_OR_INTERNAL_DIAGRAM").unwrap()
                < module.find("PUBLIC_ONLY_DIAGRAM").unwrap()
        );
    }
}
