//! Integration tests for the public API

use typeuml::prelude::*;
use typeuml::{render, render_all};

fn lines(output: &str) -> Vec<&str> {
    output.lines().collect()
}

#[test]
fn test_header_and_footer() {
    let graph = SymbolGraph::new();
    let output = render(&graph, VisibilityFilter::PublicOrInternal);
    let lines = lines(&output);
    assert_eq!(lines[0], "@startuml");
    assert_eq!(lines[1], "!theme cyborg-outline");
    assert_eq!(lines[2], "");
    assert_eq!(lines.last(), Some(&"@enduml"));
    assert!(output.ends_with("@enduml\n"));
}

#[test]
fn test_round_trip_scenario() {
    let graph: SymbolGraph = vec![
        TypeSymbol::interface("IA"),
        TypeSymbol::interface("IB").with_interface("IA"),
        TypeSymbol::class("A").with_interface("IA"),
        TypeSymbol::class("B")
            .with_base("A")
            .with_interface("IB")
            .with_interface("IA"),
    ]
    .into_iter()
    .collect();

    let output = render(&graph, VisibilityFilter::PublicOrInternal);
    let lines = lines(&output);

    for header in ["class A {", "class B {", "interface IA {", "interface IB {"] {
        assert!(lines.contains(&header), "missing block {}", header);
    }
    assert!(lines.contains(&"class B extends A"));
    assert!(lines.contains(&"class B implements IB"));
    assert!(!lines.contains(&"class B implements IA"));
    assert!(lines.contains(&"class A implements IA"));
    assert!(lines.contains(&"interface IB implements IA"));
}

#[test]
fn test_duplicate_declaration_uses_first() {
    let graph: SymbolGraph = vec![
        TypeSymbol::class("A").with_visibility(Visibility::Internal),
        TypeSymbol::class("A").with_member(FieldSymbol::new("f", "int")),
    ]
    .into_iter()
    .collect();
    assert_eq!(graph.len(), 2);

    let diagrams = render_all(&graph);
    assert!(diagrams.public_or_internal.contains("class A {\n}\n"));
    assert!(!diagrams.public_or_internal.contains("+int f"));
    assert!(!diagrams.public_only.contains("class A"));
    assert!(!diagrams.public_only.contains("+int f"));
}

#[test]
fn test_redundant_interface_suppression() {
    let graph: SymbolGraph = vec![
        TypeSymbol::interface("I"),
        TypeSymbol::interface("J").with_interface("I"),
        TypeSymbol::class("C").with_interface("I").with_interface("J"),
    ]
    .into_iter()
    .collect();

    let output = render(&graph, VisibilityFilter::PublicOrInternal);
    assert!(output.contains("C implements J\n"));
    assert!(!output.contains("C implements I\n"));
}

#[test]
fn test_enum_rendering() {
    let graph: SymbolGraph = vec![TypeSymbol::enumeration("Color")
        .with_enum_member("Red")
        .with_enum_member("Green")
        .with_enum_member("Blue")
        .with_member(FieldSymbol::new("value__", "int"))
        .with_interface("System.IComparable")]
    .into_iter()
    .collect();

    let output = render(&graph, VisibilityFilter::PublicOrInternal);
    assert!(output.contains("enum Color {\nRed\nGreen\nBlue\n}\n@enduml"));
    assert!(!output.contains("implements"));
    assert!(!output.contains("value__"));
}

#[test]
fn test_property_accessor_markers() {
    let write = " <font color=darkred><==</font>";
    let read = " <font color=darkgreen>==></font>";

    let public_getter_private_setter: SymbolGraph = vec![TypeSymbol::class("Doc").with_member(
        PropertySymbol::new("Title", "string")
            .with_getter(Visibility::Public)
            .with_setter(Visibility::Private),
    )]
    .into_iter()
    .collect();
    let output = render(&public_getter_private_setter, VisibilityFilter::PublicOnly);
    assert!(output.contains(&format!("+string Title{}\n", read)));
    assert!(!output.contains(write));

    let internal_setter: SymbolGraph = vec![TypeSymbol::class("Doc").with_member(
        PropertySymbol::new("Title", "string")
            .with_getter(Visibility::Public)
            .with_setter(Visibility::Internal),
    )]
    .into_iter()
    .collect();
    let output = render(&internal_setter, VisibilityFilter::PublicOrInternal);
    assert!(output.contains(&format!("+string Title{}{}\n", write, read)));
}

#[test]
fn test_member_lines_keep_declaration_order() {
    let graph: SymbolGraph = vec![TypeSymbol::class("Order")
        .with_member(FieldSymbol::new("id", "System.Guid"))
        .with_member(MethodSymbol::new("Ship").with_parameter("Carrier", "via"))
        .with_member(PropertySymbol::new("Total", "decimal").with_getter(Visibility::Public))
        .with_member(FieldSymbol::new("note", "string").with_visibility(Visibility::Internal))]
    .into_iter()
    .collect();

    let output = render(&graph, VisibilityFilter::PublicOrInternal);
    let lines = lines(&output);
    assert_eq!(
        &lines[3..9],
        &[
            "class Order {",
            "+System.Guid id",
            "+void Ship(Carrier via)",
            "+decimal Total <font color=darkgreen>==></font>",
            "~string note",
            "}",
        ]
    );
}

#[test]
fn test_qualified_names_are_verbatim() {
    let name = "Outer.Container<T>.Nested<U, V>";
    let graph: SymbolGraph = vec![TypeSymbol::class(name).with_member(
        MethodSymbol::new("Map")
            .returning("System.Func<T, U>")
            .with_parameter("ref System.Span<byte>", "buffer"),
    )]
    .into_iter()
    .collect();

    let output = render(&graph, VisibilityFilter::PublicOnly);
    assert!(output.contains("class Outer.Container<T>.Nested<U, V> {"));
    assert!(output.contains("+System.Func<T, U> Map(ref System.Span<byte> buffer)"));
}

#[test]
fn test_abstract_class_header() {
    let graph: SymbolGraph = vec![
        TypeSymbol::class("Shape").with_abstract(),
        TypeSymbol::class("Circle").with_base("Shape"),
    ]
    .into_iter()
    .collect();

    let output = render(&graph, VisibilityFilter::PublicOnly);
    assert!(output.contains("abstract class Shape {"));
    assert!(output.contains("class Circle extends Shape"));
}

#[test]
fn test_skipped_kinds_are_invisible() {
    let graph: SymbolGraph = vec![
        TypeSymbol::new("Point", TypeKind::Struct).with_interface("IShape"),
        TypeSymbol::new("Handler", TypeKind::Delegate),
        TypeSymbol::interface("IShape"),
        TypeSymbol::class("Line").with_base("Point"),
    ]
    .into_iter()
    .collect();

    let output = render(&graph, VisibilityFilter::PublicOrInternal);
    assert!(!output.contains("Point {"));
    assert!(!output.contains("Handler"));
    assert!(!output.contains("extends"));
}

#[test]
fn test_render_all_from_json() {
    let json = r#"{
        "types": [
            { "name": "Lib.Api", "kind": "class", "members": [
                { "kind": "method", "name": "Call", "visibility": "public" },
                { "kind": "method", "name": "Helper", "visibility": "internal" },
                { "kind": "method", "name": "Guard", "visibility": "protected" }
            ] },
            { "name": "Lib.Impl", "kind": "class", "visibility": "internal", "base": "Lib.Api" }
        ]
    }"#;
    let graph = typeuml::load_graph(json).unwrap();
    let diagrams = render_all(&graph);

    assert!(diagrams.public_or_internal.contains("~void Helper()"));
    assert!(diagrams.public_or_internal.contains("class Lib.Impl extends Lib.Api"));
    assert!(!diagrams.public_or_internal.contains("Guard"));

    assert!(diagrams.public_only.contains("+void Call()"));
    assert!(!diagrams.public_only.contains("Helper"));
    assert!(!diagrams.public_only.contains("Lib.Impl"));
}

#[test]
fn test_custom_theme_through_assembler() {
    let graph = SymbolGraph::new();
    let output = DiagramAssembler::with_config(RenderConfig::new("mars"))
        .render(&graph, VisibilityFilter::PublicOnly);
    assert_eq!(output, "@startuml\n!theme mars\n\n@enduml\n");
}
