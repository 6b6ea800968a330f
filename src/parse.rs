// src/parse.rs
//! TypeScript class extraction.
//!
//! This is the boundary with the source language: everything downstream
//! consumes only `ClassDecl` records, never tree-sitter nodes.

use crate::error::{MockError, Result};
use tree_sitter::{Node, Parser};

/// One class declaration from a source file.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    /// Referenced base class, from an `extends` clause.
    pub base_class: Option<String>,
    /// Declared method names, in declaration order. Constructors and
    /// get/set accessors are not methods.
    pub methods: Vec<String>,
    /// Raw source text of the declaration, decorators included.
    pub raw: String,
}

/// Parses `source` and returns every named class declaration, in
/// declaration order.
pub fn parse_classes(source: &str) -> Result<Vec<ClassDecl>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
        .map_err(|e| MockError::Parse(format!("grammar load failed: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| MockError::Parse("tree-sitter returned no tree".into()))?;

    let root = tree.root_node();
    let mut classes = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        match child.kind() {
            "class_declaration" => {
                if let Some(decl) = extract_class(child, child, source) {
                    classes.push(decl);
                }
            }
            "export_statement" => {
                // Decorators on an exported class attach to the export
                // statement, so the raw text must come from it.
                if let Some(decl) = child.child_by_field_name("declaration") {
                    if decl.kind() == "class_declaration" {
                        if let Some(decl) = extract_class(decl, child, source) {
                            classes.push(decl);
                        }
                    }
                }
            }
            _ => {}
        }
    }
    Ok(classes)
}

fn extract_class(class: Node, raw_node: Node, source: &str) -> Option<ClassDecl> {
    let name = node_text(class.child_by_field_name("name")?, source)?;
    Some(ClassDecl {
        name,
        base_class: extract_base_class(class, source),
        methods: extract_methods(class, source),
        raw: node_text(raw_node, source).unwrap_or_default(),
    })
}

fn extract_base_class(class: Node, source: &str) -> Option<String> {
    let mut cursor = class.walk();
    let heritage = class
        .named_children(&mut cursor)
        .find(|n| n.kind() == "class_heritage")?;
    let mut cursor = heritage.walk();
    let extends = heritage
        .named_children(&mut cursor)
        .find(|n| n.kind() == "extends_clause")?;
    let value = extends
        .child_by_field_name("value")
        .or_else(|| extends.named_child(0))?;
    let text = node_text(value, source)?;
    // `Base<T>` references the class `Base`.
    Some(text.split('<').next().unwrap_or(&text).trim().to_string())
}

fn extract_methods(class: Node, source: &str) -> Vec<String> {
    let Some(body) = class.child_by_field_name("body") else {
        return Vec::new();
    };
    let mut methods = Vec::new();
    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        if member.kind() != "method_definition" || is_accessor(member) {
            continue;
        }
        let Some(name) = member.child_by_field_name("name").and_then(|n| node_text(n, source))
        else {
            continue;
        };
        if name != "constructor" {
            methods.push(name);
        }
    }
    methods
}

fn is_accessor(method: Node) -> bool {
    let mut cursor = method.walk();
    let result = method
        .children(&mut cursor)
        .any(|c| !c.is_named() && matches!(c.kind(), "get" | "set"));
    result
}

fn node_text(node: Node, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes()).ok().map(String::from)
}
