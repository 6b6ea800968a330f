// src/mock/template.rs
//! Content templates for the four mock kinds, plus the decorator metadata
//! extractors. Pure text in, text out.

use crate::mock::{MockDescriptor, MockKind};
use regex::Regex;
use std::sync::LazyLock;

static SELECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"selector:\s*['"]([^'"]*)['"]"#).expect("valid regex"));
static PIPE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name:\s*['"]([^'"]*)['"]"#).expect("valid regex"));

/// First `selector: '...'` value in the class's decorator text.
#[must_use]
pub fn extract_selector(raw: &str) -> Option<String> {
    SELECTOR_RE
        .captures(raw)
        .map(|c| c[1].to_string())
        .filter(|s| !s.is_empty())
}

/// First `name: '...'` value in the class's decorator text.
#[must_use]
pub fn extract_pipe_name(raw: &str) -> Option<String> {
    PIPE_NAME_RE
        .captures(raw)
        .map(|c| c[1].to_string())
        .filter(|s| !s.is_empty())
}

/// Renders fresh mock content for a descriptor.
#[must_use]
pub fn render(descriptor: &MockDescriptor) -> String {
    match descriptor.kind {
        MockKind::Component => {
            for_component(&descriptor.mock_class_name, descriptor.selector.as_deref())
        }
        MockKind::Directive => {
            for_directive(&descriptor.mock_class_name, descriptor.selector.as_deref())
        }
        MockKind::Pipe => for_pipe(&descriptor.mock_class_name, descriptor.pipe_token.as_deref()),
        MockKind::Service => for_service(&descriptor.mock_class_name, &descriptor.methods),
    }
}

#[must_use]
pub fn for_component(mock_class_name: &str, selector: Option<&str>) -> String {
    let selector_line = selector.map_or(String::new(), |s| format!("  selector: '{s}',\n"));
    format!(
        "import {{ Component }} from '@angular/core';\n\n@Component({{\n{selector_line}  template: '<div>{mock_class_name}</div>'\n}})\nexport class {mock_class_name} {{}}\n"
    )
}

#[must_use]
pub fn for_directive(mock_class_name: &str, selector: Option<&str>) -> String {
    let selector_line = selector.map_or(String::new(), |s| format!("  selector: '{s}',\n"));
    format!(
        "import {{ Directive }} from '@angular/core';\n\n@Directive({{\n{selector_line}}})\nexport class {mock_class_name} {{}}\n"
    )
}

#[must_use]
pub fn for_pipe(mock_class_name: &str, pipe_name: Option<&str>) -> String {
    let name_line = pipe_name.map_or(String::new(), |n| format!("  name: '{n}',\n"));
    format!(
        "import {{ Pipe, PipeTransform }} from '@angular/core';\n\n@Pipe({{\n{name_line}}})\nexport class {mock_class_name} implements PipeTransform {{\n\n  transform(val: any) {{\n    return val;\n  }}\n}}\n"
    )
}

/// A spy object enumerating the methods; a plain empty binding when there
/// are none.
#[must_use]
pub fn for_service(mock_class_name: &str, methods: &[String]) -> String {
    if methods.is_empty() {
        return format!("export const {mock_class_name} = {{}};\n");
    }
    let list = methods
        .iter()
        .map(|m| format!("  '{m}'"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "export const {mock_class_name} = jasmine.createSpyObj('{mock_class_name}', [\n{list}\n]);\n"
    )
}
