// src/barrel.rs
//! Barrel maintenance.
//!
//! One barrel per non-empty kind under `<src-root>/mocks/`, a provider list
//! for services, and a top-level index. A missing file is built fresh; an
//! existing one receives only the entries it does not already contain,
//! spliced at the head of each region so prior entries (and any manual
//! edits around them) survive byte-for-byte.

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::{MockError, Result};
use crate::mock::{merge, ExportForm, MockCollection, MockDescriptor, MockKind};
use crate::paths;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const PROVIDERS_FILE: &str = "service-providers.mock.ts";
const PROVIDERS_CONST: &str = "MockServiceProviders";

static FIRST_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^import ").expect("valid regex"));
static FIRST_REEXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^export \* from ").expect("valid regex"));
static FIRST_EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^export ").expect("valid regex"));

/// Creates or updates every barrel the run's collection calls for.
/// Whole-application mode only; `--skip-barrels` suppresses it entirely.
pub fn write_barrels(
    collection: &MockCollection,
    config: &Config,
    diags: &mut Diagnostics,
) -> Result<()> {
    if !config.whole_app() || config.skip_barrels || collection.is_empty() {
        return Ok(());
    }
    let Some(base) = config.barrel_dir() else {
        return Ok(());
    };
    fs::create_dir_all(&base).map_err(|e| MockError::io(e, &base))?;

    let mut index_lines: Vec<String> = Vec::new();
    for kind in MockKind::ALL {
        let candidates = dedup_by_class_name(collection.of_kind(kind), diags);
        if candidates.is_empty() {
            continue;
        }
        sync_kind_barrel(&base, kind, &candidates, config, diags);
        index_lines.push(format!("export * from './{}.mock';\n", kind.plural()));
        if kind == MockKind::Service {
            sync_providers(&base, &candidates, config, diags);
            index_lines.push("export * from './service-providers.mock';\n".to_string());
        }
    }
    sync_index(&base, &index_lines, config, diags);
    Ok(())
}

/// A mock class name is listed at most once per barrel; the first
/// occurrence wins. A collapse across distinct files is worth a warning.
fn dedup_by_class_name<'a>(
    mocks: &'a [MockDescriptor],
    diags: &mut Diagnostics,
) -> Vec<&'a MockDescriptor> {
    let mut kept: Vec<&MockDescriptor> = Vec::new();
    for mock in mocks {
        if let Some(first) = kept
            .iter()
            .find(|k| k.mock_class_name == mock.mock_class_name)
        {
            if first.target_path != mock.target_path {
                diags.warn(format!(
                    "Duplicate mock class name {}; keeping the one from {}.",
                    mock.mock_class_name,
                    paths::shorten(&first.target_path)
                ));
            }
            continue;
        }
        kept.push(mock);
    }
    kept
}

fn sync_kind_barrel(
    base: &Path,
    kind: MockKind,
    candidates: &[&MockDescriptor],
    config: &Config,
    diags: &mut Diagnostics,
) {
    let file = base.join(format!("{}.mock.ts", kind.plural()));
    let existing = read_unless_refreshing(&file, config, diags);

    match existing {
        None => {
            let content = fresh_barrel(kind, candidates, base);
            write_barrel_file(&file, &content, "created", diags);
        }
        Some(content) => {
            let missing: Vec<&&MockDescriptor> = candidates
                .iter()
                .filter(|m| !content.contains(&m.mock_class_name))
                .collect();
            if missing.is_empty() {
                diags.debug(format!("{} is up to date.", paths::shorten(&file)));
                return;
            }

            let mut imports = String::new();
            let mut entries = String::new();
            let mut exports = String::new();
            for m in &missing {
                let p = paths::relative_import(&m.target_path, base);
                imports.push_str(&format!("import {{ {} }} from '{p}';\n", m.mock_class_name));
                entries.push_str(&format!("\n  {},", m.mock_class_name));
                exports.push_str(&format!("export * from '{p}';\n"));
            }

            let array_open = array_anchor(kind.barrel_const());
            let merged = merge::splice_before(&content, &FIRST_IMPORT_RE, &imports, &file)
                .and_then(|c| merge::splice_after(&c, &array_open, &entries, &file))
                .and_then(|c| merge::splice_before(&c, &FIRST_REEXPORT_RE, &exports, &file));
            match merged {
                Ok(content) => write_barrel_file(&file, &content, "updated", diags),
                Err(e) => diags.warn(format!("{e}; barrel left unchanged")),
            }
        }
    }
}

fn fresh_barrel(kind: MockKind, candidates: &[&MockDescriptor], base: &Path) -> String {
    let mut imports = String::new();
    let mut exports = String::new();
    let mut names: Vec<String> = Vec::new();
    for m in candidates {
        let p = paths::relative_import(&m.target_path, base);
        imports.push_str(&format!("import {{ {} }} from '{p}';\n", m.mock_class_name));
        exports.push_str(&format!("export * from '{p}';\n"));
        names.push(format!("  {}", m.mock_class_name));
    }
    format!(
        "{imports}\nexport const {} = [\n{}\n];\n\n{exports}",
        kind.barrel_const(),
        names.join(",\n")
    )
}

fn sync_providers(
    base: &Path,
    candidates: &[&MockDescriptor],
    config: &Config,
    diags: &mut Diagnostics,
) {
    let file = base.join(PROVIDERS_FILE);
    let existing = read_unless_refreshing(&file, config, diags);

    match existing {
        None => {
            let content = fresh_providers(candidates, base);
            write_barrel_file(&file, &content, "created", diags);
        }
        Some(content) => {
            let missing: Vec<&&MockDescriptor> = candidates
                .iter()
                .filter(|m| !content.contains(&m.mock_class_name))
                .collect();
            if missing.is_empty() {
                diags.debug(format!("{} is up to date.", paths::shorten(&file)));
                return;
            }

            let mut imports = String::new();
            let mut entries = String::new();
            for m in &missing {
                let (class_import, mock_import, entry) = provider_lines(m, base);
                imports.push_str(&class_import);
                imports.push_str(&mock_import);
                entries.push_str(&format!("\n  {entry},"));
            }

            let array_open = array_anchor(PROVIDERS_CONST);
            let merged = merge::splice_before(&content, &FIRST_IMPORT_RE, &imports, &file)
                .and_then(|c| merge::splice_after(&c, &array_open, &entries, &file));
            match merged {
                Ok(content) => write_barrel_file(&file, &content, "updated", diags),
                Err(e) => diags.warn(format!("{e}; provider list left unchanged")),
            }
        }
    }
}

fn fresh_providers(candidates: &[&MockDescriptor], base: &Path) -> String {
    let mut class_imports = String::new();
    let mut mock_imports = String::new();
    let mut entries: Vec<String> = Vec::new();
    for m in candidates {
        let (class_import, mock_import, entry) = provider_lines(m, base);
        class_imports.push_str(&class_import);
        mock_imports.push_str(&mock_import);
        entries.push(format!("  {entry}"));
    }
    format!(
        "{class_imports}{mock_imports}\nexport const {PROVIDERS_CONST} = [\n{}\n];\n",
        entries.join(",\n")
    )
}

/// (class import line, mock import line, provider entry) for one service.
fn provider_lines(m: &MockDescriptor, base: &Path) -> (String, String, String) {
    let mock_path = paths::relative_import(&m.target_path, base);
    let class_path = mock_path
        .strip_suffix(".mock")
        .map_or(mock_path.clone(), String::from);
    let provide_as = match m.export_form {
        ExportForm::ClassAlias => "useClass",
        ExportForm::Value => "useValue",
    };
    (
        format!("import {{ {} }} from '{class_path}';\n", m.class_name),
        format!("import {{ {} }} from '{mock_path}';\n", m.mock_class_name),
        format!(
            "{{ provide: {}, {provide_as}: {} }}",
            m.class_name, m.mock_class_name
        ),
    )
}

fn sync_index(base: &Path, lines: &[String], config: &Config, diags: &mut Diagnostics) {
    if lines.is_empty() {
        return;
    }
    let file = base.join("index.ts");
    let existing = read_unless_refreshing(&file, config, diags);

    match existing {
        None => write_barrel_file(&file, &lines.concat(), "created", diags),
        Some(content) => {
            let missing: String = lines
                .iter()
                .filter(|l| !content.contains(l.trim_end()))
                .cloned()
                .collect();
            if missing.is_empty() {
                diags.debug(format!("{} is up to date.", paths::shorten(&file)));
                return;
            }
            match merge::splice_before(&content, &FIRST_EXPORT_RE, &missing, &file) {
                Ok(content) => write_barrel_file(&file, &content, "updated", diags),
                Err(e) => diags.warn(format!("{e}; index left unchanged")),
            }
        }
    }
}

/// The existing file content, or None when a fresh build is called for
/// (missing file or --refresh-barrels).
fn read_unless_refreshing(file: &Path, config: &Config, diags: &mut Diagnostics) -> Option<String> {
    if config.refresh_barrels || !file.exists() {
        return None;
    }
    match fs::read_to_string(file) {
        Ok(content) => Some(content),
        Err(e) => {
            diags.error(MockError::io(e, file).to_string());
            // Unreadable is not license to clobber; report and rebuild nothing.
            Some(String::new())
        }
    }
}

fn write_barrel_file(file: &PathBuf, content: &str, verb: &str, diags: &mut Diagnostics) {
    match fs::write(file, content) {
        Ok(()) => diags.notice(format!("{} is successfully {verb}.", paths::shorten(file))),
        Err(e) => diags.error(MockError::io(e, file).to_string()),
    }
}

fn array_anchor(const_name: &str) -> Regex {
    Regex::new(&format!(r"export const {const_name} = \[")).expect("anchor pattern is well-formed")
}
