// src/mock/merge.rs
//! Anchor-based text splicing.
//!
//! All incremental edits to generated files go through these primitives:
//! find the first match of a marker pattern, splice the delta there, leave
//! every other byte untouched. Callers treat a missing anchor as
//! "skip with warning" — it means the file no longer has the generated
//! shape this tool expects.

use crate::error::{MockError, Result};
use regex::Regex;
use std::path::Path;

/// Splices `delta` immediately before the first match of `anchor`.
pub fn splice_before(text: &str, anchor: &Regex, delta: &str, path: &Path) -> Result<String> {
    let m = anchor.find(text).ok_or_else(|| MockError::AnchorNotFound {
        path: path.to_path_buf(),
    })?;
    let mut out = String::with_capacity(text.len() + delta.len());
    out.push_str(&text[..m.start()]);
    out.push_str(delta);
    out.push_str(&text[m.start()..]);
    Ok(out)
}

/// Splices `delta` immediately after the first match of `anchor`.
pub fn splice_after(text: &str, anchor: &Regex, delta: &str, path: &Path) -> Result<String> {
    let m = anchor.find(text).ok_or_else(|| MockError::AnchorNotFound {
        path: path.to_path_buf(),
    })?;
    let mut out = String::with_capacity(text.len() + delta.len());
    out.push_str(&text[..m.end()]);
    out.push_str(delta);
    out.push_str(&text[m.end()..]);
    Ok(out)
}

/// Appends `block` to `existing` with a single blank line between them.
#[must_use]
pub fn append_block(existing: &str, block: &str) -> String {
    let mut out = existing.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(block);
    out
}

/// Joins freshly rendered blocks with one blank line between each.
/// Blocks are expected to end with a newline already.
#[must_use]
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join("\n")
}
