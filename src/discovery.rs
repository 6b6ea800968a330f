// src/discovery.rs
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::paths::{self, KIND_SUFFIXES};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walks `<app-dir>/<src-dir>` and returns every mockable source file,
/// sorted for a deterministic processing order.
///
/// Pruned: `node_modules`, hidden directories, and configured excludes.
/// Kept: files ending in a supported kind suffix that are not themselves
/// generated mocks.
#[must_use]
pub fn discover(config: &Config, diags: &mut Diagnostics) -> Vec<PathBuf> {
    let Some(root) = config.source_root() else {
        return Vec::new();
    };

    let walker = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir() && config.is_excluded_dir(&e.file_name().to_string_lossy()))
        });

    let mut files = Vec::new();
    let mut errors = 0usize;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_mockable(&entry.path().to_string_lossy()) {
                    files.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    if errors > 0 {
        diags.debug(format!("Encountered {errors} errors during file walk"));
    }

    files.sort();
    files
}

fn is_mockable(path: &str) -> bool {
    !path.ends_with(".mock.ts") && KIND_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// Filters an explicit file list down to mockable sources; everything else
/// is reported and dropped.
#[must_use]
pub fn filter_explicit(files: &[PathBuf], diags: &mut Diagnostics) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|f| {
            let keep = is_mockable(&f.to_string_lossy());
            if !keep {
                diags.warn(format!(
                    "{} matches no supported suffix; skipped.",
                    paths::shorten(f)
                ));
            }
            keep
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mockable_requires_kind_suffix() {
        assert!(is_mockable("a/foo.service.ts"));
        assert!(is_mockable("a/foo.component.ts"));
        assert!(!is_mockable("a/foo.ts"));
        assert!(!is_mockable("a/foo.service.mock.ts"));
    }
}
