// src/paths.rs
use std::path::{Path, PathBuf};

pub const KIND_SUFFIXES: [&str; 4] = [
    ".component.ts",
    ".directive.ts",
    ".pipe.ts",
    ".service.ts",
];

/// Derives the mock target path: `a/foo.service.ts` -> `a/foo.service.mock.ts`.
/// Returns None when the path does not end in `.ts`.
#[must_use]
pub fn mock_target(source: &Path) -> Option<PathBuf> {
    let s = source.to_string_lossy();
    let stem = s.strip_suffix(".ts")?;
    Some(PathBuf::from(format!("{stem}.mock.ts")))
}

/// True for files this tool generated (never valid mock sources).
#[must_use]
pub fn is_generated(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".mock.ts")
}

/// Shortens long paths for console output.
#[must_use]
pub fn shorten(path: &Path) -> String {
    let s = path.to_string_lossy().replace('\\', "/");
    if s.len() > 75 {
        format!("{}../..{}", &s[..30], &s[s.len() - 40..])
    } else {
        s
    }
}

/// Renders a path the way TypeScript import statements expect it:
/// forward slashes, no `.ts` extension.
#[must_use]
pub fn import_path(path: &Path) -> String {
    let s = path.to_string_lossy().replace('\\', "/");
    s.strip_suffix(".ts").map_or(s.clone(), String::from)
}

/// Relative import path from `from_dir` to `target`, TypeScript style.
#[must_use]
pub fn relative_import(target: &Path, from_dir: &Path) -> String {
    let rel = pathdiff::diff_paths(target, from_dir).unwrap_or_else(|| target.to_path_buf());
    import_path(&rel)
}
