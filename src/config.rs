// src/config.rs
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "mocksmith.toml";

/// Runtime configuration, merged from `mocksmith.toml` (if present) and CLI
/// flags. CLI wins.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Explicit source files (single-file mode).
    pub files: Vec<PathBuf>,
    /// Application root; set => whole-application mode.
    pub app_dir: Option<PathBuf>,
    /// Source folder under the application root.
    pub src_dir: Option<String>,
    /// Regenerate mocks that already exist.
    pub force: bool,
    /// Do not create or update barrel files.
    pub skip_barrels: bool,
    /// Rebuild barrel files from scratch instead of merging.
    pub refresh_barrels: bool,
    pub verbose: bool,
    /// Extra directory names pruned during discovery.
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MocksmithToml {
    #[serde(default)]
    defaults: TomlDefaults,
    #[serde(default)]
    discovery: TomlDiscovery,
}

#[derive(Debug, Default, Deserialize)]
struct TomlDefaults {
    src_dir: Option<String>,
    force: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlDiscovery {
    exclude: Option<Vec<String>>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `mocksmith.toml` from the current directory, if present.
    /// Unreadable or malformed files fall back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        if let Ok(content) = fs::read_to_string(CONFIG_FILE) {
            config.apply_toml(&content);
        }
        config
    }

    pub fn apply_toml(&mut self, content: &str) {
        let Ok(parsed) = toml::from_str::<MocksmithToml>(content) else {
            return;
        };
        if let Some(src_dir) = parsed.defaults.src_dir {
            self.src_dir = Some(src_dir);
        }
        if let Some(force) = parsed.defaults.force {
            self.force = force;
        }
        if let Some(exclude) = parsed.discovery.exclude {
            self.exclude = exclude;
        }
    }

    /// Whole-application mode: directory discovery, deferred inheritance
    /// resolution and barrel maintenance are all gated on this.
    #[must_use]
    pub fn whole_app(&self) -> bool {
        self.app_dir.is_some()
    }

    /// `<app-dir>/<src-dir>`; only meaningful in whole-application mode.
    #[must_use]
    pub fn source_root(&self) -> Option<PathBuf> {
        self.app_dir
            .as_ref()
            .map(|app| app.join(self.src_dir.as_deref().unwrap_or("src")))
    }

    /// Directory for generated barrel files.
    #[must_use]
    pub fn barrel_dir(&self) -> Option<PathBuf> {
        self.source_root().map(|root| root.join("mocks"))
    }

    #[must_use]
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        name == "node_modules"
            || (name.starts_with('.') && name != "." && name != "..")
            || self.exclude.iter().any(|e| e == name)
    }
}
