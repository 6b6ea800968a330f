// src/diagnostics.rs
//! Diagnostics sink shared by every pipeline stage.
//!
//! Severity is data, not a global log level: components receive a
//! `&mut Diagnostics` and report through it, and the sink decides what
//! reaches the console. Every entry is retained so the summary (and tests)
//! can inspect what a run reported.

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Shown only under --verbose (steady-state skips, per-file chatter).
    Debug,
    /// Normal progress output (files created/updated).
    Notice,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

pub struct Diagnostics {
    verbose: bool,
    quiet: bool,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            quiet: false,
            entries: Vec::new(),
        }
    }

    /// Sink that records but never prints. Used by the test suites.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            verbose: true,
            quiet: true,
            entries: Vec::new(),
        }
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.emit(Severity::Debug, message.into());
    }

    pub fn notice(&mut self, message: impl Into<String>) {
        self.emit(Severity::Notice, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.emit(Severity::Warning, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.emit(Severity::Error, message.into());
    }

    fn emit(&mut self, severity: Severity, message: String) {
        if !self.quiet && (severity != Severity::Debug || self.verbose) {
            match severity {
                Severity::Debug => println!("{}", message.dimmed()),
                Severity::Notice => println!("{} {message}", "OK".green().bold()),
                Severity::Warning => println!("{} {message}", "WARN".yellow().bold()),
                Severity::Error => eprintln!("{} {message}", "ERROR".red().bold()),
            }
        }
        self.entries.push(Diagnostic { severity, message });
    }

    /// Prints without recording; for summary blocks that format their own lines.
    pub fn plain(&self, line: &str) {
        if !self.quiet {
            println!("{line}");
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// True if any retained entry contains `needle`. Test helper.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.entries.iter().any(|d| d.message.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_all_severities() {
        let mut d = Diagnostics::silent();
        d.debug("a");
        d.warn("b");
        assert_eq!(d.count(Severity::Debug), 1);
        assert_eq!(d.count(Severity::Warning), 1);
        assert!(d.mentions("b"));
    }
}
