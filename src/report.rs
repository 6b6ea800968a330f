// src/report.rs
use crate::diagnostics::Diagnostics;
use crate::mock::{MockCollection, MockKind};
use colored::Colorize;

/// Prints the per-kind mocked/skipped summary after a whole-application
/// run. Counts come straight off the collection's `skipped` flags.
pub fn print_summary(collection: &MockCollection, diags: &mut Diagnostics) {
    diags.plain("");
    diags.plain(&format!("{}", "****** Execution Summary ******".bold()));
    diags.plain("");

    for kind in MockKind::ALL {
        let (_, skipped) = collection.counts(kind);
        if skipped > 0 {
            diags.plain(&format!(
                "{} {skipped} {}(s) skipped due to already existing mocks.",
                "WARN".yellow().bold(),
                kind_label(kind)
            ));
        }
    }
    for kind in MockKind::ALL {
        let (mocked, _) = collection.counts(kind);
        if mocked > 0 {
            diags.plain(&format!(
                "{} {mocked} {}(s) mocked.",
                "OK".green().bold(),
                kind_label(kind)
            ));
        }
    }
    diags.plain("");
}

fn kind_label(kind: MockKind) -> &'static str {
    match kind {
        MockKind::Component => "component",
        MockKind::Directive => "directive",
        MockKind::Pipe => "pipe",
        MockKind::Service => "service",
    }
}
