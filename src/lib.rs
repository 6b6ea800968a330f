// src/lib.rs
pub mod barrel;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod generate;
pub mod mock;
pub mod parse;
pub mod paths;
pub mod report;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::generate::Generator;
use crate::mock::MockCollection;

/// One full generation pass: gather inputs, run both generator phases,
/// maintain barrels, print the summary. Returns the final collection so
/// callers (and tests) can inspect what happened.
pub fn run(config: &Config, diags: &mut Diagnostics) -> Result<MockCollection> {
    let files = if config.whole_app() {
        discovery::discover(config, diags)
    } else {
        discovery::filter_explicit(&config.files, diags)
    };

    if files.is_empty() {
        diags.error(
            "Cannot find files to mock. Specify file paths, or set --app-dir \
             (and --src-dir for a custom src folder) to mock the whole app.",
        );
        return Ok(MockCollection::default());
    }

    let collection = Generator::new(config).run(&files, diags);

    barrel::write_barrels(&collection, config, diags)?;

    if config.whole_app() {
        report::print_summary(&collection, diags);
    }

    Ok(collection)
}
