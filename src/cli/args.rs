// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mocksmith", version, about = "Angular test-double generator")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source files to mock (omit and use --app-dir to mock a whole app)
    pub files: Vec<PathBuf>,

    /// Mock every component, directive, pipe and service under the app
    #[arg(long, value_name = "DIR")]
    pub app_dir: Option<PathBuf>,

    /// Source folder under the app root (default: src)
    #[arg(long, value_name = "DIR")]
    pub src_dir: Option<String>,

    /// Regenerate mocks that already exist
    #[arg(long, short)]
    pub force: bool,

    /// Do not create or update barrel files
    #[arg(long)]
    pub skip_barrels: bool,

    /// Rebuild barrel files from scratch instead of merging
    #[arg(long)]
    pub refresh_barrels: bool,

    /// Increase diagnostic detail
    #[arg(long, short)]
    pub verbose: bool,
}
