// src/generate/mod.rs
//! Phase 1 of the pipeline: classify each parsed class, synthesize mock
//! content, reconcile it against whatever is already on disk, and write.
//! Service mocks with a base class are deferred to phase 2 (inherit).

pub mod inherit;

use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::error::{MockError, Result};
use crate::mock::{inspect, merge, template};
use crate::mock::{MockCollection, MockDescriptor, MockKind, SaveMode};
use crate::parse::{self, ClassDecl};
use crate::paths;
use regex::Regex;
use std::fs;
use std::path::Path;

pub struct Generator<'a> {
    config: &'a Config,
    collection: MockCollection,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            collection: MockCollection::default(),
        }
    }

    /// Runs both phases over `files`, in the order supplied, and returns the
    /// accumulated collection. Per-class failures are reported and skipped;
    /// nothing here aborts the run.
    pub fn run(mut self, files: &[std::path::PathBuf], diags: &mut Diagnostics) -> MockCollection {
        for path in files {
            self.process_file(path, diags);
        }
        self.resolve_deferred(diags);
        self.collection
    }

    fn process_file(&mut self, path: &Path, diags: &mut Diagnostics) {
        let source = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                diags.error(MockError::io(e, path).to_string());
                return;
            }
        };
        let classes = match parse::parse_classes(&source) {
            Ok(c) => c,
            Err(e) => {
                diags.error(format!("{}: {e}", paths::shorten(path)));
                return;
            }
        };
        if classes.is_empty() {
            diags.debug(format!(
                "No class declaration found in {}.",
                paths::shorten(path)
            ));
            return;
        }
        for decl in &classes {
            match self.create_mock(decl, path, diags) {
                Ok(descriptor) => {
                    if descriptor.skipped || self.write_mock(&descriptor, diags) {
                        self.collection.push(descriptor);
                    }
                }
                Err(e) => diags.error(e.to_string()),
            }
        }
    }

    /// Builds one descriptor: classify by target suffix, extract metadata,
    /// synthesize and reconcile. Deferred services return before any write.
    fn create_mock(
        &self,
        decl: &ClassDecl,
        source_path: &Path,
        diags: &mut Diagnostics,
    ) -> Result<MockDescriptor> {
        let target = paths::mock_target(source_path)
            .and_then(|t| MockKind::from_target(&t).map(|k| (t, k)));
        let Some((target, kind)) = target else {
            return Err(MockError::UnclassifiableSource {
                path: source_path.to_path_buf(),
            });
        };

        let mut descriptor = MockDescriptor::new(kind, &decl.name, source_path, &target);
        match kind {
            MockKind::Component | MockKind::Directive => {
                descriptor.selector = template::extract_selector(&decl.raw);
                if descriptor.selector.is_none() {
                    diags.warn(format!("No selector found in {}", paths::shorten(source_path)));
                }
            }
            MockKind::Pipe => {
                descriptor.pipe_token = template::extract_pipe_name(&decl.raw);
                if descriptor.pipe_token.is_none() {
                    diags.warn(format!(
                        "No pipe name found in {}",
                        paths::shorten(source_path)
                    ));
                }
            }
            MockKind::Service => {
                descriptor.methods = decl.methods.clone();
                if let Some(base) = &decl.base_class {
                    descriptor.base_mock = Some(format!("Mock{base}"));
                    if self.config.whole_app() {
                        // Base methods are only known once the whole
                        // application has been walked; finalized in phase 2.
                        descriptor.deferred = true;
                        descriptor.skipped = true;
                        return Ok(descriptor);
                    }
                    diags.warn(format!(
                        "{} won't have methods from its base class. Mock with --app-dir to include them.",
                        paths::shorten(&target)
                    ));
                }
            }
        }

        self.reconcile(&mut descriptor, diags)?;
        Ok(descriptor)
    }

    /// The decision table: append when the mock is absent, method-append for
    /// services, combine under --force, otherwise skip.
    fn reconcile(&self, descriptor: &mut MockDescriptor, diags: &mut Diagnostics) -> Result<()> {
        let inspection = inspect::inspect(&descriptor.target_path, &descriptor.mock_class_name)?;
        if descriptor.kind == MockKind::Service {
            if let Some(form) = inspection.found {
                descriptor.export_form = form;
            }
        }

        match (inspection.existing, inspection.found) {
            (None, _) => {
                descriptor.content = Some(template::render(descriptor));
                descriptor.save_mode = SaveMode::Create;
            }
            (Some(existing), None) => {
                descriptor.content =
                    Some(merge::append_block(&existing, &template::render(descriptor)));
                descriptor.save_mode = SaveMode::Create;
            }
            (Some(existing), Some(_)) => {
                if descriptor.kind == MockKind::Service && !self.config.force {
                    self.append_new_methods(descriptor, &existing, diags);
                } else if self.config.force {
                    descriptor.content = Some(self.combine_same_target(descriptor));
                    descriptor.save_mode = SaveMode::Update;
                } else {
                    descriptor.skipped = true;
                    diags.debug(format!(
                        "Skipped creating {}. Mock already exists.",
                        descriptor.mock_class_name
                    ));
                }
            }
        }
        Ok(())
    }

    /// Splices methods not yet present into the existing spy-object list,
    /// leaving every other byte of the file untouched.
    fn append_new_methods(
        &self,
        descriptor: &mut MockDescriptor,
        existing: &str,
        diags: &mut Diagnostics,
    ) {
        let new_methods: Vec<&String> = descriptor
            .methods
            .iter()
            .filter(|m| !existing.contains(m.as_str()))
            .collect();
        if new_methods.is_empty() {
            descriptor.skipped = true;
            diags.debug(format!(
                "Skipped creating {}. Mock already exists.",
                descriptor.mock_class_name
            ));
            return;
        }

        let anchor = spy_list_anchor(&descriptor.mock_class_name);
        let delta: String = new_methods
            .iter()
            .map(|m| format!("\n  '{m}',"))
            .collect();
        match merge::splice_after(existing, &anchor, &delta, &descriptor.target_path) {
            Ok(content) => {
                descriptor.content = Some(content);
                descriptor.save_mode = SaveMode::Update;
            }
            Err(e) => {
                descriptor.skipped = true;
                diags.warn(format!("{e}; {} left unchanged", descriptor.mock_class_name));
            }
        }
    }

    /// Full regeneration of one target file: fresh blocks for every
    /// descriptor that shares it, in discovery order, blank-line separated.
    fn combine_same_target(&self, descriptor: &MockDescriptor) -> String {
        let mut blocks: Vec<String> = self
            .collection
            .of_kind(descriptor.kind)
            .iter()
            .filter(|m| m.target_path == descriptor.target_path && !m.deferred)
            .map(template::render)
            .collect();
        blocks.push(template::render(descriptor));
        merge::join_blocks(&blocks)
    }

    fn write_mock(&self, descriptor: &MockDescriptor, diags: &mut Diagnostics) -> bool {
        let Some(content) = &descriptor.content else {
            return false;
        };
        if let Some(parent) = descriptor.target_path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    diags.error(MockError::io(e, parent).to_string());
                    return false;
                }
            }
        }
        match fs::write(&descriptor.target_path, content) {
            Ok(()) => {
                diags.notice(format!(
                    "{} is successfully {}.",
                    descriptor.mock_class_name,
                    descriptor.save_mode.past_tense()
                ));
                true
            }
            Err(e) => {
                diags.error(MockError::io(e, &descriptor.target_path).to_string());
                false
            }
        }
    }

    /// Phase 2: finalize services that were waiting on their base class.
    /// Entries are rebuilt from a phase-1 snapshot, then written.
    fn resolve_deferred(&mut self, diags: &mut Diagnostics) {
        if !self.config.whole_app() {
            return;
        }
        let snapshot = self.collection.services.clone();
        for (idx, phase1) in snapshot.iter().enumerate() {
            if !phase1.deferred {
                continue;
            }
            let mut entry = phase1.clone();
            entry.methods = inherit::resolve_methods(phase1, &snapshot, diags);
            entry.deferred = false;
            entry.skipped = false;
            if let Err(e) = self.reconcile(&mut entry, diags) {
                diags.error(e.to_string());
                continue;
            }
            if !entry.skipped && !self.write_mock(&entry, diags) {
                continue;
            }
            self.collection.services[idx] = entry;
        }
    }
}

/// Anchor: the opening bracket of the spy-object method list belonging to
/// exactly this mock's binding.
fn spy_list_anchor(mock_class_name: &str) -> Regex {
    let name = regex::escape(mock_class_name);
    Regex::new(&format!(
        r"export\s+const\s+{name}\s*=\s*jasmine\.createSpyObj\(\s*'{name}'\s*,\s*\["
    ))
    .expect("anchor pattern is well-formed")
}
