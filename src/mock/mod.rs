// src/mock/mod.rs
pub mod inspect;
pub mod merge;
pub mod template;

use std::path::{Path, PathBuf};

/// Mock category, decided once from the target file name suffix and
/// pattern-matched everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockKind {
    Component,
    Directive,
    Pipe,
    Service,
}

impl MockKind {
    /// Classifies from the mock target path. None => unclassifiable source.
    #[must_use]
    pub fn from_target(target: &Path) -> Option<Self> {
        let name = target.to_string_lossy();
        if name.ends_with(".component.mock.ts") {
            Some(Self::Component)
        } else if name.ends_with(".directive.mock.ts") {
            Some(Self::Directive)
        } else if name.ends_with(".pipe.mock.ts") {
            Some(Self::Pipe)
        } else if name.ends_with(".service.mock.ts") {
            Some(Self::Service)
        } else {
            None
        }
    }

    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Component => "components",
            Self::Directive => "directives",
            Self::Pipe => "pipes",
            Self::Service => "services",
        }
    }

    /// Barrel array constant for this kind.
    #[must_use]
    pub fn barrel_const(self) -> &'static str {
        match self {
            Self::Component => "MockComponents",
            Self::Directive => "MockDirectives",
            Self::Pipe => "MockPipes",
            Self::Service => "MockServices",
        }
    }

    pub const ALL: [MockKind; 4] = [
        Self::Component,
        Self::Directive,
        Self::Pipe,
        Self::Service,
    ];
}

/// Which filesystem action reconciliation took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    #[default]
    Create,
    Update,
}

impl SaveMode {
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
        }
    }
}

/// How an existing service mock is exported; drives the provider style
/// (`useClass` vs `useValue`) in the service-provider barrel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportForm {
    #[default]
    Value,
    ClassAlias,
}

/// One classified source class and everything needed to write its mock.
#[derive(Debug, Clone)]
pub struct MockDescriptor {
    pub kind: MockKind,
    pub class_name: String,
    pub mock_class_name: String,
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    /// Final content for this run; None until reconciled or when skipped.
    pub content: Option<String>,
    /// No file write occurred this run.
    pub skipped: bool,
    /// Service awaiting base-class method resolution (whole-app mode).
    pub deferred: bool,
    pub save_mode: SaveMode,
    pub selector: Option<String>,
    pub pipe_token: Option<String>,
    /// `Mock` + referenced base class name, for services with `extends`.
    pub base_mock: Option<String>,
    /// Declared (phase 1) then resolved (phase 2) method names.
    pub methods: Vec<String>,
    pub export_form: ExportForm,
}

impl MockDescriptor {
    #[must_use]
    pub fn new(kind: MockKind, class_name: &str, source: &Path, target: &Path) -> Self {
        Self {
            kind,
            class_name: class_name.to_string(),
            mock_class_name: format!("Mock{class_name}"),
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
            content: None,
            skipped: false,
            deferred: false,
            save_mode: SaveMode::Create,
            selector: None,
            pipe_token: None,
            base_mock: None,
            methods: Vec::new(),
            export_form: ExportForm::default(),
        }
    }
}

/// Every mock from one run, partitioned by kind, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct MockCollection {
    pub components: Vec<MockDescriptor>,
    pub directives: Vec<MockDescriptor>,
    pub pipes: Vec<MockDescriptor>,
    pub services: Vec<MockDescriptor>,
}

impl MockCollection {
    #[must_use]
    pub fn of_kind(&self, kind: MockKind) -> &[MockDescriptor] {
        match kind {
            MockKind::Component => &self.components,
            MockKind::Directive => &self.directives,
            MockKind::Pipe => &self.pipes,
            MockKind::Service => &self.services,
        }
    }

    pub fn push(&mut self, descriptor: MockDescriptor) {
        match descriptor.kind {
            MockKind::Component => self.components.push(descriptor),
            MockKind::Directive => self.directives.push(descriptor),
            MockKind::Pipe => self.pipes.push(descriptor),
            MockKind::Service => self.services.push(descriptor),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        MockKind::ALL.iter().all(|k| self.of_kind(*k).is_empty())
    }

    /// (mocked, skipped) counts for one kind.
    #[must_use]
    pub fn counts(&self, kind: MockKind) -> (usize, usize) {
        let all = self.of_kind(kind);
        let skipped = all.iter().filter(|m| m.skipped).count();
        (all.len() - skipped, skipped)
    }
}
