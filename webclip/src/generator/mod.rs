//! Generation run
//!
//! One run walks `CollectInput → EnsureRoot → EmitAll → WriteDocs → Done`.
//! Any error ends the run where it happened; files already written stay, and
//! running again overwrites them.

use std::fmt;
use std::path::PathBuf;

use crate::emitter::{EmitOptions, Emitter, WriteEvent};
use crate::error::Result;
use crate::input::{ensure_root, read_root, Prompter};
use crate::templates::TemplateRegistry;

/// Step of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Obtaining the root path
    CollectInput,
    /// Making sure the root exists
    EnsureRoot,
    /// Writing templates
    EmitAll,
    /// Writing the guidance document
    WriteDocs,
    /// Finished
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CollectInput => "collect-input",
            Self::EnsureRoot => "ensure-root",
            Self::EmitAll => "emit-all",
            Self::WriteDocs => "write-docs",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Something the operator should see
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent<'a> {
    /// The root did not exist and was created
    RootCreated(PathBuf),
    /// A template file was written
    Write(WriteEvent<'a>),
    /// The guidance document was written
    GuidanceWritten(PathBuf),
}

/// Parameters of a run
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Root from the command line; prompted for when `None`
    pub root: Option<String>,
    /// Create a missing root without asking
    pub assume_yes: bool,
    /// Emitter options
    pub emit: EmitOptions,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Root directory
    pub root: PathBuf,
    /// Whether the root was created by this run
    pub root_created: bool,
    /// Templates written to topic folders
    pub templates_written: usize,
    /// Copies written to the aggregation folder
    pub copies_written: usize,
    /// Guidance document path
    pub guidance: PathBuf,
}

/// Runs the generation pipeline over a registry
#[derive(Debug, Clone)]
pub struct Generator {
    registry: TemplateRegistry,
}

impl Generator {
    /// Create a generator for `registry`
    #[must_use]
    pub const fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Execute a run
    ///
    /// # Errors
    ///
    /// Returns the first error from input collection, root creation, template
    /// emission or guidance writing.
    pub fn run<F>(
        &self,
        prompter: &mut dyn Prompter,
        request: GenerateRequest,
        mut on_event: F,
    ) -> Result<GenerationReport>
    where
        F: FnMut(&RunEvent<'_>),
    {
        enter(Stage::CollectInput);
        let path = read_root(prompter, request.root)?;

        enter(Stage::EnsureRoot);
        let root = ensure_root(prompter, path, request.assume_yes)?;
        if root.created {
            on_event(&RunEvent::RootCreated(root.path.clone()));
        }

        enter(Stage::EmitAll);
        let emitter = Emitter::new(&root.path, request.emit);
        let summary = emitter.emit_all(&self.registry, |write| {
            on_event(&RunEvent::Write(write.clone()));
        })?;

        enter(Stage::WriteDocs);
        let guidance = emitter.write_guidance()?;
        on_event(&RunEvent::GuidanceWritten(guidance.clone()));

        enter(Stage::Done);
        Ok(GenerationReport {
            root: root.path,
            root_created: root.created,
            templates_written: summary.templates,
            copies_written: summary.copies,
            guidance,
        })
    }
}

fn enter(stage: Stage) {
    tracing::info!(%stage, "entering stage");
}
