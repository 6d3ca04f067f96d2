//! Template emitter
//!
//! Writes every registry template into its topic folder, optionally copies it
//! into the flat aggregation folder, and writes the import guidance. All
//! writes overwrite; the first failure stops the run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WebclipError};
use crate::templates::{
    TemplateRecord, TemplateRegistry, AGGREGATION_DIR, CLIPPINGS_DIR, GUIDANCE_FILENAME,
    IMPORT_GUIDANCE,
};

/// Emitter options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Copy every template into `Clippings/TEMPLATES`
    pub aggregate: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { aggregate: true }
    }
}

/// A completed write, reported as it happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteEvent<'a> {
    /// Template written to its topic folder
    Created {
        /// Template display name
        template: &'a str,
        /// File written
        path: PathBuf,
    },
    /// Template copied into the aggregation folder
    Cloned {
        /// Template display name
        template: &'a str,
        /// File written
        path: PathBuf,
    },
}

/// Counts of files written by [`Emitter::emit_all`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    /// Files written to topic folders
    pub templates: usize,
    /// Copies written to the aggregation folder
    pub copies: usize,
}

/// On-disk state of one expected file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    /// Not present
    Missing,
    /// Byte-identical to what would be written
    UpToDate,
    /// Present with different content
    Modified {
        /// Current file content, invalid UTF-8 replaced
        on_disk: String,
    },
}

/// Comparison of one expected file against disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    /// Template display name
    pub template: String,
    /// Expected file location
    pub path: PathBuf,
    /// Whether this is the aggregation copy
    pub aggregated: bool,
    /// Content that would be written
    pub expected: String,
    /// What is there now
    pub state: FileState,
}

/// Writes templates below a root directory
#[derive(Debug, Clone)]
pub struct Emitter {
    root: PathBuf,
    options: EmitOptions,
}

impl Emitter {
    /// Create an emitter for `root`
    pub fn new(root: impl Into<PathBuf>, options: EmitOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    /// The flat aggregation directory, `<root>/Clippings/TEMPLATES`
    #[must_use]
    pub fn aggregation_dir(&self) -> PathBuf {
        self.root.join(CLIPPINGS_DIR).join(AGGREGATION_DIR)
    }

    /// Path of the guidance document
    #[must_use]
    pub fn guidance_path(&self) -> PathBuf {
        self.root.join(GUIDANCE_FILENAME)
    }

    /// Write every template in registry order, calling `on_write` after each file
    ///
    /// # Errors
    ///
    /// Returns the first directory, serialization or write failure. Templates
    /// after the failing one are not attempted.
    pub fn emit_all<F>(&self, registry: &TemplateRegistry, mut on_write: F) -> Result<EmitSummary>
    where
        F: FnMut(&WriteEvent<'_>),
    {
        let aggregation_dir = self.aggregation_dir();
        if self.options.aggregate {
            create_dir(&aggregation_dir)?;
        }

        let mut summary = EmitSummary::default();
        for record in registry {
            let body = record.render()?;

            let path = self.emit_one(record, &body)?;
            summary.templates += 1;
            on_write(&WriteEvent::Created {
                template: &record.name,
                path,
            });

            if self.options.aggregate {
                let path = aggregation_dir.join(&record.filename);
                write_file(&path, &body)?;
                summary.copies += 1;
                on_write(&WriteEvent::Cloned {
                    template: &record.name,
                    path,
                });
            }
        }

        tracing::info!(
            templates = summary.templates,
            copies = summary.copies,
            "templates emitted"
        );
        Ok(summary)
    }

    /// Write one record's body into its topic folder
    fn emit_one(&self, record: &TemplateRecord, body: &str) -> Result<PathBuf> {
        let dir = record.target_dir(&self.root);
        create_dir(&dir)?;

        let path = dir.join(&record.filename);
        write_file(&path, body)?;
        Ok(path)
    }

    /// Write the import guidance to the root
    ///
    /// # Errors
    ///
    /// Returns [`WebclipError::Io`] if the file cannot be written.
    pub fn write_guidance(&self) -> Result<PathBuf> {
        let path = self.guidance_path();
        write_file(&path, IMPORT_GUIDANCE)?;
        Ok(path)
    }

    /// Compare every file [`Emitter::emit_all`] would write against disk. Never writes.
    ///
    /// # Errors
    ///
    /// Returns an error if a template cannot be rendered or an existing file
    /// cannot be read.
    pub fn inspect(&self, registry: &TemplateRegistry) -> Result<Vec<FileStatus>> {
        let mut statuses = Vec::new();

        for record in registry {
            let expected = record.render()?;

            let mut targets = vec![(record.target_dir(&self.root).join(&record.filename), false)];
            if self.options.aggregate {
                targets.push((self.aggregation_dir().join(&record.filename), true));
            }

            for (path, aggregated) in targets {
                let state = file_state(&path, &expected)?;
                statuses.push(FileStatus {
                    template: record.name.clone(),
                    path,
                    aggregated,
                    expected: expected.clone(),
                    state,
                });
            }
        }

        Ok(statuses)
    }
}

fn file_state(path: &Path, expected: &str) -> Result<FileState> {
    match fs::read(path) {
        Ok(bytes) if bytes == expected.as_bytes() => Ok(FileState::UpToDate),
        Ok(bytes) => Ok(FileState::Modified {
            on_disk: String::from_utf8_lossy(&bytes).into_owned(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileState::Missing),
        Err(e) => Err(WebclipError::io(path, e)),
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| WebclipError::io(path, e))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| WebclipError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
