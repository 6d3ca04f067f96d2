//! Destination root collection
//!
//! The terminal is reached only through [`Prompter`], so the CLI can plug in
//! an interactive implementation and tests can script the answers.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WebclipError};

/// Source of operator answers
pub trait Prompter {
    /// Ask for the destination root path
    ///
    /// # Errors
    ///
    /// Returns [`WebclipError::Prompt`] if the question cannot be asked.
    fn root_path(&mut self) -> Result<String>;

    /// Ask whether the missing directory `path` should be created
    ///
    /// # Errors
    ///
    /// Returns [`WebclipError::Prompt`] if the question cannot be asked.
    fn confirm_create(&mut self, path: &Path) -> Result<bool>;
}

/// A resolved destination root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDir {
    /// Root directory
    pub path: PathBuf,
    /// Whether this run created it
    pub created: bool,
}

/// Resolve the destination root, creating it on consent
///
/// `preset` (from the command line) replaces the path prompt; `assume_yes`
/// replaces the creation prompt.
///
/// # Errors
///
/// - [`WebclipError::InvalidInput`] if the path is blank or names a non-directory
/// - [`WebclipError::Aborted`] if the operator declines creation
/// - [`WebclipError::Io`] if the directory cannot be created
pub fn collect_root(
    prompter: &mut dyn Prompter,
    preset: Option<String>,
    assume_yes: bool,
) -> Result<RootDir> {
    let path = read_root(prompter, preset)?;
    ensure_root(prompter, path, assume_yes)
}

/// Obtain the root path from `preset` or the prompter, trimmed
///
/// # Errors
///
/// Returns [`WebclipError::InvalidInput`] if the path is blank, or the
/// prompter's error if asking fails.
pub fn read_root(prompter: &mut dyn Prompter, preset: Option<String>) -> Result<PathBuf> {
    let raw = match preset {
        Some(path) => path,
        None => prompter.root_path()?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(WebclipError::InvalidInput("no path provided".to_string()));
    }
    Ok(PathBuf::from(trimmed))
}

/// Make sure `path` is a directory, creating it on consent
///
/// # Errors
///
/// - [`WebclipError::InvalidInput`] if `path` exists and is not a directory
/// - [`WebclipError::Aborted`] if the operator declines creation
/// - [`WebclipError::Io`] if the directory cannot be created
pub fn ensure_root(
    prompter: &mut dyn Prompter,
    path: PathBuf,
    assume_yes: bool,
) -> Result<RootDir> {
    if path.is_dir() {
        return Ok(RootDir { path, created: false });
    }
    if path.exists() {
        return Err(WebclipError::InvalidInput(format!(
            "'{}' exists and is not a directory",
            path.display()
        )));
    }

    if !assume_yes && !prompter.confirm_create(&path)? {
        tracing::info!(path = %path.display(), "root creation declined");
        return Err(WebclipError::Aborted);
    }

    fs::create_dir_all(&path).map_err(|e| WebclipError::io(&path, e))?;
    tracing::info!(path = %path.display(), "created root directory");

    Ok(RootDir { path, created: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Replays fixed answers and records what was asked
    struct Scripted {
        path: Option<String>,
        consent: bool,
        asked_path: bool,
        asked_consent: bool,
    }

    impl Scripted {
        fn new(path: Option<&str>, consent: bool) -> Self {
            Self {
                path: path.map(str::to_string),
                consent,
                asked_path: false,
                asked_consent: false,
            }
        }
    }

    impl Prompter for Scripted {
        fn root_path(&mut self) -> Result<String> {
            self.asked_path = true;
            self.path
                .clone()
                .ok_or_else(|| WebclipError::Prompt("stdin closed".to_string()))
        }

        fn confirm_create(&mut self, _path: &Path) -> Result<bool> {
            self.asked_consent = true;
            Ok(self.consent)
        }
    }

    #[test]
    fn test_blank_path_is_invalid() {
        let mut prompter = Scripted::new(Some("   "), true);
        let err = collect_root(&mut prompter, None, false).unwrap_err();
        assert!(matches!(err, WebclipError::InvalidInput(_)));
    }

    #[test]
    fn test_existing_directory_is_used_as_is() {
        let temp = TempDir::new().unwrap();
        let mut prompter = Scripted::new(None, false);
        let root = collect_root(
            &mut prompter,
            Some(format!("  {}  ", temp.path().display())),
            false,
        )
        .unwrap();

        assert_eq!(root.path, temp.path());
        assert!(!root.created);
        assert!(!prompter.asked_path);
        assert!(!prompter.asked_consent);
    }

    #[test]
    fn test_declined_creation_aborts_without_side_effects() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("vault");
        let mut prompter = Scripted::new(Some(missing.to_str().unwrap()), false);

        let err = collect_root(&mut prompter, None, false).unwrap_err();

        assert!(matches!(err, WebclipError::Aborted));
        assert!(prompter.asked_consent);
        assert!(!missing.exists());
    }

    #[test]
    fn test_accepted_creation_makes_ancestors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("a").join("b").join("vault");
        let mut prompter = Scripted::new(Some(missing.to_str().unwrap()), true);

        let root = collect_root(&mut prompter, None, false).unwrap();

        assert!(root.created);
        assert!(missing.is_dir());
    }

    #[test]
    fn test_assume_yes_skips_consent() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("vault");
        let mut prompter = Scripted::new(None, false);

        let root = collect_root(&mut prompter, Some(missing.display().to_string()), true).unwrap();

        assert!(root.created);
        assert!(!prompter.asked_consent);
    }

    #[test]
    fn test_file_root_is_invalid() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.md");
        std::fs::write(&file, "x").unwrap();
        let mut prompter = Scripted::new(None, true);

        let err = collect_root(&mut prompter, Some(file.display().to_string()), false).unwrap_err();

        assert!(matches!(err, WebclipError::InvalidInput(_)));
    }

    #[test]
    fn test_read_root_never_touches_disk() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("vault");
        let mut prompter = Scripted::new(Some(&format!("{}\n", missing.display())), true);

        let path = read_root(&mut prompter, None).unwrap();

        assert_eq!(path, missing);
        assert!(prompter.asked_path);
        assert!(!prompter.asked_consent);
        assert!(!missing.exists());
    }

    #[test]
    fn test_ensure_root_asks_only_for_missing_directories() {
        let temp = TempDir::new().unwrap();
        let mut prompter = Scripted::new(None, false);

        let root = ensure_root(&mut prompter, temp.path().to_path_buf(), false).unwrap();

        assert!(!root.created);
        assert!(!prompter.asked_path);
        assert!(!prompter.asked_consent);
    }

    #[test]
    fn test_prompt_failure_propagates() {
        let mut prompter = Scripted::new(None, true);
        let err = collect_root(&mut prompter, None, false).unwrap_err();
        assert!(matches!(err, WebclipError::Prompt(_)));
    }
}
