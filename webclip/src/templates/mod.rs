//! Web Clipper template data model and registry
//!
//! A [`TemplateRecord`] pairs a [`TemplateDocument`] (the JSON the browser
//! extension imports) with the place it lands on disk. Documents serialize
//! with a fixed key order, so the same registry always produces the same bytes.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, WebclipError};

mod builtin;
mod guidance;

pub use guidance::{GUIDANCE_FILENAME, IMPORT_GUIDANCE};

/// Top-level folder every template lands under
pub const CLIPPINGS_DIR: &str = "Clippings";

/// Flat folder (under [`CLIPPINGS_DIR`]) holding a copy of every template
pub const AGGREGATION_DIR: &str = "TEMPLATES";

/// Template schema understood by the extension
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Type of a note property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Single line of text
    Text,
    /// List of values
    Multitext,
    /// Date
    Date,
}

/// One frontmatter property of the produced note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertyDescriptor {
    /// Property name
    pub name: String,
    /// Value format string, interpreted by the extension
    pub value: String,
    /// Property type
    #[serde(rename = "type")]
    pub kind: PropertyType,
}

impl PropertyDescriptor {
    /// `text` property
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, PropertyType::Text)
    }

    /// `multitext` property
    pub fn multitext(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, PropertyType::Multitext)
    }

    /// `date` property
    pub fn date(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, PropertyType::Date)
    }

    fn new(name: impl Into<String>, value: impl Into<String>, kind: PropertyType) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
        }
    }
}

/// What the extension does with a captured note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoteBehavior {
    /// Create a new note
    #[default]
    Create,
    /// Append to a named note
    AppendSpecific,
    /// Prepend to a named note
    PrependSpecific,
    /// Append to the daily note
    AppendDaily,
    /// Prepend to the daily note
    PrependDaily,
    /// Replace an existing note
    Overwrite,
}

/// The JSON document imported by the extension
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TemplateDocument {
    /// Template schema version
    pub schema_version: String,
    /// Display name
    pub name: String,
    /// Note behavior
    pub behavior: NoteBehavior,
    /// Note body format string
    pub note_content_format: String,
    /// Frontmatter properties
    pub properties: Vec<PropertyDescriptor>,
    /// Match rules (`startsWith:...`, `regex:...`, `default`)
    pub triggers: Vec<String>,
    /// Note title format string
    pub note_name_format: String,
    /// Vault folder the note is saved to
    pub path: String,
}

/// A template together with its destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    /// Display name
    pub name: String,
    /// File name, unique across a registry
    pub filename: String,
    /// Directory segments below the root
    pub target_subpath: Vec<String>,
    /// Document written to disk
    pub content: TemplateDocument,
}

impl TemplateRecord {
    /// Start building a record named `name` that lands in `subpath`
    pub fn builder(name: &str, subpath: &[&str]) -> TemplateBuilder {
        TemplateBuilder {
            name: name.to_string(),
            subpath: subpath.iter().map(ToString::to_string).collect(),
            note_content_format: String::new(),
            properties: Vec::new(),
            triggers: Vec::new(),
        }
    }

    /// Directory this record is written to
    #[must_use]
    pub fn target_dir(&self, root: &Path) -> PathBuf {
        self.target_subpath
            .iter()
            .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
    }

    /// Serialize the document: two-space indent, `": "` separators, UTF-8
    /// left unescaped, no trailing newline
    ///
    /// # Errors
    ///
    /// Returns [`WebclipError::Serialize`] if serialization fails.
    pub fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.content)?)
    }
}

/// Builder for [`TemplateRecord`]
#[derive(Debug, Clone)]
#[must_use]
pub struct TemplateBuilder {
    name: String,
    subpath: Vec<String>,
    note_content_format: String,
    properties: Vec<PropertyDescriptor>,
    triggers: Vec<String>,
}

impl TemplateBuilder {
    /// Set the note body format
    pub fn note_content(mut self, format: impl Into<String>) -> Self {
        self.note_content_format = format.into();
        self
    }

    /// Append a property
    pub fn property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Append a trigger
    pub fn trigger(mut self, rule: impl Into<String>) -> Self {
        self.triggers.push(rule.into());
        self
    }

    /// Finish the record, deriving its filename and vault path
    #[must_use]
    pub fn build(self) -> TemplateRecord {
        let filename = filename_for(&self.name);
        let path = self.subpath.join("/");

        TemplateRecord {
            content: TemplateDocument {
                schema_version: SCHEMA_VERSION.to_string(),
                name: self.name.clone(),
                behavior: NoteBehavior::Create,
                note_content_format: self.note_content_format,
                properties: self.properties,
                triggers: self.triggers,
                note_name_format: "{{title}}".to_string(),
                path,
            },
            name: self.name,
            filename,
            target_subpath: self.subpath,
        }
    }
}

/// Derive a file name from a template name: alphanumeric runs joined by `_`
///
/// `"Custom News/Blog Article"` becomes `"Custom_News_Blog_Article.json"`.
#[must_use]
pub fn filename_for(name: &str) -> String {
    let stem = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("{stem}.json")
}

/// Ordered, immutable set of templates with unique filenames
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    records: Vec<TemplateRecord>,
}

impl TemplateRegistry {
    /// Create a registry from records, in the given order
    ///
    /// # Errors
    ///
    /// Returns [`WebclipError::DuplicateFilename`] if two records share a filename.
    pub fn new(records: Vec<TemplateRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.filename.as_str()) {
                return Err(WebclipError::DuplicateFilename(record.filename.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The reference registry shipped with webclip
    ///
    /// # Errors
    ///
    /// Only fails if the built-in table is inconsistent.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::records())
    }

    /// Find a template by display name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TemplateRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Iterate in registry order
    pub fn iter(&self) -> std::slice::Iter<'_, TemplateRecord> {
        self.records.iter()
    }

    /// Number of templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a TemplateRegistry {
    type Item = &'a TemplateRecord;
    type IntoIter = std::slice::Iter<'a, TemplateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
