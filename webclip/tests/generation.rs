//! Integration tests for template generation

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use webclip::emitter::{EmitOptions, Emitter};
use webclip::templates::{TemplateDocument, TemplateRegistry};

/// Generate the built-in registry plus guidance into `root`
fn generate(root: &Path, aggregate: bool) {
    let registry = TemplateRegistry::builtin().unwrap();
    let emitter = Emitter::new(root, EmitOptions { aggregate });
    emitter.emit_all(&registry, |_| {}).unwrap();
    emitter.write_guidance().unwrap();
}

/// Every file below `root`, keyed by relative path
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    fn walk(dir: &Path, root: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                out.insert(relative, fs::read(&path).unwrap());
            }
        }
    }

    let mut files = BTreeMap::new();
    walk(root, root, &mut files);
    files
}

/// Test that an empty root receives the full tree
#[test]
fn test_full_tree_on_empty_root() {
    let temp = TempDir::new().unwrap();
    generate(temp.path(), false);

    let files = snapshot(temp.path());
    assert_eq!(files.len(), 11 + 1);
    assert!(files.contains_key(Path::new("README_IMPORT_GUIDANCE.txt")));
    assert!(files.contains_key(
        &Path::new("Clippings").join("Custom_Default_Verbatim_Clone_Clean.json")
    ));
    let topics = [
        "Summaries",
        "Research",
        "Translations",
        "Articles",
        "Highlights",
        "GitHub",
        "Medium",
        "Generic",
    ];
    for topic in topics {
        assert!(temp.path().join("Clippings").join(topic).is_dir(), "missing {topic}");
    }
}

/// Test that generating twice produces byte-identical output
#[test]
fn test_generation_is_deterministic() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    generate(first.path(), true);
    generate(second.path(), true);
    let once = snapshot(second.path());
    generate(second.path(), true);

    assert_eq!(snapshot(first.path()), once);
    assert_eq!(snapshot(second.path()), once);
}

/// Test that every file parses and re-serializes to the same bytes
#[test]
fn test_files_round_trip() {
    let temp = TempDir::new().unwrap();
    generate(temp.path(), false);
    let registry = TemplateRegistry::builtin().unwrap();

    for record in &registry {
        let path = record.target_dir(temp.path()).join(&record.filename);
        let body = fs::read_to_string(&path).unwrap();

        assert!(serde_json::from_str::<serde_json::Value>(&body).is_ok());

        let document: TemplateDocument = serde_json::from_str(&body).unwrap();
        assert_eq!(document, record.content);
        assert_eq!(serde_json::to_string_pretty(&document).unwrap(), body);
    }
}

/// Test that aggregated copies match their topic-folder originals
#[test]
fn test_aggregated_copies_are_identical() {
    let temp = TempDir::new().unwrap();
    generate(temp.path(), true);
    let registry = TemplateRegistry::builtin().unwrap();
    let aggregation_dir = temp.path().join("Clippings").join("TEMPLATES");

    assert_eq!(fs::read_dir(&aggregation_dir).unwrap().count(), registry.len());
    for record in &registry {
        let original = fs::read(record.target_dir(temp.path()).join(&record.filename)).unwrap();
        let copy = fs::read(aggregation_dir.join(&record.filename)).unwrap();
        assert_eq!(original, copy, "{}", record.name);
    }
}

/// Test that a deleted file is restored and nothing else changes
#[test]
fn test_rerun_restores_deleted_file() {
    let temp = TempDir::new().unwrap();
    generate(temp.path(), true);
    let before = snapshot(temp.path());

    let victim = temp.path().join("Clippings").join("Medium").join("Medium_Article.json");
    fs::remove_file(&victim).unwrap();
    generate(temp.path(), true);

    assert!(victim.is_file());
    assert_eq!(snapshot(temp.path()), before);
}

/// Test the exact bytes of one template against the known-good layout
#[test]
fn test_summary_template_bytes() {
    let registry = TemplateRegistry::builtin().unwrap();
    let body = registry.get("Custom Summary").unwrap().render().unwrap();

    let expected = r###"{
  "schemaVersion": "0.1.0",
  "name": "Custom Summary",
  "behavior": "create",
  "noteContentFormat": "## Summary\n{{\"Summarize the main points of this page in three bullet points.\"|blockquote}}\n\n---\n**Captured on:** {{time}}",
  "properties": [
    {
      "name": "title",
      "value": "{{title}}",
      "type": "text"
    },
    {
      "name": "source",
      "value": "{{url}}",
      "type": "text"
    },
    {
      "name": "tags",
      "value": "web-clip, summary",
      "type": "multitext"
    }
  ],
  "triggers": [],
  "noteNameFormat": "{{title}}",
  "path": "Clippings/Summaries"
}"###;
    assert_eq!(body, expected);
}
