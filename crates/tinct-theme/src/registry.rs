//! Named theme documents from inline content and directories.
//!
//! [`ThemeRegistry`] resolves a theme name to a [`ThemeDocument`] that can be
//! handed to [`ThemeOptions::config`](crate::ThemeOptions::config).
//!
//! # Resolution
//!
//! 1. **Inline documents** (added via [`ThemeRegistry::add_inline`] or
//!    [`ThemeRegistry::add_document`]) have highest priority
//! 2. **File documents** are searched in directory registration order
//!    (first directory wins)
//! 3. Names can be given with or without extension: both `"ocean"` and
//!    `"ocean.yaml"` resolve
//!
//! Within one directory, `.yaml` beats `.yml` beats `.json` for the same
//! stem (see [`THEME_EXTENSIONS`]).
//!
//! File documents are re-read on every [`get`](ThemeRegistry::get), so
//! edits show up without rebuilding the registry.
//!
//! # Example
//!
//! ```rust,ignore
//! use tinct_theme::{generate_theme, ThemeOptions, ThemeRegistry};
//!
//! let mut registry = ThemeRegistry::new();
//! registry.add_dir("./themes")?;
//!
//! let theme = generate_theme(ThemeOptions::new().config(registry.get("ocean")?));
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::document::{ThemeDocument, THEME_EXTENSIONS};
use crate::error::{Result, ThemeError};

/// Registry of named theme documents.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    /// Inline documents (highest priority).
    inline: HashMap<String, ThemeDocument>,
    /// Theme name → file path, first registered directory wins.
    files: HashMap<String, PathBuf>,
    /// Registered directories, in order.
    dirs: Vec<PathBuf>,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an inline document from YAML content.
    ///
    /// Inline documents shadow file documents with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML content cannot be parsed.
    pub fn add_inline(&mut self, name: impl Into<String>, yaml: &str) -> Result<()> {
        let doc = ThemeDocument::from_yaml(yaml)?;
        self.inline.insert(name.into(), doc);
        Ok(())
    }

    /// Adds a pre-built document.
    pub fn add_document(&mut self, name: impl Into<String>, doc: ThemeDocument) {
        self.inline.insert(name.into(), doc);
    }

    /// Adds a directory to search for theme files.
    ///
    /// Files are registered under their name without extension. Names
    /// already provided by an earlier directory are not replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Load`] if the directory cannot be read.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let found = scan_dir(path)?;
        tracing::debug!(dir = %path.display(), themes = found.len(), "registered theme directory");
        for (name, file) in found {
            self.files.entry(name).or_insert(file);
        }
        self.dirs.push(path.to_path_buf());
        Ok(())
    }

    /// Gets a document by name.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::NotFound`] if no document is registered under
    /// the name, or a load error if the file can no longer be parsed.
    pub fn get(&self, name: &str) -> Result<ThemeDocument> {
        if let Some(doc) = self.inline.get(name) {
            return Ok(doc.clone());
        }

        let base_name = strip_extension(name);
        if let Some(doc) = self.inline.get(base_name) {
            return Ok(doc.clone());
        }

        match self.files.get(base_name) {
            Some(path) => ThemeDocument::from_file(path),
            None => Err(ThemeError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Checks if a document is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        let base_name = strip_extension(name);
        self.inline.contains_key(name)
            || self.inline.contains_key(base_name)
            || self.files.contains_key(base_name)
    }

    /// Returns all registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .inline
            .keys()
            .chain(self.files.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Returns the number of distinct registered names.
    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// Returns true if no documents are registered.
    pub fn is_empty(&self) -> bool {
        self.inline.is_empty() && self.files.is_empty()
    }

    /// Clears all registered documents and directories.
    pub fn clear(&mut self) {
        self.inline.clear();
        self.files.clear();
        self.dirs.clear();
    }

    /// Re-scans the registered directories.
    ///
    /// # Errors
    ///
    /// Returns an error if any directory cannot be read.
    pub fn refresh(&mut self) -> Result<()> {
        let dirs = std::mem::take(&mut self.dirs);
        self.files.clear();
        for dir in dirs {
            self.add_dir(dir)?;
        }
        Ok(())
    }
}

/// Strips a recognized theme extension from a name.
pub fn strip_extension(name: &str) -> &str {
    THEME_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name)
}

/// Collects `stem → path` for theme files directly inside `dir`.
fn scan_dir(dir: &Path) -> Result<HashMap<String, PathBuf>> {
    let load_error = |source| ThemeError::Load {
        path: dir.to_path_buf(),
        source,
    };

    let mut best: HashMap<String, (usize, PathBuf)> = HashMap::new();
    for entry in std::fs::read_dir(dir).map_err(load_error)? {
        let path = entry.map_err(load_error)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some((priority, stem)) = THEME_EXTENSIONS
            .iter()
            .enumerate()
            .find_map(|(i, ext)| file_name.strip_suffix(ext).map(|stem| (i, stem)))
        else {
            continue;
        };
        let stem = stem.to_string();

        match best.get(&stem) {
            Some((existing, _)) if *existing <= priority => {}
            _ => {
                best.insert(stem, (priority, path));
            }
        }
    }

    Ok(best
        .into_iter()
        .map(|(stem, (_, path))| (stem, path))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_registry_new_is_empty() {
        let registry = ThemeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_registry_add_inline() {
        let mut registry = ThemeRegistry::new();
        registry
            .add_inline(
                "warm",
                r#"
                color: orange
                highlight:
                    base:
                        fillMode: solid
                "#,
            )
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("warm"));
        let doc = registry.get("warm").unwrap();
        assert_eq!(doc.get("highlight.base.fillMode"), Some(&json!("solid")));
    }

    #[test]
    fn test_registry_add_inline_invalid() {
        let mut registry = ThemeRegistry::new();
        assert!(registry.add_inline("bad", "not valid yaml: [").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_add_document() {
        let mut registry = ThemeRegistry::new();
        registry.add_document("plain", ThemeDocument::new().with("color", json!("gray")));
        assert_eq!(
            registry.get("plain").unwrap().get("color"),
            Some(&json!("gray"))
        );
    }

    #[test]
    fn test_registry_not_found() {
        let registry = ThemeRegistry::new();
        assert!(matches!(
            registry.get("missing"),
            Err(ThemeError::NotFound { .. })
        ));
    }

    #[test]
    fn test_registry_add_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ocean.yaml"), "color: teal\n").unwrap();
        fs::write(temp_dir.path().join("forest.json"), r#"{ "color": "green" }"#).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let mut registry = ThemeRegistry::new();
        registry.add_dir(temp_dir.path()).unwrap();

        assert_eq!(registry.names(), vec!["forest", "ocean"]);
        assert_eq!(
            registry.get("ocean").unwrap().get("color"),
            Some(&json!("teal"))
        );
        assert_eq!(
            registry.get("forest.json").unwrap().get("color"),
            Some(&json!("green"))
        );
    }

    #[test]
    fn test_registry_add_dir_missing() {
        let mut registry = ThemeRegistry::new();
        let result = registry.add_dir("/nonexistent/themes");
        assert!(matches!(result, Err(ThemeError::Load { .. })));
    }

    #[test]
    fn test_registry_extension_priority() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ocean.yml"), "color: navy\n").unwrap();
        fs::write(temp_dir.path().join("ocean.yaml"), "color: teal\n").unwrap();
        fs::write(temp_dir.path().join("ocean.json"), r#"{ "color": "cyan" }"#).unwrap();

        let mut registry = ThemeRegistry::new();
        registry.add_dir(temp_dir.path()).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("ocean").unwrap().get("color"),
            Some(&json!("teal"))
        );
    }

    #[test]
    fn test_registry_first_dir_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("ocean.yaml"), "color: teal\n").unwrap();
        fs::write(second.path().join("ocean.yaml"), "color: navy\n").unwrap();

        let mut registry = ThemeRegistry::new();
        registry.add_dir(first.path()).unwrap();
        registry.add_dir(second.path()).unwrap();

        assert_eq!(
            registry.get("ocean").unwrap().get("color"),
            Some(&json!("teal"))
        );
    }

    #[test]
    fn test_registry_inline_shadows_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ocean.yaml"), "color: teal\n").unwrap();

        let mut registry = ThemeRegistry::new();
        registry.add_dir(temp_dir.path()).unwrap();
        registry.add_inline("ocean", "color: coral\n").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("ocean").unwrap().get("color"),
            Some(&json!("coral"))
        );
    }

    #[test]
    fn test_registry_rereads_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ocean.yaml");
        fs::write(&path, "color: teal\n").unwrap();

        let mut registry = ThemeRegistry::new();
        registry.add_dir(temp_dir.path()).unwrap();
        fs::write(&path, "color: navy\n").unwrap();

        assert_eq!(
            registry.get("ocean").unwrap().get("color"),
            Some(&json!("navy"))
        );
    }

    #[test]
    fn test_registry_refresh_picks_up_new_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ocean.yaml"), "color: teal\n").unwrap();

        let mut registry = ThemeRegistry::new();
        registry.add_dir(temp_dir.path()).unwrap();
        assert_eq!(registry.len(), 1);

        fs::write(temp_dir.path().join("desert.yaml"), "color: orange\n").unwrap();
        registry.refresh().unwrap();
        assert_eq!(registry.names(), vec!["desert", "ocean"]);
    }

    #[test]
    fn test_registry_clear() {
        let mut registry = ThemeRegistry::new();
        registry.add_inline("a", "color: red\n").unwrap();
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("ocean.yaml"), "ocean");
        assert_eq!(strip_extension("ocean.yml"), "ocean");
        assert_eq!(strip_extension("ocean.json"), "ocean");
        assert_eq!(strip_extension("ocean"), "ocean");
        assert_eq!(strip_extension("ocean.toml"), "ocean.toml");
    }
}
