use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::placeholder::Replacement;
use crate::Result;

pub const MANIFEST_FILE_NAME: &str = "cookiecutter.json";

/// Placeholder name to default value, in replacement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: IndexMap<String, String>,
}

impl Manifest {
    /// Inverts the replacement list. A repeated placeholder keeps its first
    /// position and its last literal.
    pub fn from_replacements(replacements: &[Replacement]) -> Self {
        let entries = replacements
            .iter()
            .map(|r| (r.placeholder().to_string(), r.literal().to_string()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, placeholder: &str) -> Option<&str> {
        self.entries.get(placeholder).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Four-space indented JSON with non-ASCII text kept as is.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        buffer.push(b'\n');
        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Writes `cookiecutter.json` into `root`, replacing any existing file.
    pub fn write_to(&self, root: &Path) -> Result<PathBuf> {
        let path = root.join(MANIFEST_FILE_NAME);
        fs::write(&path, self.to_pretty_json()?)?;
        info!("Wrote manifest with {} placeholders: {:?}", self.len(), path);
        Ok(path)
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements() -> Vec<Replacement> {
        vec![
            Replacement::new("Foo", "solution_name").unwrap(),
            Replacement::new("Customer", "sample_entity_name").unwrap(),
        ]
    }

    #[test]
    fn test_pretty_json_layout() {
        let manifest = Manifest::from_replacements(&replacements());

        assert_eq!(
            manifest.to_pretty_json().unwrap(),
            "{\n    \"solution_name\": \"Foo\",\n    \"sample_entity_name\": \"Customer\"\n}\n"
        );
    }

    #[test]
    fn test_unicode_preserved() {
        let manifest = Manifest::from_replacements(&[Replacement::new("Müller Straße", "company").unwrap()]);

        let json = manifest.to_pretty_json().unwrap();
        assert!(json.contains("\"Müller Straße\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::from_replacements(&replacements());

        let path = manifest.write_to(dir.path()).unwrap();
        let parsed = Manifest::read_from(&path).unwrap();

        assert_eq!(path, dir.path().join(MANIFEST_FILE_NAME));
        assert_eq!(parsed, manifest);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.get("solution_name"), Some("Foo"));
        assert_eq!(parsed.get("sample_entity_name"), Some("Customer"));
    }

    #[test]
    fn test_overwrites_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE_NAME), "{\"stale\": \"value\"}").unwrap();

        let path = Manifest::from_replacements(&replacements()).write_to(dir.path()).unwrap();

        let parsed = Manifest::read_from(&path).unwrap();
        assert_eq!(parsed.get("stale"), None);
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_repeated_placeholder_keeps_last_literal() {
        let manifest = Manifest::from_replacements(&[
            Replacement::new("Foo", "name").unwrap(),
            Replacement::new("Bar", "other").unwrap(),
            Replacement::new("Baz", "name").unwrap(),
        ]);

        let keys: Vec<_> = manifest.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "other"]);
        assert_eq!(manifest.get("name"), Some("Baz"));
    }
}
