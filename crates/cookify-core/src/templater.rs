use std::path::Path;
use tracing::debug;

use crate::placeholder::Replacement;

/// Applies an ordered list of replacements to text and to path components.
///
/// Pairs are applied one after another on the running result, so an earlier
/// pair wins when two literals overlap.
pub struct Templater {
    replacements: Vec<Replacement>,
}

impl Templater {
    pub fn new(replacements: Vec<Replacement>) -> Self {
        Self { replacements }
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn process_content(&self, content: &str) -> Option<String> {
        let mut modified = content.to_string();
        let mut found = false;

        for replacement in &self.replacements {
            let occurrences = modified.matches(replacement.literal()).count();
            if occurrences > 0 {
                modified = modified.replace(replacement.literal(), replacement.token());
                found = true;
                debug!("Content replacement {}: found {} occurrences", replacement, occurrences);
            }
        }

        if found {
            Some(modified)
        } else {
            None
        }
    }

    /// Returns the new file name for `path` when its last component contains
    /// any literal. All pairs are applied cumulatively to the one name.
    pub fn process_path_component(&self, path: &Path) -> Option<String> {
        let name = path.file_name()?.to_str()?;
        let new_name = self.process_content(name)?;
        debug!("Path replacement: '{}' -> '{}'", name, new_name);
        Some(new_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templater() -> Templater {
        Templater::new(vec![
            Replacement::new("Foo", "solution_name").unwrap(),
            Replacement::new("Customer", "sample_entity_name").unwrap(),
        ])
    }

    #[test]
    fn test_content_replacement() {
        let result = templater().process_content("Customer: Foo Corp");

        assert_eq!(
            result.unwrap(),
            "{{cookiecutter.sample_entity_name}}: {{cookiecutter.solution_name}} Corp"
        );
    }

    #[test]
    fn test_no_content_replacement() {
        let result = templater().process_content("nothing to see here");
        assert!(result.is_none());
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let content = "Foo.Api Foo.Domain FooFoo";
        let result = templater().process_content(content).unwrap();

        assert_eq!(result.matches("{{cookiecutter.solution_name}}").count(), 4);
        assert!(!result.contains("Foo"));
    }

    #[test]
    fn test_replacement_is_case_sensitive() {
        let result = templater().process_content("foo FOO customer");
        assert!(result.is_none());
    }

    #[test]
    fn test_earlier_pair_takes_precedence() {
        let templater = Templater::new(vec![
            Replacement::new("FooBar", "long").unwrap(),
            Replacement::new("Foo", "short").unwrap(),
        ]);

        let result = templater.process_content("FooBar Foo").unwrap();
        assert_eq!(result, "{{cookiecutter.long}} {{cookiecutter.short}}");
    }

    #[test]
    fn test_path_component_replacement() {
        let path = Path::new("/some/Foo/CustomerModule/Foo.Customer.cs");
        let result = templater().process_path_component(path);

        assert_eq!(
            result.unwrap(),
            "{{cookiecutter.solution_name}}.{{cookiecutter.sample_entity_name}}.cs"
        );
    }

    #[test]
    fn test_path_component_ignores_parents() {
        let path = Path::new("/some/Foo/readme.md");
        assert!(templater().process_path_component(path).is_none());
    }
}
