use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{CookifyError, Result};

pub const SOLUTION_EXTENSION: &str = "sln";

/// Finds the single `*.sln` file directly under `root` and returns its name
/// without the extension.
pub fn find_solution_name(root: &Path) -> Result<String> {
    let mut matches: Vec<PathBuf> = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file()
            && path.extension().is_some_and(|ext| ext == SOLUTION_EXTENSION)
        {
            debug!("Found solution file: {:?}", path);
            matches.push(path);
        }
    }

    matches.sort();

    match matches.as_slice() {
        [] => Err(CookifyError::NoSolutionFound {
            root: root.to_path_buf(),
        }),
        [solution] => solution
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_string)
            .ok_or_else(|| CookifyError::InvalidReplacement {
                message: format!("solution file name is not valid UTF-8: {:?}", solution),
            }),
        _ => Err(CookifyError::AmbiguousSolution {
            root: root.to_path_buf(),
            matches,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_solution() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Foo.sln"), "").unwrap();
        fs::write(dir.path().join("Foo.config"), "").unwrap();

        assert_eq!(find_solution_name(dir.path()).unwrap(), "Foo");
    }

    #[test]
    fn test_dotted_solution_name_keeps_inner_dots() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Acme.Billing.sln"), "").unwrap();

        assert_eq!(find_solution_name(dir.path()).unwrap(), "Acme.Billing");
    }

    #[test]
    fn test_no_solution() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let result = find_solution_name(dir.path());
        assert!(matches!(result, Err(CookifyError::NoSolutionFound { .. })));
    }

    #[test]
    fn test_ambiguous_solution() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Foo.sln"), "").unwrap();
        fs::write(dir.path().join("Bar.sln"), "").unwrap();

        match find_solution_name(dir.path()) {
            Err(CookifyError::AmbiguousSolution { matches, .. }) => assert_eq!(matches.len(), 2),
            other => panic!("Expected AmbiguousSolution, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_solution_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src").join("Inner.sln"), "").unwrap();
        fs::create_dir(dir.path().join("Dir.sln")).unwrap();

        assert!(find_solution_name(dir.path()).is_err());
    }
}
