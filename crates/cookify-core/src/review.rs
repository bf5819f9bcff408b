use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => f.write_str("File"),
            EntryKind::Directory => f.write_str("Directory"),
        }
    }
}

/// Gate consulted before each content rewrite and each rename. Returning
/// `false` leaves that file or name untouched.
pub trait ChangeReviewer {
    fn review_content(&self, path: &Path, old_content: &str, new_content: &str) -> anyhow::Result<bool>;

    fn review_rename(&self, old_path: &Path, new_path: &Path, kind: EntryKind) -> anyhow::Result<bool>;
}

/// Approves every change.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl ChangeReviewer for AcceptAll {
    fn review_content(&self, _path: &Path, _old_content: &str, _new_content: &str) -> anyhow::Result<bool> {
        Ok(true)
    }

    fn review_rename(&self, _old_path: &Path, _new_path: &Path, _kind: EntryKind) -> anyhow::Result<bool> {
        Ok(true)
    }
}
