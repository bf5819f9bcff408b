use std::path::Path;
use walkdir::{DirEntry, WalkDir};

pub(crate) const VCS_DIR: &str = ".git";

pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Every entry below `root` (not `root` itself), parents before children.
/// Hidden entries are neither yielded nor descended into when `skip_hidden`.
pub(crate) fn entries(root: &Path, skip_hidden: bool) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| !(skip_hidden && is_hidden(entry)))
}
