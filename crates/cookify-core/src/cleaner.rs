use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::walk::VCS_DIR;

/// Build output and IDE state removed before relocation.
pub const DEFAULT_CLEAN_DIRS: &[&str] = &["bin", "obj", ".idea"];

/// Deletes every directory below `root` whose name is in `dir_names`.
///
/// Best effort: unreadable entries and failed deletions are logged and
/// skipped. `.git` is never entered. Returns the number of directories
/// removed.
pub fn clean(root: &Path, dir_names: &[String]) -> usize {
    let mut removed = 0;
    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                debug!("Ignoring unreadable entry while cleaning: {}", error);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name == VCS_DIR {
            walker.skip_current_dir();
            continue;
        }

        if dir_names.iter().any(|candidate| *candidate == name) {
            walker.skip_current_dir();
            match fs::remove_dir_all(entry.path()) {
                Ok(()) => {
                    info!("Removed directory: {:?}", entry.path());
                    removed += 1;
                }
                Err(error) => debug!("Could not remove {:?}: {}", entry.path(), error),
            }
        }
    }

    removed
}
