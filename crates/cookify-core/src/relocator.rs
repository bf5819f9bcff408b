use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::walk::VCS_DIR;
use crate::{CookifyError, Result};

/// Creates `root/destination` and moves every other top-level entry of
/// `root` into it, leaving `.git` in place. Returns the number of entries
/// moved.
pub fn relocate(root: &Path, destination: &str) -> Result<usize> {
    let target = root.join(destination);
    if target.symlink_metadata().is_ok() {
        return Err(CookifyError::DestinationExists { path: target });
    }

    let entries: Vec<_> = fs::read_dir(root)?.collect::<std::result::Result<Vec<_>, _>>()?;

    fs::create_dir(&target)?;
    info!("Created destination directory: {:?}", target);

    let mut moved = 0;
    for entry in entries {
        let name = entry.file_name();
        if name == VCS_DIR {
            debug!("Leaving version control metadata in place: {:?}", entry.path());
            continue;
        }

        let new_path = target.join(&name);
        debug!("Moving {:?} -> {:?}", entry.path(), new_path);
        fs::rename(entry.path(), &new_path)?;
        moved += 1;
    }

    Ok(moved)
}
