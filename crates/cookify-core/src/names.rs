use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::review::{ChangeReviewer, EntryKind};
use crate::templater::Templater;
use crate::{walk, CookifyError, Result};

#[derive(Default)]
struct Level {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

/// Renames files and directories below `dir` whose names contain a literal.
///
/// The tree is listed once up front and grouped by depth. Depths are then
/// processed deepest first, files before directories, so every pending path
/// still has all of its ancestors under their original names when it is
/// renamed. `dir` itself is never renamed.
pub fn replace_in_names(
    dir: &Path,
    templater: &Templater,
    skip_hidden: bool,
    reviewer: &dyn ChangeReviewer,
) -> Result<usize> {
    let mut levels: BTreeMap<usize, Level> = BTreeMap::new();

    for entry in walk::entries(dir, skip_hidden) {
        let entry = entry?;
        let level = levels.entry(entry.depth()).or_default();
        if entry.file_type().is_dir() {
            level.dirs.push(entry.into_path());
        } else {
            level.files.push(entry.into_path());
        }
    }

    let mut renamed = 0;
    for (depth, level) in levels.iter().rev() {
        debug!(
            "Renaming at depth {}: {} files, {} directories",
            depth,
            level.files.len(),
            level.dirs.len()
        );
        for path in &level.files {
            if rename_entry(path, templater, EntryKind::File, reviewer)? {
                renamed += 1;
            }
        }
        for path in &level.dirs {
            if rename_entry(path, templater, EntryKind::Directory, reviewer)? {
                renamed += 1;
            }
        }
    }

    Ok(renamed)
}

fn rename_entry(
    path: &Path,
    templater: &Templater,
    kind: EntryKind,
    reviewer: &dyn ChangeReviewer,
) -> Result<bool> {
    let (Some(new_name), Some(parent)) = (templater.process_path_component(path), path.parent()) else {
        return Ok(false);
    };

    let new_path = parent.join(new_name);
    if new_path.symlink_metadata().is_ok() {
        return Err(CookifyError::RenameConflict {
            from: path.to_path_buf(),
            to: new_path,
        });
    }

    if !reviewer.review_rename(path, &new_path, kind)? {
        info!("Keeping {} name: {:?}", kind, path);
        return Ok(false);
    }

    info!("Renaming {}: {:?} -> {:?}", kind, path, new_path);
    fs::rename(path, &new_path)?;
    Ok(true)
}
