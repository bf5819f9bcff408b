use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::classify::{FileClassifier, FileKind};
use crate::review::ChangeReviewer;
use crate::templater::Templater;
use crate::{walk, Result};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    pub files_scanned: usize,
    pub files_changed: usize,
    pub binary_skipped: usize,
}

/// Rewrites every text file below `dir` with the templater's replacements
/// applied. Binary files are left as they are; files are only written when
/// their content changes and the reviewer approves.
pub fn replace_in_contents(
    dir: &Path,
    templater: &Templater,
    skip_hidden: bool,
    classifier: &dyn FileClassifier,
    reviewer: &dyn ChangeReviewer,
) -> Result<ContentStats> {
    let mut stats = ContentStats::default();

    for entry in walk::entries(dir, skip_hidden) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        debug!("Processing file: {:?}", path);
        stats.files_scanned += 1;

        if classifier.classify(path)? == FileKind::Binary {
            debug!("Skipping binary file: {:?}", path);
            stats.binary_skipped += 1;
            continue;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::InvalidData => {
                debug!("Skipping non UTF-8 file: {:?}", path);
                stats.binary_skipped += 1;
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        let Some(new_content) = templater.process_content(&content) else {
            continue;
        };

        if !reviewer.review_content(path, &content, &new_content)? {
            info!("Keeping original contents of: {:?}", path);
            continue;
        }

        info!("Updating contents of: {:?}", path);
        fs::write(path, new_content)?;
        stats.files_changed += 1;
    }

    Ok(stats)
}
