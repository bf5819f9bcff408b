use std::path::{Path, PathBuf};
use tracing::info;

pub mod classify;
pub mod cleaner;
pub mod content;
pub mod locator;
pub mod manifest;
pub mod names;
pub mod placeholder;
pub mod relocator;
pub mod review;
pub mod templater;
mod walk;

pub use classify::{ContentSniffer, ExtensionClassifier, FileClassifier, FileKind};
pub use manifest::{Manifest, MANIFEST_FILE_NAME};
pub use placeholder::{
    placeholder_token, Replacement, DEFAULT_SAMPLE_ENTITY, SAMPLE_ENTITY_PLACEHOLDER,
    SOLUTION_NAME_PLACEHOLDER,
};
pub use review::{AcceptAll, ChangeReviewer, EntryKind};
pub use templater::Templater;

#[derive(thiserror::Error, Debug)]
pub enum CookifyError {
    #[error("Cannot determine the solution name. Multiple solution files found in {root:?}: {matches:?}")]
    AmbiguousSolution { root: PathBuf, matches: Vec<PathBuf> },
    #[error("Cannot determine the solution name. No solution files found in {root:?}")]
    NoSolutionFound { root: PathBuf },
    #[error("Destination already exists: {path:?}")]
    DestinationExists { path: PathBuf },
    #[error("Cannot rename {from:?}: {to:?} already exists")]
    RenameConflict { from: PathBuf, to: PathBuf },
    #[error("Invalid replacement: {message}")]
    InvalidReplacement { message: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error(transparent)]
    Review(#[from] anyhow::Error),
}

pub type Result<T, E = CookifyError> = std::result::Result<T, E>;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Leave dot-prefixed files and directories out of content and name
    /// replacement. They are still relocated.
    pub skip_hidden: bool,
    /// Directory names removed anywhere in the tree before relocation.
    pub clean_dirs: Vec<String>,
    /// Placeholder name whose token becomes the destination directory.
    pub destination: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            clean_dirs: cleaner::DEFAULT_CLEAN_DIRS.iter().map(|name| name.to_string()).collect(),
            destination: SOLUTION_NAME_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CookifyReport {
    pub solution_name: Option<String>,
    pub destination: PathBuf,
    pub dirs_cleaned: usize,
    pub entries_relocated: usize,
    pub files_processed: usize,
    pub binary_skipped: usize,
    pub content_changes: usize,
    pub paths_renamed: usize,
    pub manifest_path: PathBuf,
}

/// Turns a directory holding a single `*.sln` into a cookiecutter template,
/// templating the solution name and `sample_entity`.
pub fn cookify_solution(root: &Path, sample_entity: &str, options: &PipelineOptions) -> Result<CookifyReport> {
    cookify_solution_with(root, sample_entity, options, &ContentSniffer::new(), &AcceptAll)
}

pub fn cookify_solution_with(
    root: &Path,
    sample_entity: &str,
    options: &PipelineOptions,
    classifier: &dyn FileClassifier,
    reviewer: &dyn ChangeReviewer,
) -> Result<CookifyReport> {
    info!("Locating solution in: {:?}", root);
    let solution_name = locator::find_solution_name(root)?;
    info!("Solution name: '{}'", solution_name);

    let replacements = vec![
        Replacement::new(&solution_name, SOLUTION_NAME_PLACEHOLDER)?,
        Replacement::new(sample_entity, SAMPLE_ENTITY_PLACEHOLDER)?,
    ];

    let mut report = cookify_with(root, replacements, options, classifier, reviewer)?;
    report.solution_name = Some(solution_name);
    Ok(report)
}

/// Turns `root` into a cookiecutter template using caller supplied
/// replacement pairs, applied in order.
pub fn cookify(root: &Path, replacements: Vec<Replacement>, options: &PipelineOptions) -> Result<CookifyReport> {
    cookify_with(root, replacements, options, &ContentSniffer::new(), &AcceptAll)
}

pub fn cookify_with(
    root: &Path,
    replacements: Vec<Replacement>,
    options: &PipelineOptions,
    classifier: &dyn FileClassifier,
    reviewer: &dyn ChangeReviewer,
) -> Result<CookifyReport> {
    info!("Starting cookify for: {:?}", root);
    let templater = Templater::new(replacements);

    let dirs_cleaned = cleaner::clean(root, &options.clean_dirs);
    info!("Cleaned {} build and IDE directories", dirs_cleaned);

    let destination_name = placeholder_token(&options.destination);
    let entries_relocated = relocator::relocate(root, &destination_name)?;
    let destination = root.join(&destination_name);
    info!("Relocated {} entries into {:?}", entries_relocated, destination);

    let content_stats =
        content::replace_in_contents(&destination, &templater, options.skip_hidden, classifier, reviewer)?;
    info!(
        "Content replacement: {} files processed, {} changed, {} binary skipped",
        content_stats.files_scanned, content_stats.files_changed, content_stats.binary_skipped
    );

    let paths_renamed = names::replace_in_names(&destination, &templater, options.skip_hidden, reviewer)?;
    info!("Renamed {} paths", paths_renamed);

    let manifest_path = Manifest::from_replacements(templater.replacements()).write_to(root)?;

    Ok(CookifyReport {
        solution_name: None,
        destination,
        dirs_cleaned,
        entries_relocated,
        files_processed: content_stats.files_scanned,
        binary_skipped: content_stats.binary_skipped,
        content_changes: content_stats.files_changed,
        paths_renamed,
        manifest_path,
    })
}
