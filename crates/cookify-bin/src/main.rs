mod cli;
mod diff;

use anyhow::{Context, Result};
use cli::{ClassifierKind, Cli, CommonArgs, Commands};
use cookify_core::{
    AcceptAll, ChangeReviewer, ContentSniffer, CookifyReport, ExtensionClassifier, FileClassifier,
    PipelineOptions, Replacement,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    setup_logging(&cli)?;

    info!("Starting cookify");

    match cli.command {
        Commands::Solution {
            root,
            sample_entity,
            common,
        } => {
            handle_solution_command(root, sample_entity, common)?;
        }
        Commands::Generic {
            root,
            replacements,
            destination,
            common,
        } => {
            handle_generic_command(root, replacements, destination, common)?;
        }
    }

    info!("Cookify completed successfully");
    Ok(())
}

fn handle_solution_command(root: PathBuf, sample_entity: String, common: CommonArgs) -> Result<()> {
    validate_root(&root)?;

    info!("Solution templating for: {:?}", root);
    info!("Sample entity: '{}'", sample_entity);

    let options = pipeline_options(&common, PipelineOptions::default().destination);
    let classifier = select_classifier(common.classifier);
    let reviewer = select_reviewer(common.interactive);

    let report = cookify_core::cookify_solution_with(
        &root,
        &sample_entity,
        &options,
        classifier.as_ref(),
        reviewer,
    )
    .with_context(|| format!("Failed to cookify {:?}", root))?;

    print_report(&report);
    Ok(())
}

fn handle_generic_command(
    root: PathBuf,
    replacements: Vec<Replacement>,
    destination: String,
    common: CommonArgs,
) -> Result<()> {
    validate_root(&root)?;

    info!("Generic templating for: {:?}", root);
    for replacement in &replacements {
        info!("Replacement: {}", replacement);
    }

    let options = pipeline_options(&common, destination);
    let classifier = select_classifier(common.classifier);
    let reviewer = select_reviewer(common.interactive);

    let report = cookify_core::cookify_with(&root, replacements, &options, classifier.as_ref(), reviewer)
        .with_context(|| format!("Failed to cookify {:?}", root))?;

    print_report(&report);
    Ok(())
}

fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        anyhow::bail!("Root directory does not exist: {:?}", root);
    }

    if !root.is_dir() {
        anyhow::bail!("Root must be a directory: {:?}", root);
    }

    Ok(())
}

fn pipeline_options(common: &CommonArgs, destination: String) -> PipelineOptions {
    let defaults = PipelineOptions::default();
    let clean_dirs = if common.no_clean {
        Vec::new()
    } else if common.clean.is_empty() {
        defaults.clean_dirs
    } else {
        common.clean.clone()
    };

    let options = PipelineOptions {
        skip_hidden: !common.include_hidden,
        clean_dirs,
        destination,
    };
    debug!("Pipeline options: {:?}", options);
    options
}

fn select_classifier(kind: ClassifierKind) -> Box<dyn FileClassifier> {
    match kind {
        ClassifierKind::Content => Box::new(ContentSniffer::new()),
        ClassifierKind::Extension => Box::new(ExtensionClassifier::default()),
    }
}

fn select_reviewer(interactive: bool) -> &'static dyn ChangeReviewer {
    info!("Interactive mode: {}", interactive);
    if interactive {
        &diff::DiffReviewer
    } else {
        &AcceptAll
    }
}

fn print_report(report: &CookifyReport) {
    println!("Cookify complete!");
    if let Some(solution_name) = &report.solution_name {
        println!("  Solution: {}", solution_name);
    }
    println!("  Template root: {}", report.destination.display());
    println!("  Directories cleaned: {}", report.dirs_cleaned);
    println!("  Entries relocated: {}", report.entries_relocated);
    println!("  Files processed: {}", report.files_processed);
    println!("  Binary files skipped: {}", report.binary_skipped);
    println!("  Content changes: {}", report.content_changes);
    println!("  Paths renamed: {}", report.paths_renamed);
    println!("  Manifest: {}", report.manifest_path.display());
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .with(filter)
        .init();

    Ok(())
}
