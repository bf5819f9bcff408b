use clap::{Args, Parser, Subcommand, ValueEnum};
use cookify_core::{Replacement, DEFAULT_SAMPLE_ENTITY, SOLUTION_NAME_PLACEHOLDER};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cookify")]
#[command(version)]
#[command(about = "Convert an existing solution into a cookiecutter template")]
#[command(long_about = "A CLI tool that moves a project one directory down into a placeholder-named folder, replaces literal names with cookiecutter placeholders in file contents and paths, and writes the matching cookiecutter.json.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Templatize a directory containing a single .sln file")]
    Solution {
        #[arg(help = "Root directory of the solution")]
        root: PathBuf,

        #[arg(
            long,
            env = "COOKIFY_SAMPLE_ENTITY",
            default_value = DEFAULT_SAMPLE_ENTITY,
            help = "Sample entity name to replace with {{cookiecutter.sample_entity_name}}"
        )]
        sample_entity: String,

        #[command(flatten)]
        common: CommonArgs,
    },

    #[command(about = "Templatize a directory with explicit placeholder pairs")]
    Generic {
        #[arg(help = "Root directory to templatize")]
        root: PathBuf,

        #[arg(
            short = 'r',
            long = "replace",
            value_name = "NAME=VALUE",
            required = true,
            help = "Placeholder name and the literal it replaces, applied in the order given"
        )]
        replacements: Vec<Replacement>,

        #[arg(
            long,
            default_value = SOLUTION_NAME_PLACEHOLDER,
            help = "Placeholder name used for the destination directory"
        )]
        destination: String,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    #[arg(
        long,
        env = "COOKIFY_INCLUDE_HIDDEN",
        help = "Also templatize dot-prefixed files and directories"
    )]
    pub include_hidden: bool,

    #[arg(long, value_enum, default_value_t = ClassifierKind::Content, help = "How text files are told apart from binary files")]
    pub classifier: ClassifierKind,

    #[arg(
        long = "clean",
        value_name = "DIR",
        help = "Directory name to delete before relocation, replacing the defaults (bin, obj, .idea)"
    )]
    pub clean: Vec<String>,

    #[arg(long, conflicts_with = "clean", help = "Skip deleting build and IDE directories")]
    pub no_clean: bool,

    #[arg(short, long, help = "Interactive mode - prompt for each change")]
    pub interactive: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClassifierKind {
    /// Sniff the first bytes of each file
    Content,
    /// Trust a list of known binary extensions
    Extension,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
