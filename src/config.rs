/*!
 * Configuration handling for repo2md
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;

/// Command-line arguments for repo2md
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "repo2md",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a simplified tree-like markdown representation of a repository structure",
    long_about = "Walks a directory and emits one markdown document: a folder/file tree followed by every recognized source file, fenced by language and numbered line by line."
)]
pub struct Args {
    /// Path to the repository root directory
    #[clap(required_unless_present_any = ["list_languages", "generate"])]
    pub path: Option<String>,

    /// Output markdown file path
    #[clap(short, long)]
    pub output: Option<String>,

    /// Patterns to ignore (e.g., __pycache__ *.pyc)
    #[clap(short, long, num_args = 1..)]
    pub ignore: Vec<String>,

    /// Show hidden files and directories (starting with .)
    #[clap(long)]
    pub show_hidden: bool,

    /// Only emit the tree, skip the file contents section
    #[clap(long)]
    pub no_contents: bool,

    /// Print the supported extensions and their language tags, then exit
    #[clap(long)]
    pub list_languages: bool,

    /// Suppress the progress bar and summary report
    #[clap(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to process
    pub target_dir: PathBuf,

    /// Markdown file to write in addition to stdout
    pub output_file: Option<PathBuf>,

    /// Exact names or glob patterns to ignore
    pub ignore_patterns: Vec<String>,

    /// Whether entries starting with a dot are skipped
    pub ignore_hidden: bool,

    /// Whether the file contents section is emitted
    pub include_file_contents: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            output_file: None,
            ignore_patterns: Vec::new(),
            ignore_hidden: true,
            include_file_contents: true,
        }
    }
}

impl Config {
    /// Create a default configuration rooted at `target_dir`
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            ..Default::default()
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.path.unwrap_or_else(|| ".".to_string())),
            output_file: args.output.map(PathBuf::from),
            ignore_patterns: args.ignore,
            ignore_hidden: !args.show_hidden,
            include_file_contents: !args.no_contents,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.target_dir.is_dir(),
            PathNotFound,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        // The output file's directory must already exist
        if let Some(output) = &self.output_file {
            if let Some(parent) = output.parent() {
                crate::ensure!(
                    parent == Path::new("") || parent.is_dir(),
                    Config,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
            crate::ensure!(
                !output.is_dir(),
                Config,
                "Output path is a directory: {}",
                output.display()
            );
        }

        Ok(())
    }

    /// Name shown on the root bullet of the tree
    pub fn root_name(&self) -> String {
        self.target_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.target_dir.display().to_string())
    }
}
