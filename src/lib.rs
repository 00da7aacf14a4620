/*!
 * repo2md - Generate a markdown snapshot of a repository
 *
 * This library walks a directory tree and renders one markdown document:
 * a folder/file tree followed by each recognized source file, fenced by
 * language and numbered line by line.
 */

pub mod anchor;
pub mod config;
pub mod error;
pub mod filter;
pub mod language;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use anchor::{anchor_id, AnchorCollision, AnchorRegistry};
pub use config::Config;
pub use error::{Repo2MdError, Result};
pub use filter::IgnoreFilter;
pub use language::Language;
pub use report::{FileReportInfo, Reporter, ScanReport};
pub use scanner::Scanner;
pub use types::{Entry, EntryKind, FileRecord, TreeListing};
pub use utils::{count_files, format_file_size};
pub use writer::{Document, MarkdownWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan `config.target_dir` and render the full markdown document
pub fn generate(config: &Config) -> Result<String> {
    let scanner = Scanner::new(
        config.clone(),
        std::sync::Arc::new(indicatif::ProgressBar::hidden()),
    );
    let listing = scanner.scan()?;
    let document = MarkdownWriter::new(config.clone()).render(&listing)?;
    Ok(document.content)
}
