/*!
 * Markdown writer implementation for repo2md
 */

use std::fs;
use std::io;
use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::language::Language;
use crate::report::FileReportInfo;
use crate::scanner::{FILE_SYMBOL, FOLDER_SYMBOL};
use crate::types::{FileRecord, TreeListing};

/// A rendered markdown document with per-file statistics
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub content: String,
    /// Files emitted in the contents section, in document order
    pub file_details: Vec<(String, FileReportInfo)>,
    /// Files replaced by an error notice
    pub read_errors: usize,
}

/// Markdown writer for a scanned tree
pub struct MarkdownWriter {
    /// Writer configuration
    config: Config,
}

impl MarkdownWriter {
    /// Create a new markdown writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render the preamble, the tree and, if enabled, the file contents
    pub fn render(&self, listing: &TreeListing) -> Result<Document> {
        let mut lines = vec![
            "This is a source code repo with markdown formatting.\n".to_string(),
            "# Repository Structure".to_string(),
            format!(
                "We use {} to represent folder, and {} as file.\n",
                FOLDER_SYMBOL, FILE_SYMBOL
            ),
            format!("- {} {}", FOLDER_SYMBOL, listing.root_name),
        ];
        lines.extend(listing.lines.iter().cloned());

        let mut document = Document::default();

        if self.config.include_file_contents && !listing.records.is_empty() {
            lines.push("\n---\n".to_string());
            lines.push("# File Contents\n".to_string());

            for record in &listing.records {
                self.write_file_section(record, &mut lines, &mut document)?;
            }
        }

        document.content = lines.join("\n");
        Ok(document)
    }

    /// Append the section for one file
    fn write_file_section(
        &self,
        record: &FileRecord,
        lines: &mut Vec<String>,
        document: &mut Document,
    ) -> Result<()> {
        // Only resolvable files are ever recorded
        let Some(language) = Language::from_path(&record.path) else {
            crate::bail!(
                Consistency,
                "{} was recorded but has no language",
                record.rel_path
            );
        };

        lines.push(format!("## {}", record.anchor));
        lines.push(format!("file: {}", record.rel_path));
        lines.push(format!(
            "Here is contents of {} with line numbers:",
            record.rel_path
        ));

        match read_text(&record.path) {
            Ok(content) => {
                let (numbered, info) = number_lines(&content);
                lines.push(format!("```{}", language));
                lines.push(numbered);
                lines.push("```".to_string());
                lines.push("---\n".to_string());
                document.file_details.push((record.rel_path.clone(), info));
            }
            Err(e) => {
                tracing::warn!(file = %record.rel_path, error = %e, "failed to read file");
                lines.push(format!("*Error reading file: {}*\n", e));
                document.read_errors += 1;
            }
        }

        Ok(())
    }

    /// Write the document to the configured output file, if any
    pub fn write(&self, document: &Document) -> Result<()> {
        if let Some(path) = &self.config.output_file {
            fs::write(path, &document.content)?;
            tracing::debug!(path = %path.display(), "wrote markdown output");
        }
        Ok(())
    }
}

/// Read a file as text, replacing invalid UTF-8 and normalizing line endings
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Number each line as `"<n>: <line>"` after trimming trailing whitespace
pub fn number_lines(content: &str) -> (String, FileReportInfo) {
    let body = content.trim_end();
    let mut info = FileReportInfo::default();

    let numbered = body
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            info.lines += 1;
            info.chars += line.chars().count();
            format!("{}: {}", i + 1, line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    (numbered, info)
}
