/*!
 * Reporting functionality for repo2md
 *
 * Renders an end-of-run summary with the tabled library. The report goes to
 * stderr so stdout only ever carries the markdown document.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::anchor::AnchorCollision;
use crate::utils::format_file_size;

/// Information about a file in the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Number of numbered lines emitted
    pub lines: usize,
    /// Number of characters emitted, line numbers excluded
    pub chars: usize,
}

/// Statistics for one run
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Output file path, if one was written
    pub output_file: Option<String>,
    /// Time taken to scan and render
    pub duration: Duration,
    /// Directories listed in the tree
    pub directories: usize,
    /// Files listed in the tree
    pub files_listed: usize,
    /// Directories replaced by a permission marker
    pub permission_denied: usize,
    /// Files whose content could not be read
    pub read_errors: usize,
    /// Size of the generated document in bytes
    pub output_bytes: u64,
    /// Per-file details, in document order
    pub file_details: Vec<(String, FileReportInfo)>,
    pub collisions: Vec<AnchorCollision>,
}

impl ScanReport {
    pub fn total_lines(&self) -> usize {
        self.file_details.iter().map(|(_, info)| info.lines).sum()
    }

    pub fn total_chars(&self) -> usize {
        self.file_details.iter().map(|(_, info)| info.chars).sum()
    }
}

/// Report generator for run results
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate the report text
    pub fn generate_report(&self, report: &ScanReport) -> String {
        let summary_title = "✅  MARKDOWN GENERATED";
        let summary_table = self.create_summary_table(report);

        let mut out = String::new();
        if !report.file_details.is_empty() {
            let files_title = if report.file_details.len() > 15 {
                "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT"
            } else {
                "📋  INCLUDED FILES"
            };
            out.push_str(&format!(
                "{}\n{}\n\n",
                files_title,
                self.create_files_table(report)
            ));
        }
        out.push_str(&format!("{}\n{}", summary_title, summary_table));

        if !report.collisions.is_empty() {
            out.push_str("\n\n⚠️  ANCHOR COLLISIONS\n");
            for collision in &report.collisions {
                out.push_str(&format!(
                    "#{}: {} and {}\n",
                    collision.anchor, collision.first, collision.second
                ));
            }
        }

        out
    }

    /// Print the report to stderr
    pub fn print_report(&self, report: &ScanReport) {
        eprintln!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report
                    .output_file
                    .clone()
                    .unwrap_or_else(|| "(stdout only)".to_string()),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📁 Directories".to_string(),
                value: self.format_number(report.directories),
            },
            SummaryRow {
                key: "📄 Files Listed".to_string(),
                value: self.format_number(report.files_listed),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines()),
            },
            SummaryRow {
                key: "🔤 Total Chars".to_string(),
                value: self.format_number(report.total_chars()),
            },
            SummaryRow {
                key: "📦 Output Size".to_string(),
                value: format_file_size(report.output_bytes),
            },
        ];

        if report.permission_denied > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Permission Denied".to_string(),
                value: report.permission_denied.to_string(),
            });
        }
        if report.read_errors > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Read Errors".to_string(),
                value: report.read_errors.to_string(),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Chars")]
            chars: String,
        }

        // Largest files first
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));

        let files_to_show = if files.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: truncate_path(path, 60),
                lines: self.format_number(info.lines),
                chars: self.format_number(info.chars),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep the trailing path segments that fit in `max_len` characters
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.chars().count() <= max_len {
        return path.to_string();
    }

    let mut segments = Vec::new();
    let mut current_len = 3; // "..."
    for part in path.rsplit('/') {
        let part_len = part.chars().count() + 1;
        if current_len + part_len > max_len {
            break;
        }
        segments.push(part);
        current_len += part_len;
    }

    if segments.is_empty() {
        let tail: String = path
            .chars()
            .rev()
            .take(max_len.saturating_sub(3))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        return format!("...{}", tail);
    }

    let mut result = String::from("...");
    for part in segments.iter().rev() {
        result.push('/');
        result.push_str(part);
    }
    result
}
