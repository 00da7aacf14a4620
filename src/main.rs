/*!
 * Command-line interface for repo2md
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use repo2md::config::{Args, Config};
use repo2md::error::Result;
use repo2md::language::language_table;
use repo2md::report::{Reporter, ScanReport};
use repo2md::scanner::Scanner;
use repo2md::utils::count_files;
use repo2md::writer::MarkdownWriter;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG always takes precedence; otherwise --verbose picks DEBUG over WARN
    let default_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();

    if let Some(shell) = args.generate {
        generate(shell, &mut Args::command(), "repo2md", &mut io::stdout());
        return Ok(());
    }

    if args.list_languages {
        for (extension, language) in language_table() {
            println!("{:8} {}", extension, language);
        }
        return Ok(());
    }

    let quiet = args.quiet;
    let config = Config::from_args(args);
    config.validate()?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(count_files(&config.target_dir, &config));
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_prefix("📊 Scanning");
        bar
    };

    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let writer = MarkdownWriter::new(config.clone());

    let start_time = Instant::now();
    let listing = scanner.scan()?;
    let document = writer.render(&listing)?;
    let duration = start_time.elapsed();

    progress.finish_and_clear();

    println!("{}", document.content);

    writer.write(&document)?;
    if let Some(path) = &config.output_file {
        eprintln!("Repository structure saved to {}", path.display());
    }

    if !quiet {
        let stats = scanner.get_statistics();
        let report = ScanReport {
            output_file: config
                .output_file
                .as_ref()
                .map(|p| p.display().to_string()),
            duration,
            directories: stats.directories,
            files_listed: stats.files,
            permission_denied: stats.permission_denied,
            read_errors: document.read_errors,
            output_bytes: document.content.len() as u64,
            file_details: document.file_details,
            collisions: listing.collisions,
        };
        Reporter::new().print_report(&report);
    }

    Ok(())
}
