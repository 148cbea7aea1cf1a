//! yangdoc CLI - render annotated YANG schema trees to documentation.
//!
//! Reads the module tree JSON exported by the upstream YANG compiler and
//! writes an RST or Markdown document.

use clap::{Parser, ValueEnum};
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use yangdoc::{OutputFormat, Yangdoc};

/// Render annotated YANG schema trees to RST or Markdown
#[derive(Parser)]
#[command(
    name = "yangdoc",
    version,
    about = "Render annotated YANG schema trees to documentation",
    long_about = "yangdoc - YANG schema documentation renderer.\n\n\
                  Takes the annotated module tree exported by a YANG compiler\n\
                  (as JSON) and renders a reStructuredText or Markdown document.\n\n\
                  Usage:\n  \
                  yangdoc modules.json                  Write modules.rst\n  \
                  yangdoc modules.json -f md -o doc.md  Write Markdown to doc.md"
)]
struct Cli {
    /// Module tree JSON exported by the YANG toolchain
    input: PathBuf,

    /// Output file (default: input path with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "rst")]
    format: Format,

    /// Document title placed at the top of the output
    #[arg(short, long)]
    title: Option<String>,

    /// Strip namespace prefixes from schema paths
    #[arg(long)]
    strip_namespace: bool,

    /// Maximum heading level for Markdown statement headings
    #[arg(long, default_value_t = 6)]
    max_heading_level: u8,

    /// Collapse blank lines and trailing whitespace in the output
    #[arg(long)]
    cleanup: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// reStructuredText
    Rst,
    /// Markdown
    Md,
}

impl Format {
    fn output_format(self) -> OutputFormat {
        match self {
            Format::Rst => OutputFormat::Rst,
            Format::Md => OutputFormat::Markdown,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Format::Rst => "rst",
            Format::Md => "md",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> yangdoc::Result<()> {
    let mut builder = Yangdoc::new()
        .with_max_heading_level(cli.max_heading_level);
    if let Some(ref title) = cli.title {
        builder = builder.with_title(title);
    }
    if cli.strip_namespace {
        builder = builder.strip_namespace();
    }
    if cli.cleanup {
        builder = builder.with_cleanup();
    }

    let loaded = builder.load(&cli.input)?;

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension(cli.format.extension()));

    let document = loaded.render(cli.format.output_format())?;
    std::fs::write(&output_path, &document)?;

    println!(
        "{} {} module(s), {} data node(s)",
        "rendered".green().bold(),
        loaded.module_count(),
        loaded.statement_count()
    );
    println!(
        "  {} {} ({} bytes)",
        "->".dimmed(),
        output_path.display(),
        document.len()
    );

    Ok(())
}
