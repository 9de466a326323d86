//! tab2tex CLI - Pasted tables and merged-header grids to LaTeX

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use tabtex::{
    export::write_export,
    export_table, parse_with_options,
    templates::{blank_document, deep_sea_example, MergedTableDocument},
    CaptionPosition, ComplexOptions, ExportFormat, ParseOptions, Placement, RenderOptions,
};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tab2tex")]
#[command(version)]
#[command(about = "Pasted spreadsheet tables and merged-header grids to LaTeX", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert pasted delimiter-separated text
    Paste(PasteArgs),

    /// Render a merged-header JSON document ({"header": [[..]], "body": [[..]]})
    Merged(MergedArgs),

    /// Print a blank or example merged-header JSON document
    Template {
        /// Number of header rows
        #[arg(long, default_value_t = 2)]
        header_rows: usize,

        /// Number of columns
        #[arg(long, default_value_t = 6)]
        cols: usize,

        /// Number of body rows
        #[arg(long, default_value_t = 5)]
        body_rows: usize,

        /// Print the deep-sea observation example instead of a blank grid
        #[arg(long)]
        example: bool,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct PasteArgs {
    /// Input file path (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = PasteFormat::Latex)]
    format: PasteFormat,

    /// Cell delimiter of the input
    #[arg(short, long, default_value_t = '\t')]
    delimiter: char,

    /// Treat the first row as data instead of column labels
    #[arg(long)]
    no_header: bool,

    /// Use the first column as row labels
    #[arg(short, long)]
    index: bool,

    /// Table caption
    #[arg(short, long, default_value = "")]
    caption: String,

    /// Table label
    #[arg(short, long, default_value = "")]
    label: String,

    /// Float placement (h, t, b, p)
    #[arg(short, long, default_value = "h")]
    placement: Placement,

    /// Caption position (top or bottom)
    #[arg(long, default_value = "top")]
    caption_position: CaptionPosition,

    /// Center the first column too
    #[arg(long)]
    left_centered: bool,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct MergedArgs {
    /// Input JSON document (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = MergedFormat::Latex)]
    format: MergedFormat,

    /// Table caption
    #[arg(short, long, default_value = "")]
    caption: String,

    /// Table label
    #[arg(short, long, default_value = "")]
    label: String,

    /// Float placement (h, t, b, p); omitted by default or when blank
    #[arg(short, long, default_value = "")]
    placement: String,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum PasteFormat {
    /// LaTeX table environment
    Latex,
    /// Comma-separated values
    Csv,
    /// Standalone HTML document with the table
    Html,
    /// Tab-separated values
    Tsv,
}

#[cfg(feature = "cli")]
impl From<PasteFormat> for ExportFormat {
    fn from(format: PasteFormat) -> Self {
        match format {
            PasteFormat::Latex => ExportFormat::Latex,
            PasteFormat::Csv => ExportFormat::Csv,
            PasteFormat::Html => ExportFormat::Html,
            PasteFormat::Tsv => ExportFormat::Tsv,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum MergedFormat {
    /// LaTeX with multicolumn/multirow and booktabs rules
    Latex,
    /// HTML preview with colspan/rowspan
    Html,
}

#[cfg(feature = "cli")]
fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "tabtex=debug" } else { "tabtex=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match run(cli.command) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Paste(args) => {
            let content = read_input(args.input.as_deref())?;
            let table = parse_with_options(
                &content,
                &ParseOptions {
                    delimiter: args.delimiter,
                    first_row_as_header: !args.no_header,
                    first_column_as_index: args.index,
                },
            );
            if table.is_empty() {
                tracing::warn!("input has no data rows; output is empty");
            }

            let options = RenderOptions {
                caption: args.caption,
                label: args.label,
                placement: args.placement,
                caption_position: args.caption_position,
                left_centered: args.left_centered,
            };
            let result = export_table(&table, args.format.into(), &options)
                .context("failed to render table")?;
            write_output(args.output.as_deref(), &result)
        }

        Commands::Merged(args) => {
            let content = read_input(args.input.as_deref())?;
            let document = MergedTableDocument::from_json(&content)
                .context("failed to read merged-header document")?;

            let placement = Placement::parse_optional(&args.placement)?;
            let result = match args.format {
                MergedFormat::Latex => document.render_latex(&ComplexOptions {
                    caption: args.caption,
                    label: args.label,
                    placement,
                }),
                MergedFormat::Html => document.render_preview(),
            };
            write_output(args.output.as_deref(), &result)
        }

        Commands::Template {
            header_rows,
            cols,
            body_rows,
            example,
            output,
        } => {
            let document = if example {
                deep_sea_example()
            } else {
                blank_document(header_rows, cols, body_rows)
            };
            let json = document
                .to_json_pretty()
                .context("failed to serialize template")?;
            write_output(output.as_deref(), &json)
        }

        Commands::Info => {
            println!("tab2tex - Pasted tables and merged-header grids to LaTeX");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Subcommands:");
            println!("  paste     TSV/CSV text → LaTeX, CSV, HTML or TSV");
            println!("  merged    header/body JSON → booktabs LaTeX or HTML preview");
            println!("  template  blank or example merged-header JSON");
            println!();
            println!("LaTeX packages used by the output:");
            println!("  - booktabs (merged)");
            println!("  - multirow (merged)");
            println!("  - amsmath (\\text in header cells)");
            println!();
            Ok(())
        }
    }
}

/// Read a file, or stdin when no path is given
#[cfg(feature = "cli")]
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&Path>, result: &str) -> Result<()> {
    match path {
        Some(path) => {
            write_export(path, result)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            eprintln!("✓ Output written to: {}", path.display());
        }
        None => println!("{}", result),
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabtex --features cli");
    eprintln!("  tab2tex paste [OPTIONS] [INPUT_FILE]");
}
