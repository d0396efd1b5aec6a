//! planmark CLI - business plan report conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use planmark::convert::render_document;
use planmark::parser::build_many;
use planmark::{
    BuildOptions, ConversionStats, DocumentModel, JsonFormat, Metadata, NormalizeOptions,
    Normalizer, OutputFormat, RenderOptions, StrayLinePolicy,
};

#[derive(Parser)]
#[command(name = "planmark")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Normalize business plan reports and convert them to Markdown, text, JSON, and DOCX", long_about = None)]
struct Cli {
    /// Input file (sections JSON or Markdown)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a sections JSON file into Markdown
    Normalize {
        /// Sections JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Company name (extracted from the first section if not given)
        #[arg(short, long, env = "PLANMARK_COMPANY")]
        company: Option<String>,

        /// Report title
        #[arg(long, default_value = "Business Plan")]
        title: String,
    },

    /// Build the document model and render it in one format
    Build {
        /// Input file (sections JSON or Markdown)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (guessed from the output file if not given)
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Include YAML frontmatter in Markdown output
        #[arg(long)]
        frontmatter: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Handling of stray lines inside a table
        #[arg(long, value_enum, default_value = "close-table")]
        stray_lines: StrayLines,

        /// Treat `# ` lines as paragraphs
        #[arg(long)]
        no_title: bool,
    },

    /// Convert to all formats (Markdown, text, JSON, DOCX)
    Convert {
        /// Input file (sections JSON or Markdown)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert many files to one format
    Batch {
        /// Input files (sections JSON or Markdown)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "planmark_output")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: Format,
    },

    /// Show document information
    Info {
        /// Input file (sections JSON or Markdown)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Markdown
    Markdown,
    /// Plain text
    Text,
    /// JSON document model
    Json,
    /// Word document
    Docx,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputFormat::Markdown,
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
            Format::Docx => OutputFormat::Docx,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum StrayLines {
    /// A non-table line ends the table and is kept
    CloseTable,
    /// Plain text lines inside a table are discarded
    Drop,
}

impl From<StrayLines> for StrayLinePolicy {
    fn from(mode: StrayLines) -> Self {
        match mode {
            StrayLines::CloseTable => StrayLinePolicy::CloseTable,
            StrayLines::Drop => StrayLinePolicy::Drop,
        }
    }
}

/// Markdown loaded from an input file, with report metadata when the
/// input was a sections file.
struct Loaded {
    markdown: String,
    metadata: Option<Metadata>,
}

fn is_sections_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn load(input: &Path, normalizer: &Normalizer) -> Result<Loaded, Box<dyn std::error::Error>> {
    if !is_sections_file(input) {
        return Ok(Loaded {
            markdown: fs::read_to_string(input)?,
            metadata: None,
        });
    }

    let sections = planmark::read_sections(input)?;
    log::info!("Loaded {} sections from {}", sections.len(), input.display());
    let report = normalizer.normalize_report(&sections);
    Ok(Loaded {
        markdown: report.markdown,
        metadata: Some(report.metadata),
    })
}

fn build_document(loaded: &Loaded, options: BuildOptions) -> DocumentModel {
    let doc = planmark::build_with_options(&loaded.markdown, options);
    match &loaded.metadata {
        Some(metadata) => doc.with_metadata(metadata.clone()),
        None => doc,
    }
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = path {
        fs::write(path, bytes)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", String::from_utf8_lossy(bytes));
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Normalize {
            input,
            output,
            company,
            title,
        }) => cmd_normalize(&input, output.as_deref(), company.as_deref(), title),
        Some(Commands::Build {
            input,
            output,
            format,
            frontmatter,
            compact,
            stray_lines,
            no_title,
        }) => cmd_build(
            &input,
            output.as_deref(),
            format,
            frontmatter,
            compact,
            BuildOptions::new()
                .with_stray_lines(stray_lines.into())
                .with_title(!no_title),
        ),
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Batch {
            inputs,
            output,
            format,
        }) => cmd_batch(&inputs, &output, format.into()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: planmark <FILE> [OUTPUT]".yellow());
                println!("       planmark --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_normalize(
    input: &Path,
    output: Option<&Path>,
    company: Option<&str>,
    title: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let sections = planmark::read_sections(input)?;
    let normalizer = Normalizer::new(NormalizeOptions::new().with_title(title));

    let markdown = match company {
        Some(name) => normalizer.normalize(&sections, name),
        None => normalizer.normalize_sections(&sections),
    };

    write_output(output, markdown.as_bytes())
}

fn cmd_build(
    input: &Path,
    output: Option<&Path>,
    format: Option<Format>,
    frontmatter: bool,
    compact: bool,
    build_options: BuildOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let format: OutputFormat = match format {
        Some(f) => f.into(),
        None => output
            .and_then(OutputFormat::from_path)
            .unwrap_or(OutputFormat::Markdown),
    };
    if format.is_binary() && output.is_none() {
        return Err(planmark::Error::InvalidInput(format!(
            "{} output cannot be written to stdout, use --output",
            format.extension()
        ))
        .into());
    }

    let loaded = load(input, &Normalizer::default())?;
    let doc = build_document(&loaded, build_options);
    let render_options = RenderOptions::new().with_frontmatter(frontmatter);

    let bytes = if format == OutputFormat::Json && compact {
        planmark::render::to_json(&doc, JsonFormat::Compact)?.into_bytes()
    } else {
        render_document(&doc, format, &render_options)?
    };

    write_output(output, &bytes)
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let formats: Vec<OutputFormat> = OutputFormat::ALL
        .into_iter()
        .filter(OutputFormat::is_available)
        .collect();

    let pb = ProgressBar::new(formats.len() as u64 + 1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Building document...");
    let loaded = load(input, &Normalizer::default())?;
    let doc = build_document(&loaded, BuildOptions::default());
    pb.inc(1);

    let render_options = RenderOptions::new().with_frontmatter(true);
    let mut written = Vec::new();
    for format in formats {
        pb.set_message(format!("Generating {}...", format.extension()));
        let bytes = render_document(&doc, format, &render_options)?;
        let filename = format!("report.{}", format.extension());
        fs::write(output_dir.join(&filename), &bytes)?;
        written.push(filename);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, filename) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), filename);
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let normalizer = Normalizer::default();
    let loaded = inputs
        .iter()
        .map(|input| load(input, &normalizer))
        .collect::<Result<Vec<_>, _>>()?;

    let markdowns: Vec<&str> = loaded.iter().map(|l| l.markdown.as_str()).collect();
    let docs = build_many(&markdowns, &BuildOptions::default());

    let pb = ProgressBar::new(docs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let render_options = RenderOptions::new().with_frontmatter(true);
    let mut totals = ConversionStats::new();
    for ((input, doc), source) in inputs.iter().zip(docs).zip(&loaded) {
        let doc = match &source.metadata {
            Some(metadata) => doc.with_metadata(metadata.clone()),
            None => doc,
        };
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        pb.set_message(stem.to_string());

        let bytes = render_document(&doc, format, &render_options)?;
        fs::write(
            output_dir.join(format!("{}.{}", stem, format.extension())),
            &bytes,
        )?;
        totals.merge(&ConversionStats::from_document(&doc));
        pb.inc(1);
    }

    pb.finish_with_message("Done!");
    println!(
        "\n{} {} files, {} blocks, {} words",
        "Converted".green().bold(),
        inputs.len(),
        totals.block_count(),
        totals.word_count
    );

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load(input, &Normalizer::default())?;
    let doc = build_document(&loaded, BuildOptions::default());
    let stats = ConversionStats::from_document(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Company".bold(), author);
    }

    println!();
    println!("{}", "Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (level, text) in doc.headings() {
        let indent = "  ".repeat(level.saturating_sub(1) as usize);
        println!("{}{}", indent, text);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.block_count());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Bold paragraphs".bold(), stats.bold_paragraph_count);
    println!(
        "{}: {}",
        "List items".bold(),
        stats.bullet_count + stats.numbered_count
    );
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "planmark".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Business plan report conversion tool");
    println!();
    println!("License: MIT");
}
