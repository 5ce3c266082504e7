//! unscan CLI - OCR layout reconstruction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unscan::{
    Alignment, Block, Document, JsonFormat, LayoutOptions, RenderOptions, Unscan, UnscanResult,
};

#[derive(Parser)]
#[command(name = "unscan")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Rebuild OCR output into Markdown, text, HTML, and JSON", long_about = None)]
struct Cli {
    /// Input hOCR file
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
    /// Convert to all formats (Markdown, text, HTML, JSON)
    Convert {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert to Markdown
    #[command(alias = "md")]
    Markdown {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Maximum heading level (1-9)
        #[arg(long, default_value = "9")]
        max_heading: u8,

        /// Omit empty spacer lines
        #[arg(long)]
        no_blank: bool,
    },

    /// Convert to plain text
    Text {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit empty spacer lines
        #[arg(long)]
        no_blank: bool,
    },

    /// Convert to an HTML preview fragment
    Html {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Use class names instead of inline styles
        #[arg(long)]
        no_inline_styles: bool,
    },

    /// Convert to JSON
    Json {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document structure statistics
    Info {
        #[command(flatten)]
        source: SourceArgs,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

/// Input file and layout thresholds shared by every conversion command.
#[derive(Args)]
struct SourceArgs {
    /// Input file (hOCR, or Markdown with --from-markdown)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Treat the input as Markdown instead of hOCR
    #[arg(long)]
    from_markdown: bool,

    /// Vertical distance in pixels within which words share a line
    #[arg(long, env = "UNSCAN_LINE_TOLERANCE", default_value = "12")]
    line_tolerance: u32,

    /// Left edge in pixels beyond which a line counts as centered
    #[arg(long, env = "UNSCAN_LEFT_MARGIN", default_value = "90")]
    left_margin: u32,

    /// Line height over median height that marks a heading
    #[arg(long, default_value = "1.3")]
    heading_ratio: f64,

    /// Vertical gap over median height that inserts a spacer
    #[arg(long, default_value = "1.5")]
    gap_ratio: f64,

    /// Process pages one after another
    #[arg(long)]
    sequential: bool,
}

impl SourceArgs {
    fn layout_options(&self) -> LayoutOptions {
        let options = LayoutOptions::new()
            .with_line_tolerance(self.line_tolerance)
            .with_left_margin(self.left_margin)
            .with_heading_ratio(self.heading_ratio)
            .with_paragraph_gap_ratio(self.gap_ratio);

        if self.sequential {
            options.sequential()
        } else {
            options
        }
    }

    fn load(
        &self,
        render_options: RenderOptions,
    ) -> Result<UnscanResult, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(&self.input)?;
        let unscan = Unscan::new()
            .with_layout_options(self.layout_options())
            .with_render_options(render_options);

        let result = if self.from_markdown {
            unscan.markdown(&content)
        } else {
            unscan.hocr(&content)
        };

        result.map_err(|e| -> Box<dyn std::error::Error> {
            if e.is_empty_input() {
                "No text detected.".into()
            } else {
                e.into()
            }
        })
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { source, output }) => cmd_convert(&source, output.as_deref()),
        Some(Commands::Markdown {
            source,
            output,
            max_heading,
            no_blank,
        }) => cmd_markdown(&source, output.as_deref(), max_heading, no_blank),
        Some(Commands::Text {
            source,
            output,
            no_blank,
        }) => cmd_text(&source, output.as_deref(), no_blank),
        Some(Commands::Html {
            source,
            output,
            no_inline_styles,
        }) => cmd_html(&source, output.as_deref(), no_inline_styles),
        Some(Commands::Json {
            source,
            output,
            compact,
        }) => cmd_json(&source, output.as_deref(), compact),
        Some(Commands::Info { source, json }) => cmd_info(&source, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                let source = SourceArgs {
                    input,
                    from_markdown: false,
                    line_tolerance: 12,
                    left_margin: 90,
                    heading_ratio: 1.3,
                    gap_ratio: 1.5,
                    sequential: false,
                };
                cmd_convert(&source, cli.output.as_deref())
            } else {
                println!("{}", "Usage: unscan <FILE> [OUTPUT]".yellow());
                println!("       unscan --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    source: &SourceArgs,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = source.input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reconstructing layout...");
    let result = source.load(RenderOptions::new())?;
    pb.inc(1);

    pb.set_message("Generating Markdown...");
    write_output(&output_dir.join("extract.md"), &result.to_markdown()?)?;
    pb.inc(1);

    pb.set_message("Generating text and HTML...");
    write_output(&output_dir.join("extract.txt"), &result.to_text()?)?;
    write_output(&output_dir.join("preview.html"), &result.to_html()?)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    write_output(
        &output_dir.join("content.json"),
        &result.to_json(JsonFormat::Pretty)?,
    )?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} extract.md", "├─".dimmed());
    println!("  {} extract.txt", "├─".dimmed());
    println!("  {} preview.html", "├─".dimmed());
    println!("  {} content.json", "└─".dimmed());

    Ok(())
}

fn cmd_markdown(
    source: &SourceArgs,
    output: Option<&Path>,
    max_heading: u8,
    no_blank: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let render_options = RenderOptions::new()
        .with_max_heading(max_heading)
        .with_blank_blocks(!no_blank);
    let markdown = source.load(render_options)?.to_markdown()?;
    emit(output, &markdown)
}

fn cmd_text(
    source: &SourceArgs,
    output: Option<&Path>,
    no_blank: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let render_options = RenderOptions::new().with_blank_blocks(!no_blank);
    let text = source.load(render_options)?.to_text()?;
    emit(output, &text)
}

fn cmd_html(
    source: &SourceArgs,
    output: Option<&Path>,
    no_inline_styles: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let render_options = RenderOptions::new().with_preview_styles(!no_inline_styles);
    let html = source.load(render_options)?.to_html()?;
    emit(output, &html)
}

fn cmd_json(
    source: &SourceArgs,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = source.load(RenderOptions::new())?.to_json(format)?;
    emit(output, &json)
}

fn cmd_info(source: &SourceArgs, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = source.load(RenderOptions::new())?.into_document();
    let stats = DocumentStats::collect(&doc);

    if as_json {
        let kind = if source.from_markdown { "markdown" } else { "hocr" };
        let value = serde_json::json!({
            "file": source.input.display().to_string(),
            "source": kind,
            "blocks": stats.blocks,
            "headings": stats.headings,
            "paragraphs": stats.paragraphs,
            "centered": stats.centered,
            "spacers": stats.spacers,
            "words": stats.words,
            "characters": stats.characters,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), source.input.display());
    println!(
        "{}: {}",
        "Source".bold(),
        if source.from_markdown { "Markdown" } else { "hOCR" }
    );

    println!();
    println!("{}", "Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Blocks".bold(), stats.blocks);
    println!("{}: {}", "Headings".bold(), stats.headings);
    println!(
        "{}: {} ({} centered)",
        "Paragraphs".bold(),
        stats.paragraphs,
        stats.centered
    );
    println!("{}: {}", "Spacers".bold(), stats.spacers);
    println!("{}: {}", "Words".bold(), stats.words);
    println!("{}: {}", "Characters".bold(), stats.characters);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unscan".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("OCR layout reconstruction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unscan".dimmed());
    println!("License: MIT");
}

/// Block and word counts shown by `info`.
#[derive(Debug, Default, PartialEq, Eq)]
struct DocumentStats {
    blocks: usize,
    headings: usize,
    paragraphs: usize,
    centered: usize,
    spacers: usize,
    words: usize,
    characters: usize,
}

impl DocumentStats {
    fn collect(doc: &Document) -> Self {
        let text = doc.plain_text();
        Self {
            blocks: doc.block_count(),
            headings: doc.heading_count(),
            paragraphs: doc.paragraph_count(),
            centered: doc
                .iter()
                .filter(|b| {
                    matches!(b, Block::Paragraph(p) if p.alignment == Alignment::Center)
                })
                .count(),
            spacers: doc.iter().filter(|b| b.is_blank()).count(),
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
        }
    }
}

fn emit(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        write_output(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn write_output(path: &Path, content: &str) -> std::io::Result<()> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());
    fs::write(path, content)
}
