//! encodesniff CLI - detect the character encoding of a byte stream.

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use serde::Serialize;

#[cfg(feature = "cli")]
use encodesniff::{detect, detect_multiple, registry, Confidence};

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI features disabled. Enable with --features cli");
    std::process::exit(1);
}

/// encodesniff: statistical and structural character-encoding detection.
#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "encodesniff")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (prints probe progress to stderr).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Detect the encoding of a file or stdin.
    Detect(DetectArgs),
    /// List known encodings.
    List(ListArgs),
    /// Show details for a single encoding.
    Info(InfoArgs),
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct DetectArgs {
    /// Input file. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Report every candidate the probes agreed on, not just the best one.
    #[arg(short, long)]
    all: bool,

    /// Only read up to this many bytes from the input before detecting.
    #[arg(long)]
    max_bytes: Option<usize>,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ListArgs {
    /// List every registry entry instead of only the common ones.
    #[arg(short, long)]
    all: bool,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct InfoArgs {
    /// Codepage number or registry name (e.g. "950" or "Big5").
    encoding: String,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct DetectionReport {
    codepage: u32,
    confidence: &'static str,
    encoding_name: String,
    display_name: String,
}

#[cfg(feature = "cli")]
impl DetectionReport {
    fn from_result(r: encodesniff::EncodingResult) -> Self {
        Self {
            codepage: r.codepage,
            confidence: confidence_label(r.confidence),
            encoding_name: r.encoding_name.to_string(),
            display_name: registry::display_name(r.codepage),
        }
    }
}

#[cfg(feature = "cli")]
fn confidence_label(c: Confidence) -> &'static str {
    match c {
        Confidence::None => "none",
        Confidence::Low => "low",
        Confidence::Medium => "medium",
        Confidence::High => "high",
        Confidence::Certain => "certain",
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Detect(args) => detect_command(args, cli.format, cli.verbose),
        Commands::List(args) => list_command(args, cli.format),
        Commands::Info(args) => info_command(args, cli.format),
    }
}

#[cfg(feature = "cli")]
fn read_input(file: &Option<PathBuf>, max_bytes: Option<usize>, verbose: bool) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match file {
        Some(path) => {
            if verbose {
                eprintln!("reading {}", path.display());
            }
            let data = fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            buf = data;
        }
        None => {
            if verbose {
                eprintln!("reading stdin");
            }
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
        }
    }
    if let Some(max) = max_bytes {
        buf.truncate(max);
    }
    Ok(buf)
}

#[cfg(feature = "cli")]
fn detect_command(args: &DetectArgs, format: OutputFormat, verbose: bool) -> Result<()> {
    let data = read_input(&args.file, args.max_bytes, verbose)?;
    if verbose {
        eprintln!("{} bytes read, running detection cascade", data.len());
    }

    if args.all {
        let results: Vec<DetectionReport> = detect_multiple(&data)
            .into_iter()
            .map(DetectionReport::from_result)
            .collect();
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
            OutputFormat::Text => {
                for r in &results {
                    println!(
                        "{}  codepage={}  confidence={}  ({})",
                        r.encoding_name, r.codepage, r.confidence, r.display_name
                    );
                }
            }
        }
    } else {
        let report = DetectionReport::from_result(detect(&data));
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => println!(
                "{}  codepage={}  confidence={}  ({})",
                report.encoding_name, report.codepage, report.confidence, report.display_name
            ),
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn list_command(args: &ListArgs, format: OutputFormat) -> Result<()> {
    let entries: Vec<&registry::EncodingInfo> = if args.all {
        registry::all().iter().collect()
    } else {
        registry::common().collect()
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries.iter().map(|e| {
            serde_json::json!({
                "codepage": e.codepage,
                "name": e.name,
                "display_name": e.display_name,
                "is_common": e.is_common,
            })
        }).collect::<Vec<_>>())?),
        OutputFormat::Text => {
            for e in entries {
                println!("{:>6}  {:<16} {}", e.codepage, e.name, e.display_name);
            }
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn info_command(args: &InfoArgs, format: OutputFormat) -> Result<()> {
    let codepage = args
        .encoding
        .parse::<u32>()
        .unwrap_or_else(|_| registry::codepage_by_name(&args.encoding));

    let entry = registry::info(codepage)
        .with_context(|| format!("unknown encoding: {}", args.encoding))?;

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "codepage": entry.codepage,
                "name": entry.name,
                "display_name": entry.display_name,
                "is_common": entry.is_common,
            })
        ),
        OutputFormat::Text => {
            println!("codepage:     {}", entry.codepage);
            println!("name:         {}", entry.name);
            println!("display name: {}", entry.display_name);
            println!("common:       {}", entry.is_common);
        }
    }
    Ok(())
}
