//! starmap CLI - Word Star Charts
//!
//! Thin wrapper over the library: forge stars from words, draw the chart,
//! inspect a single star or read the guide.

// Exclude from coverage - CLI binary tested via integration tests
#![cfg_attr(tarpaulin, ignore)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use starmap::formats::{save_reports, BatchReport, ChartWriter, TextReportWriter};
use starmap::{parse_word_list, Charset, StarForge, StarmapConfig, Theme};

/// ✨ Word Starmap: every word is a star.
///
/// Hashes words into reproducible points of a synthetic sky and draws them
/// as a text star chart.
#[derive(Parser, Debug)]
#[command(name = "starmap")]
#[command(version = starmap::VERSION)]
#[command(about = "✨ Word Starmap: every word is a star")]
#[command(after_help = "EXAMPLES:
  # Chart a few words
  starmap chart sun moon comet

  # Words from a file (comma or newline separated), saved as JSON + text
  starmap chart --input words.txt --save

  # Everything about one star
  starmap inspect hello

  # How to read coordinates and magnitudes
  starmap guide
")]
struct Cli {
    /// Config file path (default: ./.starmap.json if present)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Character encoding for words: utf-8, ascii or latin1
    #[arg(
        long = "charset",
        value_name = "CHARSET",
        value_parser = Charset::parse,
        global = true
    )]
    charset: Option<Charset>,

    /// Chart width in cells (2-1000)
    #[arg(long = "width", value_name = "CELLS", global = true)]
    width: Option<usize>,

    /// Chart height in cells (2-1000)
    #[arg(long = "height", value_name = "CELLS", global = true)]
    height: Option<usize>,

    /// ASCII-only glyphs and borders
    #[arg(long = "plain", global = true)]
    plain: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Forge stars for a list of words and draw the chart
    Chart {
        /// Words (commas also separate words)
        #[arg(value_name = "WORD")]
        words: Vec<String>,

        /// Read words from a file
        #[arg(short = 'i', long = "input", value_name = "FILE")]
        input: Option<PathBuf>,

        /// Save the JSON and text reports
        #[arg(short = 's', long = "save")]
        save: bool,

        /// Directory for saved reports
        #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Print the batch report as JSON instead of the chart
        #[arg(long = "json")]
        json: bool,
    },

    /// Show everything about the star of one word
    Inspect {
        /// The word to analyze
        word: String,
    },

    /// Explain coordinates, magnitudes and colors
    Guide,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = build_config(&cli)?;
    let forge = StarForge::new(config);

    match cli.command {
        Commands::Chart {
            words,
            input,
            save,
            output_dir,
            json,
        } => run_chart(&forge, words, input, save, output_dir, json),
        Commands::Inspect { word } => run_inspect(&forge, &word),
        Commands::Guide => {
            let mut writer = TextReportWriter::new(io::stdout().lock());
            writer.write_guide(forge.catalog())?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// Config file (explicit or discovered), then CLI overrides.
fn build_config(cli: &Cli) -> anyhow::Result<StarmapConfig> {
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow!("reading working directory: {}", e))?;
    let mut config = StarmapConfig::discover(cli.config.as_deref(), &cwd)?;

    if let Some(charset) = cli.charset {
        config.charset = charset;
    }
    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }
    if cli.plain {
        config.theme = Theme::Plain;
    }

    config.validate()?;
    Ok(config)
}

fn run_chart(
    forge: &StarForge,
    args: Vec<String>,
    input: Option<PathBuf>,
    save: bool,
    output_dir: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let mut words: Vec<String> = args.iter().flat_map(|a| parse_word_list(a)).collect();
    if let Some(path) = input {
        let text = fs::read_to_string(&path)
            .map_err(|e| anyhow!("reading words from {}: {}", path.display(), e))?;
        words.extend(parse_word_list(&text));
    }
    if words.is_empty() {
        bail!("no words given; pass words or --input FILE");
    }

    let records = forge.forge_all(&words)?;
    let config = forge.config();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let report = BatchReport::new(
            chrono::Local::now(),
            &words,
            &records,
            forge.catalog(),
            config.binary_preview_bits,
        );
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        let mut text = TextReportWriter::new(&mut out);
        for record in &records {
            text.write_star_summary(record)?;
        }

        let grid = forge.chart(&records);
        let mut chart = ChartWriter::new(&mut out, config.theme);
        chart.write_chart(&grid)?;
        chart.write_legend()?;
        chart.flush()?;
    }

    if save {
        let dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
        let saved = save_reports(
            &dir,
            &words,
            &records,
            forge.catalog(),
            config.binary_preview_bits,
        )?;
        eprintln!("Star map saved to: {}", saved.json.display());
        eprintln!("Text report saved to: {}", saved.text.display());
    }
    Ok(())
}

fn run_inspect(forge: &StarForge, word: &str) -> anyhow::Result<()> {
    let word = word.trim();
    if word.is_empty() {
        bail!("the word cannot be empty");
    }
    let record = forge.forge(word, 1)?;
    let mut writer = TextReportWriter::new(io::stdout().lock());
    writer.write_inspection(&record)?;
    writer.flush()?;
    Ok(())
}
