use anyhow::{Context, Result};
use bionic_reader_config::Config;
use bionic_reader_engine::{
    FixationControl, FormatSettings, HtmlRenderer, Intensity, PlainRenderer, Renderer,
    StructureReport, analyze, format, render_page,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Headings listed in the analysis summary before the rest are counted.
const OUTLINE_PREVIEW: usize = 5;

#[derive(Parser)]
#[command(name = "bionic-reader")]
#[command(about = "Analyze text structure and render it for bionic reading")]
struct Cli {
    /// Config file (defaults to ~/.config/bionic-reader/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print an outline with word count and reading time
    Analyze {
        /// Input text file, or `-` for stdin
        input: Option<PathBuf>,
    },
    /// Emphasize the leading characters of each word
    Format {
        /// Input text file, or `-` for stdin
        input: Option<PathBuf>,

        /// Percentage of each word to emphasize (25-75, step 5)
        #[arg(short, long)]
        intensity: Option<u8>,

        /// Emphasis style: bold, highlight or off
        #[arg(short, long)]
        fixation: Option<FixationControl>,

        /// Opacity of emphasized characters (10-100)
        #[arg(long)]
        opacity: Option<u8>,

        /// Emphasize every Nth word (1-3)
        #[arg(long)]
        frequency: Option<u8>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        output: OutputFormat,
    },
    /// Write a config file with default settings
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Annotated markup, one line per input line
    Html,
    /// Text only, with whitespace runs collapsed
    Plain,
    /// Standalone HTML page styled from the config
    Page,
}

fn read_input(input: Option<&Path>) -> Result<String> {
    let text = match input {
        None => read_stdin()?,
        Some(path) if path == Path::new("-") => read_stdin()?,
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
    };
    Ok(strip_bom(text))
}

/// Drops a leading UTF-8 byte order mark so it doesn't end up in the first word.
fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

/// Applies command-line overrides on top of the configured settings.
fn override_settings(
    current: FormatSettings,
    fixation: Option<FixationControl>,
    opacity: Option<u8>,
    frequency: Option<u8>,
) -> Result<FormatSettings> {
    Ok(FormatSettings::from_raw(
        fixation.unwrap_or(current.fixation_control),
        opacity.unwrap_or(current.opacity_level.get()),
        frequency.unwrap_or(current.fixation_frequency.get()),
    )?)
}

fn print_report(report: &StructureReport) {
    println!("Words:        {}", report.total_words);
    println!("Reading time: {} min", report.reading_time);
    println!("Headings:     {}", report.headings.len());

    let (shown, rest) = report.outline_preview(OUTLINE_PREVIEW);
    for heading in shown {
        let indent = "  ".repeat(usize::from(heading.level));
        println!("{indent}{}", heading.text);
    }
    if rest > 0 {
        println!("  ...and {rest} more");
    }

    println!("Paragraphs:   {}", report.paragraphs.len());
    println!("Lists:        {}", report.lists.len());
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config_path = Config::expand_path(&config_path).unwrap_or(config_path);

    match cli.command {
        Command::Analyze { input } => {
            let text = read_input(input.as_deref())?;
            print_report(&analyze(&text));
        }
        Command::Format {
            input,
            intensity,
            fixation,
            opacity,
            frequency,
            output,
        } => {
            let mut config = Config::load_or_default(&config_path)?;
            if let Some(value) = intensity {
                config.intensity = Intensity::new(value)?;
            }
            config.reading.format =
                override_settings(config.reading.format, fixation, opacity, frequency)?;

            let text = read_input(input.as_deref())?;
            let doc = format(&text, config.intensity, config.reading.format);
            let rendered = match output {
                OutputFormat::Html => HtmlRenderer.render(&doc),
                OutputFormat::Plain => PlainRenderer.render(&doc),
                OutputFormat::Page => render_page(&doc, &config.reading),
            };
            println!("{rendered}");
        }
        Command::InitConfig { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::default().save_to_path(&config_path)?;
            log::info!("Wrote default config to {}", config_path.display());
        }
    }

    Ok(())
}
