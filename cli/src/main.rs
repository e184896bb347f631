use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use graphql2sadl_core::config::DEFAULT_SCHEMA_NAME;
use graphql2sadl_core::{convert, decompile, RootTypeScan, TranslateOptions};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "graphql2sadl")]
#[command(about = "Translate a GraphQL SDL schema into SADL")]
#[command(version)]
struct Cli {
    /// Input GraphQL SDL file
    input: PathBuf,

    /// Print the SADL JSON model instead of SADL source
    #[arg(short, long)]
    json: bool,

    /// JSON layout (only with --json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Output file (defaults to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Name of the generated schema
    #[arg(long, default_value = DEFAULT_SCHEMA_NAME)]
    name: String,

    /// When operation root types named in `schema { ... }` are collected
    #[arg(long, value_enum, default_value_t = RootTypesArg::Upfront)]
    root_types: RootTypesArg,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum RootTypesArg {
    Upfront,
    InOrder,
}

impl From<RootTypesArg> for RootTypeScan {
    fn from(val: RootTypesArg) -> Self {
        match val {
            RootTypesArg::Upfront => RootTypeScan::Upfront,
            RootTypesArg::InOrder => RootTypeScan::InOrder,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the schema.
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let sdl = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read input file: {}", cli.input.display()))?;

    let options = TranslateOptions {
        schema_name: cli.name,
        root_types: cli.root_types.into(),
    };

    let schema = convert(&sdl, &options)
        .map_err(|e| anyhow::Error::from(e).context("Conversion failed"))?;

    tracing::debug!(types = schema.types.len(), "writing schema");
    let mut writer = open_output(cli.output.as_ref())?;
    if cli.json {
        write_json(&schema, &mut writer, cli.format)?;
    } else {
        write!(writer, "{}", decompile(&schema)).context("Failed to write SADL")?;
    }
    writer.flush().context("Failed to flush output")?;

    Ok(())
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    Ok(writer)
}

fn write_json<T: serde::Serialize>(
    val: &T,
    writer: &mut dyn Write,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut *writer, val).context("Failed to write JSON")?;
        }
    }

    // Ensure trailing newline
    writeln!(writer).context("Failed to write trailing newline")?;

    Ok(())
}
