use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use flagschema::args::Args;
use flagschema::config::Config;
use flagschema::logging::init_tracing;
use flagschema::report::ParseReport;

#[derive(Debug, Parser)]
#[command(name = "flagschema", version, about = "Parse flags against a compact schema")]
struct Cli {
    /// Schema such as "l,p#,d*" (overrides the configured default)
    #[arg(long)]
    schema: Option<String>,

    /// Path to a config file (default: ~/.config/flagschema/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Tokens to parse, usually after `--`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let schema = cli.schema.as_deref().unwrap_or(&config.defaults.schema);
    let args = Args::new(schema, &cli.tokens).context("Invalid schema")?;

    match cli.format {
        OutputFormat::Text => print_text(&args),
        OutputFormat::Json => println!("{}", ParseReport::from_args(&args).to_json()?),
    }

    if let Some(message) = args.try_error_message() {
        eprintln!("Error: {}", message);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_text(args: &Args) {
    println!("Usage : {}", args.usage());
    for def in args.schema().definitions() {
        if let Some(value) = args.get(def.id) {
            println!("{} : {}", def.id, value);
        }
    }
}
