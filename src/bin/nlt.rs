//! nlt CLI - Reformat tabular data into natural language

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use nlt::{
    files::write_lines, run, ConversionResult, FormatterKind, ParserKind, RunConfig,
    DEFAULT_CONFIG_PATH, LASTRUN_PATH, PLACEHOLDERS,
};
#[cfg(feature = "cli")]
use tracing::info;
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "nlt")]
#[command(version)]
#[command(about = "Reformat tabular data into natural language", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Location of the config file (JSON, or TOML/YAML by extension)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Use lastrun.json for the current run
    #[arg(short, long)]
    lastrun: bool,

    /// Print sentences to stdout instead of the configured outfile
    #[arg(long)]
    stdout: bool,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List the available formatters and parsers
    List,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Some(Commands::List) = cli.command {
        print_variants();
        return;
    }

    if let Err(e) = convert(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over the verbosity flags
#[cfg(feature = "cli")]
fn init_logging(quiet: bool, verbose: u8) {
    let level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nlt={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(feature = "cli")]
fn convert(cli: &Cli) -> ConversionResult<()> {
    let config_path = if cli.lastrun {
        LASTRUN_PATH
    } else {
        cli.config.as_str()
    };
    info!(path = config_path, "reading config");
    let config = RunConfig::load(config_path)?;

    let output = run(&config)?;

    for warning in &output.warnings {
        eprintln!("{}", warning);
    }
    if cli.strict && output.has_warnings() {
        return Err(nlt::ConversionError::invalid(format!(
            "{} conversion warning(s) in strict mode",
            output.warnings.len()
        )));
    }

    if cli.stdout || config.config.outfile.is_empty() {
        println!("{}", output.text());
    } else {
        write_lines(&config.config.outfile, &output.lines)?;
        info!(outfile = %config.config.outfile, "output written");
    }

    config.save_lastrun(LASTRUN_PATH)?;
    Ok(())
}

#[cfg(feature = "cli")]
fn print_variants() {
    println!("Formatters:");
    for kind in FormatterKind::ALL {
        println!("  {:<18} {}", kind.name(), kind.shape());
    }
    println!();
    println!("Parsers:");
    for kind in ParserKind::ALL {
        println!("  {}", kind.name());
    }
    println!();
    println!("Template placeholders:");
    println!(
        "  {}",
        PLACEHOLDERS
            .iter()
            .map(|p| format!("{{{}}}", p))
            .collect::<Vec<_>>()
            .join(" ")
    );
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install nlt --features cli");
    eprintln!("  nlt [-c CONFIG] [-l]");
}
