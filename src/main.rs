use anyhow::Context;
use clap::Parser;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mixtrace",
    version,
    about = "Turn a mixer trace log into a chronological CSV event table"
)]
struct Cli {
    /// Trace log to read. Reads stdin when omitted.
    log: Option<PathBuf>,

    /// TOML file overriding the built-in settings.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Diagnostics on stderr: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write diagnostics to FILE instead of stderr.
    #[arg(long, value_name = "FILE")]
    debug_log: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.debug_log.as_deref())?;

    let config = match &cli.config {
        Some(path) => mixtrace::Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => mixtrace::Config::defaults(),
    };

    let stdout = std::io::stdout().lock();
    let outcome = match &cli.log {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            mixtrace::run(BufReader::new(file), stdout, &config)
        }
        None => mixtrace::run(std::io::stdin().lock(), stdout, &config),
    }?;

    tracing::debug!(?outcome, "done");
    Ok(())
}

fn init_tracing(verbose: u8, debug_log: Option<&std::path::Path>) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match debug_log {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening debug log {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }
    Ok(())
}
