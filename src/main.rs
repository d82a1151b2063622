use anyhow::Context;
use clap::{Parser, Subcommand};
use dispatch::server::{self, AppState, ResolvedJob};
use dispatch_core::{config::Config, JobTextParser, ParseResult};
use dispatch_lookup::{resolve_hints, HttpDirectory};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "dispatch", about = "Parse pasted bookings into dispatch job records")]
struct Cli {
    /// Write debug logs to /tmp/dispatch-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/dispatch/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a booking from FILE (or stdin) and print the result as JSON.
    Parse {
        file: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Parse a booking, then resolve its contractor/driver/vehicle hints.
    Resolve {
        file: Option<PathBuf>,
        /// Directory base URL; defaults to `[directory] base_url`.
        #[arg(long)]
        directory: Option<String>,
    },
    /// Serve the parser over HTTP.
    Serve {
        /// Listen address; defaults to `[server] addr`.
        #[arg(long)]
        addr: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    init_logging(cli.debug, default_level)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|_| Config::defaults()),
    };
    let parser = JobTextParser::new(&config.parser).context("invalid [parser] config")?;

    match cli.command {
        Command::Parse { file, pretty } => {
            let text = dispatch::read_input(file.as_deref())?;
            let result = parser.parse(&text);
            let json = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
            Ok(exit_code(&result))
        }
        Command::Resolve { file, directory } => {
            let base_url = directory
                .or(config.directory.base_url.clone())
                .context("no directory given; pass --directory or set [directory] base_url")?;
            let runtime = tokio::runtime::Runtime::new()?;
            let _guard = runtime.enter();
            let directory =
                HttpDirectory::new(&base_url, Duration::from_millis(config.directory.timeout_ms))?;

            let text = dispatch::read_input(file.as_deref())?;
            let record = match parser.parse(&text) {
                ParseResult::Data(record) => record,
                errors => {
                    println!("{}", serde_json::to_string_pretty(&errors)?);
                    return Ok(ExitCode::FAILURE);
                }
            };

            let hints = runtime.block_on(resolve_hints(&directory, &record))?;
            let job = ResolvedJob {
                data: record,
                hints,
            };
            println!("{}", serde_json::to_string_pretty(&job)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.server.addr.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            let _guard = runtime.enter();
            let directory = config
                .directory
                .base_url
                .as_deref()
                .map(|url| HttpDirectory::new(url, Duration::from_millis(config.directory.timeout_ms)))
                .transpose()?;
            if directory.is_none() {
                tracing::info!("no [directory] base_url configured, hint resolution disabled");
            }

            let state = Arc::new(AppState { parser, directory });
            runtime.block_on(server::serve(&addr, state))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(result: &ParseResult) -> ExitCode {
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(debug: bool, default_level: &str) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/dispatch-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("dispatch debug log started, tail -f /tmp/dispatch-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
            )
            .init();
    }
    Ok(())
}
