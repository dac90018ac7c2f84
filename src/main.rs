/*!
 * Air-Easy CLI - Command Line Interface
 *
 * Without a subcommand this runs the interactive booking session. The
 * `flights` subcommand prints the listing for a route and exits.
 */

use air_easy::{
    cli_style,
    config::{AppConfig, LogLevel},
    error::{AirEasyError, Result, EXIT_SUCCESS},
    logging,
    output::{sanitize_error, OutputWriter},
    session::{Session, TerminalPrompt},
    source::{load_ledger, FileSource, FlightSource, Route},
};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "air-easy")]
#[command(version, long_about = None)]
#[command(about = "Terminal flight booking: search a route, book or cancel a seat")]
struct Cli {
    /// Path to config file (default: ~/.air-easy/air-easy.toml if present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Read flight data from a saved payload instead of running the fetch command
    #[arg(long, value_name = "FILE", global = true)]
    payload: Option<PathBuf>,

    /// Program used to fetch flights (overrides the config file)
    #[arg(long, value_name = "PROGRAM", global = true)]
    fetch_command: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevelArg>,

    /// Path to log file (default: stderr)
    #[arg(long, value_name = "FILE", global = true)]
    log: Option<PathBuf>,

    /// Enable verbose logging (equivalent to --log-level=debug)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the flights for a route without booking
    Flights {
        /// Origin airport code
        #[arg(long = "from", value_name = "CODE")]
        origin: String,

        /// Destination airport code
        #[arg(long = "to", value_name = "CODE")]
        destination: String,

        /// Output the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

fn main() {
    let code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!(category = %e.category(), error = %e, "air-easy failed");
            cli_style::print_error(&sanitize_error(&e.to_string()), e.suggestion());
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;

    // Override config with CLI arguments
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    if cli.log.is_some() {
        config.log_file = cli.log.clone();
    }
    config.verbose |= cli.verbose;
    if let Some(program) = cli.fetch_command.clone() {
        config.fetch_program = program;
    }

    if let Err(e) = logging::init_logging(&config) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    debug!(?config, "configuration resolved");

    let source = flight_source(&cli, &config);

    match cli.command {
        Some(Commands::Flights {
            origin,
            destination,
            json,
        }) => list_flights(source.as_ref(), Route::new(origin, destination), json),
        None => {
            let stdout = io::stdout();
            let mut session = Session::new(TerminalPrompt::new(), stdout.lock());
            session.run(source.as_ref())?;
            Ok(())
        }
    }
}

fn flight_source(cli: &Cli, config: &AppConfig) -> Box<dyn FlightSource> {
    match &cli.payload {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(config.command_source()),
    }
}

fn list_flights(source: &dyn FlightSource, route: Route, json: bool) -> Result<()> {
    if route.origin.trim().is_empty() || route.destination.trim().is_empty() {
        return Err(AirEasyError::Config(
            "Both --from and --to need an airport code".to_string(),
        ));
    }

    let ledger = load_ledger(source, &route);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    OutputWriter::new(json).flight_listing(&mut out, &route, ledger.list())
}
