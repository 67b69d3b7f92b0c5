//! n64 command line

use clap::{Parser, Subcommand};
use n64::config::{Config, ConfigError};
use n64::repl::Repl;
use n64::script::{ScriptError, Session, report_error};
use n64::{Mode, N64};
use std::env;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "n64", version, about = "64-bit integer calculator")]
struct Cli {
    /// Config file (defaults to $N64_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive prompt (the default)
    Repl,
    /// Run a script file
    Run {
        /// Script to run
        file: PathBuf,
    },
    /// Evaluate a script given on the command line
    Eval {
        source: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-encode an integer in another base
    Convert {
        value: String,
        /// Base of the input
        #[arg(long, default_value_t = 10)]
        from: u32,
        /// Base of the output (defaults to the configured radix)
        #[arg(long)]
        to: Option<u32>,
        /// Read the input as signed
        #[arg(long)]
        signed: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Already shown to the user
    #[error("script failed")]
    Reported,
    #[error("invalid N64_LOG_WITH_TIME precision, expected one of [s, ms, us, ns], got '{0}'")]
    LogPrecision(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Value(#[from] n64::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() {
    let result = init_logger().and_then(|()| {
        let cli = Cli::parse();
        run(cli)
    });

    match result {
        Ok(()) => {}
        Err(CliError::Reported) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn init_logger() -> Result<(), CliError> {
    let mut builder = env_logger::Builder::from_env("N64_LOG");
    builder.format_indent(Some(2));
    if let Ok(precision) = env::var("N64_LOG_WITH_TIME") {
        match precision.as_str() {
            "s" => builder.format_timestamp_secs(),
            "ms" => builder.format_timestamp_millis(),
            "us" => builder.format_timestamp_micros(),
            "ns" => builder.format_timestamp_nanos(),
            _ => return Err(CliError::LogPrecision(precision)),
        };
    } else {
        builder.format_timestamp(None);
    }
    builder.init();
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::load(cli.config.as_deref())?;
    log::debug!("config: {config:?}");

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => Repl::new(config)?.run()?,
        Command::Run { file } => run_file(&file, &config)?,
        Command::Eval { source, json } => eval_source("<eval>", &source, &config, json)?,
        Command::Convert {
            value,
            from,
            to,
            signed,
        } => {
            let mode = if signed { Mode::Signed } else { config.mode() };
            let n = N64::from_str_mode(&value, mode, from)?;
            println!("{}", n.to_string_radix(to.unwrap_or(config.radix))?);
        }
    }

    Ok(())
}

fn run_file(path: &Path, config: &Config) -> Result<(), CliError> {
    let source = std::fs::read_to_string(path)?;
    let filename = path.display().to_string();
    eval_source(&filename, &source, config, false)
}

fn eval_source(filename: &str, source: &str, config: &Config, json: bool) -> Result<(), CliError> {
    let mut session = Session::with_mode(config.mode());
    match session.eval(source) {
        Ok(value) if json => println!("{}", serde_json::to_string(&value)?),
        Ok(Some(value)) => println!("{}", value.render(config.radix)),
        Ok(None) => {}
        Err(err) => return Err(report(filename, source, &err)),
    }
    Ok(())
}

fn report(filename: &str, source: &str, err: &ScriptError) -> CliError {
    match report_error(filename, source, err) {
        Ok(()) => CliError::Reported,
        Err(io) => io.into(),
    }
}
