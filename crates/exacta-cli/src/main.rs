//! exacta command-line harness.
//!
//! Runs any registered operation of the arithmetic tower on literal
//! arguments and prints the result as text or JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::debug;
use serde::Serialize;

use exacta::ops::{self, Domain, Operation};

#[derive(Parser)]
#[command(
    name = "exacta",
    version = env!("CARGO_PKG_VERSION"),
    about = "Exact arithmetic on naturals, integers, rationals and polynomials",
    after_help = r#"
Examples:
  exacta run natural gcd 48 18             # 6
  exacta run rational add 1/2 1/3          # 5/6
  exacta run polynomial div x^2-1 x-1      # x + 1
  exacta --output json run integer rem -7 2
  exacta list polynomial

Environment Variables:
  EXACTA_LOG_LEVEL=debug      Set log level (error, warn, info, debug, trace)
  EXACTA_OUTPUT=json          Output format (text, json)
"#
)]
#[command(propagate_version = true)]
struct Cli {
    /// Set log level
    #[arg(long, value_enum, env = "EXACTA_LOG_LEVEL", default_value = "warn", value_parser = parse_log_level_env)]
    log_level: LogLevel,

    /// Output format
    #[arg(long, value_enum, env = "EXACTA_OUTPUT", default_value = "text")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one operation on literal arguments
    Run {
        /// Domain: natural, integer, rational or polynomial
        domain: String,

        /// Operation name, see `exacta list`
        name: String,

        /// Literal arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List the available operations
    List {
        /// Only list operations of this domain
        domain: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct RunRecord<'a> {
    operation: String,
    inputs: &'a [String],
    result: String,
}

#[derive(Serialize)]
struct OperationRecord {
    domain: &'static str,
    name: &'static str,
    arity: usize,
    description: &'static str,
}

impl From<&Operation> for OperationRecord {
    fn from(op: &Operation) -> Self {
        Self {
            domain: op.domain.as_str(),
            name: op.name,
            arity: op.arity,
            description: op.description,
        }
    }
}

fn parse_log_level_env(s: &str) -> Result<LogLevel, String> {
    if s.is_empty() {
        return Ok(LogLevel::Warn);
    }

    match s.to_lowercase().as_str() {
        "error" => Ok(LogLevel::Error),
        "warn" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        _ => Err(format!(
            "Invalid log level '{s}'. Expected: error, warn, info, debug, trace"
        )),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_level(cli.log_level.into())
        .init();

    debug!("exacta v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Run { domain, name, args } => execute(&domain, &name, &args, cli.output),
        Commands::List { domain } => list(domain.as_deref(), cli.output),
    }
}

fn execute(domain: &str, name: &str, args: &[String], output: OutputFormat) -> Result<()> {
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let result = ops::run(domain, name, &refs)
        .with_context(|| format!("{domain} {name} failed"))?;

    match output {
        OutputFormat::Text => println!("{result}"),
        OutputFormat::Json => {
            let record = RunRecord {
                operation: format!("{domain} {name}"),
                inputs: args,
                result,
            };
            println!("{}", serde_json::to_string(&record)?);
        }
    }
    Ok(())
}

fn list(domain: Option<&str>, output: OutputFormat) -> Result<()> {
    let domain = domain.map(str::parse::<Domain>).transpose()?;
    let operations: Vec<&Operation> = ops::list(domain).collect();

    match output {
        OutputFormat::Text => {
            for op in operations {
                let usage = format!("{} {}", op.domain, op.name);
                println!("{usage:<32} {} arg(s)  {}", op.arity, op.description);
            }
        }
        OutputFormat::Json => {
            let records: Vec<OperationRecord> =
                operations.into_iter().map(OperationRecord::from).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}
