use std::io::{self, BufRead};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info, warn};
use safecalc::Evaluator;
use safecalc::evaluator::constants::DEFAULT_PRECISION;
use safecalc::expression::format_postfix;

/// Verbosity of diagnostic output on stderr. `off` leaves only results
/// and per-expression errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Verbosity {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Off => LevelFilter::Off,
            Verbosity::Error => LevelFilter::Error,
            Verbosity::Warn => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Safecalc - evaluate arithmetic expressions without executing code
#[derive(Parser, Debug)]
#[command(name = "safecalc")]
#[command(
    about = "Evaluate arithmetic expressions over decimal numbers with + - * / ^ and parentheses"
)]
#[command(version)]
pub struct CliArgs {
    /// Expressions to evaluate; one per line is read from stdin when omitted
    pub expressions: Vec<String>,

    /// Decimal places to round results to (negative values mean 0)
    #[arg(short, long, default_value_t = DEFAULT_PRECISION as i32, allow_negative_numbers = true)]
    pub precision: i32,

    /// Also print the postfix form of each expression
    #[arg(long)]
    pub postfix: bool,

    /// Diagnostic log level; overrides RUST_LOG
    #[arg(short, long, value_enum, default_value_t = Verbosity::Warn)]
    pub log_level: Verbosity,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub expressions: Vec<String>,
    pub precision: i32,
    pub show_postfix: bool,
    pub log_level: Verbosity,
}

/// Read one expression per non-blank line
fn read_expressions<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut expressions = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read expression from input")?;
        if !line.trim().is_empty() {
            expressions.push(line);
        }
    }
    Ok(expressions)
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    let expressions = if args.expressions.is_empty() {
        read_expressions(io::stdin().lock())?
    } else {
        args.expressions
    };

    if expressions.is_empty() {
        bail!("No expressions given");
    }

    Ok(CliConfig {
        expressions,
        precision: args.precision,
        show_postfix: args.postfix,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: Verbosity) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .try_init()
        .context("Failed to initialize logger")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(config.log_level)?;

    let evaluator = Evaluator::new(config.precision);
    info!(
        "Evaluating {} expression(s) with precision {}",
        config.expressions.len(),
        evaluator.precision()
    );

    let results = evaluator.evaluate_all(&config.expressions);
    let single = config.expressions.len() == 1;
    let mut failures = 0;

    for (expression, result) in config.expressions.iter().zip(results) {
        match result {
            Ok(number) => {
                let mut line = if single {
                    number.to_string()
                } else {
                    format!("{} = {}", expression.trim(), number)
                };
                if config.show_postfix
                    && let Ok(postfix) = evaluator.to_postfix(expression)
                {
                    line.push_str(&format!("    [{}]", format_postfix(&postfix)));
                }
                println!("{}", line);
            }
            Err(e) => {
                warn!("Failed to evaluate '{}': {}", expression, e);
                eprintln!("{}: {}", expression.trim(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} expression(s) could not be evaluated",
            failures,
            config.expressions.len()
        );
    }
    Ok(())
}
