use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use tally::SeenSet;
use tally::solver::{
    DEFAULT_TARGET, DEFAULT_VARIANCE, ErrorPolicy, ExpressionSolver, SearchEvent, SolverConfig,
};
use tally::validate_numbers;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// How to treat a candidate that fails to evaluate
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OnError {
    Skip,
    Abort,
}

impl From<OnError> for ErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Skip => ErrorPolicy::Skip,
            OnError::Abort => ErrorPolicy::Abort,
        }
    }
}

/// Tally - Combine integers with + - * / to reach a target
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Find every arithmetic combination of the given integers that equals a target")]
#[command(version)]
pub struct CliArgs {
    /// Integer to include (repeat for each number)
    #[arg(short = 'n', long = "number", allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Desired result
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: i64,

    /// Allow floating-point math errors after this many decimal places
    #[arg(long, default_value_t = DEFAULT_VARIANCE)]
    pub variance: u32,

    /// Also log every non-matching evaluation
    #[arg(short, long)]
    pub verbose: bool,

    /// What to do when a candidate cannot be evaluated
    #[arg(long, value_enum, default_value = "skip")]
    pub on_error: OnError,

    /// Spread the search across all cores
    #[arg(long)]
    pub parallel: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<i64>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    validate_numbers(&args.numbers).context("Invalid numbers")?;

    let solver = SolverConfig {
        target: args.target,
        verbose: args.verbose,
        on_error: args.on_error.into(),
        parallel: args.parallel,
        ..SolverConfig::default()
    }
    .with_variance(args.variance)
    .context("Invalid variance")?;

    Ok(CliConfig {
        numbers: args.numbers,
        solver,
        log_level: args.log_level,
    })
}

/// Verbose runs log at info or finer regardless of `--log-level`.
fn effective_level(log_level: &LogLevel, verbose: bool) -> log::LevelFilter {
    let level = log_level.to_log_level_filter();
    if verbose {
        level.max(log::LevelFilter::Info)
    } else {
        level
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel, verbose: bool) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(effective_level(log_level, verbose))
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level, config.solver.verbose)?;

    let verbose = config.solver.verbose;
    let solver = ExpressionSolver::new(config.solver);
    let mut seen = SeenSet::new();

    // matches are printed as they are found
    let stats = solver
        .search_streaming(&config.numbers, &mut seen, |event| match event {
            SearchEvent::Match(found) => println!("{}", found),
            SearchEvent::Miss(miss) => info!("{}", miss.detailed()),
            SearchEvent::Skipped(skipped) => {
                if verbose {
                    info!("skipped {}", skipped);
                }
            }
        })
        .context("Search aborted")?;

    if stats.matches == 0 {
        warn!("No matching expression found");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(numbers: Vec<i64>) -> CliArgs {
        CliArgs {
            numbers,
            target: DEFAULT_TARGET,
            variance: DEFAULT_VARIANCE,
            verbose: false,
            on_error: OnError::Skip,
            parallel: false,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_cli_parses_repeated_numbers() {
        let parsed = CliArgs::try_parse_from([
            "tally", "-n", "1", "-n", "3", "--number", "4", "-n", "6", "--target", "24",
        ]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.numbers, vec![1, 3, 4, 6]);
            assert_eq!(parsed.target, 24);
            assert_eq!(parsed.variance, 5);
            assert!(!parsed.verbose);
            assert!(matches!(parsed.on_error, OnError::Skip));
        }
    }

    #[test]
    fn test_cli_accepts_negative_values() {
        let parsed = CliArgs::try_parse_from(["tally", "-n", "-3", "-n", "5", "-t", "-15"]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.numbers, vec![-3, 5]);
            assert_eq!(parsed.target, -15);
        }
    }

    #[test]
    fn test_cli_defaults() {
        let parsed = CliArgs::try_parse_from(["tally"]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert!(parsed.numbers.is_empty());
            assert_eq!(parsed.target, 24);
            assert!(matches!(parsed.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_config_requires_two_numbers() {
        let result = config_from_args(args(vec![5]));
        assert!(result.is_err());
        if let Err(e) = result {
            let chain = format!("{:#}", e);
            assert!(chain.contains("must specify at least 2 numbers (got 1)"));
        }
    }

    #[test]
    fn test_config_carries_settings() {
        let mut input = args(vec![1, 2, 3]);
        input.variance = 2;
        input.on_error = OnError::Abort;
        input.parallel = true;

        let result = config_from_args(input);
        assert!(result.is_ok());
        if let Ok(config) = result {
            assert_eq!(config.numbers, vec![1, 2, 3]);
            assert_eq!(config.solver.tolerance.variance(), 2);
            assert_eq!(config.solver.on_error, ErrorPolicy::Abort);
            assert!(config.solver.parallel);
        }
    }

    #[test]
    fn test_config_rejects_huge_variance() {
        let mut input = args(vec![1, 2]);
        input.variance = 99;
        assert!(config_from_args(input).is_err());
    }

    #[test]
    fn test_verbose_raises_log_level() {
        assert_eq!(
            effective_level(&LogLevel::Warn, true),
            log::LevelFilter::Info
        );
        assert_eq!(
            effective_level(&LogLevel::Debug, true),
            log::LevelFilter::Debug
        );
        assert_eq!(
            effective_level(&LogLevel::Error, false),
            log::LevelFilter::Error
        );
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
