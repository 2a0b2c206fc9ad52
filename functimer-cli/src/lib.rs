#![warn(missing_docs)]
//! Functimer CLI Library
//!
//! Command-line front end that times the built-in workloads with the
//! functimer pipeline. Configuration comes from `functimer.toml` (discovered
//! upward from the current directory) with command-line flags taking
//! precedence.
//!
//! ```text
//! functimer sum --repeat 7 --unit nsec
//! functimer --format json -o timings.json
//! functimer list
//! ```

mod config;
mod workloads;

pub use config::{
    CONFIG_FILE, FileConfig, OutputConfig, TimeitSection, UnitChoice, parse_duration,
};
pub use workloads::{WORKLOADS, Workload};

use clap::{Parser, Subcommand};
use functimer::{
    NamedResult, OutputFormat, TimeUnit, Timeit, TimeitConfig, TimingRequest, format_human_output,
    generate_json_report,
};
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Functimer CLI arguments
#[derive(Parser, Debug)]
#[command(name = "functimer")]
#[command(author, version, about = "Functimer - microbenchmark harness")]
pub struct Cli {
    /// Optional subcommand (List, Run, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter workloads by regex pattern
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Calls per trial (autoranged when omitted)
    #[arg(long, short = 'n')]
    pub number: Option<u64>,

    /// Trials per workload
    #[arg(long, short = 'r')]
    pub repeat: Option<usize>,

    /// Display unit: sec, msec, usec, nsec or auto
    #[arg(long, short = 'u')]
    pub unit: Option<String>,

    /// Digits after the decimal point
    #[arg(long, short = 'p')]
    pub precision: Option<u32>,

    /// Minimum autorange batch duration (e.g. "200ms")
    #[arg(long)]
    pub min_time: Option<String>,

    /// Output format: human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in workloads
    List {
        /// Filter workloads by regex pattern
        filter: Option<String>,
    },
    /// Time workloads (default)
    Run,
    /// Print a default functimer.toml
    Init,
}

/// Run the Functimer CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Functimer CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    let filter = if cli.verbose {
        "functimer=debug"
    } else {
        "functimer=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Some(Commands::List { filter }) => {
            list_workloads(filter.as_deref().unwrap_or(&cli.filter))
        }
        Some(Commands::Init) => {
            print!("{}", FileConfig::default_toml());
            Ok(())
        }
        Some(Commands::Run) | None => {
            // Discover functimer.toml configuration (CLI flags override)
            let config = FileConfig::discover().unwrap_or_default();
            run_workloads(&cli, &config)
        }
    }
}

/// Workloads whose name matches `pattern`, in registry order
fn filter_workloads(pattern: &str) -> anyhow::Result<Vec<&'static Workload>> {
    let filter = Regex::new(pattern)?;
    Ok(WORKLOADS.iter().filter(|w| filter.is_match(w.name)).collect())
}

fn list_workloads(pattern: &str) -> anyhow::Result<()> {
    let workloads = filter_workloads(pattern)?;
    println!("Functimer workloads:");
    for workload in &workloads {
        println!("├── {:<8} {}", workload.name, workload.description);
    }
    println!("{} workloads found.", workloads.len());
    Ok(())
}

/// Layer functimer.toml defaults, then CLI overrides.
fn build_timeit_config(cli: &Cli, config: &FileConfig) -> anyhow::Result<(TimeitConfig, UnitChoice)> {
    let mut timeit = config.timeit_config()?;
    let unit_token = cli.unit.as_deref().unwrap_or(&config.timeit.unit);
    let unit = UnitChoice::parse(unit_token)?;

    if let Some(repeat) = cli.repeat {
        timeit.repeat = repeat;
    }
    if let Some(precision) = cli.precision {
        timeit.precision = precision;
    }
    if let Some(min_time) = &cli.min_time {
        timeit.min_time = parse_duration(min_time)?;
    }
    if let UnitChoice::Fixed(fixed) = unit {
        timeit.unit = fixed;
    }
    timeit.validate()?;
    Ok((timeit, unit))
}

fn run_workloads(cli: &Cli, config: &FileConfig) -> anyhow::Result<()> {
    let (timeit_config, unit) = build_timeit_config(cli, config)?;
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let workloads = filter_workloads(&cli.filter)?;
    if workloads.is_empty() {
        println!("No workloads found.");
        return Ok(());
    }

    tracing::info!(
        workloads = workloads.len(),
        repeat = timeit_config.repeat,
        min_time = timeit_config.min_time,
        "running workloads"
    );

    let runner = Timeit::new(timeit_config);
    let started = Instant::now();
    let mut results = Vec::with_capacity(workloads.len());

    // one workload at a time
    for workload in workloads {
        let (func, args) = workload.build();
        let mut request = TimingRequest::new(func).args(args);
        if let Some(number) = cli.number {
            request = request.number(number);
        }

        let result = runner
            .plus(&request)
            .map_err(|e| anyhow::anyhow!("{}: {}", workload.name, e))?;
        let result = match unit {
            UnitChoice::Fixed(_) => result,
            UnitChoice::Auto => result.in_unit(TimeUnit::autoselect(result.best())),
        };
        tracing::info!(workload = workload.name, "{}", result.brief());

        results.push(NamedResult {
            name: workload.name.to_string(),
            result,
        });
    }

    let output = match format {
        OutputFormat::Json => generate_json_report(&results)?,
        OutputFormat::Human => format_human_report(&results, started.elapsed().as_secs_f64()),
    };

    if let Some(path) = &cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        tracing::info!(path = %path.display(), "report written");
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn format_human_report(results: &[NamedResult], elapsed_secs: f64) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Functimer Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    for named in results {
        output.push_str(&format_human_output(&named.name, &named.result));
        output.push('\n');
    }

    output.push_str("Summary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!("  Workloads: {}\n", results.len()));
    output.push_str(&format!("  Duration: {:.2} s\n", elapsed_secs));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use functimer::TimeitResult;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("functimer").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_defaults() {
        let cli = cli(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.filter, ".*");
        assert!(cli.number.is_none());
    }

    #[test]
    fn test_list_subcommand() {
        let parsed = cli(&["list"]);
        assert!(matches!(parsed.command, Some(Commands::List { filter: None })));

        let parsed = cli(&["list", "^s"]);
        match parsed.command {
            Some(Commands::List { filter }) => assert_eq!(filter.as_deref(), Some("^s")),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = cli(&["sum", "--repeat", "9", "--unit", "nsec", "--min-time", "10ms"]);
        let (config, unit) = build_timeit_config(&cli, &FileConfig::default()).unwrap();
        assert_eq!(config.repeat, 9);
        assert_eq!(config.unit, TimeUnit::Nsec);
        assert_eq!(unit, UnitChoice::Fixed(TimeUnit::Nsec));
        assert!((config.min_time - 0.01).abs() < 1e-12);
        // untouched fields keep the file defaults
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_cli_rejects_bad_values() {
        let err = build_timeit_config(&cli(&["--repeat", "0"]), &FileConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "repeat must be positive");
        let err = build_timeit_config(&cli(&["--unit", "bloops"]), &FileConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "unit must be one of sec, msec, usec, nsec");
    }

    #[test]
    fn test_filter_workloads() {
        let names: Vec<_> = filter_workloads("^s")
            .unwrap()
            .iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(names, vec!["sum", "sort", "sleep"]);
        assert!(filter_workloads("(").is_err());
        assert_eq!(filter_workloads(&cli(&[]).filter).unwrap().len(), WORKLOADS.len());
    }

    #[test]
    fn test_auto_unit_rerenders() {
        let trials = functimer::TrialSet::new(10, vec![0.002, 0.003]).unwrap();
        let result = TimeitResult::new(trials, TimeUnit::Nsec, 2, Vec::new());
        let result = result.in_unit(TimeUnit::autoselect(result.best()));
        assert_eq!(result.unit(), TimeUnit::Usec);
        assert!(result.brief().contains("200 usec per loop"), "{}", result.brief());
    }

    #[test]
    fn test_human_report() {
        let trials = functimer::TrialSet::new(10, vec![0.002, 0.003]).unwrap();
        let results = vec![NamedResult {
            name: "max".into(),
            result: TimeitResult::new(trials, TimeUnit::Usec, 1, Vec::new()),
        }];
        let out = format_human_report(&results, 1.5);
        assert!(out.contains("Functimer Results"));
        assert!(out.contains("  max\n"));
        assert!(out.contains("Workloads: 1"));
    }
}
