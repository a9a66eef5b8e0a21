//! Page replacement simulator CLI.
//!
//! This binary provides the entry point for trace-driven runs. It performs:
//! 1. **Summary:** Working-set size and read/write split of a canonical trace.
//! 2. **Replay:** Sizes caches from the working set (or an explicit capacity) and
//!    replays the trace through LRU, CFLRU or Belady MIN, reporting miss rate and I/O cost.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pagesim_core::Simulator;
use pagesim_core::common::Result;
use pagesim_core::config::{Config, PolicyConfig, PolicyKind, WindowMode};
use pagesim_core::sim::AccessLog;
use pagesim_core::stats::RunReport;
use pagesim_core::trace::{Trace, TraceSummary, read_trace_file};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Trace-driven page replacement simulator for flash-backed caches",
    long_about = "Replay a canonical page_id,is_write trace through LRU, CFLRU or Belady MIN and report miss rate and I/O cost (read miss = 1, dirty flush = 8).\n\nExamples:\n  pagesim summary -t traces/feh.csv\n  pagesim run -t traces/feh.csv -p cflru --mode dynamic\n  pagesim run -t traces/feh.csv -p lru -p belady-min --capacity 512 --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the working-set summary of a trace.
    Summary {
        /// Canonical trace file (page_id,is_write).
        #[arg(short, long)]
        trace: PathBuf,

        /// Page size in KiB for the footprint estimate.
        #[arg(long)]
        page_size_kb: Option<u64>,

        /// Print JSON instead of the text table.
        #[arg(long)]
        json: bool,
    },

    /// Replay a trace through one or more policies.
    Run {
        /// Canonical trace file (page_id,is_write).
        #[arg(short, long)]
        trace: PathBuf,

        /// JSON configuration file; flags override its values.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Policies to run (repeatable). Defaults to the configured policy.
        #[arg(short, long, value_enum)]
        policy: Vec<PolicyArg>,

        /// Explicit capacity in pages; disables ratio sizing.
        #[arg(long)]
        capacity: Option<usize>,

        /// Capacity as a fraction of the working set (repeatable).
        #[arg(long)]
        ratio: Vec<f64>,

        /// Lower bound for ratio-derived capacities.
        #[arg(long)]
        min_capacity: Option<usize>,

        /// CFLRU initial window as a fraction of the capacity.
        #[arg(long)]
        window_ratio: Option<f64>,

        /// CFLRU window mode.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// CFLRU accesses per tuning period.
        #[arg(long)]
        period: Option<u64>,

        /// Log every access to stdout.
        #[arg(short, long)]
        verbose: bool,

        /// Print the run reports as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    Lru,
    Cflru,
    BeladyMin,
}

impl From<PolicyArg> for PolicyKind {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Lru => Self::Lru,
            PolicyArg::Cflru => Self::Cflru,
            PolicyArg::BeladyMin => Self::BeladyMin,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Static,
    Dynamic,
}

impl From<ModeArg> for WindowMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Static => Self::Static,
            ModeArg::Dynamic => Self::Dynamic,
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summary {
            trace,
            page_size_kb,
            json,
        } => cmd_summary(&trace, page_size_kb, json),
        Commands::Run {
            trace,
            config,
            policy,
            capacity,
            ratio,
            min_capacity,
            window_ratio,
            mode,
            period,
            verbose,
            json,
        } => load_config(config.as_ref()).and_then(|mut config| {
            if capacity.is_some() {
                config.sizing.capacity = capacity;
            }
            if !ratio.is_empty() {
                config.sizing.ratios = ratio;
            }
            if let Some(min) = min_capacity {
                config.sizing.min_capacity = min;
            }
            if let Some(window_ratio) = window_ratio {
                config.policy.cflru.window_ratio = window_ratio;
            }
            if let Some(mode) = mode {
                config.policy.cflru.mode = mode.into();
            }
            if let Some(period) = period {
                config.policy.cflru.dynamic_period = period;
            }
            config.report.verbose |= verbose;
            config.validate()?;

            let kinds: Vec<PolicyKind> = if policy.is_empty() {
                vec![config.policy.kind]
            } else {
                policy.into_iter().map(PolicyKind::from).collect()
            };
            cmd_run(&trace, &config, &kinds, json)
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `info` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    path.map_or_else(|| Ok(Config::default()), Config::from_json_file)
}

fn load_trace(path: &Path) -> Result<Trace> {
    let load = read_trace_file(path)?;
    if load.skipped > 0 {
        eprintln!("[*] Skipped {} malformed rows", load.skipped);
    }
    Ok(load.trace)
}

/// Prints the working-set summary of a trace.
fn cmd_summary(path: &Path, page_size_kb: Option<u64>, json: bool) -> Result<()> {
    let mut config = Config::default();
    if let Some(kb) = page_size_kb {
        config.trace.page_size_kb = kb;
    }
    config.validate()?;

    let trace = load_trace(path)?;
    let summary = TraceSummary::from_trace(&trace, config.trace.page_size_kb);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?);
    } else {
        println!("[*] Trace: {}", path.display());
        summary.print();
    }
    Ok(())
}

/// Replays the trace once per policy and capacity.
///
/// Each run gets a fresh policy instance, so runs are independent of each other.
fn cmd_run(path: &Path, config: &Config, kinds: &[PolicyKind], json: bool) -> Result<()> {
    let trace = load_trace(path)?;
    let summary = TraceSummary::from_trace(&trace, config.trace.page_size_kb);
    if !json {
        println!("[*] Trace: {}", path.display());
        summary.print();
    }

    let capacities = config.sizing.capacities(summary.working_set_size);
    let mut reports: Vec<RunReport> = Vec::with_capacity(kinds.len() * capacities.len());

    for &kind in kinds {
        let policy_config = PolicyConfig {
            kind,
            cflru: config.policy.cflru,
        };
        for &capacity in &capacities {
            info!(?kind, capacity, "starting replay");
            let mut sim = Simulator::for_trace(&policy_config, capacity, &trace)?;
            if config.report.verbose {
                sim = sim.with_log(AccessLog::stdout(config.report.show_cache_limit));
            }
            let _ = sim.run(&trace)?;
            let report = sim.report();
            if !json {
                report.print();
            }
            reports.push(report);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports).map_err(std::io::Error::from)?);
    }
    Ok(())
}
