use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::fmt;

use pathlab_cli::config::parse_expansion_limit;
use pathlab_cli::{logging, Config, Overrides, Workload};

#[derive(Parser, Debug)]
#[command(name = "pathlab", version, about = "Compare informed search strategies on a weighted graph")]
struct Args {
    /// JSON map file; defaults to the built-in Romania road map
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,

    /// Start node label (overrides the map's "start")
    #[arg(long)]
    start: Option<String>,

    /// Goal node label (overrides the map's "goal")
    #[arg(long)]
    goal: Option<String>,

    /// Strategy to run; repeat to compare several. Defaults to the six informed strategies.
    #[arg(long = "algorithm", short = 'a', value_name = "KIND")]
    algorithms: Vec<String>,

    /// Weighted A* inflation factor (>= 1)
    #[arg(long)]
    weight: Option<f64>,

    /// SMA* node budget
    #[arg(long, value_name = "N")]
    memory_limit: Option<usize>,

    /// Beam search width
    #[arg(long, value_name = "N")]
    beam_width: Option<usize>,

    /// Expansion cap; `0` or `none` for no limit
    #[arg(long, value_name = "N|none")]
    max_expansions: Option<String>,

    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Fail instead of assuming h = 0 when a node has no estimate
    #[arg(long)]
    strict_heuristic: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Log every search event (expand, enqueue, evict, ...) at trace level
    #[arg(long)]
    trace: bool,
}

impl Args {
    fn overrides(&self) -> Result<Overrides> {
        let max_expansions = self
            .max_expansions
            .as_deref()
            .map(parse_expansion_limit)
            .transpose()
            .context("invalid --max-expansions")?;
        Ok(Overrides {
            weight: self.weight,
            memory_limit: self.memory_limit,
            beam_width: self.beam_width,
            max_expansions,
            timeout_ms: self.timeout_ms,
            strict_heuristic: self.strict_heuristic,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = logging::env_filter(args.trace)?;
    fmt().with_env_filter(filter).json().with_writer(io::stderr).init();

    let cfg = Config::from_env()?.with_overrides(&args.overrides()?);
    info!(?cfg, "starting pathlab");

    let algorithms = cfg.algorithms(&args.algorithms)?;
    let workload = Workload::load(args.map.as_deref(), args.start.as_deref(), args.goal.as_deref())?;
    let report = workload.compare(&algorithms, &cfg.search_options(), args.trace)?;

    let mut out = io::stdout().lock();
    if args.json {
        writeln!(out, "{}", report.to_json_pretty().context("failed to serialize report")?)?;
    } else {
        write!(out, "{report}")?;
    }
    Ok(())
}
