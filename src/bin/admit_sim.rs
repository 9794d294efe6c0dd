//! 场景准入仿真
//!
//! 读取 scenario.json（可选用 CSV 替换 demand 列表），按所选策略运行准入并输出摘要。

use clap::Parser;
use nmax_rs::admit::{AdmissionConfig, StrategyKind};
use nmax_rs::report::{StrategyReport, write_reports_json};
use nmax_rs::scenario::{ScenarioError, load_demand_csv, load_scenario};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "admit-sim",
    about = "Run bandwidth admission strategies on a backbone scenario"
)]
struct Args {
    /// Path to scenario.json
    #[arg(long)]
    scenario: PathBuf,

    /// Replace the scenario's demand list with this CSV (seq,source,target,bandwidth)
    #[arg(long)]
    demands_csv: Option<PathBuf>,

    /// Strategy: fcfs, dynamic_weight, multi_path or all
    #[arg(long, default_value = "all")]
    strategy: String,

    /// Override max paths per demand (multi_path)
    #[arg(long)]
    max_paths: Option<usize>,

    /// Override allowed unallocated fraction (multi_path)
    #[arg(long)]
    shortfall_tolerance: Option<f64>,

    /// Override retry bandwidth factors, e.g. 0.8,0.7,0.6 (multi_path)
    #[arg(long, value_delimiter = ',')]
    retry_factors: Option<Vec<f64>>,

    /// Write all strategy reports as a JSON array
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Disable tracing output
    #[arg(long)]
    quiet: bool,
}

fn parse_strategies(raw: &str) -> Result<Vec<StrategyKind>, String> {
    if raw == "all" {
        return Ok(StrategyKind::ALL.to_vec());
    }
    raw.split(',').map(|s| s.trim().parse()).collect()
}

fn run(args: &Args, strategies: Vec<StrategyKind>) -> Result<(), ScenarioError> {
    let spec = load_scenario(&args.scenario)?;
    let mut topo = spec.topology.build()?;
    let demands = match &args.demands_csv {
        Some(path) => load_demand_csv(path)?,
        None => spec.demands(),
    };

    let mut cfg: AdmissionConfig = spec.admission_config();
    if let Some(v) = args.max_paths {
        cfg.max_paths = v;
    }
    if let Some(v) = args.shortfall_tolerance {
        cfg.shortfall_tolerance = v;
    }
    if let Some(v) = &args.retry_factors {
        cfg.retry_factors = v.clone();
    }

    info!(
        nodes = topo.node_count(),
        links = topo.link_count(),
        demands = demands.len(),
        total_capacity = topo.total_capacity(),
        "场景已加载"
    );

    let mut reports = Vec::with_capacity(strategies.len());
    for kind in strategies {
        let strategy = kind.build(&cfg);
        let result = strategy.run(&mut topo, &demands);
        let report = StrategyReport::from_result(&result);
        println!("{}", report.summary_line());
        reports.push(report);
    }

    if let Some(path) = &args.report_json {
        write_reports_json(path, &reports).map_err(|source| ScenarioError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "报告已写入");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.quiet {
            tracing_subscriber::EnvFilter::new("off")
        } else {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        })
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let strategies = match parse_strategies(&args.strategy) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    match run(&args, strategies) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
