//! 网格拓扑准入对比
//!
//! 构建经纬度网格，生成合成 demand，依次运行三种策略并打印摘要。

use clap::Parser;
use nmax_rs::admit::{AdmissionConfig, StrategyKind};
use nmax_rs::report::StrategyReport;
use nmax_rs::topo::{GridOpts, build_grid, synthetic_demands};
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "grid-admit", about = "网格拓扑：三种准入策略对比")]
struct Args {
    #[arg(long, default_value_t = 4)]
    rows: usize,
    #[arg(long, default_value_t = 6)]
    cols: usize,
    /// 相邻节点的经纬度间隔（度）
    #[arg(long, default_value_t = 12.0)]
    spacing_deg: f64,
    /// 合成 demand 数量
    #[arg(long, default_value_t = 200)]
    demands: usize,
    /// Disable tracing output
    #[arg(long)]
    quiet: bool,
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

    let opts = GridOpts {
        rows: args.rows,
        cols: args.cols,
        spacing_deg: args.spacing_deg,
        ..GridOpts::default()
    };
    let mut grid = match build_grid(&opts) {
        Ok(g) => g,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let demands = synthetic_demands(&grid.nodes, args.demands);
    info!(
        nodes = grid.topo.node_count(),
        links = grid.topo.link_count(),
        demands = demands.len(),
        "网格已构建"
    );

    let cfg = AdmissionConfig::default();
    for kind in StrategyKind::ALL {
        let result = kind.build(&cfg).run(&mut grid.topo, &demands);
        println!("{}", StrategyReport::from_result(&result).summary_line());
    }
    ExitCode::SUCCESS
}
