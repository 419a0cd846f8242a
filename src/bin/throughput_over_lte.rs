//! LTE 吞吐量实验
//!
//! 单条无界可靠字节流：远端主机经 EPC 向 UE 持续批量发送，
//! 实验结束后报告总接收字节数与吞吐量。

use clap::Parser;
use ltesim_rs::flow::{ExperimentDriver, ExperimentOutcome, FlowRegistry, FlowSpec, PayloadPolicy};
use ltesim_rs::net::{StackKind, Topology};
use ltesim_rs::sim::SimTime;
use ltesim_rs::topo::{EpcOpts, LogDistanceQuality, build_epc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

const DL_PORT: u16 = 1100;
const CHUNK_BYTES: u32 = 512;

#[derive(Debug, Parser)]
#[command(name = "throughput-over-lte", about = "单流 LTE 吞吐量实验")]
struct Args {
    /// UE 与基站的距离（米）
    #[arg(long, default_value_t = 250.0)]
    distance: f64,

    /// 实验时长（秒）
    #[arg(long, default_value_t = 40.0)]
    duration: f64,

    /// RNG 种子；缺省用系统熵
    #[arg(long)]
    seed: Option<u64>,

    /// 可选：把每流报告写成 JSON 文件
    #[arg(long)]
    report_json: Option<PathBuf>,
}

fn run(args: &Args) -> Result<ExperimentOutcome, Box<dyn std::error::Error>> {
    let stop = SimTime::from_secs_f64(args.duration);

    let mut topo = Topology::default();
    let net = build_epc(
        &mut topo,
        &EpcOpts {
            distance_m: args.distance,
            ..EpcOpts::default()
        },
        &LogDistanceQuality,
    )?;

    topo.install_stack(net.remote_hosts[0], StackKind::ReliableStream)?;
    topo.install_stack(net.ues[0], StackKind::ReliableStream)?;

    let mut registry = FlowRegistry::new(stop);
    registry.register(
        &topo,
        FlowSpec {
            source: net.remote_hosts[0],
            sink: net.ues[0],
            port: DL_PORT,
            stack: StackKind::ReliableStream,
            payload: PayloadPolicy::Unbounded,
            chunk_bytes: CHUNK_BYTES,
            start: SimTime::ZERO,
            stop,
        },
    )?;

    let rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let driver = ExperimentDriver::new(topo, registry, rng)?;
    Ok(driver.run())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let outcome = match run(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    if let Some(path) = &args.report_json {
        let json = serde_json::to_string_pretty(&outcome.reports).expect("serialize reports");
        fs::write(path, json).expect("write report json");
    }

    let r = &outcome.reports[0];
    println!("Total Bytes Received: {}", r.bytes_received);
    println!("Throughput: {} Mbps", r.throughput_mbps);
}
