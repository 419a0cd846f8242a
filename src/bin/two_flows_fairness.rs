//! 多流公平性实验
//!
//! 两条无界可靠字节流共享同一个 UE（端口 1100/1200），第三条
//! 先不可靠后可靠栈的流发往第二个 UE（端口 1600，延后 2 秒启动）。
//! 三条流在互联网 p2p 链路上竞争同一份容量。

use clap::Parser;
use ltesim_rs::flow::{ExperimentDriver, ExperimentOutcome, FlowRegistry, FlowSpec, PayloadPolicy};
use ltesim_rs::net::{StackKind, Topology};
use ltesim_rs::sim::SimTime;
use ltesim_rs::topo::{EpcOpts, LogDistanceQuality, build_epc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

const DL_PORT_1: u16 = 1100;
const DL_PORT_2: u16 = 1200;
const DL_PORT_3: u16 = 1600;
const CHUNK_BYTES: u32 = 512;
/// 第三条流的启动偏移
const THIRD_FLOW_START_SECS: u64 = 2;

#[derive(Debug, Parser)]
#[command(name = "two-flows-fairness", about = "多流共享 LTE 链路的公平性实验")]
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
            remote_hosts: 2,
            ues: 2,
            distance_m: args.distance,
            ..EpcOpts::default()
        },
        &LogDistanceQuality,
    )?;

    // 第一台远端主机与第一个 UE 走可靠字节流栈
    topo.install_stack(net.remote_hosts[0], StackKind::ReliableStream)?;
    topo.install_stack(net.ues[0], StackKind::ReliableStream)?;
    // 第二台远端主机与第二个 UE 走先不可靠后可靠的栈
    topo.install_stack(net.remote_hosts[1], StackKind::UnreliableThenReliable)?;
    topo.install_stack(net.ues[1], StackKind::UnreliableThenReliable)?;

    let mut registry = FlowRegistry::new(stop);
    for port in [DL_PORT_1, DL_PORT_2] {
        registry.register(
            &topo,
            FlowSpec {
                source: net.remote_hosts[0],
                sink: net.ues[0],
                port,
                stack: StackKind::ReliableStream,
                payload: PayloadPolicy::Unbounded,
                chunk_bytes: CHUNK_BYTES,
                start: SimTime::ZERO,
                stop,
            },
        )?;
    }
    registry.register(
        &topo,
        FlowSpec {
            source: net.remote_hosts[1],
            sink: net.ues[1],
            port: DL_PORT_3,
            stack: StackKind::UnreliableThenReliable,
            payload: PayloadPolicy::Unbounded,
            chunk_bytes: CHUNK_BYTES,
            start: SimTime::from_secs(THIRD_FLOW_START_SECS).min(stop),
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

    for (i, r) in outcome.reports.iter().enumerate() {
        println!("Flow {} Throughput: {} Mbps", i + 1, r.throughput_mbps);
    }
}
