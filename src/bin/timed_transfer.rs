//! 限量传输时延实验
//!
//! 发送固定大小的文件（`--file-size`，如 `10KB`），跟踪最后一个包的
//! 到达时刻并以秒输出。没有观测到任何交付时报告 NoArrivalObserved
//! 并以非零退出码结束，而不是伪造一个时间戳。

use clap::Parser;
use ltesim_rs::flow::{ExperimentDriver, ExperimentOutcome, FlowRegistry, FlowSpec, PayloadPolicy};
use ltesim_rs::net::{StackKind, Topology};
use ltesim_rs::sim::SimTime;
use ltesim_rs::topo::{EpcOpts, LogDistanceQuality, build_epc};
use ltesim_rs::units::parse_file_size;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;

const DL_PORT: u16 = 1100;
const CHUNK_BYTES: u32 = 512;
/// 发送端的启动偏移
const START_OFFSET_MS: u64 = 10;

#[derive(Debug, Parser)]
#[command(name = "timed-transfer", about = "限量传输的到达时延实验")]
struct Args {
    /// 文件大小：<整数><B|KB|MB>，如 10B、10KB、10MB
    #[arg(long, default_value = "1MB")]
    file_size: String,

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

fn run(args: &Args, file_bytes: u64) -> Result<ExperimentOutcome, Box<dyn std::error::Error>> {
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

    topo.install_stack(net.remote_hosts[0], StackKind::UnreliableThenReliable)?;
    topo.install_stack(net.ues[0], StackKind::UnreliableThenReliable)?;

    let mut registry = FlowRegistry::new(stop);
    registry.register(
        &topo,
        FlowSpec {
            source: net.remote_hosts[0],
            sink: net.ues[0],
            port: DL_PORT,
            stack: StackKind::UnreliableThenReliable,
            payload: PayloadPolicy::Bounded(file_bytes),
            chunk_bytes: CHUNK_BYTES,
            start: SimTime::from_millis(START_OFFSET_MS).min(stop),
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

    let file_bytes = match parse_file_size(&args.file_size) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    };

    let outcome = match run(&args, file_bytes) {
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

    match outcome.last_arrival() {
        Ok(t) => println!("{}", t.as_secs_f64()),
        Err(e) => {
            eprintln!("ERROR: {e}");
            // 区别于配置错误的退出码 1
            std::process::exit(255);
        }
    }
}
