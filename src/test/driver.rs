use crate::err::ConfigurationError;
use crate::flow::{ExperimentDriver, ExperimentOutcome, FlowRegistry, FlowSpec, PayloadPolicy};
use crate::net::{Direction, ErrorModel, NodeId, StackKind, Topology};
use crate::sim::SimTime;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// a-b-c 链，1 Gb/s / 1 µs，两端装可靠字节流栈。
fn chain3() -> (Topology, NodeId, NodeId, NodeId) {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let b = topo.add_node("b");
    let c = topo.add_node("c");
    topo.connect(a, b, 1_000_000_000, SimTime::from_micros(1))
        .expect("link");
    topo.connect(b, c, 1_000_000_000, SimTime::from_micros(1))
        .expect("link");
    topo.install_stack(a, StackKind::ReliableStream).expect("stack");
    topo.install_stack(c, StackKind::ReliableStream).expect("stack");
    (topo, a, b, c)
}

fn spec(src: NodeId, dst: NodeId, port: u16, payload: PayloadPolicy, stop: SimTime) -> FlowSpec {
    FlowSpec {
        source: src,
        sink: dst,
        port,
        stack: StackKind::ReliableStream,
        payload,
        chunk_bytes: 512,
        start: SimTime::ZERO,
        stop,
    }
}

fn run_experiment(topo: Topology, registry: FlowRegistry) -> ExperimentOutcome {
    let driver = ExperimentDriver::new(topo, registry, StdRng::seed_from_u64(42))
        .expect("experiment assembles");
    driver.run()
}

#[test]
fn bounded_flow_without_loss_delivers_its_exact_budget() {
    let (topo, a, _, c) = chain3();
    let stop = SimTime::from_secs(1);
    let mut reg = FlowRegistry::new(stop);
    reg.register(&topo, spec(a, c, 1100, PayloadPolicy::Bounded(5120), stop))
        .expect("flow");

    let outcome = run_experiment(topo, reg);

    // 预算耗尽即停止发送，零丢包时接收等于预算
    assert_eq!(outcome.sent_bytes[0], 5120);
    assert_eq!(outcome.reports[0].bytes_received, 5120);
    assert_eq!(outcome.stats.dropped_pkts, 0);
}

#[test]
fn bytes_received_never_exceeds_bytes_sent() {
    let (topo, a, _, c) = chain3();
    // 无界流，窗口 1 ms：停止时刻在途的包被丢弃，接收只会更少
    let stop = SimTime::from_millis(1);
    let mut reg = FlowRegistry::new(stop);
    reg.register(&topo, spec(a, c, 1100, PayloadPolicy::Unbounded, stop))
        .expect("flow");

    let outcome = run_experiment(topo, reg);

    assert!(outcome.sent_bytes[0] > 0);
    assert!(outcome.reports[0].bytes_received <= outcome.sent_bytes[0]);
}

#[test]
fn stop_time_preempts_an_unmet_byte_budget() {
    let (topo, a, _, c) = chain3();
    let experiment_stop = SimTime::from_secs(1);
    let mut reg = FlowRegistry::new(experiment_stop);
    // 预算远大于 100 µs 窗口能发出的量
    reg.register(
        &topo,
        FlowSpec {
            stop: SimTime::from_micros(100),
            ..spec(a, c, 1100, PayloadPolicy::Bounded(1_000_000_000), experiment_stop)
        },
    )
    .expect("flow");

    let outcome = run_experiment(topo, reg);

    assert!(outcome.sent_bytes[0] > 0);
    assert!(outcome.sent_bytes[0] < 1_000_000_000);
}

#[test]
fn fan_in_flows_keep_independent_counters() {
    let (topo, a, _, c) = chain3();
    let stop = SimTime::from_secs(1);
    let mut reg = FlowRegistry::new(stop);
    reg.register(&topo, spec(a, c, 1100, PayloadPolicy::Bounded(2048), stop))
        .expect("flow 0");
    reg.register(&topo, spec(a, c, 1200, PayloadPolicy::Bounded(3072), stop))
        .expect("flow 1");

    let outcome = run_experiment(topo, reg);

    // 流 A 的交付绝不计入流 B
    assert_eq!(outcome.reports[0].bytes_received, 2048);
    assert_eq!(outcome.reports[1].bytes_received, 3072);
}

#[test]
fn certain_loss_yields_zero_bytes_and_no_arrival() {
    let (mut topo, a, b, c) = chain3();
    let link = topo.link_between(a, b).expect("link exists");
    topo.attach_error_model(link, Direction::Both, ErrorModel::packet_loss(1.0).expect("model"))
        .expect("attach");

    let stop = SimTime::from_secs(1);
    let mut reg = FlowRegistry::new(stop);
    reg.register(&topo, spec(a, c, 1100, PayloadPolicy::Bounded(2048), stop))
        .expect("flow");

    let outcome = run_experiment(topo, reg);

    assert_eq!(outcome.reports[0].bytes_received, 0);
    assert_eq!(outcome.stats.dropped_pkts, outcome.stats.sent_pkts);
    assert!(outcome.last_arrival().is_err());
}

#[test]
fn arrival_watermarks_cover_first_and_last_delivery() {
    let (topo, a, _, c) = chain3();
    let stop = SimTime::from_secs(1);
    let mut reg = FlowRegistry::new(stop);
    reg.register(&topo, spec(a, c, 1100, PayloadPolicy::Bounded(5120), stop))
        .expect("flow");

    let outcome = run_experiment(topo, reg);

    let r = &outcome.reports[0];
    let first = r.first_arrival_secs.expect("first arrival tracked");
    let last = r.last_arrival_secs.expect("last arrival tracked");
    assert!(first <= last);
    assert_eq!(
        outcome.last_arrival().expect("arrivals observed").as_secs_f64(),
        last
    );
}

#[test]
fn unreachable_endpoints_fail_before_any_simulated_time() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let b = topo.add_node("island");
    topo.install_stack(a, StackKind::ReliableStream).expect("stack");
    topo.install_stack(b, StackKind::ReliableStream).expect("stack");

    let stop = SimTime::from_secs(1);
    let mut reg = FlowRegistry::new(stop);
    reg.register(&topo, spec(a, b, 1100, PayloadPolicy::Unbounded, stop))
        .expect("registry does not check reachability");

    assert!(matches!(
        ExperimentDriver::new(topo, reg, StdRng::seed_from_u64(42)),
        Err(ConfigurationError::Unreachable { .. })
    ));
}

#[test]
fn flow_that_never_sends_completes_with_zero_byte_report() {
    let (topo, a, _, c) = chain3();
    let stop = SimTime::from_secs(10);
    let mut reg = FlowRegistry::new(stop);
    // 空窗口：start == stop
    reg.register(
        &topo,
        FlowSpec {
            start: SimTime::from_secs(3),
            stop: SimTime::from_secs(3),
            ..spec(a, c, 1100, PayloadPolicy::Unbounded, stop)
        },
    )
    .expect("flow");
    // 起点恰为全局停止时刻
    reg.register(
        &topo,
        FlowSpec {
            start: stop,
            stop,
            ..spec(a, c, 1200, PayloadPolicy::Unbounded, stop)
        },
    )
    .expect("flow");

    let outcome = run_experiment(topo, reg);

    assert_eq!(outcome.reports.len(), 2);
    for r in &outcome.reports {
        assert_eq!(r.bytes_received, 0);
        assert_eq!(r.first_arrival_secs, None);
    }
    assert_eq!(outcome.final_time, stop);
}

#[test]
fn overlapping_bounded_flows_on_a_shared_link_both_complete() {
    let (topo, a, _, c) = chain3();
    let stop = SimTime::from_secs(1);
    let mut reg = FlowRegistry::new(stop);
    reg.register(&topo, spec(a, c, 1100, PayloadPolicy::Bounded(4096), stop))
        .expect("flow 0");
    reg.register(&topo, spec(a, c, 1200, PayloadPolicy::Bounded(4096), stop))
        .expect("flow 1");

    let outcome = run_experiment(topo, reg);

    // 两条流通过首跳链路的 busy_until 竞争容量，窗口足够时都能完成
    assert_eq!(outcome.reports[0].bytes_received, 4096);
    assert_eq!(outcome.reports[1].bytes_received, 4096);
    assert_eq!(
        outcome.stats.delivered_bytes,
        outcome.reports.iter().map(|r| r.bytes_received).sum::<u64>()
    );
}
