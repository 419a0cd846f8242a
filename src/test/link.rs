use crate::net::Topology;
use crate::sim::SimTime;

#[test]
fn tx_time_is_ceil_of_bits_over_rate() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let b = topo.add_node("b");
    let link = topo.connect(a, b, 1_000_000_000, SimTime::ZERO).expect("link");
    assert!(topo.link(link).is_some());

    // 1500 字节 @ 1 Gb/s = 12000 ns
    let (depart, arrive) = topo.transmit_hop(a, b, 1500, SimTime::ZERO);
    assert_eq!(depart, SimTime(12_000));
    assert_eq!(arrive, SimTime(12_000));
}

#[test]
fn transmissions_serialize_per_direction() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let b = topo.add_node("b");
    topo.connect(a, b, 1_000_000_000, SimTime::from_micros(2))
        .expect("link");

    let now = SimTime::ZERO;
    let (d1, a1) = topo.transmit_hop(a, b, 1500, now);
    let (d2, a2) = topo.transmit_hop(a, b, 1500, now);

    // 同方向第二次发送要等第一次序列化完成
    assert_eq!(d1, SimTime(12_000));
    assert_eq!(a1, SimTime(14_000));
    assert_eq!(d2, SimTime(24_000));
    assert_eq!(a2, SimTime(26_000));
}

#[test]
fn reverse_direction_does_not_contend() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let b = topo.add_node("b");
    topo.connect(a, b, 1_000_000_000, SimTime::ZERO).expect("link");

    let (d_fwd, _) = topo.transmit_hop(a, b, 1500, SimTime::ZERO);
    let (d_rev, _) = topo.transmit_hop(b, a, 1500, SimTime::ZERO);

    // 两个方向的 busy_until 独立
    assert_eq!(d_fwd, SimTime(12_000));
    assert_eq!(d_rev, SimTime(12_000));
}
