use crate::err::ConfigurationError;
use crate::net::{Direction, ErrorModel, NodeId, StackKind, Topology};
use crate::sim::SimTime;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn connect_rejects_unknown_node() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let ghost = NodeId(99);

    assert_eq!(
        topo.connect(a, ghost, 1_000_000, SimTime::ZERO),
        Err(ConfigurationError::UnknownNode(ghost))
    );
}

#[test]
fn stack_install_is_idempotent_for_same_kind_and_conflicts_otherwise() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");

    topo.install_stack(a, StackKind::ReliableStream).expect("first install");
    topo.install_stack(a, StackKind::ReliableStream).expect("same kind again");
    assert_eq!(topo.stack_of(a), StackKind::ReliableStream);

    assert!(matches!(
        topo.install_stack(a, StackKind::UnreliableThenReliable),
        Err(ConfigurationError::StackConflict { .. })
    ));
}

#[test]
fn addresses_are_distinct_and_immutable_once_assigned() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let b = topo.add_node("b");

    let addr_a = topo.assign_address(a).expect("assign a");
    let addr_b = topo.assign_address(b).expect("assign b");
    assert_ne!(addr_a, addr_b);

    // 重复分配返回既有地址
    assert_eq!(topo.assign_address(a), Ok(addr_a));
    assert_eq!(topo.address_of(a), Some(addr_a));
    // 1.0.0.0/8 地址池
    assert!(addr_a.to_string().starts_with("1."));
}

#[test]
fn bearer_attachment_is_an_explicit_step() {
    let mut topo = Topology::default();
    let enb = topo.add_node("enb");
    let ue = topo.add_node("ue");

    assert!(!topo.bearer_active(ue));
    topo.attach_and_activate_default_bearer(ue, enb, 20_000_000, SimTime::from_millis(5))
        .expect("attach bearer");
    assert!(topo.bearer_active(ue));
    assert!(topo.reachable(ue, enb));
}

#[test]
fn error_model_reattach_replaces_previous_model() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let b = topo.add_node("b");
    let link = topo.connect(a, b, 1_000_000, SimTime::ZERO).expect("link");

    let always = ErrorModel::packet_loss(1.0).expect("model");
    let never = ErrorModel::packet_loss(0.0).expect("model");
    let mut rng = StdRng::seed_from_u64(1);

    topo.attach_error_model(link, Direction::AToB, always).expect("attach");
    assert!(topo.draw_loss(a, b, &mut rng));

    // last-write-wins：第二次附着整体替换第一次
    topo.attach_error_model(link, Direction::AToB, never).expect("reattach");
    assert!(!topo.draw_loss(a, b, &mut rng));
}

#[test]
fn error_model_directions_are_independent_slots() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let b = topo.add_node("b");
    let link = topo.connect(a, b, 1_000_000, SimTime::ZERO).expect("link");

    let always = ErrorModel::packet_loss(1.0).expect("model");
    let mut rng = StdRng::seed_from_u64(1);

    topo.attach_error_model(link, Direction::AToB, always).expect("attach");
    assert!(topo.draw_loss(a, b, &mut rng));
    // 反方向没有模型
    assert!(!topo.draw_loss(b, a, &mut rng));

    topo.attach_error_model(link, Direction::Both, always).expect("attach both");
    assert!(topo.draw_loss(b, a, &mut rng));
}

#[test]
fn attach_error_model_rejects_unknown_link() {
    let mut topo = Topology::default();
    let model = ErrorModel::packet_loss(0.5).expect("model");
    assert!(matches!(
        topo.attach_error_model(crate::net::LinkId(3), Direction::Both, model),
        Err(ConfigurationError::UnknownLink(_))
    ));
}
