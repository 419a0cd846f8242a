use crate::net::Topology;
use crate::sim::SimTime;

fn chain(topo: &mut Topology, n: usize) -> Vec<crate::net::NodeId> {
    let nodes: Vec<_> = (0..n).map(|i| topo.add_node(format!("n{i}"))).collect();
    for w in nodes.windows(2) {
        topo.connect(w[0], w[1], 1_000_000_000, SimTime::from_micros(1))
            .expect("link");
    }
    nodes
}

#[test]
fn route_follows_the_chain() {
    let mut topo = Topology::default();
    let nodes = chain(&mut topo, 4);

    let route = topo.route(nodes[0], nodes[3]).expect("reachable");
    assert_eq!(route, nodes);
    assert!(topo.reachable(nodes[3], nodes[0]));
}

#[test]
fn disconnected_nodes_are_unreachable() {
    let mut topo = Topology::default();
    let nodes = chain(&mut topo, 2);
    let island = topo.add_node("island");

    assert!(topo.route(nodes[0], island).is_none());
    assert!(!topo.reachable(island, nodes[1]));
}

#[test]
fn route_picks_shortest_hop_count() {
    let mut topo = Topology::default();
    let a = topo.add_node("a");
    let b = topo.add_node("b");
    let c = topo.add_node("c");
    let d = topo.add_node("d");
    // a-b-c-d 链，外加 a-d 捷径
    for (x, y) in [(a, b), (b, c), (c, d), (a, d)] {
        topo.connect(x, y, 1_000_000, SimTime::ZERO).expect("link");
    }

    let route = topo.route(a, d).expect("reachable");
    assert_eq!(route, vec![a, d]);
}
