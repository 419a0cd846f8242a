//! 实验世界
//!
//! 驱动器运行期间的全部可变状态：拓扑、每条流的运行时、
//! 接收端与指标采集器。采集器由这里持有并按句柄路由通知，
//! 没有进程级的"最后到达时刻"之类的全局变量。

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use super::spec::FlowSpec;
use crate::metrics::MetricsCollector;
use crate::net::{NodeId, Packet, Port, Sink, Stats, Topology};
use rand::rngs::StdRng;

/// 流生命周期状态机。`Stopped` 是终态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Armed,
    Sending,
    Stopped,
}

/// 一条流的运行时状态。
#[derive(Debug)]
pub struct FlowRuntime {
    pub spec: FlowSpec,
    pub state: FlowState,
    /// 有界载荷的剩余预算；无界为 None
    pub remaining: Option<u64>,
    /// 启动前按拓扑算好的路径，同流所有包共享
    pub route: Arc<[NodeId]>,
    pub sent_bytes: u64,
}

/// 实验世界：实现 `World`，事件通过向下转型访问。
pub struct ExperimentWorld {
    pub topo: Topology,
    pub flows: Vec<FlowRuntime>,
    pub sinks: HashMap<(NodeId, Port), Box<dyn Sink>>,
    pub collector: MetricsCollector,
    pub stats: Stats,
    pub rng: StdRng,
    next_pkt_id: u64,
}

impl ExperimentWorld {
    pub(crate) fn new(topo: Topology, rng: StdRng) -> Self {
        Self {
            topo,
            flows: Vec::new(),
            sinks: HashMap::new(),
            collector: MetricsCollector::default(),
            stats: Stats::default(),
            rng,
            next_pkt_id: 0,
        }
    }

    pub(crate) fn next_pkt_id(&mut self) -> u64 {
        let id = self.next_pkt_id;
        self.next_pkt_id = self.next_pkt_id.wrapping_add(1);
        id
    }

    /// 把送达终点的包交给对应接收端，并将交付事件转给采集器消费。
    pub(crate) fn deliver_to_sink(&mut self, pkt: &Packet, at: crate::sim::SimTime) {
        let sink = self
            .sinks
            .get_mut(&(pkt.dst(), pkt.port))
            .expect("sink installed for every registered flow");
        let event = sink.accept(pkt.size_bytes, at);
        self.collector.on_delivery(event);
        self.stats.delivered_pkts += 1;
        self.stats.delivered_bytes += pkt.size_bytes as u64;
    }
}

impl crate::sim::World for ExperimentWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
