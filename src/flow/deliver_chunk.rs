//! 逐包交付事件
//!
//! 包到达一个节点：先按进入方向的误码模型做独立丢弃判定，
//! 中间节点继续转发，终点交给接收端并通知采集器。
//! 晚于流停止时刻的到达按取消语义丢弃，不补投。

use super::world::ExperimentWorld;
use crate::net::{NodeId, Packet};
use crate::sim::{Event, Simulator, World};
use tracing::{debug, trace};

/// 事件：把一个包交给某个节点处理。
#[derive(Debug)]
pub struct DeliverChunk {
    pub to: NodeId,
    pub pkt: Packet,
}

impl Event for DeliverChunk {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let DeliverChunk { to, pkt } = *self;
        let w = world
            .as_any_mut()
            .downcast_mut::<ExperimentWorld>()
            .expect("world must be ExperimentWorld");
        let now = sim.now();

        // 误码判定在交付时刻、按包独立进行，不受其他流状态影响
        let from = pkt.route[pkt.hop - 1];
        if w.topo.draw_loss(from, to, &mut w.rng) {
            debug!(pkt_id = pkt.id, flow = ?pkt.flow, from = ?from, to = ?to, "误码丢弃");
            w.stats.dropped_pkts += 1;
            w.stats.dropped_bytes += pkt.size_bytes as u64;
            return;
        }

        match pkt.next_hop() {
            Some(next) => {
                let (_depart, arrive) = w.topo.transmit_hop(to, next, pkt.size_bytes, now);
                trace!(pkt_id = pkt.id, to = ?next, arrive = ?arrive, "转发");
                sim.schedule(
                    arrive,
                    DeliverChunk {
                        to: next,
                        pkt: pkt.advance(),
                    },
                );
            }
            None => {
                let rt = &w.flows[pkt.flow.0];
                if now >= rt.spec.stop {
                    // 停止是无条件取消点：在途的包丢弃
                    w.stats.late_pkts += 1;
                    w.stats.late_bytes += pkt.size_bytes as u64;
                    return;
                }
                w.deliver_to_sink(&pkt, now);
            }
        }
    }
}
