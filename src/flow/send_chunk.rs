//! 逐块发送事件
//!
//! 批量发送端的驱动循环：每次事件发出一个块，然后在首跳链路
//! 完成本次序列化的时刻（depart）重新调度自己。共享链路的多条流
//! 经由链路的 busy_until 自然竞争容量，驱动器不做额外公平性仲裁。

use std::sync::Arc;

use super::deliver_chunk::DeliverChunk;
use super::world::{ExperimentWorld, FlowState};
use crate::net::{FlowId, Packet};
use crate::sim::{Event, Simulator, World};
use tracing::{debug, trace};

/// 事件：流的发送端发出下一个块。
#[derive(Debug)]
pub struct SendChunk {
    pub flow: FlowId,
}

impl Event for SendChunk {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let SendChunk { flow } = *self;
        let w = world
            .as_any_mut()
            .downcast_mut::<ExperimentWorld>()
            .expect("world must be ExperimentWorld");
        let now = sim.now();

        let rt = &mut w.flows[flow.0];
        if rt.state != FlowState::Sending {
            return;
        }
        // 停止时刻先于本次发送：停止抢占无界发送
        if now >= rt.spec.stop {
            rt.state = FlowState::Stopped;
            return;
        }

        // 有界载荷：预算耗尽即转入终态，即使停止时刻未到
        let chunk = match rt.remaining {
            None => rt.spec.chunk_bytes,
            Some(0) => {
                debug!(flow = ?flow, now = ?now, sent = rt.sent_bytes, "字节预算耗尽");
                rt.state = FlowState::Stopped;
                return;
            }
            Some(left) => (left.min(rt.spec.chunk_bytes as u64)) as u32,
        };

        let src = rt.route[0];
        let first_hop = rt.route[1];
        let port = rt.spec.port;
        let route = Arc::clone(&rt.route);
        rt.sent_bytes += chunk as u64;
        if let Some(left) = rt.remaining.as_mut() {
            *left -= chunk as u64;
        }

        let pkt_id = w.next_pkt_id();
        let pkt = Packet {
            id: pkt_id,
            flow,
            port,
            size_bytes: chunk,
            route,
            hop: 0,
        };

        let (depart, arrive) = w.topo.transmit_hop(src, first_hop, chunk, now);
        w.stats.sent_pkts += 1;
        w.stats.sent_bytes += chunk as u64;
        trace!(flow = ?flow, pkt_id, chunk, depart = ?depart, arrive = ?arrive, "发出块");

        sim.schedule(
            arrive,
            DeliverChunk {
                to: first_hop,
                pkt: pkt.advance(),
            },
        );
        // 首跳完成序列化后立即尝试下一个块
        sim.schedule(depart, SendChunk { flow });
    }
}
