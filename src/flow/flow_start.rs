//! 流启动事件

use super::send_chunk::SendChunk;
use super::world::{ExperimentWorld, FlowState};
use crate::net::FlowId;
use crate::sim::{Event, Simulator, World};
use tracing::info;

/// 事件：仿真时钟到达流的起始时刻，Armed → Sending。
#[derive(Debug)]
pub struct FlowStart {
    pub flow: FlowId,
}

impl Event for FlowStart {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let FlowStart { flow } = *self;
        let w = world
            .as_any_mut()
            .downcast_mut::<ExperimentWorld>()
            .expect("world must be ExperimentWorld");

        let rt = &mut w.flows[flow.0];
        if rt.state != FlowState::Armed {
            return;
        }
        rt.state = FlowState::Sending;
        info!(flow = ?flow, now = ?sim.now(), "流进入 Sending");

        sim.schedule(sim.now(), SendChunk { flow });
    }
}
