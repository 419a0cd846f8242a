//! 流停止事件

use super::world::{ExperimentWorld, FlowState};
use crate::net::FlowId;
use crate::sim::{Event, Simulator, World};
use tracing::info;

/// 事件：流的停止时刻。无条件取消点：即使字节预算未用完也进入终态，
/// 之后不再发出任何块。
#[derive(Debug)]
pub struct FlowStop {
    pub flow: FlowId,
}

impl Event for FlowStop {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let FlowStop { flow } = *self;
        let w = world
            .as_any_mut()
            .downcast_mut::<ExperimentWorld>()
            .expect("world must be ExperimentWorld");

        let rt = &mut w.flows[flow.0];
        if rt.state != FlowState::Stopped {
            info!(flow = ?flow, now = ?sim.now(), sent_bytes = rt.sent_bytes, "流进入 Stopped");
            rt.state = FlowState::Stopped;
        }
    }
}
