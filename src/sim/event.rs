//! 事件 trait

use super::simulator::Simulator;
use super::world::World;

/// 事件：投递给仿真器，在到达调度时刻时执行。
/// `self: Box<Self>` 允许执行时转移所有权。
pub trait Event: Send + 'static {
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World);
}
