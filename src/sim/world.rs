//! 世界 trait

use super::simulator::Simulator;
use std::any::Any;

/// 仿真世界：由实验层实现（拓扑、流状态、指标采集）。
pub trait World: Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn on_tick(&mut self, _sim: &mut Simulator) {}
}
