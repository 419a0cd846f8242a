//! 仿真核心模块
//!
//! 事件驱动仿真引擎：仿真时间、事件、世界与仿真器。
//! 实验编排层只向它调度动作并读取最终时钟状态。

// 子模块声明
mod event;
mod scheduled_event;
mod simulator;
mod time;
mod world;

// 重新导出公共接口
pub use event::Event;
pub use scheduled_event::ScheduledEvent;
pub use simulator::Simulator;
pub use time::SimTime;
pub use world::World;
