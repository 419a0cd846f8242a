//! 实验编排模块
//!
//! 把一次网络性能实验建模为共享同一条仿真时间线的一组独立流：
//! 流规格注册表（声明式描述）、实验驱动器（按时间戳调度启停与逐块发送）、
//! 以及流生命周期 Armed → Sending → Stopped 的状态机。

// 子模块声明
mod deliver_chunk;
mod driver;
mod flow_start;
mod flow_stop;
mod registry;
mod send_chunk;
mod spec;
mod world;

// 重新导出公共接口
pub use deliver_chunk::DeliverChunk;
pub use driver::{ExperimentDriver, ExperimentOutcome};
pub use flow_start::FlowStart;
pub use flow_stop::FlowStop;
pub use registry::FlowRegistry;
pub use send_chunk::SendChunk;
pub use spec::{FlowSpec, PayloadPolicy};
pub use world::{ExperimentWorld, FlowRuntime, FlowState};
