//! 网络拓扑模块
//!
//! 实验拓扑的静态模型：节点、链路、协议栈、地址与误码注入策略。
//! 拓扑在实验开始后冻结，不支持在线增删节点/链路。

// 子模块声明
mod error_model;
mod id;
mod link;
mod packet;
mod routing;
mod sink;
mod stats;
mod topology;

// 重新导出公共接口
pub use error_model::{ErrorModel, ErrorUnit};
pub use id::{Address, FlowId, LinkId, NodeId, Port};
pub use link::{Direction, Link};
pub use packet::Packet;
pub use routing::shortest_path;
pub use sink::{PacketSink, Sink};
pub use stats::Stats;
pub use topology::{StackKind, Topology};
