//! 流规格
//!
//! 一次声明式数据传输的全部参数。注册后归驱动器所有。

use crate::net::{NodeId, Port, StackKind};
use crate::sim::SimTime;

/// 载荷策略：无界持续流，或固定总字节数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadPolicy {
    Unbounded,
    Bounded(u64),
}

/// 一条声明的数据流。
///
/// 激活窗口 [start, stop) 相对实验起点；独立流的窗口可以任意重叠，
/// 流之间没有隐式串行化。
#[derive(Debug, Clone)]
pub struct FlowSpec {
    pub source: NodeId,
    pub sink: NodeId,
    /// 目的端口；同一接收节点上并发活跃流之间必须唯一
    pub port: Port,
    /// 两端都必须安装的协议栈种类
    pub stack: StackKind,
    pub payload: PayloadPolicy,
    /// 单次发送的块大小（字节），必须为正
    pub chunk_bytes: u32,
    pub start: SimTime,
    pub stop: SimTime,
}
