//! 数据包类型
//!
//! 一条流的一个应用数据块在网络层的载体。
//! 路由在流启动时计算一次，同流的所有包共享（Arc）。

use super::id::{FlowId, NodeId, Port};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Packet {
    pub id: u64,
    pub flow: FlowId,
    pub port: Port,
    pub size_bytes: u32,
    pub route: Arc<[NodeId]>,
    /// 当前所在节点在 route 中的索引
    pub hop: usize,
}

impl Packet {
    /// 最终目的节点
    pub fn dst(&self) -> NodeId {
        *self.route.last().expect("route non-empty")
    }

    /// 当前所在节点
    pub fn at(&self) -> NodeId {
        self.route[self.hop]
    }

    /// 下一跳（若有）
    pub fn next_hop(&self) -> Option<NodeId> {
        self.route.get(self.hop + 1).copied()
    }

    /// 前进到下一跳
    pub fn advance(mut self) -> Self {
        self.hop += 1;
        self
    }
}
