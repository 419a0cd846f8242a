//! 拓扑模型
//!
//! 节点、链路、协议栈与地址的静态装配。所有识别的配置项都是
//! 显式类型化字段（链路速率/时延、误码率、协议栈种类），
//! 不做字符串键的迟绑定查找。
//!
//! 实验启动后拓扑被驱动器整体接管（按值移动），自然冻结。

use std::collections::HashMap;

use super::error_model::ErrorModel;
use super::id::{Address, LinkId, NodeId};
use super::link::{Direction, Link};
use super::routing::shortest_path;
use crate::err::ConfigurationError;
use crate::sim::SimTime;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

/// 节点上安装的协议栈种类。
///
/// 流通过通用的 socket-factory 能力消费协议栈，本层不实现协议内部。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StackKind {
    /// 未安装
    None,
    /// 可靠字节流（TCP 语义）
    ReliableStream,
    /// 先不可靠后可靠的自定义栈（QUIC 语义）
    UnreliableThenReliable,
}

#[derive(Debug)]
struct NodeInfo {
    name: String,
    stack: StackKind,
    addr: Option<Address>,
    bearer_active: bool,
}

/// 网络拓扑
#[derive(Debug, Default)]
pub struct Topology {
    nodes: Vec<NodeInfo>,
    links: Vec<Link>,
    edges: HashMap<(NodeId, NodeId), LinkId>,
    adj: Vec<Vec<NodeId>>,
    next_host: u32,
}

impl Topology {
    /// 添加节点
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let name = name.into();
        debug!(node = ?id, name = %name, "添加节点");
        self.nodes.push(NodeInfo {
            name,
            stack: StackKind::None,
            addr: None,
            bearer_active: false,
        });
        self.adj.push(Vec::new());
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.name.as_str())
    }

    fn check_node(&self, node: NodeId) -> Result<(), ConfigurationError> {
        if node.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(ConfigurationError::UnknownNode(node))
        }
    }

    /// 连接两个节点（双向链路，两个方向的串行化状态独立）。
    pub fn connect(
        &mut self,
        a: NodeId,
        b: NodeId,
        rate_bps: u64,
        delay: SimTime,
    ) -> Result<LinkId, ConfigurationError> {
        self.check_node(a)?;
        self.check_node(b)?;

        let id = LinkId(self.links.len());
        debug!(link = ?id, a = ?a, b = ?b, rate_bps, delay = ?delay, "创建链路");
        self.links.push(Link::new(a, b, rate_bps, delay));
        self.edges.insert((a, b), id);
        self.edges.insert((b, a), id);
        self.adj[a.0].push(b);
        self.adj[b.0].push(a);
        Ok(id)
    }

    /// 安装协议栈。同种类重复安装幂等；不同种类冲突。
    pub fn install_stack(
        &mut self,
        node: NodeId,
        kind: StackKind,
    ) -> Result<(), ConfigurationError> {
        self.check_node(node)?;
        let info = &mut self.nodes[node.0];
        match info.stack {
            StackKind::None => {
                info.stack = kind;
                Ok(())
            }
            installed if installed == kind => Ok(()),
            installed => Err(ConfigurationError::StackConflict {
                node,
                installed,
                requested: kind,
            }),
        }
    }

    pub fn stack_of(&self, node: NodeId) -> StackKind {
        self.nodes
            .get(node.0)
            .map(|n| n.stack)
            .unwrap_or(StackKind::None)
    }

    /// 分配网络地址。装配期一次性分配；重复调用返回既有地址。
    pub fn assign_address(&mut self, node: NodeId) -> Result<Address, ConfigurationError> {
        self.check_node(node)?;
        if let Some(addr) = self.nodes[node.0].addr {
            return Ok(addr);
        }
        // 1.0.0.0/8 地址池，按序分配
        self.next_host += 1;
        let addr = Address(0x0100_0000 | self.next_host);
        self.nodes[node.0].addr = Some(addr);
        debug!(node = ?node, addr = %addr, "分配地址");
        Ok(addr)
    }

    pub fn address_of(&self, node: NodeId) -> Option<Address> {
        self.nodes.get(node.0).and_then(|n| n.addr)
    }

    /// 把 UE 经无线路径挂到基站/网关一侧，并激活默认承载。
    ///
    /// 承载激活是独立的命名步骤，不作为 attach 的隐式副作用。
    /// 无线路径的速率/时延由链路质量协作者在调用侧算好传入。
    pub fn attach_and_activate_default_bearer(
        &mut self,
        ue: NodeId,
        enb: NodeId,
        bearer_rate_bps: u64,
        bearer_delay: SimTime,
    ) -> Result<LinkId, ConfigurationError> {
        let link = self.connect(ue, enb, bearer_rate_bps, bearer_delay)?;
        self.nodes[ue.0].bearer_active = true;
        info!(ue = ?ue, enb = ?enb, link = ?link, "挂载 UE 并激活默认承载");
        Ok(link)
    }

    pub fn bearer_active(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0)
            .map(|n| n.bearer_active)
            .unwrap_or(false)
    }

    /// 给链路的某个方向附着误码模型。
    /// 每 (链路, 方向) 至多一个模型；重复附着为整体替换（last-write-wins）。
    pub fn attach_error_model(
        &mut self,
        link: LinkId,
        direction: Direction,
        model: ErrorModel,
    ) -> Result<(), ConfigurationError> {
        let l = self
            .links
            .get_mut(link.0)
            .ok_or(ConfigurationError::UnknownLink(link))?;
        debug!(
            link = ?link,
            direction = ?direction,
            loss = model.loss_probability(),
            "附着误码模型"
        );
        match direction {
            Direction::AToB => l.ab.error = Some(model),
            Direction::BToA => l.ba.error = Some(model),
            Direction::Both => {
                l.ab.error = Some(model);
                l.ba.error = Some(model);
            }
        }
        Ok(())
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.0)
    }

    pub fn link_between(&self, a: NodeId, b: NodeId) -> Option<LinkId> {
        self.edges.get(&(a, b)).copied()
    }

    /// 最短跳数路径（含两端）；不可达返回 None。
    pub fn route(&self, src: NodeId, dst: NodeId) -> Option<Vec<NodeId>> {
        if src.0 >= self.nodes.len() || dst.0 >= self.nodes.len() {
            return None;
        }
        shortest_path(&self.adj, src, dst)
    }

    /// 双向可达性（链路都是双向的，等价于一次 BFS 可达）。
    pub fn reachable(&self, a: NodeId, b: NodeId) -> bool {
        self.route(a, b).is_some()
    }

    /// 在 from→to 这一跳上发起一次发送，返回 (离开时刻, 到达时刻)。
    /// 调用方保证该跳来自一条已计算的路径。
    pub fn transmit_hop(
        &mut self,
        from: NodeId,
        to: NodeId,
        bytes: u32,
        now: SimTime,
    ) -> (SimTime, SimTime) {
        let link_id = *self
            .edges
            .get(&(from, to))
            .unwrap_or_else(|| panic!("no link from {from:?} to {to:?}"));
        self.links[link_id.0].transmit(from, bytes, now)
    }

    /// 在 from→to 这一跳的交付时刻做误码判定：true 表示丢弃。
    pub fn draw_loss<R: Rng>(&self, from: NodeId, to: NodeId, rng: &mut R) -> bool {
        let Some(&link_id) = self.edges.get(&(from, to)) else {
            return false;
        };
        match self.links[link_id.0].dir_state(from).error {
            Some(model) => model.should_drop(rng),
            None => false,
        }
    }
}
