//! 链路类型
//!
//! 双向链路：容量（bps）与传播时延对两个方向相同，
//! 发送串行化状态（busy_until）与误码模型按方向独立维护。

use super::error_model::ErrorModel;
use super::id::NodeId;
use crate::sim::SimTime;

/// 链路方向，以端点 a→b 为正方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    AToB,
    BToA,
    /// 仅用于误码模型附着：同时写两个方向的槽位。
    Both,
}

/// 单方向的传输状态。
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct DirState {
    /// 该方向完成当前序列化发送的时刻
    pub busy_until: SimTime,
    pub error: Option<ErrorModel>,
}

/// 网络链路
#[derive(Debug)]
pub struct Link {
    pub a: NodeId,
    pub b: NodeId,
    pub rate_bps: u64,
    pub delay: SimTime,
    pub(crate) ab: DirState,
    pub(crate) ba: DirState,
}

impl Link {
    pub(crate) fn new(a: NodeId, b: NodeId, rate_bps: u64, delay: SimTime) -> Self {
        Self {
            a,
            b,
            rate_bps,
            delay,
            ab: DirState::default(),
            ba: DirState::default(),
        }
    }

    /// 是否连接给定节点
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// 给定一端，返回另一端
    pub fn peer(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    pub(crate) fn dir_state_mut(&mut self, from: NodeId) -> &mut DirState {
        if from == self.a { &mut self.ab } else { &mut self.ba }
    }

    pub(crate) fn dir_state(&self, from: NodeId) -> &DirState {
        if from == self.a { &self.ab } else { &self.ba }
    }

    /// 传输 `bytes` 所需时间：ceil(bytes*8 / bps) 秒 -> 纳秒
    pub(crate) fn tx_time(&self, bytes: u32) -> SimTime {
        if self.rate_bps == 0 {
            return SimTime(u64::MAX / 4);
        }
        let bits = (bytes as u128).saturating_mul(8);
        let nanos = (bits.saturating_mul(1_000_000_000u128) + (self.rate_bps as u128 - 1))
            / self.rate_bps as u128;
        SimTime(nanos.min(u64::MAX as u128) as u64)
    }

    /// 在 `from` 端发起一次发送：占用该方向的串行化窗口，
    /// 返回 (离开时刻, 到达时刻)。共享链路的多条流通过 busy_until 自然竞争容量。
    pub(crate) fn transmit(&mut self, from: NodeId, bytes: u32, now: SimTime) -> (SimTime, SimTime) {
        let tx = self.tx_time(bytes);
        let delay = self.delay;
        let dir = self.dir_state_mut(from);
        let start = now.max(dir.busy_until);
        let depart = start.saturating_add(tx);
        dir.busy_until = depart;
        let arrive = depart.saturating_add(delay);
        (depart, arrive)
    }
}
