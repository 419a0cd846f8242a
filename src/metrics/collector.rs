//! 指标采集器
//!
//! 交付事件是瞬态的：到达即消费，只留聚合计数与首末到达水位。
//! 吞吐量 = (字节数 × 8) / (时长秒 × 10^6)，单位 Mbit/s。

use crate::net::FlowId;
use crate::sim::SimTime;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::trace;

/// 一次应用层交付。由接收端发出，采集器立即消费。
#[derive(Debug, Clone, Copy)]
pub struct DeliveryEvent {
    pub flow: FlowId,
    pub bytes: u32,
    pub at: SimTime,
}

/// 时延型实验声明跟踪到达时刻，但整个实验没有观测到任何交付事件。
/// 这是需要上报的异常结果，不是崩溃；调用方负责以非零退出码呈现。
#[derive(Debug, Error, PartialEq, Eq)]
#[error("latency tracking was requested but no delivery event was observed")]
pub struct NoArrivalObserved;

#[derive(Debug, Default)]
struct FlowTotals {
    bytes: u64,
    first: Option<SimTime>,
    last: Option<SimTime>,
}

/// 每流聚合结果。
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlowReport {
    pub flow: FlowId,
    pub bytes_received: u64,
    /// Mbit/s，按实验总时长折算
    pub throughput_mbps: f64,
    pub first_arrival_secs: Option<f64>,
    pub last_arrival_secs: Option<f64>,
}

/// 指标采集器
#[derive(Debug, Default)]
pub struct MetricsCollector {
    totals: BTreeMap<FlowId, FlowTotals>,
}

impl MetricsCollector {
    /// 预登记一条流，保证零字节的流也出现在最终报告里。
    pub fn register_flow(&mut self, flow: FlowId) {
        self.totals.entry(flow).or_default();
    }

    /// 消费一次交付事件：累计字节，推进首见/末见水位。
    pub fn on_delivery(&mut self, event: DeliveryEvent) {
        trace!(flow = ?event.flow, bytes = event.bytes, at = ?event.at, "交付事件");
        let t = self.totals.entry(event.flow).or_default();
        t.bytes = t.bytes.saturating_add(event.bytes as u64);
        if t.first.is_none() {
            t.first = Some(event.at);
        }
        t.last = Some(event.at);
    }

    pub fn bytes_received(&self, flow: FlowId) -> u64 {
        self.totals.get(&flow).map(|t| t.bytes).unwrap_or(0)
    }

    /// 产出每流报告。`duration_secs` 为实验声明的总时长。
    pub fn finalize(&self, duration_secs: f64) -> Vec<FlowReport> {
        self.totals
            .iter()
            .map(|(&flow, t)| FlowReport {
                flow,
                bytes_received: t.bytes,
                throughput_mbps: (t.bytes as f64 * 8.0) / (duration_secs * 1e6),
                first_arrival_secs: t.first.map(SimTime::as_secs_f64),
                last_arrival_secs: t.last.map(SimTime::as_secs_f64),
            })
            .collect()
    }

    /// 全实验最后一次交付的时刻。
    /// 没有任何交付事件时返回 `NoArrivalObserved`，而不是伪造的 0。
    pub fn last_arrival(&self) -> Result<SimTime, NoArrivalObserved> {
        self.totals
            .values()
            .filter_map(|t| t.last)
            .max()
            .ok_or(NoArrivalObserved)
    }
}
