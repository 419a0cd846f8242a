//! 接收端能力接口
//!
//! 驱动器与指标采集器只依赖 `Sink` trait 读取计数/消费交付事件，
//! 不向具体实现做向下转型。

use super::id::{FlowId, Port};
use crate::metrics::DeliveryEvent;
use crate::sim::SimTime;

/// 接收端能力：统计应用层到达字节并产生交付事件。
pub trait Sink: Send {
    /// 该接收端累计收到的应用层字节数
    fn total_bytes_received(&self) -> u64;

    /// 接收一次应用层交付，返回供采集器消费的事件。
    fn accept(&mut self, bytes: u32, at: SimTime) -> DeliveryEvent;
}

/// 默认实现：按流计数的包接收端。
#[derive(Debug)]
pub struct PacketSink {
    flow: FlowId,
    port: Port,
    total: u64,
}

impl PacketSink {
    pub fn new(flow: FlowId, port: Port) -> Self {
        Self {
            flow,
            port,
            total: 0,
        }
    }

    pub fn port(&self) -> Port {
        self.port
    }
}

impl Sink for PacketSink {
    fn total_bytes_received(&self) -> u64 {
        self.total
    }

    fn accept(&mut self, bytes: u32, at: SimTime) -> DeliveryEvent {
        self.total = self.total.saturating_add(bytes as u64);
        DeliveryEvent {
            flow: self.flow,
            bytes,
            at,
        }
    }
}
