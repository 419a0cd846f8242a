//! 统计信息
//!
//! 实验级的包计数：发出、送达、误码丢弃、过停止时刻丢弃。

/// 网络运行统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub sent_pkts: u64,
    pub sent_bytes: u64,
    pub delivered_pkts: u64,
    pub delivered_bytes: u64,
    /// 被误码模型丢弃
    pub dropped_pkts: u64,
    pub dropped_bytes: u64,
    /// 在流停止时刻之后到达，按取消语义丢弃（不补投）
    pub late_pkts: u64,
    pub late_bytes: u64,
}
