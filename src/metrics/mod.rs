//! 指标采集模块
//!
//! 订阅接收端的交付事件，聚合为每流与整体的实验结果。
//! 采集器由实验世界持有、按句柄路由通知，不经过任何全局状态。

mod collector;

pub use collector::{DeliveryEvent, FlowReport, MetricsCollector, NoArrivalObserved};
