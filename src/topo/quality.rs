//! 链路质量协作者
//!
//! 无线信道与移动性建模不属于本层；这里只消费一个不透明的
//! "距离 → 承载速率/时延" 接口。默认实现是一个粗粒度的
//! 对数距离分档，够实验参数化用，不是物理模型。

use crate::sim::SimTime;

/// 链路质量：给定 UE 与基站的距离，给出默认承载的有效速率与时延。
pub trait LinkQuality {
    fn bearer_rate_bps(&self, distance_m: f64) -> u64;
    fn bearer_delay(&self, distance_m: f64) -> SimTime;
}

/// 默认实现：按距离分档的阶梯模型。
#[derive(Debug, Clone, Default)]
pub struct LogDistanceQuality;

impl LinkQuality for LogDistanceQuality {
    fn bearer_rate_bps(&self, distance_m: f64) -> u64 {
        match distance_m {
            d if d <= 100.0 => 75_000_000,
            d if d <= 300.0 => 35_000_000,
            d if d <= 600.0 => 15_000_000,
            _ => 5_000_000,
        }
    }

    fn bearer_delay(&self, distance_m: f64) -> SimTime {
        // 传播时延本身可忽略；这里体现的是分档的调度/重传开销
        match distance_m {
            d if d <= 300.0 => SimTime::from_millis(5),
            _ => SimTime::from_millis(10),
        }
    }
}
