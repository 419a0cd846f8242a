//! 实验拓扑构建
//!
//! 预置场景的装配函数与链路质量协作者接口。

mod lte;
mod quality;

pub use lte::{EpcNet, EpcOpts, build_epc};
pub use quality::{LinkQuality, LogDistanceQuality};
