//! 错误类型
//!
//! 配置期错误一律快速失败：在任何仿真时间推进之前终止，不允许部分运行。
//! 运行期丢包不是错误，是被建模的行为。

use crate::net::{NodeId, Port};
use thiserror::Error;

/// 拓扑/实验装配错误。
#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    /// 链路或操作引用了不存在的节点
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    /// 同一节点上重复安装了不兼容的协议栈
    #[error("stack conflict on {node:?}: {installed:?} already installed, refusing {requested:?}")]
    StackConflict {
        node: NodeId,
        installed: crate::net::StackKind,
        requested: crate::net::StackKind,
    },

    /// 引用了不存在的链路
    #[error("unknown link {0:?}")]
    UnknownLink(crate::net::LinkId),

    /// 丢包概率不在 [0, 1]
    #[error("loss probability {0} out of [0, 1]")]
    LossProbabilityOutOfRange(f64),

    /// 流的发送端与接收端互不可达
    #[error("flow endpoints unreachable: {src:?} <-> {dst:?}")]
    Unreachable { src: NodeId, dst: NodeId },
}

/// 流规格注册错误。
#[derive(Debug, Error, PartialEq)]
pub enum InvalidFlowSpec {
    /// 块大小必须为正
    #[error("chunk size must be positive")]
    ZeroChunk,

    /// 发送端与接收端必须是不同节点
    #[error("source and sink must be distinct nodes")]
    SelfLoop,

    /// 激活窗口起点晚于终点
    #[error("activation window inverted: start > stop")]
    WindowInverted,

    /// 激活窗口超出实验全局停止时刻
    #[error("activation window exceeds the experiment stop time")]
    WindowExceedsExperiment,

    /// 目的端口已被同一接收节点上的另一条流占用
    #[error("port {port} already bound on sink node {sink:?}")]
    PortInUse { sink: NodeId, port: Port },

    /// 端点未安装流声明的协议栈
    #[error("node {node:?} does not carry the {required:?} stack")]
    StackMismatch {
        node: NodeId,
        required: crate::net::StackKind,
    },
}

/// CLI 参数解析错误（文件大小字符串）。
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("file size unit ({0}) is not supported")]
    UnsupportedUnit(String),

    #[error("malformed file size: {0:?}")]
    Malformed(String),
}
