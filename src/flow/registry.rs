//! 流规格注册表
//!
//! 注册即校验，失败的规格不会进入实验（快速失败，不允许部分运行）。
//! 驱动器启动时按值接管注册表，注册随之自然关闭。

use super::spec::{FlowSpec, PayloadPolicy};
use crate::err::InvalidFlowSpec;
use crate::net::{FlowId, StackKind, Topology};
use crate::sim::SimTime;
use tracing::debug;

/// 流规格注册表
#[derive(Debug)]
pub struct FlowRegistry {
    experiment_stop: SimTime,
    flows: Vec<FlowSpec>,
}

impl FlowRegistry {
    /// `experiment_stop`：实验全局停止时刻，所有激活窗口必须落在其内。
    pub fn new(experiment_stop: SimTime) -> Self {
        Self {
            experiment_stop,
            flows: Vec::new(),
        }
    }

    pub fn experiment_stop(&self) -> SimTime {
        self.experiment_stop
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn flows(&self) -> &[FlowSpec] {
        &self.flows
    }

    pub(crate) fn into_flows(self) -> Vec<FlowSpec> {
        self.flows
    }

    /// 注册一条流。多条流共享发送节点（扇出）或以不同端口共享
    /// 接收节点（按端口扇入）都是允许的。
    pub fn register(
        &mut self,
        topo: &Topology,
        spec: FlowSpec,
    ) -> Result<FlowId, InvalidFlowSpec> {
        if spec.chunk_bytes == 0 {
            return Err(InvalidFlowSpec::ZeroChunk);
        }
        if spec.source == spec.sink {
            return Err(InvalidFlowSpec::SelfLoop);
        }
        if spec.start > spec.stop {
            return Err(InvalidFlowSpec::WindowInverted);
        }
        if spec.stop > self.experiment_stop {
            return Err(InvalidFlowSpec::WindowExceedsExperiment);
        }
        if let Some(taken) = self
            .flows
            .iter()
            .find(|f| f.sink == spec.sink && f.port == spec.port)
        {
            return Err(InvalidFlowSpec::PortInUse {
                sink: taken.sink,
                port: taken.port,
            });
        }
        if spec.stack == StackKind::None {
            return Err(InvalidFlowSpec::StackMismatch {
                node: spec.source,
                required: spec.stack,
            });
        }
        for node in [spec.source, spec.sink] {
            if topo.stack_of(node) != spec.stack {
                return Err(InvalidFlowSpec::StackMismatch {
                    node,
                    required: spec.stack,
                });
            }
        }

        let id = FlowId(self.flows.len());
        debug!(
            flow = ?id,
            source = ?spec.source,
            sink = ?spec.sink,
            port = spec.port,
            payload = ?spec.payload,
            "注册流"
        );
        self.flows.push(spec);
        Ok(id)
    }
}

impl FlowSpec {
    /// 初始字节预算；无界流没有预算。
    pub(crate) fn budget(&self) -> Option<u64> {
        match self.payload {
            PayloadPolicy::Unbounded => None,
            PayloadPolicy::Bounded(n) => Some(n),
        }
    }
}
