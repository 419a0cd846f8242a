//! 实验驱动器
//!
//! 总体流程：校验每条流两端互相可达（配置期，快速失败），按注册顺序
//! 布防启动/停止事件，把仿真时钟推进到实验全局停止时刻，最后向
//! 指标采集器要聚合结果。全局停止一到即整体拆除，不做善后排空。

use std::sync::Arc;

use super::flow_start::FlowStart;
use super::flow_stop::FlowStop;
use super::registry::FlowRegistry;
use super::world::{ExperimentWorld, FlowRuntime, FlowState};
use crate::err::ConfigurationError;
use crate::metrics::{FlowReport, NoArrivalObserved};
use crate::net::{FlowId, NodeId, PacketSink, Sink, Stats, Topology};
use crate::sim::{SimTime, Simulator};
use rand::rngs::StdRng;
use tracing::info;

/// 实验驱动器：接管拓扑与注册表（两者随之冻结），驱动一次完整实验。
pub struct ExperimentDriver {
    sim: Simulator,
    world: ExperimentWorld,
    stop: SimTime,
}

/// 一次实验的聚合产物。
#[derive(Debug)]
pub struct ExperimentOutcome {
    /// 每流报告，按注册顺序
    pub reports: Vec<FlowReport>,
    /// 每流发送端累计发出的字节数，按注册顺序
    pub sent_bytes: Vec<u64>,
    pub stats: Stats,
    /// 仿真结束时的时钟（≥ 实验全局停止时刻）
    pub final_time: SimTime,
    last_arrival: Option<SimTime>,
}

impl ExperimentOutcome {
    /// 全实验最后一次交付的时刻；从未观测到交付则返回
    /// `NoArrivalObserved`，供时延型实验以非零退出码呈现。
    pub fn last_arrival(&self) -> Result<SimTime, NoArrivalObserved> {
        self.last_arrival.ok_or(NoArrivalObserved)
    }
}

impl ExperimentDriver {
    /// 装配实验。配置期校验全部在这里完成，任何仿真时间推进之前失败。
    pub fn new(
        topo: Topology,
        registry: FlowRegistry,
        rng: StdRng,
    ) -> Result<Self, ConfigurationError> {
        let stop = registry.experiment_stop();
        let mut world = ExperimentWorld::new(topo, rng);

        for (i, spec) in registry.into_flows().into_iter().enumerate() {
            let flow = FlowId(i);
            let route: Arc<[NodeId]> = world
                .topo
                .route(spec.source, spec.sink)
                .ok_or(ConfigurationError::Unreachable {
                    src: spec.source,
                    dst: spec.sink,
                })?
                .into();

            world.collector.register_flow(flow);
            world.sinks.insert(
                (spec.sink, spec.port),
                Box::new(PacketSink::new(flow, spec.port)) as Box<dyn Sink>,
            );
            world.flows.push(FlowRuntime {
                remaining: spec.budget(),
                route,
                spec,
                state: FlowState::Armed,
                sent_bytes: 0,
            });
        }

        Ok(Self {
            sim: Simulator::default(),
            world,
            stop,
        })
    }

    /// 布防所有流并运行到实验全局停止时刻，然后产出聚合结果。
    ///
    /// 从未进入 Sending 的流（空窗口、起点恰为全局停止时刻）
    /// 也会得到一份零字节报告，不算错误。
    pub fn run(mut self) -> ExperimentOutcome {
        info!(flows = self.world.flows.len(), stop = ?self.stop, "布防实验");

        // 注册顺序布防；同一时刻的事件按调度序稳定排序
        for i in 0..self.world.flows.len() {
            let flow = FlowId(i);
            let spec = &self.world.flows[i].spec;
            self.sim.schedule(spec.start, FlowStart { flow });
            self.sim.schedule(spec.stop, FlowStop { flow });
        }

        self.sim.run_until(self.stop, &mut self.world);

        let duration_secs = self.stop.as_secs_f64();
        let reports = self.world.collector.finalize(duration_secs);
        let sent_bytes = self.world.flows.iter().map(|rt| rt.sent_bytes).collect();
        let last_arrival = self.world.collector.last_arrival().ok();

        info!(final_time = ?self.sim.now(), "实验完成");

        ExperimentOutcome {
            reports,
            sent_bytes,
            stats: self.world.stats,
            final_time: self.sim.now(),
            last_arrival,
        }
    }
}
