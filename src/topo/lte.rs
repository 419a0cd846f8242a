//! LTE/EPC 风格实验拓扑
//!
//! 固定场景：远端主机 —(互联网 p2p，1 Gb/s / 12 ms，双向 0.5% 丢包)—
//! 网关 —(回传，1 Gb/s / 5 ms)— 基站 —(默认承载，由链路质量协作者定)— UE。
//! 协议栈的安装留给各实验变体自己做（不同变体混装不同栈）。

use super::quality::LinkQuality;
use crate::err::ConfigurationError;
use crate::net::{Direction, ErrorModel, LinkId, NodeId, Topology};
use crate::sim::SimTime;
use tracing::debug;

/// EPC 场景配置。全部为显式类型化字段。
#[derive(Debug, Clone)]
pub struct EpcOpts {
    pub remote_hosts: usize,
    pub ues: usize,
    /// UE 与基站的距离（米）
    pub distance_m: f64,
    pub internet_rate_bps: u64,
    pub internet_delay: SimTime,
    /// 互联网 p2p 链路的包级丢包率，双向附着
    pub internet_loss: f64,
    pub backhaul_rate_bps: u64,
    pub backhaul_delay: SimTime,
}

impl Default for EpcOpts {
    fn default() -> Self {
        Self {
            remote_hosts: 1,
            ues: 1,
            distance_m: 250.0,
            internet_rate_bps: 1_000_000_000,
            internet_delay: SimTime::from_millis(12),
            internet_loss: 0.005,
            backhaul_rate_bps: 1_000_000_000,
            backhaul_delay: SimTime::from_millis(5),
        }
    }
}

/// 场景的节点/链路句柄。
#[derive(Debug)]
pub struct EpcNet {
    pub remote_hosts: Vec<NodeId>,
    pub gateway: NodeId,
    pub enb: NodeId,
    pub ues: Vec<NodeId>,
    pub internet_links: Vec<LinkId>,
}

/// 构建 EPC 场景并分配端侧地址。
pub fn build_epc(
    topo: &mut Topology,
    opts: &EpcOpts,
    quality: &dyn LinkQuality,
) -> Result<EpcNet, ConfigurationError> {
    let gateway = topo.add_node("pgw");
    let enb = topo.add_node("enb0");

    topo.connect(
        gateway,
        enb,
        opts.backhaul_rate_bps,
        opts.backhaul_delay,
    )?;

    let loss = ErrorModel::packet_loss(opts.internet_loss)?;

    let mut remote_hosts = Vec::with_capacity(opts.remote_hosts);
    let mut internet_links = Vec::with_capacity(opts.remote_hosts);
    for i in 0..opts.remote_hosts {
        let host = topo.add_node(format!("remote{i}"));
        let link = topo.connect(host, gateway, opts.internet_rate_bps, opts.internet_delay)?;
        // 单个 (链路, 方向) 槽位，一次 Both 写两个方向
        topo.attach_error_model(link, Direction::Both, loss)?;
        topo.assign_address(host)?;
        remote_hosts.push(host);
        internet_links.push(link);
    }

    let bearer_rate = quality.bearer_rate_bps(opts.distance_m);
    let bearer_delay = quality.bearer_delay(opts.distance_m);
    debug!(
        distance_m = opts.distance_m,
        bearer_rate, bearer_delay = ?bearer_delay,
        "链路质量协作者给出的默认承载参数"
    );

    let mut ues = Vec::with_capacity(opts.ues);
    for i in 0..opts.ues {
        let ue = topo.add_node(format!("ue{i}"));
        topo.attach_and_activate_default_bearer(ue, enb, bearer_rate, bearer_delay)?;
        topo.assign_address(ue)?;
        ues.push(ue);
    }

    Ok(EpcNet {
        remote_hosts,
        gateway,
        enb,
        ues,
        internet_links,
    })
}
