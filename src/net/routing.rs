//! 路由计算（外部协作者）
//!
//! 实验编排层只需要"给定拓扑，回答可达性/一条路径"。
//! 这里用无权 BFS 求最短跳数路径；路由表计算与地址分配的细节不属于本层。

use super::id::NodeId;
use std::collections::VecDeque;

/// 在邻接表上求 `src` 到 `dst` 的最短跳数路径（含两端）。
/// 不可达返回 None。`adj[n]` 为节点 n 的全部邻居。
pub fn shortest_path(adj: &[Vec<NodeId>], src: NodeId, dst: NodeId) -> Option<Vec<NodeId>> {
    if src == dst {
        return Some(vec![src]);
    }

    let n = adj.len();
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut seen = vec![false; n];
    let mut q = VecDeque::new();

    seen[src.0] = true;
    q.push_back(src);

    while let Some(v) = q.pop_front() {
        for &nh in &adj[v.0] {
            if seen[nh.0] {
                continue;
            }
            seen[nh.0] = true;
            prev[nh.0] = Some(v);
            if nh == dst {
                // 回溯构造路径
                let mut path = vec![dst];
                let mut cur = dst;
                while let Some(p) = prev[cur.0] {
                    path.push(p);
                    cur = p;
                }
                path.reverse();
                return Some(path);
            }
            q.push_back(nh);
        }
    }
    None
}
