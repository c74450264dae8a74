use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{DfsEvent, depth_first_search};

use crate::{
    foundation::core::{Point, Rect, Size, Vec2},
    foundation::error::{DiagramError, DiagramResult},
    layout::adapter::{EdgeKey, LayeredLayout, LayoutInput, LayoutOutput},
    layout::options::{LayoutOptions, RankDir},
};

/// Built-in layered layout engine.
///
/// Pipeline: break cycles by reversing DFS back edges, rank by longest path, split long edges
/// with dummy nodes, order ranks by barycenter sweeps, then place nodes with the configured
/// spacing. All work happens in a top-to-bottom frame that is rotated for the requested
/// [`RankDir`] at the end. Output is translated so the drawing's top-left corner is the origin.
#[derive(Clone, Copy, Debug)]
pub struct LayeredEngine {
    order_sweeps: usize,
    placement_sweeps: usize,
}

impl Default for LayeredEngine {
    fn default() -> Self {
        Self {
            order_sweeps: 8,
            placement_sweeps: 4,
        }
    }
}

impl LayeredEngine {
    /// Engine with default sweep counts.
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Clone, Copy, Debug)]
struct LNode {
    // Dimensions in the top-to-bottom working frame.
    width: f64,
    height: f64,
    rank: usize,
    real: bool,
}

#[derive(Clone, Copy, Debug)]
struct LEdge {
    src: usize,
    dst: usize,
    reversed: bool,
}

impl LayeredLayout for LayeredEngine {
    #[tracing::instrument(skip_all, fields(nodes = input.nodes.len(), edges = input.edges.len()))]
    fn layout(&self, input: &LayoutInput) -> DiagramResult<LayoutOutput> {
        if input.nodes.is_empty() {
            return Ok(LayoutOutput::default());
        }
        let opts = input.options;

        let ids: Vec<&String> = input.nodes.keys().collect();
        let index: BTreeMap<&str, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        let sizes: Vec<Size> = input.nodes.values().copied().collect();

        let mut pairs = Vec::with_capacity(input.edges.len());
        for e in &input.edges {
            if e.from == e.to {
                return Err(DiagramError::layout(format!(
                    "self-loop '{}-{}' is not supported",
                    e.from, e.to
                )));
            }
            let lookup = |id: &str| {
                index.get(id).copied().ok_or_else(|| {
                    DiagramError::layout(format!(
                        "edge '{}-{}' references unknown vertex '{id}'",
                        e.from, e.to
                    ))
                })
            };
            pairs.push((lookup(&e.from)?, lookup(&e.to)?));
        }

        let ledges = break_cycles(ids.len(), &pairs);
        let ranks = assign_ranks(ids.len(), &ledges)?;

        let mut nodes: Vec<LNode> = sizes
            .iter()
            .zip(&ranks)
            .map(|(s, &rank)| {
                let (width, height) = if opts.rank_dir.is_horizontal() {
                    (s.height, s.width)
                } else {
                    (s.width, s.height)
                };
                LNode {
                    width,
                    height,
                    rank,
                    real: true,
                }
            })
            .collect();

        // Long edges become chains of zero-size dummies, one per crossed rank.
        let mut up: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut down: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
        let mut chains: Vec<Vec<usize>> = Vec::with_capacity(ledges.len());
        for le in &ledges {
            let mut chain = Vec::new();
            let mut prev = le.src;
            for rank in nodes[le.src].rank + 1..nodes[le.dst].rank {
                let d = nodes.len();
                nodes.push(LNode {
                    width: 0.0,
                    height: 0.0,
                    rank,
                    real: false,
                });
                up.push(Vec::new());
                down.push(Vec::new());
                down[prev].push(d);
                up[d].push(prev);
                chain.push(d);
                prev = d;
            }
            down[prev].push(le.dst);
            up[le.dst].push(prev);
            chains.push(chain);
        }

        let rank_count = nodes.iter().map(|n| n.rank).max().unwrap_or(0) + 1;
        let mut layers: Vec<Vec<usize>> = vec![Vec::new(); rank_count];
        for (i, n) in nodes.iter().enumerate() {
            layers[n.rank].push(i);
        }

        let mut pos = vec![0usize; nodes.len()];
        order_layers(&mut layers, &mut pos, &up, &down, self.order_sweeps);

        let xs = place_in_ranks(&layers, &nodes, &up, &down, opts, self.placement_sweeps);
        let ys = rank_centers(&layers, &nodes, opts.rank_sep);

        let frame = |i: usize| -> Point {
            let p = Point::new(xs[i], ys[nodes[i].rank]);
            match opts.rank_dir {
                RankDir::TopToBottom => p,
                RankDir::BottomToTop => Point::new(p.x, -p.y),
                RankDir::LeftToRight => Point::new(p.y, p.x),
                RankDir::RightToLeft => Point::new(-p.y, p.x),
            }
        };

        let centers: Vec<Point> = (0..ids.len()).map(frame).collect();
        let mut routes: Vec<Vec<Point>> = Vec::with_capacity(ledges.len());
        for ((from, to), (le, chain)) in pairs.iter().zip(ledges.iter().zip(&chains)) {
            let mut inner: Vec<Point> = chain.iter().map(|&d| frame(d)).collect();
            if le.reversed {
                inner.reverse();
            }
            let first = inner.first().copied().unwrap_or(centers[*to]);
            let last = inner.last().copied().unwrap_or(centers[*from]);
            let mut route = Vec::with_capacity(inner.len() + 2);
            route.push(intersect_rect(centers[*from], sizes[*from], first));
            route.extend(inner);
            route.push(intersect_rect(centers[*to], sizes[*to], last));
            routes.push(route);
        }

        let mut bounds: Option<Rect> = None;
        for (c, s) in centers.iter().zip(&sizes) {
            let r = Rect::from_center_size(*c, *s);
            bounds = Some(bounds.map_or(r, |b| b.union(r)));
        }
        for p in routes.iter().flatten() {
            bounds = bounds.map(|b| b.union_pt(*p));
        }
        let shift = bounds.map_or(Vec2::ZERO, |b| -b.origin().to_vec2());

        tracing::debug!(
            ranks = rank_count,
            dummies = nodes.len() - ids.len(),
            reversed = ledges.iter().filter(|e| e.reversed).count(),
            "layered layout computed"
        );

        Ok(LayoutOutput {
            nodes: ids
                .iter()
                .zip(&centers)
                .map(|(id, c)| ((*id).clone(), *c + shift))
                .collect(),
            edges: input
                .edges
                .iter()
                .zip(routes)
                .map(|(e, route)| {
                    (
                        EdgeKey::new(e.from.clone(), e.to.clone()),
                        route.into_iter().map(|p| p + shift).collect(),
                    )
                })
                .collect(),
        })
    }
}

// Reverse every DFS back edge so the remaining graph is acyclic.
fn break_cycles(n: usize, pairs: &[(usize, usize)]) -> Vec<LEdge> {
    let mut g = DiGraph::<(), ()>::with_capacity(n, pairs.len());
    for _ in 0..n {
        g.add_node(());
    }
    for &(a, b) in pairs {
        g.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
    }

    let mut back = BTreeSet::new();
    depth_first_search(&g, g.node_indices(), |event| {
        if let DfsEvent::BackEdge(u, v) = event {
            back.insert((u.index(), v.index()));
        }
    });

    pairs
        .iter()
        .map(|&(a, b)| {
            if back.contains(&(a, b)) {
                LEdge {
                    src: b,
                    dst: a,
                    reversed: true,
                }
            } else {
                LEdge {
                    src: a,
                    dst: b,
                    reversed: false,
                }
            }
        })
        .collect()
}

// Longest-path ranking, then sources are pulled down next to their nearest successor.
fn assign_ranks(n: usize, edges: &[LEdge]) -> DiagramResult<Vec<usize>> {
    let mut g = DiGraph::<(), ()>::with_capacity(n, edges.len());
    for _ in 0..n {
        g.add_node(());
    }
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut succs: Vec<Vec<usize>> = vec![Vec::new(); n];
    for e in edges {
        g.add_edge(NodeIndex::new(e.src), NodeIndex::new(e.dst), ());
        preds[e.dst].push(e.src);
        succs[e.src].push(e.dst);
    }

    let order = toposort(&g, None)
        .map_err(|c| {
            DiagramError::layout(format!(
                "cycle through node #{} survived cycle breaking",
                c.node_id().index()
            ))
        })?
        .into_iter()
        .map(|ix| ix.index())
        .collect::<Vec<_>>();

    let mut rank = vec![0usize; n];
    for &v in &order {
        rank[v] = preds[v].iter().map(|&u| rank[u] + 1).max().unwrap_or(0);
    }
    for &v in order.iter().rev() {
        if preds[v].is_empty()
            && let Some(min_succ) = succs[v].iter().map(|&s| rank[s]).min()
        {
            rank[v] = min_succ.saturating_sub(1);
        }
    }

    let min = rank.iter().copied().min().unwrap_or(0);
    Ok(rank.into_iter().map(|r| r - min).collect())
}

fn sync_positions(layers: &[Vec<usize>], pos: &mut [usize]) {
    for layer in layers {
        for (i, &v) in layer.iter().enumerate() {
            pos[v] = i;
        }
    }
}

fn count_crossings(layers: &[Vec<usize>], pos: &[usize], down: &[Vec<usize>]) -> usize {
    let mut total = 0;
    for layer in layers {
        let mut segs = Vec::new();
        for &u in layer {
            for &v in &down[u] {
                segs.push((pos[u], pos[v]));
            }
        }
        for (i, a) in segs.iter().enumerate() {
            for b in &segs[i + 1..] {
                if (a.0 < b.0 && a.1 > b.1) || (a.0 > b.0 && a.1 < b.1) {
                    total += 1;
                }
            }
        }
    }
    total
}

fn reorder_by_barycenter(layer: &mut [usize], adjacent: &[Vec<usize>], pos: &[usize]) {
    let bary = |v: usize| -> f64 {
        let ns = &adjacent[v];
        if ns.is_empty() {
            pos[v] as f64
        } else {
            ns.iter().map(|&n| pos[n] as f64).sum::<f64>() / ns.len() as f64
        }
    };
    layer.sort_by(|&a, &b| bary(a).total_cmp(&bary(b)).then(pos[a].cmp(&pos[b])));
}

// Alternating down/up barycenter sweeps, keeping the ordering with the fewest crossings.
fn order_layers(
    layers: &mut [Vec<usize>],
    pos: &mut [usize],
    up: &[Vec<usize>],
    down: &[Vec<usize>],
    sweeps: usize,
) {
    sync_positions(layers, pos);
    let mut best = layers.to_vec();
    let mut best_crossings = count_crossings(layers, pos, down);

    for sweep in 0..sweeps {
        if best_crossings == 0 {
            break;
        }
        if sweep % 2 == 0 {
            for r in 1..layers.len() {
                reorder_by_barycenter(&mut layers[r], up, pos);
                sync_positions(&layers[r..=r], pos);
            }
        } else {
            for r in (0..layers.len().saturating_sub(1)).rev() {
                reorder_by_barycenter(&mut layers[r], down, pos);
                sync_positions(&layers[r..=r], pos);
            }
        }
        let crossings = count_crossings(layers, pos, down);
        tracing::trace!(sweep, crossings, "ordering sweep");
        if crossings < best_crossings {
            best_crossings = crossings;
            best = layers.to_vec();
        }
    }

    layers.clone_from_slice(&best);
    sync_positions(layers, pos);
}

fn min_separation(a: &LNode, b: &LNode, node_sep: f64, edge_sep: f64) -> f64 {
    let gap = |n: &LNode| if n.real { node_sep } else { edge_sep };
    a.width / 2.0 + b.width / 2.0 + (gap(a) + gap(b)) / 2.0
}

// Pack each rank, then pull nodes toward their neighbors' mean x while keeping the minimum
// separation. Each pass averages a left-anchored and a right-anchored placement; both satisfy
// the spacing constraints, so their mean does too.
fn place_in_ranks(
    layers: &[Vec<usize>],
    nodes: &[LNode],
    up: &[Vec<usize>],
    down: &[Vec<usize>],
    opts: LayoutOptions,
    sweeps: usize,
) -> Vec<f64> {
    let sep = |a: usize, b: usize| min_separation(&nodes[a], &nodes[b], opts.node_sep, opts.edge_sep);
    let mut x = vec![0.0f64; nodes.len()];

    for layer in layers {
        let mut cursor = 0.0;
        for (i, &v) in layer.iter().enumerate() {
            if i > 0 {
                cursor += sep(layer[i - 1], v);
            }
            x[v] = cursor;
        }
        let half = cursor / 2.0;
        for &v in layer {
            x[v] -= half;
        }
    }

    for sweep in 0..sweeps {
        let (ranks, adjacent): (Vec<usize>, &[Vec<usize>]) = if sweep % 2 == 0 {
            ((1..layers.len()).collect(), up)
        } else {
            ((0..layers.len().saturating_sub(1)).rev().collect(), down)
        };
        for r in ranks {
            let layer = &layers[r];
            if layer.is_empty() {
                continue;
            }
            let desired: Vec<f64> = layer
                .iter()
                .map(|&v| {
                    let ns = &adjacent[v];
                    if ns.is_empty() {
                        x[v]
                    } else {
                        ns.iter().map(|&n| x[n]).sum::<f64>() / ns.len() as f64
                    }
                })
                .collect();

            let k = layer.len();
            let mut left = desired.clone();
            for i in 1..k {
                left[i] = left[i].max(left[i - 1] + sep(layer[i - 1], layer[i]));
            }
            let mut right = desired;
            for i in (0..k - 1).rev() {
                right[i] = right[i].min(right[i + 1] - sep(layer[i], layer[i + 1]));
            }
            for (i, &v) in layer.iter().enumerate() {
                x[v] = (left[i] + right[i]) / 2.0;
            }
        }
    }
    x
}

fn rank_centers(layers: &[Vec<usize>], nodes: &[LNode], rank_sep: f64) -> Vec<f64> {
    let mut ys = Vec::with_capacity(layers.len());
    let mut cursor = 0.0;
    for layer in layers {
        let h = layer.iter().map(|&v| nodes[v].height).fold(0.0, f64::max);
        ys.push(cursor + h / 2.0);
        cursor += h + rank_sep;
    }
    ys
}

/// Point where the segment from the center of a `size` box at `center` toward `toward`
/// leaves the box.
pub(crate) fn intersect_rect(center: Point, size: Size, toward: Point) -> Point {
    let dx = toward.x - center.x;
    let dy = toward.y - center.y;
    let mut w = size.width / 2.0;
    let mut h = size.height / 2.0;
    if (dx == 0.0 && dy == 0.0) || (w <= 0.0 && h <= 0.0) {
        return center;
    }

    if dy.abs() * w > dx.abs() * h {
        if dy < 0.0 {
            h = -h;
        }
        Point::new(center.x + h * dx / dy, center.y + h)
    } else if dx == 0.0 {
        center
    } else {
        if dx < 0.0 {
            w = -w;
        }
        Point::new(center.x + w, center.y + w * dy / dx)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/layered.rs"]
mod tests;
