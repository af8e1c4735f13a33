//! Naive transitive reduction. A direct edge u -> w is redundant when some
//! two-edge path u -> v -> w walks the same bidirected orientation and spans
//! at least as far, up to an integer fuzz tolerance. Reduction is symmetric:
//! an edge and its shadow are always dropped together.

use std::collections::HashSet;
use std::rc::Rc;

use log::info;

use crate::errors::Result;
use crate::overlap_graph::OverlapGraph;

/// True when walking u -> v -> w traverses the ends of v consistently and
/// matches the orientation of the direct u -> w edge.
fn consistent(uv: (bool, bool), vw: (bool, bool), uw: (bool, bool)) -> bool {
    let (uv_tail, uv_head) = uv;
    let (vw_tail, vw_head) = vw;
    let (uw_tail, uw_head) = uw;
    uv_head == uw_head && vw_tail == uw_tail && uv_tail != vw_head
}

/// Reduce transitive edges: every consistent triangle whose path overhang
/// reaches `overhang(u,w) - fuzz` marks the direct edge (u,w) and its shadow
/// (w,u) for removal. Containment edges carry no arrows and never take part
/// in a triangle. The result is a fresh graph of unmarked edges.
pub fn naive_tr(graph: &OverlapGraph, fuzz: usize) -> Result<OverlapGraph> {
    let mut marked: HashSet<(usize, usize)> = HashSet::new();

    for u in 0..graph.num_reads() {
        for (v, euv) in graph.adjacent(u) {
            let Some(uv_bits) = euv.dir.bits() else {
                continue;
            };
            for (w, evw) in graph.adjacent(v) {
                let Some(euw) = graph.edge(u, w) else {
                    continue;
                };
                let (Some(vw_bits), Some(uw_bits)) = (evw.dir.bits(), euw.dir.bits()) else {
                    continue;
                };
                if !consistent(uv_bits, vw_bits, uw_bits) {
                    continue;
                }
                if euv.overhang + evw.overhang + fuzz >= euw.overhang {
                    marked.insert((u, w));
                    marked.insert((w, u));
                }
            }
        }
    }

    let mut out = OverlapGraph::new(Rc::clone(graph.reads()));
    for (u, v, edge) in graph.edges() {
        if !marked.contains(&(u, v)) {
            out.add_overlap(u, v, edge.dir, edge.overhang)?;
        }
    }

    info!(
        "transitive reduction: {} -> {} directed edges",
        graph.num_edges(),
        out.num_edges()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containment_pruning::pruned;
    use crate::gold_standard::generate_gold_standard;
    use crate::simulate::{create_random_genome, create_reads, define_reads};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn transitive_triangle_drops_the_long_edge() {
        let genome = "AAAACCCCGGGGTTTT";
        let sim = define_reads(genome, &[(0, 10, false), (3, 10, false), (6, 10, false)]).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 0).unwrap();
        assert_eq!(g.num_edges(), 6);
        assert_eq!(g.edge(0, 2).unwrap().overhang, 6);

        let reduced = naive_tr(&g, 0).unwrap();
        assert_eq!(reduced.num_edges(), 4);
        assert!(reduced.edge(0, 2).is_none());
        assert!(reduced.edge(2, 0).is_none());
        assert!(reduced.edge(0, 1).is_some());
        assert!(reduced.edge(1, 2).is_some());
        assert!(reduced.edge(1, 0).is_some());
        assert!(reduced.edge(2, 1).is_some());
    }

    #[test]
    fn chains_without_shortcuts_are_left_alone() {
        let genome = "AAAACCCCGGGGTTTT";
        let sim = define_reads(genome, &[(0, 8, false), (4, 8, false), (8, 8, false)]).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 0).unwrap();
        let reduced = naive_tr(&g, 0).unwrap();
        assert_eq!(reduced.num_edges(), g.num_edges());
    }

    #[test]
    fn reduction_never_grows_the_graph() {
        let mut rng = StdRng::seed_from_u64(11);
        let genome = create_random_genome(300, &mut rng).unwrap();
        let sim = create_reads(&genome, 10, 60, 8.0, true, true, &mut rng).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 300).unwrap();
        let p = pruned(&g).unwrap();
        let reduced = naive_tr(&p, 0).unwrap();
        assert!(reduced.num_edges() <= p.num_edges());
    }
}
