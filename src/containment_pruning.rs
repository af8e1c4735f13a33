//! Containment pruning. A read that maps wholly inside another read adds no
//! layout information, so every edge touching it is dropped. Contained reads
//! stay in the vertex table and simply become isolated.

use std::collections::HashSet;
use std::rc::Rc;

use log::info;

use crate::errors::Result;
use crate::overlap_graph::OverlapGraph;

/// New graph on the same read table keeping only edges between non-contained
/// reads. Containment edges never survive because their target is contained
/// by definition.
pub fn pruned(graph: &OverlapGraph) -> Result<OverlapGraph> {
    let mut contained: HashSet<usize> = HashSet::new();
    for (_u, v, edge) in graph.edges() {
        if edge.dir.is_containment() {
            contained.insert(v);
        }
    }

    let mut out = OverlapGraph::new(Rc::clone(graph.reads()));
    for (u, v, edge) in graph.edges() {
        if !contained.contains(&u) && !contained.contains(&v) {
            out.add_overlap(u, v, edge.dir, edge.overhang)?;
        }
    }

    info!(
        "containment pruning: {} contained reads, {} -> {} directed edges",
        contained.len(),
        graph.num_edges(),
        out.num_edges()
    );
    Ok(out)
}
