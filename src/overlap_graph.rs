//! Bidirected overlap graph over a fixed read table.
//! Each read is a vertex; a directed edge (u, v) is labelled with the
//! orientation of the overlap at both ends and the length of the target
//! overhang in the direction of the edge. Every proper dovetail is stored
//! twice, once per direction, so reverse traversal is a plain lookup.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::errors::{PipelineError, Result};
use crate::gml::{GmlEdge, GmlGraph, GmlNode};

/// Orientation of an overlap edge. The four dovetail variants encode the
/// arrow tips at the source and target ends as `(tail << 1) | head`; the
/// containment marker means the target read maps wholly inside the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeDir {
    /// Target read maps wholly inside the source read.
    Containment,
    /// `>---<` prefix dovetail (code 0).
    Introverted,
    /// `>--->` regular dovetail (code 1).
    Regular,
    /// `<--->` suffix dovetail (code 2).
    Extroverted,
    /// `<---<` reverse regular dovetail (code 3).
    ReverseRegular,
}

impl EdgeDir {
    /// Dovetail orientation from the two arrow bits.
    pub fn from_bits(tail: bool, head: bool) -> Self {
        match (tail, head) {
            (false, false) => EdgeDir::Introverted,
            (false, true) => EdgeDir::Regular,
            (true, false) => EdgeDir::Extroverted,
            (true, true) => EdgeDir::ReverseRegular,
        }
    }

    /// Arrow bits (tail, head) of a dovetail; containment has no arrows.
    pub fn bits(self) -> Option<(bool, bool)> {
        match self {
            EdgeDir::Containment => None,
            EdgeDir::Introverted => Some((false, false)),
            EdgeDir::Regular => Some((false, true)),
            EdgeDir::Extroverted => Some((true, false)),
            EdgeDir::ReverseRegular => Some((true, true)),
        }
    }

    /// Integer projection used by the GML export: -1 for containment,
    /// otherwise the two arrow bits.
    pub fn code(self) -> i64 {
        match self.bits() {
            None => -1,
            Some((tail, head)) => (tail as i64) << 1 | head as i64,
        }
    }

    pub fn is_containment(self) -> bool {
        matches!(self, EdgeDir::Containment)
    }
}

/// Edge payload: orientation plus the overhang length in the direction of
/// the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlapEdge {
    pub dir: EdgeDir,
    pub overhang: usize,
}

/// Overlap graph with a vertex per read, fixed at construction. The
/// adjacency is a flat vector indexed by source read; the inner maps are
/// ordered so edge enumeration is deterministic. Simplification passes build
/// fresh graphs sharing the same read table.
pub struct OverlapGraph {
    reads: Rc<Vec<String>>,
    adj: Vec<BTreeMap<usize, OverlapEdge>>,
}

impl OverlapGraph {
    pub fn new(reads: Rc<Vec<String>>) -> Self {
        let n = reads.len();
        Self {
            reads,
            adj: vec![BTreeMap::new(); n],
        }
    }

    pub fn num_reads(&self) -> usize {
        self.adj.len()
    }

    pub fn reads(&self) -> &Rc<Vec<String>> {
        &self.reads
    }

    pub fn read(&self, u: usize) -> &str {
        &self.reads[u]
    }

    /// Add or upgrade the (u, v) edge. An existing edge survives unless the
    /// new overhang is strictly larger.
    pub fn add_overlap(&mut self, u: usize, v: usize, dir: EdgeDir, overhang: usize) -> Result<()> {
        let n = self.adj.len();
        if u >= n {
            return Err(PipelineError::IndexOutOfRange { index: u, bound: n });
        }
        if v >= n {
            return Err(PipelineError::IndexOutOfRange { index: v, bound: n });
        }
        match self.adj[u].get(&v) {
            Some(existing) if existing.overhang >= overhang => {}
            _ => {
                self.adj[u].insert(v, OverlapEdge { dir, overhang });
            }
        }
        Ok(())
    }

    pub fn edge(&self, u: usize, v: usize) -> Option<&OverlapEdge> {
        self.adj.get(u).and_then(|m| m.get(&v))
    }

    /// Outgoing edges of u in target order.
    pub fn adjacent(&self, u: usize) -> impl Iterator<Item = (usize, &OverlapEdge)> {
        self.adj[u].iter().map(|(&v, e)| (v, e))
    }

    /// Number of directed edges, summed over the adjacency.
    pub fn num_edges(&self) -> usize {
        self.adj.iter().map(|m| m.len()).sum()
    }

    /// Every directed edge as (u, v, edge) in source-then-target order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, &OverlapEdge)> {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, m)| m.iter().map(move |(&v, e)| (u, v, e)))
    }

    /// Plain directed-graph view handed to the GML writer: per-vertex `seq`,
    /// per-edge `dir` and `len`.
    pub fn export(&self) -> GmlGraph {
        let nodes = self
            .reads
            .iter()
            .cloned()
            .enumerate()
            .map(|(id, seq)| GmlNode { id, seq })
            .collect();
        let edges = self
            .edges()
            .map(|(u, v, e)| GmlEdge {
                source: u,
                target: v,
                dir: e.dir.code(),
                len: e.overhang,
            })
            .collect();
        GmlGraph {
            directed: true,
            nodes,
            edges,
        }
    }
}
