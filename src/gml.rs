//! GML export of the plain directed view of an overlap graph.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::errors::Result;

pub struct GmlNode {
    pub id: usize,
    pub seq: String,
}

pub struct GmlEdge {
    pub source: usize,
    pub target: usize,
    pub dir: i64,
    pub len: usize,
}

/// Plain directed graph handed off by `OverlapGraph::export`: vertices carry
/// their read sequence, edges carry the integer orientation code and the
/// overhang length.
pub struct GmlGraph {
    pub directed: bool,
    pub nodes: Vec<GmlNode>,
    pub edges: Vec<GmlEdge>,
}

impl GmlGraph {
    pub fn write_gml(&self, path: &str) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "graph [")?;
        writeln!(writer, "  directed {}", if self.directed { 1 } else { 0 })?;
        for node in &self.nodes {
            writeln!(writer, "  node [")?;
            writeln!(writer, "    id {}", node.id)?;
            writeln!(writer, "    seq \"{}\"", node.seq)?;
            writeln!(writer, "  ]")?;
        }
        for edge in &self.edges {
            writeln!(writer, "  edge [")?;
            writeln!(writer, "    source {}", edge.source)?;
            writeln!(writer, "    target {}", edge.target)?;
            writeln!(writer, "    dir {}", edge.dir)?;
            writeln!(writer, "    len {}", edge.len)?;
            writeln!(writer, "  ]")?;
        }
        writeln!(writer, "]")?;
        Ok(())
    }
}
