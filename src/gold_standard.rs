//! Gold-standard overlap graph construction from the known layout of the
//! reads on the reference. Because read coordinates are exact, every overlap
//! and its orientation can be derived geometrically, which gives a ground
//! truth to grade the seed-based graph against.

use std::rc::Rc;

use log::info;

use crate::errors::{PipelineError, Result};
use crate::overlap_graph::{EdgeDir, OverlapGraph};

/// Mapping of one simulated read back to the reference: read index, start
/// position on the genome, and whether the read was reverse complemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadRecord {
    pub id: usize,
    pub start: usize,
    pub rev: bool,
}

/// Orientation pair for one proper dovetail, looked up by the strands of the
/// two reads: (u -> v, v -> u).
fn dovetail_dirs(urev: bool, vrev: bool) -> (EdgeDir, EdgeDir) {
    match (urev, vrev) {
        (false, false) => (EdgeDir::Regular, EdgeDir::Extroverted),
        (false, true) => (EdgeDir::Introverted, EdgeDir::Introverted),
        (true, false) => (EdgeDir::ReverseRegular, EdgeDir::ReverseRegular),
        (true, true) => (EdgeDir::Extroverted, EdgeDir::Regular),
    }
}

/// Build the overlap graph from known read coordinates. A `genome_length` of
/// 0 treats the reference as linear; otherwise the sorted records are walked
/// once more with `genome_length` added so overlaps crossing the circular
/// origin are found. For each read the walk stops at the first record
/// starting at or past its end.
pub fn generate_gold_standard(
    reads: Rc<Vec<String>>,
    records: &[ReadRecord],
    genome_length: usize,
) -> Result<OverlapGraph> {
    let n = reads.len();
    if records.len() != n {
        return Err(PipelineError::InvalidArgument(format!(
            "read table holds {} reads but {} records were given",
            n,
            records.len()
        )));
    }

    let mut graph = OverlapGraph::new(reads);
    let mut sorted: Vec<ReadRecord> = records.to_vec();
    sorted.sort_by_key(|r| r.start);

    // wrapped copies only exist on a circular reference
    let span = if genome_length > 0 { 2 * n } else { n };

    for ufind in 0..n {
        let ReadRecord {
            id: u,
            start: upos,
            rev: urev,
        } = sorted[ufind];
        let ulen = graph.read(u).len();

        for vfind in ufind + 1..span {
            let (v, vpos, vrev) = if vfind < n {
                let r = sorted[vfind];
                (r.id, r.start, r.rev)
            } else {
                let r = sorted[vfind - n];
                (r.id, r.start + genome_length, r.rev)
            };

            assert!(upos <= vpos, "records lost their start-position ordering");

            let vlen = graph.read(v).len();

            if vpos >= upos + ulen {
                break;
            }

            if vpos + vlen <= upos + ulen {
                // v maps wholly inside u
                graph.add_overlap(u, v, EdgeDir::Containment, 0)?;
            } else if vpos == upos {
                // same start but v reaches further: u maps wholly inside v
                graph.add_overlap(v, u, EdgeDir::Containment, 0)?;
            } else {
                let suflen = vpos + vlen - upos - ulen;
                let prelen = vpos - upos;
                let (dir_uv, dir_vu) = dovetail_dirs(urev, vrev);
                graph.add_overlap(u, v, dir_uv, suflen)?;
                graph.add_overlap(v, u, dir_vu, prelen)?;
            }
        }
    }

    info!(
        "gold-standard graph: {} reads, {} directed edges",
        n,
        graph.num_edges()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlap_graph::OverlapEdge;
    use crate::simulate::{create_random_genome, create_reads, define_reads};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn linear_dovetail_chain() {
        let genome = "AAAACCCCGGGGTTTT";
        let sim = define_reads(genome, &[(0, 8, false), (4, 8, false), (8, 8, false)]).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 0).unwrap();
        assert_eq!(g.num_edges(), 4);
        assert_eq!(
            *g.edge(0, 1).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Regular,
                overhang: 4
            }
        );
        assert_eq!(
            *g.edge(1, 0).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Extroverted,
                overhang: 4
            }
        );
        assert_eq!(
            *g.edge(1, 2).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Regular,
                overhang: 4
            }
        );
        assert_eq!(
            *g.edge(2, 1).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Extroverted,
                overhang: 4
            }
        );
        // read 2 starts exactly where read 0 ends, so the walk cuts off
        assert!(g.edge(0, 2).is_none());
        assert!(g.edge(2, 0).is_none());
    }

    #[test]
    fn contained_read_yields_single_containment_edge() {
        let genome: String = "ACGT".repeat(5);
        let sim = define_reads(&genome, &[(0, 10, false), (2, 5, false)]).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 0).unwrap();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(
            *g.edge(0, 1).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Containment,
                overhang: 0
            }
        );
    }

    #[test]
    fn equal_start_containment_points_at_the_longer_read() {
        let genome: String = "AATGCCGATT".repeat(2);
        let sim = define_reads(&genome, &[(3, 6, false), (3, 10, false)]).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 0).unwrap();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.edge(1, 0).unwrap().dir, EdgeDir::Containment);
    }

    #[test]
    fn circular_wrap_produces_an_overlap_only_in_circular_mode() {
        let genome: String = "AACCGGTTAC".repeat(2);
        let sim = define_reads(&genome, &[(15, 10, false), (3, 8, false)]).unwrap();
        let reads = Rc::new(sim.seqs);

        let circular = generate_gold_standard(Rc::clone(&reads), &sim.records, 20).unwrap();
        assert_eq!(
            *circular.edge(0, 1).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Regular,
                overhang: 6
            }
        );
        assert_eq!(
            *circular.edge(1, 0).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Extroverted,
                overhang: 8
            }
        );

        let linear = generate_gold_standard(Rc::clone(&reads), &sim.records, 0).unwrap();
        assert_eq!(linear.num_edges(), 0);
    }

    #[test]
    fn strand_pairs_follow_the_orientation_table() {
        let genome = "AATGCCGATTAACGGT";

        let sim = define_reads(genome, &[(0, 8, false), (4, 8, true)]).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 0).unwrap();
        assert_eq!(g.edge(0, 1).unwrap().dir, EdgeDir::Introverted);
        assert_eq!(g.edge(1, 0).unwrap().dir, EdgeDir::Introverted);
        assert_eq!(g.edge(0, 1).unwrap().overhang, 4);
        assert_eq!(g.edge(1, 0).unwrap().overhang, 4);

        let sim = define_reads(genome, &[(0, 8, true), (4, 8, false)]).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 0).unwrap();
        assert_eq!(g.edge(0, 1).unwrap().dir, EdgeDir::ReverseRegular);
        assert_eq!(g.edge(1, 0).unwrap().dir, EdgeDir::ReverseRegular);

        let sim = define_reads(genome, &[(0, 8, true), (4, 8, true)]).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 0).unwrap();
        assert_eq!(g.edge(0, 1).unwrap().dir, EdgeDir::Extroverted);
        assert_eq!(g.edge(1, 0).unwrap().dir, EdgeDir::Regular);
    }

    #[test]
    fn record_count_must_match_read_count() {
        let reads = Rc::new(vec!["ACGT".to_string()]);
        assert!(generate_gold_standard(reads, &[], 0).is_err());
    }

    #[test]
    fn every_dovetail_has_a_shadow_edge() {
        let mut rng = StdRng::seed_from_u64(7);
        let genome = create_random_genome(200, &mut rng).unwrap();
        let sim = create_reads(&genome, 8, 40, 5.0, true, true, &mut rng).unwrap();
        let g = generate_gold_standard(Rc::new(sim.seqs), &sim.records, 200).unwrap();
        for (u, v, e) in g.edges() {
            if !e.dir.is_containment() {
                assert!(g.edge(v, u).is_some(), "missing shadow edge for ({u},{v})");
            }
        }
    }
}
