//! Seed-extension overlap graph construction. Each shared-minimizer seed is
//! extended outward under the assumption that the flanking sequence matches
//! perfectly, so the pair classifies as a containment or a dovetail straight
//! from the seed coordinates. Seeds on opposite strands are first reflected
//! onto the other strand of the target read.

use std::rc::Rc;

use log::info;

use crate::codec::MAX_K;
use crate::errors::{PipelineError, Result};
use crate::minimizer_index::Seed;
use crate::overlap_graph::{EdgeDir, OverlapGraph};

/// Build the overlap graph from shared-minimizer seeds. Several seeds may
/// connect the same read pair; the widest extension wins through
/// `add_overlap`'s keep-larger policy, and conflicting orientations from
/// contradictory seeds are left to the first writer.
pub fn generate_seed_based(
    reads: Rc<Vec<String>>,
    seeds: &[Seed],
    k: usize,
) -> Result<OverlapGraph> {
    if k == 0 || k > MAX_K {
        return Err(PipelineError::InvalidArgument(format!(
            "minimizer length must be in 1..={MAX_K}, got {k}"
        )));
    }

    let mut graph = OverlapGraph::new(reads);
    let n = graph.num_reads();

    for seed in seeds {
        let Seed {
            u,
            v,
            upos,
            mut vpos,
            ..
        } = *seed;
        if u >= n {
            return Err(PipelineError::IndexOutOfRange { index: u, bound: n });
        }
        if v >= n {
            return Err(PipelineError::IndexOutOfRange { index: v, bound: n });
        }

        let ulen = graph.read(u).len();
        let vlen = graph.read(v).len();
        if upos + k > ulen || vpos + k > vlen {
            return Err(PipelineError::InvalidArgument(format!(
                "seed k-mer exceeds read bounds: ({u},{upos}) / ({v},{vpos}) with k={k}"
            )));
        }

        let rc = seed.rc();
        if rc {
            // reflect the seed onto the opposite strand of v
            vpos = vlen - vpos - k;
        }

        let u_suffix = ulen - upos;
        let v_suffix = vlen - vpos;

        if upos <= vpos && u_suffix <= v_suffix {
            // u maps wholly inside v
            graph.add_overlap(v, u, EdgeDir::Containment, 0)?;
        } else if upos >= vpos && u_suffix >= v_suffix {
            // v maps wholly inside u
            graph.add_overlap(u, v, EdgeDir::Containment, 0)?;
        } else if upos > vpos {
            let suflen = v_suffix - u_suffix;
            let prelen = upos - vpos;
            let (dir_uv, dir_vu) = if rc {
                (EdgeDir::Introverted, EdgeDir::Introverted)
            } else {
                (EdgeDir::Regular, EdgeDir::Extroverted)
            };
            graph.add_overlap(u, v, dir_uv, suflen)?;
            graph.add_overlap(v, u, dir_vu, prelen)?;
        } else {
            let suflen = vpos - upos;
            let prelen = u_suffix - v_suffix;
            let (dir_uv, dir_vu) = if rc {
                (EdgeDir::ReverseRegular, EdgeDir::ReverseRegular)
            } else {
                (EdgeDir::Extroverted, EdgeDir::Regular)
            };
            graph.add_overlap(u, v, dir_uv, suflen)?;
            graph.add_overlap(v, u, dir_vu, prelen)?;
        }
    }

    info!(
        "seed-based graph: {} seeds extended into {} directed edges",
        seeds.len(),
        graph.num_edges()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlap_graph::OverlapEdge;

    #[test]
    fn forward_seed_matches_gold_geometry() {
        let reads = Rc::new(vec!["AAAACCCC".to_string(), "CCCCGGGG".to_string()]);
        let seeds = vec![Seed {
            u: 0,
            v: 1,
            upos: 4,
            vpos: 0,
            urev: false,
            vrev: false,
        }];
        let g = generate_seed_based(reads, &seeds, 4).unwrap();
        assert_eq!(g.num_edges(), 2);
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
    }

    #[test]
    fn reverse_complement_seed_is_reflected_onto_the_other_strand() {
        // read 1 is the reverse complement of the 8bp window starting 4 bases
        // into read 0's reference span; the shared canonical k-mer CCGA shows
        // up as TCGG at offset 4 of read 1
        let reads = Rc::new(vec!["AATGCCGA".to_string(), "TTAATCGG".to_string()]);
        let seeds = vec![Seed {
            u: 0,
            v: 1,
            upos: 4,
            vpos: 4,
            urev: false,
            vrev: true,
        }];
        let g = generate_seed_based(reads, &seeds, 4).unwrap();
        assert_eq!(g.num_edges(), 2);
        assert_eq!(
            *g.edge(0, 1).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Introverted,
                overhang: 4
            }
        );
        assert_eq!(
            *g.edge(1, 0).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Introverted,
                overhang: 4
            }
        );
    }

    #[test]
    fn seed_containment_points_from_container_to_contained() {
        let reads = Rc::new(vec!["ATCCGATT".to_string(), "CCGA".to_string()]);
        let seeds = vec![Seed {
            u: 0,
            v: 1,
            upos: 2,
            vpos: 0,
            urev: false,
            vrev: false,
        }];
        let g = generate_seed_based(Rc::clone(&reads), &seeds, 4).unwrap();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(
            *g.edge(0, 1).unwrap(),
            OverlapEdge {
                dir: EdgeDir::Containment,
                overhang: 0
            }
        );

        // symmetric case: the short read is the seed's u side
        let reads = Rc::new(vec!["CCGA".to_string(), "ATCCGATT".to_string()]);
        let seeds = vec![Seed {
            u: 0,
            v: 1,
            upos: 0,
            vpos: 2,
            urev: false,
            vrev: false,
        }];
        let g = generate_seed_based(reads, &seeds, 4).unwrap();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.edge(1, 0).unwrap().dir, EdgeDir::Containment);
    }

    #[test]
    fn widest_seed_extension_wins() {
        let reads = Rc::new(vec!["AAAACCCC".to_string(), "CCCCGGGG".to_string()]);
        let seeds = vec![
            Seed {
                u: 0,
                v: 1,
                upos: 4,
                vpos: 0,
                urev: false,
                vrev: false,
            },
            Seed {
                u: 0,
                v: 1,
                upos: 6,
                vpos: 0,
                urev: false,
                vrev: false,
            },
        ];
        let g = generate_seed_based(reads, &seeds, 2).unwrap();
        assert_eq!(g.edge(0, 1).unwrap().overhang, 6);
        assert_eq!(g.edge(1, 0).unwrap().overhang, 6);
    }

    #[test]
    fn rejects_seeds_outside_their_reads() {
        let reads = Rc::new(vec!["ACGT".to_string(), "ACGT".to_string()]);
        let seeds = vec![Seed {
            u: 0,
            v: 1,
            upos: 3,
            vpos: 0,
            urev: false,
            vrev: false,
        }];
        assert!(generate_seed_based(Rc::clone(&reads), &seeds, 3).is_err());

        let seeds = vec![Seed {
            u: 0,
            v: 9,
            upos: 0,
            vpos: 0,
            urev: false,
            vrev: false,
        }];
        assert!(matches!(
            generate_seed_based(reads, &seeds, 3),
            Err(PipelineError::IndexOutOfRange { index: 9, bound: 2 })
        ));
    }
}
