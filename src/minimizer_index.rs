//! Minimizer indexing and all-vs-all seed generation.
//! 1. scan every read and keep the window minimizers as canonical-code hits
//! 2. sort the hits by code and group them into buckets
//! 3. emit a seed for every pair of distinct reads sharing a bucket

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};

use log::info;
use serde::{Deserialize, Serialize};

use crate::codec::{MAX_K, kmer_code};
use crate::errors::{PipelineError, Result};

/// One minimizer occurrence: canonical code, owning read, offset within the
/// read, and whether the observed k-mer string was the non-canonical
/// orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimizerHit {
    pub code: u64,
    pub read_id: usize,
    pub pos: usize,
    pub rev: bool,
}

/// A shared-minimizer seed between two distinct reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub u: usize,
    pub v: usize,
    pub upos: usize,
    pub vpos: usize,
    pub urev: bool,
    pub vrev: bool,
}

impl Seed {
    /// True when the shared k-mer lies on opposite strands of the two reads.
    pub fn rc(&self) -> bool {
        self.urev != self.vrev
    }
}

fn check_params(k: usize, w: usize) -> Result<()> {
    if k == 0 || k > MAX_K {
        return Err(PipelineError::InvalidArgument(format!(
            "minimizer length must be in 1..={MAX_K}, got {k}"
        )));
    }
    if w == 0 {
        return Err(PipelineError::InvalidArgument(
            "minimizer window length must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Window minimizers of a single read. Within each window of w consecutive
/// k-mers the lexicographically smallest k-mer string wins (smallest offset
/// on ties) and is emitted the first time that string is seen in the read.
/// Window starts run over `0..(l - k - w + 1)`, so the final k-mer of a read
/// never opens a window; reads shorter than k + w yield nothing.
fn minimizers(s: &str, k: usize, w: usize) -> Vec<(usize, &str)> {
    let l = s.len();
    let mut out = Vec::new();
    if l < k + w {
        return out;
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for i in 0..(l - k - w + 1) {
        let mut best_pos = i;
        let mut best = &s[i..i + k];
        for j in 1..w {
            let cand = &s[i + j..i + j + k];
            if cand < best {
                best = cand;
                best_pos = i + j;
            }
        }
        if seen.insert(best) {
            out.push((best_pos, best));
        }
    }
    out
}

/// Scan every read and collect its minimizers as canonical-code hits.
pub fn get_kmer_array(seqs: &[String], k: usize, w: usize) -> Result<Vec<MinimizerHit>> {
    check_params(k, w)?;
    let mut hits = Vec::new();
    for (read_id, seq) in seqs.iter().enumerate() {
        for (pos, kmer) in minimizers(seq, k, w) {
            let (code, rev) = kmer_code(kmer)?;
            hits.push(MinimizerHit {
                code,
                read_id,
                pos,
                rev,
            });
        }
    }
    Ok(hits)
}

/// Sort hits by code and group runs of equal codes into buckets of
/// (read_id, pos, rev) entries. The table stays code-sorted so downstream
/// enumeration is deterministic; a run ending at the last hit forms a bucket
/// like any other.
pub fn compress_kmer_array(mut hits: Vec<MinimizerHit>) -> Vec<(u64, Vec<(usize, usize, bool)>)> {
    hits.sort_unstable_by_key(|h| (h.code, h.read_id, h.pos));
    let mut buckets = Vec::new();
    let mut i = 0;
    while i < hits.len() {
        let code = hits[i].code;
        let mut adj = Vec::new();
        let mut j = i;
        while j < hits.len() && hits[j].code == code {
            adj.push((hits[j].read_id, hits[j].pos, hits[j].rev));
            j += 1;
        }
        buckets.push((code, adj));
        i = j;
    }
    buckets
}

/// Every location where two distinct reads share a minimizer: all unordered
/// pairs of entries within each bucket, in bucket-then-pair order. Pairs
/// inside a single read (one canonical code observed twice) are skipped.
pub fn get_overlap_seeds(seqs: &[String], k: usize, w: usize) -> Result<Vec<Seed>> {
    let buckets = compress_kmer_array(get_kmer_array(seqs, k, w)?);
    let mut seeds = Vec::new();
    for (_code, entries) in &buckets {
        for j in 1..entries.len() {
            for i in 0..j {
                let (u, upos, urev) = entries[i];
                let (v, vpos, vrev) = entries[j];
                if u == v {
                    continue;
                }
                seeds.push(Seed {
                    u,
                    v,
                    upos,
                    vpos,
                    urev,
                    vrev,
                });
            }
        }
    }
    info!(
        "generated {} overlap seeds from {} minimizer buckets",
        seeds.len(),
        buckets.len()
    );
    Ok(seeds)
}

/// Serialize seeds with bincode so a later run can reuse them.
pub fn serialize_seeds(seeds: &[Seed], path: &str) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, seeds)?;
    Ok(())
}

/// Load seeds previously written by `serialize_seeds`.
pub fn load_seeds(path: &str) -> Result<Vec<Seed>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}
