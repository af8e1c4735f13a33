//! Canonical k-mer encoding and decoding.
//! Bases map A=0, C=1, G=2, T=3, big-endian over the k positions, so any
//! k-mer code with k <= 31 fits a u64. The canonical form of a k-mer is the
//! smaller of its own code and the code of its reverse complement.

use crate::errors::{PipelineError, Result};

/// Largest k for which 4^k fits a 64-bit code.
pub const MAX_K: usize = 31;

const NT4_CHAR: [u8; 4] = *b"ACGT";

/// 2-bit code of a single base.
fn base_code(b: u8) -> Result<u64> {
    match b {
        b'A' => Ok(0),
        b'C' => Ok(1),
        b'G' => Ok(2),
        b'T' => Ok(3),
        other => Err(PipelineError::InvalidBase(other as char)),
    }
}

/// Watson-Crick complement of a single base.
fn complement(b: u8) -> Result<u8> {
    match b {
        b'A' => Ok(b'T'),
        b'C' => Ok(b'G'),
        b'G' => Ok(b'C'),
        b'T' => Ok(b'A'),
        other => Err(PipelineError::InvalidBase(other as char)),
    }
}

/// Reverse complement of a DNA string.
pub fn reverse_complement(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes().rev() {
        out.push(complement(b)? as char);
    }
    Ok(out)
}

/// Canonical code of a k-mer: `(min(forward, reverse), reverse < forward)`
/// where `reverse` is the code of the reverse complement. The flag records
/// which orientation was observed; palindromic k-mers report the forward
/// orientation.
pub fn kmer_code(s: &str) -> Result<(u64, bool)> {
    let k = s.len();
    if k == 0 || k > MAX_K {
        return Err(PipelineError::InvalidArgument(format!(
            "k-mer length must be in 1..={MAX_K}, got {k}"
        )));
    }
    let bytes = s.as_bytes();
    let mut forward = 0u64;
    let mut reverse = 0u64;
    for i in 0..k {
        forward = forward << 2 | base_code(bytes[i])?;
        reverse = reverse << 2 | base_code(complement(bytes[k - 1 - i])?)?;
    }
    Ok((forward.min(reverse), reverse < forward))
}

/// Inverse of `kmer_code`. A non-canonical code decodes to its own
/// (non-canonical) k-mer; bits above position 2k are ignored.
pub fn code_to_kmer(mut code: u64, k: usize) -> Result<String> {
    if k == 0 || k > MAX_K {
        return Err(PipelineError::InvalidArgument(format!(
            "k-mer length must be in 1..={MAX_K}, got {k}"
        )));
    }
    let mut buf = [b'A'; MAX_K];
    for i in (0..k).rev() {
        buf[i] = NT4_CHAR[(code & 3) as usize];
        code >>= 2;
    }
    Ok(buf[..k].iter().map(|&b| b as char).collect())
}
