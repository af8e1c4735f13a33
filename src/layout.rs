//! Pretty-print layout of a read set against its gold-standard coordinates.
//! Forward reads are drawn at their reference offset with a trailing '>',
//! reverse reads as their reverse complement with a leading '<'.

use std::io::Write;

use crate::codec::reverse_complement;
use crate::errors::{PipelineError, Result};
use crate::gold_standard::ReadRecord;

pub fn pretty_layout<W: Write>(
    seqs: &[String],
    records: &[ReadRecord],
    out: &mut W,
) -> Result<()> {
    if seqs.len() != records.len() {
        return Err(PipelineError::InvalidArgument(format!(
            "{} reads but {} records",
            seqs.len(),
            records.len()
        )));
    }

    let mut sorted: Vec<ReadRecord> = records.to_vec();
    sorted.sort_by_key(|r| r.start);

    for record in &sorted {
        let seq = &seqs[record.id];
        let line = if record.rev {
            format!("{}<{}", " ".repeat(record.start), reverse_complement(seq)?)
        } else {
            format!("{}{}>", " ".repeat(record.start + 1), seq)
        };
        writeln!(out, "{:>4}: {}", record.id, line)?;
    }
    Ok(())
}
