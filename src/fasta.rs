//! FASTA input/output and the problem-instance re-loader. Instances written
//! by the simulator encode each read's layout in its name, so a reloaded
//! read set can be cross-checked base by base against the reference.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use log::info;

use crate::codec::reverse_complement;
use crate::errors::{PipelineError, Result};
use crate::gold_standard::ReadRecord;
use crate::simulate::circular_slice;

/// Read a FASTA file into parallel (seqs, names) vectors. Sequence lines are
/// concatenated with any interior whitespace stripped; blank lines are
/// ignored.
pub fn read_fasta(path: &str) -> Result<(Vec<String>, Vec<String>)> {
    let reader = BufReader::new(File::open(path)?);
    let mut seqs: Vec<String> = Vec::new();
    let mut names: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix('>') {
            if let Some(seq) = current.take() {
                seqs.push(seq);
            }
            names.push(name.trim_end().to_string());
            current = Some(String::new());
        } else {
            let Some(seq) = current.as_mut() else {
                return Err(PipelineError::MalformedInput(format!(
                    "{path}: sequence data before the first FASTA header"
                )));
            };
            seq.extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }
    if let Some(seq) = current.take() {
        seqs.push(seq);
    }

    info!("read {} sequences from {}", seqs.len(), path);
    Ok((seqs, names))
}

/// Write sequences to a FASTA file, one record per (name, seq) pair with the
/// sequence on a single line.
pub fn write_fasta(path: &str, seqs: &[String], names: &[String]) -> Result<()> {
    if seqs.len() != names.len() {
        return Err(PipelineError::InvalidArgument(format!(
            "{} sequences but {} names",
            seqs.len(),
            names.len()
        )));
    }
    let mut writer = BufWriter::new(File::create(path)?);
    for (name, seq) in names.iter().zip(seqs) {
        writeln!(writer, ">{name}")?;
        writeln!(writer, "{seq}")?;
    }
    Ok(())
}

/// Recover (start position, rev flag) from a simulated read name of the form
/// `R0 | coords :: [3..12] | length :: 10 | rev :: False`.
fn parse_read_name(name: &str) -> Result<(usize, bool)> {
    let bad = || PipelineError::MalformedInput(format!("unparsable read name: {name}"));
    let coords = name.split('|').nth(1).ok_or_else(bad)?;
    let startpos = coords
        .split('[')
        .nth(1)
        .and_then(|s| s.split("..").next())
        .ok_or_else(bad)?
        .trim()
        .parse::<usize>()
        .map_err(|_| bad())?;
    let rev = match name.split("::").last().ok_or_else(bad)?.trim() {
        "True" => true,
        "False" => false,
        _ => return Err(bad()),
    };
    Ok((startpos, rev))
}

/// Reload a problem instance previously written by this crate. The reference
/// must hold exactly one sequence; every read is re-sliced from it at the
/// coordinates in its name and compared against the stored sequence.
pub fn read_problem_instance(
    genome_path: &str,
    reads_path: &str,
) -> Result<(String, Vec<String>, Vec<String>, Vec<ReadRecord>)> {
    let (mut genome_seqs, _genome_names) = read_fasta(genome_path)?;
    if genome_seqs.len() != 1 {
        return Err(PipelineError::MalformedInput(format!(
            "{genome_path}: expected exactly one reference sequence, found {}",
            genome_seqs.len()
        )));
    }
    let genome = genome_seqs.remove(0);
    if let Some(bad) = genome.chars().find(|c| !matches!(c, 'A' | 'C' | 'G' | 'T')) {
        return Err(PipelineError::InvalidBase(bad));
    }

    let (seqs, names) = read_fasta(reads_path)?;
    let mut records = Vec::with_capacity(seqs.len());

    for (i, (seq, name)) in seqs.iter().zip(&names).enumerate() {
        let (readpos, readrev) = parse_read_name(name)?;
        let (check_seq, check_start, _check_end) = circular_slice(&genome, readpos, seq.len())?;
        let check_seq = if readrev {
            reverse_complement(&check_seq)?
        } else {
            check_seq
        };
        if check_seq != *seq || check_start != readpos {
            return Err(PipelineError::InconsistentInstance(format!(
                "read {i} does not match the reference at position {readpos}"
            )));
        }
        records.push(ReadRecord {
            id: i,
            start: readpos,
            rev: readrev,
        });
    }

    info!(
        "reloaded problem instance: {} reads over a {}bp reference",
        seqs.len(),
        genome.len()
    );
    Ok((genome, seqs, names, records))
}
