use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::rc::Rc;

use ovelia::cli::{Cli, Commands};
use ovelia::configs::{AssembleConfig, LayoutConfig, SimulateConfig};
use ovelia::errors::Result;
use ovelia::{
    containment_pruning, fasta, gold_standard, layout, logger, minimizer_index, seed_extension,
    simulate, transitive_reduction,
};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Simulate(args) => run_simulate(&args.into())?,
        Commands::Assemble(args) => run_assemble(&args.into())?,
        Commands::Layout(args) => run_layout(&args.into())?,
    }

    Ok(())
}

fn run_simulate(config: &SimulateConfig) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let genome = simulate::create_random_genome(config.genome_length, &mut rng)?;
    let sim = simulate::create_reads(
        &genome,
        config.read_depth,
        config.mean_read_length,
        config.sd_read_length,
        config.circular,
        config.reverse_complements,
        &mut rng,
    )?;

    if config.show_layout {
        let mut stdout = std::io::stdout();
        layout::pretty_layout(&sim.seqs, &sim.records, &mut stdout)?;
    }

    let reads = Rc::new(sim.seqs);
    let genome_length = if config.circular { genome.len() } else { 0 };
    let gold = gold_standard::generate_gold_standard(Rc::clone(&reads), &sim.records, genome_length)?;

    let ref_names = vec!["chrom1".to_string()];
    fasta::write_fasta(&config.ref_fa, std::slice::from_ref(&genome), &ref_names)?;
    fasta::write_fasta(&config.reads_fa, &reads, &sim.names)?;

    let gml_path = format!("{}.overlaps.gml", config.gml_prefix);
    gold.export().write_gml(&gml_path)?;
    info!("wrote gold-standard overlap graph to {}", gml_path);

    Ok(())
}

fn run_assemble(config: &AssembleConfig) -> Result<()> {
    let (genome, seqs, _names, records) =
        fasta::read_problem_instance(&config.ref_fa, &config.reads_fa)?;

    let reads = Rc::new(seqs);
    let genome_length = if config.circular { genome.len() } else { 0 };

    // gold-standard side: exact overlaps from the recorded layout
    let gold = gold_standard::generate_gold_standard(Rc::clone(&reads), &records, genome_length)?;
    gold.export()
        .write_gml(&format!("{}.gold_overlap.gml", config.gml_prefix))?;
    let gold_string =
        transitive_reduction::naive_tr(&containment_pruning::pruned(&gold)?, config.fuzz)?;
    gold_string
        .export()
        .write_gml(&format!("{}.gold_string.gml", config.gml_prefix))?;
    info!("gold string graph: {} directed edges", gold_string.num_edges());

    // seed side: minimizer seeds extended into candidate overlaps
    let seeds = match &config.seeds {
        Some(path) => {
            info!("loading precomputed seeds from {}", path);
            minimizer_index::load_seeds(path)?
        }
        None => {
            let seeds = minimizer_index::get_overlap_seeds(
                &reads,
                config.kmer_length,
                config.window_length,
            )?;
            let seeds_path = format!("{}.seeds.bin", config.gml_prefix);
            minimizer_index::serialize_seeds(&seeds, &seeds_path)?;
            info!("wrote {} seeds to {}", seeds.len(), seeds_path);
            seeds
        }
    };

    let dirty = seed_extension::generate_seed_based(Rc::clone(&reads), &seeds, config.kmer_length)?;
    dirty
        .export()
        .write_gml(&format!("{}.dirty_overlap.gml", config.gml_prefix))?;
    let dirty_string =
        transitive_reduction::naive_tr(&containment_pruning::pruned(&dirty)?, config.fuzz)?;
    dirty_string
        .export()
        .write_gml(&format!("{}.dirty_string.gml", config.gml_prefix))?;
    info!(
        "seed-based string graph: {} directed edges",
        dirty_string.num_edges()
    );

    Ok(())
}

fn run_layout(config: &LayoutConfig) -> Result<()> {
    let (_genome, seqs, _names, records) =
        fasta::read_problem_instance(&config.ref_fa, &config.reads_fa)?;

    match &config.output {
        Some(path) => {
            let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
            layout::pretty_layout(&seqs, &records, &mut writer)?;
        }
        None => {
            let mut stdout = std::io::stdout();
            layout::pretty_layout(&seqs, &records, &mut stdout)?;
        }
    }
    Ok(())
}
