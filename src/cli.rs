use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ovelia",
    version = "0.1",
    about = "Toy OLC assembly pipeline: perfect-read simulation, minimizer seeds and string graph construction"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate a problem instance and its gold-standard overlap graph
    Simulate(SimulateArgs),

    /// Rebuild overlap and string graphs from a stored problem instance
    Assemble(AssembleArgs),

    /// Pretty-print the gold-standard layout of a stored problem instance
    Layout(LayoutArgs),
}

#[derive(Args)]
pub struct SimulateArgs {
    /// Output fasta file of simulated reads
    pub reads_fa: String,

    /// Output fasta file of the random reference genome
    pub ref_fa: String,

    /// Prefix for output gml files
    pub gml_prefix: String,

    /// Length of the random genome
    pub genome_length: usize,

    /// Average read depth
    pub read_depth: usize,

    /// Average read length
    pub mean_read_length: usize,

    /// Standard deviation of the read length
    pub sd_read_length: f64,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Treat the reference as linear instead of circular
    #[arg(long)]
    pub linear: bool,

    /// Disable reverse-complemented reads
    #[arg(long)]
    pub no_reverse_complements: bool,

    /// Print the gold-standard layout to stdout
    #[arg(long)]
    pub layout: bool,
}

impl From<&SimulateArgs> for crate::configs::SimulateConfig {
    fn from(args: &SimulateArgs) -> Self {
        Self {
            reads_fa: args.reads_fa.clone(),
            ref_fa: args.ref_fa.clone(),
            gml_prefix: args.gml_prefix.clone(),
            genome_length: args.genome_length,
            read_depth: args.read_depth,
            mean_read_length: args.mean_read_length,
            sd_read_length: args.sd_read_length,
            seed: args.seed,
            circular: !args.linear,
            reverse_complements: !args.no_reverse_complements,
            show_layout: args.layout,
        }
    }
}

#[derive(Args)]
pub struct AssembleArgs {
    /// Input fasta file of reads
    pub reads_fa: String,

    /// Input fasta file of the reference genome
    pub ref_fa: String,

    /// Prefix for output gml files
    pub gml_prefix: String,

    /// Minimizer length
    #[arg(short = 'k', long, default_value_t = 31)]
    pub kmer_length: usize,

    /// Minimizer window length
    #[arg(short = 'w', long, default_value_t = 19)]
    pub window_length: usize,

    /// Fuzz tolerance for transitive reduction
    #[arg(long, default_value_t = 0)]
    pub fuzz: usize,

    /// Treat the reference as linear instead of circular
    #[arg(long)]
    pub linear: bool,

    /// Pre-computed seeds binary file (skips minimizer indexing)
    #[arg(long)]
    pub seeds: Option<String>,
}

impl From<&AssembleArgs> for crate::configs::AssembleConfig {
    fn from(args: &AssembleArgs) -> Self {
        Self {
            reads_fa: args.reads_fa.clone(),
            ref_fa: args.ref_fa.clone(),
            gml_prefix: args.gml_prefix.clone(),
            kmer_length: args.kmer_length,
            window_length: args.window_length,
            fuzz: args.fuzz,
            circular: !args.linear,
            seeds: args.seeds.clone(),
        }
    }
}

#[derive(Args)]
pub struct LayoutArgs {
    /// Input fasta file of reads
    pub reads_fa: String,

    /// Input fasta file of the reference genome
    pub ref_fa: String,

    /// Output file (stdout when omitted)
    #[arg(short = 'o', long)]
    pub output: Option<String>,
}

impl From<&LayoutArgs> for crate::configs::LayoutConfig {
    fn from(args: &LayoutArgs) -> Self {
        Self {
            reads_fa: args.reads_fa.clone(),
            ref_fa: args.ref_fa.clone(),
            output: args.output.clone(),
        }
    }
}
