pub struct SimulateConfig {
    pub reads_fa: String,
    pub ref_fa: String,
    pub gml_prefix: String,
    pub genome_length: usize,
    pub read_depth: usize,
    pub mean_read_length: usize,
    pub sd_read_length: f64,
    pub seed: u64,
    pub circular: bool,
    pub reverse_complements: bool,
    pub show_layout: bool,
}

pub struct AssembleConfig {
    pub reads_fa: String,
    pub ref_fa: String,
    pub gml_prefix: String,
    pub kmer_length: usize,
    pub window_length: usize,
    pub fuzz: usize,
    pub circular: bool,
    pub seeds: Option<String>,
}

pub struct LayoutConfig {
    pub reads_fa: String,
    pub ref_fa: String,
    pub output: Option<String>,
}
