use anyhow::{bail, Result};
use clap::Parser;

use genome_family_analyzer::compare;
use genome_family_analyzer::config::Config;
use genome_family_analyzer::data::{edge_list, fasta};

#[derive(Parser, Debug)]
#[clap(
    name = "genomecompare",
    about = "Compute pairwise homology percentages between FASTA genomes"
)]
struct Cli {
    /// Directory containing the genome FASTA files
    genome_dir: String,

    /// Text file listing one genome file name per line
    names_file: String,

    /// Path to write the tab-separated homology edge list to
    output: String,

    /// Length of the sequence windows to compare
    sequence_length: usize,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    if args.sequence_length == 0 {
        bail!("sequence length must be positive");
    }
    let config = Config::new(args.sequence_length, args.threads);

    // Set number of threads
    let num_threads = if config.threads > 0 {
        config.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    // 1. Collect the genome files
    let genomes = fasta::read_genome_list(&args.genome_dir, &args.names_file)?;

    // 2. Score every pair
    let pairs = compare::score_genomes(&genomes, &config)?;

    // 3. Save the edge list
    edge_list::write_edge_list(&args.output, &pairs)?;

    log::info!("Homology calculated and written to {}", args.output);

    Ok(())
}
