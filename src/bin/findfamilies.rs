use anyhow::Result;
use clap::Parser;

use genome_family_analyzer::cluster::metrics;
use genome_family_analyzer::data::edge_list;
use genome_family_analyzer::report;

#[derive(Parser, Debug)]
#[clap(
    name = "findfamilies",
    about = "Cluster genomes into families from a homology edge list"
)]
struct Cli {
    /// Path to the tab-separated homology edge list
    input: String,

    /// Path to write the family report to
    output: String,

    /// Number of families to split the genomes into
    families: usize,

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

    // 1. Load the scored pairs
    log::info!("Building network from {}", args.input);
    let mut network = edge_list::read_network(&args.input)?;

    // 2. Prune the weakest links until the requested number of families remains
    log::info!(
        "Finding families among {} genomes (target {})",
        network.vertex_count(),
        args.families
    );
    let families = network.cluster(args.families)?;

    // 3. Save the report
    report::write_families(&args.output, &families)?;

    let summary = metrics::summarize(&families);
    log::info!(
        "Found {} families over {} genomes (sizes {}..{}, mean {:.2})",
        summary.family_count,
        summary.genome_count,
        summary.smallest,
        summary.largest,
        summary.mean_size
    );
    log::info!("Families calculated and written to {}", args.output);

    Ok(())
}
