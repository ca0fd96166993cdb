//! Tab-separated homology edge lists
//!
//! The comparison stage writes one row per genome pair and the clustering
//! stage reads the same format back, so the two binaries compose through a
//! plain text file. Parsing is permissive: a row that cannot contribute an
//! edge is skipped or repaired rather than aborting a long run.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result};

use crate::graph::Network;

/// Header line written ahead of every edge list.
pub const HEADER: &str = "Genome1\tGenome2\tHomology Percent";

/// Read a tab-separated homology edge list into a fresh network.
///
/// The first line is a header and is discarded. Each following line is
/// `GENOME_A<TAB>GENOME_B<TAB>WEIGHT`; reading stops at the first empty line
/// or end of file. Lines missing either name are skipped with a warning, and
/// weights that fail to parse or are not finite fall back to 0.0 so the pair
/// still enters the network as a weakest-possible link.
pub fn read_network(path: &str) -> Result<Network> {
    let file =
        File::open(path).with_context(|| format!("failed to open edge list {}", path))?;
    let mut network = Network::new();
    parse_into(BufReader::new(file), &mut network)?;
    log::info!(
        "Loaded {} genomes and {} scored pairs from {}",
        network.vertex_count(),
        network.indexed_edge_count(),
        path
    );
    Ok(network)
}

/// Parse edge list lines from a buffered reader into an existing network.
pub fn parse_into(reader: impl BufRead, network: &mut Network) -> Result<()> {
    let mut lines = reader.lines();

    if let Some(header) = lines.next() {
        header.context("failed to read edge list header")?;
    }

    for line in lines {
        let line = line.context("failed to read edge list line")?;
        if line.is_empty() {
            break;
        }

        let mut fields = line.split('\t');
        let name_a = fields.next().unwrap_or("");
        let name_b = fields.next().unwrap_or("");
        if name_a.is_empty() || name_b.is_empty() {
            log::warn!("Skipping edge list line without two genome names: {:?}", line);
            continue;
        }

        let weight = fields
            .next()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|parsed| parsed.is_finite())
            .unwrap_or(0.0);

        network.add_pair(name_a, name_b, weight);
        network.index_edge(weight, name_a, name_b)?;
    }

    Ok(())
}

/// Write a scored edge list: the header, then one `A<TAB>B<TAB>PERCENT` row
/// per pair in the given order.
pub fn write_edge_list(path: &str, pairs: &[(String, String, f64)]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create edge list {}", path))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", HEADER)?;
    for (name_a, name_b, percent) in pairs {
        writeln!(out, "{}\t{}\t{}", name_a, name_b, percent)?;
    }
    out.flush()?;

    log::info!("Wrote {} scored pairs to {}", pairs.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn parse(text: &str) -> Network {
        let mut network = Network::new();
        parse_into(Cursor::new(text), &mut network).unwrap();
        network
    }

    #[test]
    fn skips_header_and_loads_rows() {
        let network = parse("Genome1\tGenome2\tHomology Percent\nX\tY\t10\nY\tZ\t50\nX\tZ\t5\n");

        assert_eq!(network.vertex_count(), 3);
        assert_eq!(network.indexed_edge_count(), 3);
        assert!(network.contains("X"));
        assert!(!network.contains("Genome1"));
    }

    #[test]
    fn stops_at_first_empty_line() {
        let network = parse("header\nA\tB\t1.5\n\nC\tD\t2.5\n");

        assert_eq!(network.vertex_count(), 2);
        assert_eq!(network.indexed_edge_count(), 1);
        assert!(!network.contains("C"));
    }

    #[test]
    fn skips_lines_missing_a_name() {
        let network = parse("header\nA\t\t3.0\nlonely\nA\tB\t3.0\n");

        assert_eq!(network.vertex_count(), 2);
        assert_eq!(network.indexed_edge_count(), 1);
    }

    #[test]
    fn unparseable_weight_becomes_weakest_link() {
        let mut network = parse("header\nA\tB\tnot-a-number\nB\tC\t80\n");

        // The repaired zero-weight edge is the first to go.
        let families = network.cluster(2).unwrap();
        let members: Vec<Vec<&str>> = families
            .iter()
            .map(|family| family.members.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(members, vec![vec!["A"], vec!["B", "C"]]);
    }

    #[test]
    fn non_finite_weight_becomes_weakest_link() {
        let mut network = parse("header\nA\tB\tNaN\nB\tC\t80\n");

        let families = network.cluster(2).unwrap();
        assert_eq!(families[0].members, vec!["A".to_string()]);
    }

    #[test]
    fn missing_weight_field_defaults_to_zero() {
        let network = parse("header\nA\tB\n");

        assert_eq!(network.vertex_count(), 2);
        assert_eq!(network.indexed_edge_count(), 1);
    }

    #[test]
    fn header_only_input_yields_empty_network() {
        let network = parse("Genome1\tGenome2\tHomology Percent\n");

        assert_eq!(network.vertex_count(), 0);
        assert_eq!(network.indexed_edge_count(), 0);
    }
}
