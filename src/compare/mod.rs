//! Pairwise homology scoring between genomes
//!
//! Each genome in turn contributes a trie of every window of the configured
//! length. Every other genome is then split into consecutive non-overlapping
//! reads of that length, and the fraction of its reads found in the trie is
//! its mapped fraction onto the trie owner. The homology between two genomes
//! is the mean of the two directed fractions, reported as a percentage.

pub mod trie;

use anyhow::Result;
use itertools::Itertools;
use ndarray::Array2;
use rayon::prelude::*;

use crate::compare::trie::SequenceTrie;
use crate::config::Config;
use crate::data::fasta;

/// Build the trie of every window of `length` bases, stepping one base at a
/// time. Sequences shorter than one window produce an empty trie.
pub fn build_trie(sequence: &[u8], length: usize) -> SequenceTrie {
    let mut trie = SequenceTrie::new(length);
    if length == 0 || sequence.len() < length {
        return trie;
    }
    for window in sequence.windows(length) {
        trie.insert(window);
    }
    trie
}

/// Fraction of `sequence`'s consecutive non-overlapping reads found in the
/// trie. A sequence too short for a single read maps as 0.0.
pub fn mapped_fraction(sequence: &[u8], trie: &SequenceTrie) -> f64 {
    let length = trie.depth();
    if length == 0 {
        return 0.0;
    }

    let mut mapped = 0usize;
    let mut total = 0usize;
    for read in sequence.chunks_exact(length) {
        total += 1;
        if trie.contains(read) {
            mapped += 1;
        }
    }

    if total == 0 {
        0.0
    } else {
        mapped as f64 / total as f64
    }
}

/// Score every genome pair. Returns `(genome A, genome B, percent)` rows for
/// each unordered pair in genome list order, ready for the edge list writer.
///
/// One trie is built per genome and all other genomes map onto it in
/// parallel, so the trie is constructed once however many pairs it serves.
pub fn score_genomes(genomes: &[(String, String)], config: &Config) -> Result<Vec<(String, String, f64)>> {
    let length = config.sequence_length;
    log::info!(
        "Scoring {} genomes with window length {}",
        genomes.len(),
        length
    );

    let sequences: Vec<Vec<u8>> = genomes
        .iter()
        .map(|(name, path)| {
            let sequence = fasta::read_sequence(path)?;
            log::debug!("Read {} bases for {}", sequence.len(), name);
            Ok(sequence)
        })
        .collect::<Result<_>>()?;

    let count = genomes.len();
    let mut fractions = Array2::<f64>::zeros((count, count));

    for (i, (name, _)) in genomes.iter().enumerate() {
        log::info!("Building trie for {}", name);
        let trie = build_trie(&sequences[i], length);
        log::debug!("Trie for {} holds {} nodes", name, trie.node_count());

        let row: Vec<(usize, f64)> = (0..count)
            .into_par_iter()
            .filter(|&j| j != i)
            .map(|j| (j, mapped_fraction(&sequences[j], &trie)))
            .collect();
        for (j, fraction) in row {
            fractions[[i, j]] = fraction;
        }
    }

    let pairs = (0..count)
        .tuple_combinations()
        .map(|(i, j)| {
            let percent = (fractions[[i, j]] + fractions[[j, i]]) / 2.0 * 100.0;
            (genomes[i].0.clone(), genomes[j].0.clone(), percent)
        })
        .collect();

    Ok(pairs)
}
