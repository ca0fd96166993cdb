//! Configuration for the genome comparison pipeline

/// Tunable settings for pairwise genome scoring.
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of the sequence windows compared across genomes.
    pub sequence_length: usize,

    /// Worker threads for pair scoring, 0 meaning all available cores.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sequence_length: 20,
            threads: 0,
        }
    }
}

impl Config {
    /// Create a configuration with custom values.
    pub fn new(sequence_length: usize, threads: usize) -> Self {
        Self {
            sequence_length,
            threads,
        }
    }
}
