//! Input and output formats

pub mod edge_list;
pub mod fasta;
