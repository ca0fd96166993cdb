//! FASTA genome input

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// Read one genome from a FASTA file as a flat base sequence. Lines starting
/// with `>` are headers and are dropped; everything else concatenates in
/// order.
pub fn read_sequence(path: &str) -> Result<Vec<u8>> {
    let file = File::open(path).with_context(|| format!("failed to open genome {}", path))?;

    let mut sequence = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("failed to read genome {}", path))?;
        if line.starts_with('>') {
            continue;
        }
        sequence.extend_from_slice(line.as_bytes());
    }
    Ok(sequence)
}

/// Read the genome list file: one FASTA file name per line, terminated by a
/// blank line or end of file. Returns `(genome name, full path)` pairs with
/// paths resolved against `genome_dir`.
pub fn read_genome_list(genome_dir: &str, names_path: &str) -> Result<Vec<(String, String)>> {
    let file = File::open(names_path)
        .with_context(|| format!("failed to open genome list {}", names_path))?;

    let mut genomes = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("failed to read genome list {}", names_path))?;
        let name = line.trim();
        if name.is_empty() {
            break;
        }
        let path = Path::new(genome_dir).join(name);
        genomes.push((name.to_string(), path.to_string_lossy().into_owned()));
    }

    log::info!("Genome list {} holds {} entries", names_path, genomes.len());
    Ok(genomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn drops_headers_and_joins_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "v_cholerae.fasta", ">v cholerae chr 1\nAGCT\nTTGA\n>chr 2\nCCAA\n");

        let sequence = read_sequence(&path).unwrap();
        assert_eq!(sequence, b"AGCTTTGACCAA");
    }

    #[test]
    fn headerless_input_reads_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "plain.fasta", "AGCT\nAG\n");

        let sequence = read_sequence(&path).unwrap();
        assert_eq!(sequence, b"AGCTAG");
    }

    #[test]
    fn missing_genome_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.fasta");

        assert!(read_sequence(&path.to_string_lossy()).is_err());
    }

    #[test]
    fn genome_list_resolves_against_directory() {
        let dir = TempDir::new().unwrap();
        let list = write_file(&dir, "names.txt", "a.fasta\nb.fasta\n");

        let genomes = read_genome_list("genomes", &list).unwrap();

        let expected_a = Path::new("genomes").join("a.fasta");
        assert_eq!(genomes.len(), 2);
        assert_eq!(genomes[0].0, "a.fasta");
        assert_eq!(genomes[0].1, expected_a.to_string_lossy());
        assert_eq!(genomes[1].0, "b.fasta");
    }

    #[test]
    fn genome_list_stops_at_blank_line() {
        let dir = TempDir::new().unwrap();
        let list = write_file(&dir, "names.txt", "a.fasta\n\nb.fasta\n");

        let genomes = read_genome_list(".", &list).unwrap();
        assert_eq!(genomes.len(), 1);
    }
}
