//! Family statistics for progress reporting

use crate::cluster::Family;

/// Size statistics over one set of extracted families.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilySummary {
    pub family_count: usize,
    pub genome_count: usize,
    pub largest: usize,
    pub smallest: usize,
    pub mean_size: f64,
}

/// Summarize family sizes after a clustering pass.
pub fn summarize(families: &[Family]) -> FamilySummary {
    let genome_count: usize = families.iter().map(Family::len).sum();
    FamilySummary {
        family_count: families.len(),
        genome_count,
        largest: families.iter().map(Family::len).max().unwrap_or(0),
        smallest: families.iter().map(Family::len).min().unwrap_or(0),
        mean_size: if families.is_empty() {
            0.0
        } else {
            genome_count as f64 / families.len() as f64
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(id: usize, members: &[&str]) -> Family {
        Family {
            id,
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn summarizes_family_sizes() {
        let families = vec![
            family(0, &["a"]),
            family(1, &["b", "c", "d"]),
            family(2, &["e", "f"]),
        ];

        let summary = summarize(&families);

        assert_eq!(summary.family_count, 3);
        assert_eq!(summary.genome_count, 6);
        assert_eq!(summary.largest, 3);
        assert_eq!(summary.smallest, 1);
        assert!((summary.mean_size - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_summarizes_to_zeros() {
        let summary = summarize(&[]);
        assert_eq!(summary.family_count, 0);
        assert_eq!(summary.genome_count, 0);
        assert_eq!(summary.mean_size, 0.0);
    }
}
