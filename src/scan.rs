//! Exact-match motif scanning over both strands.
//!
//! Ambiguity was already resolved into concrete patterns by the expander, so
//! scanning is plain substring matching. Matches may overlap: dense motif
//! sites produce PAM occurrences at adjacent offsets and every one of them
//! is a distinct extraction site.

use std::collections::HashSet;

use crate::pattern::PatternSet;
use crate::strand::Strand;

/// One PAM occurrence.
///
/// `offset` is the 0-based index of the first matched base, always counted
/// on the forward sequence string: reverse-strand patterns are themselves
/// reverse complements, so they are matched directly against the forward
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotifHit {
    pub offset: usize,
    pub strand: Strand,
}

/// All (possibly overlapping) start offsets of `pattern` in `sequence`.
#[must_use]
pub fn find_overlapping(sequence: &str, pattern: &str) -> Vec<usize> {
    let pattern = pattern.as_bytes();
    if pattern.is_empty() || pattern.len() > sequence.len() {
        return Vec::new();
    }
    sequence
        .as_bytes()
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(offset, _)| offset)
        .collect()
}

/// Scan a sequence for every pattern in the set, on both strands.
///
/// The caller is responsible for upper-casing the sequence. Coinciding
/// patterns (reverse-palindromic motifs) collapse to a single hit per
/// (offset, strand) pair.
#[must_use]
pub fn scan(sequence: &str, patterns: &PatternSet) -> Vec<MotifHit> {
    let mut seen: HashSet<MotifHit> = HashSet::new();
    let mut hits = Vec::new();
    for (strand, strand_patterns) in [
        (Strand::Forward, &patterns.forward),
        (Strand::Reverse, &patterns.reverse),
    ] {
        for pattern in strand_patterns {
            for offset in find_overlapping(sequence, pattern) {
                let hit = MotifHit { offset, strand };
                if seen.insert(hit) {
                    hits.push(hit);
                }
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets(hits: &[MotifHit], strand: Strand) -> Vec<usize> {
        let mut v: Vec<usize> = hits
            .iter()
            .filter(|h| h.strand == strand)
            .map(|h| h.offset)
            .collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn overlapping_matches() {
        assert_eq!(find_overlapping("AAAA", "AA"), vec![0, 1, 2]);
        assert_eq!(find_overlapping("AAA", "AA"), vec![0, 1]);
    }

    #[test]
    fn no_match() {
        assert!(find_overlapping("ACGT", "TT").is_empty());
        assert!(find_overlapping("AC", "ACGT").is_empty());
        assert!(find_overlapping("ACGT", "").is_empty());
    }

    #[test]
    fn scans_both_strands() {
        // TGG forward at 4; CCA (revcomp of TGG) forward-string match at 0.
        let patterns = PatternSet::expand("NGG").unwrap();
        let hits = scan("CCAATGG", &patterns);
        assert_eq!(offsets(&hits, Strand::Forward), vec![4]);
        assert_eq!(offsets(&hits, Strand::Reverse), vec![0]);
    }

    #[test]
    fn palindromic_hits_kept_once_per_strand() {
        // revcomp(AT) = AT: the same string matches as both a forward and a
        // reverse pattern, which are distinct occurrences.
        let patterns = PatternSet::expand("AT").unwrap();
        let hits = scan("GATC", &patterns);
        assert_eq!(offsets(&hits, Strand::Forward), vec![1]);
        assert_eq!(offsets(&hits, Strand::Reverse), vec![1]);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn duplicate_patterns_do_not_double_count() {
        let patterns = PatternSet {
            forward: vec!["AA".to_string(), "AA".to_string()],
            reverse: Vec::new(),
        };
        let hits = scan("AAAA", &patterns);
        assert_eq!(offsets(&hits, Strand::Forward), vec![0, 1, 2]);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn degenerate_pam_dense_site() {
        // AGG at 0 and GGG at 1 both satisfy NGG.
        let patterns = PatternSet::expand("NGG").unwrap();
        let hits = scan("AGGG", &patterns);
        assert_eq!(offsets(&hits, Strand::Forward), vec![0, 1]);
    }
}
