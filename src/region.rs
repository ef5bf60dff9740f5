//! Genomic regions and the reference-sequence fetch boundary.

use std::fmt;

use crate::error::Error;

/// A 1-based, inclusive genomic interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRegion {
    pub chromosome: String,
    pub start: u64,
    pub stop: u64,
}

impl SequenceRegion {
    pub fn new(chromosome: &str, start: u64, stop: u64) -> Result<Self, Error> {
        if chromosome.is_empty() {
            return Err(Error::Parse("region has an empty chromosome name".to_string()));
        }
        if start == 0 {
            return Err(Error::Parse(format!(
                "region {chromosome}:{start}-{stop} is not 1-based"
            )));
        }
        if start > stop {
            return Err(Error::Parse(format!(
                "region start exceeds stop: {chromosome}:{start}-{stop}"
            )));
        }
        Ok(Self {
            chromosome: chromosome.to_string(),
            start,
            stop,
        })
    }

    /// Convert a BED-style 0-based half-open interval.
    pub fn from_bed(chromosome: &str, start: u64, stop: u64) -> Result<Self, Error> {
        if start >= stop {
            return Err(Error::Parse(format!(
                "empty BED interval: {chromosome} {start} {stop}"
            )));
        }
        Self::new(chromosome, start + 1, stop)
    }

    /// Number of bases covered by the interval.
    #[must_use]
    pub fn span(&self) -> u64 {
        self.stop - self.start + 1
    }
}

impl fmt::Display for SequenceRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.stop)
    }
}

/// Resolves a region against a reference-sequence store.
///
/// Implementations guarantee the returned string has length `region.span()`,
/// is upper case, and contains only A, C, G, T, or N. Genome identifier
/// normalization and coordinate-convention reconciliation are the caller's
/// responsibility.
pub trait RegionFetcher {
    /// Fetch the sequence text for `region`, or `RegionNotFound` when the
    /// chromosome (or the genome itself) is absent.
    fn fetch(&self, region: &SequenceRegion) -> Result<String, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_inclusive() {
        let region = SequenceRegion::new("chr1", 100, 122).unwrap();
        assert_eq!(region.span(), 23);
        let single = SequenceRegion::new("chr1", 5, 5).unwrap();
        assert_eq!(single.span(), 1);
    }

    #[test]
    fn bed_conversion() {
        // BED 0-based half-open [0, 23) covers 1-based inclusive 1..23.
        let region = SequenceRegion::from_bed("chrX", 0, 23).unwrap();
        assert_eq!(region.start, 1);
        assert_eq!(region.stop, 23);
        assert_eq!(region.span(), 23);
    }

    #[test]
    fn invalid_intervals() {
        assert!(SequenceRegion::new("chr1", 0, 10).is_err());
        assert!(SequenceRegion::new("chr1", 10, 9).is_err());
        assert!(SequenceRegion::new("", 1, 10).is_err());
        assert!(SequenceRegion::from_bed("chr1", 10, 10).is_err());
    }

    #[test]
    fn display() {
        let region = SequenceRegion::new("chr2", 1, 50).unwrap();
        assert_eq!(region.to_string(), "chr2:1-50");
    }
}
