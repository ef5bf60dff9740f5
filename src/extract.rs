//! Guide candidate extraction around PAM hits.

use std::collections::BTreeSet;

use crate::error::Error;
use crate::iupac;
use crate::pam::{PamSide, PamSpec};
use crate::pattern::PatternSet;
use crate::scan::{self, MotifHit};
use crate::strand::Strand;

/// Extract every candidate guide adjacent to a PAM occurrence in `sequence`.
///
/// Guides are reported 5′→3′ on the strand carrying the motif, so
/// reverse-strand slices are reverse-complemented before insertion. Hits too
/// close to a sequence edge to admit a full-length guide are skipped, never
/// truncated. The result is a sorted, deduplicated set; an input with no
/// surviving hit yields an empty set, not an error.
pub fn extract_guides(sequence: &str, spec: &PamSpec) -> Result<BTreeSet<String>, Error> {
    let sequence = normalize_sequence(sequence)?;
    let patterns = PatternSet::expand(spec.pam())?;
    let hits = scan::scan(&sequence, &patterns);
    let mut guides = BTreeSet::new();
    for hit in hits {
        if let Some(guide) = guide_at(&sequence, spec, hit)? {
            guides.insert(guide);
        }
    }
    Ok(guides)
}

/// Slice out the guide for one hit, or `None` when the flank is too short.
///
/// On the forward strand the guide sits before a downstream PAM and after an
/// upstream one; on the reverse strand the flanks swap, because the hit
/// offset indexes the reverse-complemented pattern on the forward string.
fn guide_at(sequence: &str, spec: &PamSpec, hit: MotifHit) -> Result<Option<String>, Error> {
    let guide_len = spec.guide_length();
    let pam_len = spec.pam_length();
    let i = hit.offset;

    let guide_precedes_hit = matches!(
        (spec.side(), hit.strand),
        (PamSide::Downstream, Strand::Forward) | (PamSide::Upstream, Strand::Reverse)
    );
    let slice = if guide_precedes_hit {
        if i < guide_len {
            return Ok(None);
        }
        &sequence[i - guide_len..i]
    } else {
        if i + pam_len + guide_len > sequence.len() {
            return Ok(None);
        }
        &sequence[i + pam_len..i + pam_len + guide_len]
    };

    match hit.strand {
        Strand::Forward => Ok(Some(slice.to_string())),
        Strand::Reverse => Ok(Some(iupac::reverse_complement(slice)?)),
    }
}

/// Pad a guide with `N × pam_length` on the PAM side.
///
/// Index builders need a uniform window regardless of PAM geometry; this is
/// pure string post-processing and leaves the guide itself untouched.
#[must_use]
pub fn pad_guide(guide: &str, spec: &PamSpec) -> String {
    let pad = "N".repeat(spec.pam_length());
    match spec.side() {
        PamSide::Upstream => format!("{pad}{guide}"),
        PamSide::Downstream => format!("{guide}{pad}"),
    }
}

/// Upper-case the sequence and confirm every base is a known IUPAC symbol.
fn normalize_sequence(sequence: &str) -> Result<String, Error> {
    let upper = sequence.trim().to_ascii_uppercase();
    for symbol in upper.chars() {
        if !symbol.is_ascii() {
            return Err(Error::UnknownSymbol(symbol));
        }
        iupac::expand_symbol(symbol as u8)?;
    }
    Ok(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cas9() -> PamSpec {
        PamSpec::parse("NNNNNNNNNNNNNNNNNNNNNGG 3").unwrap()
    }

    #[test]
    fn forward_downstream_pam() {
        // 20 A's followed by the TGG PAM occurrence.
        let sequence = format!("{}TGG", "A".repeat(20));
        let guides = extract_guides(&sequence, &cas9()).unwrap();
        assert_eq!(guides.len(), 1);
        assert!(guides.contains(&"A".repeat(20)));
    }

    #[test]
    fn reverse_strand_recovers_same_guide() {
        // Reverse complement of the forward case: CCA then 20 T's. The
        // extracted slice is reverse-complemented back, so the guide string
        // is identical to the forward-strand case.
        let sequence = format!("CCA{}", "T".repeat(20));
        let guides = extract_guides(&sequence, &cas9()).unwrap();
        assert_eq!(guides.len(), 1);
        assert!(guides.contains(&"A".repeat(20)));
    }

    #[test]
    fn upstream_pam_takes_downstream_flank() {
        // TTTV PAM precedes a 4 nt guide.
        let spec = PamSpec::parse("TTTVNNNN -4").unwrap();
        let guides = extract_guides("TTTACGCA", &spec).unwrap();
        assert_eq!(guides.len(), 1);
        assert!(guides.contains("CGCA"));
    }

    #[test]
    fn upstream_pam_reverse_strand() {
        // revcomp(TTTACGCA) = TGCGTAAA: the BAAA reverse pattern matches at
        // offset 4, guide slice [0..4] reverse-complemented back to CGCA.
        let spec = PamSpec::parse("TTTVNNNN -4").unwrap();
        let guides = extract_guides("TGCGTAAA", &spec).unwrap();
        assert_eq!(guides.len(), 1);
        assert!(guides.contains("CGCA"));
    }

    #[test]
    fn guide_pam_round_trip() {
        // Non-degenerate downstream PAM: guide + pam recovers exactly {guide}.
        let spec = PamSpec::parse("NNNNNAGG 3").unwrap();
        let guides = extract_guides("TCGTAAGG", &spec).unwrap();
        assert_eq!(guides.into_iter().collect::<Vec<_>>(), vec!["TCGTA"]);
    }

    #[test]
    fn boundary_hit_rejected_not_truncated() {
        // TGG at offset 1 leaves only one upstream base for a 20 nt guide.
        let guides = extract_guides("ATGG", &cas9()).unwrap();
        assert!(guides.is_empty());
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let guides = extract_guides("TTTTTTTTTT", &cas9()).unwrap();
        assert!(guides.is_empty());
    }

    #[test]
    fn overlapping_hits_with_identical_guides_collapse() {
        let spec = PamSpec::parse("NNNNTGG 3").unwrap();
        // Two copies of guide+PAM in tandem: TGG hits at 4 and 11 both
        // slice out ACGT, which collapses to a single entry.
        let guides = extract_guides("ACGTTGGACGTTGG", &spec).unwrap();
        assert_eq!(guides.into_iter().collect::<Vec<_>>(), vec!["ACGT"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let sequence = "GGGGACGTACGTACGTACGTACGTTGGCCAAAGG";
        let first = extract_guides(sequence, &cas9()).unwrap();
        let second = extract_guides(sequence, &cas9()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn lower_case_input_normalized() {
        let sequence = format!("{}tgg", "a".repeat(20));
        let guides = extract_guides(&sequence, &cas9()).unwrap();
        assert!(guides.contains(&"A".repeat(20)));
    }

    #[test]
    fn invalid_base_rejected() {
        assert!(matches!(
            extract_guides("ACGTQACGT", &cas9()),
            Err(Error::UnknownSymbol('Q'))
        ));
    }

    #[test]
    fn pad_downstream_appends() {
        let spec = cas9();
        assert_eq!(pad_guide("ACGT", &spec), "ACGTNNN");
    }

    #[test]
    fn pad_upstream_prepends() {
        let spec = PamSpec::parse("TTTVNNNN -4").unwrap();
        assert_eq!(pad_guide("ACGT", &spec), "NNNNACGT");
    }
}
