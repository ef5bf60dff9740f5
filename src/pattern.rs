//! Degenerate PAM expansion into concrete scanner patterns.

use crate::error::Error;
use crate::iupac;

/// Concrete match strings for one PAM.
///
/// `forward` expands the PAM symbol string itself; `reverse` expands its
/// symbol-level reverse complement, so reverse-strand occurrences can be
/// matched directly against the forward sequence. Each list is
/// duplicate-free.
#[derive(Debug, Clone)]
pub struct PatternSet {
    pub forward: Vec<String>,
    pub reverse: Vec<String>,
}

impl PatternSet {
    pub fn expand(pam: &str) -> Result<Self, Error> {
        let forward = expand_motif(pam)?;
        let reverse = expand_motif(&iupac::reverse_complement(pam)?)?;
        Ok(Self { forward, reverse })
    }
}

/// Iterative Cartesian product over the concrete base sets of each symbol.
///
/// Exponential in the number of ambiguous positions; PAMs are short
/// (practically ≤ 8 symbols) so the product stays small. Per-position base
/// sets are duplicate-free, so the product is too.
fn expand_motif(symbols: &str) -> Result<Vec<String>, Error> {
    let mut patterns = vec![String::new()];
    for &symbol in symbols.as_bytes() {
        let bases = iupac::expand_symbol(symbol)?;
        let mut next = Vec::with_capacity(patterns.len() * bases.len());
        for prefix in &patterns {
            for &base in bases {
                let mut pattern = String::with_capacity(symbols.len());
                pattern.push_str(prefix);
                pattern.push(base as char);
                next.push(pattern);
            }
        }
        patterns = next;
    }
    Ok(patterns)
}
