//! IUPAC ambiguity-code tables.
//!
//! Fixed `match` lookups over the 15 canonical codes: concrete-base
//! expansion, symbol complementation, and symbol-level reverse complement.
//! Case is folded to upper case everywhere.

use crate::error::Error;

/// Concrete bases matched by an IUPAC symbol, in alphabetical order.
pub fn expand_symbol(symbol: u8) -> Result<&'static [u8], Error> {
    match symbol.to_ascii_uppercase() {
        b'A' => Ok(b"A"),
        b'C' => Ok(b"C"),
        b'G' => Ok(b"G"),
        b'T' => Ok(b"T"),
        b'R' => Ok(b"AG"),
        b'Y' => Ok(b"CT"),
        b'S' => Ok(b"CG"),
        b'W' => Ok(b"AT"),
        b'K' => Ok(b"GT"),
        b'M' => Ok(b"AC"),
        b'B' => Ok(b"CGT"),
        b'D' => Ok(b"AGT"),
        b'H' => Ok(b"ACT"),
        b'V' => Ok(b"ACG"),
        b'N' => Ok(b"ACGT"),
        other => Err(Error::UnknownSymbol(other as char)),
    }
}

/// Complementary IUPAC symbol (A↔T, C↔G, and the ambiguity-code pairs).
pub fn complement_symbol(symbol: u8) -> Result<u8, Error> {
    match symbol.to_ascii_uppercase() {
        b'A' => Ok(b'T'),
        b'T' => Ok(b'A'),
        b'C' => Ok(b'G'),
        b'G' => Ok(b'C'),
        b'R' => Ok(b'Y'),
        b'Y' => Ok(b'R'),
        b'S' => Ok(b'S'),
        b'W' => Ok(b'W'),
        b'K' => Ok(b'M'),
        b'M' => Ok(b'K'),
        b'B' => Ok(b'V'),
        b'V' => Ok(b'B'),
        b'D' => Ok(b'H'),
        b'H' => Ok(b'D'),
        b'N' => Ok(b'N'),
        other => Err(Error::UnknownSymbol(other as char)),
    }
}

/// Reverse-complement a symbol string at the IUPAC level: complement each
/// symbol to its complementary ambiguity code, then reverse the order.
///
/// This is the correct operation for degenerate motifs; complementing each
/// concretely expanded string instead would complement one resolved base
/// rather than the ambiguity code.
pub fn reverse_complement(symbols: &str) -> Result<String, Error> {
    let mut out = String::with_capacity(symbols.len());
    for &symbol in symbols.as_bytes().iter().rev() {
        out.push(complement_symbol(symbol)? as char);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMBOLS: &[u8] = b"ACGTRYSWKMBDHVN";

    #[test]
    fn expansion_sizes() {
        assert_eq!(expand_symbol(b'A').unwrap(), b"A");
        assert_eq!(expand_symbol(b'R').unwrap(), b"AG");
        assert_eq!(expand_symbol(b'B').unwrap(), b"CGT");
        assert_eq!(expand_symbol(b'N').unwrap(), b"ACGT");
    }

    #[test]
    fn case_folded() {
        for &symbol in SYMBOLS {
            assert_eq!(
                expand_symbol(symbol).unwrap(),
                expand_symbol(symbol.to_ascii_lowercase()).unwrap()
            );
        }
    }

    #[test]
    fn unknown_symbol() {
        assert!(matches!(expand_symbol(b'X'), Err(Error::UnknownSymbol('X'))));
        assert!(matches!(complement_symbol(b'-'), Err(Error::UnknownSymbol('-'))));
    }

    #[test]
    fn complement_is_involutive() {
        for &symbol in SYMBOLS {
            let twice = complement_symbol(complement_symbol(symbol).unwrap()).unwrap();
            assert_eq!(twice, symbol, "symbol {}", symbol as char);
        }
    }

    /// expand(complement(s)) must equal the per-base complement of expand(s).
    #[test]
    fn complement_expansion_consistency() {
        for &symbol in SYMBOLS {
            let direct = expand_symbol(complement_symbol(symbol).unwrap())
                .unwrap()
                .to_vec();
            let mut complemented: Vec<u8> = expand_symbol(symbol)
                .unwrap()
                .iter()
                .map(|&base| complement_symbol(base).unwrap())
                .collect();
            complemented.sort_unstable();
            assert_eq!(direct, complemented, "symbol {}", symbol as char);
        }
    }

    #[test]
    fn reverse_complement_symbol_level() {
        assert_eq!(reverse_complement("NGG").unwrap(), "CCN");
        assert_eq!(reverse_complement("TTTV").unwrap(), "BAAA");
        assert_eq!(reverse_complement("ACGT").unwrap(), "ACGT");
        assert_eq!(reverse_complement("").unwrap(), "");
    }

    #[test]
    fn reverse_complement_rejects_bad_symbol() {
        assert!(reverse_complement("NQG").is_err());
    }
}
