//! PAM descriptor parsing.
//!
//! A descriptor line reads `<motif> <signed integer>`. The motif is a string
//! of IUPAC symbols covering the full protospacer+PAM window; the integer
//! gives the PAM length and sign-encodes which side of the guide it sits on.
//! A negative value selects the leading symbols (PAM precedes the guide,
//! Cas12a-style); a positive value selects the trailing symbols (PAM follows
//! the guide, Cas9 `NGG`-style). For SpCas9 the canonical descriptor is
//! `NNNNNNNNNNNNNNNNNNNNNGG 3`.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;
use crate::iupac;

/// Which side of the guide the PAM occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PamSide {
    /// PAM precedes the guide (negative offset).
    Upstream,
    /// PAM follows the guide (positive offset).
    Downstream,
}

impl fmt::Display for PamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream => write!(f, "upstream"),
            Self::Downstream => write!(f, "downstream"),
        }
    }
}

/// Immutable, validated PAM specification.
#[derive(Debug, Clone)]
pub struct PamSpec {
    motif: String,
    signed_offset: i64,
    pam: String,
    side: PamSide,
}

impl PamSpec {
    /// Parse a descriptor line. The motif is the first whitespace-delimited
    /// token, the offset the last; interior whitespace is tolerated.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(Error::MalformedPamSpec(format!(
                "expected '<motif> <offset>', got '{}'",
                line.trim()
            )));
        }
        let motif = fields[0].to_ascii_uppercase();
        let offset_token = fields[fields.len() - 1];
        let signed_offset: i64 = offset_token.parse().map_err(|_| {
            Error::MalformedPamSpec(format!("PAM offset '{offset_token}' is not an integer"))
        })?;
        for symbol in motif.chars() {
            if !symbol.is_ascii() {
                return Err(Error::UnknownSymbol(symbol));
            }
            iupac::expand_symbol(symbol as u8)?;
        }

        if signed_offset == 0 {
            return Err(Error::InvalidPamGeometry(
                "PAM offset must be non-zero".to_string(),
            ));
        }
        let pam_length = signed_offset.unsigned_abs() as usize;
        if pam_length >= motif.len() {
            return Err(Error::InvalidPamGeometry(format!(
                "PAM length {pam_length} leaves no guide in a {}-symbol motif",
                motif.len()
            )));
        }
        let (pam, side) = if signed_offset < 0 {
            (motif[..pam_length].to_string(), PamSide::Upstream)
        } else {
            (motif[motif.len() - pam_length..].to_string(), PamSide::Downstream)
        };

        Ok(Self {
            motif,
            signed_offset,
            pam,
            side,
        })
    }

    /// Read a PAM descriptor file; only the first line is meaningful.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut line = String::new();
        reader.read_line(&mut line)?;
        Self::parse(&line)
    }

    /// Full protospacer+PAM motif as given, upper case.
    #[must_use]
    pub fn motif(&self) -> &str {
        &self.motif
    }

    /// Concrete PAM symbol slice of the motif.
    #[must_use]
    pub fn pam(&self) -> &str {
        &self.pam
    }

    #[must_use]
    pub fn signed_offset(&self) -> i64 {
        self.signed_offset
    }

    #[must_use]
    pub fn pam_length(&self) -> usize {
        self.pam.len()
    }

    /// Length of the full protospacer+PAM window.
    #[must_use]
    pub fn total_length(&self) -> usize {
        self.motif.len()
    }

    #[must_use]
    pub fn guide_length(&self) -> usize {
        self.motif.len() - self.pam.len()
    }

    #[must_use]
    pub fn side(&self) -> PamSide {
        self.side
    }
}
