//! Error types for the PamScan library.

use thiserror::Error;

/// Errors that can occur during guide extraction.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The PAM descriptor line could not be parsed.
    #[error("malformed PAM specification: {0}")]
    MalformedPamSpec(String),

    /// The PAM descriptor parsed but describes an impossible geometry
    /// (zero offset, PAM longer than the motif, or no room for a guide).
    #[error("invalid PAM geometry: {0}")]
    InvalidPamGeometry(String),

    /// A character outside the 15 canonical IUPAC ambiguity codes.
    #[error("unknown IUPAC symbol: '{0}'")]
    UnknownSymbol(char),

    /// A genomic region could not be resolved against the reference store.
    #[error("region not found: {0}")]
    RegionNotFound(String),

    /// No guide survived extraction across all sources.
    ///
    /// Never raised by the extractor itself (an empty per-source result is
    /// returned as an empty set); callers raise this when the merged final
    /// guide list is empty and they have no fallback policy.
    #[error("no PAM-adjacent guides found in any input source")]
    EmptyExtractionResult,

    /// A parse error occurred while reading input data.
    #[error("{0}")]
    Parse(String),
}
