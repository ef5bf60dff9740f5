//! PamScan: PAM-aware CRISPR guide candidate extraction.
//!
//! Finds every occurrence of a degenerate PAM motif (IUPAC ambiguity codes)
//! on both strands of an input sequence or genomic region and slices out the
//! adjacent protospacer, producing a deduplicated guide list ready for
//! bulge-tolerant off-target index building.

pub mod error;

pub mod cli;
pub mod config;
pub mod extract;
pub mod genome;
pub mod input;
pub mod iupac;
pub mod pam;
pub mod pattern;
pub mod region;
pub mod scan;
pub mod strand;
