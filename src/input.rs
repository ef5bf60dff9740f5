//! Guide-source input files and batch extraction.
//!
//! Two input shapes are accepted: a plain guide list (one guide per line,
//! consumed verbatim) and a FASTA-like file of `>`-prefixed named blocks
//! whose body is either raw sequence lines or BED-style `chrom start stop`
//! region lines routed through a [`RegionFetcher`].

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::Error;
use crate::extract;
use crate::iupac;
use crate::pam::PamSpec;
use crate::region::{RegionFetcher, SequenceRegion};

/// One named guide source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideSource {
    /// Raw nucleotide sequence to extract guides from.
    Sequence { name: String, sequence: String },
    /// Genomic regions to resolve through the fetcher before extraction.
    Regions {
        name: String,
        regions: Vec<SequenceRegion>,
    },
}

impl GuideSource {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Sequence { name, .. } | Self::Regions { name, .. } => name,
        }
    }
}

/// Outcome of extracting one source.
///
/// Fetch failures are tagged per region, so one bad region aborts neither
/// its sibling regions in the same block nor the rest of the batch: guides
/// from the regions that resolved are kept alongside the failures.
#[derive(Debug)]
pub struct SourceOutcome {
    pub name: String,
    pub guides: BTreeSet<String>,
    pub failures: Vec<Error>,
}

impl SourceOutcome {
    /// True when every region (or the raw sequence) was processed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Parse a FASTA-like guide-source file.
///
/// A block whose body lines are all `chrom start stop` triples (BED
/// convention, 0-based half-open) becomes a region source; any other body is
/// concatenated into one raw sequence.
pub fn parse_sources<R: BufRead>(reader: R) -> Result<Vec<GuideSource>, Error> {
    let mut sources = Vec::new();
    let mut name: Option<String> = None;
    let mut body: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            if let Some(previous) = name.take() {
                sources.push(build_source(previous, &body)?);
                body.clear();
            }
            name = Some(header.trim().to_string());
        } else if name.is_some() {
            body.push(line.to_string());
        } else {
            return Err(Error::Parse(format!(
                "sequence data before the first '>' header: '{line}'"
            )));
        }
    }
    if let Some(last) = name {
        sources.push(build_source(last, &body)?);
    }
    Ok(sources)
}

pub fn parse_sources_file(path: &Path) -> Result<Vec<GuideSource>, Error> {
    let file = File::open(path)?;
    parse_sources(BufReader::new(file))
}

fn build_source(name: String, body: &[String]) -> Result<GuideSource, Error> {
    if name.is_empty() {
        return Err(Error::Parse("unnamed '>' header in guide-source file".to_string()));
    }
    if body.is_empty() {
        return Err(Error::Parse(format!("source '{name}' has no sequence data")));
    }
    if body.iter().all(|line| parse_bed_line(line).is_some()) {
        let mut regions = Vec::with_capacity(body.len());
        for line in body {
            let (chromosome, start, stop) = parse_bed_line(line).ok_or_else(|| {
                Error::Parse(format!("source '{name}': bad region line '{line}'"))
            })?;
            regions.push(SequenceRegion::from_bed(chromosome, start, stop)?);
        }
        Ok(GuideSource::Regions { name, regions })
    } else {
        let sequence: String = body.iter().flat_map(|line| line.split_whitespace()).collect();
        Ok(GuideSource::Sequence { name, sequence })
    }
}

/// `chrom start stop` with numeric coordinates, or `None`.
fn parse_bed_line(line: &str) -> Option<(&str, u64, u64)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return None;
    }
    let start: u64 = fields[1].parse().ok()?;
    let stop: u64 = fields[2].parse().ok()?;
    Some((fields[0], start, stop))
}

/// Extract guides from every source independently.
///
/// Failures are recorded in the outcome at region granularity; sibling
/// regions and other sources continue. `fetcher` may be `None` when the
/// input is known to contain raw sequences only.
pub fn extract_all(
    sources: &[GuideSource],
    spec: &PamSpec,
    fetcher: Option<&dyn RegionFetcher>,
) -> Vec<SourceOutcome> {
    sources
        .iter()
        .map(|source| extract_source(source, spec, fetcher))
        .collect()
}

fn extract_source(
    source: &GuideSource,
    spec: &PamSpec,
    fetcher: Option<&dyn RegionFetcher>,
) -> SourceOutcome {
    let mut outcome = SourceOutcome {
        name: source.name().to_string(),
        guides: BTreeSet::new(),
        failures: Vec::new(),
    };
    match source {
        GuideSource::Sequence { sequence, .. } => match extract::extract_guides(sequence, spec) {
            Ok(guides) => outcome.guides = guides,
            Err(err) => outcome.failures.push(err),
        },
        GuideSource::Regions { regions, .. } => {
            let Some(fetcher) = fetcher else {
                outcome.failures.push(Error::RegionNotFound(
                    "input contains genomic regions but no genome was provided".to_string(),
                ));
                return outcome;
            };
            for region in regions {
                match fetcher
                    .fetch(region)
                    .and_then(|sequence| extract::extract_guides(&sequence, spec))
                {
                    Ok(guides) => outcome.guides.extend(guides),
                    Err(err) => outcome.failures.push(err),
                }
            }
        }
    }
    outcome
}

/// Read a plain guide list: one guide per line, consumed verbatim apart from
/// upper-casing and deduplication. Blank lines are skipped.
pub fn read_guide_list(path: &Path) -> Result<BTreeSet<String>, Error> {
    let file = File::open(path)?;
    let mut guides = BTreeSet::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let guide = line.trim().to_ascii_uppercase();
        if guide.is_empty() {
            continue;
        }
        for symbol in guide.chars() {
            if !symbol.is_ascii() {
                return Err(Error::UnknownSymbol(symbol));
            }
            iupac::expand_symbol(symbol as u8)?;
        }
        guides.insert(guide);
    }
    Ok(guides)
}

/// Write guides newline-delimited, in the iteration order given.
pub fn write_guides<W, I, S>(writer: &mut W, guides: I) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for guide in guides {
        writeln!(writer, "{}", guide.as_ref())?;
    }
    Ok(())
}
