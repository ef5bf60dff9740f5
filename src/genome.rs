//! Directory-of-FASTA reference genome backing the region fetch boundary.
//!
//! A genome is a directory holding one FASTA file per chromosome
//! (`<chrom>.fa` or `<chrom>.fasta`, optionally gzip-compressed). Chromosome
//! sequences are loaded on first use and cached behind a mutex so a genome
//! can be shared across extraction threads.

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use flate2::read::GzDecoder;

use crate::error::Error;
use crate::region::{RegionFetcher, SequenceRegion};

pub struct FastaGenome {
    genome_id: String,
    files: HashMap<String, PathBuf>,
    cache: Mutex<HashMap<String, String>>,
}

impl FastaGenome {
    /// Scan a genome directory for per-chromosome FASTA files. Hidden files
    /// and `.fai` index leftovers are ignored.
    pub fn open(dir: &Path, genome_id: &str) -> Result<Self, Error> {
        let mut files = HashMap::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            if let Some(chromosome) = chromosome_name(name) {
                files.insert(chromosome.to_string(), path);
            }
        }
        if files.is_empty() {
            return Err(Error::RegionNotFound(format!(
                "no FASTA files in genome directory {} ('{genome_id}')",
                dir.display()
            )));
        }
        Ok(Self {
            genome_id: genome_id.to_string(),
            files,
            cache: Mutex::new(HashMap::new()),
        })
    }

    #[must_use]
    pub fn genome_id(&self) -> &str {
        &self.genome_id
    }

    /// Chromosome names available in this genome, sorted.
    #[must_use]
    pub fn chromosomes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.files.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl RegionFetcher for FastaGenome {
    fn fetch(&self, region: &SequenceRegion) -> Result<String, Error> {
        let path = self.files.get(&region.chromosome).ok_or_else(|| {
            Error::RegionNotFound(format!(
                "chromosome '{}' is not present in genome '{}'",
                region.chromosome, self.genome_id
            ))
        })?;

        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if !cache.contains_key(&region.chromosome) {
            let sequence = read_chromosome(path)?;
            cache.insert(region.chromosome.clone(), sequence);
        }
        let sequence = &cache[&region.chromosome];

        let start = (region.start - 1) as usize;
        let stop = region.stop as usize;
        if stop > sequence.len() {
            return Err(Error::RegionNotFound(format!(
                "{region} extends past the end of the chromosome ({} bases)",
                sequence.len()
            )));
        }
        Ok(sequence[start..stop].to_string())
    }
}

/// Chromosome name from a FASTA filename, or `None` for non-FASTA files.
fn chromosome_name(filename: &str) -> Option<&str> {
    for suffix in [".fasta.gz", ".fa.gz", ".fasta", ".fa"] {
        if let Some(stem) = filename.strip_suffix(suffix) {
            return (!stem.is_empty()).then_some(stem);
        }
    }
    None
}

/// Read the first FASTA record of a per-chromosome file. Bases are upper
/// cased; anything outside {A,C,G,T} is reported as N, honoring the fetch
/// boundary's alphabet guarantee.
fn read_chromosome(path: &Path) -> Result<String, Error> {
    let file = fs::File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        parse_first_record(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_first_record(BufReader::new(file))
    }
}

fn parse_first_record<R: BufRead>(reader: R) -> Result<String, Error> {
    let mut sequence = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            if !sequence.is_empty() {
                break;
            }
            continue;
        }
        for &raw in line.trim().as_bytes() {
            let base = match raw.to_ascii_uppercase() {
                upper @ (b'A' | b'C' | b'G' | b'T') => upper,
                _ => b'N',
            };
            sequence.push(base as char);
        }
    }
    Ok(sequence)
}
