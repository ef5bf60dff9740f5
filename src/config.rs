use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Run configuration for the extract_guides binary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfig {
    /// PAM descriptor file (single line: `<motif> <offset>`).
    pub pam: PathBuf,
    /// Guide-source file: FASTA-like blocks, or a plain guide list when
    /// `guidesAreLiteral` is set.
    pub sequences: PathBuf,
    /// Treat `sequences` as a one-guide-per-line list, skipping extraction.
    #[serde(default)]
    pub guides_are_literal: bool,
    /// Directory of per-chromosome FASTA files; required when any source
    /// block contains genomic regions.
    pub genome_dir: Option<PathBuf>,
    /// Genome identifier used in diagnostics (e.g. "hg38").
    pub genome: Option<String>,
    /// Pad guides with N on the PAM side for bulge-tolerant index building.
    #[serde(default)]
    pub pad_for_indexing: bool,
}

impl RunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.pam.as_os_str().is_empty() {
            bail!("'pam' must not be empty");
        }
        if self.sequences.as_os_str().is_empty() {
            bail!("'sequences' must not be empty");
        }
        if self.genome.is_some() && self.genome_dir.is_none() {
            bail!("'genome' is set but 'genomeDir' is missing");
        }
        if self.guides_are_literal && self.genome_dir.is_some() {
            bail!("'genomeDir' is meaningless when 'guidesAreLiteral' is set");
        }
        Ok(())
    }
}
