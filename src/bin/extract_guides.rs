use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use pamscan::cli;
use pamscan::config::RunConfig;
use pamscan::error::Error;
use pamscan::extract::pad_guide;
use pamscan::genome::FastaGenome;
use pamscan::input;
use pamscan::pam::PamSpec;
use pamscan::region::RegionFetcher;

#[derive(Parser)]
#[command(
    name = "extract_guides",
    about = "Extract PAM-adjacent CRISPR guide candidates"
)]
struct Cli {
    /// Path to the JSON run configuration
    #[arg(short = 'c', long = "config")]
    config: PathBuf,

    /// Output guide list path
    #[arg(short = 'o', long = "out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let cli_args = Cli::parse();

    cli::banner("Extract Guides");

    // ── Configuration ────────────────────────────────────
    cli::section("Configuration");

    let config = RunConfig::from_file(&cli_args.config)?;
    cli::kv("Config", &cli_args.config.display().to_string());

    let spec = PamSpec::from_file(&config.pam)
        .with_context(|| format!("failed to read PAM descriptor: {}", config.pam.display()))?;
    cli::kv(
        "PAM",
        &format!(
            "{} ({}, {} nt guide)",
            spec.pam(),
            spec.side(),
            spec.guide_length()
        ),
    );
    cli::kv("Sequences", &config.sequences.display().to_string());

    let genome = match &config.genome_dir {
        Some(dir) => {
            let genome_id = config.genome.as_deref().unwrap_or("genome");
            let genome = FastaGenome::open(dir, genome_id)
                .with_context(|| format!("failed to open genome directory: {}", dir.display()))?;
            cli::kv(
                "Genome",
                &format!("{} ({} chromosomes)", genome_id, genome.chromosomes().len()),
            );
            Some(genome)
        }
        None => None,
    };

    eprintln!();

    // ── Extraction ───────────────────────────────────────
    cli::section("Extraction");

    let mut all_guides: BTreeSet<String> = BTreeSet::new();
    if config.guides_are_literal {
        all_guides = input::read_guide_list(&config.sequences)?;
        cli::kv("Literal guides", &all_guides.len().to_string());
    } else {
        let sources = input::parse_sources_file(&config.sequences)?;
        cli::kv("Sources", &sources.len().to_string());

        let fetcher = genome.as_ref().map(|g| g as &dyn RegionFetcher);
        let outcomes = input::extract_all(&sources, &spec, fetcher);
        let mut failed = 0usize;
        for outcome in outcomes {
            for err in &outcome.failures {
                cli::warning(&format!("'{}': {err}", outcome.name));
            }
            if !outcome.is_complete() {
                failed += 1;
            } else if outcome.guides.is_empty() {
                cli::warning(&format!(
                    "'{}': no PAM-adjacent guides found",
                    outcome.name
                ));
            }
            all_guides.extend(outcome.guides);
        }
        if failed > 0 {
            cli::kv("Incomplete sources", &failed.to_string());
        }
    }

    if all_guides.is_empty() {
        return Err(Error::EmptyExtractionResult.into());
    }
    cli::kv("Unique guides", &all_guides.len().to_string());

    eprintln!();

    // ── Writing ──────────────────────────────────────────
    cli::section("Writing");

    let out_file = File::create(&cli_args.out)
        .with_context(|| format!("failed to create output file: {}", cli_args.out.display()))?;
    let mut writer = BufWriter::new(out_file);
    if config.pad_for_indexing {
        let padded: Vec<String> = all_guides.iter().map(|g| pad_guide(g, &spec)).collect();
        input::write_guides(&mut writer, &padded)?;
    } else {
        input::write_guides(&mut writer, &all_guides)?;
    }
    cli::success(&format!(
        "{} guides → {}",
        all_guides.len(),
        cli_args.out.display()
    ));

    // ── Summary ──────────────────────────────────────────
    cli::print_summary(start);
    Ok(())
}
