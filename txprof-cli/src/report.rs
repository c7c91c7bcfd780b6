use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use txprof_composition::ProfileSummary;
use txprof_core::{BinRange, SegmentStrategy};
use txprof_distribution::{FilterReport, RegionBoundaries};

#[derive(Serialize, Debug)]
pub struct CompositionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub strategy: SegmentStrategy,
    pub summary: ProfileSummary,
    /// FASTA records that could not be parsed and never reached profiling
    pub unparseable: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lengths_output: Option<PathBuf>,
}

#[derive(Serialize, Debug)]
pub struct SmoothingReport {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

#[derive(Serialize, Debug)]
pub struct DistributionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bins: u32,
    pub bin_range: BinRange,
    pub filter: FilterReport,
    pub total_genes: usize,
    pub total_occurrences: usize,
    pub boundaries: RegionBoundaries,
    pub smoothing: SmoothingReport,
}

/// Everything a run did, as printed at the end.
#[derive(Serialize, Debug, Default)]
pub struct RunReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<CompositionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<DistributionReport>,
}

///
/// Print the report as JSON to `path`, or to stdout when no path is given.
///
pub fn write_report(report: &RunReport, path: Option<&Path>) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize run report to JSON")?;

    match path {
        Some(p) => {
            let mut file = File::create(p)
                .with_context(|| format!("Failed to create report file: {}", p.display()))?;
            file.write_all(json.as_bytes())?;
            info!("Report written to {}", p.display());
        }
        None => {
            io::stdout().write_all(json.as_bytes())?;
            println!();
        }
    }

    Ok(())
}
