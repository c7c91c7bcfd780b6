use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

use txprof_composition::ProfileBuilder;
use txprof_core::models::SequenceRecord;
use txprof_core::{CompositionConfig, SegmentStrategy, ZeroCountPolicy};
use txprof_io::{FastaSource, TableWrite, TxprofIoError};

use crate::report::{CompositionReport, RunReport, write_report};

/// Transcripts of one FASTA file.
pub struct Transcripts {
    pub records: Vec<SequenceRecord>,
    /// Records left out because they could not be parsed
    pub unparseable: usize,
}

///
/// Read all transcripts, ticking a spinner per record.
///
/// Unparseable records are logged and counted. A read error that ends the
/// stream keeps what was read before it.
///
pub fn read_transcripts(path: &Path) -> Result<Transcripts> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg} ({pos} records)")?,
    );
    pb.set_message(format!(
        "Reading {:?}",
        path.file_name().unwrap_or_default()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut records = Vec::new();
    let mut unparseable = 0;
    for record in FastaSource::from_path(path)? {
        match record {
            Ok(record) => {
                records.push(record);
                pb.inc(1);
            }
            Err(e) => {
                warn!("{}, skipping", e);
                unparseable += 1;
            }
        }
    }
    pb.finish_and_clear();

    if records.is_empty() {
        return Err(TxprofIoError::EmptyInput(path.to_path_buf()).into());
    }
    Ok(Transcripts {
        records,
        unparseable,
    })
}

///
/// Segment, profile and write one FASTA file as described by `config`.
///
pub fn composition_pipeline(config: &CompositionConfig) -> Result<CompositionReport> {
    let Transcripts {
        records,
        unparseable,
    } = read_transcripts(&config.input)?;
    let builder = ProfileBuilder::from_config(config);

    let batch = match &config.lengths_output {
        None => builder.build_all(&records),
        Some(lengths_output) => {
            let (batch, lengths) = builder
                .profile_all(&records)
                .unzip(|p| (p.composition, p.lengths));
            lengths
                .write_table_to_path(lengths_output)
                .with_context(|| format!("Failed to write {}", lengths_output.display()))?;
            batch
        }
    };
    batch
        .rows
        .write_table_to_path(&config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    Ok(CompositionReport {
        input: config.input.clone(),
        output: config.output.clone(),
        strategy: config.strategy,
        summary: batch.summary,
        unparseable,
        lengths_output: config.lengths_output.clone(),
    })
}

///
/// Only the region length table.
///
pub fn lengths_pipeline(
    input: &Path,
    output: &Path,
    strategy: SegmentStrategy,
) -> Result<CompositionReport> {
    let Transcripts {
        records,
        unparseable,
    } = read_transcripts(input)?;
    let batch = ProfileBuilder::new(strategy, ZeroCountPolicy::default()).lengths_all(&records);
    batch
        .rows
        .write_table_to_path(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(CompositionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        strategy,
        summary: batch.summary,
        unparseable,
        lengths_output: None,
    })
}

fn get_path(matches: &ArgMatches, id: &str) -> Option<PathBuf> {
    matches.get_one::<String>(id).map(PathBuf::from)
}

pub fn run_composition(matches: &ArgMatches) -> Result<()> {
    let input = get_path(matches, "input").context("A path to a FASTA file is required.")?;
    let output = get_path(matches, "output").context("--output has a default value")?;

    let strategy = matches
        .get_one::<String>("strategy")
        .map(|s| s.parse::<SegmentStrategy>())
        .transpose()?
        .unwrap_or_default();
    let zero_policy = matches
        .get_one::<String>("zero-policy")
        .map(|s| s.parse::<ZeroCountPolicy>())
        .transpose()?
        .unwrap_or_default();

    let config = CompositionConfig {
        input,
        output,
        strategy,
        zero_policy,
        lengths_output: get_path(matches, "lengths"),
    };

    let report = RunReport {
        composition: Some(composition_pipeline(&config)?),
        ..Default::default()
    };
    write_report(&report, get_path(matches, "report").as_deref())
}

pub fn run_lengths(matches: &ArgMatches) -> Result<()> {
    let input = get_path(matches, "input").context("A path to a FASTA file is required.")?;
    let output = get_path(matches, "output").context("--output has a default value")?;
    let strategy = matches
        .get_one::<String>("strategy")
        .map(|s| s.parse::<SegmentStrategy>())
        .transpose()?
        .unwrap_or_default();

    let report = RunReport {
        composition: Some(lengths_pipeline(&input, &output, strategy)?),
        ..Default::default()
    };
    write_report(&report, get_path(matches, "report").as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::tempdir;

    #[rstest]
    fn test_composition_pipeline_writes_both_tables() {
        let dir = tempdir().unwrap();
        let config = CompositionConfig {
            input: PathBuf::from("../tests/data/annotated.fa"),
            output: dir.path().join("out/composition.csv"),
            strategy: SegmentStrategy::Coordinates,
            zero_policy: ZeroCountPolicy::Na,
            lengths_output: Some(dir.path().join("out/lengths.csv")),
        };

        let report = composition_pipeline(&config).unwrap();
        assert_eq!(report.summary.emitted, 2);
        assert_eq!(report.summary.skipped(), 3);

        let lengths = std::fs::read_to_string(dir.path().join("out/lengths.csv")).unwrap();
        assert_eq!(lengths, "GeneID,5'UTR,CDS,3'UTR\nNM_0001,2,5,3\nNM_0004,3,9,3\n");
    }

    #[rstest]
    fn test_lengths_pipeline_case_pattern() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("lengths.tsv");
        let report = lengths_pipeline(
            Path::new("../tests/data/transcripts.fa"),
            &output,
            SegmentStrategy::CasePattern,
        )
        .unwrap();

        assert_eq!(report.summary.emitted, 4);
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().nth(1), Some("tx1\t4\t4\t4"));
    }

    #[rstest]
    fn test_bad_records_do_not_abort_the_run() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("noisy.fa");
        std::fs::write(
            &input,
            "\n# exported transcripts\n>tx1\nacgtACGTacgt\n>\nACGT\n>tx2\nACGTACGT\n",
        )
        .unwrap();

        let config = CompositionConfig {
            input,
            output: dir.path().join("composition.csv"),
            strategy: SegmentStrategy::CasePattern,
            zero_policy: ZeroCountPolicy::Na,
            lengths_output: None,
        };
        let report = composition_pipeline(&config).unwrap();

        assert_eq!(report.unparseable, 1);
        assert_eq!(report.summary.records, 2);
        assert_eq!(report.summary.emitted, 2);
        let text = std::fs::read_to_string(dir.path().join("composition.csv")).unwrap();
        let ids: Vec<&str> = text
            .lines()
            .skip(1)
            .filter_map(|l| l.split(',').next())
            .collect();
        assert_eq!(ids, vec!["tx1", "tx2"]);
    }

    #[rstest]
    fn test_missing_input() {
        let result = read_transcripts(Path::new("../tests/data/missing.fa"));
        assert!(result.is_err());
    }
}
