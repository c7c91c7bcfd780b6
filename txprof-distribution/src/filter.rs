use log::warn;
use serde::Serialize;

use txprof_core::models::PopulationFeatureRow;

/// What happened to each row of a population during filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub rows: usize,
    /// Rows with a 5'UTR, CDS or 3'UTR length ≤ 0
    pub missing_region: usize,
    /// Rows whose start does not lie on a transcript of positive length
    pub invalid_position: usize,
    pub retained: usize,
}

impl FilterReport {
    pub fn excluded(&self) -> usize {
        self.missing_region + self.invalid_position
    }
}

///
/// Keep the rows with all three regions present and a usable position.
///
/// Region lengths are checked first, so a row failing both checks is
/// counted once, as `missing_region`.
///
pub fn filter_population(
    rows: &[PopulationFeatureRow],
) -> (Vec<&PopulationFeatureRow>, FilterReport) {
    let mut report = FilterReport {
        rows: rows.len(),
        ..Default::default()
    };

    let retained: Vec<&PopulationFeatureRow> = rows
        .iter()
        .filter(|row| {
            if !row.has_all_regions() {
                warn!(
                    "{}: region lengths {}/{}/{}, dropping row",
                    row.id, row.five_utr_length, row.cds_length, row.three_utr_length
                );
                report.missing_region += 1;
                false
            } else if !row.has_valid_position() {
                warn!(
                    "{}: start {} outside transcript of length {}, dropping row",
                    row.id, row.start, row.mrna_length
                );
                report.invalid_position += 1;
                false
            } else {
                true
            }
        })
        .collect();

    report.retained = retained.len();
    (retained, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_filter_counts_each_reason() {
        let rows = vec![
            PopulationFeatureRow::new("keep", 100, 10, 80, 10, 40),
            PopulationFeatureRow::new("no5", 100, 0, 90, 10, 40),
            PopulationFeatureRow::new("neg3", 100, 10, 95, -5, 40),
            PopulationFeatureRow::new("past_end", 100, 10, 80, 10, 140),
            PopulationFeatureRow::new("both", 0, 0, 0, 0, 5),
            PopulationFeatureRow::new("keep", 100, 10, 80, 10, 100),
        ];

        let (retained, report) = filter_population(&rows);

        assert_eq!(retained.len(), 2);
        assert!(retained.iter().all(|r| r.id == "keep"));
        assert_eq!(
            report,
            FilterReport {
                rows: 6,
                missing_region: 3,
                invalid_position: 1,
                retained: 2,
            }
        );
        assert_eq!(report.excluded() + report.retained, report.rows);
    }

    #[rstest]
    fn test_filter_empty() {
        let (retained, report) = filter_population(&[]);
        assert!(retained.is_empty());
        assert_eq!(report, FilterReport::default());
    }
}
