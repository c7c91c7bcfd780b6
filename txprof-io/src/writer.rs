//! Delimited table writers.
//!
//! Missing counts and ratios are written as the literal `NA`. Floats are
//! written at full precision.

use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use log::info;

use txprof_core::consts::NA;
use txprof_core::models::{
    Base, CompositionRecord, DistributionBin, GeneCompositionRow, RegionLabel, RegionLengthRow,
    SmoothedCurve,
};
use txprof_core::utils::{TableFormat, get_file_info};

use crate::error::Result;

fn fmt_count(count: Option<u64>) -> String {
    count.map_or_else(|| NA.to_string(), |c| c.to_string())
}

fn fmt_float(value: Option<f64>) -> String {
    value.map_or_else(|| NA.to_string(), |v| format!("{:?}", v))
}

///
/// Something that can be written out as a header plus rows.
///
pub trait TableWrite {
    fn header() -> Vec<String>;

    fn records(&self) -> Vec<Vec<String>>;

    fn write_table<W: Write>(&self, out: W, format: TableFormat) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(format.delimiter())
            .from_writer(out);
        writer.write_record(Self::header())?;
        for record in self.records() {
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }

    ///
    /// Write to `path`, creating parent directories as needed. The
    /// delimiter follows the file name like on the read side.
    ///
    fn write_table_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.write_table(BufWriter::new(file), get_file_info(path).table_format)?;
        info!("Wrote {}", path.display());
        Ok(())
    }
}

fn composition_fields(record: &CompositionRecord) -> impl Iterator<Item = String> + '_ {
    let counts = Base::ORDER.into_iter().map(|b| fmt_count(record.count(b)));
    let ratios = Base::ORDER.into_iter().map(|b| fmt_float(record.ratio(b)));
    counts.chain(ratios)
}

impl TableWrite for [GeneCompositionRow] {
    fn header() -> Vec<String> {
        let mut header = vec!["GeneID".to_string()];
        for label in RegionLabel::ALL {
            let prefix = label.column_prefix();
            header.extend(Base::ORDER.map(|b| format!("{}_{}", prefix, b.as_char())));
            header.extend(Base::ORDER.map(|b| format!("{}_{}_ratio", prefix, b.as_char())));
        }
        header
    }

    fn records(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|row| {
                std::iter::once(row.gene_id.clone())
                    .chain(
                        RegionLabel::ALL
                            .into_iter()
                            .flat_map(|label| composition_fields(row.region(label))),
                    )
                    .collect()
            })
            .collect()
    }
}

impl TableWrite for [RegionLengthRow] {
    fn header() -> Vec<String> {
        std::iter::once("GeneID")
            .chain(RegionLabel::ALL.map(|l| l.column_prefix()))
            .map(str::to_string)
            .collect()
    }

    fn records(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|row| {
                std::iter::once(row.gene_id.clone())
                    .chain(RegionLabel::ALL.map(|l| row.lengths.get(l).to_string()))
                    .collect()
            })
            .collect()
    }
}

impl TableWrite for [DistributionBin] {
    fn header() -> Vec<String> {
        vec!["x_values".into(), "counts_mRNA".into(), "Region".into()]
    }

    fn records(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|bin| {
                vec![
                    format!("{:?}", bin.midpoint),
                    format!("{:?}", bin.density),
                    bin.region.to_string(),
                ]
            })
            .collect()
    }
}

impl TableWrite for SmoothedCurve {
    fn header() -> Vec<String> {
        vec!["x".into(), "y".into()]
    }

    fn records(&self) -> Vec<Vec<String>> {
        self.points()
            .map(|(x, y)| vec![format!("{:?}", x), format!("{:?}", y)])
            .collect()
    }
}
