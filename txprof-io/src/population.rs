use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::info;

use txprof_core::models::PopulationFeatureRow;
use txprof_core::utils::{get_dynamic_reader, get_file_info};

use crate::error::{Result, TxprofIoError};

///
/// Read a population of feature occurrences.
///
/// The table is tab-delimited for `.tsv`/`.txt` names and comma-delimited
/// otherwise, either optionally gzip'd. Columns are matched by header name,
/// extra columns are ignored.
///
/// # Arguments
///
/// - path: path to the population table
///
pub fn read_population(path: &Path) -> Result<Vec<PopulationFeatureRow>> {
    let info = get_file_info(path);
    let mut reader = ReaderBuilder::new()
        .delimiter(info.table_format.delimiter())
        .trim(Trim::All)
        .from_reader(get_dynamic_reader(path)?);

    let rows = reader
        .deserialize::<PopulationFeatureRow>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

    if rows.is_empty() {
        return Err(TxprofIoError::EmptyInput(path.to_path_buf()));
    }
    info!("Read {} population rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        File::create(&path)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
        path
    }

    #[rstest]
    fn test_read_csv_with_extra_columns() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "population.csv",
            "ID,motif,mRNA_Length,5UTR_length,CDS_Length,3UTR_Length,start\n\
             g1,GGACU,100,10,80,10,10\n\
             g2,GGACU,200,20,150,30,150\n",
        );

        let rows = read_population(&path).unwrap();
        assert_eq!(
            rows,
            vec![
                PopulationFeatureRow::new("g1", 100, 10, 80, 10, 10),
                PopulationFeatureRow::new("g2", 200, 20, 150, 30, 150),
            ]
        );
    }

    #[rstest]
    fn test_read_tsv_with_alias_headers() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "population.tsv",
            "ID\tmRNA_Length\tfive_utr_length\tCDS_Length\tthree_utr_Length\tstart\n\
             g1\t100\t10\t80\t10\t 55 \n",
        );

        let rows = read_population(&path).unwrap();
        assert_eq!(rows, vec![PopulationFeatureRow::new("g1", 100, 10, 80, 10, 55)]);
    }

    #[rstest]
    fn test_missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "bad.csv", "ID,mRNA_Length,start\ng1,100,5\n");
        assert!(matches!(read_population(&path), Err(TxprofIoError::Csv(_))));
    }

    #[rstest]
    fn test_header_only_is_empty() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "empty.csv",
            "ID,mRNA_Length,5UTR_length,CDS_Length,3UTR_Length,start\n",
        );
        assert!(matches!(read_population(&path), Err(TxprofIoError::EmptyInput(_))));
    }
}
