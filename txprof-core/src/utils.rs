use std::ffi::OsStr;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    pub fn delimiter(&self) -> u8 {
        match self {
            TableFormat::Csv => b',',
            TableFormat::Tsv => b'\t',
        }
    }
}

pub struct FileInfo {
    pub table_format: TableFormat,
    pub is_gzipped: bool,
}

///
/// Inspect a file name for compression and table delimiter.
///
/// `.tsv` and `.txt` (optionally followed by `.gz`) are tab-delimited,
/// everything else is treated as comma-delimited.
///
pub fn get_file_info(path: &Path) -> FileInfo {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let base = if is_gzipped {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };

    let table_format = match base.and_then(Path::extension).and_then(OsStr::to_str) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("txt") => {
            TableFormat::Tsv
        }
        _ => TableFormat::Csv,
    };

    FileInfo {
        table_format,
        is_gzipped,
    }
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = get_file_info(path).is_gzipped;
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}
