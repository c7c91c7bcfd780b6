use std::cell::Cell;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use bio::io::fasta::{self, FastaRead};
use log::{info, warn};

use txprof_core::models::SequenceRecord;
use txprof_core::utils::get_dynamic_reader;

use crate::error::{Result, TxprofIoError};

#[derive(Debug, Default)]
struct LineCounts {
    /// descriptor lines handed to the parser so far
    headers: Cell<usize>,
    /// lines dropped before the first descriptor
    preamble: Cell<usize>,
}

///
/// Hands whole lines to the FASTA parser, dropping blank or stray lines that
/// come before the first `>` and counting descriptor lines as they go by.
///
struct FastaLines<R> {
    inner: R,
    started: bool,
    line: Vec<u8>,
    pos: usize,
    counts: Rc<LineCounts>,
}

impl<R: BufRead> Read for FastaLines<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        while self.pos == self.line.len() {
            self.line.clear();
            self.pos = 0;
            if self.inner.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(0);
            }
            if self.line.first() == Some(&b'>') {
                self.started = true;
                self.counts.headers.set(self.counts.headers.get() + 1);
            } else if !self.started {
                self.counts.preamble.set(self.counts.preamble.get() + 1);
                self.line.clear();
            }
        }

        let n = (self.line.len() - self.pos).min(buf.len());
        buf[..n].copy_from_slice(&self.line[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

///
/// Streams [`SequenceRecord`]s out of a (possibly gzip'd) multi-FASTA file.
///
/// Sequence case is kept as is. Lines before the first descriptor are
/// skipped. A descriptor line with nothing after it yields a record with an
/// empty sequence. A descriptor without an identifier yields
/// [`TxprofIoError::UnparseableRecord`] and the stream goes on. An I/O or
/// decoding error ends the stream.
///
pub struct FastaSource {
    path: PathBuf,
    reader: fasta::Reader<BufReader<FastaLines<BufReader<Box<dyn Read>>>>>,
    counts: Rc<LineCounts>,
    consumed: usize,
    done: bool,
}

impl FastaSource {
    pub fn from_path(path: &Path) -> Result<Self> {
        let counts = Rc::new(LineCounts::default());
        let lines = FastaLines {
            inner: get_dynamic_reader(path)?,
            started: false,
            line: Vec::new(),
            pos: 0,
            counts: Rc::clone(&counts),
        };
        Ok(Self {
            path: path.to_path_buf(),
            reader: fasta::Reader::new(lines),
            counts,
            consumed: 0,
            done: false,
        })
    }

    /// Lines dropped before the first descriptor, as far as read.
    pub fn skipped_lines(&self) -> usize {
        self.counts.preamble.get()
    }

    fn unparseable(&self, reason: &str) -> TxprofIoError {
        TxprofIoError::UnparseableRecord {
            path: self.path.clone(),
            record: self.consumed,
            reason: reason.to_string(),
        }
    }

    fn finish(&mut self) {
        self.done = true;
        if self.skipped_lines() > 0 {
            warn!(
                "{}: skipped {} line(s) before the first record",
                self.path.display(),
                self.skipped_lines()
            );
        }
    }
}

impl Iterator for FastaSource {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut record = fasta::Record::new();
        if let Err(e) = self.reader.read(&mut record) {
            self.finish();
            return Some(Err(TxprofIoError::Fasta {
                path: self.path.clone(),
                message: e.to_string(),
            }));
        }

        // the parser reports a bare `>` the same way as the end of input
        if record.is_empty() && self.consumed >= self.counts.headers.get() {
            self.finish();
            return None;
        }
        self.consumed += 1;

        if record.id().is_empty() {
            return Some(Err(self.unparseable("descriptor line has no identifier")));
        }
        Some(Ok(SequenceRecord {
            id: record.id().to_string(),
            description: record.desc().map(str::to_string),
            seq: record.seq().to_vec(),
        }))
    }
}

///
/// Read every parseable record of a FASTA file into memory.
///
/// Unparseable records are logged and left out. An error that ends the
/// stream keeps the records read before it.
///
/// # Arguments
///
/// - path: path to a `.fa`/`.fasta` file, optionally gzip'd
///
pub fn read_fasta(path: &Path) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut unparseable = 0;
    for record in FastaSource::from_path(path)? {
        match record {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("{}, skipping", e);
                unparseable += 1;
            }
        }
    }

    if records.is_empty() {
        return Err(TxprofIoError::EmptyInput(path.to_path_buf()));
    }
    info!(
        "Read {} records from {} ({} unparseable)",
        records.len(),
        path.display(),
        unparseable
    );
    Ok(records)
}
