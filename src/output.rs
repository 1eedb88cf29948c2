//! Per-length FASTA output.
//!
//! [`PeptideSinks`] owns one `peptides.<len>.fa` writer per peptide length,
//! opened lazily on the first record of that length and kept open until
//! [`PeptideSinks::finish`]. Every record is echoed to a second writer (stdout
//! in the binary).
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::junction::JunctionPeptide;

/// `><left>_<right>_<leftFlankPos>_<leftInsertPos>_<rightInsertPos>_<rightFlankPos>`
pub fn fasta_header(left: &str, right: &str, p: &JunctionPeptide) -> String {
    format!(
        ">{}_{}_{}_{}_{}_{}",
        left, right, p.left_flank_pos, p.left_insert_pos, p.right_insert_pos, p.right_flank_pos
    )
}

/// Output path for peptides of length `len` under `dir`.
pub fn sink_path(dir: &Path, len: usize) -> PathBuf {
    dir.join(format!("peptides.{len}.fa"))
}

fn write_fasta_record<W: Write>(w: &mut W, header: &str, peptide: &str) -> std::io::Result<()> {
    w.write_all(header.as_bytes())?;
    w.write_all(b"\n")?;
    w.write_all(peptide.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

/// What one sink wrote during a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkReport {
    pub length: usize,
    pub path: PathBuf,
    pub records: usize,
}

struct Sink {
    path: PathBuf,
    writer: BufWriter<File>,
    records: usize,
}

/// Lazily opened per-length writers plus an echo stream.
pub struct PeptideSinks<E: Write> {
    dir: PathBuf,
    sinks: BTreeMap<usize, Sink>,
    echo: E,
}

impl<E: Write> PeptideSinks<E> {
    /// Prepare sinks under `dir`, creating the directory if needed.
    pub fn create(dir: impl Into<PathBuf>, echo: E) -> Result<Self, Error> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| Error::io(e, &dir))?;
        Ok(Self { dir, sinks: BTreeMap::new(), echo })
    }

    pub fn dir(&self) -> &Path { &self.dir }

    /// Write one record to its length's file and echo it.
    pub fn write_record(&mut self, header: &str, peptide: &str) -> Result<(), Error> {
        let len = peptide.len();
        if !self.sinks.contains_key(&len) {
            let path = sink_path(&self.dir, len);
            let file = File::create(&path).map_err(|e| Error::io(e, &path))?;
            log::debug!("opened {}", path.display());
            self.sinks.insert(len, Sink { path, writer: BufWriter::new(file), records: 0 });
        }
        if let Some(sink) = self.sinks.get_mut(&len) {
            write_fasta_record(&mut sink.writer, header, peptide).map_err(|e| Error::io(e, &sink.path))?;
            sink.records += 1;
        }
        write_fasta_record(&mut self.echo, header, peptide)?;
        Ok(())
    }

    /// Write a generated peptide for the `(left, right)` pair.
    pub fn write_peptide(&mut self, left: &str, right: &str, p: &JunctionPeptide) -> Result<(), Error> {
        self.write_record(&fasta_header(left, right, p), &p.sequence)
    }

    /// Flush and close every sink, returning per-length reports in length order.
    pub fn finish(mut self) -> Result<Vec<SinkReport>, Error> {
        self.echo.flush()?;
        let mut reports = Vec::with_capacity(self.sinks.len());
        for (length, mut sink) in std::mem::take(&mut self.sinks) {
            sink.writer.flush().map_err(|e| Error::io(e, &sink.path))?;
            reports.push(SinkReport { length, path: sink.path, records: sink.records });
        }
        Ok(reports)
    }
}
