//! Run driver: fragments → candidate pairs → junction peptides → sinks.
//!
//! ### Design
//! - Pairs are generated in chunks on a local Rayon pool; each chunk is merged
//!   back in pair order before writing, so output is identical to a
//!   sequential run whatever the thread count.
//! - A self-pairing (identical sequences) aborts the run after the records of
//!   all earlier pairs have been written.
//!
//! ### Example
//! ```no_run
//! use cashuff::shuffle::{run_shuffle, ShuffleOpts};
//! let opts = ShuffleOpts::new("cassette.fa");
//! let summary = run_shuffle(&opts, std::io::stdout().lock()).unwrap();
//! println!("{} peptides from {} pairs", summary.peptides(), summary.pairs);
//! ```
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use polars::prelude::*;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::combinator::{candidate_pairs, CandidatePair};
use crate::error::Error;
use crate::fasta::read_fragments;
use crate::junction::{junction_peptides, JunctionParams, JunctionPeptide};
use crate::output::{PeptideSinks, SinkReport};

/// Pairs generated per parallel batch.
const CHUNK: usize = 256;

/// Options for one shuffle run.
#[derive(Clone, Debug)]
pub struct ShuffleOpts {
    /// Fragment FASTA file.
    pub input: PathBuf,
    /// Minimum flank beyond each boundary.
    pub min_flank: usize,
    /// Target peptide lengths (duplicates are ignored).
    pub lengths: Vec<usize>,
    /// Directory receiving `peptides.<len>.fa`.
    pub out_dir: PathBuf,
    /// Worker threads (`None` = all logical cores).
    pub threads: Option<usize>,
}

impl ShuffleOpts {
    /// Defaults: min flank 10, lengths 8..=11, current directory, all cores.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let defaults = JunctionParams::default();
        Self {
            input: input.into(),
            min_flank: defaults.min_flank,
            lengths: defaults.lengths,
            out_dir: PathBuf::from("."),
            threads: None,
        }
    }

    /// Generation parameters with lengths de-duplicated, first occurrence kept.
    pub fn params(&self) -> Result<JunctionParams, Error> {
        let mut lengths: Vec<usize> = Vec::with_capacity(self.lengths.len());
        for &len in &self.lengths {
            if !lengths.contains(&len) {
                lengths.push(len);
            }
        }
        if lengths.is_empty() {
            return Err(Error::Parameter("at least one peptide length is required".to_string()));
        }
        Ok(JunctionParams::new(self.min_flank, lengths))
    }
}

/// Totals for a finished run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub fragments: usize,
    pub pairs: usize,
    pub sinks: Vec<SinkReport>,
}

impl RunSummary {
    /// Total peptides written across all lengths.
    pub fn peptides(&self) -> usize {
        self.sinks.iter().map(|s| s.records).sum()
    }

    /// Per-length table: `length`, `peptides`, `path`.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        df!(
            "length"   => self.sinks.iter().map(|s| s.length as u64).collect::<Vec<_>>(),
            "peptides" => self.sinks.iter().map(|s| s.records as u64).collect::<Vec<_>>(),
            "path"     => self.sinks.iter().map(|s| s.path.display().to_string()).collect::<Vec<_>>(),
        )
    }
}

/// Generate peptides for every pair, in pair order, on the current Rayon pool.
///
/// Results are positional: entry `i` belongs to `pairs[i]`.
pub fn generate_batch(pairs: &[CandidatePair<'_>], params: &JunctionParams) -> Vec<Result<Vec<JunctionPeptide>, Error>> {
    pairs
        .par_iter()
        .map(|pair| {
            junction_peptides(
                &pair.left.sequence,
                pair.left_boundary(),
                &pair.right.sequence,
                pair.right_boundary(),
                params,
            )
        })
        .collect()
}

/// Read fragments, enumerate junctions and stream records to per-length files
/// under `opts.out_dir` and to `echo`.
pub fn run_shuffle<E: Write>(opts: &ShuffleOpts, echo: E) -> Result<RunSummary> {
    let params = opts.params()?;
    info!("input: {}", opts.input.display());
    info!("min flank: {} | lengths: {:?}", params.min_flank, params.lengths);

    let fragments = read_fragments(&opts.input)
        .with_context(|| format!("reading fragments from {}", opts.input.display()))?;
    let pairs = candidate_pairs(&fragments);
    info!("fragments: {} | candidate pairs: {}", fragments.len(), pairs.len());
    if pairs.is_empty() && !fragments.is_empty() {
        warn!("no fragment pair can form a junction; nothing will be written");
    }

    let n = opts.threads.unwrap_or_else(num_cpus::get).max(1);
    let pool = ThreadPoolBuilder::new().num_threads(n).build()?;
    debug!("threads: {n}");

    let mut sinks = PeptideSinks::create(&opts.out_dir, echo)?;
    for chunk in pairs.chunks(CHUNK) {
        let batch = pool.install(|| generate_batch(chunk, &params));
        for (pair, generated) in chunk.iter().zip(batch) {
            let peptides = generated.with_context(|| {
                format!("generating junctions for {} -> {}", pair.left.name, pair.right.name)
            })?;
            debug!("{} -> {}: {} peptides", pair.left.name, pair.right.name, peptides.len());
            for p in &peptides {
                sinks.write_peptide(&pair.left.name, &pair.right.name, p)?;
            }
        }
    }

    let reports = sinks.finish()?;
    Ok(RunSummary { fragments: fragments.len(), pairs: pairs.len(), sinks: reports })
}
