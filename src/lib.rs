#![forbid(unsafe_code)]
//! # cashuff
//!
//! Exhaustive enumeration of **junction peptides**: short windows that straddle
//! the boundary between two protein fragments when the fragments are shuffled
//! and spliced together.
//!
//! ## Pipeline
//! 1. [`fasta`] reads fragments annotated as `>name (begin..end)` and tags each
//!    as chain start (single residue), chain stop (ends in `*`) or internal.
//! 2. [`combinator`] lists every ordered `(left, right)` pair that may form a
//!    junction.
//! 3. [`junction`] enumerates, for one pair, every peptide of the requested
//!    lengths that spans the junction with at least `min_flank` residues of
//!    flank beyond each boundary.
//! 4. [`output`] writes each peptide to `peptides.<len>.fa` and echoes it.
//!
//! [`shuffle::run_shuffle`] drives all four steps.
//!
//! ## Examples
//! ```rust
//! use cashuff::{candidate_pairs, junction_peptides, Fragment, JunctionParams};
//! let frags = vec![
//!     Fragment::new("L", 1, 34, "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ"),
//!     Fragment::new("R", 35, 45, "KMPHEPRLAPA*"),
//! ];
//! let pairs = candidate_pairs(&frags);
//! assert_eq!(pairs.len(), 1);
//! let p = &pairs[0];
//! let peps = junction_peptides(&p.left.sequence, p.left_boundary(), &p.right.sequence, p.right_boundary(),
//!                              &JunctionParams::new(3, vec![4])).unwrap();
//! assert_eq!(peps[0].sequence, "QKMP");
//! ```

pub mod error;
pub mod fragment;
pub mod fasta;
pub mod combinator;
pub mod junction;
pub mod output;
pub mod shuffle;

pub use combinator::{candidate_pairs, CandidatePair};
pub use error::Error;
pub use fragment::{Fragment, FragmentRole};
pub use junction::{junction_peptides, JunctionParams, JunctionPeptide};
pub use shuffle::{run_shuffle, RunSummary, ShuffleOpts};

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
