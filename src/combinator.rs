//! Adjacency combinator: which ordered fragment pairs may form a junction.
//!
//! Every ordered pair `(i, j)` with `i != j` is considered, outer index first.
//! A pair is kept when the left fragment is not a chain stop and the right
//! fragment is not a chain start. Once more than two pairs have been kept,
//! further start→stop pairs are dropped; that counter lives in
//! [`PairAccumulator`] so the rule can be exercised on its own.
//!
//! # Examples
//! ```
//! use cashuff::combinator::candidate_pairs;
//! use cashuff::fragment::Fragment;
//! let frags = vec![
//!     Fragment::new("S", 1, 1, "M"),
//!     Fragment::new("N", 5, 8, "AAAAAAAAAAAA"),
//!     Fragment::new("T", 3, 6, "CCCCCCC*"),
//! ];
//! let names: Vec<_> = candidate_pairs(&frags).iter().map(|p| (p.left.name.as_str(), p.right.name.as_str())).collect();
//! assert_eq!(names, vec![("S", "N"), ("S", "T"), ("N", "T")]);
//! ```
use crate::fragment::Fragment;

/// A directed `(left, right)` junction candidate borrowing both fragments.
#[derive(Clone, Copy, Debug)]
pub struct CandidatePair<'a> {
    pub left: &'a Fragment,
    pub right: &'a Fragment,
}

impl CandidatePair<'_> {
    /// Left boundary offset handed to the generator.
    pub fn left_boundary(&self) -> usize { self.left.left_boundary() }

    /// Right boundary offset handed to the generator.
    pub fn right_boundary(&self) -> usize { self.right.right_boundary() }
}

/// Number of kept pairs after which start→stop pairs are suppressed.
pub const START_STOP_SUPPRESS_AFTER: usize = 2;

/// Ordered accumulator applying the adjacency filter.
#[derive(Debug, Default)]
pub struct PairAccumulator<'a> {
    pairs: Vec<CandidatePair<'a>>,
}

impl<'a> PairAccumulator<'a> {
    pub fn new() -> Self { Self { pairs: Vec::new() } }

    /// Whether `(left, right)` would be kept given the pairs accepted so far.
    pub fn admits(&self, left: &Fragment, right: &Fragment) -> bool {
        if left.is_stop() || right.is_start() {
            return false;
        }
        !(self.pairs.len() > START_STOP_SUPPRESS_AFTER && left.is_start() && right.is_stop())
    }

    /// Offer a pair; returns `true` when it was kept.
    pub fn offer(&mut self, left: &'a Fragment, right: &'a Fragment) -> bool {
        if self.admits(left, right) {
            self.pairs.push(CandidatePair { left, right });
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize { self.pairs.len() }

    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

    pub fn into_pairs(self) -> Vec<CandidatePair<'a>> { self.pairs }
}

/// Enumerate legal junction candidates over the ordered product of `fragments`.
pub fn candidate_pairs(fragments: &[Fragment]) -> Vec<CandidatePair<'_>> {
    let mut acc = PairAccumulator::new();
    for (i, left) in fragments.iter().enumerate() {
        for (j, right) in fragments.iter().enumerate() {
            if i != j {
                acc.offer(left, right);
            }
        }
    }
    acc.into_pairs()
}
