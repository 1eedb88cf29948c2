//! Junction peptide generator.
//!
//! For one `(left, right)` pair the generator walks three nested choices:
//!
//! 1. **left flank length** `l` over `[left_boundary + min_flank, len(left) + 1)`,
//!    clamped to the single value `len(left)` when the left sequence is too short;
//! 2. **right flank start** `r` over `[shift, right_boundary - min_flank)`, where
//!    `shift = max(0, l - (left_boundary + min_flank))` keeps the consumed region
//!    bounded as the left flank grows;
//! 3. **composition**: for each target length `plen` and split `p` in `[1, plen)`,
//!    the last `p` residues of `left[..l]` followed by the first `plen - p`
//!    residues of `right[r..]`.
//!
//! A split that cannot fill `plen` residues ends the `p` loop for that
//! `(l, r, plen)`: larger `p` only shortens the right contribution further.
//!
//! Output order is lexicographic in `(l, r, plen, p)` and nothing is
//! de-duplicated.
//!
//! # Examples
//! ```
//! use cashuff::junction::{junction_peptides, JunctionParams};
//! let params = JunctionParams::new(1, vec![3]);
//! let peps = junction_peptides("ABCDEFG", 3, "uvwxyz", 4, &params).unwrap();
//! assert_eq!(peps[0].sequence, "Duv");
//! assert_eq!(peps.len(), 12);
//! ```
use crate::error::Error;

/// Generation knobs shared by every pair of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JunctionParams {
    /// Residues each flank must extend past its boundary.
    pub min_flank: usize,
    /// Peptide lengths to emit, iterated in this order.
    pub lengths: Vec<usize>,
}

impl JunctionParams {
    pub fn new(min_flank: usize, lengths: Vec<usize>) -> Self { Self { min_flank, lengths } }
}

impl Default for JunctionParams {
    fn default() -> Self { Self { min_flank: 10, lengths: vec![8, 9, 10, 11] } }
}

/// One peptide spanning a junction, with its positional metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JunctionPeptide {
    /// Residues, always one of the requested lengths.
    pub sequence: String,
    /// Length of the left flank window (`l`).
    pub left_flank_pos: usize,
    /// 1-based start of the right flank window (`r + 1`).
    pub right_flank_pos: usize,
    /// Residues taken from the left flank.
    pub left_insert_pos: usize,
    /// 1-based position in the peptide where right-flank residues begin.
    pub right_insert_pos: usize,
}

impl JunctionPeptide {
    pub fn len(&self) -> usize { self.sequence.len() }

    pub fn is_empty(&self) -> bool { self.sequence.is_empty() }
}

/// Enumerate every junction peptide for one pair, invoking `emit` in order.
///
/// Fails with [`Error::InvalidCombination`] when both sequences are identical,
/// and with [`Error::Parameter`] when a sequence is not ASCII.
pub fn for_each_junction_peptide<F>(
    left_seq: &str,
    left_boundary: usize,
    right_seq: &str,
    right_boundary: usize,
    params: &JunctionParams,
    mut emit: F,
) -> Result<(), Error>
where
    F: FnMut(JunctionPeptide),
{
    if left_seq == right_seq {
        return Err(Error::InvalidCombination { sequence: left_seq.to_string() });
    }
    if !left_seq.is_ascii() || !right_seq.is_ascii() {
        return Err(Error::Parameter("junction sequences must be ASCII residues".to_string()));
    }
    let (left, right) = (left_seq.as_bytes(), right_seq.as_bytes());

    let floor = left_boundary + params.min_flank;
    let range_end = left.len() + 1;
    let range_start = if floor >= range_end { range_end - 1 } else { floor };
    let right_end = right_boundary.saturating_sub(params.min_flank);

    for l in range_start..range_end {
        let left_flank = &left[..l];
        let shift = l.saturating_sub(floor);

        for r in shift..right_end {
            let right_flank = &right[r.min(right.len())..];

            for &plen in &params.lengths {
                for p in 1..plen {
                    let head = &left_flank[left_flank.len().saturating_sub(p)..];
                    let tail = &right_flank[..(plen - p).min(right_flank.len())];
                    if head.len() + tail.len() < plen {
                        break;
                    }
                    let mut residues = Vec::with_capacity(plen);
                    residues.extend_from_slice(head);
                    residues.extend_from_slice(tail);
                    emit(JunctionPeptide {
                        sequence: String::from_utf8_lossy(&residues).into_owned(),
                        left_flank_pos: l,
                        right_flank_pos: r + 1,
                        left_insert_pos: head.len(),
                        right_insert_pos: residues.len() - tail.len() + 1,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Collect every junction peptide for one pair.
pub fn junction_peptides(
    left_seq: &str,
    left_boundary: usize,
    right_seq: &str,
    right_boundary: usize,
    params: &JunctionParams,
) -> Result<Vec<JunctionPeptide>, Error> {
    let mut out = Vec::new();
    for_each_junction_peptide(left_seq, left_boundary, right_seq, right_boundary, params, |p| out.push(p))?;
    Ok(out)
}
