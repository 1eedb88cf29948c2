//! Core types for **fragments**: named, positioned sequence units read from the
//! input file, plus the start/stop role that decides which side of a junction a
//! fragment may occupy.
//!
//! Fragments are created once by the reader ([`crate::fasta`]) and are read-only
//! afterwards; the combinator and the generator only ever borrow them.
use core::fmt;

/// Residue that terminates a protein chain.
pub const STOP_MARKER: char = '*';

/// Position of a fragment within its protein chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FragmentRole {
    /// Chain start: a single-residue fragment. Never the right member of a junction.
    Start,
    /// Chain stop: the sequence ends with [`STOP_MARKER`]. Never the left member.
    Stop,
    /// Any other fragment.
    Internal,
}

impl FragmentRole {
    /// Derive the role from a concatenated sequence.
    ///
    /// Length 1 wins over the stop marker, so a lone `*` is a start.
    ///
    /// # Examples
    /// ```
    /// use cashuff::fragment::FragmentRole;
    /// assert_eq!(FragmentRole::of_sequence("M"), FragmentRole::Start);
    /// assert_eq!(FragmentRole::of_sequence("KMPHEPRLAPA*"), FragmentRole::Stop);
    /// assert_eq!(FragmentRole::of_sequence("MKTAYIAK"), FragmentRole::Internal);
    /// ```
    pub fn of_sequence(seq: &str) -> Self {
        if seq.len() == 1 {
            Self::Start
        } else if seq.ends_with(STOP_MARKER) {
            Self::Stop
        } else {
            Self::Internal
        }
    }
}

impl fmt::Display for FragmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Stop => write!(f, "stop"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// A named sequence fragment annotated with its declared position range.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fragment {
    /// Unique identifier taken from the header (first whitespace-free token).
    pub name: String,
    /// Declared 1-based begin position.
    pub begin: usize,
    /// Declared 1-based end position.
    pub end: usize,
    /// Residues (ASCII letters, possibly terminated by `*`).
    pub sequence: String,
    /// Start/stop flag derived from `sequence`.
    pub role: FragmentRole,
}

impl Fragment {
    /// Build a fragment, deriving its role from the sequence.
    pub fn new(name: impl Into<String>, begin: usize, end: usize, sequence: impl Into<String>) -> Self {
        let sequence = sequence.into();
        let role = FragmentRole::of_sequence(&sequence);
        Self { name: name.into(), begin, end, sequence, role }
    }

    pub fn is_start(&self) -> bool { self.role == FragmentRole::Start }

    pub fn is_stop(&self) -> bool { self.role == FragmentRole::Stop }

    /// Offset into `sequence` after which the left flank must extend.
    ///
    /// A chain start contributes its single residue only, so its boundary is 0
    /// whatever `end` was declared.
    pub fn left_boundary(&self) -> usize {
        if self.is_start() { 0 } else { self.end }
    }

    /// Offset into `sequence` before which the right flank must begin.
    pub fn right_boundary(&self) -> usize { self.begin }
}
