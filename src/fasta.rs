//! Reader for **fragment FASTA** files.
//!
//! ### Layout
//! Every record starts with a header `>name <separator> begin..end`, e.g.
//! `>pep7 (11..19)`, followed by one or more residue lines:
//!
//! ```text
//! >L (1..34)
//! MKTAYIAKQRQISFVKSHFS
//! RQLEERLGLIEVQ
//! >R (35..45)
//! KMPHEPRLAPA*
//! ```
//!
//! ### Design
//! - Record framing (multi-line bodies, CRLF, gzip) is delegated to `needletail`.
//! - Headers are parsed with a `regex`; residues outside `[A-Za-z*]` are dropped.
//! - Residues before the first header and headers without a `begin..end` range
//!   are rejected as [`Error::MalformedInput`].
//! - A repeated name replaces the earlier record in place.
//!
//! ### Example
//! ```no_run
//! let fragments = cashuff::fasta::read_fragments("cassette.fa").unwrap();
//! for f in &fragments { println!("{} {}..{} {}", f.name, f.begin, f.end, f.role); }
//! ```
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use needletail::errors::{ParseError, ParseErrorKind};
use needletail::{parse_fastx_reader, FastxReader};
use regex::Regex;

use crate::error::Error;
use crate::fragment::{Fragment, STOP_MARKER};

fn header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\S+)\D+(\d+)\.\.(\d+)").expect("static header pattern"))
}

/// Parse a header (text after `>`) into `(name, begin, end)`.
///
/// # Examples
/// ```
/// use cashuff::fasta::parse_header;
/// assert_eq!(parse_header("pep7 (11..19)"), Some(("pep7".to_string(), 11, 19)));
/// assert_eq!(parse_header("pep7"), None);
/// ```
pub fn parse_header(header: &str) -> Option<(String, usize, usize)> {
    let caps = header_pattern().captures(header.trim())?;
    let begin = caps[2].parse().ok()?;
    let end = caps[3].parse().ok()?;
    Some((caps[1].to_string(), begin, end))
}

/// Keep residue letters and the stop marker, drop everything else.
pub fn clean_residues(raw: &[u8]) -> String {
    raw.iter()
        .filter(|&&b| b.is_ascii_alphabetic() || b == STOP_MARKER as u8)
        .map(|&b| b as char)
        .collect()
}

/// Read all fragments from a (optionally gzipped) FASTA file.
pub fn read_fragments<P: AsRef<Path>>(path: P) -> Result<Vec<Fragment>, Error> {
    let p = path.as_ref();
    let file = File::open(p).map_err(|e| Error::io(e, p))?;
    parse_fragments(file)
}

/// Read all fragments from any byte stream.
pub fn parse_fragments<R: Read + Send + 'static>(reader: R) -> Result<Vec<Fragment>, Error> {
    match parse_fastx_reader(reader) {
        Ok(reader) => collect_fragments(reader),
        Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => Ok(Vec::new()),
        Err(e) => Err(convert_parse_error(e)),
    }
}

fn collect_fragments(mut reader: Box<dyn FastxReader>) -> Result<Vec<Fragment>, Error> {
    let mut fragments: Vec<Fragment> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    while let Some(record) = reader.next() {
        let rec = record.map_err(convert_parse_error)?;
        let header = String::from_utf8_lossy(rec.id()).to_string();
        let (name, begin, end) = parse_header(&header).ok_or_else(|| {
            Error::MalformedInput(format!("header '>{header}' does not match '>name (begin..end)'"))
        })?;
        let fragment = Fragment::new(name, begin, end, clean_residues(&rec.seq()));
        log::debug!("fragment {} {}..{} len={} role={}", fragment.name, begin, end, fragment.sequence.len(), fragment.role);

        match index.get(&fragment.name) {
            Some(&slot) => {
                log::warn!("duplicate fragment name '{}': later record replaces earlier one", fragment.name);
                fragments[slot] = fragment;
            }
            None => {
                index.insert(fragment.name.clone(), fragments.len());
                fragments.push(fragment);
            }
        }
    }
    Ok(fragments)
}

fn convert_parse_error(e: ParseError) -> Error {
    match e.kind {
        ParseErrorKind::UnknownFormat | ParseErrorKind::InvalidStart => {
            Error::MalformedInput(format!("sequence data before first header ({e})"))
        }
        _ => Error::MalformedInput(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn parse(text: &str) -> Result<Vec<Fragment>, Error> {
        parse_fragments(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn header_with_parenthesised_range() {
        assert_eq!(parse_header("L (1..34)"), Some(("L".to_string(), 1, 34)));
        assert_eq!(parse_header("frag_2 pos=5..12 extra"), Some(("frag_2".to_string(), 5, 12)));
    }

    #[test]
    fn header_needs_separator_and_range() {
        assert_eq!(parse_header("L1..34"), None);
        assert_eq!(parse_header("L (1-34)"), None);
    }

    #[test]
    fn multi_line_bodies_are_concatenated() {
        let frags = parse(">L (1..34)\nMKTAYIAKQRQISFVKSHFS\nRQLEERLGLIEVQ\n>R (35..45)\nKMPHEPRLAPA*\n").unwrap();
        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].name, "L");
        assert_eq!(frags[0].sequence, "MKTAYIAKQRQISFVKSHFSRQLEERLGLIEVQ");
        assert_eq!((frags[1].begin, frags[1].end), (35, 45));
        assert!(frags[1].is_stop());
    }

    #[test]
    fn non_residue_characters_are_stripped() {
        let frags = parse(">A (2..3)\nMK 1T-a.y*\n").unwrap();
        assert_eq!(frags[0].sequence, "MKTay*");
    }

    #[test]
    fn single_residue_becomes_start() {
        let frags = parse(">S (1..1)\nM\n>N (4..9)\nAAAAAAAAAA\n").unwrap();
        assert!(frags[0].is_start());
        assert!(!frags[1].is_start() && !frags[1].is_stop());
    }

    #[test]
    fn body_before_header_is_malformed() {
        let err = parse("MKTAYIAK\n>L (1..3)\nMKT\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert!(err.to_string().contains("before first header"));
    }

    #[test]
    fn header_without_range_is_malformed() {
        let err = parse(">L\nMKT\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
    }

    #[test]
    fn empty_input_yields_no_fragments() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn duplicate_name_replaces_in_place() {
        let frags = parse(">A (1..2)\nAAAA\n>B (1..2)\nCCCC\n>A (3..4)\nGGGG\n").unwrap();
        assert_eq!(frags.len(), 2);
        assert_eq!(frags[0].name, "A");
        assert_eq!(frags[0].sequence, "GGGG");
        assert_eq!(frags[0].begin, 3);
        assert_eq!(frags[1].name, "B");
    }

    #[test]
    fn reads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">L (1..4)").unwrap();
        writeln!(file, "MKTAYIAK").unwrap();
        let frags = read_fragments(file.path()).unwrap();
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].sequence, "MKTAYIAK");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_fragments("/definitely/not/here.fa").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
