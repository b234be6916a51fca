//! Parser for the railway track layout file.
//!
//! The file is UTF-8 and line oriented. Section boundaries are literal
//! marker lines; the lines buffered since the previous marker are handed to
//! the decoder of the section being left, then the buffer resets:
//!
//! * metadata (initial section, no marker)
//! * a line containing `**Active elements**`
//! * a line containing `**Inactive elements**`
//! * any line containing `***` (free text; terminal, markers inside it are
//!   ordinary content)
//!
//! Within a buffered segment, fields occupy fixed consecutive lines. The
//! only escape in the format is the integer sentinel `-1`, which decodes an
//! optional attribute to absent.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;
use smallvec::SmallVec;

use crate::railway::{ActiveElement, Element, Location, Railway};

/// Section of the railway file the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Metadata,
    ActiveElements,
    InactiveElements,
    Text,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Section::Metadata => "metadata",
            Section::ActiveElements => "active elements",
            Section::InactiveElements => "inactive elements",
            Section::Text => "text",
        };
        write!(f, "{}", name)
    }
}

/// What to do with lines buffered after the last marker when the file ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingLines {
    /// Dispatch the final buffer as if a marker had followed it. This is
    /// the default: most files do not carry a closing marker.
    Flush,
    /// Discard the final buffer.
    Drop,
}

impl Default for TrailingLines {
    fn default() -> TrailingLines {
        TrailingLines::Flush
    }
}

#[derive(Debug, Fail)]
pub enum ParseError {
    #[fail(display = "railway file not found: {}", _0)]
    NotFound(String),
    #[fail(display = "could not read railway file: {}", _0)]
    Io(String),
    #[fail(display = "{} section: missing line at offset {}", section, offset)]
    MissingLine { section: Section, offset: usize },
    #[fail(
        display = "{} section: expected integer, got \"{}\"",
        section, line
    )]
    ExpectedInteger { section: Section, line: String },
}

/// Parse the railway file at `path` with the default trailing-line policy.
///
/// Fails with `ParseError::NotFound` if the path does not exist. Any
/// undecodable field aborts the whole parse; a partial `Railway` is never
/// returned.
pub fn parse(path: &Path) -> Result<Railway, ParseError> {
    parse_with(path, TrailingLines::default())
}

pub fn parse_with(path: &Path, trailing: TrailingLines) -> Result<Railway, ParseError> {
    if !path.exists() {
        return Err(ParseError::NotFound(path.display().to_string()));
    }
    debug!("parsing railway file {}", path.display());
    let contents = fs::read_to_string(path)
        .map_err(|e| ParseError::Io(format!("{}: {}", path.display(), e)))?;
    parse_str(&contents, trailing)
}

/// Parse railway file contents already held in memory.
pub fn parse_str(input: &str, trailing: TrailingLines) -> Result<Railway, ParseError> {
    let mut railway = Railway::new();
    let mut section = Section::Metadata;
    let mut buffer: SmallVec<[&str; 16]> = SmallVec::new();

    for line in input.lines() {
        if section != Section::Text {
            if let Some(next) = marker(line) {
                flush(&mut railway, section, &buffer)?;
                buffer.clear();
                section = next;
                continue;
            }
        }
        buffer.push(line);
    }

    match trailing {
        TrailingLines::Flush => flush(&mut railway, section, &buffer)?,
        TrailingLines::Drop => {
            if !buffer.is_empty() {
                debug!("dropping {} trailing lines", buffer.len());
            }
        }
    }

    Ok(railway)
}

/// Section transition triggered by `line`, if any. The two element markers
/// are checked before the bare `***` text marker.
fn marker(line: &str) -> Option<Section> {
    if line.contains("**Active elements**") {
        Some(Section::ActiveElements)
    } else if line.contains("**Inactive elements**") {
        Some(Section::InactiveElements)
    } else if line.contains("***") {
        Some(Section::Text)
    } else {
        None
    }
}

/// Dispatch a buffered segment to the decoder of the section being left.
///
/// An empty buffer never reaches a decoder, so back-to-back markers and a
/// file ending exactly at a marker are fine.
fn flush(railway: &mut Railway, section: Section, lines: &[&str]) -> Result<(), ParseError> {
    if lines.is_empty() {
        return Ok(());
    }
    match section {
        Section::Metadata => decode_metadata(railway, lines),
        Section::ActiveElements => decode_active_element(railway, lines),
        // reserved extension points: accept anything
        Section::InactiveElements | Section::Text => Ok(()),
    }
}

fn decode_metadata(railway: &mut Railway, lines: &[&str]) -> Result<(), ParseError> {
    const S: Section = Section::Metadata;
    railway.program_version = field(S, lines, 0)?.to_string();
    let x = int_field(S, lines, 1)?;
    let y = int_field(S, lines, 2)?;
    railway.home_location = Location::new(x, y);
    railway.active_element_count = int_field(S, lines, 3)?;
    Ok(())
}

/// One active-element record: nine consecutive lines. Lines past the record
/// are tolerated and skipped, like the informational element count.
fn decode_active_element(railway: &mut Railway, lines: &[&str]) -> Result<(), ParseError> {
    const S: Section = Section::ActiveElements;
    const RECORD_LINES: usize = 9;

    let speed_tag = int_field(S, lines, 0)?;
    let x = int_field(S, lines, 1)?;
    let y = int_field(S, lines, 2)?;
    let length_main = int_field(S, lines, 3)?;
    let length_side = opt_int_field(S, lines, 4)?;
    let speed_main = int_field(S, lines, 5)?;
    let speed_side = opt_int_field(S, lines, 6)?;
    let name = field(S, lines, 7)?;
    let active_name = field(S, lines, 8)?;

    if lines.len() > RECORD_LINES {
        debug!(
            "skipping {} lines after active element record",
            lines.len() - RECORD_LINES
        );
    }

    railway.add_element(Element::active(
        speed_tag,
        Location::new(x, y),
        name,
        ActiveElement {
            length_main,
            length_side,
            speed_main,
            speed_side,
            active_name: active_name.to_string(),
        },
    ));
    Ok(())
}

fn field<'a>(section: Section, lines: &[&'a str], offset: usize) -> Result<&'a str, ParseError> {
    lines
        .get(offset)
        .copied()
        .ok_or(ParseError::MissingLine { section, offset })
}

fn int_field(section: Section, lines: &[&str], offset: usize) -> Result<i32, ParseError> {
    let line = field(section, lines, offset)?;
    line.trim().parse::<i32>().map_err(|_| ParseError::ExpectedInteger {
        section,
        line: line.to_string(),
    })
}

/// `-1` is the sentinel for an absent optional attribute; any other integer
/// is the attribute's value.
fn opt_int_field(
    section: Section,
    lines: &[&str],
    offset: usize,
) -> Result<Option<i32>, ParseError> {
    match int_field(section, lines, offset)? {
        -1 => Ok(None),
        value => Ok(Some(value)),
    }
}
