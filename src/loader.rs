// src/loader.rs
use crate::error::{LoadError, ParseError, ParseErrorKind};
use crate::grape::{Color, Grape, UnknownColorLabel};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of colon-separated fields on every data line.
pub const NUM_FIELDS: usize = 6;

/// Reads and parses the grape file at `path`.
///
/// The whole file is parsed before anything is returned; the first bad line
/// fails the load and no records are handed back.
pub fn load_grapes<P: AsRef<Path>>(path: P) -> Result<Vec<Grape>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grapes = parse_grapes(BufReader::new(file), path)?;
    info!("Loaded {} grapes from {}", grapes.len(), path.display());
    Ok(grapes)
}

/// Parses grape lines from `reader`. `path` is only used in diagnostics.
///
/// Blank lines and lines starting with `#` are skipped but still count
/// towards the line numbers reported in errors.
pub fn parse_grapes<R: BufRead>(mut reader: R, path: &Path) -> Result<Vec<Grape>, LoadError> {
    let mut grapes = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let text = decode_line(&buf);
        let line = text.trim_matches(|c: char| matches!(c, '\r' | '\n' | ' ' | '\t'));
        if line.is_empty() || line.starts_with('#') {
            debug!("Line {}: skipped", line_no);
            continue;
        }

        let grape = parse_line(line).map_err(|kind| ParseError {
            path: path.to_path_buf(),
            line: line_no,
            kind,
        })?;
        debug!("Line {}: {:?}", line_no, grape);
        grapes.push(grape);
    }

    Ok(grapes)
}

/// Parses one trimmed, non-comment line.
pub fn parse_line(line: &str) -> Result<Grape, ParseErrorKind> {
    let pieces: Vec<&str> = line.split(':').collect();
    if pieces.len() != NUM_FIELDS {
        return Err(ParseErrorKind::FieldCountMismatch {
            got: pieces.len(),
            want: NUM_FIELDS,
        });
    }

    let color = pieces[1]
        .parse::<Color>()
        .map_err(|UnknownColorLabel(value)| ParseErrorKind::UnknownColor { value })?;

    Ok(Grape {
        name: pieces[0].to_string(),
        color,
        parent1: pieces[2].to_string(),
        parent2: pieces[3].to_string(),
        regions: split_list(pieces[4]),
        alt_names: split_list(pieces[5]),
    })
}

// Every byte of an invalid sequence becomes its own U+FFFD.
fn decode_line(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        for _ in chunk.invalid() {
            text.push(char::REPLACEMENT_CHARACTER);
        }
    }
    text
}

// An empty field yields [""], not [].
fn split_list(field: &str) -> Vec<String> {
    field.split(',').map(str::to_string).collect()
}
