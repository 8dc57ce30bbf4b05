use crate::{
    constants::SEPARATOR,
    error::{Error, Result},
};

/// One `key|weight` line, borrowed from the line it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub key: &'a str,
    pub weight: i64,
}

impl<'a> Record<'a> {
    /// Parse a record line using the default separator.
    pub fn parse(line: &'a str, line_no: u64) -> Result<Self> {
        Self::parse_with(line, SEPARATOR, line_no)
    }

    /// Parse a record line. The terminator is stripped, the key must be a single
    /// lowercase ASCII letter and the weight is whatever `i64` parsing accepts
    /// once surrounding whitespace is trimmed.
    pub fn parse_with(line: &'a str, sep: char, line_no: u64) -> Result<Self> {
        let body = strip_terminator(line);
        let malformed = |reason: &'static str| Error::MalformedRecord {
            line_no,
            line: body.to_string(),
            reason,
        };

        let (key, weight) = body.split_once(sep).ok_or_else(|| malformed("missing separator"))?;
        if !is_key(key) {
            return Err(malformed("key is not a single lowercase letter"));
        }
        let weight = weight
            .trim()
            .parse::<i64>()
            .map_err(|source| Error::InvalidWeight {
                line_no,
                weight: weight.to_string(),
                source,
            })?;
        Ok(Self { key, weight })
    }
}

fn is_key(s: &str) -> bool {
    matches!(s.as_bytes(), [b'a'..=b'z'])
}

/// The key of a line: the text before the first `sep`.
pub fn key_of(line: &str, sep: char) -> Option<&str> {
    line.split_once(sep).map(|(key, _)| key)
}

/// Drop a trailing `\n` or `\r\n`.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
