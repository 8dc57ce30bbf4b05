//! Line-oriented input sources the cursors read from.
//!
//! A [`LineSource`] hands out one line per call, terminator included, and
//! `None` once the stream is exhausted. Adapters cover buffered readers (files,
//! stdin, in-memory text) and pre-split fixtures.

use std::{
    collections::VecDeque,
    fs::File,
    io::{self, BufRead, BufReader, Cursor, StdinLock},
    path::Path,
};

use crate::error::{Error, Result};

/// Low-level source of lines.
pub trait LineSource {
    /// Read the next line, keeping its terminator. `None` marks end of stream.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Path or source identifier (for logging).
    fn source_id(&self) -> String;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }

    fn source_id(&self) -> String {
        (**self).source_id()
    }
}

/// Adapter over any [`BufRead`].
///
/// Lines are split on `\n` and decoded as UTF-8; bytes that do not decode are
/// reported hex-encoded together with their 1-based line number.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    source_id: String,
    line_no: u64,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, source_id: impl Into<String>) -> Self {
        Self {
            reader,
            source_id: source_id.into(),
            line_no: 0,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl ReaderSource<BufReader<File>> {
    /// Open a file for line reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

impl ReaderSource<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), "<stdin>")
    }
}

impl<'a> ReaderSource<Cursor<&'a [u8]>> {
    /// In-memory text, e.g. sample data embedded in a test.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(Cursor::new(text.as_bytes()), "<memory>")
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        String::from_utf8(raw).map(Some).map_err(|e| Error::InvalidUtf8 {
            line_no: self.line_no,
            bytes: hex::encode(e.as_bytes()),
        })
    }

    fn source_id(&self) -> String {
        self.source_id.clone()
    }
}

/// Pre-split lines served in order. Lines are returned exactly as given.
#[derive(Debug, Default, Clone)]
pub struct FixtureSource {
    lines: VecDeque<String>,
}

impl FixtureSource {
    pub fn new<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Like [`FixtureSource::new`], appending `\n` to every line.
    pub fn terminated<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        Self::new(lines.into_iter().map(|l| format!("{}\n", l.as_ref())))
    }

    /// Lines not yet handed out.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for FixtureSource {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn source_id(&self) -> String {
        "<fixture>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn drain(src: &mut impl LineSource) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(line) = src.read_line().unwrap() {
            out.push(line);
        }
        out
    }

    #[test]
    fn reader_source_keeps_terminators() {
        let mut src = ReaderSource::from_text("a|1\nb|2\r\nc|3");
        assert_eq!(drain(&mut src), vec!["a|1\n", "b|2\r\n", "c|3"]);
        assert!(src.read_line().unwrap().is_none());
    }

    #[test]
    fn reader_source_reports_invalid_utf8_as_hex() {
        let bytes: &[u8] = b"a|1\n\xff\xfe|2\n";
        let mut src = ReaderSource::new(Cursor::new(bytes), "bad");
        assert_eq!(src.read_line().unwrap().as_deref(), Some("a|1\n"));
        match src.read_line() {
            Err(Error::InvalidUtf8 { line_no, bytes }) => {
                assert_eq!(line_no, 2);
                assert_eq!(bytes, "fffe7c320a");
            }
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn fixture_source_serves_lines_in_order() {
        let mut src = FixtureSource::terminated(["a|1", "a|2"]);
        assert_eq!(src.remaining(), 2);
        assert_eq!(drain(&mut src), vec!["a|1\n", "a|2\n"]);
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn boxed_source_delegates() {
        let mut src: Box<dyn LineSource> = Box::new(FixtureSource::new(["x|9"]));
        assert_eq!(src.source_id(), "<fixture>");
        assert_eq!(drain(&mut src), vec!["x|9"]);
    }
}
