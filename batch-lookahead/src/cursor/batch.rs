use tracing::warn;

use crate::{
    constants::SEPARATOR,
    cursor::LineCursor,
    error::{Error, Result},
    record::{key_of, strip_terminator},
    source::LineSource,
};

/// A [`LineCursor`] that can tell whether the buffered line still belongs to
/// the current batch.
///
/// A file is a sequence of batches, and a batch is a head record followed by
/// more records with the same key:
///
/// ```text
/// while cursor.has_more_batches() {
///     head := cursor.read_line()          // first record of the batch
///     key  := key of head
///     while cursor.has_more_in_batch(key) {
///         cursor.read_line()              // further member of the batch
///     }
/// }
/// ```
///
/// `has_more_in_batch` is only meaningful after a head record was consumed.
#[derive(Debug)]
pub struct BatchCursor<S> {
    lines: LineCursor<S>,
    sep: char,
}

impl<S: LineSource> BatchCursor<S> {
    pub fn open(source: S) -> Result<Self> {
        Self::open_with_separator(source, SEPARATOR)
    }

    /// Open with a key separator other than `|`.
    pub fn open_with_separator(source: S, sep: char) -> Result<Self> {
        Ok(Self {
            lines: LineCursor::open(source)?,
            sep,
        })
    }

    pub fn separator(&self) -> char {
        self.sep
    }

    /// Whether any record remains, which after a full batch means another batch
    /// starts here.
    pub fn has_more_batches(&self) -> bool {
        self.lines.has_more()
    }

    /// Whether the buffered record has key `key`. Does not consume it.
    ///
    /// False at end of input. A buffered line without a separator (a blank line
    /// included) fails with [`Error::MalformedRecord`] instead of being grouped
    /// arbitrarily.
    pub fn has_more_in_batch(&self, key: &str) -> Result<bool> {
        let Some(line) = self.lines.peek() else {
            return Ok(false);
        };
        match key_of(line, self.sep) {
            Some(next) => Ok(next == key),
            None => {
                let line_no = self.lines.lines_read() + 1;
                warn!(line_no, line = line.trim_end(), "record without separator");
                Err(Error::MalformedRecord {
                    line_no,
                    line: strip_terminator(line).to_string(),
                    reason: "missing separator",
                })
            }
        }
    }

    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.lines.read_line()
    }

    pub fn lines_read(&self) -> u64 {
        self.lines.lines_read()
    }

    pub fn close(self) -> S {
        self.lines.close()
    }
}
