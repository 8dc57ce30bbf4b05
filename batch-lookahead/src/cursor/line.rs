use tracing::{debug, trace};

use crate::{error::Result, source::LineSource};

/// Read ahead by one line. To the caller it looks like we know a read will
/// succeed before we issue it.
///
/// The cursor owns its source for its whole lifetime. [`LineCursor::close`]
/// hands the source back; dropping the cursor releases it.
#[derive(Debug)]
pub struct LineCursor<S> {
    source: S,
    /// Lookahead. `None` once the source is exhausted.
    buf: Option<String>,
    lines_read: u64,
}

impl<S: LineSource> LineCursor<S> {
    /// Bind to `source` and read its first line. Empty input is not an error.
    pub fn open(mut source: S) -> Result<Self> {
        let buf = source.read_line()?;
        debug!(
            source = %source.source_id(),
            empty = buf.is_none(),
            "line cursor opened"
        );
        Ok(Self {
            source,
            buf,
            lines_read: 0,
        })
    }

    /// Whether another line is buffered. Performs no I/O.
    pub fn has_more(&self) -> bool {
        self.buf.is_some()
    }

    /// The buffered line, without consuming it.
    pub fn peek(&self) -> Option<&str> {
        self.buf.as_deref()
    }

    /// Take the buffered line, terminator included, and refill the buffer.
    ///
    /// Returns `Ok(None)` on every call once the input is exhausted, without
    /// reading the source again. A failing refill is returned from the call that
    /// triggered it.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let Some(line) = self.buf.take() else {
            return Ok(None);
        };
        self.lines_read += 1;
        trace!(line_no = self.lines_read, line = line.trim_end(), "consumed line");

        self.buf = self.source.read_line()?;
        if self.buf.is_none() {
            debug!(lines = self.lines_read, "line cursor exhausted");
        }
        Ok(Some(line))
    }

    /// Number of lines handed out so far, i.e. the 1-based number of the line
    /// returned by the latest [`LineCursor::read_line`].
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// Release the cursor, returning the underlying source.
    pub fn close(self) -> S {
        self.source
    }
}
