//! Single-pass consumers built on the cursors.
//!
//! Each one drives the batch protocol to the end of input, writes its output
//! lines to `out` and returns how many it wrote. The cursor is closed on
//! success and dropped on error.

use std::io::Write;

use tracing::debug;

use crate::{
    cursor::{BatchCursor, LineCursor},
    error::{Error, Result},
    record::{Record, key_of, strip_terminator},
    source::LineSource,
};

/// Print every line with its 1-based sequence number.
pub fn echo<S: LineSource, W: Write>(mut cursor: LineCursor<S>, out: &mut W) -> Result<usize> {
    let mut count = 0;
    while cursor.has_more() {
        let Some(line) = cursor.read_line()? else {
            break;
        };
        count += 1;
        writeln!(out, "{:>3}  {}", count, strip_terminator(&line))?;
    }
    cursor.close();
    Ok(count)
}

/// Emit `key|sum` for each batch.
pub fn summarize<S: LineSource, W: Write>(
    mut cursor: BatchCursor<S>,
    out: &mut W,
) -> Result<usize> {
    let sep = cursor.separator();
    let mut batches = 0;
    while let Some(head) = next_head(&mut cursor)? {
        let rec = Record::parse_with(&head, sep, cursor.lines_read())?;
        let mut total = rec.weight;
        let mut records = 1;
        while cursor.has_more_in_batch(rec.key)? {
            let Some(line) = cursor.read_line()? else {
                break;
            };
            let member = Record::parse_with(&line, sep, cursor.lines_read())?;
            total = total
                .checked_add(member.weight)
                .ok_or_else(|| Error::WeightOverflow {
                    key: rec.key.to_string(),
                })?;
            records += 1;
        }
        debug!(key = rec.key, records, total, "batch summarized");
        writeln!(out, "{}{sep}{total}", rec.key)?;
        batches += 1;
    }
    cursor.close();
    Ok(batches)
}

/// Emit only the head line of each batch.
pub fn dedup<S: LineSource, W: Write>(mut cursor: BatchCursor<S>, out: &mut W) -> Result<usize> {
    let sep = cursor.separator();
    let mut batches = 0;
    while let Some(head) = next_head(&mut cursor)? {
        let head = strip_terminator(&head);
        let key = key_of(head, sep).ok_or_else(|| Error::MalformedRecord {
            line_no: cursor.lines_read(),
            line: head.to_string(),
            reason: "missing separator",
        })?;
        let mut dropped = 0;
        while cursor.has_more_in_batch(key)? {
            cursor.read_line()?;
            dropped += 1;
        }
        debug!(key, dropped, "batch deduplicated");
        writeln!(out, "{head}")?;
        batches += 1;
    }
    cursor.close();
    Ok(batches)
}

/// Consume the head record of the next batch, if any.
fn next_head<S: LineSource>(cursor: &mut BatchCursor<S>) -> Result<Option<String>> {
    if !cursor.has_more_batches() {
        return Ok(None);
    }
    cursor.read_line()
}
