//! Read-ahead-by-one cursors.
//!
//! [`LineCursor`] keeps the next line buffered so "is there more input" is
//! answered without touching the source. [`BatchCursor`] adds a key peek on that
//! buffered line so a consumer can tell whether it still belongs to the batch
//! being processed. Input must be sorted so that every key forms one contiguous
//! run; this is relied on, not checked.

mod batch;
mod line;

pub use batch::BatchCursor;
pub use line::LineCursor;
