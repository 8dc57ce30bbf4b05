pub mod constants;
pub mod cursor;
pub mod error;
pub mod logging;
pub mod record;
pub mod report;
pub mod source;

pub use cursor::{BatchCursor, LineCursor};
pub use error::{Error, Result};
pub use source::{FixtureSource, LineSource, ReaderSource};
