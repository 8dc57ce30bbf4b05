#![allow(dead_code)]

use std::collections::BTreeMap;

use batch_lookahead::{BatchCursor, FixtureSource, Result};
use proptest::{collection, prelude::*};

/// Sample input: three batches keyed `a`, `b` and `h`.
pub const BATCH_DATA: &str = "a|10\na|20\na|30\nb|5\nh|1\nh|2\n";

/// Sorted input: one contiguous run of weights per key.
pub fn sorted_batches() -> impl Strategy<Value = BTreeMap<char, Vec<i64>>> {
    collection::btree_map(
        (b'a'..=b'z').prop_map(char::from),
        collection::vec(-1_000i64..1_000, 1..6),
        0..10,
    )
}

pub fn to_lines(batches: &BTreeMap<char, Vec<i64>>) -> Vec<String> {
    batches
        .iter()
        .flat_map(|(key, weights)| weights.iter().map(move |w| format!("{key}|{w}")))
        .collect()
}

/// Run a consumer over terminated fixture lines and split its output into lines.
pub fn run<F>(lines: &[String], consumer: F) -> Result<Vec<String>>
where
    F: FnOnce(BatchCursor<FixtureSource>, &mut Vec<u8>) -> Result<usize>,
{
    let mut out = Vec::new();
    consumer(BatchCursor::open(FixtureSource::terminated(lines))?, &mut out)?;
    Ok(String::from_utf8(out)
        .expect("consumers write UTF-8")
        .lines()
        .map(str::to_string)
        .collect())
}
