use std::{env, io, path::PathBuf, process};

use anyhow::{Context, Result};
use batch_lookahead::{
    BatchCursor, LineCursor, LineSource, ReaderSource, logging,
    report::{dedup, echo, summarize},
};

const USAGE: &str = "<echo | sum | dedup> <records.dat | ->";

fn main() -> Result<()> {
    logging::init();

    let mut args = env::args_os();
    let prog = args.next().unwrap_or_default(); // program name

    let (Some(mode), Some(path)) = (args.next(), args.next()) else {
        eprintln!("usage: {} {USAGE}", prog.to_string_lossy());
        process::exit(2);
    };

    if args.next().is_some() {
        eprintln!(
            "error: too many arguments\nusage: {} {USAGE}",
            prog.to_string_lossy()
        );
        process::exit(2);
    }

    let path = PathBuf::from(path);
    let source: Box<dyn LineSource> = if path.as_os_str() == "-" {
        Box::new(ReaderSource::stdin())
    } else {
        Box::new(
            ReaderSource::open(&path)
                .with_context(|| format!("cannot open {}", path.display()))?,
        )
    };

    let mut out = io::stdout().lock();
    let emitted = match mode.to_str() {
        Some("echo") => echo(LineCursor::open(source)?, &mut out)?,
        Some("sum") => summarize(BatchCursor::open(source)?, &mut out)?,
        Some("dedup") => dedup(BatchCursor::open(source)?, &mut out)?,
        _ => {
            eprintln!(
                "error: unknown mode {:?}\nusage: {} {USAGE}",
                mode,
                prog.to_string_lossy()
            );
            process::exit(2);
        }
    };
    tracing::debug!(emitted, "done");

    Ok(())
}
