/// Field separator between the key and the weight of a record.
pub const SEPARATOR: char = '|';

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "RUST_LOG";

/// Filter used when `LOG_ENV` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "warn";
