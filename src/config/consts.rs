/// Blackboard key holding the operand pair
pub const INPUT_KEY: &str = "input";
/// Blackboard key holding the derived sum
pub const SUM_KEY: &str = "sum";
/// Operand pair written by the default input stage
pub const DEFAULT_INPUT_PAIR: (i64, i64) = (9, 6);

pub const INPUT_SOURCE_NAME: &str = "Input";
pub const SUM_SOURCE_NAME: &str = "Sum";
pub const OUTPUT_SOURCE_NAME: &str = "Output";

/// Log filter used when `RUST_LOG` is not set. Diagnostics go to stderr so the
/// trace lines on stdout stay clean.
pub const DEFAULT_LOG_FILTER: &str = "the_blackboard=warn";
