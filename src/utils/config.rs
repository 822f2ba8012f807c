//! Configuration and constants for the library and CLI.

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Name given to the synthetic record that holds idle time
pub const IDLE_OP_NAME: &str = "IDLE";

/// Category given to the synthetic idle record
pub const IDLE_CATEGORY: &str = "IDLE";

/// Module id used for records that do not belong to a compiled module
pub const NO_MODULE_ID: u64 = 0;

// Limits for the `inspect` command
pub const DEFAULT_TOP_OPS: usize = 20;
pub const MAX_TOP_OPS: usize = 1000;
