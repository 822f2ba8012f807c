//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components: read inputs, aggregate,
//! write outputs.

pub mod derive;
pub mod ingest;
pub mod inspect;
pub mod merge;
pub mod models;

// Re-export main command functions
pub use derive::execute_derive;
pub use ingest::execute_ingest;
pub use inspect::{display_version, execute_inspect};
pub use merge::execute_merge;
pub use models::{validate_args, DeriveArgs, IngestArgs, InspectArgs, MergeArgs, ValidateArgs};
