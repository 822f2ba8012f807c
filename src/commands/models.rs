use crate::utils::config::{DEFAULT_TOP_OPS, MAX_TOP_OPS};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Arguments for the ingest command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct IngestArgs {
    /// JSON array of raw records
    pub input: PathBuf,

    /// Output path for the fine-grained profile
    pub output: PathBuf,

    /// Length of the measurement window in picoseconds
    pub total_time_ps: u64,

    /// Append an IDLE record holding the unattributed time
    pub add_idle: bool,
}

impl Default for IngestArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("records.json"),
            output: PathBuf::from("fine.json"),
            total_time_ps: 0,
            add_idle: false,
        }
    }
}

/// Arguments for the derive command
#[derive(Debug, Clone)]
pub struct DeriveArgs {
    /// Fine-grained profile to roll up
    pub input: PathBuf,

    /// Output path for the coarse-grained profile
    pub output: PathBuf,
}

impl Default for DeriveArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("fine.json"),
            output: PathBuf::from("coarse.json"),
        }
    }
}

/// Arguments for the merge command
#[derive(Debug, Clone, Default)]
pub struct MergeArgs {
    /// Shard profiles to merge
    pub inputs: Vec<PathBuf>,

    /// Output path for the merged profile
    pub output: PathBuf,
}

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Profile to inspect
    pub input: PathBuf,

    /// Number of top ops to print
    pub top: usize,
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("coarse.json"),
            top: DEFAULT_TOP_OPS,
        }
    }
}

/// Validation shared by every command's arguments
pub trait ValidateArgs {
    fn validate(&self) -> Result<()>;
}

/// Validate command arguments before doing any work
///
/// **Public** - called from main.rs for early validation
pub fn validate_args(args: &impl ValidateArgs) -> Result<()> {
    args.validate()
}

fn require_path(path: &Path, what: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        anyhow::bail!("{} path cannot be empty", what);
    }
    Ok(())
}

impl ValidateArgs for IngestArgs {
    fn validate(&self) -> Result<()> {
        require_path(&self.input, "Input")?;
        require_path(&self.output, "Output")?;
        if self.input == self.output {
            anyhow::bail!("Input and output must be different files");
        }
        Ok(())
    }
}

impl ValidateArgs for DeriveArgs {
    fn validate(&self) -> Result<()> {
        require_path(&self.input, "Input")?;
        require_path(&self.output, "Output")?;
        if self.input == self.output {
            anyhow::bail!("Input and output must be different files");
        }
        Ok(())
    }
}

impl ValidateArgs for MergeArgs {
    fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            anyhow::bail!("At least one input shard is required");
        }
        for input in &self.inputs {
            require_path(input, "Input")?;
        }
        require_path(&self.output, "Output")?;
        if self.inputs.contains(&self.output) {
            anyhow::bail!("Output must not overwrite one of the input shards");
        }
        Ok(())
    }
}

impl ValidateArgs for InspectArgs {
    fn validate(&self) -> Result<()> {
        require_path(&self.input, "Input")?;

        if self.top == 0 {
            anyhow::bail!("top must be greater than 0");
        }

        if self.top > MAX_TOP_OPS {
            anyhow::bail!("top is too large (max {})", MAX_TOP_OPS);
        }

        Ok(())
    }
}
