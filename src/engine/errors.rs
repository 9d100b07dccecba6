use thiserror::Error;
use tracing::{debug, error};

/// Errors surfaced while planning splits for a file or a job.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlannerError {
    #[error(
        "maxSplitSize should be positive and greater or equal to the minSplitSize: maxSplitSize = {max}; minSplitSize is {min}"
    )]
    Configuration { min: i64, max: i64 },

    #[error("Invalid value for job setting {key}: {value:?}")]
    InvalidJobSetting { key: String, value: String },

    #[error("Invalid layout for {path}: {source}")]
    Layout {
        path: String,
        #[source]
        source: LayoutError,
    },
}

/// Violations of the ordering preconditions on row groups and storage blocks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error(
        "row group {index} starts at {current}, which is not after the previous row group at {previous}"
    )]
    RowGroupsOutOfOrder {
        index: usize,
        previous: u64,
        current: u64,
    },

    #[error("storage block {index} starts at {current}, before the previous block at {previous}")]
    BlocksOutOfOrder {
        index: usize,
        previous: u64,
        current: u64,
    },

    #[error("storage block {index} at {offset} with length {length} overflows the file address space")]
    BlockOverflow {
        index: usize,
        offset: u64,
        length: u64,
    },
}

impl PlannerError {
    pub fn log_error(&self) {
        match self {
            PlannerError::Configuration { min, max } => {
                error!(min, max, "Invalid split size window");
                debug!("Split size window error details: {:?}", self);
            }
            PlannerError::InvalidJobSetting { key, value } => {
                error!(key = %key, value = %value, "Invalid job setting");
                debug!("Job setting error details: {:?}", self);
            }
            PlannerError::Layout { path, source } => {
                error!(path = %path, "Invalid file layout: {}", source);
                debug!("Layout error details: {:?}", source);
            }
        }
    }
}
