use crate::engine::planner::row_group::RowGroup;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Job-level context copied verbatim into every split of a job.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadContext {
    /// Schema the readers are asked to materialize.
    pub requested_schema: String,
    pub metadata: IndexMap<String, String>,
}

impl ReadContext {
    pub fn new(requested_schema: impl Into<String>, metadata: IndexMap<String, String>) -> Self {
        Self {
            requested_schema: requested_schema.into(),
            metadata,
        }
    }
}

/// A unit of work: consecutive row groups of one file plus locality hints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Split {
    pub path: String,
    /// Offset of the first row group.
    pub start: u64,
    /// Sum of the member row groups' byte sizes.
    pub size: u64,
    /// Sum of the member row groups' row counts.
    pub length: u64,
    pub locations: Vec<String>,
    pub row_groups: Vec<RowGroup>,
    pub file_schema: String,
    pub extra_metadata: IndexMap<String, String>,
    pub read_context: ReadContext,
}

impl Split {
    pub fn row_group_count(&self) -> usize {
        self.row_groups.len()
    }

    pub fn requested_schema(&self) -> &str {
        &self.read_context.requested_schema
    }

    pub fn read_support_metadata(&self) -> &IndexMap<String, String> {
        &self.read_context.metadata
    }

    /// Size of the last member, the most a split may exceed its maximum by.
    pub fn last_row_group_size(&self) -> u64 {
        self.row_groups
            .last()
            .map(|rg| rg.total_byte_size)
            .unwrap_or(0)
    }
}
