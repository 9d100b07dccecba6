use crate::engine::errors::PlannerError;
use crate::engine::planner::block_map::BlockMap;
use crate::engine::planner::row_group::RowGroup;
use crate::engine::planner::row_group_layout::RowGroupLayout;
use crate::engine::planner::storage_block::StorageBlock;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Wire form of a file as handed over by the footer reader and the file system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileDescriptor {
    pub path: String,
    #[serde(default)]
    pub file_schema: String,
    #[serde(default)]
    pub key_value_metadata: IndexMap<String, String>,
    pub row_groups: Vec<RowGroup>,
    #[serde(default)]
    pub blocks: Vec<StorageBlock>,
}

/// A file ready for planning: row groups and blocks are known to be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "FileDescriptor")]
pub struct FileLayout {
    path: String,
    file_schema: String,
    key_value_metadata: IndexMap<String, String>,
    row_groups: RowGroupLayout,
    blocks: BlockMap,
}

impl FileLayout {
    pub fn new(
        path: impl Into<String>,
        file_schema: impl Into<String>,
        row_groups: Vec<RowGroup>,
        blocks: Vec<StorageBlock>,
    ) -> Result<Self, PlannerError> {
        let path = path.into();
        let row_groups = RowGroupLayout::new(row_groups).map_err(|source| PlannerError::Layout {
            path: path.clone(),
            source,
        })?;
        let blocks = BlockMap::new(blocks).map_err(|source| PlannerError::Layout {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            file_schema: file_schema.into(),
            key_value_metadata: IndexMap::new(),
            row_groups,
            blocks,
        })
    }

    pub fn with_key_value_metadata(mut self, metadata: IndexMap<String, String>) -> Self {
        self.key_value_metadata = metadata;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn file_schema(&self) -> &str {
        &self.file_schema
    }

    pub fn key_value_metadata(&self) -> &IndexMap<String, String> {
        &self.key_value_metadata
    }

    pub fn row_groups(&self) -> &RowGroupLayout {
        &self.row_groups
    }

    pub fn blocks(&self) -> &BlockMap {
        &self.blocks
    }
}

impl TryFrom<FileDescriptor> for FileLayout {
    type Error = PlannerError;

    fn try_from(desc: FileDescriptor) -> Result<Self, Self::Error> {
        Ok(
            FileLayout::new(desc.path, desc.file_schema, desc.row_groups, desc.blocks)?
                .with_key_value_metadata(desc.key_value_metadata),
        )
    }
}
