use crate::engine::planner::{FileLayout, RowGroup, StorageBlock};
use crate::test_helpers::factories::{BlockLayoutFactory, RowGroupFactory};
use indexmap::IndexMap;

pub const DEFAULT_PATH: &str = "hdfs://foo.namenode:1234/bar";
pub const DEFAULT_SCHEMA: &str = "message doc { required binary foo; }";

/// Defaults to ten 10-byte row groups over two 50-byte blocks.
pub struct FileLayoutFactory {
    path: String,
    schema: String,
    row_groups: Vec<RowGroup>,
    blocks: Vec<StorageBlock>,
    metadata: IndexMap<String, String>,
}

impl FileLayoutFactory {
    pub fn new() -> Self {
        Self {
            path: DEFAULT_PATH.to_string(),
            schema: DEFAULT_SCHEMA.to_string(),
            row_groups: RowGroupFactory::new().create_list(10),
            blocks: BlockLayoutFactory::new().with_block_sizes(&[50, 50]).create(),
            metadata: IndexMap::new(),
        }
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn with_schema(mut self, schema: &str) -> Self {
        self.schema = schema.to_string();
        self
    }

    pub fn with_row_groups(mut self, row_groups: Vec<RowGroup>) -> Self {
        self.row_groups = row_groups;
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<StorageBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_block_sizes(mut self, sizes: &[u64]) -> Self {
        self.blocks = BlockLayoutFactory::new().with_block_sizes(sizes).create();
        self
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn create(self) -> FileLayout {
        FileLayout::new(self.path, self.schema, self.row_groups, self.blocks)
            .expect("factory layout should be ordered")
            .with_key_value_metadata(self.metadata)
    }
}
