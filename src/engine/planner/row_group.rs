use serde::{Deserialize, Serialize};

/// Descriptor of one column chunk inside a row group. The planner never looks
/// inside it; it travels with the row group into the split.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnChunk {
    pub path: String,
    #[serde(default)]
    pub codec: String,
    pub first_data_page_offset: u64,
    pub compressed_size: u64,
    #[serde(default)]
    pub uncompressed_size: u64,
    #[serde(default)]
    pub value_count: u64,
}

/// A row group as described by the file footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowGroup {
    /// Offset of the row group's first byte in the file.
    pub start_offset: u64,
    /// Size used to pack row groups into splits.
    pub total_byte_size: u64,
    pub row_count: u64,
    #[serde(default)]
    pub columns: Vec<ColumnChunk>,
}

impl RowGroup {
    pub fn new(start_offset: u64, total_byte_size: u64, row_count: u64) -> Self {
        Self {
            start_offset,
            total_byte_size,
            row_count,
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnChunk) -> Self {
        self.columns.push(column);
        self
    }

    /// Bytes occupied on disk by the row group's column chunks.
    pub fn compressed_size(&self) -> u64 {
        self.columns
            .iter()
            .fold(0u64, |acc, c| acc.saturating_add(c.compressed_size))
    }
}
