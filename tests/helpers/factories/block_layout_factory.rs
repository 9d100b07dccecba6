use crate::engine::planner::StorageBlock;

/// Builds storage block lists. Block `i` is replicated on
/// `foo{i}.datanode` and `bar{i}.datanode`.
pub struct BlockLayoutFactory {
    blocks: Vec<StorageBlock>,
}

impl BlockLayoutFactory {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    pub fn hosts_for(index: usize) -> Vec<String> {
        vec![
            format!("foo{}.datanode", index),
            format!("bar{}.datanode", index),
        ]
    }

    /// Contiguous blocks starting at offset 0.
    pub fn with_block_sizes(mut self, sizes: &[u64]) -> Self {
        let mut offset = self.blocks.last().map(|b| b.end()).unwrap_or(0);
        for &size in sizes {
            let index = self.blocks.len();
            self.blocks
                .push(StorageBlock::new(offset, size, Self::hosts_for(index)));
            offset += size;
        }
        self
    }

    pub fn with_block(mut self, offset: u64, length: u64) -> Self {
        let index = self.blocks.len();
        self.blocks
            .push(StorageBlock::new(offset, length, Self::hosts_for(index)));
        self
    }

    pub fn create(self) -> Vec<StorageBlock> {
        self.blocks
    }
}
