use crate::engine::errors::LayoutError;
use crate::engine::planner::storage_block::StorageBlock;
use tracing::warn;

/// Storage blocks of one file, sorted by offset at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockMap {
    blocks: Vec<StorageBlock>,
}

/// How a block was picked for an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMatch<'a> {
    /// The block's range contains the offset.
    Containing(&'a StorageBlock),
    /// No block contains the offset; the nearest block in file order is used instead.
    Nearest(&'a StorageBlock),
}

impl<'a> BlockMatch<'a> {
    pub fn block(&self) -> &'a StorageBlock {
        match self {
            BlockMatch::Containing(b) | BlockMatch::Nearest(b) => b,
        }
    }

    pub fn is_containing(&self) -> bool {
        matches!(self, BlockMatch::Containing(_))
    }
}

impl BlockMap {
    /// Accepts blocks in ascending offset order. Gaps and overlaps are allowed.
    pub fn new(blocks: Vec<StorageBlock>) -> Result<Self, LayoutError> {
        for (index, block) in blocks.iter().enumerate() {
            if block.offset.checked_add(block.length).is_none() {
                return Err(LayoutError::BlockOverflow {
                    index,
                    offset: block.offset,
                    length: block.length,
                });
            }
            if index > 0 && block.offset < blocks[index - 1].offset {
                return Err(LayoutError::BlocksOutOfOrder {
                    index,
                    previous: blocks[index - 1].offset,
                    current: block.offset,
                });
            }
        }
        Ok(Self { blocks })
    }

    pub fn blocks(&self) -> &[StorageBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Starts a forward-only lookup at the first block.
    pub fn cursor(&self) -> BlockCursor<'_> {
        BlockCursor {
            blocks: &self.blocks,
            pos: 0,
        }
    }

    /// One-off lookup. Prefer a [`BlockCursor`] when resolving increasing offsets.
    pub fn locate(&self, offset: u64) -> Option<BlockMatch<'_>> {
        self.cursor().locate(offset)
    }
}

/// Forward-only position in a [`BlockMap`]. Offsets passed to `locate` must be
/// non-decreasing; each block is skipped at most once over the whole scan.
#[derive(Debug, Clone)]
pub struct BlockCursor<'a> {
    blocks: &'a [StorageBlock],
    pos: usize,
}

impl<'a> BlockCursor<'a> {
    /// Returns the first block containing `offset`.
    ///
    /// When no block contains it, falls back to the block immediately preceding
    /// `offset` in file order, or the first block when `offset` precedes every
    /// block. Returns `None` only for an empty map.
    pub fn locate(&mut self, offset: u64) -> Option<BlockMatch<'a>> {
        let blocks = self.blocks;
        if blocks.is_empty() {
            return None;
        }

        while self.pos < blocks.len() && blocks[self.pos].end() <= offset {
            self.pos += 1;
        }

        let found = match blocks.get(self.pos) {
            Some(block) if block.contains(offset) => return Some(BlockMatch::Containing(block)),
            Some(_) if self.pos == 0 => &blocks[0],
            _ => &blocks[self.pos - 1],
        };

        warn!(
            target: "split_planner::locality",
            offset,
            block_offset = found.offset,
            block_length = found.length,
            "No storage block contains offset, using nearest block"
        );
        Some(BlockMatch::Nearest(found))
    }
}
