use crate::engine::planner::block_map::BlockMatch;
use crate::engine::planner::file_layout::FileLayout;
use crate::engine::planner::row_group::RowGroup;
use crate::engine::planner::split::{ReadContext, Split};
use crate::engine::planner::split_constraints::SplitConstraints;

/// Why a split stopped taking row groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Size reached the maximum before the next row group was considered.
    MaxSize,
    /// Minimum met and the next row group starts past the split's block.
    BlockBoundary,
    /// No row groups left.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Accepted,
    Closed(CloseReason),
}

/// State of the split under construction.
#[derive(Debug, Clone)]
pub struct SplitAccumulator<'a> {
    block: Option<BlockMatch<'a>>,
    constraints: SplitConstraints,
    members: Vec<&'a RowGroup>,
    size: u64,
}

impl<'a> SplitAccumulator<'a> {
    /// `block` is the block holding the first byte of the split, if the file has any.
    pub fn open(block: Option<BlockMatch<'a>>, constraints: SplitConstraints) -> Self {
        Self {
            block,
            constraints,
            members: Vec::new(),
            size: 0,
        }
    }

    /// Checks the size bound first, then the block boundary. An empty split
    /// always accepts its first row group.
    pub fn offer(&mut self, rg: &'a RowGroup) -> Offer {
        if !self.constraints.below_max(self.size) {
            return Offer::Closed(CloseReason::MaxSize);
        }
        if self.crosses_boundary(rg) {
            return Offer::Closed(CloseReason::BlockBoundary);
        }
        self.members.push(rg);
        self.size = self.size.saturating_add(rg.total_byte_size);
        Offer::Accepted
    }

    fn crosses_boundary(&self, rg: &RowGroup) -> bool {
        let Some(block) = self.block else {
            return false;
        };
        !self.members.is_empty()
            && self.constraints.meets_min(self.size)
            && rg.start_offset >= block.block().end()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn members(&self) -> &[&'a RowGroup] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn block(&self) -> Option<BlockMatch<'a>> {
        self.block
    }

    pub fn finish(self, file: &FileLayout, context: &ReadContext) -> Split {
        let start = self.members.first().map(|rg| rg.start_offset).unwrap_or(0);
        let length = self
            .members
            .iter()
            .fold(0u64, |acc, rg| acc.saturating_add(rg.row_count));
        let locations = self
            .block
            .map(|b| b.block().hosts.clone())
            .unwrap_or_default();

        Split {
            path: file.path().to_string(),
            start,
            size: self.size,
            length,
            locations,
            row_groups: self.members.into_iter().cloned().collect(),
            file_schema: file.file_schema().to_string(),
            extra_metadata: file.key_value_metadata().clone(),
            read_context: context.clone(),
        }
    }
}
