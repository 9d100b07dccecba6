use crate::engine::errors::LayoutError;
use crate::engine::planner::row_group::RowGroup;

/// Row groups of one file in strictly ascending `start_offset` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowGroupLayout {
    row_groups: Vec<RowGroup>,
}

impl RowGroupLayout {
    pub fn new(row_groups: Vec<RowGroup>) -> Result<Self, LayoutError> {
        if let Some(index) = row_groups
            .windows(2)
            .position(|w| w[1].start_offset <= w[0].start_offset)
        {
            return Err(LayoutError::RowGroupsOutOfOrder {
                index: index + 1,
                previous: row_groups[index].start_offset,
                current: row_groups[index + 1].start_offset,
            });
        }
        Ok(Self { row_groups })
    }

    pub fn row_groups(&self) -> &[RowGroup] {
        &self.row_groups
    }

    pub fn len(&self) -> usize {
        self.row_groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_groups.is_empty()
    }

    pub fn total_byte_size(&self) -> u64 {
        self.row_groups
            .iter()
            .fold(0u64, |acc, rg| acc.saturating_add(rg.total_byte_size))
    }

    pub fn total_rows(&self) -> u64 {
        self.row_groups
            .iter()
            .fold(0u64, |acc, rg| acc.saturating_add(rg.row_count))
    }

    pub fn into_inner(self) -> Vec<RowGroup> {
        self.row_groups
    }
}
