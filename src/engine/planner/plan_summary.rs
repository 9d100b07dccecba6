use crate::engine::planner::split::Split;
use crate::engine::planner::split_constraints::SplitConstraints;
use serde::Serialize;

/// Aggregate shape of a list of splits, for logs and the CLI.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct PlanSummary {
    pub split_count: usize,
    pub row_group_count: usize,
    pub total_size: u64,
    pub total_rows: u64,
    pub smallest: u64,
    pub largest: u64,
    /// Splits below the minimum that are not the last split of their file.
    pub undersized: usize,
    /// Splits above the maximum.
    pub oversized: usize,
    /// Splits without locality hints.
    pub unlocated: usize,
}

impl PlanSummary {
    pub fn from_splits(splits: &[Split], constraints: &SplitConstraints) -> Self {
        let mut summary = PlanSummary {
            split_count: splits.len(),
            smallest: splits.iter().map(|s| s.size).min().unwrap_or(0),
            largest: splits.iter().map(|s| s.size).max().unwrap_or(0),
            ..Default::default()
        };

        for (i, split) in splits.iter().enumerate() {
            summary.row_group_count += split.row_group_count();
            summary.total_size = summary.total_size.saturating_add(split.size);
            summary.total_rows = summary.total_rows.saturating_add(split.length);

            let last_of_file = splits
                .get(i + 1)
                .is_none_or(|next| next.path != split.path);
            if !last_of_file && !constraints.meets_min(split.size) {
                summary.undersized += 1;
            }
            if split.size > constraints.max_size() as u64 {
                summary.oversized += 1;
            }
            if split.locations.is_empty() {
                summary.unlocated += 1;
            }
        }

        summary
    }
}
