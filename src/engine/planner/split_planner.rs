use crate::engine::errors::PlannerError;
use crate::engine::planner::file_layout::FileLayout;
use crate::engine::planner::plan_summary::PlanSummary;
use crate::engine::planner::row_group::RowGroup;
use crate::engine::planner::split::{ReadContext, Split};
use crate::engine::planner::split_accumulator::{CloseReason, Offer, SplitAccumulator};
use crate::engine::planner::split_constraints::SplitConstraints;
use crate::engine::planner::storage_block::StorageBlock;
use indexmap::IndexMap;
use tracing::{debug, info, trace};

/// Packs the row groups of a file into splits.
///
/// Each split starts at the next unconsumed row group and takes its locality
/// from the block holding that row group's first byte. Row groups are added
/// while the split is below the maximum size, so a split can overshoot the
/// maximum by at most its last row group. Once the minimum is met, a row group
/// starting past the end of the split's block closes the split early.
#[derive(Debug, Clone, Copy)]
pub struct SplitPlanner {
    constraints: SplitConstraints,
}

impl SplitPlanner {
    pub fn new(constraints: SplitConstraints) -> Self {
        Self { constraints }
    }

    pub fn with_window(min_size: i64, max_size: i64) -> Result<Self, PlannerError> {
        Ok(Self::new(SplitConstraints::new(min_size, max_size)?))
    }

    pub fn constraints(&self) -> SplitConstraints {
        self.constraints
    }

    pub fn plan(&self, file: &FileLayout, context: &ReadContext) -> Vec<Split> {
        let row_groups = file.row_groups().row_groups();
        let mut cursor = file.blocks().cursor();
        let mut splits = Vec::new();
        let mut next = 0;

        if tracing::enabled!(tracing::Level::DEBUG) {
            debug!(
                target: "split_planner::plan",
                path = file.path(),
                row_groups = row_groups.len(),
                blocks = file.blocks().len(),
                min_size = self.constraints.min_size(),
                max_size = self.constraints.max_size(),
                "Planning splits"
            );
        }

        while next < row_groups.len() {
            let block = cursor.locate(row_groups[next].start_offset);
            let mut acc = SplitAccumulator::open(block, self.constraints);

            let reason = loop {
                let Some(rg) = row_groups.get(next) else {
                    break CloseReason::Exhausted;
                };
                match acc.offer(rg) {
                    Offer::Accepted => next += 1,
                    Offer::Closed(reason) => break reason,
                }
            };

            if tracing::enabled!(tracing::Level::TRACE) {
                trace!(
                    target: "split_planner::plan",
                    path = file.path(),
                    split = splits.len(),
                    row_groups = acc.members().len(),
                    size = acc.size(),
                    block_offset = acc.block().map(|b| b.block().offset),
                    ?reason,
                    "Closed split"
                );
            }

            splits.push(acc.finish(file, context));
        }

        if tracing::enabled!(tracing::Level::INFO) {
            let summary = PlanSummary::from_splits(&splits, &self.constraints);
            info!(
                target: "split_planner::plan",
                path = file.path(),
                split_count = summary.split_count,
                total_size = summary.total_size,
                smallest = summary.smallest,
                largest = summary.largest,
                undersized = summary.undersized,
                oversized = summary.oversized,
                "Split planning completed"
            );
        }

        splits
    }
}

/// Plans one file from raw parts.
///
/// The size window is validated before anything else; `schema` and `context`
/// are copied into every split.
pub fn plan_splits(
    row_groups: Vec<RowGroup>,
    blocks: Vec<StorageBlock>,
    schema: &str,
    context: IndexMap<String, String>,
    min_size: i64,
    max_size: i64,
) -> Result<Vec<Split>, PlannerError> {
    let planner = SplitPlanner::with_window(min_size, max_size)?;
    let file = FileLayout::new("", schema, row_groups, blocks)?;
    Ok(planner.plan(&file, &ReadContext::new(schema, context)))
}
