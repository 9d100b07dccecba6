pub mod block_map;
pub mod file_layout;
pub mod job_planner;
pub mod plan_summary;
pub mod row_group;
pub mod row_group_layout;
pub mod split;
pub mod split_accumulator;
pub mod split_constraints;
pub mod split_planner;
pub mod storage_block;

pub use block_map::{BlockCursor, BlockMap, BlockMatch};
pub use file_layout::{FileDescriptor, FileLayout};
pub use job_planner::{JobPlanner, JobRequest};
pub use plan_summary::PlanSummary;
pub use row_group::{ColumnChunk, RowGroup};
pub use row_group_layout::RowGroupLayout;
pub use split::{ReadContext, Split};
pub use split_accumulator::{CloseReason, Offer, SplitAccumulator};
pub use split_constraints::SplitConstraints;
pub use split_planner::{SplitPlanner, plan_splits};
pub use storage_block::StorageBlock;
