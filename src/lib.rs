pub mod engine;
pub mod logging;
pub mod shared;

pub use engine::errors::{LayoutError, PlannerError};
pub use engine::planner::{
    FileLayout, JobPlanner, ReadContext, RowGroup, Split, SplitConstraints, SplitPlanner,
    StorageBlock, plan_splits,
};

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
