use crate::engine::errors::PlannerError;
use crate::engine::planner::file_layout::FileLayout;
use crate::engine::planner::plan_summary::PlanSummary;
use crate::engine::planner::split::{ReadContext, Split};
use crate::engine::planner::split_planner::SplitPlanner;
use crate::shared::config::{JobConf, PlannerConfig};
use rayon::prelude::*;
use serde::Deserialize;
use tracing::info;

/// What a job submits for planning: its settings and the files it reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobRequest {
    #[serde(default)]
    pub conf: JobConf,
    pub files: Vec<FileLayout>,
}

/// Plans every file of a job with one window and one context.
#[derive(Debug, Clone)]
pub struct JobPlanner {
    conf: JobConf,
    planner: SplitPlanner,
}

impl JobPlanner {
    /// Resolves the split window from `conf`, falling back to `defaults`.
    pub fn new(conf: JobConf, defaults: &PlannerConfig) -> Result<Self, PlannerError> {
        let planner = SplitPlanner::new(conf.split_constraints(defaults)?);
        Ok(Self { conf, planner })
    }

    pub fn planner(&self) -> &SplitPlanner {
        &self.planner
    }

    /// The projection requested by the job, or the whole file schema.
    pub fn read_context(&self, file: &FileLayout) -> ReadContext {
        let requested = self
            .conf
            .read_schema()
            .unwrap_or_else(|| file.file_schema());
        ReadContext::new(requested, self.conf.as_map().clone())
    }

    /// Files are planned in parallel; splits come back grouped by file in input order.
    pub fn plan(&self, files: &[FileLayout]) -> Vec<Split> {
        let splits: Vec<Split> = files
            .par_iter()
            .map(|file| self.planner.plan(file, &self.read_context(file)))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        if tracing::enabled!(tracing::Level::INFO) {
            let summary = PlanSummary::from_splits(&splits, &self.planner.constraints());
            info!(
                target: "split_planner::job",
                files = files.len(),
                split_count = summary.split_count,
                total_size = summary.total_size,
                total_rows = summary.total_rows,
                unlocated = summary.unlocated,
                "Job planning completed"
            );
        }

        splits
    }

    pub fn plan_request(
        request: JobRequest,
        defaults: &PlannerConfig,
    ) -> Result<Vec<Split>, PlannerError> {
        let planner = JobPlanner::new(request.conf, defaults)?;
        Ok(planner.plan(&request.files))
    }
}
