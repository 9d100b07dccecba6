use crate::engine::errors::PlannerError;
use crate::engine::planner::SplitConstraints;
use crate::shared::config::model::PlannerConfig;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const MIN_SPLIT_SIZE_KEY: &str = "mapred.min.split.size";
pub const MAX_SPLIT_SIZE_KEY: &str = "mapred.max.split.size";
pub const READ_SCHEMA_KEY: &str = "parquet.read.schema";

/// Per-job string settings. Insertion order is kept so the map reaches every
/// split exactly as the job submitted it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct JobConf {
    entries: IndexMap<String, String>,
}

impl JobConf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Parses `key` as a signed integer; surrounding whitespace is ignored.
    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, PlannerError> {
        self.get(key)
            .map(|raw| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|_| PlannerError::InvalidJobSetting {
                        key: key.to_string(),
                        value: raw.to_string(),
                    })
            })
            .transpose()
    }

    /// Resolves the split window, taking unset keys from `defaults`.
    pub fn split_constraints(
        &self,
        defaults: &PlannerConfig,
    ) -> Result<SplitConstraints, PlannerError> {
        let min = self
            .get_i64(MIN_SPLIT_SIZE_KEY)?
            .unwrap_or(defaults.min_split_size);
        let max = self
            .get_i64(MAX_SPLIT_SIZE_KEY)?
            .unwrap_or(defaults.max_split_size);
        SplitConstraints::new(min, max)
    }

    pub fn read_schema(&self) -> Option<&str> {
        self.get(READ_SCHEMA_KEY)
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<IndexMap<String, String>> for JobConf {
    fn from(entries: IndexMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for JobConf {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
