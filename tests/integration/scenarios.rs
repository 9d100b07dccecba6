use serde::Deserialize;
use std::fs;

/// A file of equally sized, back-to-back row groups over contiguous blocks.
#[derive(Debug, Deserialize)]
pub struct TestScenario {
    pub name: String,
    #[serde(default = "default_row_group_count")]
    pub row_group_count: u64,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: u64,
    pub block_sizes: Vec<u64>,
    pub min_split_size: i64,
    pub max_split_size: i64,
    pub expect: Expectation,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expectation {
    Splits {
        row_groups: Vec<usize>,
        locations: Vec<usize>,
        #[serde(default)]
        sizes: Option<Vec<u64>>,
    },
    Error(String),
}

fn default_row_group_count() -> u64 {
    10
}

fn default_row_group_size() -> u64 {
    10
}

pub fn load_scenarios_from_json(path: &str) -> Vec<TestScenario> {
    let content = fs::read_to_string(path).expect("Failed to read scenario file");
    serde_json::from_str(&content).expect("Invalid JSON format")
}
