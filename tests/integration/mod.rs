pub mod cli;
pub mod scenarios;
