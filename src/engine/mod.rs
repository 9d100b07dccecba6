pub mod errors;
pub mod planner;

pub use errors::*;
