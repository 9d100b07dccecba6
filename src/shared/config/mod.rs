pub mod global;
pub mod job_conf;
pub mod model;

pub use global::CONFIG;
pub use job_conf::JobConf;
pub use model::{LoggingConfig, PlannerConfig, Settings, load_settings, load_settings_from};
