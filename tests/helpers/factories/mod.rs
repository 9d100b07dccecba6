pub mod block_layout_factory;
pub mod file_layout_factory;

pub use block_layout_factory::BlockLayoutFactory;
pub use file_layout_factory::FileLayoutFactory;
pub use job_conf_factory::JobConfFactory;
pub use layout_generator::LayoutGenerator;
pub use row_group_factory::RowGroupFactory;

#[cfg(test)]
mod block_layout_factory_test;
#[cfg(test)]
mod row_group_factory_test;
