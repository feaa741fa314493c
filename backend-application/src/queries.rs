pub mod data_queries;
pub mod stats_queries;
