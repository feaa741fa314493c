pub mod pg_event_repository;
pub mod pg_gateway;
pub mod pg_toothbrush_repository;

pub use pg_event_repository::*;
pub use pg_gateway::*;
pub use pg_toothbrush_repository::*;
