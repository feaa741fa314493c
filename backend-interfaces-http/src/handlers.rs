pub mod event_handlers;
pub mod import_handlers;
pub mod ops_handlers;
pub mod query_handlers;
pub mod toothbrush_handlers;

pub use event_handlers::*;
pub use import_handlers::*;
pub use ops_handlers::*;
pub use query_handlers::*;
pub use toothbrush_handlers::*;
