// Domain value objects
pub mod event_category;
pub mod location_category;

pub use event_category::*;
pub use location_category::*;
