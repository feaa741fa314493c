// Domain entities

pub mod config;
pub mod event;
pub mod import_row;
pub mod stats;
pub mod toothbrush;

pub use config::*;
pub use event::*;
pub use import_row::*;
pub use stats::*;
pub use toothbrush::*;
