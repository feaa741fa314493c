pub mod event_commands;
pub mod import_commands;
pub mod toothbrush_commands;
