//! Command implementations for the shadowlift CLI.

mod analyze;
mod batch;
mod convert;
mod preset;

// Re-export all command functions
pub use analyze::cmd_analyze;
pub use batch::cmd_batch;
pub use convert::cmd_convert;
pub use preset::{cmd_preset_create, cmd_preset_list, cmd_preset_show};
