//! Shared clap argument groups.

mod tone;

pub use tone::ToneArgs;
