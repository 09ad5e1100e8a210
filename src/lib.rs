pub mod config;
pub mod emulator;
#[cfg(feature = "gui")]
pub mod visualizer;
