pub mod info;
pub mod maintenance;

// Re-export all commands for use in lib.rs invoke_handler
pub use info::*;
pub use maintenance::*;
