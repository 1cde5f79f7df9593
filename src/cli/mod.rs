//! Command-line interface for the door.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`door`] - The door session command the binary runs

pub mod args;
pub mod door;

pub use args::Cli;
pub use door::{CommandResult, DoorCommand};
