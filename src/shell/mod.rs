//! Command dispatch for submitted lines
//!
//! - **command.rs**: splitting a line into a `Command`
//! - **exec.rs**: running builtins and spawning external programs

pub mod command;
pub mod exec;

pub use command::{parse_command, Command};
pub use exec::{execute, Flow};
