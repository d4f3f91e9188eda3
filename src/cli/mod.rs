//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes defining commands, parsing arguments, and wiring the parsed
//! commands to the menu launcher and the batch mover.

mod commands;

pub use commands::*;
