//! Defines the data structures and models used throughout the application.
//!
//! This covers the entries offered by the choice menu and the rows that drive
//! a batch rename.

mod choice;
mod moves;

pub use choice::*;
pub use moves::*;
