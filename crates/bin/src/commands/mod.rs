//! Subcommand implementations.
//!
//! Each command exposes `run`, which loads its files, prints in the selected
//! format and returns the answer where the command has one.

pub mod empty;
pub mod equal;
pub mod keys;
pub mod merge;
