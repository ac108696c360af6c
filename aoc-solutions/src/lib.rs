//! Puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one is an impl block marked with
//! `#[solution(...)]`, which registers its `part_<n>` functions with the
//! runner's plugin table when this crate is linked.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
