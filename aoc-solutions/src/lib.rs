//! Advent of Code puzzle solutions with automatic registration
//!
//! [`utils`] holds the shared building blocks (grid coordinates, adjacency,
//! graph search, memoization). The solutions under `my_solutions` use the
//! `AutoRegisterSolver` derive macro for automatic plugin registration with
//! the solver framework.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
