//! Advent of Code Solver Library
//!
//! A small, type-safe framework for Advent of Code solutions. Each puzzle is a
//! solver with its own input parser and one implementation per part; solvers
//! register themselves and are looked up by (year, day).
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Depths;
//!
//! impl AocParser for Depths {
//!     type SharedData<'a> = Vec<u32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("Expected integer".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<u32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Depths {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! aoc_solver::register_solver!(builder, Depths, 2021, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2021, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "3");
//! ```
//!
//! # Key Concepts
//!
//! - [`AocParser`]: input parsing into `SharedData`
//! - [`PartSolver<N>`]: one implementation per part, mutable access to `SharedData`
//! - [`Solver`]: part dispatch, usually derived with `#[derive(AocSolver)]`
//! - [`DynSolver`]: type-erased, timed solving through the registry
//! - [`SolverPlugin`]: `inventory`-collected registrations, submitted by
//!   `#[derive(AutoRegisterSolver)]`

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, Timing};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverPlugin, SolverRegistry,
    SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
