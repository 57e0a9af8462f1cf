//! Memoization for recurrences whose values depend on other values.
//!
//! - [`DpProblem`]: the recurrence (dependencies + combine step)
//! - [`DpCache`]: lazy, single-threaded evaluator
//! - [`VecBackend`] / [`HashMapBackend`]: dense `usize` or sparse hashable storage
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! /// Lattice paths from (0, 0) to (r, c)
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, &(r, c): &(usize, usize)) -> Vec<(usize, usize)> {
//!         match (r, c) {
//!             (0, _) | (_, 0) => vec![],
//!             _ => vec![(r - 1, c), (r, c - 1)],
//!         }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: &[u64]) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::new(HashMapBackend::new(), GridPaths);
//! assert_eq!(cache.get(&(4, 4)), 70);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
