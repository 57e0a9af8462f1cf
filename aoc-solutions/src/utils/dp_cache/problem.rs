//! Trait-based DP problem definition.

/// A recurrence whose values depend on other values of the same recurrence.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// struct Triangular;
///
/// impl DpProblem<usize, u64> for Triangular {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n == 0 { vec![] } else { vec![n - 1] }
///     }
///
///     fn compute(&self, n: &usize, deps: &[u64]) -> u64 {
///         if *n == 0 { 0 } else { *n as u64 + deps[0] }
///     }
/// }
///
/// let cache = DpCache::new(VecBackend::new(), Triangular);
/// assert_eq!(cache.get(&4), 10);
/// ```
pub trait DpProblem<I, K> {
    /// Indices this index depends on. Empty for base cases.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value for `index`, given the values of [`DpProblem::deps`] in the same order.
    fn compute(&self, index: &I, deps: &[K]) -> K;
}
