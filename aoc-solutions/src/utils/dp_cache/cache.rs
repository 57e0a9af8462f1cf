//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// Memoizing evaluator for a [`DpProblem`].
///
/// Each index is computed at most once; dependencies are resolved on first
/// request.
///
/// # Warning: No Cycle Detection
///
/// Dependencies must form a DAG. A cycle recurses until the stack overflows.
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn new(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value for `index`, computed and cached on first request.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // No borrow may be held while resolving dependencies
        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        let value = self.problem.compute(index, &dep_values);

        self.backend.borrow_mut().insert(index.clone(), value.clone());
        value
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}
