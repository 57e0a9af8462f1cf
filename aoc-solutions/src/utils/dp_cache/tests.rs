//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Simple problem with no dependencies for testing
struct Double;

impl DpProblem<usize, i32> for Double {
    fn deps(&self, _n: &usize) -> Vec<usize> {
        vec![]
    }

    fn compute(&self, n: &usize, _deps: &[i32]) -> i32 {
        (*n as i32) * 2
    }
}

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: &[u64]) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_values_without_dependencies() {
    let cache = DpCache::new(VecBackend::new(), Double);
    assert_eq!(cache.get(&5), 10);
    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&100), 200);
}

#[test]
fn test_fibonacci_chain() {
    let cache = DpCache::new(VecBackend::with_capacity(91), Fibonacci);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_computed_once() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: &[i32]) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::new(
        HashMapBackend::new(),
        Diamond {
            count: count.clone(),
        },
    );

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_vec_backend_keeps_first_value() {
    let mut backend: VecBackend<i32> = VecBackend::new();
    assert_eq!(backend.get(&5), None);

    backend.insert(5, 42);
    backend.insert(5, 999);
    assert_eq!(backend.get(&5), Some(&42));
    assert_eq!(backend.get(&3), None);

    backend.insert(10, 100);
    assert_eq!(backend.get(&10), Some(&100));
    assert_eq!(backend.get(&5), Some(&42));
}

#[test]
fn test_hashmap_backend_keeps_first_value() {
    let mut backend: HashMapBackend<(u8, u16), u64> = HashMapBackend::new();
    backend.insert((6, 80), 1);
    backend.insert((6, 80), 2);
    assert_eq!(backend.get(&(6, 80)), Some(&1));
    assert_eq!(backend.get(&(8, 80)), None);
}
