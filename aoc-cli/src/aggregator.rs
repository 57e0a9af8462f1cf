//! Reordering of results that arrive out of order from parallel workers

use crate::executor::SolverResult;
use std::collections::{BTreeMap, VecDeque};

/// Output position of a result: ascending year, then day, then part
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Buffers results until every earlier expected result has been emitted
pub struct ResultAggregator {
    /// Keys not yet emitted, smallest first
    expected: VecDeque<ResultKey>,
    /// Received results waiting for an earlier key
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    pub fn new(mut expected_keys: Vec<ResultKey>) -> Self {
        expected_keys.sort_unstable();
        expected_keys.dedup();
        Self {
            expected: expected_keys.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Add a result and return the results now ready for output, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::from(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front() {
            let Some(result) = self.pending.remove(next) else {
                break;
            };
            self.expected.pop_front();
            ready.push(result);
        }
        ready
    }

    /// Remaining buffered results in order, for when some never arrived
    pub fn drain(&mut self) -> Vec<SolverResult> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(day: u8, part: u8) -> ResultKey {
        ResultKey {
            year: 2021,
            day,
            part,
        }
    }

    fn make_result(day: u8, part: u8) -> SolverResult {
        SolverResult {
            year: 2021,
            day,
            part,
            answer: Ok(format!("{}_{}", day, part)),
            solve_duration: TimeDelta::milliseconds(10),
            parse_duration: Some(TimeDelta::milliseconds(5)),
        }
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new(vec![key(1, 1), key(1, 2)]);

        let ready = agg.add(make_result(1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg = ResultAggregator::new(vec![key(9, 2), key(1, 1), key(9, 1)]);

        assert!(agg.add(make_result(9, 2)).is_empty());
        assert!(agg.add(make_result(9, 1)).is_empty());

        let ready = agg.add(make_result(1, 1));
        let order: Vec<_> = ready.iter().map(ResultKey::from).collect();
        assert_eq!(order, vec![key(1, 1), key(9, 1), key(9, 2)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new(vec![key(1, 1), key(1, 2), key(2, 1)]);

        agg.add(make_result(2, 1));
        agg.add(make_result(1, 2));

        let remaining = agg.drain();
        let order: Vec<_> = remaining.iter().map(ResultKey::from).collect();
        assert_eq!(order, vec![key(1, 2), key(2, 1)]);
        assert!(!agg.is_complete());
        assert!(agg.drain().is_empty());
    }

    proptest! {
        #[test]
        fn prop_any_arrival_order_is_emitted_sorted(
            order in Just((1u8..=25).flat_map(|d| [(d, 1u8), (d, 2u8)]).collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let keys: Vec<_> = order.iter().map(|&(d, p)| key(d, p)).collect();
            let mut agg = ResultAggregator::new(keys.clone());

            let mut emitted = Vec::new();
            for &(d, p) in &order {
                emitted.extend(agg.add(make_result(d, p)).iter().map(ResultKey::from));
            }

            let mut sorted = keys;
            sorted.sort();
            prop_assert_eq!(emitted, sorted);
            prop_assert!(agg.is_complete());
        }
    }
}
