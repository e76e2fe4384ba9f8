// 7.0: bounded rolling history series. two of these live on the valuation engine,
// one for hedge coverage and one for net P&L. capacity 16, oldest point evicted
// first, matching the sparkline windows the rendering layer draws.

use crate::types::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: Timestamp,
    pub value: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryBuffer {
    points: VecDeque<HistoryPoint>,
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, timestamp: Timestamp, value: Decimal) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(HistoryPoint { timestamp, value });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Points oldest-first.
    pub fn points(&self) -> impl Iterator<Item = &HistoryPoint> {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<HistoryPoint> {
        self.points.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut buf = HistoryBuffer::default();
        for i in 0..20i64 {
            buf.push(Timestamp::from_millis(i), Decimal::from(i));
        }
        assert_eq!(buf.len(), HISTORY_CAPACITY);
        let values: Vec<Decimal> = buf.points().map(|p| p.value).collect();
        // first four (0..=3) evicted, remainder oldest-first
        assert_eq!(values[0], dec!(4));
        assert_eq!(values[15], dec!(19));
    }

    #[test]
    fn clear_empties_the_window() {
        let mut buf = HistoryBuffer::default();
        buf.push(Timestamp::from_millis(1), dec!(50));
        buf.clear();
        assert!(buf.is_empty());
    }
}
