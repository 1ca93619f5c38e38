use std::collections::VecDeque;

/// Fixed-capacity sequence of closing prices, oldest evicted first.
///
/// Owned exclusively by the indicator engine; one instance per instrument.
#[derive(Debug)]
pub struct PriceHistory {
    prices: VecDeque<f64>,
    capacity: usize,
}

impl PriceHistory {
    pub fn new(capacity: usize) -> Self {
        // A zero capacity could never retain a price; keep one slot.
        let capacity = capacity.max(1);
        Self {
            prices: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, price: f64) {
        while self.prices.len() >= self.capacity {
            self.prices.pop_front();
        }
        self.prices.push_back(price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// A contiguous copy for the indicator functions.
    pub fn snapshot(&self) -> Vec<f64> {
        self.prices.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut h = PriceHistory::new(3);
        for p in [1.0, 2.0, 3.0, 4.0] {
            h.push(p);
        }
        assert_eq!(h.len(), 3);
        assert_eq!(h.snapshot(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one_slot() {
        let mut h = PriceHistory::new(0);
        for p in [1.0, 2.0, 3.0] {
            h.push(p);
        }
        assert_eq!(h.snapshot(), vec![3.0]);
    }
}
