use crate::net::Traffic;

/// turns cumulative byte counters into per-tick deltas.
#[derive(Debug, Default)]
pub struct RateTracker {
    rx: Counter,
    tx: Counter,
}

/// one cumulative counter and the total it had on the previous tick.
#[derive(Debug, Default)]
pub struct Counter {
    previous: u64,
}

/// bytes moved since the previous tick.
///
/// a negative rate means the counter went backwards (an interface reset or a wraparound).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rates {
    pub rx: i64,
    pub tx: i64,
}

// === impl RateTracker ===

impl RateTracker {
    /// returns the deltas since the last update, then takes `traffic` as the new baseline.
    pub fn update(&mut self, Traffic { rx, tx }: Traffic) -> Rates {
        let Self {
            rx: rx_counter,
            tx: tx_counter,
        } = self;

        Rates {
            rx: rx_counter.delta(rx),
            tx: tx_counter.delta(tx),
        }
    }
}

// === impl Counter ===

impl Counter {
    pub fn delta(&mut self, current: u64) -> i64 {
        let previous = std::mem::replace(&mut self.previous, current);
        (current as i64).wrapping_sub(previous as i64)
    }

    #[cfg(test)]
    pub fn baseline(&self) -> u64 {
        self.previous
    }
}
