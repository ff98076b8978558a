//! Trailing-edge debouncing for bursty events such as window resizes.
//!
//! Each trigger returns a generation. The host waits for the quiet period
//! and then asks whether its generation is still the latest; only the last
//! trigger of a burst gets `true`.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

#[derive(Debug, Default)]
pub struct Debouncer {
    latest: Cell<u64>,
    quiet_ms: u32,
}

impl Debouncer {
    pub fn new(quiet_ms: u32) -> Self {
        Self {
            latest: Cell::new(0),
            quiet_ms,
        }
    }

    /// How long the host should wait before calling [`Debouncer::is_current`].
    pub fn quiet_ms(&self) -> u32 {
        self.quiet_ms
    }

    pub fn trigger(&self) -> Generation {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Generation(next)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.get() == generation.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_last_trigger_of_burst_runs() {
        let debouncer = Debouncer::new(250);
        let burst: Vec<_> = (0..3).map(|_| debouncer.trigger()).collect();
        let runs: Vec<_> = burst.iter().map(|g| debouncer.is_current(*g)).collect();
        assert_eq!(runs, vec![false, false, true]);
    }

    #[test]
    fn separate_bursts_each_run() {
        let debouncer = Debouncer::new(250);
        let first = debouncer.trigger();
        assert!(debouncer.is_current(first));
        let second = debouncer.trigger();
        assert!(debouncer.is_current(second));
        assert!(!debouncer.is_current(first));
    }
}
