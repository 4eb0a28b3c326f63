use std::time::Duration;

/// Steps a displayed number from zero up to a target in about fifty ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    step: u64,
    value: u64,
    done: bool,
}

impl CountUp {
    /// Interval between ticks
    pub const PERIOD: Duration = Duration::from_millis(20);

    pub fn new(target: u64) -> Self {
        // round(target / 50), never less than 1
        let step = ((target + 25) / 50).max(1);
        CountUp {
            target,
            step,
            value: 0,
            done: false,
        }
    }

    /// Advance one tick and return the value to display. The value clamps to
    /// the target, after which the counter is done and ticks are no-ops.
    pub fn tick(&mut self) -> u64 {
        if self.done {
            return self.value;
        }
        self.value = self.value.saturating_add(self.step);
        if self.value >= self.target {
            self.value = self.target;
            self.done = true;
        }
        self.value
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Jump straight to the target
    pub fn finish(&mut self) {
        self.value = self.target;
        self.done = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(counter: &mut CountUp) -> Vec<u64> {
        let mut seen = Vec::new();
        while !counter.is_done() {
            seen.push(counter.tick());
        }
        seen
    }

    #[test]
    fn step_rounds_target_over_fifty() {
        assert_eq!(CountUp::new(0).step(), 1);
        assert_eq!(CountUp::new(10).step(), 1);
        assert_eq!(CountUp::new(74).step(), 1);
        assert_eq!(CountUp::new(75).step(), 2);
        assert_eq!(CountUp::new(1000).step(), 20);
    }

    #[test]
    fn small_target_counts_by_one() {
        let mut counter = CountUp::new(4);
        assert_eq!(run_to_end(&mut counter), vec![1, 2, 3, 4]);
    }

    #[test]
    fn clamps_to_target() {
        let mut counter = CountUp::new(130); // step 3
        let seen = run_to_end(&mut counter);
        assert_eq!(seen.len(), 44);
        assert_eq!(seen[0], 3);
        assert_eq!(*seen.last().unwrap(), 130);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut counter = CountUp::new(0);
        assert!(!counter.is_done());
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_done());
    }

    #[test]
    fn ticks_after_done_are_noops() {
        let mut counter = CountUp::new(2);
        counter.tick();
        counter.tick();
        assert_eq!(counter.tick(), 2);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut counter = CountUp::new(500);
        counter.tick();
        counter.finish();
        assert_eq!(counter.value(), 500);
        assert!(counter.is_done());
    }
}
