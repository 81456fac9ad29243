//! Stepped count-up animation for numeric statistics.
//!
//! Each statistic is a [`CountUp`]: a finite, non-restartable sequence of
//! `steps` integers climbing from 0 to its target. A [`CounterGroup`]
//! advances every counter of a region from one shared tick, so counters with
//! different targets finish together.

use std::iter::FusedIterator;

use super::error::AnimationError;

// ============================================================================
// CounterTiming
// ============================================================================

/// Step count and total wall-clock duration of a count-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterTiming {
    duration_ms: u32,
    steps: u32,
}

impl CounterTiming {
    pub fn new(duration_ms: u32, steps: u32) -> Result<Self, AnimationError> {
        if steps == 0 {
            return Err(AnimationError::ZeroSteps);
        }
        if duration_ms == 0 {
            return Err(AnimationError::ZeroDuration);
        }
        Ok(Self { duration_ms, steps })
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Delay between two ticks (at least 1ms).
    pub fn step_ms(&self) -> u32 {
        (self.duration_ms / self.steps).max(1)
    }
}

// ============================================================================
// CountUp
// ============================================================================

/// Count-up sequence for a single target.
///
/// Yields exactly `steps` values. Step `k` shows `round(target * k / steps)`
/// (half away from zero), and the last step is always exactly `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountUp {
    target: u64,
    steps: u32,
    step: u32,
}

impl CountUp {
    pub fn new(target: i64, steps: u32) -> Result<Self, AnimationError> {
        if steps == 0 {
            return Err(AnimationError::ZeroSteps);
        }
        let target = u64::try_from(target).map_err(|_| AnimationError::NegativeTarget(target))?;
        Ok(Self {
            target,
            steps,
            step: 0,
        })
    }

    /// Value currently on display (0 before the first step).
    pub fn current(&self) -> u64 {
        self.value_at(self.step)
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    fn value_at(&self, step: u32) -> u64 {
        if step >= self.steps {
            return self.target;
        }
        // floor(t*k/n + 1/2) in integers; u128 keeps t*k*2 from overflowing.
        let n = u128::from(self.steps);
        let scaled = u128::from(self.target) * u128::from(step) * 2 + n;
        (scaled / (2 * n)) as u64
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        Some(self.current())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CountUp {}

impl FusedIterator for CountUp {}

// ============================================================================
// CounterGroup
// ============================================================================

/// All counters of one region, advanced in lockstep.
#[derive(Clone, Debug)]
pub struct CounterGroup {
    counters: Vec<CountUp>,
    timing: CounterTiming,
}

impl CounterGroup {
    /// Builds one counter per target. Fails on the first invalid target, so
    /// a malformed configuration never starts animating.
    pub fn new(
        targets: impl IntoIterator<Item = i64>,
        timing: CounterTiming,
    ) -> Result<Self, AnimationError> {
        let counters = targets
            .into_iter()
            .map(|target| CountUp::new(target, timing.steps()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { counters, timing })
    }

    pub fn timing(&self) -> CounterTiming {
        self.timing
    }

    /// Values currently on display, one per counter.
    pub fn current(&self) -> Vec<u64> {
        self.counters.iter().map(CountUp::current).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.counters.iter().all(CountUp::is_finished)
    }

    /// Advances every counter by one step and returns the new values, or
    /// `None` once the step budget is spent.
    pub fn tick(&mut self) -> Option<Vec<u64>> {
        if self.is_finished() {
            return None;
        }
        for counter in &mut self.counters {
            counter.next();
        }
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(target: i64, steps: u32) -> Vec<u64> {
        CountUp::new(target, steps).unwrap().collect()
    }

    #[test]
    fn test_final_value_is_exact() {
        let values = sequence(45_000, 80);
        assert_eq!(values.len(), 80);
        assert_eq!(values.last(), Some(&45_000));
    }

    #[test]
    fn test_sequences_are_non_decreasing() {
        for target in [0, 1, 7, 50, 200, 5_000, 45_000, 999_999_999] {
            for steps in [1, 3, 60, 80, 61] {
                let values = sequence(target, steps);
                assert_eq!(values.len(), steps as usize);
                assert!(values.windows(2).all(|w| w[0] <= w[1]), "{target}/{steps}");
                assert_eq!(*values.last().unwrap(), target as u64);
            }
        }
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 5 * 1 / 2 = 2.5 -> 3
        assert_eq!(sequence(5, 2), vec![3, 5]);
        // 50 * k / 60 at k = 3 is 2.5 -> 3
        assert_eq!(sequence(50, 60)[2], 3);
        // 1 * k / 4: 0.25, 0.5, 0.75, 1
        assert_eq!(sequence(1, 4), vec![0, 1, 1, 1]);
    }

    #[test]
    fn test_starts_at_zero() {
        let counter = CountUp::new(200, 60).unwrap();
        assert_eq!(counter.current(), 0);
        assert_eq!(counter.len(), 60);
    }

    #[test]
    fn test_not_restartable() {
        let mut counter = CountUp::new(10, 2).unwrap();
        assert_eq!(counter.by_ref().count(), 2);
        assert_eq!(counter.next(), None);
        assert_eq!(counter.current(), 10);
    }

    #[test]
    fn test_rejects_negative_target() {
        assert_eq!(CountUp::new(-1, 60), Err(AnimationError::NegativeTarget(-1)));
    }

    #[test]
    fn test_rejects_zero_steps_and_duration() {
        assert_eq!(CountUp::new(1, 0), Err(AnimationError::ZeroSteps));
        assert_eq!(CounterTiming::new(2000, 0), Err(AnimationError::ZeroSteps));
        assert_eq!(CounterTiming::new(0, 60), Err(AnimationError::ZeroDuration));
    }

    #[test]
    fn test_step_duration() {
        let timing = CounterTiming::new(2000, 60).unwrap();
        assert_eq!(timing.step_ms(), 33);
        assert_eq!(CounterTiming::new(10, 60).unwrap().step_ms(), 1);
    }

    #[test]
    fn test_group_lockstep() {
        let timing = CounterTiming::new(2000, 60).unwrap();
        let mut group = CounterGroup::new([50, 45_000, 200, 5_000], timing).unwrap();
        assert_eq!(group.current(), vec![0, 0, 0, 0]);

        let mut ticks = 0;
        let mut last = Vec::new();
        while let Some(values) = group.tick() {
            ticks += 1;
            last = values;
        }
        assert_eq!(ticks, 60);
        assert_eq!(last, vec![50, 45_000, 200, 5_000]);
        assert!(group.is_finished());
        assert_eq!(group.tick(), None);
    }

    #[test]
    fn test_group_halfway() {
        let timing = CounterTiming::new(2000, 60).unwrap();
        let mut group = CounterGroup::new([50, 45_000], timing).unwrap();
        for _ in 0..30 {
            group.tick();
        }
        assert_eq!(group.current(), vec![25, 22_500]);
    }

    #[test]
    fn test_group_refuses_bad_target() {
        let timing = CounterTiming::new(2000, 60).unwrap();
        let result = CounterGroup::new([50, -3, 200], timing);
        assert_eq!(result.unwrap_err(), AnimationError::NegativeTarget(-3));
    }
}
