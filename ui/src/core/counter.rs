//! Count-up animation schedule for the statistics in the about section.

pub const DEFAULT_DURATION_MS: u64 = 2000;
pub const DEFAULT_STEPS: u32 = 60;

/// Animates a displayed number from 0 to `target` in `steps` equal increments
/// spread over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub target: u64,
    pub duration_ms: u64,
    pub steps: u32,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_DURATION_MS,
            steps: DEFAULT_STEPS,
        }
    }

    /// The `steps` frames of the run, in order. Frame `n` shows
    /// `target * n / steps` and fires `duration_ms * n / steps` ms after the
    /// start, so the delays add up to exactly `duration_ms` and the last frame
    /// shows exactly `target`. A zero step count behaves like a single step.
    pub fn frames(&self) -> CounterFrames {
        CounterFrames {
            target: self.target,
            duration_ms: self.duration_ms,
            steps: u64::from(self.steps.max(1)),
            step: 0,
        }
    }
}

/// One tick of a [`CounterAnimation`]: wait `delay_ms`, then show `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrame {
    pub delay_ms: u64,
    pub value: u64,
}

#[derive(Debug, Clone)]
pub struct CounterFrames {
    target: u64,
    duration_ms: u64,
    steps: u64,
    step: u64,
}

/// `total * n / steps` without intermediate overflow.
fn share(total: u64, n: u64, steps: u64) -> u64 {
    (u128::from(total) * u128::from(n) / u128::from(steps)) as u64
}

impl Iterator for CounterFrames {
    type Item = CounterFrame;

    fn next(&mut self) -> Option<CounterFrame> {
        if self.step >= self.steps {
            return None;
        }
        let previous = self.step;
        self.step += 1;
        Some(CounterFrame {
            delay_ms: share(self.duration_ms, self.step, self.steps)
                - share(self.duration_ms, previous, self.steps),
            value: share(self.target, self.step, self.steps),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.steps - self.step).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(animation: CounterAnimation) -> Vec<u64> {
        animation.frames().map(|frame| frame.value).collect()
    }

    #[test]
    fn runs_exactly_the_configured_steps() {
        for target in [500, 1000, 1997] {
            let frames = values(CounterAnimation::new(target));
            assert_eq!(frames.len(), 60, "target {target}");
            assert_eq!(frames.last().copied(), Some(target));
            assert!(frames[..59].iter().all(|v| *v < target), "target {target}");
        }
    }

    #[test]
    fn frame_values_floor_the_linear_ramp() {
        let frames = values(CounterAnimation::new(500));
        assert_eq!(frames[0], 8);
        assert_eq!(frames[29], 250);
        assert_eq!(frames[58], 491);
    }

    #[test]
    fn frames_never_decrease() {
        for target in [1, 7, 500, 1000, 1997] {
            let frames = values(CounterAnimation::new(target));
            assert!(frames.windows(2).all(|w| w[0] <= w[1]), "target {target}");
            assert!(frames.iter().all(|v| *v <= target));
            assert_eq!(frames.last().copied(), Some(target));
        }
    }

    #[test]
    fn delays_add_up_to_the_duration() {
        let delays: Vec<u64> = CounterAnimation::new(500)
            .frames()
            .map(|frame| frame.delay_ms)
            .collect();
        assert_eq!(delays.iter().sum::<u64>(), DEFAULT_DURATION_MS);
        assert!(delays.iter().all(|d| *d == 33 || *d == 34), "{delays:?}");
    }

    #[test]
    fn zero_target_stays_at_zero() {
        let frames = values(CounterAnimation::new(0));
        assert_eq!(frames.len(), 60);
        assert!(frames.iter().all(|v| *v == 0));
    }

    #[test]
    fn zero_steps_jumps_to_target() {
        let animation = CounterAnimation {
            target: 42,
            duration_ms: 2000,
            steps: 0,
        };
        let frames: Vec<_> = animation.frames().collect();
        assert_eq!(
            frames,
            vec![CounterFrame {
                delay_ms: 2000,
                value: 42
            }]
        );
    }
}
