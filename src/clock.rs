use std::time::Instant;

/// Monotonic elapsed-time source for the animation pass.
/// Elapsed seconds never decrease while the clock is running.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Seconds since the clock was created
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Elapsed time as an animation sample. Always `Some` for a wall
    /// clock; the `Option` is the contract the animation pass consumes,
    /// so a missing sample freezes the frame instead of erroring.
    pub fn sample(&self) -> Option<f32> {
        Some(self.elapsed())
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        // Should be roughly 10ms = 0.01s
        assert!(delta >= 0.009 && delta <= 0.050);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let clock = Clock::new();

        let a = clock.elapsed();
        thread::sleep(Duration::from_millis(5));
        let b = clock.elapsed();

        assert!(b >= a, "elapsed time must never decrease");
    }

    #[test]
    fn sample_yields_elapsed() {
        let clock = Clock::new();
        let sample = clock.sample().expect("wall clock always samples");
        assert!(sample >= 0.0);
    }
}
