/// Monotonic per-instance frame clock.
///
/// The hosting driver advances this exactly once per rendered frame,
/// before the pixel pass runs. Elapsed time only grows; there is no
/// wraparound and no reset after construction. Single-precision
/// accumulation drift over very long sessions is accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    elapsed_seconds: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by the frame's time delta. Negative deltas are ignored to
    /// keep the clock monotone.
    pub fn advance(&mut self, delta_seconds: f32) {
        self.elapsed_seconds += delta_seconds.max(0.0);
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.elapsed_seconds(), 0.0);
        clock.advance(1.0 / 60.0);
        clock.advance(1.0 / 60.0);
        assert!((clock.elapsed_seconds() - 2.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut clock = FrameClock::new();
        clock.advance(0.5);
        clock.advance(-1.0);
        assert_eq!(clock.elapsed_seconds(), 0.5);
    }
}
