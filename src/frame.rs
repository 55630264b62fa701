use std::time::Duration;

use crate::traits::TimeSource;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the timer was created
    pub time: f32,
    /// Seconds since the previous tick
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Derives elapsed and delta time per frame from an injected clock
#[derive(Debug, Clone)]
pub struct FrameTimer<C: TimeSource> {
    clock: C,
    first: Duration,
    last: Duration,
    frame_number: u64,
}

impl<C: TimeSource> FrameTimer<C> {
    /// The first reading is taken now
    pub fn new(clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            first: now,
            last: now,
            frame_number: 0,
        }
    }

    /// Read the clock and advance to the next frame
    pub fn tick(&mut self) -> FrameInfo {
        // Tolerate a clock that steps backwards rather than producing negative time
        let now = self.clock.now().max(self.last);
        let info = FrameInfo::new(
            self.frame_number,
            (now - self.first).as_secs_f32(),
            (now - self.last).as_secs_f32(),
        );

        self.frame_number += 1;
        self.last = now;
        info
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Seconds from the first reading to the latest tick
    pub fn elapsed(&self) -> f32 {
        (self.last - self.first).as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::ManualClock;

    #[test]
    fn first_tick_measures_from_construction() {
        let clock = ManualClock::starting_at(Duration::from_secs(100));
        let mut timer = FrameTimer::new(clock.clone());

        clock.advance(Duration::from_millis(500));
        let frame = timer.tick();

        assert_eq!(frame.number, 0);
        assert!((frame.time - 0.5).abs() < 1e-6);
        assert!((frame.delta - 0.5).abs() < 1e-6);
    }

    #[test]
    fn delta_and_time_across_ticks() {
        let clock = ManualClock::new();
        let mut timer = FrameTimer::new(clock.clone());

        clock.advance(Duration::from_millis(16));
        let a = timer.tick();
        clock.advance(Duration::from_millis(16));
        let b = timer.tick();

        assert!((b.delta - 0.016).abs() < 1e-6);
        assert!(b.time > a.time);
        assert_eq!(b.number, 1);
        assert_eq!(timer.frame_number(), 2);
        assert!((timer.elapsed() - 0.032).abs() < 1e-6);
    }

    #[test]
    fn backwards_clock_yields_zero_delta() {
        let clock = ManualClock::starting_at(Duration::from_secs(5));
        let mut timer = FrameTimer::new(clock.clone());

        clock.set(Duration::from_secs(4));
        let frame = timer.tick();
        assert_eq!(frame.delta, 0.0);
        assert_eq!(frame.time, 0.0);
    }
}
