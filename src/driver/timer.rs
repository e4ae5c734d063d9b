//! Frame-rate cap and wall-clock interval timers
//!
//! Both take the host's frame timestamp (milliseconds) and never try to catch
//! up on missed time: a long gap yields at most one step or one firing.

/// Display callbacks jitter around their nominal period by a fraction of a
/// millisecond; a frame this close to due counts as due.
const JITTER_MS: f64 = 1.0;

/// Caps stepping to a target rate on top of a faster display callback
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FrameLimiter {
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval_ms: 1000.0 / f64::from(target_fps.max(1)),
            last_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Whether a step is due at `now_ms`. Consumes the slot if so.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return true;
        };

        let elapsed = now_ms - last;
        if elapsed < 0.0 {
            // Clock stepped backwards; restart the cadence here
            self.last_ms = Some(now_ms);
            return true;
        }
        if elapsed < self.interval_ms - JITTER_MS {
            return false;
        }
        // Keep the cadence aligned, drop any backlog
        let lag = if elapsed >= self.interval_ms {
            elapsed % self.interval_ms
        } else {
            0.0
        };
        self.last_ms = Some(now_ms - lag);
        true
    }

    /// Forget the previous frame; the next call to `ready` steps immediately
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Fires once every `period_ms` of wall-clock time
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_ms: f64,
    next_due_ms: Option<f64>,
}

impl IntervalTimer {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms,
            next_due_ms: None,
        }
    }

    /// Returns true when the period elapsed. The first poll only arms the timer.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.next_due_ms {
            None => {
                self.next_due_ms = Some(now_ms + self.period_ms);
                false
            }
            Some(due) if now_ms >= due => {
                self.next_due_ms = Some(now_ms + self.period_ms);
                true
            }
            // Clock stepped back before the arming time; start a fresh period
            Some(due) if now_ms < due - self.period_ms => {
                self.next_due_ms = Some(now_ms + self.period_ms);
                false
            }
            Some(_) => false,
        }
    }

    /// Disarm; the next poll starts a fresh period
    pub fn reset(&mut self) {
        self.next_due_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limiter_caps_rate() {
        let mut limiter = FrameLimiter::new(12);
        // One second of 60 Hz display frames
        let steps = (0..60)
            .filter(|i| limiter.ready(*i as f64 * 1000.0 / 60.0))
            .count();
        assert!((11..=13).contains(&steps), "got {steps} steps");
    }

    #[test]
    fn test_limiter_no_catch_up() {
        let mut limiter = FrameLimiter::new(12);
        assert!(limiter.ready(0.0));
        // Ten seconds later: one step, not a burst
        assert!(limiter.ready(10_000.0));
        assert!(!limiter.ready(10_001.0));
    }

    #[test]
    fn test_limiter_reset_steps_immediately() {
        let mut limiter = FrameLimiter::new(12);
        assert!(limiter.ready(0.0));
        assert!(!limiter.ready(10.0));
        limiter.reset();
        assert!(limiter.ready(20.0));
    }

    #[test]
    fn test_interval_fires_on_period() {
        let mut timer = IntervalTimer::new(3000.0);
        assert!(!timer.poll(0.0));
        assert!(!timer.poll(2999.0));
        assert!(timer.poll(3000.0));
        assert!(!timer.poll(3001.0));
        assert!(timer.poll(6000.0));
    }

    #[test]
    fn test_interval_fires_once_after_long_gap() {
        let mut timer = IntervalTimer::new(3000.0);
        timer.poll(0.0);
        assert!(timer.poll(60_000.0));
        assert!(!timer.poll(60_016.0));
    }

    #[test]
    fn test_limiter_tolerates_display_jitter() {
        let mut limiter = FrameLimiter::new(60);
        let mut now = 0.0;
        let mut steps = 0;
        for i in 0..60 {
            if limiter.ready(now) {
                steps += 1;
            }
            now += if i % 2 == 0 { 16.6 } else { 16.7 };
        }
        assert_eq!(steps, 60);
    }

    #[test]
    fn test_limiter_recovers_from_clock_step_back() {
        let mut limiter = FrameLimiter::new(12);
        assert!(limiter.ready(1_000_000.0));
        let stepped = (0..600)
            .filter(|i| limiter.ready(940_000.0 + f64::from(*i) * 1000.0 / 60.0))
            .count();
        assert!((110..=125).contains(&stepped), "got {stepped} steps");
    }

    #[test]
    fn test_interval_recovers_from_clock_step_back() {
        let mut timer = IntervalTimer::new(3000.0);
        timer.poll(1_000_000.0);
        let fired = (0..600)
            .filter(|i| timer.poll(940_000.0 + f64::from(*i) * 1000.0 / 60.0))
            .count();
        assert_eq!(fired, 3);
    }
}
