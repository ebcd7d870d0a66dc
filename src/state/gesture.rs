//! Gesture normalization for the three navigation input channels

use std::time::{Duration, Instant};

/// A normalized navigation signal produced from raw device events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
}

/// Thresholds for gesture classification
#[derive(Debug, Clone, Copy)]
pub struct GestureConfig {
    /// Minimum vertical travel (device-independent pixels) for a swipe to
    /// count as step navigation rather than content scrolling
    pub swipe_threshold: f32,
    /// Minimum gap between accepted wheel transitions; one physical scroll
    /// gesture produces many wheel events, so without this a single swipe
    /// would skip several steps
    pub wheel_cooldown: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            wheel_cooldown: Duration::from_millis(600),
        }
    }
}

/// Converts raw swipe and wheel signals into at most one [`Intent`] per
/// physical user action.
///
/// Owns the transient per-channel state: the swipe origin while a gesture is
/// in progress, and the timestamp of the last accepted wheel transition.
/// Nothing here touches the sequencer; emitted intents route through the same
/// guarded navigation calls regardless of channel.
#[derive(Debug)]
pub struct InputArbiter {
    config: GestureConfig,
    swipe_start: Option<(f32, f32)>,
    last_wheel_accept: Option<Instant>,
}

impl InputArbiter {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            swipe_start: None,
            last_wheel_accept: None,
        }
    }

    /// Record the origin of a new swipe gesture, discarding any unfinished one
    pub fn swipe_start(&mut self, x: f32, y: f32) {
        self.swipe_start = Some((x, y));
    }

    /// Finish a swipe gesture and classify it.
    ///
    /// Deltas are origin minus end, so a swipe upward yields a positive
    /// vertical delta and maps to [`Intent::Advance`]. Horizontal-dominant or
    /// sub-threshold gestures are treated as content scrolling and ignored.
    pub fn swipe_end(&mut self, x: f32, y: f32) -> Option<Intent> {
        let (start_x, start_y) = self.swipe_start.take()?;
        let delta_x = start_x - x;
        let delta_y = start_y - y;

        if delta_y.abs() <= delta_x.abs() || delta_y.abs() <= self.config.swipe_threshold {
            return None;
        }

        if delta_y > 0.0 {
            Some(Intent::Advance)
        } else {
            Some(Intent::Retreat)
        }
    }

    /// Classify a wheel event.
    ///
    /// Vertical-dominant events are accepted only if the cooldown window has
    /// elapsed since the last accepted transition; positive vertical delta
    /// maps to [`Intent::Advance`].
    pub fn wheel(&mut self, delta_x: f32, delta_y: f32) -> Option<Intent> {
        self.wheel_at(delta_x, delta_y, Instant::now())
    }

    fn wheel_at(&mut self, delta_x: f32, delta_y: f32, now: Instant) -> Option<Intent> {
        if delta_y.abs() <= delta_x.abs() {
            return None;
        }

        if let Some(last) = self.last_wheel_accept {
            if now.duration_since(last) < self.config.wheel_cooldown {
                return None;
            }
        }

        let intent = if delta_y > 0.0 {
            Intent::Advance
        } else if delta_y < 0.0 {
            Intent::Retreat
        } else {
            return None;
        };

        self.last_wheel_accept = Some(now);
        Some(intent)
    }
}

impl Default for InputArbiter {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
