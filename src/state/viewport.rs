//! Horizontal viewport offset, animated to follow the active step

use std::time::{Duration, Instant};

/// In-flight scroll animation between two offsets
#[derive(Debug)]
struct ScrollAnim {
    from: f32,
    to: f32,
    started: Instant,
}

/// Keeps the visual scroll offset consistent with the sequencer's index.
///
/// One-way authority: the logical index drives the offset; raw scroll input
/// never writes the offset directly. Sections are uniform-width and laid out
/// contiguously, so the target offset for step `k` is `section_width * k`.
#[derive(Debug)]
pub struct ViewportSync {
    section_width: Option<f32>,
    offset: f32,
    anim: Option<ScrollAnim>,
    /// Index requested before the viewport was measurable
    pending_index: Option<usize>,
    /// Last index the viewport was asked to track, for resize retargeting
    tracked_index: usize,
}

impl ViewportSync {
    /// Duration of the eased scroll between sections
    const SCROLL_DURATION: Duration = Duration::from_millis(400);

    pub fn new() -> Self {
        Self {
            section_width: None,
            offset: 0.0,
            anim: None,
            pending_index: None,
            tracked_index: 0,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Record the measured section width.
    ///
    /// Resolves any index parked before first layout by snapping straight to
    /// it (nothing was on screen yet, so there is nothing to animate from).
    /// A changed width retargets the tracked index without animation, which
    /// covers terminal resizes mid-session.
    pub fn set_section_width(&mut self, width: f32) {
        if width <= 0.0 {
            return;
        }
        let changed = self.section_width != Some(width);
        self.section_width = Some(width);

        if let Some(index) = self.pending_index.take() {
            self.tracked_index = index;
            self.offset = width * index as f32;
            self.anim = None;
        } else if changed {
            self.offset = width * self.tracked_index as f32;
            self.anim = None;
        }
    }

    /// Animate the viewport toward the given step index. Deferred until the
    /// first width measurement if the viewport is not yet measurable.
    pub fn scroll_to_index(&mut self, index: usize) {
        self.tracked_index = index;
        match self.section_width {
            None => self.pending_index = Some(index),
            Some(width) => self.start_anim(width * index as f32),
        }
    }

    /// Animate back to the start position after submission; the terminal
    /// view replaces the step list entirely, regardless of step count.
    pub fn reset(&mut self) {
        self.tracked_index = 0;
        self.pending_index = None;
        if self.section_width.is_some() {
            self.start_anim(0.0);
        } else {
            self.offset = 0.0;
        }
    }

    fn start_anim(&mut self, target: f32) {
        if (self.offset - target).abs() < f32::EPSILON {
            self.anim = None;
            return;
        }
        self.anim = Some(ScrollAnim {
            from: self.offset,
            to: target,
            started: Instant::now(),
        });
    }

    /// Advance the animation; call once per render frame
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    fn update_at(&mut self, now: Instant) {
        let Some(ref anim) = self.anim else {
            return;
        };
        let elapsed = now.saturating_duration_since(anim.started);
        if elapsed >= Self::SCROLL_DURATION {
            self.offset = anim.to;
            self.anim = None;
            return;
        }
        let progress = elapsed.as_secs_f32() / Self::SCROLL_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        self.offset = anim.from + (anim.to - anim.from) * eased;
    }
}

impl Default for ViewportSync {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_starts_at_origin() {
        let viewport = ViewportSync::new();
        assert_eq!(viewport.offset(), 0.0);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_scroll_before_measurement_is_deferred() {
        let mut viewport = ViewportSync::new();
        viewport.scroll_to_index(3);
        // No width yet: no crash, no movement
        assert_eq!(viewport.offset(), 0.0);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_first_measurement_resolves_pending_index() {
        let mut viewport = ViewportSync::new();
        viewport.scroll_to_index(3);
        viewport.set_section_width(80.0);
        assert_eq!(viewport.offset(), 240.0);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_scroll_after_measurement_animates() {
        let mut viewport = ViewportSync::new();
        viewport.set_section_width(80.0);
        viewport.scroll_to_index(2);
        assert!(viewport.is_animating());
    }

    #[test]
    fn test_animation_converges_to_target() {
        let mut viewport = ViewportSync::new();
        viewport.set_section_width(80.0);
        viewport.scroll_to_index(2);
        let later = Instant::now() + ViewportSync::SCROLL_DURATION;
        viewport.update_at(later);
        assert_eq!(viewport.offset(), 160.0);
        assert!(!viewport.is_animating());
    }

    #[test]
    fn test_midway_offset_is_between_endpoints() {
        let mut viewport = ViewportSync::new();
        viewport.set_section_width(100.0);
        viewport.scroll_to_index(1);
        let start = viewport.anim.as_ref().map(|a| a.started).unwrap();
        viewport.update_at(start + ViewportSync::SCROLL_DURATION / 2);
        assert!(viewport.offset() > 0.0);
        assert!(viewport.offset() < 100.0);
        assert!(viewport.is_animating());
    }

    #[test]
    fn test_reset_animates_back_to_origin() {
        let mut viewport = ViewportSync::new();
        viewport.set_section_width(80.0);
        viewport.scroll_to_index(5);
        viewport.update_at(Instant::now() + ViewportSync::SCROLL_DURATION);
        assert_eq!(viewport.offset(), 400.0);

        viewport.reset();
        assert!(viewport.is_animating());
        viewport.update_at(Instant::now() + ViewportSync::SCROLL_DURATION);
        assert_eq!(viewport.offset(), 0.0);
    }

    #[test]
    fn test_reset_before_measurement_does_not_crash() {
        let mut viewport = ViewportSync::new();
        viewport.scroll_to_index(4);
        viewport.reset();
        assert_eq!(viewport.offset(), 0.0);
        // A later measurement must not resurrect the parked index
        viewport.set_section_width(80.0);
        assert_eq!(viewport.offset(), 0.0);
    }

    #[test]
    fn test_zero_width_is_ignored() {
        let mut viewport = ViewportSync::new();
        viewport.scroll_to_index(2);
        viewport.set_section_width(0.0);
        assert_eq!(viewport.offset(), 0.0);
        viewport.set_section_width(80.0);
        assert_eq!(viewport.offset(), 160.0);
    }

    #[test]
    fn test_resize_retargets_tracked_index() {
        let mut viewport = ViewportSync::new();
        viewport.set_section_width(80.0);
        viewport.scroll_to_index(2);
        viewport.update_at(Instant::now() + ViewportSync::SCROLL_DURATION);
        viewport.set_section_width(100.0);
        assert_eq!(viewport.offset(), 200.0);
    }

    #[test]
    fn test_scroll_to_current_position_is_noop() {
        let mut viewport = ViewportSync::new();
        viewport.set_section_width(80.0);
        viewport.scroll_to_index(0);
        assert!(!viewport.is_animating());
    }
}
