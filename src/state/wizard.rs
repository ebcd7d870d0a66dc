//! Linear step state machine for the wizard

/// Finite state machine over the ordered step list.
///
/// Sole source of truth for `current_index`, `submitting` and `submitted`.
/// States are positions `0..step_count`, plus a terminal submitted state
/// reachable only from the last index via `try_begin_submit` /
/// `complete_submit`.
#[derive(Debug)]
pub struct StepSequencer {
    step_count: usize,
    current_index: usize,
    submitting: bool,
    submitted: bool,
}

impl StepSequencer {
    pub fn new(step_count: usize) -> Self {
        Self {
            step_count,
            current_index: 0,
            submitting: false,
            submitted: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.step_count
    }

    /// All navigation is blocked while a submission is in flight and after
    /// the terminal state is reached.
    fn navigation_locked(&self) -> bool {
        self.submitting || self.submitted
    }

    /// Jump directly to a step. Clamps out-of-range indices and applies no
    /// validation gate: backward and arbitrary jumps (nav-bar clicks) are
    /// always allowed while navigation is unlocked.
    ///
    /// Returns the new index, or `None` if navigation is locked.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if self.navigation_locked() || self.step_count == 0 {
            return None;
        }
        self.current_index = index.min(self.step_count - 1);
        Some(self.current_index)
    }

    /// Advance by exactly one step. No-op unless the current step is valid,
    /// there is a next step, and navigation is unlocked.
    pub fn go_next(&mut self, step_valid: bool) -> Option<usize> {
        if self.navigation_locked() || !step_valid || self.is_last() {
            return None;
        }
        self.current_index += 1;
        Some(self.current_index)
    }

    /// Retreat by exactly one step. No-op at index 0 or while locked.
    pub fn go_back(&mut self) -> Option<usize> {
        if self.navigation_locked() || self.current_index == 0 {
            return None;
        }
        self.current_index -= 1;
        Some(self.current_index)
    }

    /// Begin a submission attempt. Succeeds only on the last step with a
    /// valid record and no submission already in flight; the flag guards
    /// against double triggers (pointer click plus Enter).
    pub fn try_begin_submit(&mut self, step_valid: bool) -> bool {
        if self.navigation_locked() || !step_valid || !self.is_last() {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Finish the in-flight submission and enter the terminal state. Both
    /// sink success and sink failure land here in current scope.
    pub fn complete_submit(&mut self) {
        self.submitting = false;
        self.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sequencer() -> StepSequencer {
        StepSequencer::new(6)
    }

    mod go_next {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_advances_by_one_when_valid() {
            let mut seq = sequencer();
            assert_eq!(seq.go_next(true), Some(1));
            assert_eq!(seq.current_index(), 1);
        }

        #[test]
        fn test_blocked_by_invalid_step() {
            let mut seq = sequencer();
            assert_eq!(seq.go_next(false), None);
            assert_eq!(seq.current_index(), 0);
        }

        #[test]
        fn test_never_exceeds_last_index() {
            let mut seq = sequencer();
            for _ in 0..10 {
                seq.go_next(true);
            }
            assert_eq!(seq.current_index(), 5);
            assert_eq!(seq.go_next(true), None);
        }

        #[test]
        fn test_blocked_while_submitting() {
            let mut seq = sequencer();
            seq.go_to(5);
            assert!(seq.try_begin_submit(true));
            assert_eq!(seq.go_next(true), None);
        }
    }

    mod go_back {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_noop_at_index_zero() {
            let mut seq = sequencer();
            assert_eq!(seq.go_back(), None);
            assert_eq!(seq.current_index(), 0);
        }

        #[test]
        fn test_retreats_by_one() {
            let mut seq = sequencer();
            seq.go_to(3);
            assert_eq!(seq.go_back(), Some(2));
        }

        #[test]
        fn test_blocked_while_submitting() {
            let mut seq = sequencer();
            seq.go_to(5);
            assert!(seq.try_begin_submit(true));
            assert_eq!(seq.go_back(), None);
            assert_eq!(seq.current_index(), 5);
        }
    }

    mod go_to {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_reaches_any_valid_index_without_validation() {
            let mut seq = sequencer();
            for k in [5, 0, 3, 1] {
                assert_eq!(seq.go_to(k), Some(k));
                assert_eq!(seq.current_index(), k);
            }
        }

        #[test]
        fn test_out_of_range_clamps_to_last() {
            let mut seq = sequencer();
            assert_eq!(seq.go_to(100), Some(5));
        }

        #[test]
        fn test_blocked_after_submission() {
            let mut seq = sequencer();
            seq.go_to(5);
            assert!(seq.try_begin_submit(true));
            seq.complete_submit();
            assert_eq!(seq.go_to(2), None);
            assert_eq!(seq.current_index(), 5);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_requires_last_step() {
            let mut seq = sequencer();
            assert!(!seq.try_begin_submit(true));
            seq.go_to(5);
            assert!(seq.try_begin_submit(true));
        }

        #[test]
        fn test_requires_valid_step() {
            let mut seq = sequencer();
            seq.go_to(5);
            assert!(!seq.try_begin_submit(false));
            assert!(!seq.is_submitting());
        }

        #[test]
        fn test_second_begin_while_in_flight_is_rejected() {
            let mut seq = sequencer();
            seq.go_to(5);
            assert!(seq.try_begin_submit(true));
            assert!(!seq.try_begin_submit(true));
        }

        #[test]
        fn test_complete_enters_terminal_state() {
            let mut seq = sequencer();
            seq.go_to(5);
            assert!(seq.try_begin_submit(true));
            seq.complete_submit();
            assert!(!seq.is_submitting());
            assert!(seq.is_submitted());
        }

        #[test]
        fn test_terminal_state_blocks_resubmission() {
            let mut seq = sequencer();
            seq.go_to(5);
            assert!(seq.try_begin_submit(true));
            seq.complete_submit();
            assert!(!seq.try_begin_submit(true));
        }
    }

    mod edge_cases {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_single_step_wizard() {
            let mut seq = StepSequencer::new(1);
            assert!(seq.is_last());
            assert_eq!(seq.go_next(true), None);
            assert!(seq.try_begin_submit(true));
        }

        #[test]
        fn test_empty_wizard_locks_navigation() {
            let mut seq = StepSequencer::new(0);
            assert_eq!(seq.go_to(0), None);
            assert!(!seq.try_begin_submit(true));
        }
    }
}
