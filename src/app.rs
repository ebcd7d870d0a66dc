//! Application state and core logic

use crate::config::TuiConfig;
use crate::lead::{LeadClient, LeadSink};
use crate::state::{
    funnel_steps, AnswerRecord, InputArbiter, Intent, Step, StepSequencer, ViewportSync,
};
use crate::ui::{navbar, wizard};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

/// Approximate size of one terminal cell in device-independent pixels, used
/// to feed the gesture arbiter in the units its thresholds are defined in
const CELL_WIDTH_PX: f32 = 8.0;
const CELL_HEIGHT_PX: f32 = 16.0;

/// Vertical travel one wheel tick represents
const WHEEL_LINE_PX: f32 = 20.0;

/// Main application struct.
///
/// Owns the whole session: schema, answers, sequencer, gesture arbiter,
/// viewport and sink. One instance per session, no shared state.
pub struct App {
    /// Immutable funnel schema
    pub steps: Vec<Step>,
    /// Current answer record
    pub answers: AnswerRecord,
    /// Step state machine, sole authority over index and submit flags
    pub sequencer: StepSequencer,
    /// Gesture normalization for swipe and wheel channels
    pub arbiter: InputArbiter,
    /// Visual scroll offset, driven by the sequencer
    pub viewport: ViewportSync,
    /// Submission sink
    sink: Box<dyn LeadSink>,
    /// Field receiving text input within the current step
    active_field: usize,
    /// A submission was accepted but the sink has not run yet
    pending_submit: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App wired to the stub lead client
    pub fn new(config: &TuiConfig) -> Self {
        let sink = Box::new(LeadClient::new(config.lead_endpoint.clone()));
        Self::with_sink(funnel_steps(), config, sink)
    }

    pub fn with_sink(steps: Vec<Step>, config: &TuiConfig, sink: Box<dyn LeadSink>) -> Self {
        let answers = AnswerRecord::new(&steps);
        let sequencer = StepSequencer::new(steps.len());
        Self {
            steps,
            answers,
            sequencer,
            arbiter: InputArbiter::new(config.gesture_config()),
            viewport: ViewportSync::new(),
            sink,
            active_field: 0,
            pending_submit: false,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn active_field(&self) -> usize {
        self.active_field
    }

    /// Record the current viewport width and advance the scroll animation;
    /// called once per render frame before drawing
    pub fn tick(&mut self, terminal_width: u16) {
        self.viewport.set_section_width(terminal_width as f32);
        self.viewport.update();
    }

    fn current_step(&self) -> Option<&Step> {
        self.steps.get(self.sequencer.current_index())
    }

    fn step_valid(&self) -> bool {
        self.current_step()
            .is_some_and(|step| self.answers.is_step_valid(step))
    }

    /// Route a normalized intent through the sequencer's guarded calls; all
    /// input channels converge here, so the validation gate applies uniformly
    fn apply_intent(&mut self, intent: Intent) {
        let moved = match intent {
            Intent::Advance => self.sequencer.go_next(self.step_valid()),
            Intent::Retreat => self.sequencer.go_back(),
        };
        if let Some(index) = moved {
            self.active_field = 0;
            self.viewport.scroll_to_index(index);
        }
    }

    /// Jump directly to a step (nav-bar click); bypasses validation
    fn jump_to(&mut self, index: usize) {
        if let Some(index) = self.sequencer.go_to(index) {
            self.active_field = 0;
            self.viewport.scroll_to_index(index);
        }
    }

    /// Accept a submission attempt. The sequencer's begin guard makes this
    /// idempotent against double triggers. The sink itself runs later, from
    /// the event loop, so a frame showing the in-flight state reaches the
    /// screen before the hand-off blocks on the endpoint.
    fn request_submit(&mut self) {
        if self.sequencer.try_begin_submit(self.step_valid()) {
            self.pending_submit = true;
        }
    }

    /// Run an accepted submission; no-op when none is pending. Both sink
    /// outcomes proceed to the terminal state in current scope.
    pub async fn process_pending_submit(&mut self) {
        if !self.pending_submit {
            return;
        }
        self.pending_submit = false;
        let lead = self.answers.to_lead();
        tracing::info!(lead_id = %lead.id, "beginning lead submission");
        if let Err(err) = self.sink.submit_lead(lead).await {
            tracing::warn!("lead submission failed, continuing to confirmation: {err}");
        }
        self.sequencer.complete_submit();
        self.viewport.reset();
        tracing::info!("lead submission complete");
    }

    /// Advance on Enter, or begin submission when on the last step
    fn advance_or_submit(&mut self) {
        if self.sequencer.is_last() {
            self.request_submit();
        } else {
            self.apply_intent(Intent::Advance);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.sequencer.is_submitted() {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                self.quit = true;
            }
            return Ok(());
        }

        // Text entry is frozen while the submission is in flight
        if self.sequencer.is_submitting() {
            return Ok(());
        }

        match key.code {
            // Enter never reaches field editing: it is always a navigation
            // or submit command, even inside a long-text field
            KeyCode::Enter => self.advance_or_submit(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => {
                if let Some(step) = self.current_step() {
                    if !step.fields.is_empty() {
                        self.active_field = (self.active_field + 1) % step.fields.len();
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(name) = self.active_field_name() {
                    self.answers.pop_char(name);
                }
            }
            KeyCode::Char(c) => {
                if let Some(name) = self.active_field_name() {
                    self.answers.push_char(name, c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn active_field_name(&self) -> Option<&'static str> {
        self.current_step()
            .and_then(|step| step.fields.get(self.active_field))
            .map(|field| field.name)
    }

    /// Handle a mouse event
    pub fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        frame_width: u16,
        frame_height: u16,
    ) -> Result<()> {
        if self.sequencer.is_submitted() {
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if mouse.row == 0 {
                    if let Some(target) =
                        navbar::nav_target_at(mouse.column, frame_width, self.steps.len())
                    {
                        self.jump_to(target);
                    }
                    return Ok(());
                }
                match wizard::control_at(mouse.column, mouse.row, frame_width, frame_height) {
                    Some(wizard::Control::Back) => self.apply_intent(Intent::Retreat),
                    Some(wizard::Control::Forward) => self.advance_or_submit(),
                    None => {
                        // Not a command target: begin swipe tracking
                        self.arbiter.swipe_start(
                            mouse.column as f32 * CELL_WIDTH_PX,
                            mouse.row as f32 * CELL_HEIGHT_PX,
                        );
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let intent = self.arbiter.swipe_end(
                    mouse.column as f32 * CELL_WIDTH_PX,
                    mouse.row as f32 * CELL_HEIGHT_PX,
                );
                if let Some(intent) = intent {
                    self.apply_intent(intent);
                }
            }
            // Wheel toward the user reads as scrolling down the page, which
            // maps to positive vertical delta and an advance
            MouseEventKind::ScrollDown => {
                if let Some(intent) = self.arbiter.wheel(0.0, WHEEL_LINE_PX) {
                    self.apply_intent(intent);
                }
            }
            MouseEventKind::ScrollUp => {
                if let Some(intent) = self.arbiter.wheel(0.0, -WHEEL_LINE_PX) {
                    self.apply_intent(intent);
                }
            }
            _ => {}
        }
        Ok(())
    }
}
