//! State management modules

mod answers;
mod gesture;
mod steps;
mod viewport;
mod wizard;

pub use answers::AnswerRecord;
pub use gesture::{GestureConfig, InputArbiter, Intent};
pub use steps::{funnel_steps, FieldKind, Step, StepField};
pub use viewport::ViewportSync;
pub use wizard::StepSequencer;
