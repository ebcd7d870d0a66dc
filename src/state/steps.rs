//! Step and field definitions for the lead-capture funnel

/// Input kind for a step field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    ShortText,
    Email,
    LongText,
}

impl FieldKind {
    /// Whether the field renders as a multi-line input
    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::LongText)
    }
}

/// A single input within a step, bound to one key in the answer record
#[derive(Debug, Clone)]
pub struct StepField {
    /// Unique key into the answer record
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub kind: FieldKind,
    pub required: bool,
}

impl StepField {
    pub fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            placeholder: None,
            kind,
            required: true,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// One screen/question unit in the linear wizard
#[derive(Debug, Clone)]
pub struct Step {
    /// 1-indexed step id, shown in the progress marker
    pub id: usize,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    /// Short label used in the top navigation bar
    pub nav_label: &'static str,
    pub fields: Vec<StepField>,
}

/// The static funnel schema: 6 steps, one required field each.
///
/// This list is the only schema the controllers depend on; swapping it out
/// does not touch sequencer or arbiter logic.
pub fn funnel_steps() -> Vec<Step> {
    vec![
        Step {
            id: 1,
            title: "Who's thinking about upgrading their water?",
            subtitle: Some(
                "Greetings, friend. Before we take further steps to improve \
                 your water quality, what is your name?",
            ),
            nav_label: "You",
            fields: vec![
                StepField::required("name", "Name", FieldKind::ShortText)
                    .with_placeholder("John Doe"),
            ],
        },
        Step {
            id: 2,
            title: "Where can I send everything?",
            subtitle: Some(
                "I'll use this to send you details, demos, and a breakdown of \
                 which ionizer options make sense for you. No spam.",
            ),
            nav_label: "Contact",
            fields: vec![
                StepField::required("email", "Best email", FieldKind::Email)
                    .with_placeholder("you@example.com"),
            ],
        },
        Step {
            id: 3,
            title: "Why are you looking into ionized water?",
            subtitle: Some(
                "Everyone has a different reason: health, recovery, family, \
                 performance, business. What made you start looking?",
            ),
            nav_label: "Why ionized?",
            fields: vec![
                StepField::required("goal", "Main reason you're looking into it", FieldKind::LongText)
                    .with_placeholder(
                        "e.g. energy & recovery, family health, replacing bottled water, \
                         adding value to a clinic or gym...",
                    ),
            ],
        },
        Step {
            id: 4,
            title: "What's your water situation right now?",
            subtitle: Some(
                "Tap, bottled, filter, RO, another ionizer. This helps me \
                 compare things properly for you.",
            ),
            nav_label: "Current Water",
            fields: vec![
                StepField::required("current_situation", "Current setup", FieldKind::LongText)
                    .with_placeholder(
                        "e.g. supermarket bottled water, basic under-sink filter, RO system, \
                         sharehouse tap, already tried another brand of ionizer...",
                    ),
            ],
        },
        Step {
            id: 5,
            title: "Where do you want ionized water in your life?",
            subtitle: Some(
                "Home, family, office, clinic, gym. The use-case affects which \
                 machine is the best fit.",
            ),
            nav_label: "Use-case",
            fields: vec![
                StepField::required("use_case", "Primary use-case & who it's for", FieldKind::ShortText)
                    .with_placeholder(
                        "e.g. home use for 2 adults + 2 kids, clinic clients, gym members, \
                         office staff, content/testing only...",
                    ),
            ],
        },
        Step {
            id: 6,
            title: "What kind of investment range are you considering?",
            subtitle: Some(
                "This isn't a commitment. It just helps me point you toward \
                 the right model and payment options.",
            ),
            nav_label: "Budget",
            fields: vec![
                StepField::required("budget", "Budget range", FieldKind::ShortText)
                    .with_placeholder(
                        "e.g. 3-4k, 4-6k, higher if it makes sense, would need a payment plan, \
                         not sure yet...",
                    ),
            ],
        },
    ]
}
