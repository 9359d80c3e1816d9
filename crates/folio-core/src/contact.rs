//! Contact form bookkeeping with a locally simulated submission.

use crate::constants::{SUBMIT_DELAY, SUCCESS_NOTICE_DURATION};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

pub const FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

impl Field {
    /// Form control `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        FIELDS.iter().copied().find(|f| f.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    values: [String; 4],
    phase: SubmitPhase,
    elapsed: Duration,
    revision: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            values: Default::default(),
            phase: SubmitPhase::Idle,
            elapsed: Duration::ZERO,
            revision: 0,
        }
    }
}

fn slot(field: Field) -> usize {
    match field {
        Field::Name => 0,
        Field::Email => 1,
        Field::Subject => 2,
        Field::Message => 3,
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        &self.values[slot(field)]
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        let v = &mut self.values[slot(field)];
        v.clear();
        v.push_str(value);
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Bumped whenever the fields are cleared, so views can reset their inputs.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Every field filled in and the email looks like one.
    pub fn is_complete(&self) -> bool {
        FIELDS.iter().all(|&f| !self.field(f).trim().is_empty())
            && self.field(Field::Email).contains('@')
    }

    /// Start a submission. Ignored while one is in flight or when incomplete.
    pub fn submit(&mut self) -> bool {
        if self.phase != SubmitPhase::Idle || !self.is_complete() {
            return false;
        }
        log::info!("[contact] submitting message (simulated)");
        self.phase = SubmitPhase::Submitting;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Advance the simulated submission. Returns true when the phase changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let limit = match self.phase {
            SubmitPhase::Idle => return false,
            SubmitPhase::Submitting => SUBMIT_DELAY,
            SubmitPhase::Submitted => SUCCESS_NOTICE_DURATION,
        };
        self.elapsed += dt;
        if self.elapsed < limit {
            return false;
        }
        self.elapsed = Duration::ZERO;
        self.phase = match self.phase {
            SubmitPhase::Submitting => {
                for v in &mut self.values {
                    v.clear();
                }
                self.revision += 1;
                SubmitPhase::Submitted
            }
            _ => SubmitPhase::Idle,
        };
        true
    }
}
