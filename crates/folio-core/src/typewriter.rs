//! Character-by-character text reveal and the hero's rotating role line.

use crate::constants::{HERO_TYPEWRITER_INTERVAL, ROLE_PERIOD, TYPEWRITER_INTERVAL};
use std::time::Duration;

/// Reveals `text` one character per `interval`.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    // byte offset of every char boundary after the first, plus text.len()
    boundaries: Vec<usize>,
    revealed: usize,
    interval: Duration,
    accum: Duration,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        let mut tw = Self {
            text: String::new(),
            boundaries: Vec::new(),
            revealed: 0,
            interval,
            accum: Duration::ZERO,
        };
        tw.reset_to(text.into());
        tw
    }

    pub fn with_default_interval(text: impl Into<String>) -> Self {
        Self::new(text, TYPEWRITER_INTERVAL)
    }

    fn reset_to(&mut self, text: String) {
        self.boundaries = text
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        if text.is_empty() {
            self.boundaries.clear();
        }
        self.text = text;
        self.revealed = 0;
        self.accum = Duration::ZERO;
    }

    /// Replace the text. A different string restarts the reveal from empty.
    pub fn set_text(&mut self, text: &str) {
        if text != self.text {
            self.reset_to(text.to_owned());
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.boundaries.len()
    }

    pub fn revealed_chars(&self) -> usize {
        self.revealed
    }

    /// Currently revealed prefix.
    pub fn visible(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.text[..self.boundaries[n - 1]],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.boundaries.len()
    }

    /// The blinking caret shows until the last character is out.
    pub fn caret_visible(&self) -> bool {
        !self.is_complete()
    }

    /// Advance time. Returns true when more text became visible.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.is_complete() {
            return false;
        }
        if self.interval.is_zero() {
            self.revealed = self.boundaries.len();
            return true;
        }
        self.accum += dt;
        let before = self.revealed;
        while self.accum >= self.interval && !self.is_complete() {
            self.accum -= self.interval;
            self.revealed += 1;
        }
        if self.is_complete() {
            self.accum = Duration::ZERO;
        }
        self.revealed != before
    }
}

/// Cycles through a fixed list of strings, typing each one out.
#[derive(Clone, Debug)]
pub struct RoleCycle {
    roles: &'static [&'static str],
    current: usize,
    period: Duration,
    accum: Duration,
    writer: Typewriter,
}

impl RoleCycle {
    pub fn new(roles: &'static [&'static str], period: Duration, typing_interval: Duration) -> Self {
        let first = roles.first().copied().unwrap_or("");
        Self {
            roles,
            current: 0,
            period,
            accum: Duration::ZERO,
            writer: Typewriter::new(first, typing_interval),
        }
    }

    /// Hero defaults: 3 s per role, 100 ms per character.
    pub fn hero(roles: &'static [&'static str]) -> Self {
        Self::new(roles, ROLE_PERIOD, HERO_TYPEWRITER_INTERVAL)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_role(&self) -> &'static str {
        self.roles.get(self.current).copied().unwrap_or("")
    }

    pub fn writer(&self) -> &Typewriter {
        &self.writer
    }

    /// Advance time. Returns true when the visible text or caret changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut changed = false;
        if self.roles.len() > 1 && !self.period.is_zero() {
            self.accum += dt;
            while self.accum >= self.period {
                self.accum -= self.period;
                self.current = (self.current + 1) % self.roles.len();
                self.writer.set_text(self.roles[self.current]);
                changed = true;
            }
        }
        // a role change restarts the reveal; the remainder of this step types into it
        if changed {
            let carry = self.accum;
            self.writer.tick(carry);
        } else {
            changed = self.writer.tick(dt);
        }
        changed
    }
}
