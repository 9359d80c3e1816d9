//! Page-level state owned by the presentation root.
//!
//! The web frontend keeps exactly one [`PageState`] behind an `Rc<RefCell<_>>`
//! and hands views [`PageSnapshot`] copies; nothing else mutates it.

use crate::constants::{MAX_FRAME_STEP, SPLASH_DURATION};
use crate::contact::{ContactForm, SubmitPhase};
use crate::content::HERO_ROLES;
use crate::section::{ScrollState, SectionExtent, SectionId, SectionTracker, SECTIONS};
use crate::typewriter::RoleCycle;
use std::time::Duration;

/// What changed during one [`PageState::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickChanges {
    pub splash: bool,
    pub hero_text: bool,
    pub contact: bool,
}

impl TickChanges {
    pub fn any(&self) -> bool {
        self.splash || self.hero_text || self.contact
    }
}

#[derive(Clone, Debug)]
pub struct PageSnapshot {
    pub active_section: usize,
    pub loading: bool,
    pub reduced_motion: bool,
    pub hero_role: &'static str,
    pub hero_visible: String,
    pub hero_caret: bool,
    pub contact_phase: SubmitPhase,
    pub contact_revision: u64,
}

pub struct PageState {
    pub tracker: SectionTracker,
    pub hero: RoleCycle,
    pub contact: ContactForm,
    splash_remaining: Duration,
    reduced_motion: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self {
            tracker: SectionTracker::for_page(),
            hero: RoleCycle::hero(HERO_ROLES),
            contact: ContactForm::new(),
            splash_remaining: SPLASH_DURATION,
            reduced_motion: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.splash_remaining.is_zero()
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if reduced != self.reduced_motion {
            log::info!("[motion] reduced motion {}", if reduced { "on" } else { "off" });
        }
        self.reduced_motion = reduced;
    }

    pub fn active_section(&self) -> SectionId {
        SECTIONS[self.tracker.active().min(SECTIONS.len() - 1)]
    }

    /// Feed a scroll sample. Returns `Some(index)` when the active section changed.
    pub fn on_scroll(
        &mut self,
        extents: &[Option<SectionExtent>],
        scroll: ScrollState,
    ) -> Option<usize> {
        let before = self.tracker.active();
        let after = self.tracker.recompute(extents, scroll);
        (after != before).then_some(after)
    }

    /// Advance every timed element by one frame step.
    pub fn tick(&mut self, dt: Duration) -> TickChanges {
        let dt = dt.min(MAX_FRAME_STEP);
        let mut changes = TickChanges::default();
        if self.is_loading() {
            self.splash_remaining = self.splash_remaining.saturating_sub(dt);
            changes.splash = !self.is_loading();
        }
        changes.hero_text = self.hero.tick(dt);
        changes.contact = self.contact.tick(dt);
        changes
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let writer = self.hero.writer();
        PageSnapshot {
            active_section: self.tracker.active(),
            loading: self.is_loading(),
            reduced_motion: self.reduced_motion,
            hero_role: self.hero.current_role(),
            hero_visible: writer.visible().to_owned(),
            hero_caret: writer.caret_visible(),
            contact_phase: self.contact.phase(),
            contact_revision: self.contact.revision(),
        }
    }
}
