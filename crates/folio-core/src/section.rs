//! Page sections and the scroll-position tracker that picks the active one.
//!
//! The tracker is a pure derivation over layout numbers: the web frontend
//! samples each section's `offsetTop`/`offsetHeight` and the window scroll
//! state, and the tracker reports which section holds the viewport midpoint.

use crate::icon::Icon;
use smallvec::SmallVec;

/// The fixed, ordered set of page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Projects,
    About,
    Contact,
}

pub const SECTIONS: [SectionId; 4] = [
    SectionId::Hero,
    SectionId::Projects,
    SectionId::About,
    SectionId::Contact,
];

impl SectionId {
    /// DOM id and anchor name.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Projects => "projects",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Projects => "Projects",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    pub fn nav_icon(self) -> Icon {
        match self {
            SectionId::Hero => Icon::Home,
            SectionId::Projects => Icon::Puzzle,
            SectionId::About => Icon::User,
            SectionId::Contact => Icon::Phone,
        }
    }

    pub fn order(self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::Projects => 1,
            SectionId::About => 2,
            SectionId::Contact => 3,
        }
    }

    pub fn from_dom_id(id: &str) -> Option<SectionId> {
        SECTIONS.iter().copied().find(|s| s.dom_id() == id)
    }
}

/// Identity plus position of a section in the page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub order: usize,
}

/// The page's section list, in document order.
pub fn page_sections() -> SmallVec<[Section; 4]> {
    SECTIONS
        .iter()
        .map(|&id| Section {
            id,
            order: id.order(),
        })
        .collect()
}

/// Vertical extent of a rendered section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent {
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }

    /// Zero-sized or non-finite extents come from unmounted elements.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.top.is_finite() && self.height.is_finite() && self.height > 0.0
    }
}

/// Window scroll sample taken on a scroll or resize notification.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset_y: f64,
    pub viewport_height: f64,
}

impl ScrollState {
    pub fn new(offset_y: f64, viewport_height: f64) -> Self {
        Self {
            offset_y,
            viewport_height,
        }
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.offset_y + self.viewport_height / 2.0
    }
}

/// Index of the first measurable extent containing `y`.
///
/// `None` entries are sections whose geometry could not be read this cycle
/// and are skipped.
pub fn section_at(extents: &[Option<SectionExtent>], y: f64) -> Option<usize> {
    extents.iter().position(|e| match e {
        Some(ext) => ext.is_measurable() && ext.contains(y),
        None => false,
    })
}

/// Sticky active-section index.
///
/// The index always stays within `0..len`. When the viewport midpoint falls
/// outside every known section (gaps, unmounted elements) the previous value
/// is kept.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    active: usize,
    len: usize,
}

impl SectionTracker {
    /// A zero-length tracker is clamped to one slot so the index stays valid.
    pub fn new(len: usize) -> Self {
        Self {
            active: 0,
            len: len.max(1),
        }
    }

    pub fn for_page() -> Self {
        Self::new(SECTIONS.len())
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn section_count(&self) -> usize {
        self.len
    }

    /// Re-derive the active index from section geometry and a scroll sample.
    ///
    /// Extents beyond the tracked section count are ignored.
    pub fn recompute(&mut self, extents: &[Option<SectionExtent>], scroll: ScrollState) -> usize {
        let tracked = &extents[..extents.len().min(self.len)];
        let midpoint = scroll.midpoint();
        if !midpoint.is_finite() {
            return self.active;
        }
        if let Some(i) = section_at(tracked, midpoint) {
            if i != self.active {
                log::debug!("[sections] active {} -> {} (midpoint {:.1})", self.active, i, midpoint);
            }
            self.active = i;
        }
        self.active
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::for_page()
    }
}
