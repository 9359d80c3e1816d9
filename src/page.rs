//! Presentation root: owns the page state and every subscription.

use crate::animation::{DecorativeAnimation, SharedAnimation};
use crate::constants::{APP_ROOT_ID, SECTION_SELECTOR};
use crate::contact::ContactView;
use crate::dom;
use crate::frame::{FrameContext, FrameLoop};
use crate::motion::ReducedMotion;
use crate::nav::NavView;
use crate::overlay;
use crate::scroll::ScrollStream;
use anyhow::anyhow;
use folio_core::markup;
use folio_core::{PageState, SectionExtent, ANIMATIONS};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Page {
    state: Rc<RefCell<PageState>>,
    // field order is drop order: stop callbacks before the views they touch go away
    _frames: FrameLoop,
    _scroll: ScrollStream,
    _motion: Option<ReducedMotion>,
    _nav: Rc<NavView>,
    _animations: Rc<RefCell<Vec<SharedAnimation>>>,
}

impl Page {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Page> {
        let root = document
            .get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| anyhow!("missing #{}", APP_ROOT_ID))?;

        let state = Rc::new(RefCell::new(PageState::new()));
        root.set_inner_html(&markup::page_html(state.borrow().tracker.active()));
        overlay::show(document);

        let animations: Vec<SharedAnimation> = Vec::new();
        let animations = Rc::new(RefCell::new(animations));

        // reduced motion is sampled before any animation mounts
        let motion_state = state.clone();
        let motion_anims = animations.clone();
        let motion = ReducedMotion::watch(window, move |reduced| {
            motion_state.borrow_mut().set_reduced_motion(reduced);
            for anim in motion_anims.borrow().iter() {
                anim.borrow_mut().set_reduced_motion(reduced);
            }
        });
        let reduced = motion.as_ref().map(ReducedMotion::matches).unwrap_or(false);
        state.borrow_mut().set_reduced_motion(reduced);

        for (i, cfg) in ANIMATIONS.iter().enumerate() {
            match DecorativeAnimation::attach(document, i, *cfg, reduced) {
                Some(anim) => animations.borrow_mut().push(anim),
                None => log::warn!("[page] animation slot {} missing", i),
            }
        }

        let nav = Rc::new(NavView::attach(document));
        let sections = dom::query_html_elements(document, SECTION_SELECTOR);
        log::info!(
            "[page] {} sections, {} animations",
            sections.len(),
            animations.borrow().len()
        );

        let scroll = ScrollStream::new(window)?;
        {
            let state = state.clone();
            let nav = nav.clone();
            scroll.subscribe(move |sample| {
                let extents: SmallVec<[Option<SectionExtent>; 4]> =
                    sections.iter().map(dom::section_extent).collect();
                let active = state.borrow_mut().on_scroll(&extents, sample);
                if let Some(active) = active {
                    nav.highlight(active);
                }
            });
        }
        {
            let animations = animations.clone();
            scroll.subscribe(move |sample| {
                for anim in animations.borrow().iter() {
                    anim.borrow_mut().on_scroll(sample.viewport_height);
                }
            });
        }
        nav.highlight(state.borrow().tracker.active());
        scroll.flush();

        let contact = ContactView::attach(document, &state);
        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
            state.clone(),
            document.clone(),
            contact,
        )));
        let frames = FrameLoop::start(frame_ctx);

        Ok(Page {
            state,
            _frames: frames,
            _scroll: scroll,
            _motion: motion,
            _nav: nav,
            _animations: animations,
        })
    }

    pub fn active_section(&self) -> usize {
        self.state.borrow().tracker.active()
    }
}
