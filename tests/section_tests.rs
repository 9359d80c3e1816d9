// Active-section tracking against synthetic layouts.

use folio_core::{
    page_sections, section_at, PageState, ScrollState, SectionExtent, SectionId, SectionTracker,
    SECTIONS,
};

fn stacked(heights: &[f64]) -> Vec<Option<SectionExtent>> {
    let mut top = 0.0;
    heights
        .iter()
        .map(|&h| {
            let e = SectionExtent::new(top, h);
            top += h;
            Some(e)
        })
        .collect()
}

fn page_layout() -> Vec<Option<SectionExtent>> {
    stacked(&[800.0, 1200.0, 1000.0, 900.0])
}

#[test]
fn starts_at_hero() {
    let t = SectionTracker::for_page();
    assert_eq!(t.active(), 0);
    assert_eq!(t.section_count(), 4);
}

#[test]
fn midpoint_selects_containing_section() {
    let extents = page_layout();
    let mut t = SectionTracker::for_page();
    // tops 0, 800, 2000, 3000; viewport 800: midpoints 400, 1400, 2400
    assert_eq!(t.recompute(&extents, ScrollState::new(0.0, 800.0)), 0);
    assert_eq!(t.recompute(&extents, ScrollState::new(1000.0, 800.0)), 1);
    assert_eq!(t.recompute(&extents, ScrollState::new(2000.0, 800.0)), 2);
    assert_eq!(t.recompute(&extents, ScrollState::new(0.0, 800.0)), 0);
}

#[test]
fn equal_sections_resolve_shared_edges_downward() {
    // tops 0, 800, 1600, 2400; midpoint 2400 starts the last section
    let extents = stacked(&[800.0; 4]);
    let mut t = SectionTracker::for_page();
    let seen: Vec<usize> = [0.0, 1000.0, 2000.0]
        .iter()
        .map(|&y| t.recompute(&extents, ScrollState::new(y, 800.0)))
        .collect();
    assert_eq!(seen, [0, 1, 3]);
}

#[test]
fn boundaries_are_half_open() {
    let extents = page_layout();
    assert_eq!(section_at(&extents, 799.999), Some(0));
    assert_eq!(section_at(&extents, 800.0), Some(1));
    assert_eq!(section_at(&extents, 0.0), Some(0));
    assert_eq!(section_at(&extents, 3900.0), None);
    assert_eq!(section_at(&extents, -1.0), None);
}

#[test]
fn index_is_sticky_outside_every_section() {
    // gap between 1000 and 1500
    let extents = vec![
        Some(SectionExtent::new(0.0, 1000.0)),
        Some(SectionExtent::new(1500.0, 1000.0)),
    ];
    let mut t = SectionTracker::new(2);
    assert_eq!(t.recompute(&extents, ScrollState::new(1200.0, 600.0)), 1);
    // midpoint 1200 lands in the gap
    assert_eq!(t.recompute(&extents, ScrollState::new(900.0, 600.0)), 1);
    // past the end
    assert_eq!(t.recompute(&extents, ScrollState::new(5000.0, 600.0)), 1);
}

#[test]
fn unmeasurable_sections_are_skipped() {
    let mut extents = page_layout();
    extents[1] = None;
    extents[2] = Some(SectionExtent::new(2000.0, 0.0));
    let mut t = SectionTracker::for_page();
    assert_eq!(t.recompute(&extents, ScrollState::new(1000.0, 800.0)), 0);
    assert_eq!(t.recompute(&extents, ScrollState::new(2800.0, 800.0)), 3);
}

#[test]
fn first_match_wins_on_overlap() {
    let extents = vec![
        Some(SectionExtent::new(0.0, 1000.0)),
        Some(SectionExtent::new(500.0, 1000.0)),
    ];
    assert_eq!(section_at(&extents, 700.0), Some(0));
}

#[test]
fn non_finite_scroll_keeps_previous_index() {
    let extents = page_layout();
    let mut t = SectionTracker::for_page();
    t.recompute(&extents, ScrollState::new(1000.0, 800.0));
    assert_eq!(t.recompute(&extents, ScrollState::new(f64::NAN, 800.0)), 1);
    assert_eq!(t.recompute(&extents, ScrollState::new(0.0, f64::INFINITY)), 1);
}

#[test]
fn extra_extents_are_ignored_and_empty_input_is_harmless() {
    let extents = stacked(&[100.0, 100.0, 100.0]);
    let mut t = SectionTracker::new(2);
    assert_eq!(t.recompute(&extents, ScrollState::new(200.0, 100.0)), 0);
    assert_eq!(t.recompute(&[], ScrollState::new(200.0, 100.0)), 0);
    assert_eq!(SectionTracker::new(0).section_count(), 1);
}

#[test]
fn index_stays_in_range_for_random_walks() {
    let extents = page_layout();
    let mut t = SectionTracker::for_page();
    let mut y = 0.0;
    for step in 0..500 {
        y = (y + (step as f64 * 37.0) % 611.0 - 250.0).max(-300.0);
        let idx = t.recompute(&extents, ScrollState::new(y, 700.0));
        assert!(idx < SECTIONS.len());
    }
}

#[test]
fn section_ids_round_trip_through_dom_ids() {
    for (i, s) in page_sections().iter().enumerate() {
        assert_eq!(s.order, i);
        assert_eq!(SectionId::from_dom_id(s.id.dom_id()), Some(s.id));
    }
    assert_eq!(SectionId::from_dom_id("nope"), None);
}

#[test]
fn page_state_reports_only_changes() {
    let extents = page_layout();
    let mut page = PageState::new();
    assert_eq!(page.on_scroll(&extents, ScrollState::new(0.0, 800.0)), None);
    assert_eq!(page.on_scroll(&extents, ScrollState::new(1000.0, 800.0)), Some(1));
    assert_eq!(page.on_scroll(&extents, ScrollState::new(1100.0, 800.0)), None);
    assert_eq!(page.active_section(), SectionId::Projects);
}
