// Scroll-driven animation mapping, exercised through a recording player.

use folio_core::{
    scroll_frame, scroll_progress, AnimationConfig, AnimationHandle, AssetState,
    ContainerGeometry, PlaybackMode, Presentation, ScrollAnimationDriver, ANIMATIONS,
};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Seek(f64, bool),
    Play,
    Pause,
}

struct RecordingPlayer {
    frames: Option<f64>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingPlayer {
    fn new(frames: Option<f64>) -> Self {
        Self {
            frames,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl AnimationHandle for RecordingPlayer {
    fn total_frames(&self) -> Option<f64> {
        self.frames
    }
    fn go_to_and_stop(&self, value: f64, is_frame: bool) {
        self.calls.borrow_mut().push(Call::Seek(value, is_frame));
    }
    fn play(&self) {
        self.calls.borrow_mut().push(Call::Play);
    }
    fn pause(&self) {
        self.calls.borrow_mut().push(Call::Pause);
    }
}

fn scroll_config() -> AnimationConfig {
    AnimationConfig {
        mode: PlaybackMode::Scroll,
        ..AnimationConfig::new("/lottie/test.json")
    }
}

fn ready_driver(frames: f64) -> ScrollAnimationDriver {
    let mut d = ScrollAnimationDriver::new(scroll_config());
    d.set_loaded(frames);
    d
}

#[test]
fn progress_matches_formula() {
    // vh 800, container 400 tall with its top at mid-viewport
    let p = scroll_progress(ContainerGeometry::new(400.0, 400.0), 800.0).unwrap();
    assert!((p - 400.0 / 1200.0).abs() < 1e-12);
}

#[test]
fn progress_is_zero_below_and_one_above_the_viewport() {
    let vh = 800.0;
    assert_eq!(scroll_progress(ContainerGeometry::new(vh, 300.0), vh), Some(0.0));
    assert_eq!(scroll_progress(ContainerGeometry::new(5000.0, 300.0), vh), Some(0.0));
    assert_eq!(scroll_progress(ContainerGeometry::new(-300.0, 300.0), vh), Some(1.0));
    assert_eq!(scroll_progress(ContainerGeometry::new(-9000.0, 300.0), vh), Some(1.0));
}

#[test]
fn progress_is_monotonic_as_the_page_scrolls_down() {
    let vh = 900.0;
    let mut last = -1.0;
    // scrolling down moves the container top upward
    let mut top = 1500.0;
    while top > -1500.0 {
        let p = scroll_progress(ContainerGeometry::new(top, 600.0), vh).unwrap();
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= last);
        last = p;
        top -= 17.0;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn degenerate_geometry_yields_no_progress() {
    assert_eq!(scroll_progress(ContainerGeometry::new(0.0, 0.0), 0.0), None);
    assert_eq!(scroll_progress(ContainerGeometry::new(0.0, -100.0), 50.0), None);
    assert_eq!(scroll_progress(ContainerGeometry::new(f64::NAN, 100.0), 800.0), None);
}

#[test]
fn frame_scales_progress_by_total() {
    let g = ContainerGeometry::new(400.0, 400.0);
    let f = scroll_frame(g, 800.0, Some(120.0)).unwrap();
    assert!((f - 40.0).abs() < 1e-9);
    assert_eq!(scroll_frame(g, 800.0, Some(0.0)), None);
    assert_eq!(scroll_frame(g, 800.0, None), None);
    assert_eq!(scroll_frame(g, 800.0, Some(f64::NAN)), None);
}

#[test]
fn recompute_seeks_by_frame() {
    let mut d = ready_driver(90.0);
    let player = RecordingPlayer::new(Some(90.0));
    // halfway through: (800 - 0) / (800 + 800)
    let frame = d.recompute(Some(ContainerGeometry::new(0.0, 800.0)), 800.0, &player);
    assert_eq!(frame, Some(45.0));
    assert_eq!(player.calls(), vec![Call::Seek(45.0, true)]);
    assert_eq!(d.current_frame(), Some(45.0));
}

#[test]
fn recompute_is_a_no_op_without_frames() {
    let g = Some(ContainerGeometry::new(100.0, 400.0));
    let mut d = ready_driver(60.0);
    for frames in [None, Some(0.0), Some(-5.0)] {
        let player = RecordingPlayer::new(frames);
        assert_eq!(d.recompute(g, 800.0, &player), None);
        assert!(player.calls().is_empty());
    }
}

#[test]
fn recompute_is_a_no_op_without_geometry() {
    let mut d = ready_driver(60.0);
    let player = RecordingPlayer::new(Some(60.0));
    assert_eq!(d.recompute(None, 800.0, &player), None);
    assert!(player.calls().is_empty());
}

#[test]
fn only_scroll_mode_is_driven_by_scroll() {
    let player = RecordingPlayer::new(Some(60.0));
    let mut d = ScrollAnimationDriver::new(AnimationConfig::new("/a.json"));
    d.set_loaded(60.0);
    assert!(!d.is_scroll_driven());
    assert_eq!(d.recompute(Some(ContainerGeometry::new(0.0, 100.0)), 800.0, &player), None);
    assert!(player.calls().is_empty());
}

#[test]
fn presentation_follows_load_state_and_reduced_motion() {
    let mut d = ScrollAnimationDriver::new(scroll_config());
    assert_eq!(d.presentation(), Presentation::Spinner);
    assert!(d.set_reduced_motion(true));
    assert_eq!(d.presentation(), Presentation::Fallback);
    d.set_loaded(10.0);
    assert_eq!(d.presentation(), Presentation::Fallback);
    assert!(!d.is_scroll_driven());
    assert!(d.set_reduced_motion(false));
    assert_eq!(d.presentation(), Presentation::Animation);
    assert!(!d.set_reduced_motion(false));
    d.set_failed();
    assert_eq!(d.asset(), AssetState::Failed);
    assert_eq!(d.presentation(), Presentation::Fallback);
}

#[test]
fn reduced_motion_stops_seeking() {
    let mut d = ready_driver(60.0);
    let player = RecordingPlayer::new(Some(60.0));
    d.set_reduced_motion(true);
    assert_eq!(d.recompute(Some(ContainerGeometry::new(0.0, 100.0)), 800.0, &player), None);
    assert!(player.calls().is_empty());
    assert_eq!(d.current_frame(), None);
}

#[test]
fn hover_mode_plays_and_pauses() {
    let cfg = AnimationConfig {
        mode: PlaybackMode::Hover,
        ..AnimationConfig::new("/h.json")
    };
    let player = RecordingPlayer::new(Some(10.0));
    let mut d = ScrollAnimationDriver::new(cfg);
    d.pointer_enter(&player);
    assert!(player.calls().is_empty(), "nothing to play while loading");
    d.set_loaded(10.0);
    d.pointer_enter(&player);
    d.pointer_leave(&player);
    assert_eq!(player.calls(), vec![Call::Play, Call::Pause]);
}

#[test]
fn player_options_follow_mode() {
    let [neural, data_flow, particles] = ANIMATIONS;
    assert!(neural.autoplay() && neural.loops());
    assert_eq!(neural.speed, 1.5);
    assert!(!data_flow.autoplay() && !data_flow.loops());
    assert_eq!(data_flow.mode, PlaybackMode::Scroll);
    assert!(particles.autoplay() && !particles.loops());
    assert!(ANIMATIONS.iter().all(|a| a.fallback_image.is_some()));
}

#[test]
fn newly_shown_player_is_seeked_to_the_current_position() {
    // container already half scrolled through when the asset arrives
    let geometry = Some(ContainerGeometry::new(0.0, 800.0));
    let mut d = ScrollAnimationDriver::new(scroll_config());
    d.set_reduced_motion(true);
    d.set_loaded(60.0);
    let player = RecordingPlayer::new(Some(60.0));
    assert_eq!(d.recompute(geometry, 800.0, &player), None);

    // turning reduced motion off shows the player; the mount-time sync seeks it
    assert!(d.set_reduced_motion(false));
    assert!(d.is_scroll_driven());
    assert_eq!(d.recompute(geometry, 800.0, &player), Some(30.0));
    assert_eq!(player.calls(), vec![Call::Seek(30.0, true)]);
}
