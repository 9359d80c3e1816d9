//! Decorative vector animations: configuration, load state and the
//! scroll-driven playback mapper.
//!
//! The player itself lives on the JavaScript side; this module only talks to
//! it through [`AnimationHandle`], so the mapping can be exercised on the host
//! with a recording handle.

use crate::constants::DEFAULT_ANIMATION_HEIGHT;

/// How a decorative animation advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Time-based playback started on mount.
    Autoplay,
    /// Playback head follows scroll progress through the container.
    Scroll,
    /// Plays while the pointer is over the container, pauses on leave.
    Hover,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub url: &'static str,
    pub height: &'static str,
    pub mode: PlaybackMode,
    pub looped: bool,
    pub speed: f64,
    pub fallback_image: Option<&'static str>,
}

impl AnimationConfig {
    pub const fn new(url: &'static str) -> Self {
        Self {
            url,
            height: DEFAULT_ANIMATION_HEIGHT,
            mode: PlaybackMode::Autoplay,
            looped: false,
            speed: 1.0,
            fallback_image: None,
        }
    }

    /// Player `autoplay` option.
    pub fn autoplay(&self) -> bool {
        self.mode == PlaybackMode::Autoplay
    }

    /// Player `loop` option; only autoplay animations loop.
    pub fn loops(&self) -> bool {
        self.autoplay() && self.looped
    }
}

/// The three transitions placed between page sections, in document order.
pub const ANIMATIONS: [AnimationConfig; 3] = [
    AnimationConfig {
        url: "/lottie/neural-network.json",
        height: "50vh",
        mode: PlaybackMode::Autoplay,
        looped: true,
        speed: 1.5,
        fallback_image: Some("/images/neural-fallback.svg"),
    },
    AnimationConfig {
        url: "/lottie/data-flow.json",
        height: "80vh",
        mode: PlaybackMode::Scroll,
        looped: true,
        speed: 1.0,
        fallback_image: Some("/images/data-fallback.svg"),
    },
    AnimationConfig {
        url: "/lottie/ai-particles.json",
        height: "350px",
        mode: PlaybackMode::Autoplay,
        looped: false,
        speed: 1.0,
        fallback_image: Some("/images/particles-fallback.svg"),
    },
];

/// Seam to the external vector animation player.
pub trait AnimationHandle {
    /// Length of the loaded animation in frames, if known.
    fn total_frames(&self) -> Option<f64>;
    /// Move the playback head to `value` and hold it there.
    fn go_to_and_stop(&self, value: f64, is_frame: bool);
    fn play(&self);
    fn pause(&self);
}

/// Viewport-relative container geometry (`getBoundingClientRect`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerGeometry {
    pub top: f64,
    pub height: f64,
}

impl ContainerGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Fraction of the container's pass through the viewport, clamped to `[0, 1]`.
///
/// 0 when the container's top edge sits at the viewport's bottom edge, 1 once
/// its bottom edge has left through the top. `None` when the geometry cannot
/// produce a meaningful ratio.
pub fn scroll_progress(geometry: ContainerGeometry, viewport_height: f64) -> Option<f64> {
    let span = viewport_height + geometry.height;
    if !span.is_finite() || span <= 0.0 || !geometry.top.is_finite() {
        return None;
    }
    let raw = (viewport_height - geometry.top) / span;
    Some(raw.clamp(0.0, 1.0))
}

/// Frame the playback head should hold for the given scroll position.
///
/// `None` (no seek) when the frame count is unknown, zero or non-finite, or
/// when the geometry is unusable.
pub fn scroll_frame(
    geometry: ContainerGeometry,
    viewport_height: f64,
    total_frames: Option<f64>,
) -> Option<f64> {
    let total = total_frames.filter(|t| t.is_finite() && *t > 0.0)?;
    let progress = scroll_progress(geometry, viewport_height)?;
    Some(progress * total)
}

/// Load state of an animation's JSON document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AssetState {
    Loading,
    Ready { total_frames: f64 },
    Failed,
}

/// What the container should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    Spinner,
    Animation,
    /// Static image or gradient; used for load failures and reduced motion.
    Fallback,
}

/// Per-animation playback controller.
///
/// Holds no playback position of its own: every scroll-driven recompute
/// derives the frame fresh from geometry.
#[derive(Clone, Debug)]
pub struct ScrollAnimationDriver {
    config: AnimationConfig,
    asset: AssetState,
    reduced_motion: bool,
    current_frame: Option<f64>,
}

impl ScrollAnimationDriver {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            asset: AssetState::Loading,
            reduced_motion: false,
            current_frame: None,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn asset(&self) -> AssetState {
        self.asset
    }

    pub fn set_loaded(&mut self, total_frames: f64) {
        self.asset = AssetState::Ready { total_frames };
    }

    pub fn set_failed(&mut self) {
        self.asset = AssetState::Failed;
        self.current_frame = None;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true when the presentation changed as a result.
    pub fn set_reduced_motion(&mut self, reduced: bool) -> bool {
        let before = self.presentation();
        self.reduced_motion = reduced;
        if reduced {
            self.current_frame = None;
        }
        before != self.presentation()
    }

    pub fn presentation(&self) -> Presentation {
        if self.reduced_motion {
            return Presentation::Fallback;
        }
        match self.asset {
            AssetState::Failed => Presentation::Fallback,
            AssetState::Loading => Presentation::Spinner,
            AssetState::Ready { .. } => Presentation::Animation,
        }
    }

    /// Whether scroll notifications should reach [`Self::recompute`].
    pub fn is_scroll_driven(&self) -> bool {
        self.config.mode == PlaybackMode::Scroll
            && self.presentation() == Presentation::Animation
    }

    /// Last frame sought by a scroll-driven recompute.
    pub fn current_frame(&self) -> Option<f64> {
        self.current_frame
    }

    /// Seek the player to match the container's scroll progress.
    ///
    /// The frame count is read from the player on every call. Returns the
    /// frame sought, or `None` when nothing was done.
    pub fn recompute<H: AnimationHandle + ?Sized>(
        &mut self,
        geometry: Option<ContainerGeometry>,
        viewport_height: f64,
        handle: &H,
    ) -> Option<f64> {
        if !self.is_scroll_driven() {
            return None;
        }
        let frame = scroll_frame(geometry?, viewport_height, handle.total_frames())?;
        handle.go_to_and_stop(frame, true);
        self.current_frame = Some(frame);
        Some(frame)
    }

    /// Pointer entered the container.
    pub fn pointer_enter<H: AnimationHandle + ?Sized>(&self, handle: &H) {
        if self.config.mode == PlaybackMode::Hover && self.presentation() == Presentation::Animation
        {
            handle.play();
        }
    }

    /// Pointer left the container.
    pub fn pointer_leave<H: AnimationHandle + ?Sized>(&self, handle: &H) {
        if self.config.mode == PlaybackMode::Hover && self.presentation() == Presentation::Animation
        {
            handle.pause();
        }
    }
}
