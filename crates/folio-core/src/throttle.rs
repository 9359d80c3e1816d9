/// Collapses bursts of notifications into one evaluation per rendered frame.
///
/// `request` answers whether the caller must schedule a frame; everything
/// after the first request is absorbed until `begin_frame` runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    ticking: bool,
    absorbed: u32,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification. Returns true when a frame needs scheduling.
    #[inline]
    pub fn request(&mut self) -> bool {
        if self.ticking {
            self.absorbed = self.absorbed.saturating_add(1);
            return false;
        }
        self.ticking = true;
        true
    }

    /// Called at the top of the scheduled frame. Returns how many extra
    /// notifications were folded into it.
    #[inline]
    pub fn begin_frame(&mut self) -> u32 {
        self.ticking = false;
        std::mem::take(&mut self.absorbed)
    }

    /// Forget a scheduled frame that was cancelled before it ran.
    pub fn cancel(&mut self) {
        self.ticking = false;
        self.absorbed = 0;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}
