use std::time::Duration;

// Timing and tuning constants shared by the page state and the web frontend.

// Typewriter
pub const TYPEWRITER_INTERVAL: Duration = Duration::from_millis(150); // default per-char delay
pub const HERO_TYPEWRITER_INTERVAL: Duration = Duration::from_millis(100);

// Hero role rotation
pub const ROLE_PERIOD: Duration = Duration::from_millis(3000);

// Splash overlay shown on first paint
pub const SPLASH_DURATION: Duration = Duration::from_millis(1000);

// Contact form (submission is simulated locally)
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);
pub const SUCCESS_NOTICE_DURATION: Duration = Duration::from_millis(3000);

// Upper bound on a single frame step; a backgrounded tab resumes with one huge dt
pub const MAX_FRAME_STEP: Duration = Duration::from_millis(250);

// Default decorative animation height when none is configured
pub const DEFAULT_ANIMATION_HEIGHT: &str = "300px";

// Content type an animation asset must advertise
pub const ANIMATION_CONTENT_TYPE: &str = "application/json";
