// DOM hooks and environment tuning for the web frontend.
// Element ids that the markup generator also emits live in
// `folio_core::markup`; these are the ones only the frontend needs.

// Mount point in index.html
pub const APP_ROOT_ID: &str = "app";

// Section lookup; matches the `data-section` attribute emitted per section
pub const SECTION_SELECTOR: &str = "section[data-section]";

// Accessibility preference source
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Window events feeding the scroll stream
pub const SCROLL_EVENT: &str = "scroll";
pub const RESIZE_EVENT: &str = "resize";

// Class toggled on the splash overlay once loading is over
pub const HIDDEN_CLASS: &str = "hidden";

// Player renderer passed to loadAnimation
pub const LOTTIE_RENDERER: &str = "svg";

// Console log level
pub const LOG_LEVEL: log::Level = log::Level::Info;
