pub mod animation;
pub mod asset;
pub mod constants;
pub mod contact;
pub mod content;
pub mod icon;
pub mod markup;
pub mod section;
pub mod state;
pub mod throttle;
pub mod typewriter;

pub use animation::*;
pub use asset::{AnimationHeader, AssetError};
pub use contact::{ContactForm, Field, SubmitPhase};
pub use icon::Icon;
pub use section::*;
pub use state::*;
pub use throttle::FrameGate;
pub use typewriter::{RoleCycle, Typewriter};
