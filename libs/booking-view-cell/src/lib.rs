pub mod intent;
pub mod render;
pub mod view;

pub use intent::{parse_intent, Intent, IntentError, HELP_TEXT};
pub use render::render;
pub use view::{BookingView, DispatchOutcome};
