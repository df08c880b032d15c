//! Wordfreq CLI: the interactive session driver and its text rendering.
mod render;
mod session;
mod text;

pub use render::{render_effect, render_report};
pub use session::{Session, SessionError, SessionSummary};
pub use text::SessionText;
