//! Core types shared by the unfurl crates.
//!
//! This crate holds the small vocabulary the engine and the viewer agree
//! on: easing curves, parsed metric values and their display format,
//! watch options for the reveal watcher, and the user-facing enums
//! (reveal style, animation speed, color theme).

mod easing;
mod metric;
mod speed;
mod style;
mod watch;

pub use easing::Easing;
pub use metric::MetricValue;
pub use speed::AnimationSpeed;
pub use style::{ColorTheme, RevealStyle};
pub use watch::{ElementId, WatchOptions};
