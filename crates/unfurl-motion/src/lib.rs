//! Viewport-driven animation engine for the unfurl page viewer.
//!
//! Two independent mechanisms, both fed by the host's frame loop: a
//! reveal watcher that applies a one-shot "revealed" transition to
//! elements as they scroll into view, and a counter tween that animates
//! a displayed number to an exact target value. The host environment is
//! abstracted behind the [`FrameClock`] and [`ViewportSignal`]
//! capabilities so the engine runs the same against a real terminal or a
//! fake clock in tests.

mod clock;
mod counter;
mod rotator;
mod viewport;
mod watcher;

pub use clock::{FrameClock, ManualClock, MonotonicClock};
pub use counter::CounterTween;
pub use rotator::TextRotator;
pub use viewport::{FixedViewport, RowSpan, ViewportSignal};
pub use watcher::RevealWatcher;
