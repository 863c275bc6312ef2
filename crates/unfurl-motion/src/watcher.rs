//! One-shot reveal watcher.

use std::collections::HashSet;
use std::time::Duration;

use unfurl_core::{ElementId, WatchOptions};

use crate::viewport::{RowSpan, ViewportSignal};

/// A registered element awaiting its first qualifying intersection.
#[derive(Debug, Clone)]
struct Watched {
    id: ElementId,
    span: RowSpan,
    delay: Option<Duration>,
}

/// A triggered reveal whose delivery may be deferred by a delay.
#[derive(Debug, Clone, Copy)]
struct PendingReveal {
    id: ElementId,
    due: Duration,
}

/// Watches registered elements and reveals each at most once when it
/// first becomes sufficiently visible.
///
/// Instances are fully independent: each carries its own options and its
/// own registered set, so a host may layer several watchers with
/// different thresholds over overlapping elements.
#[derive(Debug)]
pub struct RevealWatcher {
    options: WatchOptions,
    /// Elements still being watched, in registration order.
    watched: Vec<Watched>,
    /// Triggered reveals waiting out their delay, in trigger order.
    pending: Vec<PendingReveal>,
    /// Every id ever revealed or triggered; guards the one-shot invariant
    /// across re-registration.
    seen: HashSet<ElementId>,
}

impl RevealWatcher {
    /// Create a watcher with the given options.
    pub fn new(options: WatchOptions) -> Self {
        Self {
            options,
            watched: Vec::new(),
            pending: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Register an element with its page-space extent and optional
    /// reveal delay.
    ///
    /// Ids that are already watched, pending, or revealed are ignored so
    /// an element can never reveal twice.
    pub fn watch(&mut self, id: ElementId, span: RowSpan, delay: Option<Duration>) {
        if self.seen.contains(&id) || self.watched.iter().any(|w| w.id == id) {
            return;
        }
        self.watched.push(Watched { id, span, delay });
    }

    /// Update a still-watched element's extent after a re-layout.
    ///
    /// Pending and revealed elements are unaffected.
    pub fn relocate(&mut self, id: ElementId, span: RowSpan) {
        if let Some(watched) = self.watched.iter_mut().find(|w| w.id == id) {
            watched.span = span;
        }
    }

    /// Run one intersection batch against the host's viewport.
    ///
    /// Each watched element whose visible fraction reaches the threshold
    /// is unsubscribed immediately and its reveal queued for `now` plus
    /// its delay; unsubscribing before the delay elapses is what prevents
    /// duplicate triggers during the delay window. An absent viewport is
    /// a no-op.
    pub fn check(&mut self, signal: &dyn ViewportSignal, now: Duration) {
        let Some(viewport) = signal.viewport() else {
            return;
        };
        let effective = shrink(viewport, self.options.top_inset, self.options.bottom_inset);

        let mut i = 0;
        while i < self.watched.len() {
            if self.crosses(&self.watched[i], &effective) {
                let watched = self.watched.remove(i);
                self.seen.insert(watched.id);
                self.pending.push(PendingReveal {
                    id: watched.id,
                    due: now + watched.delay.unwrap_or(Duration::ZERO),
                });
            } else {
                i += 1;
            }
        }
    }

    /// Drain reveals whose delay has elapsed, in trigger order.
    pub fn take_revealed(&mut self, now: Duration) -> Vec<ElementId> {
        let mut revealed = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                revealed.push(self.pending.remove(i).id);
            } else {
                i += 1;
            }
        }
        revealed
    }

    /// Whether the element has been triggered (revealed or pending).
    pub fn is_triggered(&self, id: ElementId) -> bool {
        self.seen.contains(&id)
    }

    /// Number of elements still being watched.
    pub fn watched_len(&self) -> usize {
        self.watched.len()
    }

    fn crosses(&self, watched: &Watched, viewport: &RowSpan) -> bool {
        let visible = viewport.overlap(&watched.span);
        if visible == 0 {
            return false;
        }
        let fraction = f32::from(visible) / f32::from(watched.span.height.max(1));
        fraction >= self.options.threshold
    }
}

/// Shave rows off the viewport edges, matching a negative margin bias.
fn shrink(viewport: RowSpan, top_inset: u16, bottom_inset: u16) -> RowSpan {
    let height = viewport
        .height
        .saturating_sub(top_inset)
        .saturating_sub(bottom_inset);
    RowSpan::new(viewport.top + i32::from(top_inset), height)
}
