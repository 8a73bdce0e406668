// Undo/redo history for the drawing canvas.

use std::collections::VecDeque;
use std::fmt;

use scrawl_core::Stroke;
use tracing::{debug, trace, warn};

/// Default depth of the undo and redo windows.
pub const DEFAULT_UNDO_DEPTH: usize = 5;

/// Handle returned by [`DrawingHistory::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&[Stroke]) + Send>;

/// Canonical stroke timeline with bounded undo/redo.
///
/// `committed` is the unbounded draw-order list of everything visible on
/// the canvas. `undoable` and `undone` are sliding windows over recent
/// history, both capped at the same depth: pushing onto a full window
/// evicts its oldest entry first. A stroke that slides out of the undo
/// window stays committed forever.
///
/// All operations take `&mut self` and complete synchronously; the
/// timeline has a single logical owner. A host that needs sharing wraps
/// it in its own lock.
pub struct DrawingHistory {
    committed: Vec<Stroke>,
    undoable: VecDeque<Stroke>,
    undone: VecDeque<Stroke>,
    depth: usize,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl DrawingHistory {
    /// Empty history with the default undo depth.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_UNDO_DEPTH)
    }

    /// Empty history with a custom undo depth. Depths below 1 are raised
    /// to 1.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            committed: Vec::new(),
            undoable: VecDeque::new(),
            undone: VecDeque::new(),
            depth: depth.max(1),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Commit a finished stroke to the canvas.
    ///
    /// The stroke lands on top of everything drawn before it, becomes the
    /// next undo candidate, and invalidates any redo history.
    pub fn add_stroke(&mut self, stroke: Stroke) {
        debug!(
            stroke = ?stroke.id(),
            committed = self.committed.len() + 1,
            "stroke committed"
        );
        self.committed.push(stroke.clone());
        Self::push_bounded(&mut self.undoable, stroke, self.depth);
        self.undone.clear();
        self.notify();
    }

    /// Remove the most recent undoable stroke from the canvas.
    ///
    /// A no-op when nothing is undoable.
    pub fn undo(&mut self) {
        let Some(stroke) = self.undoable.pop_back() else {
            trace!("undo requested with empty undo window");
            return;
        };
        match self.committed.iter().position(|s| s.id() == stroke.id()) {
            Some(index) => {
                self.committed.remove(index);
            }
            // undoable is always an id-suffix of committed; reaching this
            // arm means the invariant was broken elsewhere
            None => warn!(stroke = ?stroke.id(), "undoable stroke missing from canvas"),
        }
        debug!(
            stroke = ?stroke.id(),
            committed = self.committed.len(),
            "stroke undone"
        );
        Self::push_bounded(&mut self.undone, stroke, self.depth);
        self.notify();
    }

    /// Reapply the most recently undone stroke.
    ///
    /// The stroke is appended at the end of the timeline: it draws on
    /// top, its original z-position is not restored. A no-op when nothing
    /// was undone.
    pub fn redo(&mut self) {
        let Some(stroke) = self.undone.pop_back() else {
            trace!("redo requested with empty redo window");
            return;
        };
        debug!(stroke = ?stroke.id(), "stroke redone");
        self.committed.push(stroke.clone());
        Self::push_bounded(&mut self.undoable, stroke, self.depth);
        self.notify();
    }

    /// Wipe the canvas and both history windows.
    pub fn clear(&mut self) {
        debug!(discarded = self.committed.len(), "canvas cleared");
        self.committed.clear();
        self.undoable.clear();
        self.undone.clear();
        self.notify();
    }

    pub fn can_undo(&self) -> bool {
        !self.undoable.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Everything currently on the canvas, in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.committed
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Register an observer for committed-stroke snapshots.
    ///
    /// Observers run synchronously after every completed mutation, in
    /// registration order. Calls that change nothing do not notify.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&[Stroke]) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        trace!(subscription = ?id, "observer subscribed");
        id
    }

    /// Drop a subscription. Returns false when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        before != self.observers.len()
    }

    fn push_bounded(window: &mut VecDeque<Stroke>, stroke: Stroke, depth: usize) {
        if window.len() >= depth {
            window.pop_front();
        }
        window.push_back(stroke);
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.committed);
        }
    }
}

impl Default for DrawingHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DrawingHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingHistory")
            .field("committed", &self.committed.len())
            .field("undoable", &self.undoable.len())
            .field("undone", &self.undone.len())
            .field("depth", &self.depth)
            .field("observers", &self.observers.len())
            .finish()
    }
}
