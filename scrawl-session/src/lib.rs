//! Drawing session: wires gesture capture to the stroke history.
//!
//! This is the surface a drawing screen talks to. It owns the current
//! brush settings and the in-flight gesture recorder, and delegates
//! timeline operations to a constructor-injected [`DrawingHistory`] —
//! no ambient or process-global state.

use scrawl_core::{Brush, BrushError, PathPoint, Rgba, Stroke};
use scrawl_history::{DrawingHistory, PathRecorder, SubscriptionId};
use tracing::debug;

/// One interactive drawing session over an injected history.
#[derive(Debug)]
pub struct DrawingSession {
    history: DrawingHistory,
    recorder: PathRecorder,
    brush: Brush,
}

impl DrawingSession {
    /// A session drawing into `history` with the default brush.
    pub fn new(history: DrawingHistory) -> Self {
        Self {
            history,
            recorder: PathRecorder::new(),
            brush: Brush::default(),
        }
    }

    // Gesture input, in the order a drag delivers it.

    pub fn pointer_down(&mut self, point: PathPoint) {
        self.recorder.begin(point);
    }

    pub fn pointer_moved(&mut self, point: PathPoint) {
        self.recorder.extend(point);
    }

    /// End the current gesture, committing a stroke when it produced one.
    /// A tap leaves the canvas untouched.
    pub fn pointer_up(&mut self) {
        if let Some(stroke) = self.recorder.finish(self.brush) {
            self.history.add_stroke(stroke);
        }
    }

    // Brush settings.

    pub fn set_color(&mut self, color: Rgba) {
        self.brush.color = color;
    }

    /// Change the stroke width for subsequent strokes. The previous brush
    /// is kept when the width is invalid.
    pub fn set_stroke_width(&mut self, width: f32) -> Result<(), BrushError> {
        let candidate = Brush {
            width,
            ..self.brush
        };
        candidate.validate()?;
        debug!(width, "stroke width changed");
        self.brush = candidate;
        Ok(())
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    // Timeline operations, delegated to the injected history.

    pub fn undo(&mut self) {
        self.history.undo();
    }

    pub fn redo(&mut self) {
        self.history.redo();
    }

    pub fn clear_canvas(&mut self) {
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Committed strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        self.history.strokes()
    }

    /// Samples of the gesture in progress, for live preview rendering.
    pub fn preview(&self) -> &[PathPoint] {
        self.recorder.samples()
    }

    pub fn is_drawing(&self) -> bool {
        self.recorder.is_recording()
    }

    /// Subscribe to committed-stroke snapshots; see
    /// [`DrawingHistory::subscribe`] for the delivery contract.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&[Stroke]) + Send + 'static,
    ) -> SubscriptionId {
        self.history.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.history.unsubscribe(id)
    }
}
