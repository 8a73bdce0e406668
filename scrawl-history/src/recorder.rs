// Gesture capture: accumulates pointer samples into a finished stroke.

use std::mem;

use scrawl_core::{Brush, PathPoint, Stroke};
use tracing::{trace, warn};

/// Accumulates the samples of one in-flight drag gesture.
///
/// Holds transient state only: once [`PathRecorder::finish`] produces a
/// stroke the recorder is ready for the next gesture. It never touches
/// the history.
#[derive(Debug, Default)]
pub struct PathRecorder {
    samples: Vec<PathPoint>,
    recording: bool,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new gesture at `point`, discarding any samples from a
    /// gesture that was never finished.
    pub fn begin(&mut self, point: PathPoint) {
        if self.recording {
            warn!(
                discarded = self.samples.len(),
                "gesture restarted before finish"
            );
        }
        self.samples.clear();
        self.samples.push(point);
        self.recording = true;
    }

    /// Append a sample to the gesture in progress. Dropped with a warning
    /// when no gesture was begun.
    pub fn extend(&mut self, point: PathPoint) {
        if !self.recording {
            warn!("pointer sample outside a gesture, dropped");
            return;
        }
        self.samples.push(point);
    }

    /// End the gesture and build a stroke from the buffered samples.
    ///
    /// A gesture with fewer than two samples (a tap) produces nothing.
    /// The buffer resets either way.
    pub fn finish(&mut self, brush: Brush) -> Option<Stroke> {
        self.recording = false;
        let samples = mem::take(&mut self.samples);
        match Stroke::new(samples, brush) {
            Ok(stroke) => Some(stroke),
            Err(err) => {
                trace!("gesture discarded: {}", err);
                None
            }
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Samples captured so far, for live preview rendering.
    pub fn samples(&self) -> &[PathPoint] {
        &self.samples
    }
}
