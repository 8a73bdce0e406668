//! scrawl-core: domain model for the scrawl drawing engine.
//!
//! Design rules:
//! - Strokes are immutable once created. The canvas changes by adding and
//!   removing whole strokes, never by editing one in place.
//! - Every stroke carries a unique id assigned at construction. History
//!   bookkeeping uses ids, never structural equality.
//! - Presentation attributes are validated where a brush is built.
//! - All model types are serializable so a host can snapshot a canvas.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Minimum number of samples in a committed stroke. A single tap never
/// becomes a stroke.
pub const MIN_STROKE_POINTS: usize = 2;

/// A 2D coordinate in canvas-local units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f32,
    pub y: f32,
}

impl PathPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Stroke color, straight-alpha RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }
}

/// Cap style at the ends of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Join style between consecutive stroke segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Presentation attributes applied to a whole stroke.
///
/// Width must be a positive finite number; see [`Brush::validate`].
/// Opacity is clamped into [0, 1] rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub color: Rgba,
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    pub opacity: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Rgba::BLACK,
            width: 5.0,
            cap: LineCap::Round,
            join: LineJoin::Round,
            opacity: 1.0,
        }
    }
}

impl Brush {
    /// Build a brush with the default cap, join and opacity.
    pub fn new(color: Rgba, width: f32) -> Result<Self, BrushError> {
        let brush = Self {
            color,
            width,
            ..Self::default()
        };
        brush.validate()?;
        Ok(brush)
    }

    /// Check the width invariant.
    pub fn validate(&self) -> Result<(), BrushError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(BrushError::InvalidWidth { width: self.width });
        }
        Ok(())
    }

    /// Clamp opacity into [0, 1].
    pub fn clamped(mut self) -> Self {
        if self.opacity < 0.0 {
            self.opacity = 0.0;
        } else if self.opacity > 1.0 {
            self.opacity = 1.0;
        }
        self
    }
}

/// Unique identity assigned to a stroke at creation time.
///
/// Undo bookkeeping removes committed strokes by id, so two strokes with
/// identical points and brush never alias each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeId(Uuid);

impl StrokeId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One continuous drawing gesture: an ordered point sequence plus the
/// brush it was drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<PathPoint>,
    brush: Brush,
}

impl Stroke {
    /// Build a stroke from recorded samples.
    ///
    /// Fails with fewer than [`MIN_STROKE_POINTS`] samples or an invalid
    /// brush width. Out-of-range opacity is clamped, not rejected.
    pub fn new(points: Vec<PathPoint>, brush: Brush) -> Result<Self, StrokeError> {
        if points.len() < MIN_STROKE_POINTS {
            return Err(StrokeError::TooFewPoints {
                count: points.len(),
            });
        }
        brush.validate()?;
        Ok(Self {
            id: StrokeId::generate(),
            points,
            brush: brush.clamped(),
        })
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Samples in drawing order.
    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }
}

/// Brush attribute errors.
#[derive(Debug, Error)]
pub enum BrushError {
    #[error("stroke width must be a positive finite number, got {width}")]
    InvalidWidth { width: f32 },
}

/// Stroke construction errors.
#[derive(Debug, Error)]
pub enum StrokeError {
    #[error("a stroke needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("invalid brush: {0}")]
    InvalidBrush(#[from] BrushError),
}
