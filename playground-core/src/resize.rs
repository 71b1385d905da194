//! Resize-drag state machine for a single resizable region.
//!
//! The controller is fed raw pointer positions by the UI layer and answers
//! with clamped sizes. It owns two things: the current size, which survives
//! across gestures, and the drag phase, which only exists between a press on
//! the handle and the matching release.
//!
//! ```text
//! Idle --(down on handle)--> Dragging --(move)--> Dragging --(up)--> Idle
//! ```

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

pub const MIN_WIDTH: f64 = 200.0;
pub const MIN_HEIGHT: f64 = 200.0;
pub const MAX_WIDTH: f64 = 600.0;
pub const MAX_HEIGHT: f64 = 600.0;
pub const DEFAULT_WIDTH: f64 = 300.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;

/// A pointer position in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a region in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Closed ranges both dimensions are held to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeBounds {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl Default for ResizeBounds {
    fn default() -> Self {
        Self {
            min_width: MIN_WIDTH,
            max_width: MAX_WIDTH,
            min_height: MIN_HEIGHT,
            max_height: MAX_HEIGHT,
        }
    }
}

impl ResizeBounds {
    /// Checked constructor: every value finite, minimums positive and no
    /// larger than their maximums.
    pub fn new(min_width: f64, max_width: f64, min_height: f64, max_height: f64) -> Result<Self> {
        let bounds = Self {
            min_width,
            max_width,
            min_height,
            max_height,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<()> {
        for (axis, min, max) in [
            ("width", self.min_width, self.max_width),
            ("height", self.min_height, self.max_height),
        ] {
            if !min.is_finite() || !max.is_finite() {
                bail!("{} bounds must be finite", axis);
            }
            if min <= 0.0 {
                bail!("minimum {} must be positive, got {}", axis, min);
            }
            if min > max {
                bail!("minimum {} {} exceeds maximum {}", axis, min, max);
            }
        }
        Ok(())
    }

    /// Bounds that `clamp` can always satisfy: an inverted axis is swapped
    /// and an axis with a non-finite value falls back to the default range.
    pub fn normalized(&self) -> Self {
        fn axis(min: f64, max: f64, default_min: f64, default_max: f64) -> (f64, f64) {
            if min.is_finite() && max.is_finite() {
                (min.min(max), min.max(max))
            } else {
                (default_min, default_max)
            }
        }
        let (min_width, max_width) = axis(self.min_width, self.max_width, MIN_WIDTH, MAX_WIDTH);
        let (min_height, max_height) =
            axis(self.min_height, self.max_height, MIN_HEIGHT, MAX_HEIGHT);
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Raise to the minimum first, then cap at the maximum.
    pub fn clamp(&self, size: Size) -> Size {
        Size {
            width: size.width.max(self.min_width).min(self.max_width),
            height: size.height.max(self.min_height).min(self.max_height),
        }
    }

    pub fn contains(&self, size: Size) -> bool {
        (self.min_width..=self.max_width).contains(&size.width)
            && (self.min_height..=self.max_height).contains(&size.height)
    }
}

/// How a move event's displacement is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaTracking {
    /// Each move is measured from the previous move event. Overshoot past a
    /// bound is lost, so the handle drifts away from the pointer.
    #[default]
    Incremental,
    /// Each move is measured from the press point and applied to the size the
    /// gesture started with. The handle stays under the pointer.
    Anchored,
}

/// Where a press landed, as far as the controller cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    Handle,
    Elsewhere,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Idle,
    Dragging {
        /// Position of the previous pointer event in this gesture
        origin: Point,
        /// Position of the press that started the gesture
        press: Point,
        /// Size when the gesture started
        start_size: Size,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResizeDragController {
    bounds: ResizeBounds,
    tracking: DeltaTracking,
    size: Size,
    phase: DragPhase,
}

impl Default for ResizeDragController {
    fn default() -> Self {
        Self::new(ResizeBounds::default(), Size::default())
    }
}

impl ResizeDragController {
    /// Create an idle controller. `bounds` are normalized (see
    /// [`ResizeBounds::normalized`]) and `initial` is clamped into them.
    pub fn new(bounds: ResizeBounds, initial: Size) -> Self {
        let bounds = bounds.normalized();
        Self {
            bounds,
            tracking: DeltaTracking::default(),
            size: bounds.clamp(initial),
            phase: DragPhase::Idle,
        }
    }

    pub fn with_tracking(mut self, tracking: DeltaTracking) -> Self {
        self.tracking = tracking;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> ResizeBounds {
        self.bounds
    }

    pub fn tracking(&self) -> DeltaTracking {
        self.tracking
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Whether nested content should receive pointer events right now.
    pub fn content_interactive(&self) -> bool {
        !self.is_active()
    }

    /// Start a gesture if the press landed on the handle.
    ///
    /// Returns `true` when a gesture began. A second press while already
    /// dragging is ignored.
    pub fn pointer_down(&mut self, target: PointerTarget, at: Point) -> bool {
        if target != PointerTarget::Handle || self.is_active() {
            return false;
        }
        self.phase = DragPhase::Dragging {
            origin: at,
            press: at,
            start_size: self.size,
        };
        log::debug!("resize gesture started at ({}, {})", at.x, at.y);
        true
    }

    /// Start a gesture that only survives if `acquire` succeeds, e.g. taking
    /// pointer capture. When it fails the press is undone, so a release that
    /// can no longer be delivered cannot leave the controller dragging.
    pub fn pointer_down_with(
        &mut self,
        target: PointerTarget,
        at: Point,
        acquire: impl FnOnce() -> bool,
    ) -> bool {
        if !self.pointer_down(target, at) {
            return false;
        }
        if acquire() {
            return true;
        }
        self.pointer_cancel();
        false
    }

    /// Apply a pointer move. Returns the committed size while dragging and
    /// `None` when idle.
    pub fn pointer_move(&mut self, at: Point) -> Option<Size> {
        let DragPhase::Dragging {
            origin,
            press,
            start_size,
        } = self.phase
        else {
            return None;
        };

        let (base, from) = match self.tracking {
            DeltaTracking::Incremental => (self.size, origin),
            DeltaTracking::Anchored => (start_size, press),
        };
        let delta_x = at.x - from.x;
        let delta_y = at.y - from.y;
        if !delta_x.is_finite() || !delta_y.is_finite() {
            log::warn!("ignoring non-finite pointer position ({}, {})", at.x, at.y);
            return Some(self.size);
        }

        self.size = self
            .bounds
            .clamp(Size::new(base.width + delta_x, base.height + delta_y));
        self.phase = DragPhase::Dragging {
            origin: at,
            press,
            start_size,
        };
        Some(self.size)
    }

    /// End the gesture. Returns `true` when a gesture was actually ended.
    pub fn pointer_up(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.phase = DragPhase::Idle;
        log::debug!(
            "resize gesture ended at {}x{}",
            self.size.width,
            self.size.height
        );
        true
    }

    /// The browser took the pointer away (`pointercancel`, lost capture).
    /// Keeps whatever size was last committed.
    pub fn pointer_cancel(&mut self) -> bool {
        self.pointer_up()
    }
}
