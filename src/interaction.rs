use crate::geometry::{contains_point, hit_test_handle, update_drag, update_resize, Handle};
use crate::types::{Float, Point, Rect, Size, Vector};

/// Pointer gesture in progress on the active box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Moving the box, `offset` is the grab point relative to the box origin
    Dragging { offset: Vector },
    Resizing { handle: Handle },
}

/// Bounds and floors applied to pointer gestures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionLimits {
    pub viewport: Size,
    pub min_size: Float,
}

impl InteractionState {
    /// Starts a gesture at `point`. Corner handles win over the box interior.
    pub fn begin(point: Point, rect: &Rect, handle_size: Float) -> Self {
        if let Some(handle) = hit_test_handle(point, rect, handle_size) {
            InteractionState::Resizing { handle }
        } else if contains_point(point, rect) {
            InteractionState::Dragging {
                offset: point - rect.origin,
            }
        } else {
            InteractionState::Idle
        }
    }

    pub fn end(self) -> Self {
        InteractionState::Idle
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// The rectangle that results from moving the pointer to `point`, `None` while idle
    pub fn update(&self, point: Point, rect: &Rect, limits: &InteractionLimits) -> Option<Rect> {
        match *self {
            InteractionState::Idle => None,
            InteractionState::Dragging { offset } => {
                Some(update_drag(point, offset, rect, limits.viewport))
            }
            InteractionState::Resizing { handle } => Some(update_resize(
                point,
                handle,
                rect,
                limits.viewport,
                limits.min_size,
            )),
        }
    }
}
