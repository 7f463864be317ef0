use crate::geometry::{contains_point, hit_test_handle, Handle};
use crate::interaction::InteractionState;
use crate::types::{Float, Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Crosshair,
    Move,
    Resize(Handle),
}

impl CursorKind {
    pub fn css_name(self) -> &'static str {
        match self {
            CursorKind::Crosshair => "crosshair",
            CursorKind::Move => "move",
            CursorKind::Resize(Handle::NorthWest) => "nw-resize",
            CursorKind::Resize(Handle::NorthEast) => "ne-resize",
            CursorKind::Resize(Handle::SouthWest) => "sw-resize",
            CursorKind::Resize(Handle::SouthEast) => "se-resize",
        }
    }
}

/// Cursor to show for the pointer at `point` over the active box `rect`
pub fn cursor_for(
    point: Point,
    rect: &Rect,
    interaction: &InteractionState,
    handle_size: Float,
) -> CursorKind {
    match interaction {
        InteractionState::Dragging { .. } => CursorKind::Move,
        InteractionState::Resizing { handle } => CursorKind::Resize(*handle),
        InteractionState::Idle => {
            if let Some(handle) = hit_test_handle(point, rect, handle_size) {
                CursorKind::Resize(handle)
            } else if contains_point(point, rect) {
                CursorKind::Move
            } else {
                CursorKind::Crosshair
            }
        }
    }
}
