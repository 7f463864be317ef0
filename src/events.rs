use crate::fields::FieldId;
use crate::scene::BoxName;
use crate::types::{Float, Point};

/// Input delivered by the host, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub struct HostEvent {
    kind: HostEventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEventKind {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    /// Pointer left the canvas, ends any gesture like `PointerUp`
    PointerLeave,
    FieldEdit { field: FieldId, text: String },
    SelectBox(BoxName),
    Reset,
    SetThreshold(Float),
}

impl HostEvent {
    pub fn pointer_down(position: Point) -> Self {
        Self {
            kind: HostEventKind::PointerDown(position),
        }
    }

    pub fn pointer_move(position: Point) -> Self {
        Self {
            kind: HostEventKind::PointerMove(position),
        }
    }

    pub fn pointer_up() -> Self {
        Self {
            kind: HostEventKind::PointerUp,
        }
    }

    pub fn pointer_leave() -> Self {
        Self {
            kind: HostEventKind::PointerLeave,
        }
    }

    pub fn field_edit(field: FieldId, text: impl Into<String>) -> Self {
        Self {
            kind: HostEventKind::FieldEdit {
                field,
                text: text.into(),
            },
        }
    }

    pub fn select_box(name: BoxName) -> Self {
        Self {
            kind: HostEventKind::SelectBox(name),
        }
    }

    pub fn reset() -> Self {
        Self {
            kind: HostEventKind::Reset,
        }
    }

    pub fn set_threshold(value: Float) -> Self {
        Self {
            kind: HostEventKind::SetThreshold(value),
        }
    }

    pub fn kind(&self) -> &HostEventKind {
        &self.kind
    }
}
