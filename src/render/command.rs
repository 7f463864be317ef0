use crate::types::{Color, Float, Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Save,
    Restore,
    SetStrokeColor(Color),
    SetFillColor(Color),
    SetStrokeWidth(Float),
    /// Dash pattern for subsequent strokes, empty for solid lines
    SetLineDash(Vec<Float>),
    Line { start: Point, end: Point },
    FillRect { rect: Rect },
    StrokeRect { rect: Rect },
}
