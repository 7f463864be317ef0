use crate::types::{Color, Float};
use serde::Deserialize;

/// Colors and line widths of the canvas decorations. Box colors live with the boxes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Styling {
    pub grid_color: Color,
    pub grid_dash: Vec<Float>,
    pub intersection_fill: Color,
    pub intersection_stroke: Color,
    pub handle_fill: Color,

    pub stroke_width: Float,
    pub active_stroke_width: Float,
}

impl Default for Styling {
    fn default() -> Self {
        Self::light()
    }
}

impl Styling {
    pub fn light() -> Self {
        Styling {
            grid_color: Color::rgb(0xe9, 0xec, 0xef),
            grid_dash: vec![2.0, 2.0],
            intersection_fill: Color::new(255, 193, 7, 153),
            intersection_stroke: Color::rgb(0xff, 0xc1, 0x07),
            handle_fill: Color::WHITE,
            stroke_width: 2.0,
            active_stroke_width: 3.0,
        }
    }
}
