use crate::types::{Float, Rect};
use std::fmt::{Display, Formatter};

/// Overlap measures of the two boxes. Always recomputed, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub area1: Float,
    pub area2: Float,
    pub intersection_area: Float,
    pub union_area: Float,
    pub iou: Float,
}

pub fn compute_metrics(box1: &Rect, box2: &Rect) -> DerivedMetrics {
    let area1 = box1.size.width * box1.size.height;
    let area2 = box2.size.width * box2.size.height;

    let left = box1.origin.x.max(box2.origin.x);
    let top = box1.origin.y.max(box2.origin.y);
    let right = (box1.origin.x + box1.size.width).min(box2.origin.x + box2.size.width);
    let bottom = (box1.origin.y + box1.size.height).min(box2.origin.y + box2.size.height);

    let intersection_area = (right - left).max(0.0) * (bottom - top).max(0.0);
    let union_area = area1 + area2 - intersection_area;
    let iou = if union_area > 0.0 {
        intersection_area / union_area
    } else {
        0.0
    };
    DerivedMetrics {
        area1,
        area2,
        intersection_area,
        union_area,
        iou,
    }
}

impl DerivedMetrics {
    /// IoU rounded to the three decimals the host displays
    pub fn displayed_iou(&self) -> Float {
        (self.iou * 1000.0).round() / 1000.0
    }

    /// Compares the displayed IoU, so the status never contradicts the shown value
    pub fn meets_threshold(&self, threshold: Float) -> bool {
        self.displayed_iou() >= threshold
    }

    pub fn threshold_status(&self, threshold: Float) -> ThresholdStatus {
        if self.meets_threshold(threshold) {
            ThresholdStatus::Above
        } else {
            ThresholdStatus::Below
        }
    }

    pub fn display(&self) -> MetricsDisplay {
        MetricsDisplay {
            area1: round_area(self.area1),
            area2: round_area(self.area2),
            intersection_area: round_area(self.intersection_area),
            union_area: round_area(self.union_area),
            iou: format!("{:.3}", self.displayed_iou()),
        }
    }
}

fn round_area(area: Float) -> i64 {
    area.round() as i64
}

/// Metrics as the host shows them: whole-pixel areas, IoU to three decimals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsDisplay {
    pub area1: i64,
    pub area2: i64,
    pub intersection_area: i64,
    pub union_area: i64,
    pub iou: String,
}

impl Display for MetricsDisplay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Area 1: {}", self.area1)?;
        writeln!(f, "Area 2: {}", self.area2)?;
        writeln!(f, "Intersection: {}", self.intersection_area)?;
        writeln!(f, "Union: {}", self.union_area)?;
        write!(f, "IoU: {}", self.iou)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdStatus {
    Above,
    Below,
}

impl ThresholdStatus {
    pub fn label(self) -> &'static str {
        match self {
            ThresholdStatus::Above => "Above Threshold ✓",
            ThresholdStatus::Below => "Below Threshold ✗",
        }
    }
}

/// Threshold value as shown next to the slider
pub fn format_threshold(threshold: Float) -> String {
    format!("{:.2}", threshold)
}
