use crate::geometry::{contains_point, overlap};
use crate::scene::{BoxName, Scene};
use crate::types::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Box1,
    Box2,
    Intersection,
    Nothing,
}

/// What the pointer is over, together with the geometry a tooltip describes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverInfo {
    Box { name: BoxName, rect: Rect },
    Intersection { rect: Rect },
    Nothing,
}

/// Classifies `point` against the scene. The overlap is checked before either box,
/// since every overlap point also lies inside both boxes.
pub fn classify_hover(point: Point, scene: &Scene) -> HoverInfo {
    let box1 = scene.rect(BoxName::Box1);
    let box2 = scene.rect(BoxName::Box2);
    if let Some(rect) = overlap(box1, box2) {
        if contains_point(point, &rect) {
            return HoverInfo::Intersection { rect };
        }
    }
    BoxName::ALL
        .into_iter()
        .map(|name| (name, *scene.rect(name)))
        .find(|(_, rect)| contains_point(point, rect))
        .map(|(name, rect)| HoverInfo::Box { name, rect })
        .unwrap_or(HoverInfo::Nothing)
}

impl HoverInfo {
    pub fn target(&self) -> HoverTarget {
        match self {
            HoverInfo::Box {
                name: BoxName::Box1,
                ..
            } => HoverTarget::Box1,
            HoverInfo::Box {
                name: BoxName::Box2,
                ..
            } => HoverTarget::Box2,
            HoverInfo::Intersection { .. } => HoverTarget::Intersection,
            HoverInfo::Nothing => HoverTarget::Nothing,
        }
    }

    pub fn tooltip(&self) -> Option<String> {
        match self {
            HoverInfo::Box { name, rect } => Some(format!(
                "{}: {}×{} at ({}, {})",
                name.label(),
                rect.size.width.round() as i64,
                rect.size.height.round() as i64,
                rect.origin.x.round() as i64,
                rect.origin.y.round() as i64,
            )),
            HoverInfo::Intersection { rect } => Some(format!(
                "Intersection Area: {} px²",
                (rect.size.width * rect.size.height).round() as i64
            )),
            HoverInfo::Nothing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::BoxState;
    use crate::types::{Color, Float, Size};

    fn box_state(x: Float, y: Float, width: Float, height: Float) -> BoxState {
        BoxState::new(
            Rect::new(Point::new(x, y), Size::new(width, height)),
            Color::GRAY,
            Color::BLACK,
        )
    }

    fn scene() -> Scene {
        Scene::new(
            box_state(0.0, 0.0, 100.0, 100.0),
            box_state(50.0, 50.0, 100.0, 100.0),
        )
    }

    macro_rules! test_hover {
        ($($name:ident, $x:expr, $y:expr, $expected:expr;)+) => {
            $(#[test]
            fn $name() {
                assert_eq!($expected, classify_hover(Point::new($x, $y), &scene()).target());
            })+
        };
    }

    test_hover!(
        hover_box1_only, 10.0, 10.0, HoverTarget::Box1;
        hover_box2_only, 140.0, 140.0, HoverTarget::Box2;
        hover_overlap, 75.0, 75.0, HoverTarget::Intersection;
        hover_overlap_corner, 50.0, 50.0, HoverTarget::Intersection;
        hover_outside, 200.0, 10.0, HoverTarget::Nothing;
    );

    #[test]
    fn test_touching_boxes_have_no_overlap_target() {
        let scene = Scene::new(
            box_state(0.0, 0.0, 100.0, 100.0),
            box_state(100.0, 0.0, 100.0, 100.0),
        );
        let hover = classify_hover(Point::new(100.0, 50.0), &scene);
        assert_eq!(HoverTarget::Box1, hover.target());
    }

    #[test]
    fn test_tooltips() {
        let scene = scene();
        assert_eq!(
            Some("Box 1: 100×100 at (0, 0)".to_string()),
            classify_hover(Point::new(10.0, 10.0), &scene).tooltip()
        );
        assert_eq!(
            Some("Intersection Area: 2500 px²".to_string()),
            classify_hover(Point::new(60.0, 60.0), &scene).tooltip()
        );
        assert_eq!(None, classify_hover(Point::new(300.0, 300.0), &scene).tooltip());
    }
}
