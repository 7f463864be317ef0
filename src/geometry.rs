//! Axis-aligned box geometry: hit testing, dragging, corner resizing and overlap.
//!
//! All functions here are pure. Mutations return the new rectangle and never fail;
//! out-of-range input is clamped or ignored instead.

use crate::types::{Float, Point, Rect, Size, Vector};

/// A corner control point used to resize a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

/// Which end of an axis an edge sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    /// Left or top edge, moving it shifts the origin and the length together
    Near,
    /// Right or bottom edge, moving it changes the length only
    Far,
}

/// The two edges that follow the pointer while a handle is dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleEdges {
    pub horizontal: EdgeSide,
    pub vertical: EdgeSide,
}

impl Handle {
    /// Hit-test order
    pub const ALL: [Handle; 4] = [
        Handle::NorthWest,
        Handle::NorthEast,
        Handle::SouthWest,
        Handle::SouthEast,
    ];

    pub const fn edges(self) -> HandleEdges {
        use EdgeSide::{Far, Near};
        let (horizontal, vertical) = match self {
            Handle::NorthWest => (Near, Near),
            Handle::NorthEast => (Far, Near),
            Handle::SouthWest => (Near, Far),
            Handle::SouthEast => (Far, Far),
        };
        HandleEdges {
            horizontal,
            vertical,
        }
    }

    pub fn corner(self, rect: &Rect) -> Point {
        let edges = self.edges();
        Point::new(
            edge_position(edges.horizontal, rect.origin.x, rect.size.width),
            edge_position(edges.vertical, rect.origin.y, rect.size.height),
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Handle::NorthWest => "northwest",
            Handle::NorthEast => "northeast",
            Handle::SouthWest => "southwest",
            Handle::SouthEast => "southeast",
        }
    }
}

fn edge_position(side: EdgeSide, start: Float, length: Float) -> Float {
    match side {
        EdgeSide::Near => start,
        EdgeSide::Far => start + length,
    }
}

/// Inclusive on all four edges
pub fn contains_point(point: Point, rect: &Rect) -> bool {
    point.x >= rect.origin.x
        && point.x <= rect.origin.x + rect.size.width
        && point.y >= rect.origin.y
        && point.y <= rect.origin.y + rect.size.height
}

/// Returns the first corner whose square tolerance box (half-width `handle_size`) contains `point`.
pub fn hit_test_handle(point: Point, rect: &Rect, handle_size: Float) -> Option<Handle> {
    Handle::ALL.into_iter().find(|handle| {
        let corner = handle.corner(rect);
        (point.x - corner.x).abs() <= handle_size && (point.y - corner.y).abs() <= handle_size
    })
}

/// Clamps a span start into `[0, extent - length]`.
///
/// Lower bound wins when the span is longer than the extent, `Float::clamp` would panic there.
pub fn clamp_position(start: Float, length: Float, extent: Float) -> Float {
    start.min(extent - length).max(0.0)
}

pub fn update_drag(point: Point, offset: Vector, rect: &Rect, viewport: Size) -> Rect {
    let target = point - offset;
    Rect::new(
        Point::new(
            clamp_position(target.x, rect.size.width, viewport.width),
            clamp_position(target.y, rect.size.height, viewport.height),
        ),
        rect.size,
    )
}

/// Moves one edge of the span `[start, start + length]` to `pointer` and returns the new
/// `(start, length)`.
///
/// The span comes back unchanged if the move would shrink it below `min_size` or put the
/// edge outside `[0, extent]`.
pub fn move_edge(
    side: EdgeSide,
    start: Float,
    length: Float,
    pointer: Float,
    extent: Float,
    min_size: Float,
) -> (Float, Float) {
    match side {
        EdgeSide::Near => {
            let new_length = length + (start - pointer);
            if new_length >= min_size && pointer >= 0.0 {
                (pointer, new_length)
            } else {
                (start, length)
            }
        }
        EdgeSide::Far => {
            let new_length = pointer - start;
            if new_length >= min_size && pointer <= extent {
                (start, new_length)
            } else {
                (start, length)
            }
        }
    }
}

pub fn update_resize(
    point: Point,
    handle: Handle,
    rect: &Rect,
    viewport: Size,
    min_size: Float,
) -> Rect {
    let edges = handle.edges();
    let (x, width) = move_edge(
        edges.horizontal,
        rect.origin.x,
        rect.size.width,
        point.x,
        viewport.width,
        min_size,
    );
    let (y, height) = move_edge(
        edges.vertical,
        rect.origin.y,
        rect.size.height,
        point.y,
        viewport.height,
        min_size,
    );
    Rect::new(Point::new(x, y), Size::new(width, height))
}

/// Overlap of two boxes, `None` unless it has positive width and height
pub fn overlap(a: &Rect, b: &Rect) -> Option<Rect> {
    let left = a.origin.x.max(b.origin.x);
    let top = a.origin.y.max(b.origin.y);
    let right = (a.origin.x + a.size.width).min(b.origin.x + b.size.width);
    let bottom = (a.origin.y + a.size.height).min(b.origin.y + b.size.height);
    if right > left && bottom > top {
        Some(Rect::new(
            Point::new(left, top),
            Size::new(right - left, bottom - top),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: Float, y: Float, width: Float, height: Float) -> Rect {
        Rect::new(Point::new(x, y), Size::new(width, height))
    }

    fn viewport() -> Size {
        Size::new(500.0, 400.0)
    }

    #[test]
    fn test_contains_point_is_inclusive() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert!(contains_point(Point::new(10.0, 20.0), &r));
        assert!(contains_point(Point::new(40.0, 60.0), &r));
        assert!(contains_point(Point::new(25.0, 30.0), &r));
        assert!(!contains_point(Point::new(9.9, 30.0), &r));
        assert!(!contains_point(Point::new(25.0, 60.1), &r));
    }

    #[test]
    fn test_edge_table() {
        use EdgeSide::{Far, Near};
        let table: Vec<_> = Handle::ALL
            .iter()
            .map(|handle| (handle.name(), handle.edges()))
            .map(|(name, edges)| (name, edges.horizontal, edges.vertical))
            .collect();
        assert_eq!(
            vec![
                ("northwest", Near, Near),
                ("northeast", Far, Near),
                ("southwest", Near, Far),
                ("southeast", Far, Far),
            ],
            table
        );
    }

    #[test]
    fn test_corners() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(Point::new(10.0, 20.0), Handle::NorthWest.corner(&r));
        assert_eq!(Point::new(40.0, 20.0), Handle::NorthEast.corner(&r));
        assert_eq!(Point::new(10.0, 60.0), Handle::SouthWest.corner(&r));
        assert_eq!(Point::new(40.0, 60.0), Handle::SouthEast.corner(&r));
    }

    macro_rules! test_hit_handle {
        ($($name:ident, $x:expr, $y:expr, $expected:expr;)+) => {
            $(#[test]
            fn $name() {
                let r = rect(50.0, 50.0, 150.0, 100.0);
                assert_eq!($expected, hit_test_handle(Point::new($x, $y), &r, 8.0));
            })+
        };
    }

    test_hit_handle!(
        hit_northwest_exact, 50.0, 50.0, Some(Handle::NorthWest);
        hit_northwest_tolerance_edge, 42.0, 58.0, Some(Handle::NorthWest);
        hit_northeast, 205.0, 47.0, Some(Handle::NorthEast);
        hit_southwest, 53.0, 150.0, Some(Handle::SouthWest);
        hit_southeast, 200.0, 150.0, Some(Handle::SouthEast);
        hit_outside_tolerance, 41.9, 50.0, None;
        hit_middle, 125.0, 100.0, None;
    );

    #[test]
    fn test_hit_overlapping_tolerance_prefers_first_corner() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            Some(Handle::NorthWest),
            hit_test_handle(Point::new(5.0, 5.0), &r, 8.0)
        );
    }

    #[test]
    fn test_drag_moves_origin_only() {
        let r = rect(50.0, 50.0, 150.0, 100.0);
        let dragged = update_drag(
            Point::new(100.0, 120.0),
            Vector::new(10.0, 20.0),
            &r,
            viewport(),
        );
        assert_eq!(rect(90.0, 100.0, 150.0, 100.0), dragged);
    }

    #[test]
    fn test_drag_clamps_to_left_edge() {
        let r = rect(50.0, 50.0, 150.0, 100.0);
        let dragged = update_drag(Point::new(10.0, 80.0), Vector::new(30.0, 30.0), &r, viewport());
        assert_eq!(0.0, dragged.origin.x);
        assert_eq!(50.0, dragged.origin.y);
        assert_eq!(r.size, dragged.size);
    }

    #[test]
    fn test_drag_clamps_to_far_edges() {
        let r = rect(50.0, 50.0, 150.0, 100.0);
        let dragged = update_drag(Point::new(490.0, 395.0), Vector::new(0.0, 0.0), &r, viewport());
        assert_eq!(rect(350.0, 300.0, 150.0, 100.0), dragged);
    }

    #[test]
    fn test_drag_wider_than_viewport_sticks_to_origin() {
        let r = rect(0.0, 0.0, 600.0, 100.0);
        let dragged = update_drag(Point::new(30.0, 0.0), Vector::new(0.0, 0.0), &r, viewport());
        assert_eq!(0.0, dragged.origin.x);
    }

    #[test]
    fn test_move_edge_near() {
        assert_eq!((40.0, 60.0), move_edge(EdgeSide::Near, 50.0, 50.0, 40.0, 500.0, 10.0));
        // would shrink below the floor
        assert_eq!((50.0, 50.0), move_edge(EdgeSide::Near, 50.0, 50.0, 95.0, 500.0, 10.0));
        // pointer outside the viewport
        assert_eq!((50.0, 50.0), move_edge(EdgeSide::Near, 50.0, 50.0, -1.0, 500.0, 10.0));
        assert_eq!((0.0, 100.0), move_edge(EdgeSide::Near, 50.0, 50.0, 0.0, 500.0, 10.0));
    }

    #[test]
    fn test_move_edge_far() {
        assert_eq!((50.0, 70.0), move_edge(EdgeSide::Far, 50.0, 50.0, 120.0, 500.0, 10.0));
        assert_eq!((50.0, 10.0), move_edge(EdgeSide::Far, 50.0, 50.0, 60.0, 500.0, 10.0));
        assert_eq!((50.0, 50.0), move_edge(EdgeSide::Far, 50.0, 50.0, 59.0, 500.0, 10.0));
        assert_eq!((50.0, 50.0), move_edge(EdgeSide::Far, 50.0, 50.0, 501.0, 500.0, 10.0));
        assert_eq!((50.0, 450.0), move_edge(EdgeSide::Far, 50.0, 50.0, 500.0, 500.0, 10.0));
    }

    #[test]
    fn test_resize_northwest() {
        let r = rect(50.0, 50.0, 150.0, 100.0);
        let resized = update_resize(
            Point::new(30.0, 40.0),
            Handle::NorthWest,
            &r,
            viewport(),
            10.0,
        );
        assert_eq!(rect(30.0, 40.0, 170.0, 110.0), resized);
    }

    #[test]
    fn test_resize_northeast() {
        let r = rect(50.0, 50.0, 150.0, 100.0);
        let resized = update_resize(
            Point::new(250.0, 60.0),
            Handle::NorthEast,
            &r,
            viewport(),
            10.0,
        );
        assert_eq!(rect(50.0, 60.0, 200.0, 90.0), resized);
    }

    #[test]
    fn test_resize_southwest() {
        let r = rect(50.0, 50.0, 150.0, 100.0);
        let resized = update_resize(
            Point::new(70.0, 170.0),
            Handle::SouthWest,
            &r,
            viewport(),
            10.0,
        );
        assert_eq!(rect(70.0, 50.0, 130.0, 120.0), resized);
    }

    #[test]
    fn test_resize_southeast() {
        let r = rect(50.0, 50.0, 150.0, 100.0);
        let resized = update_resize(
            Point::new(100.0, 80.0),
            Handle::SouthEast,
            &r,
            viewport(),
            10.0,
        );
        assert_eq!(rect(50.0, 50.0, 50.0, 30.0), resized);
    }

    #[test]
    fn test_resize_southeast_below_floor_keeps_width() {
        let r = rect(50.0, 50.0, 150.0, 100.0);
        let resized = update_resize(
            Point::new(55.0, 120.0),
            Handle::SouthEast,
            &r,
            viewport(),
            10.0,
        );
        assert_eq!(150.0, resized.size.width);
        // the vertical edge is independent and still follows
        assert_eq!(70.0, resized.size.height);
    }

    #[test]
    fn test_resize_sticks_at_viewport_edge() {
        let r = rect(50.0, 50.0, 150.0, 100.0);
        let resized = update_resize(
            Point::new(-5.0, -5.0),
            Handle::NorthWest,
            &r,
            viewport(),
            10.0,
        );
        assert_eq!(r, resized);
        let resized = update_resize(
            Point::new(510.0, 300.0),
            Handle::SouthEast,
            &r,
            viewport(),
            10.0,
        );
        assert_eq!(rect(50.0, 50.0, 150.0, 250.0), resized);
    }

    #[test]
    fn test_overlap() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(50.0, 50.0, 100.0, 100.0);
        assert_eq!(Some(rect(50.0, 50.0, 50.0, 50.0)), overlap(&a, &b));
        assert_eq!(overlap(&a, &b), overlap(&b, &a));
    }

    #[test]
    fn test_overlap_touching_edges_is_empty() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        let b = rect(100.0, 0.0, 100.0, 100.0);
        assert_eq!(None, overlap(&a, &b));
    }
}
