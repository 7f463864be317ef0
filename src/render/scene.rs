use crate::geometry::{overlap, Handle};
use crate::render::command::RenderCommand;
use crate::render::context::RenderContext;
use crate::render::styling::Styling;
use crate::scene::{BoxName, BoxState, Scene};
use crate::types::{Float, Point, Rect, Size};

/// Parameters of the canvas the scene is drawn on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub size: Size,
    pub grid_size: Float,
    pub handle_size: Float,
}

/// Builds the draw list for a scene: grid, overlap, both boxes, then the active box's handles.
pub fn render_scene(scene: &Scene, canvas: &Canvas, styling: &Styling) -> Vec<RenderCommand> {
    let mut context = RenderContext::new(styling);
    render_grid(&mut context, canvas);
    if let Some(rect) = overlap(scene.rect(BoxName::Box1), scene.rect(BoxName::Box2)) {
        render_intersection(&mut context, rect);
    }
    for (name, box_state) in scene.boxes() {
        render_box(&mut context, box_state, scene.is_active(name), canvas.handle_size);
    }
    context.render_queue()
}

fn render_grid(context: &mut RenderContext, canvas: &Canvas) {
    let grid_color = context.styling().grid_color;
    let grid_dash = context.styling().grid_dash.clone();
    let (width, height) = (canvas.size.width, canvas.size.height);
    context.saved(|context| {
        context.add_commands([
            RenderCommand::SetStrokeColor(grid_color),
            RenderCommand::SetStrokeWidth(1.0),
            RenderCommand::SetLineDash(grid_dash),
        ]);
        context.add_commands(grid_steps(width, canvas.grid_size).map(|x| RenderCommand::Line {
            start: Point::new(x, 0.0),
            end: Point::new(x, height),
        }));
        context.add_commands(grid_steps(height, canvas.grid_size).map(|y| RenderCommand::Line {
            start: Point::new(0.0, y),
            end: Point::new(width, y),
        }));
    });
}

/// `0, step, 2 * step, ...` up to and including `extent`
fn grid_steps(extent: Float, step: Float) -> impl Iterator<Item = Float> {
    let count = (extent / step).floor() as usize;
    (0..=count).map(move |index| index as Float * step)
}

fn render_intersection(context: &mut RenderContext, rect: Rect) {
    let fill = context.styling().intersection_fill;
    let stroke = context.styling().intersection_stroke;
    let stroke_width = context.styling().stroke_width;
    context.saved(|context| {
        context.add_commands([
            RenderCommand::SetFillColor(fill),
            RenderCommand::FillRect { rect },
            RenderCommand::SetStrokeColor(stroke),
            RenderCommand::SetStrokeWidth(stroke_width),
            RenderCommand::StrokeRect { rect },
        ]);
    });
}

fn render_box(
    context: &mut RenderContext,
    box_state: &BoxState,
    is_active: bool,
    handle_size: Float,
) {
    let styling = context.styling();
    let stroke_width = if is_active {
        styling.active_stroke_width
    } else {
        styling.stroke_width
    };
    let handle_stroke_width = styling.stroke_width;
    let handle_fill = styling.handle_fill;
    let rect = box_state.rect;
    context.saved(|context| {
        context.add_commands([
            RenderCommand::SetFillColor(box_state.fill),
            RenderCommand::FillRect { rect },
            RenderCommand::SetStrokeColor(box_state.stroke),
            RenderCommand::SetStrokeWidth(stroke_width),
            RenderCommand::StrokeRect { rect },
        ]);
        if is_active {
            context.add_commands([
                RenderCommand::SetFillColor(handle_fill),
                RenderCommand::SetStrokeWidth(handle_stroke_width),
            ]);
            for handle in Handle::ALL {
                let rect = handle_rect(handle.corner(&rect), handle_size);
                context.add_commands([
                    RenderCommand::FillRect { rect },
                    RenderCommand::StrokeRect { rect },
                ]);
            }
        }
    });
}

/// Square of side `handle_size` centred on `corner`
fn handle_rect(corner: Point, handle_size: Float) -> Rect {
    let half = handle_size / 2.0;
    Rect::new(
        Point::new(corner.x - half, corner.y - half),
        Size::new(handle_size, handle_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn box_state(x: Float, y: Float, width: Float, height: Float, color: Color) -> BoxState {
        BoxState::new(
            Rect::new(Point::new(x, y), Size::new(width, height)),
            color,
            color,
        )
    }

    fn canvas() -> Canvas {
        Canvas {
            size: Size::new(200.0, 100.0),
            grid_size: 50.0,
            handle_size: 8.0,
        }
    }

    fn count_lines(commands: &[RenderCommand]) -> usize {
        commands
            .iter()
            .filter(|command| matches!(command, RenderCommand::Line { .. }))
            .count()
    }

    #[test]
    fn test_grid_steps_include_extent() {
        let steps: Vec<_> = grid_steps(200.0, 50.0).collect();
        assert_eq!(vec![0.0, 50.0, 100.0, 150.0, 200.0], steps);
        let steps: Vec<_> = grid_steps(120.0, 50.0).collect();
        assert_eq!(vec![0.0, 50.0, 100.0], steps);
    }

    #[test]
    fn test_saves_and_restores_balance() {
        let scene = Scene::new(
            box_state(0.0, 0.0, 100.0, 100.0, Color::GRAY),
            box_state(50.0, 50.0, 100.0, 50.0, Color::BLACK),
        );
        let commands = render_scene(&scene, &canvas(), &Styling::light());
        let saves = commands.iter().filter(|c| **c == RenderCommand::Save).count();
        let restores = commands.iter().filter(|c| **c == RenderCommand::Restore).count();
        // grid, overlap and two boxes
        assert_eq!(4, saves);
        assert_eq!(saves, restores);
        assert_eq!(5 + 3, count_lines(&commands));
    }

    #[test]
    fn test_overlap_drawn_only_when_boxes_overlap() {
        let styling = Styling::light();
        let overlapping = Scene::new(
            box_state(0.0, 0.0, 100.0, 100.0, Color::GRAY),
            box_state(50.0, 50.0, 100.0, 50.0, Color::BLACK),
        );
        let commands = render_scene(&overlapping, &canvas(), &styling);
        assert!(commands.contains(&RenderCommand::FillRect {
            rect: Rect::new(Point::new(50.0, 50.0), Size::new(50.0, 50.0))
        }));
        assert!(commands.contains(&RenderCommand::SetFillColor(styling.intersection_fill)));

        let apart = Scene::new(
            box_state(0.0, 0.0, 10.0, 10.0, Color::GRAY),
            box_state(150.0, 50.0, 10.0, 10.0, Color::BLACK),
        );
        let commands = render_scene(&apart, &canvas(), &styling);
        assert!(!commands.contains(&RenderCommand::SetFillColor(styling.intersection_fill)));
    }

    #[test]
    fn test_handles_only_on_active_box() {
        let mut scene = Scene::new(
            box_state(0.0, 0.0, 10.0, 10.0, Color::GRAY),
            box_state(150.0, 50.0, 20.0, 20.0, Color::BLACK),
        );
        let southeast_handle_box2 = RenderCommand::FillRect {
            rect: Rect::new(Point::new(166.0, 66.0), Size::new(8.0, 8.0)),
        };
        let commands = render_scene(&scene, &canvas(), &Styling::light());
        assert!(!commands.contains(&southeast_handle_box2));
        assert!(commands.contains(&RenderCommand::SetStrokeWidth(3.0)));

        scene.set_active_box(BoxName::Box2);
        let commands = render_scene(&scene, &canvas(), &Styling::light());
        assert!(commands.contains(&southeast_handle_box2));
    }
}
