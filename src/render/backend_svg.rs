use crate::bail;
use crate::render::command::RenderCommand;
use crate::render::renderer::CommandRenderer;
use crate::result::IouvisResult;
use crate::types::{Color, Rect, Size};
use itertools::Itertools;
use std::io::Write;
use svg::node::element::{Group, Line, Rectangle};
use svg::{Document, Node};

pub fn render_svg(
    size: Size,
    render_list: &[RenderCommand],
    write: &mut dyn Write,
) -> IouvisResult<()> {
    let document = render_svg_document(size, render_list)?;
    write.write_all(document.to_string().as_bytes())?;
    Ok(())
}

/// Open groups, innermost last. The bottom entry collects the document's top-level nodes.
struct GroupStack {
    entries: Vec<Entry>,
}

struct Entry {
    group: Group,
    children: Vec<Box<dyn Node>>,
}

impl GroupStack {
    fn new() -> Self {
        Self {
            entries: vec![Entry {
                group: Group::new(),
                children: Vec::new(),
            }],
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn push_element(&mut self, element: impl Node) {
        if let Some(entry) = self.entries.last_mut() {
            entry.children.push(Box::new(element));
        }
    }

    fn push_group(&mut self, group: Group) {
        self.entries.push(Entry {
            group,
            children: Vec::new(),
        });
    }

    fn pop_group(&mut self) {
        if self.entries.len() <= 1 {
            return;
        }
        if let Some(Entry {
            mut group,
            children,
        }) = self.entries.pop()
        {
            for child in children {
                group.append(child);
            }
            self.push_element(group);
        }
    }

    fn into_children(mut self) -> Vec<Box<dyn Node>> {
        while self.len() > 1 {
            self.pop_group();
        }
        self.entries
            .pop()
            .map(|entry| entry.children)
            .unwrap_or_default()
    }
}

fn color_group(attribute: &str, color: &Color) -> Group {
    let rgba = color.rgba;
    let group = Group::new().set(attribute, format!("rgb({} {} {})", rgba.r, rgba.g, rgba.b));
    if color.is_opaque() {
        group
    } else {
        group.set(
            format!("{}-opacity", attribute),
            format!("{:.3}", color.opacity()),
        )
    }
}

fn rectangle(rect: &Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.origin.x)
        .set("y", rect.origin.y)
        .set("width", rect.size.width)
        .set("height", rect.size.height)
}

pub fn render_svg_document(size: Size, render_list: &[RenderCommand]) -> IouvisResult<Document> {
    let mut document = Document::new().set("viewBox", (0, 0, size.width, size.height));
    let mut stack = GroupStack::new();
    let mut save_stack = vec![];
    for render_command in render_list {
        match render_command {
            RenderCommand::Line { start, end } => {
                stack.push_element(
                    Line::new()
                        .set("x1", start.x)
                        .set("y1", start.y)
                        .set("x2", end.x)
                        .set("y2", end.y),
                );
            }
            RenderCommand::SetStrokeWidth(width) => {
                stack.push_group(Group::new().set("stroke-width", *width));
            }
            RenderCommand::SetStrokeColor(color) => {
                stack.push_group(color_group("stroke", color));
            }
            RenderCommand::SetFillColor(color) => {
                stack.push_group(color_group("fill", color));
            }
            RenderCommand::SetLineDash(dashes) => {
                let dash_array = if dashes.is_empty() {
                    "none".to_string()
                } else {
                    dashes.iter().join(" ")
                };
                stack.push_group(Group::new().set("stroke-dasharray", dash_array));
            }
            RenderCommand::FillRect { rect } => {
                stack.push_element(rectangle(rect).set("stroke", "none"));
            }
            RenderCommand::StrokeRect { rect } => {
                stack.push_element(rectangle(rect).set("fill", "none"));
            }
            RenderCommand::Save => {
                save_stack.push(stack.len());
            }
            RenderCommand::Restore => {
                let Some(desired_size) = save_stack.pop() else {
                    bail!("Restore without matching Save");
                };
                while stack.len() > desired_size {
                    stack.pop_group();
                }
            }
        }
    }
    for child in stack.into_children() {
        document.append(child);
    }
    document.assign("style", "background-color: white");
    Ok(document)
}

/// Writes each rendered frame as a complete SVG document
pub struct SvgRenderer<W: Write> {
    size: Size,
    write: W,
}

impl<W: Write> SvgRenderer<W> {
    pub fn new(size: Size, write: W) -> Self {
        Self { size, write }
    }

    pub fn into_inner(self) -> W {
        self.write
    }

    /// Flushes buffered output and hands back the writer
    pub fn finish(mut self) -> IouvisResult<W> {
        self.write.flush()?;
        Ok(self.write)
    }
}

impl<W: Write> CommandRenderer for SvgRenderer<W> {
    fn render(&mut self, commands: &[RenderCommand]) -> IouvisResult<()> {
        render_svg(self.size, commands, &mut self.write)
    }
}
