use iouvis::config::VisualizerConfig;
use iouvis::events::HostEvent;
use iouvis::fields::{Coordinate, FieldId, Unit};
use iouvis::logging::{init_logging, parse_level};
use iouvis::metrics::format_threshold;
use iouvis::model::IouModel;
use iouvis::render::backend_svg::SvgRenderer;
use iouvis::render::renderer::CommandRenderer;
use iouvis::result::IouvisResult;
use iouvis::scene::BoxName;
use iouvis::types::Point;
use log::{error, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn main() {
    if let Err(error) = main_internal() {
        error!("Aborted with error: {:?}", error);
        std::process::exit(1);
    }
}

/// Usage: `sandbox [config.ron] [output.svg]`
fn main_internal() -> IouvisResult<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => VisualizerConfig::load(Path::new(&path))?,
        None => VisualizerConfig::default(),
    };
    let output = args.next().unwrap_or_else(|| "iou-sandbox.svg".to_string());
    init_logging(parse_level(&config.log_level)?)?;
    info!("IoU Sandbox starting");

    let mut model = IouModel::new(config)?;
    for event in session() {
        if model.handle_event(&event) {
            let metrics = model.metrics();
            info!(
                "{:?}: IoU {:.3} vs {} ({})",
                event.kind(),
                metrics.iou,
                format_threshold(model.threshold()),
                model.threshold_status().label()
            );
        }
    }

    let probe = Point::new(230.0, 180.0);
    if let Some(tooltip) = model.hover(probe).tooltip() {
        info!("Tooltip at ({}, {}): {}", probe.x, probe.y, tooltip);
    }
    info!("Final metrics:\n{}", model.metrics().display());

    let file = File::create(&output)?;
    let mut renderer = SvgRenderer::new(model.config().viewport, BufWriter::new(file));
    renderer.render(&model.render())?;
    renderer.finish()?;
    info!("Wrote '{}'", output);
    Ok(())
}

/// Drags box 1 onto box 2, resizes it, then fine tunes box 2 through its fields
fn session() -> Vec<HostEvent> {
    vec![
        HostEvent::pointer_down(Point::new(120.0, 100.0)),
        HostEvent::pointer_move(Point::new(180.0, 160.0)),
        HostEvent::pointer_move(Point::new(260.0, 220.0)),
        HostEvent::pointer_up(),
        HostEvent::pointer_down(Point::new(360.0, 270.0)),
        HostEvent::pointer_move(Point::new(400.0, 290.0)),
        HostEvent::pointer_leave(),
        HostEvent::select_box(BoxName::Box2),
        HostEvent::field_edit(
            FieldId::new(BoxName::Box2, Coordinate::X, Unit::Pixel),
            "220",
        ),
        HostEvent::field_edit(
            FieldId::new(BoxName::Box2, Coordinate::W, Unit::Percent),
            "30%",
        ),
        HostEvent::set_threshold(0.6),
    ]
}
