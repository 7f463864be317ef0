use crate::config_bail;
use crate::context;
use crate::render::scene::Canvas;
use crate::render::styling::Styling;
use crate::result::{IouvisError, IouvisResult};
use crate::scene::{BoxName, BoxState};
use crate::types::{Color, Float, Point, Rect, Size};
use log::info;
use serde::Deserialize;
use std::path::Path;

/// Everything that can be tuned about a visualizer session.
///
/// Every field has a default, so a RON file only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub viewport: Size,
    /// Half-width of the square hit area around each corner
    pub handle_size: Float,
    /// Smallest width/height reachable by dragging a handle
    pub resize_min_size: Float,
    /// Smallest width/height reachable by typing into a field
    pub field_min_size: Float,
    pub threshold: Float,
    pub grid_size: Float,
    pub log_level: String,
    pub box1: BoxState,
    pub box2: BoxState,
    pub styling: Styling,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            viewport: Size::new(600.0, 400.0),
            handle_size: 8.0,
            resize_min_size: 10.0,
            field_min_size: 1.0,
            threshold: 0.5,
            grid_size: 50.0,
            log_level: "debug".to_string(),
            box1: BoxState::new(
                Rect::new(Point::new(50.0, 50.0), Size::new(150.0, 100.0)),
                Color::new(79, 172, 254, 179),
                Color::rgb(0x4f, 0xac, 0xfe),
            ),
            box2: BoxState::new(
                Rect::new(Point::new(200.0, 150.0), Size::new(180.0, 120.0)),
                Color::new(250, 112, 154, 179),
                Color::rgb(0xfa, 0x70, 0x9a),
            ),
            styling: Styling::default(),
        }
    }
}

impl VisualizerConfig {
    pub fn from_ron_str(text: &str) -> IouvisResult<Self> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> IouvisResult<Self> {
        info!("Loading config: '{}'", path.display());
        context!("load config from '{}'", path.display() => {
            std::fs::read_to_string(path)
                .map_err(IouvisError::from)
                .and_then(|text| Self::from_ron_str(&text))
        })
    }

    pub fn default_box(&self, name: BoxName) -> &BoxState {
        match name {
            BoxName::Box1 => &self.box1,
            BoxName::Box2 => &self.box2,
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            size: self.viewport,
            grid_size: self.grid_size,
            handle_size: self.handle_size,
        }
    }

    pub fn validate(&self) -> IouvisResult<()> {
        let (width, height) = (self.viewport.width, self.viewport.height);
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            config_bail!("viewport must be positive and finite, was {}x{}", width, height);
        }
        if !(self.handle_size >= 0.0) {
            config_bail!("handle_size must not be negative, was {}", self.handle_size);
        }
        if !(self.resize_min_size > 0.0) {
            config_bail!("resize_min_size must be positive, was {}", self.resize_min_size);
        }
        if !(self.field_min_size > 0.0) {
            config_bail!("field_min_size must be positive, was {}", self.field_min_size);
        }
        if !(self.grid_size > 0.0) {
            config_bail!("grid_size must be positive, was {}", self.grid_size);
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            config_bail!("threshold must lie in [0, 1], was {}", self.threshold);
        }
        for name in BoxName::ALL {
            let rect = &self.default_box(name).rect;
            if !(rect.size.width > 0.0 && rect.size.height > 0.0) {
                config_bail!("{} must have a positive size, was {:?}", name, rect.size);
            }
            if rect.origin.x < 0.0
                || rect.origin.y < 0.0
                || rect.origin.x + rect.size.width > width
                || rect.origin.y + rect.size.height > height
            {
                config_bail!("{} does not fit into the {}x{} viewport", name, width, height);
            }
        }
        Ok(())
    }
}
