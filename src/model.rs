use crate::config::VisualizerConfig;
use crate::cursor::{cursor_for, CursorKind};
use crate::events::{HostEvent, HostEventKind};
use crate::fields::{field_text, parse_field_value, set_from_field, FieldId};
use crate::hover::{classify_hover, HoverInfo};
use crate::interaction::{InteractionLimits, InteractionState};
use crate::metrics::{compute_metrics, DerivedMetrics, ThresholdStatus};
use crate::render::command::RenderCommand;
use crate::render::scene::render_scene;
use crate::result::IouvisResult;
use crate::scene::{BoxName, Scene};
use crate::types::{Float, Point};
use tracing::{debug, trace};

/// The two boxes, the gesture in progress and the IoU threshold of one session.
///
/// The host owns exactly one model and feeds it every input event in order. All
/// mutations clamp instead of failing, so after any call both boxes lie inside the
/// viewport.
pub struct IouModel {
    config: VisualizerConfig,
    scene: Scene,
    interaction: InteractionState,
    threshold: Float,
}

impl IouModel {
    pub fn new(config: VisualizerConfig) -> IouvisResult<Self> {
        config.validate()?;
        let scene = Scene::new(config.box1, config.box2);
        let threshold = config.threshold;
        debug!(
            "Created model with {}x{} viewport",
            config.viewport.width, config.viewport.height
        );
        Ok(Self {
            config,
            scene,
            interaction: InteractionState::Idle,
            threshold,
        })
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn threshold(&self) -> Float {
        self.threshold
    }

    fn limits(&self) -> InteractionLimits {
        InteractionLimits {
            viewport: self.config.viewport,
            min_size: self.config.resize_min_size,
        }
    }

    /// Applies one host event. Returns whether anything the host displays changed.
    pub fn handle_event(&mut self, event: &HostEvent) -> bool {
        match event.kind() {
            HostEventKind::PointerDown(position) => self.pointer_down(*position),
            HostEventKind::PointerMove(position) => self.pointer_move(*position),
            HostEventKind::PointerUp | HostEventKind::PointerLeave => self.pointer_up(),
            HostEventKind::FieldEdit { field, text } => self.edit_field(*field, text),
            HostEventKind::SelectBox(name) => self.select_box(*name),
            HostEventKind::Reset => self.reset(),
            HostEventKind::SetThreshold(value) => self.set_threshold(*value),
        }
    }

    /// Starts a resize or drag of the active box, returns whether a gesture started
    pub fn pointer_down(&mut self, position: Point) -> bool {
        let rect = *self.scene.active_box();
        self.interaction =
            InteractionState::begin(position, &rect.rect, self.config.handle_size);
        debug!(
            "Pointer down on {} at ({}, {}): {:?}",
            self.scene.active(),
            position.x,
            position.y,
            self.interaction
        );
        !self.interaction.is_idle()
    }

    pub fn pointer_move(&mut self, position: Point) -> bool {
        let active = self.scene.active();
        let rect = *self.scene.rect(active);
        let Some(updated) = self.interaction.update(position, &rect, &self.limits()) else {
            return false;
        };
        if updated == rect {
            return false;
        }
        trace!("Moved {} to {:?}", active, updated);
        self.scene.set_rect(active, updated);
        true
    }

    pub fn pointer_up(&mut self) -> bool {
        if self.interaction.is_idle() {
            return false;
        }
        debug!("Gesture ended: {:?}", self.interaction);
        self.interaction = self.interaction.end();
        true
    }

    /// Applies raw field text, coercing anything unreadable to `0`
    pub fn edit_field(&mut self, field: FieldId, text: &str) -> bool {
        self.set_field(field, parse_field_value(text))
    }

    pub fn set_field(&mut self, field: FieldId, value: Float) -> bool {
        let rect = *self.scene.rect(field.box_name);
        let updated = set_from_field(
            &rect,
            field.coordinate,
            field.unit,
            value,
            self.config.viewport,
            self.config.field_min_size,
        );
        debug!("Field {} set to {}: {:?}", field, value, updated);
        self.scene.set_rect(field.box_name, updated);
        updated != rect
    }

    pub fn select_box(&mut self, name: BoxName) -> bool {
        if self.scene.active() == name {
            return false;
        }
        self.scene.set_active_box(name);
        true
    }

    pub fn reset(&mut self) -> bool {
        let before = self.scene.clone();
        self.scene.reset_to_defaults();
        before != self.scene
    }

    /// Sets the threshold the IoU is compared against, clamped into `[0, 1]`. NaN is ignored.
    pub fn set_threshold(&mut self, value: Float) -> bool {
        if value.is_nan() {
            return false;
        }
        let value = value.clamp(0.0, 1.0);
        if value == self.threshold {
            return false;
        }
        debug!("Threshold set to {}", value);
        self.threshold = value;
        true
    }

    pub fn metrics(&self) -> DerivedMetrics {
        compute_metrics(
            self.scene.rect(BoxName::Box1),
            self.scene.rect(BoxName::Box2),
        )
    }

    pub fn threshold_status(&self) -> ThresholdStatus {
        self.metrics().threshold_status(self.threshold)
    }

    pub fn hover(&self, position: Point) -> HoverInfo {
        classify_hover(position, &self.scene)
    }

    pub fn cursor(&self, position: Point) -> CursorKind {
        cursor_for(
            position,
            &self.scene.active_box().rect,
            &self.interaction,
            self.config.handle_size,
        )
    }

    pub fn field_text(&self, field: FieldId) -> String {
        field_text(
            self.scene.rect(field.box_name),
            field.coordinate,
            field.unit,
            self.config.viewport,
        )
    }

    pub fn render(&self) -> Vec<RenderCommand> {
        render_scene(&self.scene, &self.config.canvas(), &self.config.styling)
    }
}
