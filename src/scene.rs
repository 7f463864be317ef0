use crate::types::{Color, Rect};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Identifies one of the two boxes in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxName {
    Box1,
    Box2,
}

impl BoxName {
    pub const ALL: [BoxName; 2] = [BoxName::Box1, BoxName::Box2];

    pub fn id(self) -> &'static str {
        match self {
            BoxName::Box1 => "box1",
            BoxName::Box2 => "box2",
        }
    }

    /// Human readable name, as shown in tooltips
    pub fn label(self) -> &'static str {
        match self {
            BoxName::Box1 => "Box 1",
            BoxName::Box2 => "Box 2",
        }
    }
}

impl Display for BoxName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Geometry of a box plus its display colors
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoxState {
    pub rect: Rect,
    pub fill: Color,
    pub stroke: Color,
}

impl BoxState {
    pub fn new(rect: Rect, fill: Color, stroke: Color) -> Self {
        Self { rect, fill, stroke }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    box1: BoxState,
    box2: BoxState,
    active: BoxName,
    defaults: [BoxState; 2],
}

impl Scene {
    /// Creates a scene whose boxes start at, and reset to, the given states. Box 1 is active.
    pub fn new(box1: BoxState, box2: BoxState) -> Self {
        Self {
            box1,
            box2,
            active: BoxName::Box1,
            defaults: [box1, box2],
        }
    }

    pub fn box_state(&self, name: BoxName) -> &BoxState {
        match name {
            BoxName::Box1 => &self.box1,
            BoxName::Box2 => &self.box2,
        }
    }

    pub fn box_state_mut(&mut self, name: BoxName) -> &mut BoxState {
        match name {
            BoxName::Box1 => &mut self.box1,
            BoxName::Box2 => &mut self.box2,
        }
    }

    pub fn rect(&self, name: BoxName) -> &Rect {
        &self.box_state(name).rect
    }

    pub fn set_rect(&mut self, name: BoxName, rect: Rect) {
        self.box_state_mut(name).rect = rect;
    }

    pub fn active(&self) -> BoxName {
        self.active
    }

    pub fn active_box(&self) -> &BoxState {
        self.box_state(self.active)
    }

    pub fn is_active(&self, name: BoxName) -> bool {
        self.active == name
    }

    pub fn set_active_box(&mut self, name: BoxName) {
        debug!("Active box: {}", name);
        self.active = name;
    }

    /// Restores geometry and colors of both boxes. The active selection is kept.
    pub fn reset_to_defaults(&mut self) {
        debug!("Resetting boxes to defaults");
        let [box1, box2] = self.defaults;
        self.box1 = box1;
        self.box2 = box2;
    }

    pub fn boxes(&self) -> impl Iterator<Item = (BoxName, &BoxState)> {
        BoxName::ALL
            .into_iter()
            .map(move |name| (name, self.box_state(name)))
    }
}
