pub mod config;
pub mod cursor;
pub mod events;
pub mod fields;
pub mod geometry;
pub mod hover;
pub mod interaction;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod render;
pub mod result;
pub mod scene;
pub mod types;
