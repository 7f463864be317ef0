pub mod backend_svg;
pub mod command;
pub mod context;
pub mod renderer;
pub mod scene;
pub mod styling;
