use rgb::RGBA8;
use serde::Deserialize;

pub struct ScreenSpace;
pub type Float = f32;
pub type Rect = euclid::Rect<Float, ScreenSpace>;
pub type Point = euclid::Point2D<Float, ScreenSpace>;
pub type Size = euclid::Size2D<Float, ScreenSpace>;
pub type Vector = euclid::Vector2D<Float, ScreenSpace>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Color {
    pub rgba: RGBA8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const GRAY: Color = Color::gray(235);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            rgba: RGBA8 { r, g, b, a },
        }
    }

    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value, 255)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn is_opaque(&self) -> bool {
        self.rgba.a == 255
    }

    /// Alpha as a fraction in `[0, 1]`
    pub fn opacity(&self) -> Float {
        Float::from(self.rgba.a) / 255.0
    }
}
