//! Numeric coordinate fields: host field ids, text coercion and field-driven box edits.

use crate::geometry::clamp_position;
use crate::result::IouvisError;
use crate::scene::BoxName;
use crate::types::{Float, Point, Rect, Size};
use crate::err;
use itertools::iproduct;
use phf::phf_map;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coordinate {
    X,
    Y,
    W,
    H,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Percent,
    Pixel,
}

static BOX_NAMES: phf::Map<&'static str, BoxName> = phf_map! {
    "box1" => BoxName::Box1,
    "box2" => BoxName::Box2,
};

static COORDINATES: phf::Map<&'static str, Coordinate> = phf_map! {
    "x" => Coordinate::X,
    "y" => Coordinate::Y,
    "w" => Coordinate::W,
    "h" => Coordinate::H,
};

static UNITS: phf::Map<&'static str, Unit> = phf_map! {
    "percent" => Unit::Percent,
    "pixels" => Unit::Pixel,
};

impl Coordinate {
    pub const ALL: [Coordinate; 4] = [Coordinate::X, Coordinate::Y, Coordinate::W, Coordinate::H];

    pub fn id(self) -> &'static str {
        match self {
            Coordinate::X => "x",
            Coordinate::Y => "y",
            Coordinate::W => "w",
            Coordinate::H => "h",
        }
    }

    /// The viewport extent percentages of this coordinate refer to
    pub fn dimension(self, viewport: Size) -> Float {
        match self {
            Coordinate::X | Coordinate::W => viewport.width,
            Coordinate::Y | Coordinate::H => viewport.height,
        }
    }

    pub fn read(self, rect: &Rect) -> Float {
        match self {
            Coordinate::X => rect.origin.x,
            Coordinate::Y => rect.origin.y,
            Coordinate::W => rect.size.width,
            Coordinate::H => rect.size.height,
        }
    }
}

impl Unit {
    pub const ALL: [Unit; 2] = [Unit::Percent, Unit::Pixel];

    pub fn id(self) -> &'static str {
        match self {
            Unit::Percent => "percent",
            Unit::Pixel => "pixels",
        }
    }

    pub fn to_pixels(self, value: Float, dimension: Float) -> Float {
        match self {
            Unit::Percent => value / 100.0 * dimension,
            Unit::Pixel => value,
        }
    }
}

/// Addresses one numeric field of the host, e.g. `box1-x-percent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub box_name: BoxName,
    pub coordinate: Coordinate,
    pub unit: Unit,
}

impl FieldId {
    pub fn new(box_name: BoxName, coordinate: Coordinate, unit: Unit) -> Self {
        Self {
            box_name,
            coordinate,
            unit,
        }
    }

    pub fn all() -> impl Iterator<Item = FieldId> {
        iproduct!(BoxName::ALL, Coordinate::ALL, Unit::ALL)
            .map(|(box_name, coordinate, unit)| FieldId::new(box_name, coordinate, unit))
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.box_name.id(),
            self.coordinate.id(),
            self.unit.id()
        )
    }
}

impl FromStr for FieldId {
    type Err = IouvisError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let mut parts = id.split('-');
        let (Some(box_name), Some(coordinate), Some(unit), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err!("Malformed field id '{}'", id));
        };
        let box_name = BOX_NAMES
            .get(box_name)
            .ok_or_else(|| err!("Unknown box '{}' in field id '{}'", box_name, id))?;
        let coordinate = COORDINATES
            .get(coordinate)
            .ok_or_else(|| err!("Unknown coordinate '{}' in field id '{}'", coordinate, id))?;
        let unit = UNITS
            .get(unit)
            .ok_or_else(|| err!("Unknown unit '{}' in field id '{}'", unit, id))?;
        Ok(FieldId::new(*box_name, *coordinate, *unit))
    }
}

/// Reads the leading number of a field's text. Anything unreadable counts as `0`.
pub fn parse_field_value(text: &str) -> Float {
    let text = text.trim_start();
    text.char_indices()
        .map(|(index, character)| index + character.len_utf8())
        .rev()
        .find_map(|end| text[..end].parse::<Float>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Applies a field edit to `rect`, then pulls the result back into the viewport.
///
/// Position is clamped first, then size, with a floor of `min_size`.
pub fn set_from_field(
    rect: &Rect,
    coordinate: Coordinate,
    unit: Unit,
    value: Float,
    viewport: Size,
    min_size: Float,
) -> Rect {
    let value = if value.is_finite() { value } else { 0.0 };
    let pixels = unit.to_pixels(value, coordinate.dimension(viewport));
    let (mut x, mut y) = (rect.origin.x, rect.origin.y);
    let (mut width, mut height) = (rect.size.width, rect.size.height);
    match coordinate {
        Coordinate::X => x = pixels,
        Coordinate::Y => y = pixels,
        Coordinate::W => width = pixels,
        Coordinate::H => height = pixels,
    }
    x = clamp_position(x, width, viewport.width);
    y = clamp_position(y, height, viewport.height);
    width = width.min(viewport.width - x).max(min_size);
    height = height.min(viewport.height - y).max(min_size);
    Rect::new(Point::new(x, y), Size::new(width, height))
}

/// Text the host shows in a field: percent with one decimal, pixels rounded
pub fn field_text(rect: &Rect, coordinate: Coordinate, unit: Unit, viewport: Size) -> String {
    let pixels = coordinate.read(rect);
    match unit {
        Unit::Percent => format!("{:.1}", pixels / coordinate.dimension(viewport) * 100.0),
        Unit::Pixel => format!("{}", pixels.round() as i64),
    }
}
