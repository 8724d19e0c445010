//! Visual and audio effects attached to a rule.
//!
//! Every field is a [`StyleField`], which keeps "never decided" apart from
//! "explicitly switched off". In persisted JSON the two are told apart by key
//! presence: an absent key is [`StyleField::Inherit`], a `null` value is
//! [`StyleField::Disabled`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Three-state style value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StyleField<T> {
    /// Not decided at this layer; take the value from the layer below.
    #[default]
    Inherit,
    /// Set to a concrete value.
    Override(T),
    /// Explicitly switched off. Survives merging.
    Disabled,
}

impl<T> StyleField<T> {
    #[must_use]
    pub const fn is_inherit(&self) -> bool {
        matches!(self, Self::Inherit)
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// The concrete value, if one is set.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Override(v) => Some(v),
            Self::Inherit | Self::Disabled => None,
        }
    }
}

impl<T: Clone> StyleField<T> {
    /// Layer `self` over `base`: anything other than `Inherit` wins.
    #[must_use]
    pub fn over(&self, base: &Self) -> Self {
        match self {
            Self::Inherit => base.clone(),
            other => other.clone(),
        }
    }
}

impl<T> From<Option<T>> for StyleField<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Disabled, Self::Override)
    }
}

// `Inherit` has no serialized form of its own: containers must pair this with
// `skip_serializing_if = "StyleField::is_inherit"`.
impl<T: Serialize> Serialize for StyleField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Override(v) => serializer.serialize_some(v),
            Self::Inherit | Self::Disabled => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for StyleField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// RGBA color. Alpha is optional; the target treats a missing alpha as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<u8>,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }
}

/// Parses `"r g b"`, `"r g b a"` or the same with commas.
impl std::str::FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .map(str::parse::<u8>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| format!("Invalid color '{s}': {e}"))?;
        match parts[..] {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(format!(
                "Invalid color '{s}': expected 3 or 4 components (0-255)"
            )),
        }
    }
}

/// Named colors accepted by the minimap icon and the glow/beam effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Palette {
    Red,
    Orange,
    Yellow,
    Pink,
    Blue,
    Green,
    Brown,
    White,
    Cyan,
    Grey,
}

impl Palette {
    pub const ALL: [Self; 10] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Pink,
        Self::Blue,
        Self::Green,
        Self::Brown,
        Self::White,
        Self::Cyan,
        Self::Grey,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Pink => "Pink",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Brown => "Brown",
            Self::White => "White",
            Self::Cyan => "Cyan",
            Self::Grey => "Grey",
        }
    }
}

impl std::str::FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown color name: '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconShape {
    Star,
    Circle,
    Triangle,
    Square,
    Diamond,
    Pentagon,
    Hexagon,
    Kite,
    Cross,
    Moon,
    Raindrop,
    UpsideDownHouse,
}

impl IconShape {
    pub const ALL: [Self; 12] = [
        Self::Star,
        Self::Circle,
        Self::Triangle,
        Self::Square,
        Self::Diamond,
        Self::Pentagon,
        Self::Hexagon,
        Self::Kite,
        Self::Cross,
        Self::Moon,
        Self::Raindrop,
        Self::UpsideDownHouse,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
            Self::Square => "Square",
            Self::Diamond => "Diamond",
            Self::Pentagon => "Pentagon",
            Self::Hexagon => "Hexagon",
            Self::Kite => "Kite",
            Self::Cross => "Cross",
            Self::Moon => "Moon",
            Self::Raindrop => "Raindrop",
            Self::UpsideDownHouse => "UpsideDownHouse",
        }
    }
}

impl std::str::FromStr for IconShape {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown icon shape: '{s}'"))
    }
}

/// Minimap icon: size (0 = large, 2 = small), color and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimapIcon {
    pub size: u8,
    pub color: Palette,
    pub shape: IconShape,
}

/// Parses `"size Color Shape"`, e.g. `"0 Red Star"`.
impl std::str::FromStr for MinimapIcon {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [size, color, shape] = parts[..] else {
            return Err(format!(
                "Invalid minimap icon '{s}': expected \"<size> <color> <shape>\""
            ));
        };
        let size: u8 = size
            .parse()
            .map_err(|e| format!("Invalid minimap icon size '{size}': {e}"))?;
        if size > 2 {
            return Err(format!(
                "Invalid minimap icon size {size}: expected 0 (large), 1 or 2 (small)"
            ));
        }
        Ok(Self {
            size,
            color: color.parse()?,
            shape: shape.parse()?,
        })
    }
}

/// Alert sound. A PC client plays a custom file, a console client only has
/// numbered built-in slots, so a descriptor is exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sound {
    File {
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        volume: Option<u16>,
    },
    Slot {
        id: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        volume: Option<u16>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSpec {
    #[serde(default, skip_serializing_if = "StyleField::is_inherit")]
    pub font_size: StyleField<u32>,
    #[serde(default, skip_serializing_if = "StyleField::is_inherit")]
    pub text_color: StyleField<Color>,
    #[serde(default, skip_serializing_if = "StyleField::is_inherit")]
    pub border_color: StyleField<Color>,
    #[serde(default, skip_serializing_if = "StyleField::is_inherit")]
    pub background_color: StyleField<Color>,
    #[serde(default, skip_serializing_if = "StyleField::is_inherit")]
    pub play_effect: StyleField<Palette>,
    #[serde(default, skip_serializing_if = "StyleField::is_inherit")]
    pub minimap_icon: StyleField<MinimapIcon>,
    #[serde(default, skip_serializing_if = "StyleField::is_inherit")]
    pub sound: StyleField<Sound>,
}

impl StyleSpec {
    /// Field-by-field layering of `self` over `base`.
    #[must_use]
    pub fn over(&self, base: &Self) -> Self {
        Self {
            font_size: self.font_size.over(&base.font_size),
            text_color: self.text_color.over(&base.text_color),
            border_color: self.border_color.over(&base.border_color),
            background_color: self.background_color.over(&base.background_color),
            play_effect: self.play_effect.over(&base.play_effect),
            minimap_icon: self.minimap_icon.over(&base.minimap_icon),
            sound: self.sound.over(&base.sound),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
