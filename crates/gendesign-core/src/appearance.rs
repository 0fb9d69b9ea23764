//! Per-design visual preferences

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default card color (gray-600)
pub const DEFAULT_PRIMARY_COLOR: HexColor = HexColor::new(0x4b, 0x55, 0x63);

/// Colors offered by the appearance editor's quick picker
pub const PRESET_COLORS: [HexColor; 8] = [
    HexColor::new(0x4b, 0x55, 0x63), // gray-600
    HexColor::new(0x3b, 0x82, 0xf6), // blue-500
    HexColor::new(0x2d, 0xd4, 0xbf), // teal-400
    HexColor::new(0x22, 0xc5, 0x5e), // green-500
    HexColor::new(0xea, 0xb3, 0x08), // yellow-500
    HexColor::new(0xf9, 0x73, 0x16), // orange-500
    HexColor::new(0xef, 0x44, 0x44), // red-500
    HexColor::new(0xa8, 0x55, 0xf7), // purple-500
];

/// An sRGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Index of this color in [`PRESET_COLORS`], if it is one
    pub fn preset_index(&self) -> Option<usize> {
        PRESET_COLORS.iter().position(|c| c == self)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        DEFAULT_PRIMARY_COLOR
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = String;

    /// Parses `#rgb` or `#rrggbb`, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color must start with '#': {s}"))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("invalid hex color: {s}"));
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|e| e.to_string());
        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(format!("invalid hex color length: {s}")),
        }
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LightingScheme {
    #[default]
    #[serde(rename = "Studio")]
    Studio,
    #[serde(rename = "Alami")]
    Natural,
    #[serde(rename = "Dramatis")]
    Dramatic,
}

impl LightingScheme {
    pub const ALL: [LightingScheme; 3] = [
        LightingScheme::Studio,
        LightingScheme::Natural,
        LightingScheme::Dramatic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LightingScheme::Studio => "Studio",
            LightingScheme::Natural => "Alami",
            LightingScheme::Dramatic => "Dramatis",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisualStyle {
    #[default]
    #[serde(rename = "Fotorealistis")]
    Photorealistic,
    #[serde(rename = "Wireframe")]
    Wireframe,
    #[serde(rename = "Cetak Biru")]
    Blueprint,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 3] = [
        VisualStyle::Photorealistic,
        VisualStyle::Wireframe,
        VisualStyle::Blueprint,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisualStyle::Photorealistic => "Fotorealistis",
            VisualStyle::Wireframe => "Wireframe",
            VisualStyle::Blueprint => "Cetak Biru",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

/// User-editable look of one design card.
///
/// The serialized form is the value written to the appearance store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSettings {
    pub primary_color: HexColor,
    pub lighting_scheme: LightingScheme,
    pub visual_style: VisualStyle,
}
