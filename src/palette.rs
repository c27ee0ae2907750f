//! Fixed color palette and the non-color style enumerations.
//!
//! Every color a theme slot can hold comes from [`PaletteColor`]. Changing the
//! table is a schema migration: persisted token trees are matched back to these
//! entries by hex.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight palette entries, in enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Coral,
    Lime,
    Ice,
    Charcoal,
    Silver,
    Cloud,
    White,
    Black,
}

impl PaletteColor {
    /// All palette entries. Order is significant for nearest-color ties.
    pub const ALL: [PaletteColor; 8] = [
        Self::Coral,
        Self::Lime,
        Self::Ice,
        Self::Charcoal,
        Self::Silver,
        Self::Cloud,
        Self::White,
        Self::Black,
    ];

    /// Stable key used in local state and CLI arguments.
    pub fn key(self) -> &'static str {
        match self {
            Self::Coral => "coral",
            Self::Lime => "lime",
            Self::Ice => "ice",
            Self::Charcoal => "charcoal",
            Self::Silver => "silver",
            Self::Cloud => "cloud",
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Lowercase `#rrggbb` value.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Coral => "#ff8475",
            Self::Lime => "#f1fec9",
            Self::Ice => "#e8fffe",
            Self::Charcoal => "#26282b",
            Self::Silver => "#eaeaea",
            Self::Cloud => "#f4f4f4",
            Self::White => "#ffffff",
            Self::Black => "#000000",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            Self::Coral => Rgb::new(0xff, 0x84, 0x75),
            Self::Lime => Rgb::new(0xf1, 0xfe, 0xc9),
            Self::Ice => Rgb::new(0xe8, 0xff, 0xfe),
            Self::Charcoal => Rgb::new(0x26, 0x28, 0x2b),
            Self::Silver => Rgb::new(0xea, 0xea, 0xea),
            Self::Cloud => Rgb::new(0xf4, 0xf4, 0xf4),
            Self::White => Rgb::new(0xff, 0xff, 0xff),
            Self::Black => Rgb::new(0x00, 0x00, 0x00),
        }
    }

    /// Parse a palette key (case-insensitive, surrounding whitespace ignored).
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.key() == normalized)
    }

    /// Exact (case-insensitive) hex match against the palette table.
    pub fn from_hex_exact(hex: &str) -> Option<Self> {
        let normalized = hex.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.hex() == normalized)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, or `#rgb`.
    pub fn parse_hex(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            3 => {
                let expand = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }

    /// Squared Euclidean distance over the RGB components.
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Resolve a hex string to the closest palette entry.
///
/// Exact palette hex matches short-circuit. Otherwise the minimum RGB
/// distance wins and ties keep the earlier entry. Returns `None` when the
/// input is not a parseable hex color.
pub fn nearest(hex: &str) -> Option<PaletteColor> {
    if let Some(exact) = PaletteColor::from_hex_exact(hex) {
        return Some(exact);
    }
    let target = Rgb::parse_hex(hex)?;
    let mut best = PaletteColor::ALL[0];
    let mut best_distance = target.distance_sq(best.rgb());
    for color in PaletteColor::ALL.iter().copied().skip(1) {
        let distance = target.distance_sq(color.rgb());
        // Strict comparison keeps the first entry on ties.
        if distance < best_distance {
            best = color;
            best_distance = distance;
        }
    }
    Some(best)
}

/// How buttons paint their fill and border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Solid,
    Outline,
    Ghost,
}

/// Rendering rule for one [`ButtonStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRule {
    pub paints_fill: bool,
    pub paints_border: bool,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 3] = [Self::Solid, Self::Outline, Self::Ghost];

    pub fn key(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }

    pub fn rule(self) -> ButtonRule {
        match self {
            Self::Solid => ButtonRule {
                paints_fill: true,
                paints_border: true,
            },
            Self::Outline => ButtonRule {
                paints_fill: false,
                paints_border: true,
            },
            // Ghost buttons only paint on hover.
            Self::Ghost => ButtonRule {
                paints_fill: false,
                paints_border: false,
            },
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|s| s.key() == normalized)
    }
}

/// Border thickness applied to themed surfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderWeight {
    None,
    #[default]
    Thin,
    Medium,
    Thick,
}

impl BorderWeight {
    pub const ALL: [BorderWeight; 4] = [Self::None, Self::Thin, Self::Medium, Self::Thick];

    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Thin => "thin",
            Self::Medium => "medium",
            Self::Thick => "thick",
        }
    }

    pub fn px(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Thin => 1,
            Self::Medium => 2,
            Self::Thick => 3,
        }
    }

    /// CSS length, e.g. `2px`.
    pub fn css_width(self) -> String {
        format!("{}px", self.px())
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|w| w.key() == normalized)
    }
}
