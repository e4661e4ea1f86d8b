use serde::{Deserialize, Serialize};

use crate::hex::{self, ParseHexError};

/// An opaque sRGB color with channels normalized to `0.0..=1.0`.
///
/// Serialized as a `#RRGGBB` string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
    pub const MAGENTA: Rgb = Rgb::new(1.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Quantize to 8 bits per channel, rounding to nearest.
    pub fn to_u8(self) -> [u8; 3] {
        let quantize = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    pub fn to_hex(self) -> String {
        hex::to_hex(self)
    }

    /// Relative luminance (Rec. 709 weights over linear-light sRGB).
    pub fn luminance(self) -> f32 {
        // decode sRGB -> linear light (IEC 61966-2-1)
        fn decode(c: f32) -> f32 {
            let c = c.clamp(0.0, 1.0);
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        (0.2126 * decode(self.r) + 0.7152 * decode(self.g) + 0.0722 * decode(self.b))
            .clamp(0.0, 1.0)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseHexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        hex::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Decides whether a swatch is dark enough to need white label text.
///
/// The two screens use different rules, so each picks its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContrastRule {
    /// Dark when the luminance is strictly below the threshold.
    LuminanceBelow(f32),
    /// Dark only for exact black.
    PureBlack,
}

impl ContrastRule {
    pub fn is_dark(self, background: Rgb) -> bool {
        match self {
            ContrastRule::LuminanceBelow(threshold) => background.luminance() < threshold,
            ContrastRule::PureBlack => background == Rgb::BLACK,
        }
    }

    /// Text color to draw over `background`.
    pub fn label_color(self, background: Rgb) -> Rgb {
        if self.is_dark(background) {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    }
}
