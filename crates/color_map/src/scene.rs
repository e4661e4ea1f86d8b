//! What each screen draws, as plain data.
//!
//! A host adapter turns these into draw calls; nothing here depends on a
//! rendering API.

use crate::color::{ContrastRule, Rgb};
use crate::config::ColorMapConfig;
use crate::geometry::Point;
use crate::mapper::MapperState;

/// Left-to-right stops of the hue gradient.
pub const HUE_STOPS: [Rgb; 7] = [
    Rgb::RED,
    Rgb::YELLOW,
    Rgb::GREEN,
    Rgb::CYAN,
    Rgb::BLUE,
    Rgb::MAGENTA,
    Rgb::RED,
];

/// Top-to-bottom fade laid over the hue gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeOverlay {
    pub color: Rgb,
    pub top_alpha: f32,
    pub bottom_alpha: f32,
}

impl Default for ShadeOverlay {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            top_alpha: 0.0,
            bottom_alpha: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerRing {
    pub radius: f32,
    pub color: Rgb,
}

/// Concentric rings, outermost first, centered on the selected point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub rings: [MarkerRing; 3],
}

impl Marker {
    pub fn new(center: Point, color: Rgb, radii: [f32; 3]) -> Self {
        Self {
            center,
            rings: [
                MarkerRing {
                    radius: radii[0],
                    color: Rgb::WHITE,
                },
                MarkerRing {
                    radius: radii[1],
                    color: Rgb::BLACK,
                },
                MarkerRing {
                    radius: radii[2],
                    color,
                },
            ],
        }
    }
}

/// A solid fill with the hex label drawn over it.
#[derive(Clone, Debug, PartialEq)]
pub struct Swatch {
    pub fill: Rgb,
    pub label: String,
    pub label_color: Rgb,
}

impl Swatch {
    pub fn new(fill: Rgb, contrast: ContrastRule) -> Self {
        Self {
            fill,
            label: fill.to_hex(),
            label_color: contrast.label_color(fill),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColorMapScene {
    pub hue_stops: [Rgb; 7],
    pub shade: ShadeOverlay,
    /// `None` until something is selected.
    pub marker: Option<Marker>,
    pub swatch: Swatch,
}

impl ColorMapScene {
    pub fn new(state: &MapperState, config: &ColorMapConfig) -> Self {
        let color = state.color();
        Self {
            hue_stops: HUE_STOPS,
            shade: ShadeOverlay::default(),
            marker: state
                .selected_point()
                .map(|center| Marker::new(center, color, config.marker_radii)),
            swatch: Swatch::new(color, config.contrast()),
        }
    }
}
