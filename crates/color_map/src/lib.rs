//! Color state for two small picker screens.
//!
//! - [`mapper`]: drag or tap on a hue/value surface to pick a color.
//! - [`composer`]: type three 2-digit hex channels and commit them as a color.
//!
//! Nothing here knows about a rendering API. A host feeds pointer and text
//! events into the reducers and draws the [`scene`] they produce.

rust_i18n::i18n!("locales", fallback = "en");

pub mod color;
pub mod composer;
pub mod config;
pub mod geometry;
pub mod hex;
pub mod hsv;
pub mod labels;
pub mod mapper;
pub mod scene;

pub use color::{ContrastRule, Rgb};
pub use composer::{Channel, ComposerError, ComposerEvent, ComposerState};
pub use config::{ColorMapConfig, Config, ConfigError, HexComposerConfig};
pub use geometry::{Point, SurfaceSize};
pub use hex::{ParseHexError, from_hex, is_valid_hex_channel, to_hex};
pub use hsv::Hsv;
pub use labels::Labels;
pub use mapper::{MapperEvent, MapperState};
pub use scene::{ColorMapScene, Marker, MarkerRing, ShadeOverlay, Swatch};
