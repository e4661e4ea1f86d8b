//! Hue/value color map: the horizontal axis sweeps the hue wheel, the
//! vertical axis fades value from full (top) to black (bottom). Saturation
//! stays at 1.

use crate::color::Rgb;
use crate::geometry::{Point, SurfaceSize};
use crate::hsv::Hsv;

/// Pointer and layout input for [`MapperState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapperEvent {
    /// The surface was (re)measured by layout.
    Measured(SurfaceSize),
    Tap(Point),
    DragStart(Point),
    /// Every intermediate position of a drag.
    Drag(Point),
}

/// Map a unit `(u, v)` on the surface to a color.
pub fn hsv_at_uv(uv: (f32, f32)) -> Hsv {
    Hsv {
        h: (uv.0.clamp(0.0, 1.0) * 360.0).rem_euclid(360.0),
        s: 1.0,
        v: (1.0 - uv.1).clamp(0.0, 1.0),
    }
}

/// Clamp `position` into `surface` and map it to a color.
///
/// `None` while the surface is unmeasured.
pub fn hsv_at(surface: SurfaceSize, position: Point) -> Option<(Point, Hsv)> {
    if !surface.is_measured() {
        return None;
    }

    let clamped = surface.clamp(position);
    Some((clamped, hsv_at_uv(surface.unit_uv(clamped))))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapperState {
    surface: SurfaceSize,
    selected_point: Option<Point>,
    hsv: Hsv,
    color: Rgb,
}

impl Default for MapperState {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
    }
}

impl MapperState {
    /// A fresh screen showing `initial_color` until the surface is measured.
    pub fn new(initial_color: Rgb) -> Self {
        Self {
            surface: SurfaceSize::default(),
            selected_point: None,
            hsv: Hsv::from_rgb(initial_color),
            color: initial_color,
        }
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Last committed pointer position, already clamped.
    pub fn selected_point(&self) -> Option<Point> {
        self.selected_point
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    /// Reduce `event` into a new state.
    pub fn update(mut self, event: MapperEvent) -> Self {
        self.apply(event);
        self
    }

    /// Apply `event` in place, returning whether anything changed.
    pub fn apply(&mut self, event: MapperEvent) -> bool {
        match event {
            MapperEvent::Measured(size) => self.measure(size),
            MapperEvent::Tap(position) | MapperEvent::DragStart(position) => {
                self.select(position)
            }
            MapperEvent::Drag(position) => {
                tracing::trace!(x = position.x, y = position.y, "color map drag");
                self.select(position)
            }
        }
    }

    fn measure(&mut self, size: SurfaceSize) -> bool {
        let changed = self.surface != size;
        self.surface = size;

        if !size.is_measured() {
            return changed;
        }

        match self.selected_point {
            None => {
                tracing::debug!(
                    width = size.width,
                    height = size.height,
                    "color map measured, selecting center"
                );
                self.select(size.center()) || changed
            }
            // A shrunk surface pulls the selection back inside.
            Some(point) if size.clamp(point) != point => {
                tracing::debug!(
                    width = size.width,
                    height = size.height,
                    "color map shrank, clamping selection"
                );
                self.select(point) || changed
            }
            Some(_) => changed,
        }
    }

    fn select(&mut self, position: Point) -> bool {
        let Some((point, hsv)) = hsv_at(self.surface, position) else {
            return false;
        };

        let color = hsv.to_rgb();
        let changed = self.selected_point != Some(point) || self.color != color;

        self.selected_point = Some(point);
        self.hsv = hsv;
        self.color = color;

        if changed {
            tracing::debug!(
                hue = hsv.h,
                value = hsv.v,
                hex = %color.to_hex(),
                "color map selection"
            );
        }
        changed
    }
}
