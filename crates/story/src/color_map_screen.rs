use color_map::{
    ColorMapConfig, ColorMapScene, Labels, MapperEvent, MapperState, Marker, Rgb, ShadeOverlay,
    SurfaceSize,
};
use gpui::{prelude::FluentBuilder as _, *};
use gpui_component::{ActiveTheme as _, v_flex};

use crate::{render_swatch, to_hsla, with_alpha};

/// Drag or tap on the hue/value surface to pick a color.
pub struct ColorMapScreen {
    state: MapperState,
    config: ColorMapConfig,
    labels: Labels,
    bounds: Bounds<Pixels>,
    pressed: bool,
    dragging: bool,
}

impl ColorMapScreen {
    pub fn view(config: ColorMapConfig, labels: Labels, cx: &mut App) -> Entity<Self> {
        cx.new(|_| Self {
            state: MapperState::new(config.initial_color),
            config,
            labels,
            bounds: Bounds::default(),
            pressed: false,
            dragging: false,
        })
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    fn dispatch(&mut self, event: MapperEvent, cx: &mut Context<Self>) {
        if self.state.apply(event) {
            cx.notify();
        }
    }

    fn local_point(&self, position: Point<Pixels>) -> color_map::Point {
        let local = position - self.bounds.origin;
        color_map::Point::new(local.x.as_f32(), local.y.as_f32())
    }

    fn measure(&mut self, bounds: Bounds<Pixels>, cx: &mut Context<Self>) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;

        let size = SurfaceSize::new(bounds.size.width.as_f32(), bounds.size.height.as_f32());
        self.dispatch(MapperEvent::Measured(size), cx);
    }

    fn press(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        self.pressed = true;
        let point = self.local_point(position);
        self.dispatch(MapperEvent::Tap(point), cx);
    }

    /// Follows the pointer while pressed, even outside the surface.
    fn drag_to(&mut self, position: Point<Pixels>, cx: &mut Context<Self>) {
        if !self.pressed {
            return;
        }

        let point = self.local_point(position);
        if self.dragging {
            self.dispatch(MapperEvent::Drag(point), cx);
        } else {
            self.dragging = true;
            self.dispatch(MapperEvent::DragStart(point), cx);
        }
    }

    fn release(&mut self) {
        self.pressed = false;
        self.dragging = false;
    }

    fn render_surface(&self, scene: &ColorMapScene, cx: &mut Context<Self>) -> impl IntoElement {
        let entity = cx.entity();
        let stops = scene.hue_stops;
        let shade = scene.shade;

        div()
            .id("color-map-surface")
            .relative()
            .size_full()
            .cursor_crosshair()
            .child(
                canvas(
                    {
                        let entity = entity.clone();
                        move |bounds, _, cx| {
                            entity.update(cx, |this, cx| this.measure(bounds, cx));
                        }
                    },
                    move |bounds, _, window, _| {
                        paint_hue_gradient(window, bounds, &stops);
                        paint_shade(window, bounds, shade);

                        window.on_mouse_event({
                            let entity = entity.clone();
                            move |ev: &MouseMoveEvent, phase, _, cx| {
                                if !phase.bubble() || ev.pressed_button != Some(MouseButton::Left) {
                                    return;
                                }
                                entity.update(cx, |this, cx| this.drag_to(ev.position, cx));
                            }
                        });

                        window.on_mouse_event({
                            let entity = entity.clone();
                            move |_: &MouseUpEvent, phase, _, cx| {
                                if !phase.bubble() {
                                    return;
                                }
                                entity.update(cx, |this, _| this.release());
                            }
                        });
                    },
                )
                .absolute()
                .size_full(),
            )
            .when_some(scene.marker, |this, marker| this.child(render_marker(marker)))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseDownEvent, _, cx| {
                    cx.stop_propagation();
                    this.press(ev.position, cx);
                }),
            )
    }
}

fn paint_quad_fill(window: &mut Window, bounds: Bounds<Pixels>, background: Background) {
    window.paint_quad(PaintQuad {
        bounds,
        corner_radii: Corners::default(),
        background,
        border_widths: Edges::default(),
        border_color: transparent_black(),
        border_style: BorderStyle::default(),
    });
}

/// One two-stop band per pair of neighbouring stops.
fn paint_hue_gradient(window: &mut Window, bounds: Bounds<Pixels>, stops: &[Rgb]) {
    let bands = stops.len().saturating_sub(1);
    if bands == 0 {
        return;
    }
    let band_width = bounds.size.width / bands as f32;

    for (i, pair) in stops.windows(2).enumerate() {
        let start_x = bounds.origin.x + band_width * i as f32;
        let end_x = if i == bands - 1 {
            bounds.origin.x + bounds.size.width
        } else {
            start_x + band_width + px(0.5)
        };

        paint_quad_fill(
            window,
            Bounds {
                origin: point(start_x, bounds.origin.y),
                size: size(end_x - start_x, bounds.size.height),
            },
            linear_gradient(
                90.0,
                linear_color_stop(to_hsla(pair[0]), 0.0),
                linear_color_stop(to_hsla(pair[1]), 1.0),
            ),
        );
    }
}

fn paint_shade(window: &mut Window, bounds: Bounds<Pixels>, shade: ShadeOverlay) {
    paint_quad_fill(
        window,
        bounds,
        linear_gradient(
            180.0,
            linear_color_stop(with_alpha(shade.color, shade.top_alpha), 0.0),
            linear_color_stop(with_alpha(shade.color, shade.bottom_alpha), 1.0),
        ),
    );
}

fn render_marker(marker: Marker) -> impl IntoElement {
    let center = marker.center;

    div()
        .absolute()
        .inset_0()
        .children(marker.rings.map(|ring| {
            div()
                .absolute()
                .left(px(center.x - ring.radius))
                .top(px(center.y - ring.radius))
                .size(px(ring.radius * 2.0))
                .rounded_full()
                .bg(to_hsla(ring.color))
        }))
}

impl Render for ColorMapScreen {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let scene = ColorMapScene::new(&self.state, &self.config);

        v_flex()
            .size_full()
            .p_4()
            .gap_2()
            .child(div().text_xl().child(self.labels.color_map_title()))
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(self.labels.color_map_hint()),
            )
            .child(
                div()
                    .mt_2()
                    .w_full()
                    .h(px(260.0))
                    .p_2()
                    .rounded(px(12.0))
                    .bg(rgb(0x1F1F1F))
                    .child(self.render_surface(&scene, cx)),
            )
            .child(
                div()
                    .mt_3()
                    .text_lg()
                    .child(self.labels.selected_color(&scene.swatch.label)),
            )
            .child(render_swatch(&scene.swatch))
    }
}
