mod color_map_screen;
mod hex_composer_screen;

use anyhow::Context as _;
use color_map::{Config, Labels, Rgb, Swatch};
use gpui::{
    App, AppContext, Bounds, Context, Entity, Hsla, IntoElement, ParentElement, Render, Rgba,
    SharedString, Styled, Window, WindowBounds, WindowKind, WindowOptions, div,
    prelude::FluentBuilder as _, px, size,
};
use gpui_component::{
    Root,
    button::{Button, ButtonVariants as _},
    h_flex, v_flex,
};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub use color_map_screen::ColorMapScreen;
pub use hex_composer_screen::HexComposerScreen;

const CONFIG_ENV: &str = "COLOR_MAP_CONFIG";

pub(crate) fn to_hsla(color: Rgb) -> Hsla {
    with_alpha(color, 1.0)
}

pub(crate) fn with_alpha(color: Rgb, a: f32) -> Hsla {
    Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a,
    }
    .into()
}

pub(crate) fn render_swatch(swatch: &Swatch) -> impl IntoElement {
    div()
        .w_full()
        .h(px(150.0))
        .rounded(px(12.0))
        .bg(to_hsla(swatch.fill))
        .flex()
        .items_center()
        .justify_center()
        .text_color(to_hsla(swatch.label_color))
        .child(swatch.label.clone())
}

fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    let path = path
        .map(str::to_string)
        .or_else(|| std::env::var(CONFIG_ENV).ok());

    match path {
        Some(path) => Config::load(&path).with_context(|| format!("loading {path}")),
        None => Ok(Config::default()),
    }
}

/// Set up logging and gpui-component, returning the active config.
pub fn init(config_path: Option<&str>, cx: &mut App) -> Config {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("color_map=debug".parse().unwrap()),
        )
        .init();

    gpui_component::init(cx);

    load_config(config_path).unwrap_or_else(|err| {
        tracing::error!("Failed to load config, using defaults: {:#}", err);
        Config::default()
    })
}

pub fn create_new_window<F, E>(title: &str, crate_view_fn: F, cx: &mut App)
where
    E: Into<gpui::AnyView>,
    F: FnOnce(&mut Window, &mut App) -> E + Send + 'static,
{
    // Phone-like portrait window.
    let mut window_size = size(px(420.0), px(760.0));
    if let Some(display) = cx.primary_display() {
        let display_size = display.bounds().size;
        window_size.height = window_size.height.min(display_size.height * 0.9);
    }

    let window_bounds = Bounds::centered(None, window_size, cx);
    let title = SharedString::from(title.to_string());

    cx.spawn(async move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(window_bounds)),
            window_min_size: Some(gpui::Size {
                width: px(320.),
                height: px(560.),
            }),
            kind: WindowKind::Normal,
            ..Default::default()
        };

        let window = cx.open_window(options, |window, cx| {
            let view = crate_view_fn(window, cx);
            cx.new(|cx| Root::new(view.into(), window, cx))
        })?;

        window.update(cx, |_, window, _| {
            window.activate_window();
            window.set_window_title(&title);
        })?;

        Ok::<_, anyhow::Error>(())
    })
    .detach();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    ColorMap,
    HexComposer,
}

/// Switches between the two screens.
pub struct Gallery {
    active: Screen,
    color_map: Entity<ColorMapScreen>,
    hex_composer: Entity<HexComposerScreen>,
}

impl Gallery {
    pub fn view(config: Config, window: &mut Window, cx: &mut App) -> Entity<Self> {
        let labels = Labels::new(&config.locale);
        let color_map = ColorMapScreen::view(config.color_map.clone(), labels.clone(), cx);
        let hex_composer =
            HexComposerScreen::view(config.hex_composer.clone(), labels, window, cx);

        cx.new(|_| Self {
            active: Screen::ColorMap,
            color_map,
            hex_composer,
        })
    }

    fn tab(
        &self,
        id: &'static str,
        screen: Screen,
        label: String,
        cx: &mut Context<Self>,
    ) -> Button {
        Button::new(id)
            .label(label)
            .when(self.active == screen, |this| this.primary())
            .when(self.active != screen, |this| this.ghost())
            .on_click(cx.listener(move |this, _, _, cx| {
                this.active = screen;
                cx.notify();
            }))
    }
}

impl Render for Gallery {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (map_title, composer_title) = {
            let labels = self.color_map.read(cx).labels();
            (labels.color_map_title(), labels.hex_composer_title())
        };

        v_flex()
            .size_full()
            .child(
                h_flex()
                    .w_full()
                    .p_2()
                    .gap_2()
                    .child(self.tab("tab-color-map", Screen::ColorMap, map_title, cx))
                    .child(self.tab(
                        "tab-hex-composer",
                        Screen::HexComposer,
                        composer_title,
                        cx,
                    )),
            )
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .map(|this| match self.active {
                        Screen::ColorMap => this.child(self.color_map.clone()),
                        Screen::HexComposer => this.child(self.hex_composer.clone()),
                    }),
            )
    }
}
