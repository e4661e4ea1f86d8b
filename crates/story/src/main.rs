use color_map_story::{Gallery, create_new_window, init};

fn main() {
    let app = gpui_platform::application();

    // `cargo run -- [config.json]`
    let config_path = std::env::args().nth(1);

    app.run(move |cx| {
        let config = init(config_path.as_deref(), cx);
        cx.activate(true);

        create_new_window(
            "Color Map",
            move |window, cx| Gallery::view(config, window, cx),
            cx,
        );
    });
}
