use color_map::{Channel, ComposerEvent, ComposerState, HexComposerConfig, Labels};
use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement as _, Render, Styled as _,
    Subscription, Window, div, prelude::FluentBuilder as _, px, red,
};
use gpui_component::{
    ActiveTheme as _,
    button::{Button, ButtonVariants as _},
    h_flex,
    input::{Input, InputEvent, InputState},
    v_flex,
};

use crate::render_swatch;

/// Type three hex channels and apply them as one color.
pub struct HexComposerScreen {
    state: ComposerState,
    labels: Labels,
    inputs: [Entity<InputState>; 3],
    programmatic_update: bool,
    _subscriptions: Vec<Subscription>,
}

impl HexComposerScreen {
    pub fn view(
        config: HexComposerConfig,
        labels: Labels,
        window: &mut Window,
        cx: &mut App,
    ) -> Entity<Self> {
        cx.new(|cx| Self::new(config, labels, window, cx))
    }

    fn new(
        config: HexComposerConfig,
        labels: Labels,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let inputs = Channel::ALL.map(|_| {
            cx.new(|cx| {
                InputState::new(window, cx)
                    .placeholder("00")
                    .pattern(regex::Regex::new(r"^[0-9a-fA-F]{0,2}$").unwrap())
            })
        });

        let mut _subscriptions = vec![];
        for (channel, input) in Channel::ALL.into_iter().zip(inputs.iter()) {
            _subscriptions.push(cx.subscribe_in(
                input,
                window,
                move |this, input, event: &InputEvent, window, cx| match event {
                    InputEvent::Change => this.on_channel_change(channel, input, window, cx),
                    InputEvent::PressEnter { .. } => this.commit(cx),
                    _ => {}
                },
            ));
        }

        Self {
            state: ComposerState::new(config.initial_color),
            labels,
            inputs,
            programmatic_update: false,
            _subscriptions,
        }
    }

    fn on_channel_change(
        &mut self,
        channel: Channel,
        input: &Entity<InputState>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.programmatic_update {
            return;
        }

        let text = input.read(cx).value().to_string();
        self.state.apply(ComposerEvent::Edit {
            channel,
            text: text.clone(),
        });

        // Show what the state kept: uppercased, or the old value if rejected.
        let stored = self.state.channel(channel).to_string();
        if stored != text {
            self.programmatic_update = true;
            input.update(cx, |input, cx| input.set_value(stored, window, cx));
            self.programmatic_update = false;
        }
        cx.notify();
    }

    fn commit(&mut self, cx: &mut Context<Self>) {
        self.state.apply(ComposerEvent::Commit);
        cx.notify();
    }
}

impl Render for HexComposerScreen {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let swatch = self.state.swatch();
        let error = self.state.error_message(&self.labels);

        v_flex()
            .size_full()
            .p_4()
            .gap_2()
            .child(div().text_xl().child(self.labels.hex_composer_title()))
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(self.labels.hex_composer_hint()),
            )
            .child(
                h_flex().mt_2().w_full().gap_3().children(
                    Channel::ALL
                        .into_iter()
                        .zip(self.inputs.iter())
                        .map(|(channel, input)| {
                            v_flex()
                                .flex_1()
                                .gap_1()
                                .child(div().text_sm().child(self.labels.channel_label(channel)))
                                .child(Input::new(input))
                        }),
                ),
            )
            .child(
                Button::new("hex-composer-apply")
                    .primary()
                    .label(self.labels.apply())
                    .on_click(cx.listener(|this, _, _, cx| this.commit(cx))),
            )
            .when_some(error, |this, message| {
                this.child(div().text_sm().text_color(red()).child(message))
            })
            .child(div().mt_3().text_lg().child(swatch.label.clone()))
            .child(div().h(px(4.0)))
            .child(render_swatch(&swatch))
    }
}
