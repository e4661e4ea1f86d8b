use rust_i18n::t;

use crate::composer::Channel;

const FALLBACK_LOCALE: &str = "en";

/// Localized screen text for one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    locale: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::new(FALLBACK_LOCALE)
    }
}

impl Labels {
    /// Unknown locales fall back to English.
    pub fn new(locale: &str) -> Self {
        let available = rust_i18n::available_locales!();
        let locale = if available.iter().any(|l| *l == locale) {
            locale
        } else {
            tracing::warn!(locale, "unsupported locale, falling back to {FALLBACK_LOCALE}");
            FALLBACK_LOCALE
        };

        Self {
            locale: locale.to_string(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn color_map_title(&self) -> String {
        t!("color_map.title", locale = self.locale.as_str()).to_string()
    }

    pub fn color_map_hint(&self) -> String {
        t!("color_map.hint", locale = self.locale.as_str()).to_string()
    }

    pub fn selected_color(&self, hex: &str) -> String {
        t!("color_map.selected", locale = self.locale.as_str(), hex = hex).to_string()
    }

    pub fn hex_composer_title(&self) -> String {
        t!("hex_composer.title", locale = self.locale.as_str()).to_string()
    }

    pub fn hex_composer_hint(&self) -> String {
        t!("hex_composer.hint", locale = self.locale.as_str()).to_string()
    }

    pub fn channel_label(&self, channel: Channel) -> String {
        match channel {
            Channel::Red => t!("hex_composer.red", locale = self.locale.as_str()),
            Channel::Green => t!("hex_composer.green", locale = self.locale.as_str()),
            Channel::Blue => t!("hex_composer.blue", locale = self.locale.as_str()),
        }
        .to_string()
    }

    pub fn apply(&self) -> String {
        t!("hex_composer.apply", locale = self.locale.as_str()).to_string()
    }

    pub fn invalid_hex_channel(&self) -> String {
        t!("hex_composer.invalid", locale = self.locale.as_str()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_labels() {
        let labels = Labels::new("pt-BR");
        assert_eq!(labels.locale(), "pt-BR");
        assert_eq!(labels.color_map_title(), "Mapa de Cores RGB");
        assert_eq!(
            labels.color_map_hint(),
            "Arraste o dedo no mapa para mudar a cor em tempo real."
        );
        assert_eq!(labels.selected_color("#FF0000"), "Cor selecionada: #FF0000");
        assert_eq!(labels.channel_label(Channel::Red), "Vermelho (R)");
    }

    #[test]
    fn test_english_labels() {
        let labels = Labels::new("en");
        assert_eq!(labels.color_map_title(), "RGB Color Map");
        assert_eq!(labels.selected_color("#00FF00"), "Selected color: #00FF00");
        assert_eq!(labels.channel_label(Channel::Blue), "Blue (B)");
        assert_eq!(labels.apply(), "Apply color");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let labels = Labels::new("xx-YY");
        assert_eq!(labels.locale(), "en");
        assert_eq!(labels.hex_composer_title(), "RGB Color Creator");
    }
}
