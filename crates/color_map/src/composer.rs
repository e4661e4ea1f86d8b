//! Compose a color from three 2-digit hex channels.

use std::fmt;

use crate::color::{ContrastRule, Rgb};
use crate::hex::{self, ParseHexError};
use crate::labels::Labels;
use crate::scene::Swatch;

/// Composer swatches only switch to white text over pure black.
pub const COMPOSER_CONTRAST: ContrastRule = ContrastRule::PureBlack;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposerEvent {
    /// The text field for `channel` wants to become `text`.
    Edit { channel: Channel, text: String },
    /// The apply button was pressed.
    Commit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComposerError {
    #[error("{channel} channel must be exactly two hex digits")]
    InvalidChannel { channel: Channel },
    #[error(transparent)]
    Parse(#[from] ParseHexError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComposerState {
    red: String,
    green: String,
    blue: String,
    color: Rgb,
    error: bool,
}

impl Default for ComposerState {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
    }
}

impl ComposerState {
    pub fn new(initial_color: Rgb) -> Self {
        Self {
            red: String::new(),
            green: String::new(),
            blue: String::new(),
            color: initial_color,
            error: false,
        }
    }

    pub fn channel(&self, channel: Channel) -> &str {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut String {
        match channel {
            Channel::Red => &mut self.red,
            Channel::Green => &mut self.green,
            Channel::Blue => &mut self.blue,
        }
    }

    /// The last committed color.
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    /// Whether the last commit was rejected.
    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn error_message(&self, labels: &Labels) -> Option<String> {
        self.error.then(|| labels.invalid_hex_channel())
    }

    pub fn swatch(&self) -> Swatch {
        Swatch::new(self.color, COMPOSER_CONTRAST)
    }

    /// Validate the pending fields and build the color they describe.
    ///
    /// Does not touch the committed state.
    pub fn composed(&self) -> Result<Rgb, ComposerError> {
        for channel in Channel::ALL {
            if !hex::is_valid_hex_channel(self.channel(channel)) {
                return Err(ComposerError::InvalidChannel { channel });
            }
        }

        let color = hex::from_hex(&format!("#{}{}{}", self.red, self.green, self.blue))?;
        Ok(color)
    }

    pub fn update(mut self, event: ComposerEvent) -> Self {
        self.apply(event);
        self
    }

    /// Apply `event` in place, returning whether anything changed.
    pub fn apply(&mut self, event: ComposerEvent) -> bool {
        match event {
            ComposerEvent::Edit { channel, text } => self.edit(channel, &text),
            ComposerEvent::Commit => self.commit(),
        }
    }

    fn edit(&mut self, channel: Channel, text: &str) -> bool {
        let Some(accepted) = hex::accept_channel_entry(text) else {
            tracing::trace!(%channel, text, "rejected channel edit");
            return false;
        };

        let field = self.channel_mut(channel);
        if *field == accepted {
            return false;
        }
        *field = accepted;
        true
    }

    fn commit(&mut self) -> bool {
        let before = (self.color, self.error);

        match self.composed() {
            Ok(color) => {
                self.color = color;
                self.error = false;
                tracing::debug!(hex = %color.to_hex(), "hex composer committed");
            }
            Err(err) => {
                self.error = true;
                tracing::debug!(%err, "hex composer commit rejected");
            }
        }

        before != (self.color, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(channel: Channel, text: &str) -> ComposerEvent {
        ComposerEvent::Edit {
            channel,
            text: text.to_string(),
        }
    }

    fn filled(red: &str, green: &str, blue: &str) -> ComposerState {
        ComposerState::default()
            .update(edit(Channel::Red, red))
            .update(edit(Channel::Green, green))
            .update(edit(Channel::Blue, blue))
    }

    #[test]
    fn test_default_is_white() {
        let state = ComposerState::default();
        assert_eq!(state.hex(), "#FFFFFF");
        assert!(!state.has_error());
        for channel in Channel::ALL {
            assert_eq!(state.channel(channel), "");
        }
    }

    #[test]
    fn test_commit_red() {
        let state = filled("FF", "00", "00").update(ComposerEvent::Commit);

        assert_eq!(state.hex(), "#FF0000");
        assert_eq!(state.color(), Rgb::RED);
        assert!(!state.has_error());

        let swatch = state.swatch();
        assert_eq!(swatch.fill, Rgb::RED);
        assert_eq!(swatch.label, "#FF0000");
        assert_eq!(swatch.label_color, Rgb::BLACK);
    }

    #[test]
    fn test_black_swatch_uses_white_text() {
        let state = filled("00", "00", "00").update(ComposerEvent::Commit);
        assert_eq!(state.swatch().label_color, Rgb::WHITE);

        let state = filled("01", "00", "00").update(ComposerEvent::Commit);
        assert_eq!(state.swatch().label_color, Rgb::BLACK);
    }

    #[test]
    fn test_edits_are_uppercased() {
        let state = filled("ab", "c", "0f");
        assert_eq!(state.channel(Channel::Red), "AB");
        assert_eq!(state.channel(Channel::Green), "C");
        assert_eq!(state.channel(Channel::Blue), "0F");
    }

    #[test]
    fn test_rejected_edits_leave_field() {
        let mut state = ComposerState::default();
        assert!(!state.apply(edit(Channel::Red, "GG")));
        assert_eq!(state.channel(Channel::Red), "");

        assert!(state.apply(edit(Channel::Red, "A")));
        assert!(!state.apply(edit(Channel::Red, "A1B")));
        assert!(!state.apply(edit(Channel::Red, "Az")));
        assert_eq!(state.channel(Channel::Red), "A");

        // Deleting back to empty is a valid edit.
        assert!(state.apply(edit(Channel::Red, "")));
        assert_eq!(state.channel(Channel::Red), "");
    }

    #[test]
    fn test_invalid_commit_keeps_color() {
        let state = ComposerState::default()
            .update(edit(Channel::Red, "GG"))
            .update(edit(Channel::Green, "00"))
            .update(edit(Channel::Blue, "00"))
            .update(ComposerEvent::Commit);

        assert!(state.has_error());
        assert_eq!(state.hex(), "#FFFFFF");
        assert_eq!(
            state.composed(),
            Err(ComposerError::InvalidChannel {
                channel: Channel::Red
            })
        );
    }

    #[test]
    fn test_short_channel_fails_commit_after_success() {
        let state = filled("12", "34", "56").update(ComposerEvent::Commit);
        assert_eq!(state.hex(), "#123456");

        let state = state
            .update(edit(Channel::Blue, "5"))
            .update(ComposerEvent::Commit);
        assert!(state.has_error());
        assert_eq!(state.hex(), "#123456");
        assert_eq!(
            state.composed(),
            Err(ComposerError::InvalidChannel {
                channel: Channel::Blue
            })
        );
    }

    #[test]
    fn test_valid_commit_clears_error() {
        let state = filled("12", "", "56").update(ComposerEvent::Commit);
        assert!(state.has_error());

        // Editing alone does not clear the flag.
        let state = state.update(edit(Channel::Green, "34"));
        assert!(state.has_error());

        let state = state.update(ComposerEvent::Commit);
        assert!(!state.has_error());
        assert_eq!(state.hex(), "#123456");
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut state = filled("0A", "BC", "7F");
        assert!(state.apply(ComposerEvent::Commit));
        let first = state.clone();

        assert!(!state.apply(ComposerEvent::Commit));
        assert_eq!(state, first);
        assert_eq!(state.hex(), "#0ABC7F");
    }

    #[test]
    fn test_error_message_is_localized() {
        let state = ComposerState::default().update(ComposerEvent::Commit);

        let en = state.error_message(&Labels::new("en")).unwrap();
        let pt = state.error_message(&Labels::new("pt-BR")).unwrap();
        assert!(!en.is_empty());
        assert_ne!(en, pt);

        assert_eq!(ComposerState::default().error_message(&Labels::new("en")), None);
    }

    #[test]
    fn test_error_display() {
        let err = ComposerError::InvalidChannel {
            channel: Channel::Green,
        };
        assert_eq!(err.to_string(), "green channel must be exactly two hex digits");
    }
}
