use std::sync::LazyLock;

use regex::Regex;

use crate::color::Rgb;

/// What a channel field may hold while the user is still typing.
static CHANNEL_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{0,2}$").unwrap());

/// What a channel must hold to be committed.
static CHANNEL_COMPLETE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Fa-f]{2}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexError {
    #[error("expected 6 hex digits, found {0} characters")]
    InvalidLength(usize),
    #[error("invalid hex digit")]
    InvalidDigit,
}

/// Format as `#RRGGBB` with uppercase digits.
pub fn to_hex(color: Rgb) -> String {
    let [r, g, b] = color.to_u8();
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Parse `RRGGBB`, with or without a leading `#`.
pub fn from_hex(input: &str) -> Result<Rgb, ParseHexError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let bytes = digits.as_bytes();
    if bytes.len() != 6 {
        return Err(ParseHexError::InvalidLength(digits.chars().count()));
    }

    let nibble = |c: u8| -> Result<u8, ParseHexError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(ParseHexError::InvalidDigit),
        }
    };
    let channel =
        |hi: u8, lo: u8| -> Result<u8, ParseHexError> { Ok(nibble(hi)? << 4 | nibble(lo)?) };

    Ok(Rgb::from_u8(
        channel(bytes[0], bytes[1])?,
        channel(bytes[2], bytes[3])?,
        channel(bytes[4], bytes[5])?,
    ))
}

/// True for exactly two hex digits, either case.
pub fn is_valid_hex_channel(input: &str) -> bool {
    CHANNEL_COMPLETE.is_match(input)
}

/// Filter a proposed channel field value.
///
/// Returns the uppercased text when it is at most two hex digits, `None`
/// when the edit must be dropped.
pub fn accept_channel_entry(input: &str) -> Option<String> {
    CHANNEL_ENTRY
        .is_match(input)
        .then(|| input.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(Rgb::RED), "#FF0000");
        assert_eq!(to_hex(Rgb::WHITE), "#FFFFFF");
        assert_eq!(to_hex(Rgb::BLACK), "#000000");
        assert_eq!(to_hex(Rgb::from_u8(0x0A, 0xBC, 0x7F)), "#0ABC7F");
        // Out of range channels are clamped, halves round up.
        assert_eq!(to_hex(Rgb::new(1.5, -0.2, 0.5)), "#FF0080");
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(from_hex("#FF0000"), Ok(Rgb::RED));
        assert_eq!(from_hex("00ff00"), Ok(Rgb::GREEN));
        assert_eq!(from_hex("#0abc7F"), Ok(Rgb::from_u8(0x0A, 0xBC, 0x7F)));
    }

    #[test]
    fn test_from_hex_errors() {
        assert_eq!(from_hex(""), Err(ParseHexError::InvalidLength(0)));
        assert_eq!(from_hex("#"), Err(ParseHexError::InvalidLength(0)));
        assert_eq!(from_hex("#FFF"), Err(ParseHexError::InvalidLength(3)));
        assert_eq!(from_hex("#FF00000"), Err(ParseHexError::InvalidLength(7)));
        assert_eq!(from_hex("##FF0000"), Err(ParseHexError::InvalidLength(7)));
        assert_eq!(from_hex("#GG0000"), Err(ParseHexError::InvalidDigit));
        assert_eq!(from_hex("#FF 000"), Err(ParseHexError::InvalidDigit));
        // Six bytes but three characters: rejected per byte, never sliced.
        assert_eq!(from_hex("ééé"), Err(ParseHexError::InvalidDigit));
        assert_eq!(from_hex("#FFé"), Err(ParseHexError::InvalidLength(3)));
    }

    #[test]
    fn test_is_valid_hex_channel() {
        assert!(is_valid_hex_channel("FF"));
        assert!(is_valid_hex_channel("a1"));
        assert!(is_valid_hex_channel("0f"));

        assert!(!is_valid_hex_channel(""));
        assert!(!is_valid_hex_channel("A"));
        assert!(!is_valid_hex_channel("GG"));
        assert!(!is_valid_hex_channel("A1B"));
        assert!(!is_valid_hex_channel("F\n"));
    }

    #[test]
    fn test_accept_channel_entry() {
        assert_eq!(accept_channel_entry(""), Some(String::new()));
        assert_eq!(accept_channel_entry("a"), Some("A".to_string()));
        assert_eq!(accept_channel_entry("fe"), Some("FE".to_string()));

        assert_eq!(accept_channel_entry("G"), None);
        assert_eq!(accept_channel_entry("GG"), None);
        assert_eq!(accept_channel_entry("ABC"), None);
        assert_eq!(accept_channel_entry(" A"), None);
    }

    proptest! {
        #[test]
        fn hex_round_trips_quantized_colors(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let color = Rgb::from_u8(r, g, b);
            prop_assert_eq!(from_hex(&to_hex(color)), Ok(color));
        }

        #[test]
        fn hex_is_seven_uppercase_chars(r in 0.0f32..=1.0, g in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let hex = to_hex(Rgb::new(r, g, b));
            prop_assert_eq!(hex.len(), 7);
            prop_assert!(hex.starts_with('#'));
            prop_assert!(hex[1..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }
}
