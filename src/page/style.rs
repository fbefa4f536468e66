use crate::data::{Event, DEFAULT_EVENT_COLOR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

/// How one event block is drawn. The same policy applies in every view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventStyle {
    pub background: Rgb,
    pub foreground: Rgb,
    pub rounded: bool,
    pub bordered: bool,
}

pub fn event_style(event: &Event) -> EventStyle {
    EventStyle {
        background: color_or_default(event.color_or_default()),
        foreground: WHITE,
        rounded: true,
        bordered: false,
    }
}

/// Parses `#rrggbb` or `#rgb`, falling back to the default event blue.
pub fn color_or_default(color: &str) -> Rgb {
    parse_hex_color(color)
        .or_else(|| parse_hex_color(DEFAULT_EVENT_COLOR))
        .unwrap_or(Rgb(0x42, 0x85, 0xf4))
}

pub fn parse_hex_color(color: &str) -> Option<Rgb> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => Some(Rgb(
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )),
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ev(color: Option<&str>) -> Event {
        let at = NaiveDate::from_ymd_opt(2025, 11, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Event {
            id: "1".to_string(),
            title: "Demo".to_string(),
            start: at,
            end: at,
            color: color.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn test_style_uses_event_color_with_white_text() {
        let style = event_style(&ev(Some("#0f9d58")));
        assert_eq!(style.background, Rgb(0x0f, 0x9d, 0x58));
        assert_eq!(style.foreground, WHITE);
        assert!(style.rounded);
        assert!(!style.bordered);
    }

    #[test]
    fn test_style_defaults_to_blue() {
        assert_eq!(event_style(&ev(None)).background, Rgb(0x42, 0x85, 0xf4));
        assert_eq!(event_style(&ev(Some("tomato"))).background, Rgb(0x42, 0x85, 0xf4));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_hex_color("#fff"), Some(WHITE));
        assert_eq!(parse_hex_color("#0a0"), Some(Rgb(0, 0xaa, 0)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_hex_color("0f9d58"), None);
        assert_eq!(parse_hex_color("#0f9d5"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }
}
