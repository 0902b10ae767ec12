use std::fmt::Display;

pub const RESET: &str = "\u{1b}[0m";

/// The ANSI colors a template token can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Reset,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Reset,
    ];

    pub const fn escape_code(self) -> &'static str {
        match self {
            Color::Black => "\u{1b}[30m",
            Color::Red => "\u{1b}[31m",
            Color::Green => "\u{1b}[32m",
            Color::Yellow => "\u{1b}[33m",
            Color::Blue => "\u{1b}[34m",
            Color::Magenta => "\u{1b}[35m",
            Color::Cyan => "\u{1b}[36m",
            Color::White => "\u{1b}[37m",
            Color::Reset => RESET,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Reset => "reset",
        }
    }

    /// Case-insensitive lookup. `None` for anything outside the closed set,
    /// including `"none"`.
    pub fn from_name(name: &str) -> Option<Color> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// Whether `name` is something a token may carry as a color suffix.
    pub fn is_color_name(name: &str) -> bool {
        name.eq_ignore_ascii_case("none") || Self::from_name(name).is_some()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Wraps `text` in the start sequence of `color` and [`RESET`]. Without a
/// color the text comes back as is.
pub fn colorize(text: &str, color: Option<Color>) -> String {
    match color {
        Some(color) => format!("{}{text}{RESET}", color.escape_code()),
        None => text.to_string(),
    }
}

/// [`colorize`] with a color given by name; unknown names leave `text` plain.
pub fn colorize_named(text: &str, color_name: &str) -> String {
    colorize(text, Color::from_name(color_name))
}

#[cfg(test)]
mod tests {
    use super::{colorize, colorize_named, Color, RESET};

    #[test]
    fn should_find_colors_case_insensitively() {
        assert_eq!(Color::from_name("blue"), Some(Color::Blue));
        assert_eq!(Color::from_name("MAGENTA"), Some(Color::Magenta));
        assert_eq!(Color::from_name("Cyan"), Some(Color::Cyan));
        assert_eq!(Color::from_name("reset"), Some(Color::Reset));
        assert_eq!(Color::from_name("none"), None);
        assert_eq!(Color::from_name("purple"), None);
        assert_eq!(Color::from_name(""), None);
    }

    #[test]
    fn should_wrap_text_with_start_and_reset() {
        for color in Color::ALL {
            let colored = colorize_named("some text", &color.name().to_uppercase());

            let start = colored.find(color.escape_code()).unwrap();
            let text = colored.find("some text").unwrap();
            let reset = colored.rfind(RESET).unwrap();

            assert_eq!(start, 0);
            assert!(start < text && text < reset, "bad order for {color}");
            assert!(colored.ends_with(RESET));
        }
    }

    #[test]
    fn should_leave_text_plain_for_unknown_color() {
        assert_eq!(colorize_named("plain", "none"), "plain");
        assert_eq!(colorize_named("plain", "chartreuse"), "plain");
        assert_eq!(colorize("plain", None), "plain");
    }

    #[test]
    fn should_recognize_color_suffixes() {
        assert!(Color::is_color_name("None"));
        assert!(Color::is_color_name("white"));
        assert!(!Color::is_color_name("30"));
    }
}
