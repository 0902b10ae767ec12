use std::{borrow::Cow, fmt::Display, slice};

use serde::Deserialize;

use crate::{escape_code::Color, LogLevel};

/// What a template token expands to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MacroName {
    Time,
    User,
    Level,
    Message,
    /// Anything that is not a known macro is echoed verbatim.
    Literal(String),
}

impl MacroName {
    pub fn parse(name: &str) -> Self {
        match name {
            "time" | "$T" => Self::Time,
            "user" | "$U" => Self::User,
            "level" | "$L" => Self::Level,
            "message" | "$M" => Self::Message,
            _ => Self::Literal(name.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Time => "time",
            Self::User => "user",
            Self::Level => "level",
            Self::Message => "message",
            Self::Literal(literal) => literal,
        }
    }

    pub fn resolve<'a>(&'a self, ctx: &MacroContext<'a>) -> Cow<'a, str> {
        match self {
            Self::Time => Cow::Borrowed(ctx.time),
            Self::User => Cow::Borrowed(ctx.user),
            Self::Level => Cow::Owned(ctx.level.to_string()),
            Self::Message => Cow::Borrowed(ctx.chunk),
            Self::Literal(literal) => Cow::Borrowed(literal),
        }
    }
}

/// Values the macros of one output line resolve against.
#[derive(Debug, Clone, Copy)]
pub struct MacroContext<'a> {
    pub time: &'a str,
    pub user: &'a str,
    pub level: LogLevel,
    pub chunk: &'a str,
}

/// One `macro[:color]` entry of a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct FormatToken {
    pub name: MacroName,
    pub color: Option<Color>,
}

impl FormatToken {
    pub fn new(name: MacroName, color: Option<Color>) -> Self {
        Self { name, color }
    }

    /// Parses `macro[:color]`. A known macro always takes the text after the
    /// last `:` as its color, and an unknown color leaves it plain. Literals
    /// only split on a color name (or `none`), so `"12:30"` stays whole.
    pub fn parse(token: &str) -> Self {
        if let Some((name, suffix)) = token.rsplit_once(':') {
            let macro_name = MacroName::parse(name);
            if macro_name.is_known() || Color::is_color_name(suffix) {
                return Self::new(macro_name, Color::from_name(suffix));
            }
        }

        Self::new(MacroName::parse(token), None)
    }
}

impl From<&str> for FormatToken {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for FormatToken {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl Display for FormatToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Some(color) => write!(f, "{}:{color}", self.name.as_str()),
            None => f.write_str(self.name.as_str()),
        }
    }
}

/// Ordered tokens of one output line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Template(Vec<FormatToken>);

impl Template {
    pub fn new(tokens: Vec<FormatToken>) -> Self {
        Self(tokens)
    }

    pub fn push(&mut self, token: impl Into<FormatToken>) {
        self.0.push(token.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, FormatToken> {
        self.0.iter()
    }

    /// Pairs `colors` with the tokens by position. Tokens past the end of
    /// `colors` lose their color, surplus colors are dropped.
    pub fn set_colors<I, S>(&mut self, colors: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut colors = colors.into_iter();
        for token in self.0.iter_mut() {
            token.color = colors
                .next()
                .and_then(|name| Color::from_name(name.as_ref()));
        }
    }
}

impl<T: Into<FormatToken>> FromIterator<T> for Template {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Template {
    type Item = &'a FormatToken;
    type IntoIter = slice::Iter<'a, FormatToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
