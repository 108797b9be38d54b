use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_AUTHOR_NAME: &str = "Mahesh";
pub const DEFAULT_AUTHOR_URL: &str = "https://maheshhattimare.vercel.app/";

/// Layout strategy for the footer root
///
/// Parsing never fails: anything that is not "fixed" or "sticky" keeps the
/// footer in normal document flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Position {
    #[default]
    Relative,
    Fixed,
    Sticky,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relative => "relative",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Self::Fixed => "fixed bottom-0 left-0 right-0 z-50",
            Self::Sticky => "sticky bottom-0 z-40",
            Self::Relative => "relative",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Position {
    fn from(value: &str) -> Self {
        match value {
            "fixed" => Self::Fixed,
            "sticky" => Self::Sticky,
            _ => Self::Relative,
        }
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Color scheme for the footer root
///
/// `Auto` emits both the light and the `dark:` tagged classes and leaves the
/// choice to whatever dark-mode signal the host stylesheet keys on.  Unknown
/// names resolve to `Auto`, not to the `Light` default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            Self::Light => "bg-white/90 text-gray-600 border-gray-200",
            Self::Dark => "bg-gray-900/90 text-gray-400 border-gray-700",
            Self::Auto => {
                "bg-white/90 dark:bg-gray-900/90 text-gray-600 dark:text-gray-400 border-gray-200 dark:border-gray-700"
            }
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        match value {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Auto,
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Map raw option names to their (position, theme) class strings
pub fn resolve(position: &str, theme: &str) -> (&'static str, &'static str) {
    (
        Position::from(position).classes(),
        Theme::from(theme).classes(),
    )
}

// FooterConfig doubles as the component props and as the serialized form a
// host keeps around, so every field defaults independently in both worlds
#[derive(Clone, Debug, PartialEq, Props, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    #[props(into, default = DEFAULT_AUTHOR_NAME.to_owned())]
    pub author_name: String,
    /// Rendered as the link target only, never navigated to by the footer
    #[props(into, default = DEFAULT_AUTHOR_URL.to_owned())]
    pub author_url: String,
    #[props(into, default)]
    pub position: Position,
    #[props(into, default)]
    pub theme: Theme,
    /// Appended verbatim after every internal class
    #[props(into, default)]
    pub class_name: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        FooterConfig {
            author_name: DEFAULT_AUTHOR_NAME.to_owned(),
            author_url: DEFAULT_AUTHOR_URL.to_owned(),
            position: Position::default(),
            theme: Theme::default(),
            class_name: String::new(),
        }
    }
}
