#![allow(non_snake_case)]

// Reusable site footer
//
// the footer renders attribution text, the current copyright year and a
// link to the author, with layout and colors picked from a handful of
// options.  class names target a tailwind-style utility stylesheet that
// the embedding application supplies; the only css shipped here is the
// animation set in style.rs

mod config;
mod icons;
mod markup;
pub mod style;

pub use config::{DEFAULT_AUTHOR_NAME, DEFAULT_AUTHOR_URL, FooterConfig, Position, Theme, resolve};
pub use icons::{ExternalLinkIcon, HeartIcon};
pub use markup::{EFFECT_CLASSES, Footer, FooterMarkup, RIGHTS_TEXT, current_year};
