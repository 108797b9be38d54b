use chrono::{Datelike, Local};
use dioxus::prelude::*;
use tracing::trace;

use crate::{
    config::FooterConfig,
    icons::{ExternalLinkIcon, HeartIcon},
    style::{ANIMATE_FADE_IN, ANIMATE_PULSE_HEART, ANIMATE_SLIDE_UP, FOOTER_STYLES},
};

/// Blur, border and transition classes applied regardless of configuration
pub const EFFECT_CLASSES: &str = "backdrop-blur-md border-t transition-all duration-300";

pub const RIGHTS_TEXT: &str = "All Rights Reserved.";

const LINK_TARGET: &str = "_blank";
const LINK_REL: &str = "noopener noreferrer";

/// Calendar year from the local wall clock, read fresh on every call
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Everything a single render of the footer shows, minus the fixed markup
///
/// Keeping this separate from the rsx lets the configuration-dependent parts
/// be compared directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterMarkup {
    pub root_class: String,
    pub copyright: String,
    pub author_name: String,
    pub link_href: String,
    pub link_target: &'static str,
    pub link_rel: &'static str,
    pub rights: &'static str,
}

impl FooterConfig {
    pub fn assemble(&self, year: i32) -> FooterMarkup {
        let mut root_class = [
            self.position.classes(),
            self.theme.classes(),
            EFFECT_CLASSES,
        ]
        .join(" ");

        if !self.class_name.is_empty() {
            root_class.push(' ');
            root_class.push_str(&self.class_name);
        }

        FooterMarkup {
            root_class,
            copyright: format!("© {year} Made with"),
            author_name: self.author_name.clone(),
            link_href: self.author_url.clone(),
            link_target: LINK_TARGET,
            link_rel: LINK_REL,
            rights: RIGHTS_TEXT,
        }
    }
}

#[component]
pub fn Footer(props: FooterConfig) -> Element {
    trace!(position = %props.position, theme = %props.theme, "rendering footer");

    let markup = props.assemble(current_year());

    rsx! {
        footer { class: "{markup.root_class}",
            div { class: "max-w-7xl mx-auto px-4 py-4",
                div { class: "flex flex-col sm:flex-row items-center justify-center sm:justify-between space-y-2 sm:space-y-0 {ANIMATE_FADE_IN}",
                    div { class: "flex items-center space-x-2 text-sm",
                        span { "{markup.copyright}" }
                        div { class: ANIMATE_PULSE_HEART, HeartIcon {} }
                        span { "by" }
                        a {
                            href: "{markup.link_href}",
                            target: markup.link_target,
                            rel: markup.link_rel,
                            class: "font-semibold text-purple-600 dark:text-purple-400 hover:text-purple-700 dark:hover:text-purple-300 transition-all duration-200 flex items-center space-x-1 group hover:scale-105 active:scale-95 transform",
                            span { "{markup.author_name}" }
                            ExternalLinkIcon {}
                        }
                    }

                    // hidden below the sm breakpoint, but always in the tree
                    div { class: "hidden sm:block text-xs text-gray-500 dark:text-gray-500 {ANIMATE_SLIDE_UP}",
                        "{markup.rights}"
                    }
                }
            }

            style { "{FOOTER_STYLES}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_AUTHOR_URL, Position, Theme};
    use pretty_assertions::assert_eq;

    fn render(config: FooterConfig) -> String {
        dioxus_ssr::render_element(rsx! {
            Footer {
                author_name: config.author_name,
                author_url: config.author_url,
                position: config.position,
                theme: config.theme,
                class_name: config.class_name,
            }
        })
    }

    #[test]
    fn root_class_order() {
        let markup = FooterConfig {
            position: Position::Sticky,
            theme: Theme::Dark,
            class_name: "mt-8 shadow-lg".to_owned(),
            ..FooterConfig::default()
        }
        .assemble(2030);

        assert_eq!(
            markup.root_class,
            "sticky bottom-0 z-40 bg-gray-900/90 text-gray-400 border-gray-700 \
             backdrop-blur-md border-t transition-all duration-300 mt-8 shadow-lg"
        );
    }

    #[test]
    fn class_name_comes_last() {
        for theme in [Theme::Light, Theme::Dark, Theme::Auto] {
            let markup = FooterConfig {
                theme,
                class_name: "text-blue-900".to_owned(),
                ..FooterConfig::default()
            }
            .assemble(2030);

            assert!(markup.root_class.ends_with(" text-blue-900"));
            assert!(markup.root_class.contains(EFFECT_CLASSES));
        }
    }

    #[test]
    fn empty_class_name_adds_nothing() {
        let markup = FooterConfig::default().assemble(2030);

        assert_eq!(
            markup.root_class,
            "relative bg-white/90 text-gray-600 border-gray-200 \
             backdrop-blur-md border-t transition-all duration-300"
        );
    }

    #[test]
    fn fixed_dark_example() {
        let markup = FooterConfig {
            author_name: "Ada".to_owned(),
            position: Position::Fixed,
            theme: Theme::Dark,
            ..FooterConfig::default()
        }
        .assemble(2031);

        assert!(markup.root_class.starts_with(Position::Fixed.classes()));
        assert!(markup.root_class.contains(Theme::Dark.classes()));
        assert_eq!(markup.copyright, "© 2031 Made with");
        assert_eq!(markup.author_name, "Ada");
        assert_eq!(markup.link_href, DEFAULT_AUTHOR_URL);
        assert_eq!(markup.rights, "All Rights Reserved.");
    }

    #[test]
    fn link_is_isolated() {
        let markup = FooterConfig {
            author_url: "javascript:alert(1)".to_owned(),
            ..FooterConfig::default()
        }
        .assemble(2030);

        assert_eq!(markup.link_href, "javascript:alert(1)");
        assert_eq!(markup.link_target, "_blank");
        assert_eq!(markup.link_rel, "noopener noreferrer");
    }

    #[test]
    fn empty_text_renders_empty() {
        let markup = FooterConfig {
            author_name: String::new(),
            author_url: String::new(),
            ..FooterConfig::default()
        }
        .assemble(2030);

        assert_eq!(markup.author_name, "");
        assert_eq!(markup.link_href, "");
    }

    #[test]
    fn year_follows_argument() {
        let config = FooterConfig::default();

        assert_eq!(config.assemble(2030).copyright, "© 2030 Made with");
        assert_eq!(config.assemble(2031).copyright, "© 2031 Made with");
    }

    #[test]
    fn render_defaults() {
        let year = current_year();
        let html = render(FooterConfig::default());

        assert!(html.starts_with("<footer"));
        assert!(html.contains(&FooterConfig::default().assemble(year).root_class));
        assert!(html.contains(&format!("© {year} Made with")));
        assert!(html.contains(&format!("href=\"{DEFAULT_AUTHOR_URL}\"")));
        assert!(html.contains(">Mahesh<"));
        assert!(html.contains(">by<"));
    }

    #[test]
    fn render_default_props_match_explicit_defaults() {
        let implicit = dioxus_ssr::render_element(rsx! {
            Footer {}
        });
        let explicit = render(FooterConfig {
            author_name: "Mahesh".to_owned(),
            author_url: DEFAULT_AUTHOR_URL.to_owned(),
            position: Position::Relative,
            theme: Theme::Light,
            class_name: String::new(),
        });

        assert_eq!(implicit, explicit);
    }

    #[test]
    fn render_accepts_raw_option_names() {
        let html = dioxus_ssr::render_element(rsx! {
            Footer { author_name: "Ada", position: "fixed", theme: "purple" }
        });

        assert!(html.contains(Position::Fixed.classes()));
        assert!(html.contains(Theme::Auto.classes()));
        assert!(html.contains(">Ada<"));
    }

    #[test]
    fn render_link_attributes() {
        let html = render(FooterConfig {
            author_url: "https://example.org/ada".to_owned(),
            ..FooterConfig::default()
        });

        assert!(html.contains("href=\"https://example.org/ada\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("opacity-0 group-hover:opacity-100"));
        assert!(html.contains("group-focus:opacity-100"));
    }

    #[test]
    fn render_rights_always_present() {
        for position in [Position::Relative, Position::Fixed, Position::Sticky] {
            for theme in [Theme::Light, Theme::Dark, Theme::Auto] {
                let html = render(FooterConfig {
                    position,
                    theme,
                    ..FooterConfig::default()
                });

                assert!(html.contains(RIGHTS_TEXT));
                assert!(html.contains("hidden sm:block"));
            }
        }
    }

    #[test]
    fn render_animation_classes_and_styles() {
        let html = render(FooterConfig::default());

        assert!(html.contains(ANIMATE_FADE_IN));
        assert!(html.contains(&format!("class=\"{ANIMATE_PULSE_HEART}\"")));
        assert!(html.contains(ANIMATE_SLIDE_UP));
        assert!(html.contains("<style>"));
        assert!(html.contains("@keyframes slide-up"));
    }

    #[test]
    fn render_is_idempotent() {
        let config = FooterConfig {
            author_name: "Ada".to_owned(),
            position: Position::Sticky,
            theme: Theme::Auto,
            class_name: "mb-4".to_owned(),
            ..FooterConfig::default()
        };

        assert_eq!(render(config.clone()), render(config));
    }
}
