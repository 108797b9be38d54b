use dioxus::prelude::*;
use tracing::debug;

use crate::common::{storage::Stored, viewport_width};
use footer::{Footer, FooterConfig, Position, Theme};

impl Stored for FooterConfig {
    const KEY: &'static str = "config";
    const LABEL: &'static str = "footer config";
}

// Playground elements
//
// every control writes into config_signal and persists the result, so a
// reload comes back to the same footer.  the footer itself is rendered at
// the bottom of a tall page so fixed and sticky are easy to tell apart

#[derive(Clone, PartialEq, Props)]
struct OptionSelectProps {
    label: &'static str,
    options: Vec<&'static str>,
    selected: String,
    onchange: EventHandler<String>,
}

#[component]
fn OptionSelect(props: OptionSelectProps) -> Element {
    rsx! {
        label { class: "flex flex-col text-sm",
            span { class: "font-medium", "{props.label}" }
            select {
                class: "border rounded px-2 py-1",
                onchange: move |event| props.onchange.call(event.value()),
                for name in props.options {
                    option { value: name, selected: name == props.selected, "{name}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct TextOptionProps {
    label: &'static str,
    value: String,
    onchange: EventHandler<String>,
}

#[component]
fn TextOption(props: TextOptionProps) -> Element {
    rsx! {
        label { class: "flex flex-col text-sm",
            span { class: "font-medium", "{props.label}" }
            input {
                class: "border rounded px-2 py-1",
                r#type: "text",
                value: "{props.value}",
                onchange: move |event| props.onchange.call(event.value()),
            }
        }
    }
}

#[component]
pub fn Playground() -> Element {
    let mut config_signal = use_signal(FooterConfig::fetch);

    let mut update = move |edit: &dyn Fn(&mut FooterConfig)| {
        config_signal.with_mut(|config| {
            edit(config);
            debug!({config = ?config}, "updating footer config");
            config.store();
        });
    };

    let config = config_signal();

    let viewport = match viewport_width() {
        Some(width) => format!(
            "viewport was {width}px when this page was drawn, rights notice shows from 640px"
        ),
        None => String::from("rights notice shows from 640px"),
    };

    rsx! {
        div { class: "min-h-screen flex flex-col",
            div { class: "max-w-3xl mx-auto p-6 space-y-4 flex-1",
                h1 { class: "text-2xl font-semibold", "Footer playground" }
                p { class: "text-sm text-gray-500", "{viewport}" }

                div { class: "grid grid-cols-2 gap-4",
                    TextOption {
                        label: "author name",
                        value: config.author_name.clone(),
                        onchange: move |value: String| update(&|c: &mut FooterConfig| c.author_name = value.clone()),
                    }
                    TextOption {
                        label: "author url",
                        value: config.author_url.clone(),
                        onchange: move |value: String| update(&|c: &mut FooterConfig| c.author_url = value.clone()),
                    }
                    OptionSelect {
                        label: "position",
                        options: vec!["relative", "fixed", "sticky"],
                        selected: config.position.to_string(),
                        onchange: move |value: String| update(&|c: &mut FooterConfig| c.position = Position::from(value.as_str())),
                    }
                    OptionSelect {
                        label: "theme",
                        options: vec!["light", "dark", "auto"],
                        selected: config.theme.to_string(),
                        onchange: move |value: String| update(&|c: &mut FooterConfig| c.theme = Theme::from(value.as_str())),
                    }
                    TextOption {
                        label: "extra classes",
                        value: config.class_name.clone(),
                        onchange: move |value: String| update(&|c: &mut FooterConfig| c.class_name = value.clone()),
                    }
                }

                button {
                    class: "border rounded px-3 py-1",
                    onclick: move |_| update(&|c: &mut FooterConfig| *c = FooterConfig::default()),
                    "Reset"
                }

                for n in 0..40 {
                    p { class: "text-gray-400", "filler line {n}" }
                }
            }

            Footer {
                author_name: config.author_name,
                author_url: config.author_url,
                position: config.position,
                theme: config.theme,
                class_name: config.class_name,
            }
        }
    }
}
