use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_shared::models::City;

use crate::listener::{self, ScopedListener};
use crate::viewer::DismissReason;

/// Shown in place of a banner that fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/static/images/placeholder.svg";

/// Modal with the full record of one city.
///
/// Closes on a backdrop click, the close button, or Escape. The Escape
/// listener lives exactly as long as this component.
#[component]
pub fn CityDetail(city: City, on_dismiss: EventHandler<DismissReason>) -> Element {
    let mut escape_pressed = use_signal(|| false);
    let mut banner_failed = use_signal(|| false);

    use_hook(move || {
        Rc::new(ScopedListener::on_document("keydown", move |evt| {
            if listener::event_key(&evt).is_some_and(|key| listener::is_dismiss_key(&key)) {
                escape_pressed.set(true);
            }
        }))
    });

    use_effect(move || {
        if escape_pressed() {
            escape_pressed.set(false);
            on_dismiss.call(DismissReason::EscapeKey);
        }
    });

    let banner = if banner_failed() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        city.banner_image.clone()
    };

    rsx! {
        div {
            class: "city-overlay-backdrop",
            onclick: move |_| on_dismiss.call(DismissReason::Backdrop),

            div {
                class: "city-overlay",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "city-popup-title",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                div { class: "city-banner",
                    img {
                        src: "{banner}",
                        alt: "{city.name}",
                        onerror: move |_| banner_failed.set(true),
                    }
                    button {
                        class: "city-close",
                        aria_label: "Close popup",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            on_dismiss.call(DismissReason::CloseButton);
                        },
                        "\u{00d7}"
                    }
                }

                div { class: "city-body",
                    h2 { id: "city-popup-title", "{city.name}" }
                    p { class: "city-description", "{city.description}" }

                    dl { class: "city-facts",
                        div { class: "city-fact",
                            dt { "Ruler" }
                            dd { "{city.ruler}" }
                        }
                        div { class: "city-fact",
                            dt { "Ideology" }
                            dd { "{city.ideology}" }
                        }
                        div { class: "city-fact",
                            dt { "First visited" }
                            dd { "{city.date_first_visited}" }
                        }
                    }
                }
            }
        }
    }
}
