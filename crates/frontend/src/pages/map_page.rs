use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api;
use crate::components::interactive_map::InteractiveMap;
use crate::Route;

pub const MAP_IMAGE: &str = "/static/images/cerca-mare-map.svg";

const LOAD_ERROR: &str = "Failed to load city data. Please try again.";

#[component]
pub fn MapPage() -> Element {
    let mut cities_resource = use_resource(|| api::fetch_cities());

    let view = match &*cities_resource.read() {
        None => rsx! {
            div { class: "map-status",
                div { class: "spinner" }
                p { "Loading map..." }
            }
        },
        Some(Err(e)) => {
            tracing::warn!("failed to load cities: {}", e);
            rsx! {
                div { class: "map-status",
                    p { class: "load-error", "{LOAD_ERROR}" }
                    button {
                        class: "button-primary",
                        onclick: move |_| cities_resource.restart(),
                        "Try Again"
                    }
                }
            }
        }
        Some(Ok(cities)) => rsx! {
            div { class: "map-page",
                Link {
                    class: "map-back",
                    to: Route::ProjectDetail { id: "cerca-mare".to_string() },
                    "\u{2190} Back to Project"
                }
                InteractiveMap { map_image: MAP_IMAGE.to_string(), cities: cities.clone() }
            }
        },
    };
    view
}
