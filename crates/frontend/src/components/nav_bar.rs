use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NavBar() -> Element {
    rsx! {
        nav { class: "nav-bar",
            div { class: "nav-inner",
                Link { class: "nav-brand", to: Route::Landing {},
                    img { class: "nav-logo", src: "/static/images/logo.svg", alt: "" }
                    span { "william ryan" }
                }
                div { class: "nav-links",
                    Link { class: "nav-link", active_class: "active", to: Route::Projects {}, "work" }
                    Link { class: "nav-link", active_class: "active", to: Route::Gallery {}, "gallery" }
                    Link { class: "nav-link", active_class: "active", to: Route::About {}, "about" }
                    Link { class: "nav-link", active_class: "active", to: Route::Bookshelf {}, "the bookshelf" }
                }
            }
        }
    }
}
