mod api;
mod components;
mod coords;
mod listener;
mod pages;
mod scroll;
mod viewer;

use dioxus::prelude::*;

use components::nav_bar::NavBar;

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/projects")]
        Projects {},
        #[route("/gallery")]
        Gallery {},
        #[route("/projects/:id")]
        ProjectDetail { id: String },
        #[route("/about")]
        About {},
        #[route("/bookshelf")]
        Bookshelf {},
        #[route("/map")]
        MapPage {},
        #[route("/city-manager")]
        CityManager {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Every page shares the navigation bar.
#[component]
fn Shell() -> Element {
    rsx! {
        NavBar {}
        main { class: "page",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Landing() -> Element {
    rsx! {
        pages::landing::Landing {}
    }
}

#[component]
fn Projects() -> Element {
    rsx! {
        pages::projects::ProjectList {}
    }
}

#[component]
fn Gallery() -> Element {
    rsx! {
        pages::projects::ProjectGallery {}
    }
}

#[component]
fn ProjectDetail(id: String) -> Element {
    rsx! {
        pages::project_detail::ProjectDetail { key: "{id}", id: id.clone() }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        pages::about::About {}
    }
}

#[component]
fn Bookshelf() -> Element {
    rsx! {
        pages::bookshelf::Bookshelf {}
    }
}

#[component]
fn MapPage() -> Element {
    rsx! {
        pages::map_page::MapPage {}
    }
}

#[component]
fn CityManager() -> Element {
    rsx! {
        pages::city_manager::CityManager {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        NavBar {}
        main { class: "page not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "button-primary", to: Route::Landing {}, "Back home" }
        }
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
