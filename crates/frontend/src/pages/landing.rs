use dioxus::prelude::*;
use portfolio_shared::models::Project;

use crate::api;
use crate::Route;

/// Index after stepping `forward` or back through `len` slides, wrapping at both ends.
pub fn carousel_step(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current % len;
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[component]
pub fn Landing() -> Element {
    let projects_resource = use_resource(|| api::fetch_projects());

    rsx! {
        div { class: "landing",
            header { class: "hero",
                img { class: "hero-logo", src: "/static/images/logo.svg", alt: "William Ryan logo" }
                h1 { "William Ryan" }
                p { class: "hero-tagline", "Storyteller \u{2022} Designer \u{2022} Hobbyist" }
                p { class: "hero-quote",
                    "\"I love to tell stories, I embellish them, and I believe Truth is essential to the great ones.\""
                }
            }

            match &*projects_resource.read() {
                Some(Ok(projects)) if !projects.is_empty() => rsx! {
                    ProjectCarousel { projects: projects.clone() }
                },
                Some(Ok(_)) => rsx! {},
                Some(Err(e)) => rsx! {
                    p { class: "load-error", "Failed to load projects: {e}" }
                },
                None => rsx! {
                    div { class: "loading", div { class: "spinner" } }
                },
            }

            div { class: "landing-links",
                Link { class: "button-primary", to: Route::Gallery {}, "Browse the Gallery" }
                Link { class: "button-secondary", to: Route::About {}, "Learn About Me" }
            }
        }
    }
}

#[component]
pub fn ProjectCarousel(projects: Vec<Project>) -> Element {
    let mut current = use_signal(|| 0usize);
    let len = projects.len();
    let index = current() % len.max(1);
    let Some(project) = projects.get(index).cloned() else {
        return rsx! {};
    };
    let dot_labels: Vec<(usize, String)> = (0..len)
        .map(|i| (i, format!("Show project {}", i + 1)))
        .collect();

    rsx! {
        section { class: "carousel",
            div { class: "carousel-slide",
                div { class: "carousel-text",
                    span { class: "pill", "{project.category}" }
                    h3 { "{project.title}" }
                    p { class: "carousel-overview", "{project.overview}" }
                    h4 { "Role:" }
                    p { "{project.role}" }
                    h4 { "Duration & Team:" }
                    p { "{project.duration} \u{2022} {project.team}" }
                    div { class: "tags",
                        for tag in project.tags.iter() {
                            span { class: "tag", "{tag}" }
                        }
                    }
                    Link {
                        class: "button-primary",
                        to: Route::ProjectDetail { id: project.id.clone() },
                        "View Full Project \u{2192}"
                    }
                }
                Link {
                    class: "carousel-image",
                    to: Route::ProjectDetail { id: project.id.clone() },
                    img { src: "{project.hero_image}", alt: "{project.title}" }
                }
            }

            div { class: "carousel-nav",
                button {
                    class: "carousel-arrow",
                    aria_label: "Previous project",
                    onclick: move |_| current.set(carousel_step(current(), len, false)),
                    "\u{2039}"
                }
                div { class: "carousel-dots",
                    for (i, label) in dot_labels {
                        button {
                            key: "{i}",
                            class: if i == index { "carousel-dot active" } else { "carousel-dot" },
                            aria_label: "{label}",
                            onclick: move |_| current.set(i),
                        }
                    }
                }
                button {
                    class: "carousel-arrow",
                    aria_label: "Next project",
                    onclick: move |_| current.set(carousel_step(current(), len, true)),
                    "\u{203a}"
                }
            }
        }
    }
}
