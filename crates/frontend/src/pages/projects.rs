use dioxus::prelude::*;
use portfolio_shared::models::Project;

use crate::api;
use crate::Route;

#[component]
pub fn ProjectList() -> Element {
    let projects_resource = use_resource(|| api::fetch_projects());

    rsx! {
        div { class: "projects-page",
            header { class: "page-hero dark",
                h1 { "Projects" }
                p {
                    "A selection of projects where engineering and design thinking meet, "
                    "built to be technically sound and centred on the people who use them."
                }
            }

            match &*projects_resource.read() {
                Some(Ok(projects)) => rsx! {
                    div { class: "project-grid",
                        for project in projects.iter() {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "load-error", "Failed to load projects: {e}" }
                },
                None => rsx! {
                    div { class: "loading", div { class: "spinner" } }
                },
            }

            div { class: "page-links",
                Link { class: "button-primary", to: Route::About {}, "Learn About Me" }
                Link { class: "button-secondary", to: Route::Bookshelf {}, "Visit The Bookshelf" }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        Link { class: "project-card", to: Route::ProjectDetail { id: project.id.clone() },
            img { src: "{project.hero_image}", alt: "{project.title}" }
            div { class: "project-card-body",
                span { class: "pill", "{project.category}" }
                h3 { "{project.title}" }
                p { "{project.overview}" }
            }
        }
    }
}

/// Full-width cards with the image alternating sides.
#[component]
pub fn ProjectGallery() -> Element {
    let projects_resource = use_resource(|| api::fetch_projects());

    rsx! {
        div { class: "gallery-page",
            header { class: "page-hero",
                h1 { "Gallery" }
                p { "Every project, start to finish." }
            }

            match &*projects_resource.read() {
                Some(Ok(projects)) => rsx! {
                    div { class: "gallery",
                        for (index, project) in projects.iter().enumerate() {
                            GalleryCard {
                                key: "{project.id}",
                                project: project.clone(),
                                image_left: index % 2 == 1,
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "load-error", "Failed to load projects: {e}" }
                },
                None => rsx! {
                    div { class: "loading", div { class: "spinner" } }
                },
            }
        }
    }
}

#[component]
fn GalleryCard(project: Project, image_left: bool) -> Element {
    let class = if image_left {
        "gallery-card image-left"
    } else {
        "gallery-card"
    };

    rsx! {
        Link { class: "{class}", to: Route::ProjectDetail { id: project.id.clone() },
            div { class: "gallery-text",
                span { class: "pill", "{project.category}" }
                h2 { "{project.title}" }
                p { class: "gallery-overview", "{project.overview}" }
                h4 { "Role:" }
                p { "{project.role}" }
                h4 { "Duration & Team:" }
                p { "{project.duration} \u{2022} {project.team}" }
                div { class: "tags",
                    for tag in project.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
            }
            div { class: "gallery-image",
                img { src: "{project.hero_image}", alt: "{project.title}" }
            }
        }
    }
}
