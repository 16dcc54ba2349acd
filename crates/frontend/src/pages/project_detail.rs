use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_shared::models::{Project, ProjectSection, SectionKind};

use crate::api;
use crate::listener::ScopedListener;
use crate::scroll;
use crate::Route;

const OVERVIEW_ID: &str = "overview";
const OUTCOME_ID: &str = "outcome";

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    pub id: String,
    pub label: String,
}

/// Timeline entries in page order: overview, outcome when present, then each section.
pub fn timeline_items(project: &Project) -> Vec<TimelineItem> {
    let mut items = vec![TimelineItem {
        id: OVERVIEW_ID.to_string(),
        label: "Overview".to_string(),
    }];
    if project.outcome.as_deref().is_some_and(|o| !o.is_empty()) {
        items.push(TimelineItem {
            id: OUTCOME_ID.to_string(),
            label: "Outcome".to_string(),
        });
    }
    items.extend(project.sections.iter().map(|s| TimelineItem {
        id: s.id.clone(),
        label: s.label(),
    }));
    items
}

/// Recompute progress and the active section from the live window.
fn refresh_scroll_state(ids: &[String], mut progress: Signal<f64>, mut active: Signal<String>) {
    let Some((scroll_y, doc_height, viewport)) = scroll::window_metrics() else {
        return;
    };
    progress.set(scroll::scroll_progress(scroll_y, doc_height, viewport));
    let bounds = scroll::section_bounds(ids);
    if let Some(id) = scroll::active_section(&bounds, scroll_y, viewport) {
        if *active.peek() != id {
            active.set(id.to_string());
        }
    }
}

#[component]
pub fn ProjectDetail(id: String) -> Element {
    let project_resource = use_resource(move || {
        let id = id.clone();
        async move { api::fetch_project(&id).await }
    });

    let progress = use_signal(|| 0.0_f64);
    let active = use_signal(|| OVERVIEW_ID.to_string());
    let mut section_ids = use_signal(Vec::<String>::new);

    use_hook(|| scroll::scroll_to_top());

    use_hook(move || {
        Rc::new(ScopedListener::on_window("scroll", move |_| {
            refresh_scroll_state(&section_ids.peek(), progress, active);
        }))
    });

    use_effect(move || {
        if let Some(Ok(Some(project))) = &*project_resource.read() {
            let ids: Vec<String> = timeline_items(project).into_iter().map(|t| t.id).collect();
            refresh_scroll_state(&ids, progress, active);
            section_ids.set(ids);
        }
    });

    let project = match &*project_resource.read() {
        None => {
            return rsx! {
                div { class: "loading", div { class: "spinner" } }
            }
        }
        Some(Err(e)) => {
            return rsx! {
                div { class: "not-found",
                    p { class: "load-error", "Failed to load project: {e}" }
                    Link { to: Route::Projects {}, "Return to Projects" }
                }
            }
        }
        Some(Ok(None)) => {
            return rsx! {
                div { class: "not-found",
                    h1 { "Project Not Found" }
                    Link { to: Route::Projects {}, "Return to Projects" }
                }
            }
        }
        Some(Ok(Some(project))) => project.clone(),
    };

    let timeline = timeline_items(&project);
    let current = active();
    let progress_pct = progress();

    rsx! {
        div { class: "project-detail",
            div { class: "progress-track",
                div { class: "progress-bar", style: "width: {progress_pct}%;" }
            }

            nav { class: "timeline", aria_label: "Sections",
                for item in timeline {
                    button {
                        key: "{item.id}",
                        class: if item.id == current { "timeline-item active" } else { "timeline-item" },
                        onclick: {
                            let target = item.id.clone();
                            move |_| scroll::scroll_to_section(&target)
                        },
                        span { class: "timeline-dot" }
                        span { class: "timeline-label", "{item.label}" }
                    }
                }
            }

            header { class: "project-hero",
                img { src: "{project.hero_image}", alt: "{project.title}" }
                div { class: "project-hero-text",
                    Link { class: "back-link", to: Route::Projects {}, "\u{2190} All projects" }
                    span { class: "pill", "{project.category}" }
                    h1 { "{project.title}" }
                }
            }

            section { id: OVERVIEW_ID, class: "project-overview",
                h2 { "Overview" }
                p { "{project.overview}" }
                div { class: "project-facts",
                    div { h4 { "Role" } p { "{project.role}" } }
                    div { h4 { "Duration" } p { "{project.duration}" } }
                    div { h4 { "Team" } p { "{project.team}" } }
                }
                div { class: "tags",
                    for tag in project.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
                if let Some(route) = project.companion_route.clone() {
                    Link { class: "button-primary companion-link", to: route, "Explore the Interactive Map \u{2192}" }
                }
            }

            if let Some(outcome) = project.outcome.clone().filter(|o| !o.is_empty()) {
                section { id: OUTCOME_ID, class: "project-outcome",
                    h2 { "Outcome" }
                    p { "{outcome}" }
                }
            }

            for section in project.sections.iter() {
                SectionView { key: "{section.id}", section: section.clone() }
            }
        }
    }
}

#[component]
fn SectionView(section: ProjectSection) -> Element {
    let alt = section
        .image_alt
        .clone()
        .unwrap_or_else(|| "Project image".to_string());

    match section.kind {
        SectionKind::Text => rsx! {
            section { id: "{section.id}", class: "section-text",
                SectionHeading { title: section.title.clone(), subtitle: section.subtitle.clone() }
                if let Some(content) = section.content.clone() {
                    p { "{content}" }
                }
            }
        },
        SectionKind::Image => rsx! {
            section { id: "{section.id}", class: "section-image",
                if let Some(image) = section.image.clone() {
                    img { src: "{image}", alt: "{alt}" }
                }
            }
        },
        SectionKind::Split => rsx! {
            section {
                id: "{section.id}",
                class: if section.image_left { "section-split image-left" } else { "section-split" },
                div { class: "split-text",
                    SectionHeading { title: section.title.clone(), subtitle: section.subtitle.clone() }
                    if let Some(content) = section.content.clone() {
                        p { "{content}" }
                    }
                }
                if let Some(image) = section.image.clone() {
                    div { class: "split-image",
                        img { src: "{image}", alt: "{alt}" }
                    }
                }
            }
        },
        SectionKind::Quote => {
            let quote = section.content.clone().unwrap_or_default();
            rsx! {
                section { id: "{section.id}", class: "section-quote",
                    blockquote { "\u{201c}{quote}\u{201d}" }
                    if let Some(author) = section.subtitle.clone() {
                        cite { "\u{2014} {author}" }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionHeading(title: Option<String>, subtitle: Option<String>) -> Element {
    rsx! {
        if let Some(title) = title {
            h2 { "{title}" }
        }
        if let Some(subtitle) = subtitle {
            h3 { class: "section-subtitle", "{subtitle}" }
        }
    }
}
