use dioxus::logger::tracing;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use portfolio_shared::models::City;

use crate::api;
use crate::components::city_form::{CityForm, CityFormPanel};
use crate::Route;

/// How long a status message stays visible, in milliseconds.
const STATUS_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
enum Editor {
    Closed,
    Creating,
    Editing(String),
}

/// Show `message` until it expires or is replaced.
fn flash(mut status: Signal<Option<String>>, message: String) {
    status.set(Some(message.clone()));
    spawn(async move {
        TimeoutFuture::new(STATUS_MS).await;
        if status.peek().as_deref() == Some(message.as_str()) {
            status.set(None);
        }
    });
}

fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("Are you sure you want to delete {}?", name))
                .ok()
        })
        .unwrap_or(false)
}

#[component]
pub fn CityManager() -> Element {
    let mut cities_resource = use_resource(|| api::fetch_cities());
    let mut editor = use_signal(|| Editor::Closed);
    let mut form = use_signal(CityForm::default);
    let mut form_error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);
    let status = use_signal(|| None::<String>);

    let on_save = move |_: ()| {
        let input = match form.read().to_input() {
            Ok(input) => input,
            Err(e) => {
                form_error.set(Some(e));
                return;
            }
        };
        let target = editor.read().clone();
        form_error.set(None);
        saving.set(true);
        spawn(async move {
            let result = match &target {
                Editor::Editing(id) => api::update_city(id, &input).await,
                _ => api::create_city(&input).await,
            };
            saving.set(false);
            match result {
                Ok(city) => {
                    editor.set(Editor::Closed);
                    form.set(CityForm::default());
                    flash(status, format!("Saved {}", city.name));
                    cities_resource.restart();
                }
                Err(e) => {
                    tracing::warn!("failed to save city: {}", e);
                    form_error.set(Some(format!("Failed to save city: {}", e)));
                }
            }
        });
    };

    let on_cancel = move |_: ()| {
        editor.set(Editor::Closed);
        form.set(CityForm::default());
        form_error.set(None);
    };

    let list = match &*cities_resource.read() {
        None => rsx! {
            div { class: "loading", div { class: "spinner" } }
        },
        Some(Err(e)) => rsx! {
            div { class: "load-error",
                p { "Failed to load cities: {e}" }
                button { class: "button-primary", onclick: move |_| cities_resource.restart(), "Try Again" }
            }
        },
        Some(Ok(cities)) if cities.is_empty() => rsx! {
            p { class: "empty-hint", "No cities yet. Add your first city to get started!" }
        },
        Some(Ok(cities)) => rsx! {
            div { class: "city-list",
                for city in cities.iter() {
                    CityRow {
                        key: "{city.id}",
                        city: city.clone(),
                        on_edit: move |city: City| {
                            form.set(CityForm::from_city(&city));
                            form_error.set(None);
                            editor.set(Editor::Editing(city.id));
                        },
                        on_delete: move |city: City| {
                            if !confirm_delete(&city.name) {
                                return;
                            }
                            spawn(async move {
                                match api::delete_city(&city.id).await {
                                    Ok(true) => flash(status, format!("Deleted {}", city.name)),
                                    Ok(false) => flash(status, format!("{} was already removed", city.name)),
                                    Err(e) => {
                                        tracing::warn!("failed to delete city: {}", e);
                                        flash(status, format!("Failed to delete city: {}", e));
                                    }
                                }
                                cities_resource.restart();
                            });
                        },
                    }
                }
            }
        },
    };

    let open = *editor.read() != Editor::Closed;
    let editing = matches!(*editor.read(), Editor::Editing(_));

    rsx! {
        div { class: "city-manager",
            div { class: "manager-header",
                div {
                    h1 { "City Manager" }
                    p { "Manage the cities shown on the interactive map." }
                }
                div { class: "manager-actions",
                    Link { class: "button-secondary", to: Route::MapPage {}, "View Map" }
                    if !open {
                        button {
                            class: "button-primary",
                            onclick: move |_| {
                                form.set(CityForm::default());
                                form_error.set(None);
                                editor.set(Editor::Creating);
                            },
                            "+ Add City"
                        }
                    }
                }
            }

            if let Some(message) = status() {
                p { class: "status-message", role: "status", "{message}" }
            }

            if open {
                CityFormPanel {
                    form,
                    editing,
                    error: form_error(),
                    saving: saving(),
                    on_save,
                    on_cancel,
                }
            }

            {list}
        }
    }
}

#[component]
fn CityRow(city: City, on_edit: EventHandler<City>, on_delete: EventHandler<City>) -> Element {
    let for_edit = city.clone();
    let for_delete = city.clone();

    rsx! {
        div { class: "city-row",
            div { class: "city-row-info",
                h3 { "{city.name}" }
                p { class: "city-row-position", "Position: ({city.x}%, {city.y}%)" }
                p { "Ruler: {city.ruler} \u{2022} Ideology: {city.ideology}" }
                p { "First visited: {city.date_first_visited}" }
            }
            div { class: "city-row-actions",
                button {
                    class: "icon-button",
                    aria_label: "Edit city",
                    onclick: move |_| on_edit.call(for_edit.clone()),
                    "Edit"
                }
                button {
                    class: "icon-button danger",
                    aria_label: "Delete city",
                    onclick: move |_| on_delete.call(for_delete.clone()),
                    "Delete"
                }
            }
        }
    }
}
