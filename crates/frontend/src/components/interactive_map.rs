use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use portfolio_shared::models::City;

use crate::components::city_detail::CityDetail;
use crate::coords;
use crate::viewer::{self, HitTarget, MapViewer, Point, PointerInput};

const MAP_CONTAINER_ID: &str = "city-map-container";

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Container-relative position of a client point. Falls back to client
/// coordinates when the container is not in the DOM yet.
fn local_point(client_x: f64, client_y: f64) -> Point {
    coords::container_point(client_x, client_y, MAP_CONTAINER_ID)
        .unwrap_or_else(|| Point::new(client_x, client_y))
}

fn mouse_input(evt: &Event<MouseData>) -> PointerInput {
    let client = evt.client_coordinates();
    let p = local_point(client.x, client.y);
    PointerInput::Mouse { x: p.x, y: p.y }
}

/// First touch point plus the number of active touches.
fn touch_input(evt: &Event<TouchData>) -> Option<PointerInput> {
    let touches = evt.data().touches();
    let first = touches.first()?;
    let client = first.client_coordinates();
    let p = local_point(client.x, client.y);
    Some(PointerInput::Touch {
        x: p.x,
        y: p.y,
        touches: touches.len(),
    })
}

#[component]
pub fn InteractiveMap(map_image: String, cities: Vec<City>) -> Element {
    let mut viewer = use_signal(MapViewer::new);

    let (transform_css, dragging, zoom_pct, can_in, can_out, markers, selected) = {
        let v = viewer.read();
        (
            v.transform().css(v.is_dragging()),
            v.is_dragging(),
            v.zoom_percent(),
            v.can_zoom_in(),
            v.can_zoom_out(),
            viewer::marker_views(&cities, &v),
            v.selected().cloned(),
        )
    };

    let container_class = if dragging {
        "map-viewport dragging"
    } else {
        "map-viewport"
    };

    rsx! {
        div { class: "interactive-map",
            div {
                id: MAP_CONTAINER_ID,
                class: "{container_class}",

                onwheel: move |evt: Event<WheelData>| {
                    evt.prevent_default();
                    let delta_y = wheel_delta_y(evt.data().delta());
                    let client = evt.data().client_coordinates();
                    let pointer = local_point(client.x, client.y);
                    viewer.write().wheel(delta_y, pointer);
                },

                onmousedown: move |evt: Event<MouseData>| {
                    if evt.trigger_button() != Some(MouseButton::Primary) {
                        return;
                    }
                    viewer.write().pointer_down(mouse_input(&evt), HitTarget::Viewport);
                },

                onmousemove: move |evt: Event<MouseData>| {
                    if !viewer.read().is_dragging() {
                        return;
                    }
                    viewer.write().pointer_move(mouse_input(&evt));
                },

                onmouseup: move |_| {
                    if viewer.read().is_dragging() {
                        viewer.write().pointer_up();
                    }
                },

                onmouseleave: move |_| {
                    if viewer.read().is_dragging() {
                        viewer.write().pointer_up();
                    }
                },

                ontouchstart: move |evt: Event<TouchData>| {
                    evt.prevent_default();
                    if let Some(input) = touch_input(&evt) {
                        viewer.write().pointer_down(input, HitTarget::Viewport);
                    }
                },

                ontouchmove: move |evt: Event<TouchData>| {
                    evt.prevent_default();
                    if !viewer.read().is_dragging() {
                        return;
                    }
                    if let Some(input) = touch_input(&evt) {
                        viewer.write().pointer_move(input);
                    }
                },

                ontouchend: move |_| {
                    if viewer.read().is_dragging() {
                        viewer.write().pointer_up();
                    }
                },

                div { class: "map-layer", style: "{transform_css}",
                    div { class: "map-canvas",
                        img {
                            class: "map-image",
                            src: "{map_image}",
                            alt: "Interactive Map",
                            draggable: "false",
                        }

                        for marker in markers {
                            MapMarker { key: "{marker.city.id}", marker, viewer }
                        }
                    }
                }
            }

            // --- Zoom controls ---

            div { class: "map-controls",
                button {
                    class: "map-control",
                    title: "Zoom in",
                    aria_label: "Zoom in",
                    disabled: !can_in,
                    onclick: move |_| viewer.write().zoom_in(),
                    "+"
                }
                button {
                    class: "map-control",
                    title: "Zoom out",
                    aria_label: "Zoom out",
                    disabled: !can_out,
                    onclick: move |_| viewer.write().zoom_out(),
                    "\u{2212}"
                }
                button {
                    class: "map-control",
                    title: "Reset view",
                    aria_label: "Reset view",
                    onclick: move |_| viewer.write().reset(),
                    "\u{27f2}"
                }
            }

            div { class: "map-zoom-readout", "Zoom: {zoom_pct}%" }

            if let Some(city) = selected {
                CityDetail {
                    key: "{city.id}",
                    city,
                    on_dismiss: move |reason| {
                        viewer.write().dismiss(reason);
                    },
                }
            }
        }
    }
}

#[component]
fn MapMarker(marker: viewer::MarkerView, mut viewer: Signal<MapViewer>) -> Element {
    let id = marker.city.id.clone();
    let class = if marker.hovered {
        "map-marker hovered"
    } else {
        "map-marker"
    };

    rsx! {
        button {
            class: "{class}",
            style: "{marker.style}",
            aria_label: "{marker.city.name}",

            // Presses on a marker never reach the viewport's drag handlers
            onmousedown: {
                let id = id.clone();
                move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    viewer.write().pointer_down(mouse_input(&evt), HitTarget::Marker(id.clone()));
                }
            },
            ontouchstart: {
                let id = id.clone();
                move |evt: Event<TouchData>| {
                    evt.stop_propagation();
                    if let Some(input) = touch_input(&evt) {
                        viewer.write().pointer_down(input, HitTarget::Marker(id.clone()));
                    }
                }
            },
            onclick: {
                let city = marker.city.clone();
                move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    viewer.write().select(city.clone());
                }
            },
            onmouseenter: {
                let id = id.clone();
                move |_| viewer.write().hover_enter(&id)
            },
            onmouseleave: {
                let id = id.clone();
                move |_| viewer.write().hover_leave(&id)
            },

            span { class: "map-marker-dot" }
            if marker.hovered {
                span { class: "map-marker-label", "{marker.city.name}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_delta_pixels() {
        assert_eq!(wheel_delta_y(WheelDelta::pixels(0.0, 12.5, 0.0)), 12.5);
    }

    #[test]
    fn test_wheel_delta_lines_and_pages() {
        assert_eq!(wheel_delta_y(WheelDelta::lines(0.0, -3.0, 0.0)), -120.0);
        assert_eq!(wheel_delta_y(WheelDelta::pages(0.0, 1.0, 0.0)), 400.0);
    }
}
