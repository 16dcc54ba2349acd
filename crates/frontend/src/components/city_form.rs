use dioxus::prelude::*;
use portfolio_shared::models::{City, CityInput};

/// Text state of the city editor. Coordinates stay strings until saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityForm {
    pub name: String,
    pub x: String,
    pub y: String,
    pub banner_image: String,
    pub description: String,
    pub ruler: String,
    pub ideology: String,
    pub date_first_visited: String,
}

impl CityForm {
    pub fn from_city(city: &City) -> Self {
        CityForm {
            name: city.name.clone(),
            x: city.x.to_string(),
            y: city.y.to_string(),
            banner_image: city.banner_image.clone(),
            description: city.description.clone(),
            ruler: city.ruler.clone(),
            ideology: city.ideology.clone(),
            date_first_visited: city.date_first_visited.clone(),
        }
    }

    /// Parse and validate into a record ready to send.
    pub fn to_input(&self) -> Result<CityInput, String> {
        let input = CityInput {
            name: self.name.trim().to_string(),
            x: parse_coord("X", &self.x)?,
            y: parse_coord("Y", &self.y)?,
            banner_image: self.banner_image.trim().to_string(),
            description: self.description.trim().to_string(),
            ruler: self.ruler.trim().to_string(),
            ideology: self.ideology.trim().to_string(),
            date_first_visited: self.date_first_visited.trim().to_string(),
        };
        input.validate().map_err(|e| e.to_string())?;
        Ok(input)
    }
}

fn parse_coord(axis: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{} position must be a number", axis))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Name,
    X,
    Y,
    BannerImage,
    Description,
    Ruler,
    Ideology,
    DateFirstVisited,
}

fn field_value(form: &CityForm, field: Field) -> &str {
    match field {
        Field::Name => &form.name,
        Field::X => &form.x,
        Field::Y => &form.y,
        Field::BannerImage => &form.banner_image,
        Field::Description => &form.description,
        Field::Ruler => &form.ruler,
        Field::Ideology => &form.ideology,
        Field::DateFirstVisited => &form.date_first_visited,
    }
}

fn field_mut(form: &mut CityForm, field: Field) -> &mut String {
    match field {
        Field::Name => &mut form.name,
        Field::X => &mut form.x,
        Field::Y => &mut form.y,
        Field::BannerImage => &mut form.banner_image,
        Field::Description => &mut form.description,
        Field::Ruler => &mut form.ruler,
        Field::Ideology => &mut form.ideology,
        Field::DateFirstVisited => &mut form.date_first_visited,
    }
}

#[component]
pub fn CityFormPanel(
    form: Signal<CityForm>,
    editing: bool,
    error: Option<String>,
    saving: bool,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if editing { "Edit City" } else { "Add New City" };

    rsx! {
        div { class: "city-form",
            h2 { "{title}" }

            FormField { label: "City Name", field: Field::Name, form }
            div { class: "form-row",
                FormField { label: "X Position (%)", field: Field::X, form, input_type: "number", placeholder: "0-100" }
                FormField { label: "Y Position (%)", field: Field::Y, form, input_type: "number", placeholder: "0-100" }
            }
            FormField {
                label: "Banner Image URL",
                field: Field::BannerImage,
                form,
                placeholder: "https://example.com/image.jpg",
            }
            FormField { label: "Description", field: Field::Description, form, multiline: true }
            div { class: "form-row",
                FormField { label: "Ruler", field: Field::Ruler, form }
                FormField { label: "Ideology", field: Field::Ideology, form }
            }
            FormField {
                label: "Date First Visited",
                field: Field::DateFirstVisited,
                form,
                placeholder: "01/15/2024",
            }

            if let Some(message) = error {
                p { class: "form-error", role: "alert", "{message}" }
            }

            div { class: "form-actions",
                button {
                    class: "button-primary",
                    disabled: saving,
                    onclick: move |_| on_save.call(()),
                    if saving { "Saving..." } else { "Save" }
                }
                button {
                    class: "button-secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[component]
fn FormField(
    label: &'static str,
    field: Field,
    mut form: Signal<CityForm>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default = "")] placeholder: &'static str,
    #[props(default = false)] multiline: bool,
) -> Element {
    let value = field_value(&form.read(), field).to_string();

    rsx! {
        label { class: "form-field",
            span { class: "form-label", "{label}" }
            if multiline {
                textarea {
                    rows: "4",
                    value: "{value}",
                    oninput: move |evt: Event<FormData>| *field_mut(&mut form.write(), field) = evt.value(),
                }
            } else {
                input {
                    r#type: input_type,
                    step: "any",
                    placeholder,
                    value: "{value}",
                    oninput: move |evt: Event<FormData>| *field_mut(&mut form.write(), field) = evt.value(),
                }
            }
        }
    }
}
