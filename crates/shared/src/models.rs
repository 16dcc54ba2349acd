use serde::{Deserialize, Serialize};

/// Coordinates are percentages of the map image, so both axes share this range.
pub const COORD_MIN: f64 = 0.0;
pub const COORD_MAX: f64 = 100.0;

/// A point of interest on the city map.
///
/// `x` / `y` are percentages (0-100) of the map image's width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub banner_image: String,
    pub description: String,
    pub ruler: String,
    pub ideology: String,
    pub date_first_visited: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl City {
    /// Build a new record with a fresh id. Timestamps are supplied by the caller.
    #[cfg(feature = "uuid-support")]
    pub fn create(input: CityInput, now: &str) -> Self {
        City {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            x: input.x,
            y: input.y,
            banner_image: input.banner_image,
            description: input.description,
            ruler: input.ruler,
            ideology: input.ideology,
            date_first_visited: input.date_first_visited,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    /// Editable fields of this record.
    pub fn input(&self) -> CityInput {
        CityInput {
            name: self.name.clone(),
            x: self.x,
            y: self.y,
            banner_image: self.banner_image.clone(),
            description: self.description.clone(),
            ruler: self.ruler.clone(),
            ideology: self.ideology.clone(),
            date_first_visited: self.date_first_visited.clone(),
        }
    }
}

/// Everything a client may set on a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInput {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub banner_image: String,
    pub description: String,
    pub ruler: String,
    pub ideology: String,
    pub date_first_visited: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{axis} position must be between 0 and 100 (got {value})")]
    OutOfRange { axis: char, value: f64 },
}

impl CityInput {
    /// Check the record before it is stored. Reports the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("City name", &self.name),
            ("Banner image", &self.banner_image),
            ("Description", &self.description),
            ("Ruler", &self.ruler),
            ("Ideology", &self.ideology),
            ("Date first visited", &self.date_first_visited),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::Required(label));
            }
        }
        check_coord('X', self.x)?;
        check_coord('Y', self.y)?;
        Ok(())
    }
}

fn check_coord(axis: char, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (COORD_MIN..=COORD_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { axis, value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SectionKind {
    Text,
    Image,
    Split,
    Quote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSection {
    pub id: String,
    pub kind: SectionKind,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    #[serde(default)]
    pub image_left: bool,
}

impl ProjectSection {
    /// Label used in the detail page's timeline.
    pub fn label(&self) -> String {
        if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            return title.to_string();
        }
        match self.kind {
            SectionKind::Text | SectionKind::Split => "Section".to_string(),
            SectionKind::Image => "Gallery".to_string(),
            SectionKind::Quote => "Quote".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub overview: String,
    pub role: String,
    pub duration: String,
    pub team: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub hero_image: String,
    pub outcome: Option<String>,
    /// In-app route for an interactive companion page, e.g. `/map`.
    pub companion_route: Option<String>,
    #[serde(default)]
    pub sections: Vec<ProjectSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub summary: String,
    pub completed_date: String,
    pub category: String,
}

/// A recently played game as returned by the games proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentGame {
    pub appid: u32,
    pub name: String,
    /// Minutes played over the last two weeks.
    pub playtime_recent: Option<u32>,
    /// Minutes played in total.
    pub playtime_total: u32,
    pub header_image: String,
    pub icon_url: Option<String>,
}

/// Format minutes of playtime: `45m`, `12h 5m`, or `340h` past one hundred hours.
pub fn format_playtime(minutes: u32) -> String {
    let hours = minutes / 60;
    if hours < 1 {
        format!("{}m", minutes)
    } else if hours < 100 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{}h", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CityInput {
        CityInput {
            name: "Port Salis".to_string(),
            x: 42.5,
            y: 61.0,
            banner_image: "https://example.com/salis.jpg".to_string(),
            description: "A harbour town.".to_string(),
            ruler: "The Tide Council".to_string(),
            ideology: "Mercantile".to_string(),
            date_first_visited: "01/15/2024".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(input().validate(), Ok(()));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut i = input();
        i.name = "   ".to_string();
        assert_eq!(i.validate(), Err(ValidationError::Required("City name")));
    }

    #[test]
    fn test_coordinate_bounds_are_inclusive() {
        let mut i = input();
        i.x = 0.0;
        i.y = 100.0;
        assert!(i.validate().is_ok());
    }

    #[test]
    fn test_coordinate_out_of_range() {
        let mut i = input();
        i.y = 100.5;
        let err = i.validate().unwrap_err();
        assert_eq!(err, ValidationError::OutOfRange { axis: 'Y', value: 100.5 });
        assert_eq!(
            err.to_string(),
            "Y position must be between 0 and 100 (got 100.5)"
        );
    }

    #[test]
    fn test_nan_coordinate_rejected() {
        let mut i = input();
        i.x = f64::NAN;
        assert!(matches!(
            i.validate(),
            Err(ValidationError::OutOfRange { axis: 'X', .. })
        ));
    }

    #[cfg(feature = "uuid-support")]
    #[test]
    fn test_city_create_assigns_id_and_timestamps() {
        let city = City::create(input(), "2024-01-15T00:00:00+00:00");
        assert!(!city.id.is_empty());
        assert_eq!(city.created_at, city.updated_at);
        assert_eq!(city.input(), input());
    }

    #[test]
    fn test_city_deserializes_without_timestamps() {
        let json = r#"{"id":"c1","name":"Vell","x":10.0,"y":20.0,"bannerImage":"b.jpg","description":"d","ruler":"r","ideology":"i","dateFirstVisited":"02/02/2024"}"#;
        let city: City = serde_json::from_str(json).unwrap();
        assert_eq!(city.banner_image, "b.jpg");
        assert!(city.created_at.is_empty());
    }

    #[test]
    fn test_section_label_falls_back_by_kind() {
        let section = ProjectSection {
            id: "s1".to_string(),
            kind: SectionKind::Image,
            title: None,
            subtitle: None,
            content: None,
            image: Some("a.jpg".to_string()),
            image_alt: None,
            image_left: false,
        };
        assert_eq!(section.label(), "Gallery");
    }

    #[test]
    fn test_section_kind_uses_graphql_enum_names() {
        let kind: SectionKind = serde_json::from_str(r#""SPLIT""#).unwrap();
        assert_eq!(kind, SectionKind::Split);
    }

    #[test]
    fn test_format_playtime() {
        assert_eq!(format_playtime(45), "45m");
        assert_eq!(format_playtime(60), "1h 0m");
        assert_eq!(format_playtime(125), "2h 5m");
        assert_eq!(format_playtime(100 * 60 + 30), "100h");
    }
}
