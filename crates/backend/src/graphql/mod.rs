use std::sync::Arc;

use async_graphql::{Context, Enum, InputObject, Object, SimpleObject, ID};
use portfolio_shared::{
    models::{self, SectionKind},
    shelf,
};

use crate::assets::Assets;
use crate::steam::SteamClient;
use crate::storage::Storage;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlSectionKind {
    Text,
    Image,
    Split,
    Quote,
}

impl From<SectionKind> for GqlSectionKind {
    fn from(k: SectionKind) -> Self {
        match k {
            SectionKind::Text => GqlSectionKind::Text,
            SectionKind::Image => GqlSectionKind::Image,
            SectionKind::Split => GqlSectionKind::Split,
            SectionKind::Quote => GqlSectionKind::Quote,
        }
    }
}

// GraphQL output types

#[derive(SimpleObject)]
pub struct GqlCity {
    pub id: ID,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub banner_image: String,
    pub description: String,
    pub ruler: String,
    pub ideology: String,
    pub date_first_visited: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<models::City> for GqlCity {
    fn from(c: models::City) -> Self {
        GqlCity {
            id: ID(c.id),
            name: c.name,
            x: c.x,
            y: c.y,
            banner_image: c.banner_image,
            description: c.description,
            ruler: c.ruler,
            ideology: c.ideology,
            date_first_visited: c.date_first_visited,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlProjectSection {
    pub id: String,
    pub kind: GqlSectionKind,
    pub label: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub image_left: bool,
}

#[derive(SimpleObject)]
pub struct GqlProject {
    pub id: String,
    pub title: String,
    pub category: String,
    pub overview: String,
    pub role: String,
    pub duration: String,
    pub team: String,
    pub tags: Vec<String>,
    pub hero_image: String,
    pub outcome: Option<String>,
    pub companion_route: Option<String>,
    pub sections: Vec<GqlProjectSection>,
}

impl From<&models::Project> for GqlProject {
    fn from(p: &models::Project) -> Self {
        GqlProject {
            id: p.id.clone(),
            title: p.title.clone(),
            category: p.category.clone(),
            overview: p.overview.clone(),
            role: p.role.clone(),
            duration: p.duration.clone(),
            team: p.team.clone(),
            tags: p.tags.clone(),
            hero_image: p.hero_image.clone(),
            outcome: p.outcome.clone(),
            companion_route: p.companion_route.clone(),
            sections: p
                .sections
                .iter()
                .map(|s| GqlProjectSection {
                    id: s.id.clone(),
                    kind: s.kind.into(),
                    label: s.label(),
                    title: s.title.clone(),
                    subtitle: s.subtitle.clone(),
                    content: s.content.clone(),
                    image: s.image.clone(),
                    image_alt: s.image_alt.clone(),
                    image_left: s.image_left,
                })
                .collect(),
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlBook {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub cover: String,
    pub summary: String,
    pub completed_date: String,
    pub category: String,
}

impl From<&models::Book> for GqlBook {
    fn from(b: &models::Book) -> Self {
        GqlBook {
            id: b.id,
            title: b.title.clone(),
            author: b.author.clone(),
            cover: b.cover.clone(),
            summary: b.summary.clone(),
            completed_date: b.completed_date.clone(),
            category: b.category.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlRecentGame {
    pub appid: u32,
    pub name: String,
    pub playtime_recent: Option<u32>,
    pub playtime_total: u32,
    pub header_image: String,
    pub icon_url: Option<String>,
}

impl From<models::RecentGame> for GqlRecentGame {
    fn from(g: models::RecentGame) -> Self {
        GqlRecentGame {
            appid: g.appid,
            name: g.name,
            playtime_recent: g.playtime_recent,
            playtime_total: g.playtime_total,
            header_image: g.header_image,
            icon_url: g.icon_url,
        }
    }
}

// Input types

#[derive(InputObject)]
pub struct CreateCityInput {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub banner_image: String,
    pub description: String,
    pub ruler: String,
    pub ideology: String,
    pub date_first_visited: String,
}

impl From<CreateCityInput> for models::CityInput {
    fn from(i: CreateCityInput) -> Self {
        models::CityInput {
            name: i.name,
            x: i.x,
            y: i.y,
            banner_image: i.banner_image,
            description: i.description,
            ruler: i.ruler,
            ideology: i.ideology,
            date_first_visited: i.date_first_visited,
        }
    }
}

#[derive(InputObject)]
pub struct UpdateCityInput {
    pub id: ID,
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub banner_image: Option<String>,
    pub description: Option<String>,
    pub ruler: Option<String>,
    pub ideology: Option<String>,
    pub date_first_visited: Option<String>,
}

/// Stored ids are UUIDs; anything else cannot name a record.
fn parse_city_id(id: &ID) -> Option<String> {
    uuid::Uuid::parse_str(id.as_str())
        .ok()
        .map(|u| u.to_string())
}

// Query root

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All cities, ordered by name.
    async fn cities(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<GqlCity>> {
        let storage = ctx.data::<Arc<Storage>>()?;
        let cities = storage.list_cities()?;
        Ok(cities.into_iter().map(GqlCity::from).collect())
    }

    async fn city(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<GqlCity>> {
        let storage = ctx.data::<Arc<Storage>>()?;
        let Some(id) = parse_city_id(&id) else {
            return Ok(None);
        };
        let city = storage.get_city(&id)?;
        Ok(city.map(GqlCity::from))
    }

    async fn projects(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<GqlProject>> {
        let assets = ctx.data::<Arc<Assets>>()?;
        Ok(assets.projects.iter().map(GqlProject::from).collect())
    }

    async fn project(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<GqlProject>> {
        let assets = ctx.data::<Arc<Assets>>()?;
        Ok(assets.find_project(&id).map(GqlProject::from))
    }

    /// Books in any of `categories`; every book when absent or empty.
    async fn books(
        &self,
        ctx: &Context<'_>,
        categories: Option<Vec<String>>,
    ) -> async_graphql::Result<Vec<GqlBook>> {
        let assets = ctx.data::<Arc<Assets>>()?;
        let selected = categories.unwrap_or_default();
        Ok(shelf::filter_by_categories(&assets.books, &selected)
            .into_iter()
            .map(GqlBook::from)
            .collect())
    }

    async fn book_categories(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<String>> {
        let assets = ctx.data::<Arc<Assets>>()?;
        Ok(shelf::categories(&assets.books))
    }

    async fn recent_games(
        &self,
        ctx: &Context<'_>,
        steam_id: String,
    ) -> async_graphql::Result<Vec<GqlRecentGame>> {
        let steam = ctx.data::<Arc<SteamClient>>()?;
        let games = steam.recent_games(&steam_id).await.map_err(|e| {
            tracing::warn!(error = %e, "Recently played games lookup failed");
            async_graphql::Error::new(e.to_string())
        })?;
        Ok(games.into_iter().map(GqlRecentGame::from).collect())
    }
}

// Mutation root

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_city(
        &self,
        ctx: &Context<'_>,
        input: CreateCityInput,
    ) -> async_graphql::Result<GqlCity> {
        let storage = ctx.data::<Arc<Storage>>()?;
        let input = models::CityInput::from(input);
        input.validate()?;

        let now = chrono::Utc::now().to_rfc3339();
        let city = models::City::create(input, &now);

        storage.save_city(&city)?;
        tracing::info!(city_id = %city.id, name = %city.name, "Created city");

        Ok(GqlCity::from(city))
    }

    async fn update_city(
        &self,
        ctx: &Context<'_>,
        input: UpdateCityInput,
    ) -> async_graphql::Result<GqlCity> {
        let storage = ctx.data::<Arc<Storage>>()?;

        let not_found = || async_graphql::Error::new("City not found");
        let id = parse_city_id(&input.id).ok_or_else(not_found)?;
        let mut city = storage.get_city(&id)?.ok_or_else(not_found)?;

        if let Some(name) = input.name {
            city.name = name;
        }
        if let Some(x) = input.x {
            city.x = x;
        }
        if let Some(y) = input.y {
            city.y = y;
        }
        if let Some(banner_image) = input.banner_image {
            city.banner_image = banner_image;
        }
        if let Some(description) = input.description {
            city.description = description;
        }
        if let Some(ruler) = input.ruler {
            city.ruler = ruler;
        }
        if let Some(ideology) = input.ideology {
            city.ideology = ideology;
        }
        if let Some(date) = input.date_first_visited {
            city.date_first_visited = date;
        }
        city.input().validate()?;

        city.updated_at = chrono::Utc::now().to_rfc3339();

        storage.save_city(&city)?;
        tracing::info!(city_id = %city.id, "Updated city");

        Ok(GqlCity::from(city))
    }

    async fn delete_city(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<bool> {
        let storage = ctx.data::<Arc<Storage>>()?;
        let Some(id) = parse_city_id(&id) else {
            return Ok(false);
        };
        let removed = storage.delete_city(&id)?;
        if removed {
            tracing::info!(city_id = %id, "Deleted city");
        }
        Ok(removed)
    }
}

pub type Schema = async_graphql::Schema<QueryRoot, MutationRoot, async_graphql::EmptySubscription>;

pub fn build_schema(assets: Arc<Assets>, storage: Arc<Storage>, steam: Arc<SteamClient>) -> Schema {
    async_graphql::Schema::build(QueryRoot, MutationRoot, async_graphql::EmptySubscription)
        .data(assets)
        .data(storage)
        .data(steam)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SteamConfig;
    use portfolio_shared::models::{Book, Project};

    fn book(id: u32, category: &str) -> Book {
        Book {
            id,
            title: format!("Book {}", id),
            author: "Author".to_string(),
            cover: "cover.jpg".to_string(),
            summary: "Summary".to_string(),
            completed_date: "October 2025".to_string(),
            category: category.to_string(),
        }
    }

    fn test_schema() -> (tempfile::TempDir, Schema) {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::open(&dir.path().join("test.redb")).unwrap();
        let project: Project = serde_json::from_str(
            r#"{"id":"cerca-mare","title":"Cerca Mare","category":"Worldbuilding","overview":"o","role":"r","duration":"d","team":"t","heroImage":"h.jpg","companionRoute":"/map","sections":[{"id":"map","kind":"IMAGE","image":"m.jpg"}]}"#,
        )
        .unwrap();
        let assets = Arc::new(Assets {
            projects: vec![project],
            books: vec![book(1, "Design"), book(2, "Fiction"), book(3, "Design")],
        });
        let steam = SteamClient::new(&SteamConfig {
            api_key: None,
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        (dir, build_schema(assets, storage, Arc::new(steam)))
    }

    async fn run(schema: &Schema, query: &str) -> async_graphql::Response {
        schema.execute(query).await
    }

    const CREATE_VELL: &str = r#"mutation {
        createCity(input: {name: "Vell", x: 25.5, y: 70, bannerImage: "b.jpg", description: "d", ruler: "r", ideology: "i", dateFirstVisited: "03/04/2024"}) { id name x createdAt updatedAt }
    }"#;

    async fn create_vell(schema: &Schema) -> String {
        let resp = run(schema, CREATE_VELL).await;
        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        data["createCity"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_create_and_list_cities() {
        let (_dir, schema) = test_schema();
        let id = create_vell(&schema).await;

        let resp = run(&schema, "{ cities { id name x y bannerImage } }").await;
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["cities"][0]["id"], id.as_str());
        assert_eq!(data["cities"][0]["x"], 25.5);
        assert_eq!(data["cities"][0]["bannerImage"], "b.jpg");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_city() {
        let (_dir, schema) = test_schema();
        let resp = run(
            &schema,
            r#"mutation { createCity(input: {name: "Vell", x: 120, y: 5, bannerImage: "b", description: "d", ruler: "r", ideology: "i", dateFirstVisited: "x"}) { id } }"#,
        )
        .await;
        assert_eq!(
            resp.errors[0].message,
            "X position must be between 0 and 100 (got 120)"
        );
        let resp = run(&schema, "{ cities { id } }").await;
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["cities"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_update_city_partial() {
        let (_dir, schema) = test_schema();
        let id = create_vell(&schema).await;

        let query = format!(
            r#"mutation {{ updateCity(input: {{id: "{}", ruler: "Queen Ysolde", y: 12}}) {{ name ruler x y }} }}"#,
            id
        );
        let resp = run(&schema, &query).await;
        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["updateCity"]["name"], "Vell");
        assert_eq!(data["updateCity"]["ruler"], "Queen Ysolde");
        assert_eq!(data["updateCity"]["x"], 25.5);
        assert_eq!(data["updateCity"]["y"], 12.0);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let (_dir, schema) = test_schema();
        let id = create_vell(&schema).await;
        let query = format!(
            r#"mutation {{ updateCity(input: {{id: "{}", name: "  "}}) {{ name }} }}"#,
            id
        );
        let resp = run(&schema, &query).await;
        assert_eq!(resp.errors[0].message, "City name is required");
    }

    #[tokio::test]
    async fn test_update_missing_city() {
        let (_dir, schema) = test_schema();
        for id in ["not-a-uuid", "00000000-0000-4000-8000-000000000000"] {
            let query = format!(
                r#"mutation {{ updateCity(input: {{id: "{}", name: "X"}}) {{ id }} }}"#,
                id
            );
            let resp = run(&schema, &query).await;
            assert_eq!(resp.errors[0].message, "City not found");
        }
    }

    #[tokio::test]
    async fn test_city_lookup_and_delete() {
        let (_dir, schema) = test_schema();
        let id = create_vell(&schema).await;

        let resp = run(&schema, &format!(r#"{{ city(id: "{}") {{ name }} }}"#, id)).await;
        assert_eq!(resp.data.into_json().unwrap()["city"]["name"], "Vell");

        let resp = run(&schema, r#"{ city(id: "garbage") { name } }"#).await;
        assert!(resp.errors.is_empty());
        assert!(resp.data.into_json().unwrap()["city"].is_null());

        let delete = format!(r#"mutation {{ deleteCity(id: "{}") }}"#, id);
        let resp = run(&schema, &delete).await;
        assert_eq!(resp.data.into_json().unwrap()["deleteCity"], true);
        let resp = run(&schema, &delete).await;
        assert_eq!(resp.data.into_json().unwrap()["deleteCity"], false);
    }

    #[tokio::test]
    async fn test_projects_queries() {
        let (_dir, schema) = test_schema();
        let resp = run(
            &schema,
            r#"{ project(id: "cerca-mare") { title companionRoute sections { kind label } } }"#,
        )
        .await;
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["project"]["companionRoute"], "/map");
        assert_eq!(data["project"]["sections"][0]["kind"], "IMAGE");
        assert_eq!(data["project"]["sections"][0]["label"], "Gallery");

        let resp = run(&schema, r#"{ project(id: "nope") { title } }"#).await;
        assert!(resp.data.into_json().unwrap()["project"].is_null());
    }

    #[tokio::test]
    async fn test_books_filter_and_categories() {
        let (_dir, schema) = test_schema();
        let resp = run(&schema, "{ bookCategories }").await;
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["bookCategories"], serde_json::json!(["Design", "Fiction"]));

        let resp = run(&schema, r#"{ books(categories: ["Design"]) { id } }"#).await;
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["books"], serde_json::json!([{"id": 1}, {"id": 3}]));

        let resp = run(&schema, "{ books { id } }").await;
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["books"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_typed_errors_convert_to_graphql_errors() {
        let encode = serde_json::from_str::<u32>("x").unwrap_err();
        let err: async_graphql::Error = crate::storage::StorageError::Encode(encode).into();
        assert!(err.message.starts_with("failed to encode city: "), "{}", err.message);

        let err: async_graphql::Error = models::ValidationError::Required("Ruler").into();
        assert_eq!(err.message, "Ruler is required");
    }

    #[tokio::test]
    async fn test_recent_games_without_key_errors() {
        let (_dir, schema) = test_schema();
        let resp = run(&schema, r#"{ recentGames(steamId: "1") { name } }"#).await;
        assert_eq!(resp.errors[0].message, "Missing Steam ID or API key");
    }
}
