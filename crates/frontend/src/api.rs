use portfolio_shared::models::{Book, City, CityInput, Project, RecentGame};
use serde::{Deserialize, Serialize};

const CITY_FIELDS: &str =
    "id name x y bannerImage description ruler ideology dateFirstVisited createdAt updatedAt";

const PROJECT_FIELDS: &str = "id title category overview role duration team tags heroImage outcome companionRoute sections { id kind title subtitle content image imageAlt imageLeft }";

/// Build the variables JSON for a create city mutation.
pub fn build_create_city_variables(input: &CityInput) -> serde_json::Value {
    serde_json::json!({ "input": input })
}

/// Build the variables JSON for an update city mutation. Every editable field is sent.
pub fn build_update_city_variables(id: &str, input: &CityInput) -> serde_json::Value {
    let mut vars = build_create_city_variables(input);
    vars["input"]["id"] = serde_json::Value::String(id.to_string());
    vars
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

fn api_url() -> String {
    // Same origin as the page; empty origin falls back to a relative path
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}/graphql", origin)
}

/// First GraphQL error wins, then missing data.
fn into_result<T>(resp: GraphQLResponse<T>) -> Result<T, String> {
    if let Some(errors) = resp.errors {
        if let Some(first) = errors.into_iter().next() {
            return Err(first.message);
        }
    }
    resp.data.ok_or_else(|| "No data returned".to_string())
}

async fn query<T: for<'de> Deserialize<'de>>(
    query_str: &str,
    variables: Option<serde_json::Value>,
) -> Result<T, String> {
    let req = GraphQLRequest {
        query: query_str.to_string(),
        variables,
    };

    let resp = reqwest::Client::new()
        .post(api_url())
        .json(&req)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let gql_resp: GraphQLResponse<T> = resp.json().await.map_err(|e| e.to_string())?;
    into_result(gql_resp)
}

// Cities

#[derive(Deserialize)]
pub struct CitiesResponse {
    pub cities: Vec<City>,
}

pub async fn fetch_cities() -> Result<Vec<City>, String> {
    let resp: CitiesResponse = query(&format!("query {{ cities {{ {} }} }}", CITY_FIELDS), None).await?;
    Ok(resp.cities)
}

#[derive(Deserialize)]
pub struct CreateCityResponse {
    #[serde(rename = "createCity")]
    pub create_city: City,
}

pub async fn create_city(input: &CityInput) -> Result<City, String> {
    let resp: CreateCityResponse = query(
        &format!(
            "mutation CreateCity($input: CreateCityInput!) {{ createCity(input: $input) {{ {} }} }}",
            CITY_FIELDS
        ),
        Some(build_create_city_variables(input)),
    )
    .await?;
    Ok(resp.create_city)
}

#[derive(Deserialize)]
pub struct UpdateCityResponse {
    #[serde(rename = "updateCity")]
    pub update_city: City,
}

pub async fn update_city(id: &str, input: &CityInput) -> Result<City, String> {
    let resp: UpdateCityResponse = query(
        &format!(
            "mutation UpdateCity($input: UpdateCityInput!) {{ updateCity(input: $input) {{ {} }} }}",
            CITY_FIELDS
        ),
        Some(build_update_city_variables(id, input)),
    )
    .await?;
    Ok(resp.update_city)
}

#[derive(Deserialize)]
pub struct DeleteCityResponse {
    #[serde(rename = "deleteCity")]
    pub delete_city: bool,
}

pub async fn delete_city(id: &str) -> Result<bool, String> {
    let resp: DeleteCityResponse = query(
        r#"mutation DeleteCity($id: ID!) { deleteCity(id: $id) }"#,
        Some(serde_json::json!({ "id": id })),
    )
    .await?;
    Ok(resp.delete_city)
}

// Content

#[derive(Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    let resp: ProjectsResponse =
        query(&format!("query {{ projects {{ {} }} }}", PROJECT_FIELDS), None).await?;
    Ok(resp.projects)
}

#[derive(Deserialize)]
pub struct ProjectResponse {
    pub project: Option<Project>,
}

pub async fn fetch_project(id: &str) -> Result<Option<Project>, String> {
    let resp: ProjectResponse = query(
        &format!(
            "query FetchProject($id: String!) {{ project(id: $id) {{ {} }} }}",
            PROJECT_FIELDS
        ),
        Some(serde_json::json!({ "id": id })),
    )
    .await?;
    Ok(resp.project)
}

#[derive(Deserialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

pub async fn fetch_books() -> Result<Vec<Book>, String> {
    let resp: BooksResponse = query(
        r#"query { books { id title author cover summary completedDate category } }"#,
        None,
    )
    .await?;
    Ok(resp.books)
}

#[derive(Deserialize)]
pub struct RecentGamesResponse {
    #[serde(rename = "recentGames")]
    pub recent_games: Vec<RecentGame>,
}

pub async fn fetch_recent_games(steam_id: &str) -> Result<Vec<RecentGame>, String> {
    let resp: RecentGamesResponse = query(
        r#"query RecentGames($steamId: String!) {
            recentGames(steamId: $steamId) {
                appid name playtimeRecent playtimeTotal headerImage iconUrl
            }
        }"#,
        Some(serde_json::json!({ "steamId": steam_id })),
    )
    .await?;
    Ok(resp.recent_games)
}
