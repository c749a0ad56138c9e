use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{Fragrance, Interaction, InteractionKind, QuestionnaireProfile, SearchFilters},
    services::{
        providers::{MAX_SEARCH_LIMIT, MIN_QUERY_LEN},
        recommendations::DEFAULT_SIMILAR_LIMIT,
        search::{self, SearchOutcome},
        statistics::{self, CollectionStatistics},
        Recommender,
    },
    store::AddOutcome,
};

use super::AppState;

// Request/Response types

/// Search query parameters; the filter fields are comma-separated lists
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub gender: Option<String>,
    pub scent_family: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SimilarParams {
    pub limit: Option<usize>,
    pub gender: Option<String>,
    pub scent_family: Option<String>,
    pub brand: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordInteractionRequest {
    pub fragrance_id: String,
    pub kind: InteractionKind,
}

#[derive(Debug, Serialize)]
pub struct PopularityResponse {
    pub fragrance_id: String,
    pub score: u32,
}

#[derive(Debug, Deserialize)]
pub struct AddToInventoryRequest {
    pub fragrance_id: String,
}

#[derive(Debug, Serialize)]
pub struct AddToInventoryResponse {
    pub status: AddOutcome,
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Parses a comma-separated list of enum labels such as "Male,Unisex"
fn parse_list<T: DeserializeOwned>(raw: Option<&str>, field: &str) -> AppResult<Vec<T>> {
    split_list(raw)
        .into_iter()
        .map(|label| {
            serde_json::from_value(Value::String(label.clone())).map_err(|_| {
                AppError::InvalidInput(format!("Unknown {} value: {}", field, label))
            })
        })
        .collect()
}

fn parse_filters(
    gender: Option<&str>,
    scent_family: Option<&str>,
    brand: Option<&str>,
) -> AppResult<SearchFilters> {
    Ok(SearchFilters {
        genders: parse_list(gender, "gender")?,
        scent_families: parse_list(scent_family, "scent_family")?,
        brands: split_list(brand),
    })
}

async fn find_fragrance(state: &AppState, id: &str) -> AppResult<Fragrance> {
    state
        .catalog
        .read()
        .await
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Fragrance {} not found", id)))
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Search the catalog by query and filters, most popular first
///
/// Provider failures produce an empty result list with `error` set rather
/// than an error response.
pub async fn search_fragrances(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchOutcome>> {
    let filters = parse_filters(
        params.gender.as_deref(),
        params.scent_family.as_deref(),
        None,
    )?;
    let query = params.q.unwrap_or_default();

    let mut outcome = if query.trim().chars().count() >= MIN_QUERY_LEN {
        let mut outcome =
            search::search_catalog(state.provider.as_ref(), &query, MAX_SEARCH_LIMIT).await;
        let results = std::mem::take(&mut outcome.results);
        outcome.results = state.catalog.write().await.merge_resolved(results);
        outcome.results.retain(|f| filters.matches(f));
        outcome
    } else {
        SearchOutcome {
            results: state.catalog.read().await.filter(Some(query.as_str()), &filters),
            error: None,
        }
    };

    let interactions = state.interactions.read_all().await?;
    let recommender = Recommender::new(&[], &interactions);
    outcome.results = recommender.popular(outcome.results);

    tracing::info!(
        query = %query,
        results = outcome.results.len(),
        degraded = outcome.error.is_some(),
        "Search completed"
    );

    Ok(Json(outcome))
}

/// Whole catalog snapshot, most popular first
pub async fn list_fragrances(State(state): State<AppState>) -> AppResult<Json<Vec<Fragrance>>> {
    let interactions = state.interactions.read_all().await?;
    let catalog = state.catalog.read().await;
    let recommender = Recommender::new(catalog.all(), &interactions);
    Ok(Json(recommender.popular(catalog.all().to_vec())))
}

/// Fragrance details; records a view
pub async fn get_fragrance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Fragrance>> {
    let fragrance = find_fragrance(&state, &id).await?;
    state
        .interactions
        .append(Interaction::new(&fragrance.id, InteractionKind::View))
        .await?;
    Ok(Json(fragrance))
}

/// "You might also like" for a fragrance, boosted by the active filters
pub async fn similar_fragrances(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SimilarParams>,
) -> AppResult<Json<Vec<Fragrance>>> {
    let filters = parse_filters(
        params.gender.as_deref(),
        params.scent_family.as_deref(),
        params.brand.as_deref(),
    )?;
    let limit = params.limit.unwrap_or(DEFAULT_SIMILAR_LIMIT);
    let reference = find_fragrance(&state, &id).await?;

    let interactions = state.interactions.read_all().await?;
    let catalog = state.catalog.read().await;
    let recommender = Recommender::new(catalog.all(), &interactions);
    let context = (!filters.is_empty()).then_some(&filters);

    Ok(Json(recommender.similar(&reference, context, limit)))
}

/// Popularity score of a single fragrance
pub async fn fragrance_popularity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PopularityResponse>> {
    let interactions = state.interactions.read_all().await?;
    let score = Recommender::new(&[], &interactions).popularity(&id);
    Ok(Json(PopularityResponse {
        fragrance_id: id,
        score,
    }))
}

/// Record a user interaction
pub async fn record_interaction(
    State(state): State<AppState>,
    Json(request): Json<RecordInteractionRequest>,
) -> AppResult<(StatusCode, Json<Interaction>)> {
    if request.fragrance_id.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "fragrance_id cannot be empty".to_string(),
        ));
    }

    let interaction = Interaction::new(request.fragrance_id, request.kind);
    state.interactions.append(interaction.clone()).await?;
    Ok((StatusCode::CREATED, Json(interaction)))
}

/// Recommendations for questionnaire answers
pub async fn questionnaire_recommendations(
    State(state): State<AppState>,
    Json(profile): Json<QuestionnaireProfile>,
) -> AppResult<Json<Vec<Fragrance>>> {
    let profile = profile.clamped();
    let interactions = state.interactions.read_all().await?;
    let catalog = state.catalog.read().await;
    let recommender = Recommender::new(catalog.all(), &interactions);
    Ok(Json(recommender.for_profile(&profile)))
}

/// The user's collection
pub async fn get_inventory(State(state): State<AppState>) -> AppResult<Json<Vec<Fragrance>>> {
    Ok(Json(state.inventory.read_all().await?))
}

/// Add a catalog fragrance to the collection
///
/// A fragrance already in the collection is reported as a duplicate with 200.
pub async fn add_to_inventory(
    State(state): State<AppState>,
    Json(request): Json<AddToInventoryRequest>,
) -> AppResult<(StatusCode, Json<AddToInventoryResponse>)> {
    let fragrance = find_fragrance(&state, &request.fragrance_id).await?;
    let fragrance_id = fragrance.id.clone();

    let status = state.inventory.add(fragrance).await?;
    let code = match status {
        AddOutcome::Added => {
            state
                .interactions
                .append(Interaction::new(fragrance_id, InteractionKind::AddToInventory))
                .await?;
            StatusCode::CREATED
        }
        AddOutcome::Duplicate => StatusCode::OK,
    };

    Ok((code, Json(AddToInventoryResponse { status })))
}

/// Remove the collection entry at a position
pub async fn remove_from_inventory(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> AppResult<Json<Fragrance>> {
    Ok(Json(state.inventory.remove_at(index).await?))
}

/// Note, season and occasion analytics over the collection
pub async fn inventory_statistics(
    State(state): State<AppState>,
) -> AppResult<Json<CollectionStatistics>> {
    let inventory = state.inventory.read_all().await?;
    Ok(Json(statistics::collection_statistics(&inventory)))
}
