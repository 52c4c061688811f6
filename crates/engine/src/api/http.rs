//! HTTP routes.
//!
//! Status contract for the character routes:
//! - 200 with a JSON body on success
//! - 204 when the character does not exist, including ids no character can have
//! - 400 for a non-positive or missing amount, or an unknown damage type
//! - 500 when the record is corrupt, the save had no effect, or anything else failed

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use healthcycle_domain::{CharacterId, DamageType, HitPoints, PlayerCharacter};

use crate::app::App;
use crate::use_cases::character_health::CharacterHealthError;

const UNABLE_TO_SAVE: &str = "Unable to save updated character data, please try again";
const UNABLE_TO_GATHER: &str = "Unable to gather the character data, please try again";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/character/{id}", get(get_character))
        .route("/character/{id}/heal", post(heal))
        .route("/character/{id}/add-temp-hp", post(add_temp_hp))
        .route("/character/{id}/damage", post(apply_damage))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Query parameters
// =============================================================================

#[derive(Debug, Deserialize)]
struct AmountQuery {
    amount: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DamageQuery {
    amount: Option<i32>,
    damage_type: Option<String>,
}

// =============================================================================
// Character health
// =============================================================================

async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<PlayerCharacter>, ApiError> {
    let id = parse_character_id(id)?;
    let pc = app
        .use_cases
        .character_health
        .get_character(&id)
        .await
        .map_err(|e| health_error(e, UNABLE_TO_GATHER))?;
    Ok(Json(pc))
}

async fn heal(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Query(query): Query<AmountQuery>,
) -> Result<Json<HitPoints>, ApiError> {
    let amount = positive_amount(query.amount, "Healing")?;
    let id = parse_character_id(id)?;
    let result = app
        .use_cases
        .character_health
        .heal(&id, amount)
        .await
        .map_err(|e| health_error(e, UNABLE_TO_SAVE))?;
    saved(result)
}

async fn add_temp_hp(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Query(query): Query<AmountQuery>,
) -> Result<Json<HitPoints>, ApiError> {
    let amount = positive_amount(query.amount, "Temp HP")?;
    let id = parse_character_id(id)?;
    let result = app
        .use_cases
        .character_health
        .grant_temp_hp(&id, amount)
        .await
        .map_err(|e| health_error(e, UNABLE_TO_SAVE))?;
    saved(result)
}

async fn apply_damage(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Query(query): Query<DamageQuery>,
) -> Result<Json<HitPoints>, ApiError> {
    let amount = positive_amount(query.amount, "Damage")?;
    let damage_type = match query.damage_type.as_deref() {
        None | Some("") => DamageType::None,
        Some(raw) => raw
            .parse::<DamageType>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
    };
    let id = parse_character_id(id)?;
    let result = app
        .use_cases
        .character_health
        .apply_damage(&id, damage_type, amount)
        .await
        .map_err(|e| health_error(e, UNABLE_TO_SAVE))?;
    saved(result)
}

fn positive_amount(amount: Option<i32>, label: &str) -> Result<i32, ApiError> {
    match amount {
        Some(amount) if amount > 0 => Ok(amount),
        _ => Err(ApiError::BadRequest(format!(
            "{label} amounts must be positive numbers"
        ))),
    }
}

/// An id no character can have is answered like any other lookup miss.
fn parse_character_id(id: String) -> Result<CharacterId, ApiError> {
    CharacterId::new(id).map_err(|e| {
        tracing::debug!(error = %e, "Rejected character id");
        ApiError::NoContent
    })
}

fn saved(result: Option<HitPoints>) -> Result<Json<HitPoints>, ApiError> {
    result.map(Json).ok_or(ApiError::Internal(UNABLE_TO_SAVE))
}

fn health_error(err: CharacterHealthError, message: &'static str) -> ApiError {
    match err {
        CharacterHealthError::CharacterNotFound(_) => ApiError::NoContent,
        CharacterHealthError::CorruptCharacterData { .. }
        | CharacterHealthError::InvalidDefenseConfiguration(_)
        | CharacterHealthError::Storage(_) => ApiError::Internal(message),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    /// The requested character does not exist.
    NoContent,
    BadRequest(String),
    /// Server-side failure; carries only the message safe to show callers.
    Internal(&'static str),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NoContent => StatusCode::NO_CONTENT.into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}
