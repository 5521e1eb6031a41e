use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;

use crate::matches::error::MatchError;
use crate::matches::MatchService;
use crate::models::common::ApiResponse;
use crate::models::matches::{MatchDetailResponse, SupportedLeaguesResponse};
use crate::utils::query_parser::{parse_league, parse_number, RawMatchQuery};

/// Query string of the upcoming / accepting views
#[derive(Debug, Default, Deserialize)]
pub struct RawViewQuery {
    pub league: Option<String>,
    pub limit: Option<String>,
}

fn error_response(e: &MatchError) -> HttpResponse {
    HttpResponse::build(e.status_code()).json(ApiResponse::<()>::error(e.code(), e.to_string()))
}

/// List matches
#[tracing::instrument(
    name = "List matches",
    skip(query, service),
    fields(
        league = ?query.league,
        status = ?query.status,
        limit = ?query.limit,
        offset = ?query.offset
    )
)]
pub async fn list_matches(
    query: web::Query<RawMatchQuery>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let query = query.into_inner().into_query();

    match service.execute(&query).await {
        Ok(result) => {
            tracing::info!(
                "Returning {} of {} matches (has_more: {})",
                result.matches.len(), result.total, result.has_more
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
        }
        Err(e @ MatchError::Validation(_)) => {
            tracing::warn!("Rejected match query: {}", e);
            Ok(error_response(&e))
        }
        Err(e) => {
            tracing::error!("Failed to list matches: {}", e);
            Ok(error_response(&e))
        }
    }
}

/// Get upcoming matches
#[tracing::instrument(
    name = "Get upcoming matches",
    skip(query, service),
    fields(
        league = ?query.league,
        limit = ?query.limit
    )
)]
pub async fn get_upcoming_matches(
    query: web::Query<RawViewQuery>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let league = parse_league(query.league.as_deref());
    let limit = parse_number(query.limit.as_deref());

    match service.get_upcoming_matches(league, limit).await {
        Ok(result) => {
            tracing::info!("Successfully retrieved {} upcoming matches", result.matches.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
        }
        Err(e) => {
            tracing::error!("Failed to get upcoming matches: {}", e);
            Ok(error_response(&e))
        }
    }
}

/// Get matches still accepting predictions
#[tracing::instrument(
    name = "Get matches accepting predictions",
    skip(query, service),
    fields(limit = ?query.limit)
)]
pub async fn get_accepting_predictions(
    query: web::Query<RawViewQuery>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let limit = parse_number(query.limit.as_deref());

    match service.get_accepting_predictions(limit).await {
        Ok(result) => {
            tracing::info!("Successfully retrieved {} matches accepting predictions", result.matches.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
        }
        Err(e) => {
            tracing::error!("Failed to get matches accepting predictions: {}", e);
            Ok(error_response(&e))
        }
    }
}

pub async fn get_supported_leagues(service: web::Data<MatchService>) -> Result<HttpResponse> {
    match service.get_supported_leagues().await {
        Ok(leagues) => Ok(HttpResponse::Ok().json(ApiResponse::success(SupportedLeaguesResponse { leagues }))),
        Err(e) => {
            tracing::error!("Failed to get supported leagues: {}", e);
            Ok(error_response(&e))
        }
    }
}

/// Get a single match
#[tracing::instrument(
    name = "Get match",
    skip(service),
    fields(match_id = %match_id)
)]
pub async fn get_match(
    match_id: String,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match service.get_match(&match_id).await {
        Ok(Some(found)) => Ok(HttpResponse::Ok().json(ApiResponse::success(MatchDetailResponse { match_: found }))),
        Ok(None) => {
            tracing::info!("Match {} not found", match_id);
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(
                "MATCH_NOT_FOUND",
                format!("Match {} was not found", match_id),
            )))
        }
        Err(e) => {
            tracing::error!("Failed to get match {}: {}", match_id, e);
            Ok(error_response(&e))
        }
    }
}
