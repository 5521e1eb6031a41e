// src/routes/matches.rs
use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::matches::match_handler::{self, RawViewQuery};
use crate::matches::MatchService;
use crate::utils::query_parser::RawMatchQuery;

/// List matches with optional league / prediction status filters and paging
pub async fn list_matches(
    query: web::Query<RawMatchQuery>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match_handler::list_matches(query, service).await
}

/// Upcoming matches, optionally for one league
#[get("/upcoming")]
async fn get_upcoming_matches(
    query: web::Query<RawViewQuery>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match_handler::get_upcoming_matches(query, service).await
}

/// Matches still accepting predictions
#[get("/accepting")]
async fn get_accepting_predictions(
    query: web::Query<RawViewQuery>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match_handler::get_accepting_predictions(query, service).await
}

/// Leagues the system recognizes
#[get("/leagues")]
async fn get_supported_leagues(
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    match_handler::get_supported_leagues(service).await
}

/// Get specific match by ID
#[get("/{match_id}")]
async fn get_match(
    path: web::Path<String>,
    service: web::Data<MatchService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, service).await
}
