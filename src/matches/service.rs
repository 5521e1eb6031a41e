use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::db::match_repository::MatchRepository;
use crate::matches::error::MatchError;
use crate::matches::validation::MatchValidator;
use crate::models::matches::{League, Match, MatchListResponse, MatchQuery};

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(2);

/// Use-case layer over a `MatchRepository`: validates input, bounds every
/// store read with a deadline and shapes the derived views.
#[derive(Clone)]
pub struct MatchService {
    repository: Arc<dyn MatchRepository>,
    store_timeout: Duration,
}

impl MatchService {
    pub fn new(repository: Arc<dyn MatchRepository>) -> Self {
        Self {
            repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    fn validator(&self) -> MatchValidator {
        MatchValidator::new()
    }

    async fn with_deadline<T, F>(&self, read: F) -> Result<T, MatchError>
    where
        F: Future<Output = Result<T, MatchError>>,
    {
        match tokio::time::timeout(self.store_timeout, read).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!("Match store read exceeded {:?}", self.store_timeout);
                Err(MatchError::StoreTimeout(self.store_timeout))
            }
        }
    }

    /// Listing with filters and pagination
    #[tracing::instrument(
        name = "Execute match query",
        skip(self, query),
        fields(
            league = ?query.league,
            status = ?query.status,
            limit = ?query.limit,
            offset = ?query.offset
        )
    )]
    pub async fn execute(&self, query: &MatchQuery) -> Result<MatchListResponse, MatchError> {
        self.validator().validate_query(query)?;
        self.with_deadline(self.repository.find_matches(query)).await
    }

    /// Upcoming matches. With a league this is the upcoming-by-league view;
    /// without one it falls back to the plain listing capped at `limit`.
    #[tracing::instrument(name = "Get upcoming matches", skip(self))]
    pub async fn get_upcoming_matches(
        &self,
        league: Option<League>,
        limit: Option<i64>,
    ) -> Result<MatchListResponse, MatchError> {
        let limit = self.validator().validate_view_limit(limit)?;

        match league {
            Some(league) => {
                let matches = self
                    .with_deadline(self.repository.find_upcoming_by_league(league, limit + 1))
                    .await?;
                Ok(truncate_view(matches, limit))
            }
            None => {
                let query = MatchQuery {
                    limit: Some(limit as i64),
                    ..MatchQuery::default()
                };
                self.with_deadline(self.repository.find_matches(&query)).await
            }
        }
    }

    #[tracing::instrument(name = "Get matches accepting predictions", skip(self))]
    pub async fn get_accepting_predictions(&self, limit: Option<i64>) -> Result<MatchListResponse, MatchError> {
        let limit = self.validator().validate_view_limit(limit)?;
        let matches = self
            .with_deadline(self.repository.find_accepting_predictions(limit + 1))
            .await?;
        Ok(truncate_view(matches, limit))
    }

    #[tracing::instrument(name = "Get supported leagues", skip(self))]
    pub async fn get_supported_leagues(&self) -> Result<Vec<League>, MatchError> {
        self.with_deadline(self.repository.get_supported_leagues()).await
    }

    #[tracing::instrument(name = "Get match", skip(self))]
    pub async fn get_match(&self, match_id: &str) -> Result<Option<Match>, MatchError> {
        self.with_deadline(self.repository.find_by_id(match_id)).await
    }

    #[tracing::instrument(name = "Get multiple matches", skip(self, match_ids), fields(requested = match_ids.len()))]
    pub async fn get_matches(&self, match_ids: &[String]) -> Result<Vec<Match>, MatchError> {
        self.with_deadline(self.repository.get_multiple_matches(match_ids)).await
    }
}

/// The views fetch one record beyond `limit`; its presence means more exist.
/// `total` is the size of the returned page, the views are not counted.
fn truncate_view(mut matches: Vec<Match>, limit: usize) -> MatchListResponse {
    let has_more = matches.len() > limit;
    matches.truncate(limit);

    MatchListResponse {
        total: matches.len(),
        matches,
        has_more,
    }
}
