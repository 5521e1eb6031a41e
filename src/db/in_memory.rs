use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::db::match_repository::MatchRepository;
use crate::matches::error::MatchError;
use crate::matches::prediction_status::{is_prediction_open, is_upcoming};
use crate::matches::query::{filter_and_sort, paginate, take_sorted, MatchFilter};
use crate::matches::validation::DEFAULT_PAGE_LIMIT;
use crate::models::matches::{League, Match, MatchListResponse, MatchQuery};

/// Immutable snapshot of matches, built once at startup and only read afterwards
#[derive(Debug, Clone)]
pub struct InMemoryMatchRepository {
    matches: Vec<Match>,
}

impl InMemoryMatchRepository {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    /// Listing without validation; negative windows are clamped to zero
    pub fn query(&self, query: &MatchQuery) -> MatchListResponse {
        let filter = MatchFilter {
            league: query.league,
            status: query.status,
        };
        let offset = query.offset.map_or(0, |offset| usize::try_from(offset).unwrap_or(0));
        let limit = query
            .limit
            .map_or(DEFAULT_PAGE_LIMIT, |limit| usize::try_from(limit).unwrap_or(0));

        paginate(filter_and_sort(&self.matches, &filter), offset, limit)
    }

    pub fn get(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id() == match_id)
    }

    /// Upcoming matches of a league relative to an explicit instant
    pub fn upcoming_by_league_at(&self, league: League, limit: usize, now: DateTime<Utc>) -> Vec<Match> {
        take_sorted(&self.matches, limit, |m| {
            m.league() == league && is_upcoming(m.kickoff_time(), now)
        })
    }

    pub fn accepting_predictions(&self, limit: usize) -> Vec<Match> {
        take_sorted(&self.matches, limit, |m| is_prediction_open(m.prediction_status()))
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    async fn find_matches(&self, query: &MatchQuery) -> Result<MatchListResponse, MatchError> {
        Ok(self.query(query))
    }

    async fn find_by_id(&self, match_id: &str) -> Result<Option<Match>, MatchError> {
        Ok(self.get(match_id).cloned())
    }

    async fn find_upcoming_by_league(&self, league: League, limit: usize) -> Result<Vec<Match>, MatchError> {
        Ok(self.upcoming_by_league_at(league, limit, Utc::now()))
    }

    async fn find_accepting_predictions(&self, limit: usize) -> Result<Vec<Match>, MatchError> {
        Ok(self.accepting_predictions(limit))
    }

    async fn get_supported_leagues(&self) -> Result<Vec<League>, MatchError> {
        Ok(League::ALL.to_vec())
    }

    async fn get_multiple_matches(&self, match_ids: &[String]) -> Result<Vec<Match>, MatchError> {
        Ok(match_ids
            .iter()
            .filter_map(|id| self.get(id).cloned())
            .collect())
    }
}
