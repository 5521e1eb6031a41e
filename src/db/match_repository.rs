use async_trait::async_trait;

use crate::matches::error::MatchError;
use crate::models::matches::{League, Match, MatchListResponse, MatchQuery};

/// Read access to the match collection.
///
/// The in-memory store never fails on a well-formed query, but a networked
/// store would, so every read returns `Result`. "No matching records" is an
/// empty result, not an error.
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Filter, sort by kickoff time and paginate
    async fn find_matches(&self, query: &MatchQuery) -> Result<MatchListResponse, MatchError>;

    /// Exact id lookup, `None` when no such match exists
    async fn find_by_id(&self, match_id: &str) -> Result<Option<Match>, MatchError>;

    /// Matches of `league` kicking off after now, earliest first
    async fn find_upcoming_by_league(&self, league: League, limit: usize) -> Result<Vec<Match>, MatchError>;

    /// Matches still accepting predictions, earliest first
    async fn find_accepting_predictions(&self, limit: usize) -> Result<Vec<Match>, MatchError>;

    /// Leagues this store can serve
    async fn get_supported_leagues(&self) -> Result<Vec<League>, MatchError>;

    /// Batch lookup in request order; unknown ids are skipped
    async fn get_multiple_matches(&self, match_ids: &[String]) -> Result<Vec<Match>, MatchError>;
}
