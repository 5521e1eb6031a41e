use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use provexi_backend::db::{InMemoryMatchRepository, MatchRepository};
use provexi_backend::matches::error::MatchError;
use provexi_backend::models::matches::{League, Match, MatchListResponse, MatchProps, MatchQuery, MatchStatus};
use provexi_backend::models::team::{Team, TeamProps};

pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 17, 12, 0, 0).unwrap()
}

pub fn test_team(id: &str, league: League) -> Team {
    Team::new(TeamProps {
        id: id.to_string(),
        name: format!("{} FC", id),
        short_name: id.chars().take(3).collect::<String>().to_uppercase(),
        logo: format!("/logos/{}.png", id),
        league: league.as_str().to_string(),
        country: "Testland".to_string(),
    })
    .expect("Failed to build test team")
}

/// Build a match kicking off `kickoff` with the deadline one hour earlier,
/// deriving its prediction status at `now`
pub fn test_match(
    id: &str,
    league: League,
    kickoff: DateTime<Utc>,
    status: MatchStatus,
    now: DateTime<Utc>,
) -> Match {
    Match::new(
        MatchProps {
            id: id.to_string(),
            home_team: test_team(&format!("{}-home", id), league),
            away_team: test_team(&format!("{}-away", id), league),
            kickoff_time: kickoff,
            status,
            venue: Some(format!("{} Arena", id)),
            league,
            season: "2024-25".to_string(),
            prediction_deadline: kickoff - chrono::Duration::hours(1),
        },
        now,
    )
    .expect("Failed to build test match")
}

pub fn ids(matches: &[Match]) -> Vec<String> {
    matches.iter().map(|m| m.id().to_string()).collect()
}

/// Store that counts how often it is read
pub struct CountingRepository {
    inner: InMemoryMatchRepository,
    pub calls: AtomicUsize,
}

impl CountingRepository {
    pub fn new(matches: Vec<Match>) -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryMatchRepository::new(matches),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MatchRepository for CountingRepository {
    async fn find_matches(&self, query: &MatchQuery) -> Result<MatchListResponse, MatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_matches(query).await
    }

    async fn find_by_id(&self, match_id: &str) -> Result<Option<Match>, MatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(match_id).await
    }

    async fn find_upcoming_by_league(&self, league: League, limit: usize) -> Result<Vec<Match>, MatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_upcoming_by_league(league, limit).await
    }

    async fn find_accepting_predictions(&self, limit: usize) -> Result<Vec<Match>, MatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_accepting_predictions(limit).await
    }

    async fn get_supported_leagues(&self) -> Result<Vec<League>, MatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_supported_leagues().await
    }

    async fn get_multiple_matches(&self, match_ids: &[String]) -> Result<Vec<Match>, MatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_multiple_matches(match_ids).await
    }
}

/// Store that sleeps before every read, or fails outright
pub struct UnreliableRepository {
    pub delay: Duration,
    pub fail: bool,
}

impl UnreliableRepository {
    async fn respond<T>(&self, value: T) -> Result<T, MatchError> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(MatchError::internal("Connection refused"));
        }
        Ok(value)
    }
}

#[async_trait]
impl MatchRepository for UnreliableRepository {
    async fn find_matches(&self, _query: &MatchQuery) -> Result<MatchListResponse, MatchError> {
        self.respond(MatchListResponse { matches: vec![], total: 0, has_more: false }).await
    }

    async fn find_by_id(&self, _match_id: &str) -> Result<Option<Match>, MatchError> {
        self.respond(None).await
    }

    async fn find_upcoming_by_league(&self, _league: League, _limit: usize) -> Result<Vec<Match>, MatchError> {
        self.respond(vec![]).await
    }

    async fn find_accepting_predictions(&self, _limit: usize) -> Result<Vec<Match>, MatchError> {
        self.respond(vec![]).await
    }

    async fn get_supported_leagues(&self) -> Result<Vec<League>, MatchError> {
        self.respond(League::ALL.to_vec()).await
    }

    async fn get_multiple_matches(&self, _match_ids: &[String]) -> Result<Vec<Match>, MatchError> {
        self.respond(vec![]).await
    }
}
