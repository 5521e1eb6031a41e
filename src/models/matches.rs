// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::matches::error::EntityError;
use crate::matches::prediction_status::calculate_prediction_status;
use crate::models::team::Team;

/// Real-world lifecycle stage of a match
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
    Postponed,
    Cancelled,
}

/// Whether users may still submit a prediction for a match
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionStatus {
    Accepting,
    Closed,
    Finished,
}

impl PredictionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionStatus::Accepting => "ACCEPTING",
            PredictionStatus::Closed => "CLOSED",
            PredictionStatus::Finished => "FINISHED",
        }
    }
}

impl FromStr for PredictionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCEPTING" => Ok(PredictionStatus::Accepting),
            "CLOSED" => Ok(PredictionStatus::Closed),
            "FINISHED" => Ok(PredictionStatus::Finished),
            other => Err(format!("{} is not a prediction status", other)),
        }
    }
}

impl fmt::Display for PredictionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum League {
    PremierLeague,
    LaLiga,
    Bundesliga,
    SerieA,
    #[serde(rename = "LIGUE_1")]
    Ligue1,
}

impl League {
    /// Every league the system recognizes, in display order
    pub const ALL: [League; 5] = [
        League::PremierLeague,
        League::LaLiga,
        League::Bundesliga,
        League::SerieA,
        League::Ligue1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            League::PremierLeague => "PREMIER_LEAGUE",
            League::LaLiga => "LA_LIGA",
            League::Bundesliga => "BUNDESLIGA",
            League::SerieA => "SERIE_A",
            League::Ligue1 => "LIGUE_1",
        }
    }
}

impl FromStr for League {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        League::ALL
            .iter()
            .find(|league| league.as_str() == s)
            .copied()
            .ok_or_else(|| format!("{} is not a supported league", s))
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw attributes used to build a `Match`. The prediction status is not part
/// of it, `Match::new` derives that itself.
#[derive(Debug, Clone)]
pub struct MatchProps {
    pub id: String,
    pub home_team: Team,
    pub away_team: Team,
    pub kickoff_time: DateTime<Utc>,
    pub status: MatchStatus,
    pub venue: Option<String>,
    pub league: League,
    pub season: String,
    pub prediction_deadline: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    id: String,
    home_team: Team,
    away_team: Team,
    kickoff_time: DateTime<Utc>,
    status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    venue: Option<String>,
    league: League,
    season: String,
    prediction_status: PredictionStatus,
    prediction_deadline: DateTime<Utc>,
}

impl Match {
    /// Validate the props and derive the prediction status as of `now`
    pub fn new(props: MatchProps, now: DateTime<Utc>) -> Result<Self, EntityError> {
        validate_match(&props)?;

        let prediction_status = calculate_prediction_status(
            props.kickoff_time,
            props.prediction_deadline,
            props.status,
            now,
        );

        Ok(Self {
            id: props.id,
            home_team: props.home_team,
            away_team: props.away_team,
            kickoff_time: props.kickoff_time,
            status: props.status,
            venue: props.venue,
            league: props.league,
            season: props.season,
            prediction_status,
            prediction_deadline: props.prediction_deadline,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn kickoff_time(&self) -> DateTime<Utc> {
        self.kickoff_time
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref()
    }

    pub fn league(&self) -> League {
        self.league
    }

    pub fn season(&self) -> &str {
        &self.season
    }

    /// Status derived when the record was built; it does not follow the clock
    pub fn prediction_status(&self) -> PredictionStatus {
        self.prediction_status
    }

    pub fn prediction_deadline(&self) -> DateTime<Utc> {
        self.prediction_deadline
    }

    /// Re-run the derivation for a later instant without touching the record
    pub fn recalculate_prediction_status(&self, now: DateTime<Utc>) -> PredictionStatus {
        calculate_prediction_status(self.kickoff_time, self.prediction_deadline, self.status, now)
    }
}

fn validate_match(props: &MatchProps) -> Result<(), EntityError> {
    if props.id.is_empty() {
        return Err(EntityError::MissingMatchId);
    }

    if props.home_team.id() == props.away_team.id() {
        return Err(EntityError::SameTeams);
    }

    if props.prediction_deadline >= props.kickoff_time {
        return Err(EntityError::DeadlineNotBeforeKickoff);
    }

    Ok(())
}

/// Filters and paging window for a match listing. `limit`/`offset` stay signed
/// so out-of-range values reach validation instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchQuery {
    pub league: Option<League>,
    pub status: Option<PredictionStatus>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchListResponse {
    pub matches: Vec<Match>,
    pub total: usize,
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
pub struct MatchDetailResponse {
    #[serde(rename = "match")]
    pub match_: Match,
}

#[derive(Debug, Serialize)]
pub struct SupportedLeaguesResponse {
    pub leagues: Vec<League>,
}
