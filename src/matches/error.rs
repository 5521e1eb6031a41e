use std::time::Duration;

use actix_web::http::StatusCode;
use thiserror::Error;

/// Raised when a team or match record violates its construction invariants
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntityError {
    #[error("Team ID is required")]
    MissingTeamId,

    #[error("Team name is required")]
    MissingTeamName,

    #[error("Team short name is required")]
    MissingShortName,

    #[error("Team short name must be 5 characters or less")]
    ShortNameTooLong,

    #[error("Team league is required")]
    MissingTeamLeague,

    #[error("Team country is required")]
    MissingTeamCountry,

    #[error("Match ID is required")]
    MissingMatchId,

    #[error("Home and away teams cannot be the same")]
    SameTeams,

    #[error("Prediction deadline must be before kickoff time")]
    DeadlineNotBeforeKickoff,

    #[error("Unsupported league: {0}")]
    UnsupportedLeague(String),

    #[error("Mock match count {requested} exceeds the maximum of {max}")]
    TooManyMatches { requested: usize, max: usize },

    #[error("Kickoff time for match {0} is out of range")]
    KickoffOutOfRange(usize),
}

/// Failures a match query can signal. A missing match is not an error,
/// lookups return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{0}")]
    Validation(String),

    #[error("Match store did not respond within {0:?}")]
    StoreTimeout(Duration),

    #[error("{0}")]
    Internal(String),
}

impl MatchError {
    pub fn validation(msg: impl Into<String>) -> Self {
        MatchError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        MatchError::Internal(msg.into())
    }

    /// Code placed in the `error.code` field of the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::Validation(_) => "VALIDATION_ERROR",
            MatchError::StoreTimeout(_) => "STORE_TIMEOUT",
            MatchError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            MatchError::Validation(_) => StatusCode::BAD_REQUEST,
            MatchError::StoreTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            MatchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
