use chrono::{DateTime, Utc};

use crate::models::matches::{MatchStatus, PredictionStatus};

/// Decide whether predictions are open for a match at `current_time`.
///
/// A finished match is always `Finished`; otherwise predictions close at the
/// deadline (inclusive) and stay open before it. The kickoff time is part of
/// the signature but does not affect the result.
pub fn calculate_prediction_status(
    _kickoff_time: DateTime<Utc>,
    prediction_deadline: DateTime<Utc>,
    match_status: MatchStatus,
    current_time: DateTime<Utc>,
) -> PredictionStatus {
    if match_status == MatchStatus::Finished {
        return PredictionStatus::Finished;
    }

    if current_time >= prediction_deadline {
        return PredictionStatus::Closed;
    }

    PredictionStatus::Accepting
}

/// Same as `calculate_prediction_status`, evaluated against the wall clock.
/// Not deterministic; pass an explicit time where that matters.
pub fn calculate_prediction_status_now(
    kickoff_time: DateTime<Utc>,
    prediction_deadline: DateTime<Utc>,
    match_status: MatchStatus,
) -> PredictionStatus {
    calculate_prediction_status(kickoff_time, prediction_deadline, match_status, Utc::now())
}

pub fn is_upcoming(kickoff_time: DateTime<Utc>, current_time: DateTime<Utc>) -> bool {
    kickoff_time > current_time
}

pub fn is_prediction_open(prediction_status: PredictionStatus) -> bool {
    prediction_status == PredictionStatus::Accepting
}
