//! Filtering, ordering and paging over an in-memory match collection.
//!
//! Everything here is pure: inputs are borrowed, results are fresh vectors.

use crate::models::matches::{League, Match, MatchListResponse, PredictionStatus};

/// Exact-equality filters; `None` places no constraint on the field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub league: Option<League>,
    pub status: Option<PredictionStatus>,
}

impl MatchFilter {
    pub fn accepts(&self, m: &Match) -> bool {
        self.league.map_or(true, |league| m.league() == league)
            && self.status.map_or(true, |status| m.prediction_status() == status)
    }
}

/// Matches passing `filter`, ordered by kickoff time. `sort_by_key` is stable,
/// so equal kickoff times keep collection order.
pub fn filter_and_sort(matches: &[Match], filter: &MatchFilter) -> Vec<Match> {
    let mut selected: Vec<Match> = matches
        .iter()
        .filter(|m| filter.accepts(m))
        .cloned()
        .collect();

    selected.sort_by_key(|m| m.kickoff_time());
    selected
}

/// Cut the window `[offset, offset + limit)` out of an already sorted list.
/// An offset past the end gives an empty page, never an error.
pub fn paginate(sorted: Vec<Match>, offset: usize, limit: usize) -> MatchListResponse {
    let total = sorted.len();
    let end = offset.saturating_add(limit);

    let matches: Vec<Match> = sorted.into_iter().skip(offset).take(limit).collect();

    MatchListResponse {
        matches,
        total,
        has_more: end < total,
    }
}

/// First `limit` matches passing `predicate`, ordered by kickoff time
pub fn take_sorted<F>(matches: &[Match], limit: usize, predicate: F) -> Vec<Match>
where
    F: Fn(&Match) -> bool,
{
    let mut selected: Vec<Match> = matches.iter().filter(|m| predicate(m)).cloned().collect();
    selected.sort_by_key(|m| m.kickoff_time());
    selected.truncate(limit);
    selected
}
