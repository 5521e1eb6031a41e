//! Lenient parsing of match listing query strings.
//!
//! Anything that does not parse means "not specified": unknown enum names,
//! the UI's `ALL` sentinel, empty values and non-numeric paging values all
//! become `None`. Paging values are read from their leading integer, so
//! `10abc` is 10 and `1.5` is 1. Out-of-range integers are passed through
//! (saturated at the `i64` bounds) so that validation can reject them.

use serde::Deserialize;

use crate::models::matches::{League, MatchQuery, PredictionStatus};

/// Query string as received, before any interpretation
#[derive(Debug, Default, Deserialize)]
pub struct RawMatchQuery {
    pub league: Option<String>,
    pub status: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl RawMatchQuery {
    pub fn into_query(self) -> MatchQuery {
        MatchQuery {
            league: parse_league(self.league.as_deref()),
            status: parse_prediction_status(self.status.as_deref()),
            limit: parse_number(self.limit.as_deref()),
            offset: parse_number(self.offset.as_deref()),
        }
    }
}

pub fn parse_league(value: Option<&str>) -> Option<League> {
    value?.parse().ok()
}

pub fn parse_prediction_status(value: Option<&str>) -> Option<PredictionStatus> {
    value?.parse().ok()
}

pub fn parse_number(value: Option<&str>) -> Option<i64> {
    let value = value?.trim_start();
    let (negative, digits) = match value.as_bytes().first()? {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let parsed = digits[..end].bytes().try_fold(0i64, |acc, digit| {
        let digit = i64::from(digit - b'0');
        if negative {
            acc.checked_mul(10)?.checked_sub(digit)
        } else {
            acc.checked_mul(10)?.checked_add(digit)
        }
    });

    Some(parsed.unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}
