use crate::matches::error::MatchError;
use crate::models::matches::MatchQuery;

pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_PAGE_LIMIT: usize = 20;
pub const DEFAULT_VIEW_LIMIT: usize = 10;

/// Centralized validation for match queries, applied before the store is touched
pub struct MatchValidator;

impl MatchValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a listing query
    pub fn validate_query(&self, query: &MatchQuery) -> Result<(), MatchError> {
        self.validate_pagination(query.limit, query.offset)?;
        Ok(())
    }

    /// Validate pagination parameters and resolve the effective window
    pub fn validate_pagination(&self, limit: Option<i64>, offset: Option<i64>) -> Result<(usize, usize), MatchError> {
        let limit = match limit {
            Some(limit) => self.validate_limit(limit)?,
            None => DEFAULT_PAGE_LIMIT,
        };

        let offset = match offset {
            Some(offset) => self.validate_offset(offset)?,
            None => 0,
        };

        Ok((limit, offset))
    }

    /// Limit for the upcoming / accepting views, which default to 10
    pub fn validate_view_limit(&self, limit: Option<i64>) -> Result<usize, MatchError> {
        match limit {
            Some(limit) => self.validate_limit(limit),
            None => Ok(DEFAULT_VIEW_LIMIT),
        }
    }

    pub fn validate_limit(&self, limit: i64) -> Result<usize, MatchError> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            return Err(MatchError::validation(format!(
                "Limit must be between {} and {}",
                MIN_LIMIT, MAX_LIMIT
            )));
        }

        Ok(limit as usize)
    }

    pub fn validate_offset(&self, offset: i64) -> Result<usize, MatchError> {
        if offset < 0 {
            return Err(MatchError::validation("Offset must be non-negative"));
        }

        usize::try_from(offset).map_err(|_| MatchError::validation("Offset too large"))
    }
}

impl Default for MatchValidator {
    fn default() -> Self {
        Self::new()
    }
}
