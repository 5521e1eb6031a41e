// src/models/team.rs
use serde::Serialize;

use crate::matches::error::EntityError;

pub const MAX_SHORT_NAME_LENGTH: usize = 5;

/// Raw attributes used to build a `Team`
#[derive(Debug, Clone)]
pub struct TeamProps {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub logo: String,
    pub league: String,
    pub country: String,
}

/// A club taking part in one of the supported leagues. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    id: String,
    name: String,
    short_name: String,
    logo: String,
    league: String,
    country: String,
}

impl Team {
    pub fn new(props: TeamProps) -> Result<Self, EntityError> {
        validate_team(&props)?;

        Ok(Self {
            id: props.id,
            name: props.name,
            short_name: props.short_name,
            logo: props.logo,
            league: props.league,
            country: props.country,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    pub fn league(&self) -> &str {
        &self.league
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn validate_team(props: &TeamProps) -> Result<(), EntityError> {
    if props.id.is_empty() {
        return Err(EntityError::MissingTeamId);
    }

    if is_blank(&props.name) {
        return Err(EntityError::MissingTeamName);
    }

    if is_blank(&props.short_name) {
        return Err(EntityError::MissingShortName);
    }

    // Counted in characters, not bytes
    if props.short_name.chars().count() > MAX_SHORT_NAME_LENGTH {
        return Err(EntityError::ShortNameTooLong);
    }

    if is_blank(&props.league) {
        return Err(EntityError::MissingTeamLeague);
    }

    if is_blank(&props.country) {
        return Err(EntityError::MissingTeamCountry);
    }

    Ok(())
}
