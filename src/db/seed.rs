use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matches::error::EntityError;
use crate::models::matches::{League, Match, MatchProps, MatchStatus};
use crate::models::team::{Team, TeamProps};

const KICKOFF_SPACING_HOURS: i64 = 12;
const DEADLINE_BEFORE_KICKOFF_HOURS: i64 = 1;
pub const MAX_MATCH_COUNT: usize = 1_000;

/// Parameters for the generated dataset
#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub seed: u64,
    pub match_count: usize,
    pub season: String,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            seed: 20_240_801,
            match_count: 20,
            season: "2024-25".to_string(),
        }
    }
}

fn team(id: &str, name: &str, short_name: &str, logo: &str, league: League, country: &str) -> Result<Team, EntityError> {
    Team::new(TeamProps {
        id: id.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        logo: format!("/logos/{}.png", logo),
        league: league.as_str().to_string(),
        country: country.to_string(),
    })
}

/// Clubs the generated matches are drawn from. Serie A and Ligue 1 have none.
pub fn mock_teams() -> Result<Vec<Team>, EntityError> {
    Ok(vec![
        team("arsenal", "Arsenal", "ARS", "arsenal", League::PremierLeague, "England")?,
        team("chelsea", "Chelsea", "CHE", "chelsea", League::PremierLeague, "England")?,
        team("liverpool", "Liverpool", "LIV", "liverpool", League::PremierLeague, "England")?,
        team("manchester-city", "Manchester City", "MCI", "man-city", League::PremierLeague, "England")?,
        team("real-madrid", "Real Madrid", "RMA", "real-madrid", League::LaLiga, "Spain")?,
        team("barcelona", "FC Barcelona", "BAR", "barcelona", League::LaLiga, "Spain")?,
        team("bayern-munich", "Bayern Munich", "BAY", "bayern", League::Bundesliga, "Germany")?,
        team("borussia-dortmund", "Borussia Dortmund", "BVB", "dortmund", League::Bundesliga, "Germany")?,
    ])
}

/// First three quarters scheduled, then live up to 90%, the rest finished
fn status_for(index: usize, count: usize) -> MatchStatus {
    if index * 4 < count * 3 {
        MatchStatus::Scheduled
    } else if index * 10 < count * 9 {
        MatchStatus::Live
    } else {
        MatchStatus::Finished
    }
}

/// Build `options.match_count` matches spread over the days after `now`.
///
/// Match `i` kicks off `12 * i` hours plus a random part of the next 12 hours
/// after `now`, with the prediction deadline one hour before kickoff. The same
/// seed and `now` always give the same dataset. At most `MAX_MATCH_COUNT`
/// matches can be generated.
pub fn generate_mock_matches(now: DateTime<Utc>, options: &SeedOptions) -> Result<Vec<Match>, EntityError> {
    if options.match_count > MAX_MATCH_COUNT {
        return Err(EntityError::TooManyMatches {
            requested: options.match_count,
            max: MAX_MATCH_COUNT,
        });
    }

    let teams = mock_teams()?;
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut matches = Vec::with_capacity(options.match_count);

    for i in 0..options.match_count {
        let offset_ms = (i as f64 * KICKOFF_SPACING_HOURS as f64 + rng.gen::<f64>() * KICKOFF_SPACING_HOURS as f64)
            * 60.0
            * 60.0
            * 1000.0;
        let kickoff_time = now
            .checked_add_signed(Duration::milliseconds(offset_ms as i64))
            .ok_or(EntityError::KickoffOutOfRange(i + 1))?;
        let prediction_deadline = kickoff_time
            .checked_sub_signed(Duration::hours(DEADLINE_BEFORE_KICKOFF_HOURS))
            .ok_or(EntityError::KickoffOutOfRange(i + 1))?;

        let home_team = &teams[rng.gen_range(0..teams.len())];
        let mut away_team = &teams[rng.gen_range(0..teams.len())];
        while away_team.id() == home_team.id() {
            away_team = &teams[rng.gen_range(0..teams.len())];
        }

        let league = home_team
            .league()
            .parse::<League>()
            .map_err(|_| EntityError::UnsupportedLeague(home_team.league().to_string()))?;

        matches.push(Match::new(
            MatchProps {
                id: format!("match-{}", i + 1),
                home_team: home_team.clone(),
                away_team: away_team.clone(),
                kickoff_time,
                status: status_for(i, options.match_count),
                venue: Some(format!("Stadium {}", i + 1)),
                league,
                season: options.season.clone(),
                prediction_deadline,
            },
            now,
        )?);
    }

    Ok(matches)
}
