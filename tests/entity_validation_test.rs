use chrono::Duration;

use provexi_backend::matches::error::EntityError;
use provexi_backend::models::matches::{League, Match, MatchProps, MatchStatus, PredictionStatus};
use provexi_backend::models::team::{Team, TeamProps};

mod common;
use common::match_helpers::{reference_time, test_team};

fn team_props() -> TeamProps {
    TeamProps {
        id: "arsenal".to_string(),
        name: "Arsenal".to_string(),
        short_name: "ARS".to_string(),
        logo: "/logos/arsenal.png".to_string(),
        league: "PREMIER_LEAGUE".to_string(),
        country: "England".to_string(),
    }
}

fn match_props() -> MatchProps {
    let kickoff = reference_time() + Duration::hours(24);
    MatchProps {
        id: "match-1".to_string(),
        home_team: test_team("home", League::PremierLeague),
        away_team: test_team("away", League::PremierLeague),
        kickoff_time: kickoff,
        status: MatchStatus::Scheduled,
        venue: Some("Stadium 1".to_string()),
        league: League::PremierLeague,
        season: "2024-25".to_string(),
        prediction_deadline: kickoff - Duration::hours(1),
    }
}

#[test]
fn test_valid_team_is_built() {
    let team = Team::new(team_props()).expect("Valid team should build");
    assert_eq!(team.id(), "arsenal");
    assert_eq!(team.short_name(), "ARS");
    assert_eq!(team.league(), "PREMIER_LEAGUE");
}

#[test]
fn test_team_requires_text_fields() {
    let blank = "   ".to_string();

    let mut props = team_props();
    props.id = String::new();
    assert_eq!(Team::new(props), Err(EntityError::MissingTeamId));

    let mut props = team_props();
    props.name = blank.clone();
    assert_eq!(Team::new(props), Err(EntityError::MissingTeamName));

    let mut props = team_props();
    props.short_name = blank.clone();
    assert_eq!(Team::new(props), Err(EntityError::MissingShortName));

    let mut props = team_props();
    props.league = blank.clone();
    assert_eq!(Team::new(props), Err(EntityError::MissingTeamLeague));

    let mut props = team_props();
    props.country = blank;
    assert_eq!(Team::new(props), Err(EntityError::MissingTeamCountry));
}

#[test]
fn test_team_short_name_length() {
    let mut props = team_props();
    props.short_name = "ARSNL".to_string();
    assert!(Team::new(props).is_ok());

    let mut props = team_props();
    props.short_name = "ARSENL".to_string();
    assert_eq!(Team::new(props), Err(EntityError::ShortNameTooLong));
}

#[test]
fn test_match_derives_prediction_status() {
    let built = Match::new(match_props(), reference_time()).expect("Valid match should build");
    assert_eq!(built.prediction_status(), PredictionStatus::Accepting);

    let deadline = built.prediction_deadline();
    assert_eq!(built.recalculate_prediction_status(deadline), PredictionStatus::Closed);
    // Recalculating does not touch the stored value
    assert_eq!(built.prediction_status(), PredictionStatus::Accepting);
}

#[test]
fn test_finished_match_is_finished() {
    let mut props = match_props();
    props.status = MatchStatus::Finished;

    let built = Match::new(props, reference_time()).unwrap();
    assert_eq!(built.prediction_status(), PredictionStatus::Finished);
}

#[test]
fn test_match_rejects_same_teams() {
    let mut props = match_props();
    props.away_team = props.home_team.clone();
    assert_eq!(Match::new(props, reference_time()), Err(EntityError::SameTeams));
}

#[test]
fn test_match_rejects_deadline_at_or_after_kickoff() {
    let mut props = match_props();
    props.prediction_deadline = props.kickoff_time;
    assert_eq!(Match::new(props, reference_time()), Err(EntityError::DeadlineNotBeforeKickoff));

    let mut props = match_props();
    props.prediction_deadline = props.kickoff_time + Duration::minutes(1);
    assert_eq!(Match::new(props, reference_time()), Err(EntityError::DeadlineNotBeforeKickoff));
}

#[test]
fn test_match_requires_id() {
    let mut props = match_props();
    props.id = String::new();
    assert_eq!(Match::new(props, reference_time()), Err(EntityError::MissingMatchId));
}

#[test]
fn test_match_wire_format() {
    let built = Match::new(match_props(), reference_time()).unwrap();
    let json = serde_json::to_value(&built).unwrap();

    assert_eq!(json["id"], "match-1");
    assert_eq!(json["league"], "PREMIER_LEAGUE");
    assert_eq!(json["status"], "SCHEDULED");
    assert_eq!(json["predictionStatus"], "ACCEPTING");
    assert_eq!(json["homeTeam"]["shortName"], "HOM");
    assert_eq!(json["kickoffTime"], "2024-08-18T12:00:00Z");
    assert_eq!(json["predictionDeadline"], "2024-08-18T11:00:00Z");
    assert_eq!(json["season"], "2024-25");
}

#[test]
fn test_venue_omitted_when_absent() {
    let mut props = match_props();
    props.venue = None;
    let json = serde_json::to_value(Match::new(props, reference_time()).unwrap()).unwrap();
    assert!(json.get("venue").is_none());
}
