mod utils;

use chrono::NaiveDate;
use rstest::rstest;
use standings_engine::matches::Side;
use standings_engine::{
    compute_fixtures, compute_standings, ingest, FixtureStatus, StandingsEngine, TeamStanding,
};
use utils::{team, FixtureBuilder, MatchBuilder};

const T1: Option<Side> = Some(Side::Team1);
const T2: Option<Side> = Some(Side::Team2);

fn row<'a>(standings: &'a [TeamStanding], name: &str) -> &'a TeamStanding {
    standings
        .iter()
        .find(|s| s.team_name == name)
        .expect("team should have a standings row")
}

#[rstest]
#[case("Game Breaker")]
#[case("Dream Breaker")]
#[case("dreamBreaker")]
fn majority_after_six_locks_the_fixture_and_drops_the_tiebreak(#[case] tiebreak_label: &str) {
    let matches = FixtureBuilder::new("fx-1", "Aces", "Blaze")
        .regular(&[T1, T1, T2, T1, T2, T1])
        .tiebreak(T2)
        .tiebreak_label(tiebreak_label)
        .build();

    let fixtures = compute_fixtures(&matches);
    assert_eq!(fixtures.len(), 1);
    let fixture = &fixtures[0];
    assert_eq!(fixture.status, FixtureStatus::Completed);
    assert!(fixture.effectively_completed);
    assert_eq!(fixture.total_matches(), 6);
    assert_eq!(fixture.excluded_matches.len(), 1);
    assert!(fixture.excluded_matches[0].is_tiebreak());

    let standings = compute_standings(&matches, &[team("Aces"), team("Blaze")]);
    let aces = row(&standings, "Aces");
    assert_eq!(aces.position, 1);
    assert_eq!(aces.battle_wins, 1);
    assert_eq!(aces.points, 3);
    // four 2-1 wins and two 1-2 losses; the tiebreak's games are not counted
    assert_eq!((aces.game_wins, aces.game_losses), (10, 8));
    assert_eq!((aces.points_won, aces.points_lost), (350, 340));

    let blaze = row(&standings, "Blaze");
    assert_eq!(blaze.battle_losses, 1);
    assert_eq!(blaze.points, 0);
    assert_eq!((blaze.game_wins, blaze.game_losses), (8, 10));
    assert_eq!(blaze.games_difference, -2);
    assert_eq!(blaze.points_difference, -10);
}

#[test]
fn split_fixture_is_settled_by_the_tiebreak_without_counting_its_games() {
    let matches = FixtureBuilder::new("fx-1", "Aces", "Blaze")
        .regular(&[T1, T2, T1, T2, T1, T2])
        .tiebreak(T2)
        .build();

    let fixtures = compute_fixtures(&matches);
    assert_eq!(fixtures[0].status, FixtureStatus::Completed);
    assert!(!fixtures[0].effectively_completed);
    assert_eq!(fixtures[0].total_matches(), 7);

    let standings = compute_standings(&matches, &[team("Aces"), team("Blaze")]);
    let blaze = row(&standings, "Blaze");
    assert_eq!(blaze.position, 1);
    assert_eq!(blaze.battle_wins, 1);
    for name in ["Aces", "Blaze"] {
        let standing = row(&standings, name);
        assert_eq!((standing.game_wins, standing.game_losses), (9, 9));
        assert_eq!((standing.points_won, standing.points_lost), (345, 345));
    }
}

#[test]
fn three_straight_wins_of_six_award_the_battle_early() {
    let matches = FixtureBuilder::new("fx-1", "Aces", "Blaze")
        .regular(&[T1, T1, T1, None, None, None])
        .without_tiebreak()
        .build();

    let fixtures = compute_fixtures(&matches);
    assert_eq!(fixtures[0].status, FixtureStatus::InProgress);

    let standings = compute_standings(&matches, &[team("Aces"), team("Blaze")]);
    assert_eq!(row(&standings, "Aces").battle_wins, 1);
    assert_eq!(row(&standings, "Aces").points, 3);
    assert_eq!(row(&standings, "Blaze").battle_losses, 1);
}

#[test]
fn three_wins_with_the_tiebreak_still_pending_award_nothing_yet() {
    let matches = FixtureBuilder::new("fx-1", "Aces", "Blaze")
        .regular(&[T1, T1, T1, None, None, None])
        .build();

    let standings = compute_standings(&matches, &[team("Aces"), team("Blaze")]);
    let aces = row(&standings, "Aces");
    assert_eq!(aces.battle_wins, 0);
    assert_eq!(aces.points, 0);
    // partial totals are live even before a decision
    assert_eq!(aces.game_wins, 6);
}

#[test]
fn team_without_fixtures_is_listed_last_with_zero_stats() {
    // Aces and Blaze take one fixture each and end level on every key
    let mut matches = FixtureBuilder::new("fx-1", "Aces", "Blaze")
        .regular(&[T1, T1, T1, T1, T2, T2])
        .build();
    matches.extend(
        FixtureBuilder::new("fx-2", "Blaze", "Aces")
            .date("2024-03-16")
            .regular(&[T1, T1, T1, T1, T2, T2])
            .build(),
    );

    let standings = compute_standings(&matches, &[team("Comets"), team("Aces"), team("Blaze")]);
    assert_eq!(standings[0].team_name, "Aces");
    assert_eq!(standings[1].team_name, "Blaze");
    assert_eq!(standings.len(), 3);

    let comets = &standings[2];
    assert_eq!(comets.team_name, "Comets");
    assert_eq!(comets.position, 3);
    assert_eq!(
        *comets,
        TeamStanding {
            team_id: "comets".into(),
            team_name: "Comets".into(),
            position: 3,
            ..TeamStanding::default()
        }
    );
}

#[test]
fn fully_tied_teams_keep_the_input_team_order() {
    let mut matches = FixtureBuilder::new("fx-1", "Aces", "Blaze")
        .regular(&[T1, T1, T1, T1, T2, T2])
        .build();
    matches.extend(
        FixtureBuilder::new("fx-2", "Comets", "Drift")
            .regular(&[T1, T1, T1, T1, T2, T2])
            .build(),
    );

    let teams = [team("Drift"), team("Comets"), team("Blaze"), team("Aces")];
    let standings = compute_standings(&matches, &teams);
    let order: Vec<_> = standings.iter().map(|s| s.team_name.as_str()).collect();
    assert_eq!(order, vec!["Comets", "Aces", "Drift", "Blaze"]);
}

#[rstest]
#[case("Final")]
#[case("Qualifier 1")]
#[case("playoff")]
fn playoff_fixtures_never_touch_the_table(#[case] fixture_type: &str) {
    let matches = FixtureBuilder::new("po-1", "Aces", "Blaze")
        .regular(&[T1, T1, T1, T1, T1, T1])
        .fixture_type(fixture_type)
        .build();

    let fixtures = compute_fixtures(&matches);
    assert!(fixtures[0].is_playoff);
    assert_eq!(fixtures[0].status, FixtureStatus::Completed);

    let standings = compute_standings(&matches, &[team("Aces"), team("Blaze")]);
    assert!(standings
        .iter()
        .all(|s| s.points == 0 && s.game_wins == 0 && s.battle_losses == 0));
}

#[test]
fn legacy_composite_keys_group_into_one_fixture() {
    let key = "Net_Ninjas_vs_Blaze_2024-03-09_Court_2";
    let records = (1..=4)
        .map(|n| {
            MatchBuilder::new(&format!("m{n}"))
                .between("Net_Ninjas", "Blaze")
                .group(key)
                .sequence(n)
                .won_by(Side::Team1)
                .record()
        })
        .collect::<Vec<_>>();
    let matches = ingest(records);

    let fixtures = compute_fixtures(&matches);
    assert_eq!(fixtures.len(), 1);
    assert_eq!(fixtures[0].key, key);
    assert_eq!(fixtures[0].total_matches(), 4);

    let standings = compute_standings(&matches, &[team("Net_Ninjas"), team("Blaze")]);
    assert_eq!(standings[0].team_name, "Net_Ninjas");
    assert_eq!(standings[0].battle_wins, 1);
}

#[test]
fn malformed_legacy_key_leaves_the_match_on_its_own() {
    let matches = ingest(vec![
        MatchBuilder::new("m1")
            .between("Aces", "Blaze")
            .group("Aces_vs_Blaze_2024-03-09_C1")
            .record(),
        MatchBuilder::new("m2")
            .between("Aces", "Blaze")
            .group("Aces_vs_Blaze_sometime")
            .record(),
    ]);

    let fixtures = compute_fixtures(&matches);
    assert_eq!(fixtures.len(), 2);
    assert!(fixtures.iter().any(|f| f.key == "m2"));
}

#[test]
fn recomputing_the_same_snapshot_is_identical() {
    let mut matches = FixtureBuilder::new("fx-1", "Aces", "Blaze")
        .regular(&[T1, T2, T1, T2, T1, None])
        .build();
    matches.extend(
        FixtureBuilder::new("fx-2", "Comets", "Aces")
            .date("2024-03-16")
            .regular(&[T2, T2, T2, T2, None, None])
            .build(),
    );
    let teams = [team("Aces"), team("Blaze"), team("Comets")];

    assert_eq!(compute_fixtures(&matches), compute_fixtures(&matches));
    assert_eq!(
        compute_standings(&matches, &teams),
        compute_standings(&matches, &teams)
    );

    let mut reversed = matches.clone();
    reversed.reverse();
    assert_eq!(compute_fixtures(&matches), compute_fixtures(&reversed));
    assert_eq!(
        compute_standings(&matches, &teams),
        compute_standings(&reversed, &teams)
    );
}

#[rstest]
#[case(16, 50, false)]
#[case(17, 4, false)]
#[case(17, 5, true)]
#[case(18, 30, true)]
fn player_names_appear_fifty_five_minutes_before_start(
    #[case] hour: u32,
    #[case] minute: u32,
    #[case] expected: bool,
) {
    let m = MatchBuilder::new("m1").between("Aces", "Blaze").build();
    let now = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap();
    assert_eq!(
        StandingsEngine::default().should_show_player_names_at(&m, None, now),
        expected
    );
}

#[test]
fn player_names_show_once_play_starts_and_fall_back_to_the_fixture_time() {
    let engine = StandingsEngine::default();
    let early = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    let underway = MatchBuilder::new("m1").status("in-progress").build();
    assert!(engine.should_show_player_names_at(&underway, None, early));

    let matches = ingest(vec![
        MatchBuilder::new("m1").between("Aces", "Blaze").group("fx").record(),
        MatchBuilder::new("m2")
            .between("Aces", "Blaze")
            .group("fx")
            .time(None)
            .record(),
    ]);
    let fixtures = compute_fixtures(&matches);
    let untimed = matches.iter().find(|m| m.id == "m2").unwrap();
    assert!(!engine.should_show_player_names_at(untimed, Some(&fixtures[0]), early));
    assert!(engine.should_show_player_names_at(untimed, None, early));
}
