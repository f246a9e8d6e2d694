use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::matches::{sort_matches, Match, TeamDirectory};

use super::decision::decide_fixture;
use super::legacy_key::LegacyFixtureKey;
use super::models::Fixture;

/// Matches sharing one grouping key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub key: String,
    pub matches: Vec<Match>,
}

/// The key a match groups under: its explicit group id (canonicalised when it
/// is a legacy composite key) or its own id.
pub fn group_key(m: &Match, directory: &TeamDirectory) -> String {
    let Some(group_id) = m.fixture_group_id.as_deref() else {
        return m.id.clone();
    };
    if !LegacyFixtureKey::looks_legacy(group_id) {
        return group_id.to_string();
    }
    match LegacyFixtureKey::parse(group_id, Some(directory)) {
        Ok(key) => key.canonical(),
        Err(err) => {
            warn!(match_id = %m.id, error = %err, "Unparseable fixture key, match stands alone");
            m.id.clone()
        }
    }
}

/// Partitions a snapshot into groups. The snapshot is put in display order
/// first, so input order never changes the result; a match whose sides differ
/// from its group's first match is split off on its own.
pub fn group_matches(matches: &[Match], directory: &TeamDirectory) -> Vec<MatchGroup> {
    let mut ordered = matches.to_vec();
    sort_matches(&mut ordered);

    let mut groups: Vec<MatchGroup> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for m in ordered {
        let key = group_key(&m, directory);
        match by_key.get(&key) {
            Some(&index) => {
                let group = &mut groups[index];
                if group.matches[0].same_pairing(&m) {
                    group.matches.push(m);
                } else {
                    warn!(
                        match_id = %m.id,
                        fixture_key = %key,
                        "Match sides differ from its fixture, grouping it on its own"
                    );
                    groups.push(MatchGroup {
                        key: m.id.clone(),
                        matches: vec![m],
                    });
                }
            }
            None => {
                by_key.insert(key.clone(), groups.len());
                groups.push(MatchGroup {
                    key,
                    matches: vec![m],
                });
            }
        }
    }

    groups
}

/// Turns one group into a fixture, applying the early-decision rule
pub fn build_fixture(group: MatchGroup, directory: &TeamDirectory, config: &EngineConfig) -> Fixture {
    let MatchGroup { key, matches } = group;
    let first = matches[0].clone();

    let date = matches.iter().find_map(|m| m.date);
    let time = matches.iter().find_map(|m| m.time);
    let court = matches.iter().find_map(|m| m.court.clone());
    let fixture_type = matches.iter().find_map(|m| m.fixture_type.clone());
    let playoff = matches
        .iter()
        .map(|m| &m.playoff)
        .find(|info| !info.is_empty())
        .cloned()
        .unwrap_or_default();
    let is_playoff = fixture_type
        .as_deref()
        .is_some_and(|ty| config.is_playoff_marker(ty));

    let decision = decide_fixture(matches, &config.format);
    if decision.effectively_completed && !decision.excluded.is_empty() {
        debug!(
            fixture_key = %key,
            team1_wins = decision.team1_regular_wins,
            team2_wins = decision.team2_regular_wins,
            "Fixture decided early, tiebreak no longer required"
        );
    }

    Fixture {
        team1_name: directory.display_name(&first.team1).to_string(),
        team2_name: directory.display_name(&first.team2).to_string(),
        team1: first.team1,
        team2: first.team2,
        key,
        date,
        time,
        court,
        matches: decision.retained,
        excluded_matches: decision.excluded,
        status: decision.status,
        effectively_completed: decision.effectively_completed,
        fixture_type,
        is_playoff,
        playoff,
    }
}

/// Groups, resolves and orders every fixture in a snapshot
pub fn build_fixtures(
    matches: &[Match],
    directory: &TeamDirectory,
    config: &EngineConfig,
) -> Vec<Fixture> {
    let mut fixtures: Vec<Fixture> = group_matches(matches, directory)
        .into_iter()
        .map(|group| build_fixture(group, directory, config))
        .collect();
    fixtures.sort_by(compare_fixtures);
    fixtures
}

fn compare_fixtures(a: &Fixture, b: &Fixture) -> Ordering {
    fn known_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
    known_first(a.date, b.date)
        .then_with(|| known_first(a.time, b.time))
        .then_with(|| a.key.cmp(&b.key))
}
