use std::collections::HashMap;

use super::models::{SideRef, Team};

/// Read-only team lookup built once per snapshot and passed by reference
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    teams: Vec<Team>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl TeamDirectory {
    pub fn new(teams: &[Team]) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();
        for (index, team) in teams.iter().enumerate() {
            by_id.entry(team.id.clone()).or_insert(index);
            by_name.entry(team.name.trim().to_string()).or_insert(index);
        }
        Self {
            teams: teams.to_vec(),
            by_id,
            by_name,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn get(&self, team_id: &str) -> Option<&Team> {
        self.by_id.get(team_id).map(|&index| &self.teams[index])
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Team> {
        self.by_name.get(name.trim()).map(|&index| &self.teams[index])
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name.trim())
    }

    /// Registered name when the side has a known id, otherwise its own name
    pub fn display_name<'a>(&'a self, side: &'a SideRef) -> &'a str {
        side.id
            .as_deref()
            .and_then(|id| self.get(id))
            .map(|team| team.name.as_str())
            .unwrap_or(side.name.as_str())
    }

    pub fn logo_url(&self, side: &SideRef) -> Option<&str> {
        let team = match side.id.as_deref() {
            Some(id) => self.get(id),
            None => self.find_by_name(&side.name),
        };
        team.and_then(|team| team.logo_url.as_deref())
    }
}
