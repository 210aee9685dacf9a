//! Team, Teams, and TeamStats for the two-team split.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// One team's roster, split by position.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub forwards: Vec<Player>,
    pub defensemen: Vec<Player>,
}

impl Team {
    pub fn total_players(&self) -> usize {
        self.forwards.len() + self.defensemen.len()
    }
}

/// The two generated teams. Every attending player appears in exactly one,
/// in the sub-list matching their position.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub red: Team,
    pub white: Team,
}

/// Summary statistics for one team (for API / display).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub total_players: usize,
    /// Arithmetic mean skill over forwards and defensemen combined,
    /// rounded to one decimal place. 0 for an empty team.
    pub average_skill: f64,
    pub forwards_count: usize,
    pub defense_count: usize,
}
