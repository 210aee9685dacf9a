//! Player data structure for the roster.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in teams, matchups, and lookups).
pub type PlayerId = Uuid;

/// A player on the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    /// Skill level, nominally 1-10. Values outside the range are accepted as-is.
    pub skill: i32,
    /// Position flag: defenseman when true, forward otherwise.
    pub is_defense: bool,
    /// Only attending players are placed on teams.
    pub is_attending: bool,
}

impl Player {
    /// Create a new player. Attendance starts as true.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        skill: i32,
        is_defense: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            skill,
            is_defense,
            is_attending: true,
        }
    }

    /// Display name (for API responses and logs).
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
