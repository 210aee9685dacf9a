//! Tournament ranking session: pairwise matchups, phase, and rankings.

use crate::models::player::Player;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The session is not in a phase that allows this action.
    InvalidPhase,
    /// No matchup with this id exists in the session.
    MatchupNotFound(MatchupId),
    /// The recorded winner is not one of the matchup's two participants.
    InvalidWinner { matchup: MatchupId, winner: String },
    /// Rankings requested before every matchup has a recorded winner.
    IncompleteMatchups,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidPhase => write!(f, "Invalid phase for this action"),
            TournamentError::MatchupNotFound(_) => write!(f, "Matchup not found"),
            TournamentError::InvalidWinner { winner, .. } => {
                write!(f, "Winner '{}' is not part of this matchup", winner)
            }
            TournamentError::IncompleteMatchups => {
                write!(f, "Not all matchups have a recorded winner")
            }
        }
    }
}

/// Unique identifier for a matchup.
pub type MatchupId = Uuid;

/// Tournament-local key for a player. Distinct from the persistence id in
/// type, though derived from it: the stringified `PlayerId`, which stays
/// stable if the session crosses a process boundary.
pub type TournamentKey = String;

/// Current phase of a ranking session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    /// No matchups generated; waiting for players.
    #[default]
    Setup,
    /// Matchups generated; recording pairwise results.
    Comparing,
    /// All matchups resolved; rankings available.
    Results,
}

/// A player enrolled in a ranking session, with comparison-derived stats.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentPlayer {
    pub key: TournamentKey,
    pub player: Player,
    pub wins: u32,
    pub comparisons: u32,
}

impl TournamentPlayer {
    pub fn new(player: Player) -> Self {
        Self {
            key: player.id.to_string(),
            player,
            wins: 0,
            comparisons: 0,
        }
    }
}

/// One pairwise comparison between two tournament players.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub id: MatchupId,
    pub player_a: TournamentKey,
    pub player_b: TournamentKey,
    /// None until a result is recorded.
    pub winner: Option<TournamentKey>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Matchup {
    pub fn new(player_a: TournamentKey, player_b: TournamentKey) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_a,
            player_b,
            winner: None,
            resolved_at: None,
        }
    }

    pub fn involves(&self, key: &str) -> bool {
        self.player_a == key || self.player_b == key
    }

    pub fn is_resolved(&self) -> bool {
        self.winner.is_some()
    }
}

/// Final ranking entry for one tournament player. Rank 1 is best; players
/// with equal win counts share a rank (competition ranking).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRanking {
    pub key: TournamentKey,
    pub rank: u32,
    pub wins: u32,
}

/// A ranking session: enrolled players, matchups, and phase. Owned by the
/// caller; all state for one setup -> comparing -> results pass lives here.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TournamentSession {
    pub phase: TournamentPhase,
    /// Enrolled players in roster order (order is the stable tie-break base).
    pub players: Vec<TournamentPlayer>,
    /// All pairwise matchups in generation order. Order is preserved for the
    /// lifetime of the session; "current matchup" is derived from it.
    pub matchups: Vec<Matchup>,
    /// Populated once every matchup is resolved.
    pub rankings: Vec<PlayerRanking>,
}

impl TournamentSession {
    /// Create an empty session in Setup phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an enrolled player by tournament key.
    pub fn get_player(&self, key: &str) -> Option<&TournamentPlayer> {
        self.players.iter().find(|p| p.key == key)
    }

    /// The first matchup (in generation order) without a recorded winner.
    /// Recomputed on every call rather than cached.
    pub fn current_matchup(&self) -> Option<&Matchup> {
        self.matchups.iter().find(|m| !m.is_resolved())
    }

    /// Count of matchups with a recorded winner.
    pub fn resolved_count(&self) -> usize {
        self.matchups.iter().filter(|m| m.is_resolved()).count()
    }
}
