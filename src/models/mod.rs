//! Data structures for the roster app: players, teams, tournament session.

mod player;
mod team;
mod tournament;

pub use player::{Player, PlayerId};
pub use team::{Team, TeamStats, Teams};
pub use tournament::{
    Matchup, MatchupId, PlayerRanking, TournamentError, TournamentKey, TournamentPhase,
    TournamentPlayer, TournamentSession,
};
