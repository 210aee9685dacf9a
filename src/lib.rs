//! Hockey roster web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    apply_rankings_to_players, calculate_final_rankings, calculate_team_stats, generate_teams,
    parse_roster_csv, record_result, reset_tournament, start_tournament, ImportError,
};
pub use models::{
    Matchup, MatchupId, Player, PlayerId, PlayerRanking, Team, TeamStats, Teams, TournamentError,
    TournamentKey, TournamentPhase, TournamentPlayer, TournamentSession,
};
