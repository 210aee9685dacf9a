//! Roster business logic: team generation, tournament ranking, import.

mod import;
mod ranking;
mod teams;

pub use import::{parse_roster_csv, ImportError};
pub use ranking::{
    apply_rankings_to_players, calculate_final_rankings, record_result, reset_tournament,
    start_tournament,
};
pub use teams::{calculate_team_stats, generate_teams};
