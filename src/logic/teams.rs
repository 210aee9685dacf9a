//! Team generation: split attending players into two balanced teams.

use crate::models::{Player, Team, TeamStats, Teams};

/// Generate two teams from the roster (non-attending players excluded).
///
/// 1. Filter to attending players.
/// 2. Partition into forwards and defensemen.
/// 3. Sort each group by skill descending (stable: equal skill keeps input order).
/// 4. Alternate assignment per group: even index -> red, odd index -> white.
///
/// For each position group the team sizes differ by at most one, with red
/// receiving the extra (highest-skill) player of an odd-sized group. Skill
/// sums are balanced only by this greedy alternation.
pub fn generate_teams(players: &[Player]) -> Teams {
    let mut forwards: Vec<&Player> = Vec::new();
    let mut defensemen: Vec<&Player> = Vec::new();
    for p in players.iter().filter(|p| p.is_attending) {
        if p.is_defense {
            defensemen.push(p);
        } else {
            forwards.push(p);
        }
    }

    // sort_by is stable, so equal-skill players retain input order
    forwards.sort_by(|a, b| b.skill.cmp(&a.skill));
    defensemen.sort_by(|a, b| b.skill.cmp(&a.skill));

    let mut teams = Teams::default();
    for (i, p) in forwards.into_iter().enumerate() {
        if i % 2 == 0 {
            teams.red.forwards.push(p.clone());
        } else {
            teams.white.forwards.push(p.clone());
        }
    }
    for (i, p) in defensemen.into_iter().enumerate() {
        if i % 2 == 0 {
            teams.red.defensemen.push(p.clone());
        } else {
            teams.white.defensemen.push(p.clone());
        }
    }
    teams
}

/// Summary stats for one team. Average skill is the mean over forwards and
/// defensemen combined, rounded to one decimal; 0 for an empty team.
pub fn calculate_team_stats(team: &Team) -> TeamStats {
    let total_players = team.total_players();
    let average_skill = if total_players == 0 {
        0.0
    } else {
        let sum: i32 = team
            .forwards
            .iter()
            .chain(team.defensemen.iter())
            .map(|p| p.skill)
            .sum();
        (sum as f64 / total_players as f64 * 10.0).round() / 10.0
    };
    TeamStats {
        total_players,
        average_skill,
        forwards_count: team.forwards.len(),
        defense_count: team.defensemen.len(),
    }
}
