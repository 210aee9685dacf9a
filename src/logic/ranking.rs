//! Pairwise tournament ranking: matchup generation, result recording, and
//! translating the final order back into roster skill values.

use crate::models::{
    Matchup, MatchupId, Player, PlayerRanking, TournamentError, TournamentPhase, TournamentPlayer,
    TournamentSession,
};
use chrono::Utc;

/// Start a ranking session from the given players (Setup only).
///
/// Enrolls each player under its tournament key and generates the complete
/// round-robin: every unordered pair exactly once, n(n-1)/2 matchups, in a
/// deterministic order derived from the input order. With fewer than 2
/// players this is a silent no-op: the session stays in Setup with no
/// matchups, and the caller is expected to guard.
pub fn start_tournament(
    session: &mut TournamentSession,
    players: &[Player],
) -> Result<(), TournamentError> {
    if session.phase != TournamentPhase::Setup {
        return Err(TournamentError::InvalidPhase);
    }
    if players.len() < 2 {
        return Ok(());
    }

    session.players = players
        .iter()
        .cloned()
        .map(TournamentPlayer::new)
        .collect();
    session.matchups = generate_matchups(&session.players);
    session.rankings.clear();
    session.phase = TournamentPhase::Comparing;
    Ok(())
}

/// All unique unordered pairs of enrolled players, in input order:
/// (0,1), (0,2), ..., (0,n-1), (1,2), ...
fn generate_matchups(players: &[TournamentPlayer]) -> Vec<Matchup> {
    let mut matchups = Vec::with_capacity(players.len() * (players.len() - 1) / 2);
    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            matchups.push(Matchup::new(players[i].key.clone(), players[j].key.clone()));
        }
    }
    matchups
}

/// Record the winner of one matchup (Comparing only).
///
/// The winner must be one of the matchup's two participants. Recording a
/// result twice overwrites the previous winner. Once every matchup is
/// resolved, rankings are computed and the session moves to Results.
pub fn record_result(
    session: &mut TournamentSession,
    matchup_id: MatchupId,
    winner: &str,
) -> Result<(), TournamentError> {
    if session.phase != TournamentPhase::Comparing {
        return Err(TournamentError::InvalidPhase);
    }
    let m = session
        .matchups
        .iter_mut()
        .find(|m| m.id == matchup_id)
        .ok_or(TournamentError::MatchupNotFound(matchup_id))?;
    if !m.involves(winner) {
        return Err(TournamentError::InvalidWinner {
            matchup: matchup_id,
            winner: winner.to_string(),
        });
    }
    m.winner = Some(winner.to_string());
    m.resolved_at = Some(Utc::now());

    if session.current_matchup().is_none() {
        finalize(session);
    }
    Ok(())
}

/// All matchups resolved: write win/comparison counts back to the enrolled
/// players, store the rankings, and move to Results.
fn finalize(session: &mut TournamentSession) {
    for p in &mut session.players {
        p.comparisons = session
            .matchups
            .iter()
            .filter(|m| m.involves(&p.key))
            .count() as u32;
        p.wins = session
            .matchups
            .iter()
            .filter(|m| m.winner.as_deref() == Some(p.key.as_str()))
            .count() as u32;
    }
    session.rankings = rank_players(session);
    session.phase = TournamentPhase::Results;
}

/// Compute final rankings from win counts across all matchups.
///
/// Players are ordered by win count descending, then original skill
/// descending, then key ascending (the secondary keys fix list order only).
/// Equal win counts share a rank: 1, 1, 3, ... (competition ranking).
pub fn calculate_final_rankings(
    session: &TournamentSession,
) -> Result<Vec<PlayerRanking>, TournamentError> {
    if session.phase == TournamentPhase::Setup {
        return Err(TournamentError::InvalidPhase);
    }
    if session.matchups.iter().any(|m| !m.is_resolved()) {
        return Err(TournamentError::IncompleteMatchups);
    }
    Ok(rank_players(session))
}

fn rank_players(session: &TournamentSession) -> Vec<PlayerRanking> {
    let mut counted: Vec<(&TournamentPlayer, u32)> = session
        .players
        .iter()
        .map(|p| {
            let wins = session
                .matchups
                .iter()
                .filter(|m| m.winner.as_deref() == Some(p.key.as_str()))
                .count() as u32;
            (p, wins)
        })
        .collect();
    counted.sort_by(|(a, aw), (b, bw)| {
        bw.cmp(aw)
            .then(b.player.skill.cmp(&a.player.skill))
            .then(a.key.cmp(&b.key))
    });

    let mut rankings = Vec::with_capacity(counted.len());
    let mut prev_wins = None;
    let mut rank = 0;
    for (pos, (p, wins)) in counted.into_iter().enumerate() {
        if prev_wins != Some(wins) {
            rank = pos as u32 + 1;
            prev_wins = Some(wins);
        }
        rankings.push(PlayerRanking {
            key: p.key.clone(),
            rank,
            wins,
        });
    }
    rankings
}

/// Map the final rankings back onto the roster, overwriting skill values.
///
/// Skill is a linear remap of rank onto the 1-10 scale: for n ranked players,
/// `skill = 10 - round(9 * (rank - 1) / (n - 1))`, so the best rank gets 10
/// and the worst gets 1, never increasing as rank worsens. Every input player
/// appears exactly once in the output, in input order; players not enrolled
/// in the session keep their existing skill.
pub fn apply_rankings_to_players(
    session: &TournamentSession,
    original_players: &[Player],
) -> Result<Vec<Player>, TournamentError> {
    let rankings = calculate_final_rankings(session)?;
    let n = rankings.len();

    let updated = original_players
        .iter()
        .map(|p| {
            let key = p.id.to_string();
            let mut p = p.clone();
            if let Some(r) = rankings.iter().find(|r| r.key == key) {
                p.skill = skill_for_rank(r.rank, n);
            }
            p
        })
        .collect();
    Ok(updated)
}

fn skill_for_rank(rank: u32, total: usize) -> i32 {
    // total >= 2 whenever rankings exist, so no division by zero
    let step = 9.0 * (rank as f64 - 1.0) / (total as f64 - 1.0);
    10 - step.round() as i32
}

/// Abandon the session: back to Setup with all state cleared.
pub fn reset_tournament(session: &mut TournamentSession) {
    *session = TournamentSession::new();
}
