//! Integration tests for team generation and team stats.

use hockey_roster_web::{calculate_team_stats, generate_teams, Player};

fn forward(name: &str, skill: i32) -> Player {
    Player::new(name, "Test", skill, false)
}

fn defenseman(name: &str, skill: i32) -> Player {
    Player::new(name, "Test", skill, true)
}

#[test]
fn alternates_assignment_from_highest_skill() {
    // Sorted desc by skill: A(9), C(7), B(5) -> red gets indices 0 and 2
    let players = vec![forward("A", 9), forward("B", 5), forward("C", 7)];
    let teams = generate_teams(&players);

    let red: Vec<_> = teams.red.forwards.iter().map(|p| p.first_name.as_str()).collect();
    let white: Vec<_> = teams.white.forwards.iter().map(|p| p.first_name.as_str()).collect();
    assert_eq!(red, vec!["A", "B"]);
    assert_eq!(white, vec!["C"]);
}

#[test]
fn non_attending_players_are_excluded() {
    let mut skip = forward("Skip", 10);
    skip.is_attending = false;
    let players = vec![skip, forward("A", 5), defenseman("D", 6)];
    let teams = generate_teams(&players);

    let all: Vec<_> = teams
        .red
        .forwards
        .iter()
        .chain(&teams.red.defensemen)
        .chain(&teams.white.forwards)
        .chain(&teams.white.defensemen)
        .collect();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|p| p.first_name != "Skip"));
}

#[test]
fn position_groups_differ_by_at_most_one() {
    let mut players: Vec<Player> = (0..7).map(|i| forward(&format!("F{i}"), i)).collect();
    players.extend((0..5).map(|i| defenseman(&format!("D{i}"), i)));
    let teams = generate_teams(&players);

    let fwd_diff = teams.red.forwards.len() as i64 - teams.white.forwards.len() as i64;
    let def_diff = teams.red.defensemen.len() as i64 - teams.white.defensemen.len() as i64;
    assert!(fwd_diff.abs() <= 1);
    assert!(def_diff.abs() <= 1);
    // Red takes the extra player of an odd-sized group
    assert_eq!(teams.red.forwards.len(), 4);
    assert_eq!(teams.red.defensemen.len(), 3);
}

#[test]
fn every_attending_player_lands_on_exactly_one_team() {
    let players: Vec<Player> = (0..9)
        .map(|i| {
            if i % 3 == 0 {
                defenseman(&format!("D{i}"), i)
            } else {
                forward(&format!("F{i}"), i)
            }
        })
        .collect();
    let teams = generate_teams(&players);

    let mut ids: Vec<_> = teams
        .red
        .forwards
        .iter()
        .chain(&teams.red.defensemen)
        .chain(&teams.white.forwards)
        .chain(&teams.white.defensemen)
        .map(|p| p.id)
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), players.len());
    // Position flag matches the sub-list the player landed in
    assert!(teams.red.forwards.iter().chain(&teams.white.forwards).all(|p| !p.is_defense));
    assert!(teams.red.defensemen.iter().chain(&teams.white.defensemen).all(|p| p.is_defense));
}

#[test]
fn generation_is_deterministic() {
    let players: Vec<Player> = (0..8).map(|i| forward(&format!("F{i}"), (i * 3) % 7)).collect();
    assert_eq!(generate_teams(&players), generate_teams(&players));
}

#[test]
fn equal_skill_keeps_input_order() {
    let players = vec![forward("First", 5), forward("Second", 5), forward("Third", 5)];
    let teams = generate_teams(&players);

    assert_eq!(teams.red.forwards[0].first_name, "First");
    assert_eq!(teams.white.forwards[0].first_name, "Second");
    assert_eq!(teams.red.forwards[1].first_name, "Third");
}

#[test]
fn empty_roster_yields_empty_teams() {
    let teams = generate_teams(&[]);
    assert_eq!(teams.red.total_players(), 0);
    assert_eq!(teams.white.total_players(), 0);
}

#[test]
fn stats_average_forwards_only() {
    let team = hockey_roster_web::Team {
        forwards: vec![forward("A", 8), forward("B", 6)],
        defensemen: vec![],
    };
    let stats = calculate_team_stats(&team);
    assert_eq!(stats.total_players, 2);
    assert_eq!(stats.average_skill, 7.0);
    assert_eq!(stats.forwards_count, 2);
    assert_eq!(stats.defense_count, 0);
}

#[test]
fn stats_average_combines_forwards_and_defense() {
    let team = hockey_roster_web::Team {
        forwards: vec![forward("A", 8), forward("B", 6)],
        defensemen: vec![defenseman("D", 7)],
    };
    let stats = calculate_team_stats(&team);
    assert_eq!(stats.total_players, 3);
    assert_eq!(stats.average_skill, 7.0);
    assert_eq!(stats.forwards_count, 2);
    assert_eq!(stats.defense_count, 1);
}

#[test]
fn stats_round_to_one_decimal() {
    let team = hockey_roster_web::Team {
        forwards: vec![forward("A", 5), forward("B", 6), forward("C", 6)],
        defensemen: vec![],
    };
    let stats = calculate_team_stats(&team);
    assert_eq!(stats.average_skill, 5.7); // 17/3 = 5.666...
}

#[test]
fn stats_on_empty_team_are_zero() {
    let stats = calculate_team_stats(&hockey_roster_web::Team::default());
    assert_eq!(stats.total_players, 0);
    assert_eq!(stats.average_skill, 0.0);
}
