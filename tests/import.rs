//! Integration tests for CSV roster import.

use hockey_roster_web::{parse_roster_csv, ImportError};

#[test]
fn parses_full_roster() {
    let csv = "first_name,last_name,skill,is_defense,is_attending\n\
               Wayne,Gretzky,10,false,true\n\
               Bobby,Orr,9,true,false\n";
    let players = parse_roster_csv(csv).unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0].first_name, "Wayne");
    assert_eq!(players[0].skill, 10);
    assert!(!players[0].is_defense);
    assert!(players[0].is_attending);
    assert!(players[1].is_defense);
    assert!(!players[1].is_attending);
}

#[test]
fn attendance_column_is_optional_and_defaults_true() {
    let csv = "first_name,last_name,skill,is_defense\nJoe,Sakic,8,false\n";
    let players = parse_roster_csv(csv).unwrap();
    assert_eq!(players.len(), 1);
    assert!(players[0].is_attending);
}

#[test]
fn skill_is_clamped_to_scale() {
    let csv = "first_name,last_name,skill,is_defense\nToo,High,15,false\nToo,Low,0,true\n";
    let players = parse_roster_csv(csv).unwrap();
    assert_eq!(players[0].skill, 10);
    assert_eq!(players[1].skill, 1);
}

#[test]
fn malformed_row_fails_the_whole_import() {
    let csv = "first_name,last_name,skill,is_defense\nOk,Row,5,false\nBad,Row,not_a_number,false\n";
    assert!(matches!(
        parse_roster_csv(csv),
        Err(ImportError::InvalidRow { .. })
    ));
}

#[test]
fn empty_input_yields_no_players() {
    let players = parse_roster_csv("first_name,last_name,skill,is_defense\n").unwrap();
    assert!(players.is_empty());
}
