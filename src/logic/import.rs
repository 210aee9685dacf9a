//! CSV roster import: headers `first_name,last_name,skill,is_defense[,is_attending]`.

use crate::models::Player;
use serde::Deserialize;

/// Errors that can occur during roster import.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImportError {
    /// A row failed to parse; no players from this import are applied.
    InvalidRow { line: u64, message: String },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::InvalidRow { line, message } => {
                write!(f, "Invalid CSV row at line {}: {}", line, message)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvPlayerRecord {
    first_name: String,
    last_name: String,
    skill: i32,
    is_defense: bool,
    /// Optional column; imported players default to attending.
    is_attending: Option<bool>,
}

/// Parse a CSV roster into players. Skill is clamped to 1-10 on import
/// (hand-edited spreadsheets are the usual source). All-or-nothing: any
/// malformed row fails the whole import.
pub fn parse_roster_csv(data: &str) -> Result<Vec<Player>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut players = Vec::new();
    for result in rdr.deserialize::<CsvPlayerRecord>() {
        match result {
            Ok(rec) => {
                let mut p = Player::new(
                    rec.first_name,
                    rec.last_name,
                    rec.skill.clamp(1, 10),
                    rec.is_defense,
                );
                p.is_attending = rec.is_attending.unwrap_or(true);
                players.push(p);
            }
            Err(e) => {
                let line = e.position().map(|pos| pos.line()).unwrap_or(0);
                return Err(ImportError::InvalidRow {
                    line,
                    message: e.to_string(),
                });
            }
        }
    }
    Ok(players)
}
