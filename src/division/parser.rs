use crate::config::ValidationPolicy;
use crate::division::snapshot::{Division, TeamRecord};
use crate::error::DivisionError;
use log::debug;
use std::fs;
use std::io::{BufRead, Read};
use std::path::Path;
use std::str::FromStr;

/// Parses the plain-text division format: a team count line followed by one
/// row per team holding `name wins losses remaining against[0] .. against[n-1]`.
pub fn parse_division(source: &str, policy: ValidationPolicy) -> Result<Division, DivisionError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count_text) = lines.next().ok_or(DivisionError::MalformedRecord {
        line: 1,
        reason: "missing team count".to_string(),
    })?;
    let teams: usize = count_text.parse().map_err(|_| DivisionError::MalformedRecord {
        line: count_line,
        reason: format!("invalid team count '{count_text}'"),
    })?;

    // the team count is untrusted input; nothing is sized by it
    let rows: Vec<(usize, &str)> = lines.by_ref().take(teams).collect();
    if rows.len() < teams {
        return Err(DivisionError::TruncatedInput {
            expected: teams,
            found: rows.len(),
        });
    }
    if let Some((line, _)) = lines.next() {
        debug!("ignoring trailing input from line {line}");
    }

    let records = rows
        .iter()
        .map(|&(line, text)| parse_record(text, line, teams))
        .collect::<Result<Vec<_>, _>>()?;
    Division::validated(records, policy, |row| rows[row].0)
}

pub fn read_division<R: BufRead>(mut reader: R, policy: ValidationPolicy) -> Result<Division, DivisionError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_division(&source, policy)
}

pub fn load_division_file<P: AsRef<Path>>(path: P, policy: ValidationPolicy) -> Result<Division, DivisionError> {
    let source = fs::read_to_string(path)?;
    parse_division(&source, policy)
}

fn parse_record(text: &str, line: usize, teams: usize) -> Result<TeamRecord, DivisionError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let expected = teams + 4;
    if fields.len() != expected {
        return Err(DivisionError::MalformedRecord {
            line,
            reason: format!("expected {expected} fields, found {}", fields.len()),
        });
    }

    let mut numbers = Vec::with_capacity(expected - 1);
    for (position, field) in fields.iter().enumerate().skip(1) {
        let value: u32 = field.parse().map_err(|_| DivisionError::MalformedRecord {
            line,
            reason: format!("invalid number '{field}' in field {}", position + 1),
        })?;
        numbers.push(value);
    }

    Ok(TeamRecord {
        name: fields[0].to_string(),
        wins: numbers[0],
        losses: numbers[1],
        remaining: numbers[2],
        against: numbers[3..].to_vec(),
    })
}

impl FromStr for Division {
    type Err = DivisionError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parse_division(source, ValidationPolicy::Permissive)
    }
}
