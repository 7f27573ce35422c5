use crate::config::ValidationPolicy;
use crate::error::DivisionError;
use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a division: a team's standings and its remaining schedule
/// against every team of the division, in division order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub remaining: u32,
    pub against: Vec<u32>,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, wins: u32, losses: u32, remaining: u32, against: Vec<u32>) -> Self {
        TeamRecord {
            name: name.into(),
            wins,
            losses,
            remaining,
            against,
        }
    }
}

/// Immutable standings of a division.
///
/// Built once and only read afterwards, so a single snapshot can serve any
/// number of concurrent elimination queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<TeamRecord>", into = "Vec<TeamRecord>")]
pub struct Division {
    teams: Vec<String>,
    index: FxHashMap<String, usize>,
    wins: Vec<u32>,
    losses: Vec<u32>,
    remaining: Vec<u32>,
    against: Vec<Vec<u32>>,
}

impl Division {
    pub fn new(records: Vec<TeamRecord>, policy: ValidationPolicy) -> Result<Self, DivisionError> {
        // rows follow the team count line
        Self::validated(records, policy, |row| row + 2)
    }

    /// Validates `records`, reporting problems at the source line `line_of`
    /// gives for each row.
    pub(crate) fn validated(
        records: Vec<TeamRecord>,
        policy: ValidationPolicy,
        line_of: impl Fn(usize) -> usize,
    ) -> Result<Self, DivisionError> {
        let n = records.len();
        let mut seen = FxHashMap::default();
        for (row, record) in records.iter().enumerate() {
            let line = line_of(row);
            if record.against.len() != n {
                return Err(DivisionError::MalformedRecord {
                    line,
                    reason: format!(
                        "{} lists {} schedule entries for {} teams",
                        record.name,
                        record.against.len(),
                        n
                    ),
                });
            }
            if seen.insert(record.name.as_str(), row).is_some() {
                return Err(DivisionError::MalformedRecord {
                    line,
                    reason: format!("duplicate team name {}", record.name),
                });
            }
        }

        if policy == ValidationPolicy::Strict {
            check_schedule(&records)?;
        }

        Ok(Self::assemble(records))
    }

    pub(crate) fn assemble(records: Vec<TeamRecord>) -> Self {
        let n = records.len();
        let mut division = Division {
            teams: Vec::with_capacity(n),
            index: FxHashMap::default(),
            wins: Vec::with_capacity(n),
            losses: Vec::with_capacity(n),
            remaining: Vec::with_capacity(n),
            against: Vec::with_capacity(n),
        };
        for (i, record) in records.into_iter().enumerate() {
            division.index.insert(record.name.clone(), i);
            division.teams.push(record.name);
            division.wins.push(record.wins);
            division.losses.push(record.losses);
            division.remaining.push(record.remaining);
            division.against.push(record.against);
        }
        division
    }

    pub fn number_of_teams(&self) -> usize {
        self.teams.len()
    }

    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(String::as_str)
    }

    pub fn team_index(&self, team: &str) -> Result<usize, DivisionError> {
        self.index
            .get(team)
            .copied()
            .ok_or_else(|| DivisionError::UnknownTeam(team.to_string()))
    }

    pub fn team_name(&self, index: usize) -> &str {
        &self.teams[index]
    }

    pub fn wins(&self, team: &str) -> Result<u32, DivisionError> {
        Ok(self.wins[self.team_index(team)?])
    }

    pub fn losses(&self, team: &str) -> Result<u32, DivisionError> {
        Ok(self.losses[self.team_index(team)?])
    }

    pub fn remaining(&self, team: &str) -> Result<u32, DivisionError> {
        Ok(self.remaining[self.team_index(team)?])
    }

    pub fn against(&self, team1: &str, team2: &str) -> Result<u32, DivisionError> {
        let i = self.team_index(team1)?;
        let j = self.team_index(team2)?;
        Ok(self.against[i][j])
    }

    pub fn wins_at(&self, team: usize) -> u32 {
        self.wins[team]
    }

    pub fn remaining_at(&self, team: usize) -> u32 {
        self.remaining[team]
    }

    pub fn against_at(&self, team1: usize, team2: usize) -> u32 {
        self.against[team1][team2]
    }

    /// Maximum number of wins the team can still finish the season with.
    pub fn ceiling_at(&self, team: usize) -> u64 {
        self.wins[team] as u64 + self.remaining[team] as u64
    }

    pub fn records(&self) -> Vec<TeamRecord> {
        (0..self.number_of_teams())
            .map(|i| TeamRecord {
                name: self.teams[i].clone(),
                wins: self.wins[i],
                losses: self.losses[i],
                remaining: self.remaining[i],
                against: self.against[i].clone(),
            })
            .collect()
    }
}

fn check_schedule(records: &[TeamRecord]) -> Result<(), DivisionError> {
    for (i, record) in records.iter().enumerate() {
        if record.against[i] != 0 {
            return Err(DivisionError::InconsistentSchedule {
                team: record.name.clone(),
                reason: format!("{} games scheduled against itself", record.against[i]),
            });
        }
        for (j, other) in records.iter().enumerate().skip(i + 1) {
            if record.against[j] != other.against[i] {
                return Err(DivisionError::InconsistentSchedule {
                    team: record.name.clone(),
                    reason: format!(
                        "{} games against {} but {} lists {}",
                        record.against[j], other.name, other.name, other.against[i]
                    ),
                });
            }
        }
        let scheduled: u64 = record.against.iter().map(|&games| games as u64).sum();
        if scheduled > record.remaining as u64 {
            return Err(DivisionError::InconsistentSchedule {
                team: record.name.clone(),
                reason: format!(
                    "{} division games scheduled but only {} remaining",
                    scheduled, record.remaining
                ),
            });
        }
    }
    Ok(())
}

impl TryFrom<Vec<TeamRecord>> for Division {
    type Error = DivisionError;

    fn try_from(records: Vec<TeamRecord>) -> Result<Self, Self::Error> {
        Division::new(records, ValidationPolicy::Permissive)
    }
}

impl From<Division> for Vec<TeamRecord> {
    fn from(division: Division) -> Self {
        division.records()
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.number_of_teams())?;
        let width = self.teams.iter().map(String::len).max().unwrap_or(0);
        for i in 0..self.number_of_teams() {
            write!(
                f,
                "{:<width$} {:>3} {:>3} {:>3} ",
                self.teams[i],
                self.wins[i],
                self.losses[i],
                self.remaining[i],
                width = width
            )?;
            let row: Vec<String> = self.against[i].iter().map(u32::to_string).collect();
            writeln!(f, " {}", row.join(" "))?;
        }
        Ok(())
    }
}
