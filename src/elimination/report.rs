use crate::division::Division;
use crate::elimination::certificate::Elimination;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamVerdict {
    pub team: String,
    pub wins: u32,
    pub remaining: u32,
    pub ceiling: u64,
    pub elimination: Elimination,
}

impl TeamVerdict {
    pub fn new(division: &Division, team: usize, elimination: Elimination) -> Self {
        TeamVerdict {
            team: division.team_name(team).to_string(),
            wins: division.wins_at(team),
            remaining: division.remaining_at(team),
            ceiling: division.ceiling_at(team),
            elimination,
        }
    }
}

impl fmt::Display for TeamVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.elimination.certificate() {
            Some(certificate) => write!(
                f,
                "{} is eliminated by the subset R = {{ {} }}",
                self.team,
                certificate.join(" ")
            ),
            None => write!(f, "{} is not eliminated", self.team),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DivisionReport {
    pub teams: Vec<TeamVerdict>,
}

impl DivisionReport {
    pub fn eliminated(&self) -> impl Iterator<Item = &TeamVerdict> + '_ {
        self.teams.iter().filter(|verdict| verdict.elimination.is_eliminated())
    }

    pub fn verdict(&self, team: &str) -> Option<&TeamVerdict> {
        self.teams.iter().find(|verdict| verdict.team == team)
    }
}

impl fmt::Display for DivisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.teams {
            writeln!(f, "{verdict}")?;
        }
        Ok(())
    }
}
