use crate::division::{Division, TeamRecord};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_GAMES: u32 = 6;
pub const WIN_RANGE: std::ops::RangeInclusive<u32> = 60..=90;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionParameters {
    pub teams: usize,
    pub max_games_per_pair: u32,
    pub total_games: u64,
}

/// Random division with a consistent schedule: symmetric, nothing on the
/// diagonal, and every team's remaining count equal to its row sum.
pub fn generate_division(
    teams: usize,
    max_games_per_pair: u32,
    rng: &mut impl Rng,
) -> (Division, DivisionParameters) {
    let mut against = vec![vec![0u32; teams]; teams];
    let mut total_games = 0u64;
    for i in 0..teams {
        for j in (i + 1)..teams {
            let games = rng.random_range(0..=max_games_per_pair);
            against[i][j] = games;
            against[j][i] = games;
            total_games += games as u64;
        }
    }

    let records = against
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let remaining = row.iter().sum();
            TeamRecord {
                name: format!("Team{:02}", i + 1),
                wins: rng.random_range(WIN_RANGE),
                losses: rng.random_range(WIN_RANGE),
                remaining,
                against: row,
            }
        })
        .collect();

    let params = DivisionParameters {
        teams,
        max_games_per_pair,
        total_games,
    };

    (Division::assemble(records), params)
}
