use crate::division::Division;

/// Every other team that already has more wins than `target` can reach.
/// Any one of them is enough to eliminate `target` on its own.
pub fn trivial_dominators(division: &Division, target: usize) -> Vec<usize> {
    let ceiling = division.ceiling_at(target);
    (0..division.number_of_teams())
        .filter(|&team| team != target && division.wins_at(team) as u64 > ceiling)
        .collect()
}
