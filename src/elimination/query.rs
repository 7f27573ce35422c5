use crate::division::Division;
use crate::elimination::builder::EliminationNetwork;
use crate::elimination::certificate::{source_side_teams, Elimination};
use crate::elimination::report::{DivisionReport, TeamVerdict};
use crate::elimination::trivial::trivial_dominators;
use crate::error::DivisionError;
use log::debug;

impl Division {
    /// Decides whether `team` can still finish with the most wins, ties
    /// allowed, and records how the answer was reached.
    pub fn evaluate(&self, team: &str) -> Result<Elimination, DivisionError> {
        let target = self.team_index(team)?;
        Ok(self.evaluate_at(target))
    }

    pub fn evaluate_at(&self, target: usize) -> Elimination {
        let dominators = trivial_dominators(self, target);
        if !dominators.is_empty() {
            debug!(
                "{} trivially eliminated by {} team(s)",
                self.team_name(target),
                dominators.len()
            );
            return Elimination::Trivial {
                certificate: self.names(&dominators),
            };
        }

        let mut network = EliminationNetwork::build(self, target);
        let solver = network.solve();
        let cut = source_side_teams(&network, &solver);
        debug!(
            "{}: max flow {} of {} after {} augmenting paths",
            self.team_name(target),
            solver.value(),
            network.total_games(),
            solver.augmentations()
        );

        if cut.is_empty() {
            Elimination::NotEliminated
        } else {
            Elimination::Flow {
                certificate: self.names(&cut),
                max_flow: solver.value(),
                capacity: network.total_games(),
            }
        }
    }

    pub fn is_eliminated(&self, team: &str) -> Result<bool, DivisionError> {
        Ok(self.evaluate(team)?.is_eliminated())
    }

    /// Teams that together prove `team` is eliminated, or `None` if it is not.
    pub fn certificate_of_elimination(&self, team: &str) -> Result<Option<Vec<String>>, DivisionError> {
        Ok(self.evaluate(team)?.into_certificate())
    }

    pub fn report(&self) -> DivisionReport {
        let teams = (0..self.number_of_teams())
            .map(|team| TeamVerdict::new(self, team, self.evaluate_at(team)))
            .collect();
        DivisionReport { teams }
    }

    fn names(&self, teams: &[usize]) -> Vec<String> {
        teams.iter().map(|&team| self.team_name(team).to_string()).collect()
    }
}
