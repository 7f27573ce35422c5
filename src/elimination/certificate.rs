use crate::elimination::builder::EliminationNetwork;
use crate::flow::{Capacity, FordFulkerson};
use serde::{Deserialize, Serialize};

/// Outcome of an elimination query, recording which check decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Elimination {
    NotEliminated,
    /// Some teams already have more wins than the target can reach.
    Trivial { certificate: Vec<String> },
    /// The games left among the others cannot all be played without someone
    /// passing the target's ceiling.
    Flow {
        certificate: Vec<String>,
        max_flow: Capacity,
        capacity: Capacity,
    },
}

impl Elimination {
    pub fn is_eliminated(&self) -> bool {
        !matches!(self, Elimination::NotEliminated)
    }

    pub fn certificate(&self) -> Option<&[String]> {
        match self {
            Elimination::NotEliminated => None,
            Elimination::Trivial { certificate } | Elimination::Flow { certificate, .. } => {
                Some(certificate.as_slice())
            }
        }
    }

    pub fn into_certificate(self) -> Option<Vec<String>> {
        match self {
            Elimination::NotEliminated => None,
            Elimination::Trivial { certificate } | Elimination::Flow { certificate, .. } => {
                Some(certificate)
            }
        }
    }
}

/// Teams whose vertex the solver left on the source side of the minimum cut,
/// in division order.
pub fn source_side_teams(network: &EliminationNetwork, solver: &FordFulkerson) -> Vec<usize> {
    (0..network.team_count())
        .filter(|&team| team != network.target())
        .filter(|&team| solver.in_cut(network.team_vertex(team)))
        .collect()
}
