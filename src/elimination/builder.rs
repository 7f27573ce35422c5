use crate::division::Division;
use crate::flow::{Capacity, FlowNetwork, FordFulkerson};

pub const SOURCE: usize = 0;

/// Flow network asking whether the games left among every team but the
/// target can be decided without any of them passing the target's ceiling.
///
/// Vertex layout: the source at 0, one game vertex per scheduled pair
/// starting at 1, then one team vertex per team other than the target, then
/// the sink.
#[derive(Debug, Clone)]
pub struct EliminationNetwork {
    target: usize,
    team_count: usize,
    games: Vec<(usize, usize)>,
    team_start: usize,
    sink: usize,
    total_games: Capacity,
    network: FlowNetwork,
}

impl EliminationNetwork {
    pub fn build(division: &Division, target: usize) -> Self {
        let n = division.number_of_teams();
        assert!(target < n, "target team {target} outside a division of {n}");

        let mut games = Vec::new();
        let mut total_games: Capacity = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if i == target || j == target {
                    continue;
                }
                let scheduled = division.against_at(i, j);
                if scheduled == 0 {
                    continue;
                }
                games.push((i, j));
                total_games += scheduled as Capacity;
            }
        }

        let team_start = 1 + games.len();
        let sink = team_start + n.saturating_sub(1);
        let mut elimination = EliminationNetwork {
            target,
            team_count: n,
            games,
            team_start,
            sink,
            total_games,
            network: FlowNetwork::new(sink + 1),
        };

        // larger than any flow the network can carry
        let unbounded = total_games + 1;
        for k in 0..elimination.games.len() {
            let (i, j) = elimination.games[k];
            let game = 1 + k;
            let team_i = elimination.team_vertex(i);
            let team_j = elimination.team_vertex(j);
            elimination
                .network
                .add_edge(SOURCE, game, division.against_at(i, j) as Capacity);
            elimination.network.add_edge(game, team_i, unbounded);
            elimination.network.add_edge(game, team_j, unbounded);
        }

        let ceiling = division.ceiling_at(target);
        for team in (0..n).filter(|&team| team != target) {
            let headroom = ceiling.saturating_sub(division.wins_at(team) as Capacity);
            let vertex = elimination.team_vertex(team);
            elimination.network.add_edge(vertex, sink, headroom);
        }

        elimination
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn team_count(&self) -> usize {
        self.team_count
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    /// Scheduled pairs in game vertex order.
    pub fn games(&self) -> &[(usize, usize)] {
        &self.games
    }

    pub fn game_vertex(&self, game: usize) -> usize {
        assert!(game < self.games.len(), "game {game} outside network");
        1 + game
    }

    pub fn team_vertex(&self, team: usize) -> usize {
        assert_ne!(team, self.target, "the target team has no vertex");
        let slot = if team < self.target { team } else { team - 1 };
        let vertex = self.team_start + slot;
        assert!(vertex < self.sink, "team {team} outside network");
        vertex
    }

    /// Games left among the teams other than the target; the flow value
    /// the target needs to stay alive.
    pub fn total_games(&self) -> Capacity {
        self.total_games
    }

    pub fn network(&self) -> &FlowNetwork {
        &self.network
    }

    pub fn solve(&mut self) -> FordFulkerson {
        FordFulkerson::new(&mut self.network, SOURCE, self.sink)
    }
}
