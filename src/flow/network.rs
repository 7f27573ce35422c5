use serde::{Deserialize, Serialize};

pub type Capacity = u64;

/// Directed edge carrying a capacity and the flow currently pushed through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    from: usize,
    to: usize,
    capacity: Capacity,
    flow: Capacity,
}

impl FlowEdge {
    pub fn new(from: usize, to: usize, capacity: Capacity) -> Self {
        FlowEdge {
            from,
            to,
            capacity,
            flow: 0,
        }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn flow(&self) -> Capacity {
        self.flow
    }

    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.from {
            self.to
        } else if vertex == self.to {
            self.from
        } else {
            panic!("vertex {vertex} is not an endpoint of {}->{}", self.from, self.to);
        }
    }

    /// Residual capacity toward `vertex`: spare capacity when moving forward,
    /// the flow that can be cancelled when moving backward.
    pub fn residual_capacity_to(&self, vertex: usize) -> Capacity {
        if vertex == self.to {
            self.capacity - self.flow
        } else if vertex == self.from {
            self.flow
        } else {
            panic!("vertex {vertex} is not an endpoint of {}->{}", self.from, self.to);
        }
    }

    pub fn add_residual_flow_to(&mut self, vertex: usize, delta: Capacity) {
        if vertex == self.to {
            debug_assert!(delta <= self.capacity - self.flow);
            self.flow += delta;
        } else if vertex == self.from {
            debug_assert!(delta <= self.flow);
            self.flow -= delta;
        } else {
            panic!("vertex {vertex} is not an endpoint of {}->{}", self.from, self.to);
        }
    }
}

/// Edge arena plus per-vertex adjacency lists of edge ids. Every edge is
/// listed under both of its endpoints so the residual graph can be walked
/// in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowNetwork {
    edges: Vec<FlowEdge>,
    adjacency: Vec<Vec<usize>>,
}

impl FlowNetwork {
    pub fn new(vertices: usize) -> Self {
        FlowNetwork {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertices],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Capacity) -> usize {
        assert!(
            from < self.vertex_count() && to < self.vertex_count(),
            "edge {from}->{to} outside a network of {} vertices",
            self.vertex_count()
        );
        let id = self.edges.len();
        self.edges.push(FlowEdge::new(from, to, capacity));
        self.adjacency[from].push(id);
        self.adjacency[to].push(id);
        id
    }

    pub fn edge(&self, id: usize) -> &FlowEdge {
        &self.edges[id]
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn incident(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    pub(crate) fn push_flow(&mut self, id: usize, toward: usize, delta: Capacity) {
        self.edges[id].add_residual_flow_to(toward, delta);
    }

    pub fn capacity_out_of(&self, vertex: usize) -> Capacity {
        self.incident(vertex)
            .iter()
            .map(|&id| &self.edges[id])
            .filter(|edge| edge.from == vertex)
            .map(|edge| edge.capacity)
            .sum()
    }

    /// Outgoing minus incoming flow at `vertex`; zero at every interior vertex
    /// of a valid flow.
    pub fn excess(&self, vertex: usize) -> i64 {
        self.incident(vertex)
            .iter()
            .map(|&id| &self.edges[id])
            .map(|edge| {
                if edge.from == vertex {
                    edge.flow as i64
                } else {
                    -(edge.flow as i64)
                }
            })
            .sum()
    }
}
