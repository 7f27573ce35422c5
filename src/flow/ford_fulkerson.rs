use crate::flow::network::{Capacity, FlowNetwork};
use bitvec::prelude::*;
use log::trace;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Edmonds-Karp maximum flow: augment along shortest residual paths found by
/// breadth-first search until the sink is unreachable.
///
/// After solving, the vertices marked by the last search are exactly the
/// source side of a minimum cut.
#[derive(Debug, Clone)]
pub struct FordFulkerson {
    source: usize,
    sink: usize,
    marked: BitVec,
    edge_to: Vec<Option<usize>>,
    value: Capacity,
    augmentations: usize,
}

impl FordFulkerson {
    pub fn new(network: &mut FlowNetwork, source: usize, sink: usize) -> Self {
        let vertices = network.vertex_count();
        assert!(source < vertices && sink < vertices, "terminal outside network");
        assert_ne!(source, sink, "source and sink must differ");

        let mut solver = FordFulkerson {
            source,
            sink,
            marked: bitvec![0; vertices],
            edge_to: vec![None; vertices],
            value: 0,
            augmentations: 0,
        };

        while solver.has_augmenting_path(network) {
            let path = solver.augmenting_path(network);
            let bottleneck = path
                .iter()
                .map(|&(id, toward)| network.edge(id).residual_capacity_to(toward))
                .min()
                .unwrap_or(0);
            for &(id, toward) in &path {
                network.push_flow(id, toward, bottleneck);
            }
            solver.value += bottleneck;
            solver.augmentations += 1;
            trace!(
                "augmenting path of {} edges carries {} (total {})",
                path.len(),
                bottleneck,
                solver.value
            );
        }

        solver
    }

    fn has_augmenting_path(&mut self, network: &FlowNetwork) -> bool {
        self.marked.fill(false);
        self.edge_to.fill(None);

        let mut queue = VecDeque::new();
        queue.push_back(self.source);
        self.marked.set(self.source, true);
        while let Some(v) = queue.pop_front() {
            for &id in network.incident(v) {
                let edge = network.edge(id);
                let w = edge.other(v);
                if !self.marked[w] && edge.residual_capacity_to(w) > 0 {
                    self.marked.set(w, true);
                    self.edge_to[w] = Some(id);
                    queue.push_back(w);
                }
            }
        }
        self.marked[self.sink]
    }

    /// Edges of the last search's path, walked back from the sink, each paired
    /// with the vertex the flow moves toward.
    fn augmenting_path(&self, network: &FlowNetwork) -> SmallVec<[(usize, usize); 8]> {
        let mut path = SmallVec::new();
        let mut v = self.sink;
        while v != self.source {
            let id = self.edge_to[v].unwrap_or_else(|| panic!("vertex {v} marked without a parent edge"));
            path.push((id, v));
            v = network.edge(id).other(v);
        }
        path
    }

    pub fn value(&self) -> Capacity {
        self.value
    }

    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Whether `vertex` is on the source side of the minimum cut.
    pub fn in_cut(&self, vertex: usize) -> bool {
        assert!(vertex < self.marked.len(), "vertex {vertex} outside network");
        self.marked[vertex]
    }
}
