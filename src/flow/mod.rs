pub mod ford_fulkerson;
pub mod network;

pub use ford_fulkerson::FordFulkerson;
pub use network::{Capacity, FlowEdge, FlowNetwork};
