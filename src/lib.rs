pub mod config;
pub mod division;
pub mod elimination;
pub mod error;
pub mod flow;
pub mod utils;

pub use config::{CheckerConfig, OutputFormat, ValidationPolicy};
pub use division::{Division, TeamRecord};
pub use elimination::{
	DivisionReport,
	Elimination,
	EliminationNetwork,
	TeamVerdict,
};
pub use error::{ConfigError, DivisionError};
pub use flow::{Capacity, FlowEdge, FlowNetwork, FordFulkerson};
