pub mod builder;
pub mod certificate;
pub mod query;
pub mod report;
pub mod trivial;

pub use builder::{EliminationNetwork, SOURCE};
pub use certificate::{source_side_teams, Elimination};
pub use report::{DivisionReport, TeamVerdict};
pub use trivial::trivial_dominators;
