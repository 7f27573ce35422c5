pub mod random_division;
pub mod serialization;
