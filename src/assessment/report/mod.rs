pub(crate) mod careers;
pub(crate) mod insights;
pub mod views;

pub use careers::{CareerPathView, CareerRole};
pub use views::{AssessmentResult, WiscarScores};
