pub mod discretization;
pub mod physics;
pub mod processing;
