pub mod nodal;
pub mod summary;
pub mod tecplot;
