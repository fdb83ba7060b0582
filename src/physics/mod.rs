pub mod flow;
pub mod forces;
pub mod newtonian;
