pub mod generator;
pub mod geometry;
pub mod gmsh;
pub mod mesh;
