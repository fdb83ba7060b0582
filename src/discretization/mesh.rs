use glam::DVec3;
use thiserror::Error;

/// An ordered triple of 0-based vertex indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub v: [usize; 3],
}

/// The triangulated body surface. Immutable after construction; the single
/// source of truth for topology. All derived fields (geometry, pressures,
/// nodal values) are freshly allocated downstream and never write back.
pub struct SurfaceMesh {
    pub vertices: Vec<DVec3>,
    pub triangles: Vec<Triangle>,
}

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("missing `{0}` section in mesh file")]
    MissingSection(&'static str),
    #[error("malformed mesh file at line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    #[error("element {element} has unsupported type {element_type} (only 3-node triangles are supported)")]
    UnsupportedElement { element: usize, element_type: u32 },
    #[error("element {element} lists only {found} point indices, need 3")]
    ShortElement { element: usize, found: usize },
    #[error("triangle {index} references vertex {vertex}, but the mesh has {num_vertices} vertices")]
    IndexOutOfRange {
        index: usize,
        vertex: usize,
        num_vertices: usize,
    },
    #[error("triangle {index} repeats a vertex index")]
    RepeatedIndex { index: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SurfaceMesh {
    /// Validates connectivity up front; the pipeline never runs on a
    /// partially invalid mesh.
    pub fn new(vertices: Vec<DVec3>, triangles: Vec<Triangle>) -> Result<Self, MeshError> {
        for (index, tri) in triangles.iter().enumerate() {
            for &vertex in &tri.v {
                if vertex >= vertices.len() {
                    return Err(MeshError::IndexOutOfRange {
                        index,
                        vertex,
                        num_vertices: vertices.len(),
                    });
                }
            }
            let [a, b, c] = tri.v;
            if a == b || b == c || a == c {
                return Err(MeshError::RepeatedIndex { index });
            }
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Corner positions of a triangle, in connectivity order.
    pub fn corners(&self, tri: &Triangle) -> [DVec3; 3] {
        [
            self.vertices[tri.v[0]],
            self.vertices[tri.v[1]],
            self.vertices[tri.v[2]],
        ]
    }
}
