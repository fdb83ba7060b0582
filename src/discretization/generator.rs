use std::f64::consts::PI;

use glam::DVec3;

use super::mesh::{SurfaceMesh, Triangle};

/// Closed lat-long sphere triangulation for tests and benchmarks.
///
/// `n_lat` bands between the poles (>= 2), `n_lon` segments around the axis
/// (>= 3). Winding is left arbitrary on purpose; orientation resolution in
/// the geometry pass is responsible for making the normals outward.
pub fn sphere_mesh(radius: f64, n_lat: usize, n_lon: usize) -> SurfaceMesh {
    assert!(n_lat >= 2 && n_lon >= 3, "sphere mesh too coarse");

    let mut vertices = vec![DVec3::new(0.0, 0.0, radius)];
    for i in 1..n_lat {
        let theta = PI * i as f64 / n_lat as f64;
        for j in 0..n_lon {
            let phi = 2.0 * PI * j as f64 / n_lon as f64;
            vertices.push(DVec3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.sin() * phi.sin(),
                radius * theta.cos(),
            ));
        }
    }
    vertices.push(DVec3::new(0.0, 0.0, -radius));
    let south = vertices.len() - 1;

    // 0-based index of vertex j on ring i (rings are 1..n_lat-1).
    let ring = |i: usize, j: usize| 1 + (i - 1) * n_lon + (j % n_lon);

    let mut triangles = Vec::new();
    for j in 0..n_lon {
        triangles.push(Triangle {
            v: [0, ring(1, j), ring(1, j + 1)],
        });
    }
    for i in 1..n_lat - 1 {
        for j in 0..n_lon {
            triangles.push(Triangle {
                v: [ring(i, j), ring(i + 1, j), ring(i + 1, j + 1)],
            });
            triangles.push(Triangle {
                v: [ring(i, j), ring(i + 1, j + 1), ring(i, j + 1)],
            });
        }
    }
    for j in 0..n_lon {
        triangles.push(Triangle {
            v: [south, ring(n_lat - 1, j), ring(n_lat - 1, j + 1)],
        });
    }

    SurfaceMesh::new(vertices, triangles).expect("generated sphere connectivity is valid")
}
