use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::discretization::mesh::SurfaceMesh;

/// Write the node-interpolated pressure field as a Tecplot ASCII FEPOINT
/// zone: one `x y z p` line per vertex in vertex order, then the triangle
/// connectivity. Indices go back to 1-based here, at the export boundary
/// only.
pub fn write_surface<P: AsRef<Path>>(
    path: P,
    title: &str,
    mesh: &SurfaceMesh,
    nodal_pressure: &[f64],
) -> io::Result<()> {
    if nodal_pressure.len() != mesh.num_vertices() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "nodal field has {} values for {} vertices",
                nodal_pressure.len(),
                mesh.num_vertices()
            ),
        ));
    }

    let mut file = File::create(path)?;
    writeln!(file, "TITLE = \"{title}\"")?;
    writeln!(file, "VARIABLES = \"X\", \"Y\", \"Z\", \"P\"")?;
    writeln!(
        file,
        "ZONE N={}, E={}, F=FEPOINT, ET=TRIANGLE",
        mesh.num_vertices(),
        mesh.num_triangles()
    )?;

    for (vertex, pressure) in mesh.vertices.iter().zip(nodal_pressure) {
        writeln!(
            file,
            "{:.9e} {:.9e} {:.9e} {:.9e}",
            vertex.x, vertex.y, vertex.z, pressure
        )?;
    }
    for tri in &mesh.triangles {
        writeln!(file, "{} {} {}", tri.v[0] + 1, tri.v[1] + 1, tri.v[2] + 1)?;
    }

    Ok(())
}
