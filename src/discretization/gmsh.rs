use std::fs;
use std::path::Path;

use glam::DVec3;

use super::mesh::{MeshError, SurfaceMesh, Triangle};

/// GMSH ASCII v2.2 element-type discriminators.
const ELEM_LINE: u32 = 1;
const ELEM_TRIANGLE: u32 = 2;
const ELEM_POINT: u32 = 15;

/// Read a GMSH ASCII v2.2 surface mesh from disk.
pub fn read_msh<P: AsRef<Path>>(path: P) -> Result<SurfaceMesh, MeshError> {
    let text = fs::read_to_string(path)?;
    parse_msh(&text)
}

/// Parse the `$Nodes` and `$Elements` blocks of a GMSH ASCII v2.2 file.
///
/// Point and line elements (used in .msh files to carry boundary tags) are
/// skipped; 3-node triangles are kept; anything else is rejected. Node ids
/// are 1-based in the file and converted to 0-based indices here, nowhere
/// else in the core.
pub fn parse_msh(text: &str) -> Result<SurfaceMesh, MeshError> {
    let lines: Vec<&str> = text.lines().collect();

    let nodes = section(&lines, "$Nodes", "$EndNodes")?;
    let vertices = parse_nodes(nodes)?;

    let elements = section(&lines, "$Elements", "$EndElements")?;
    let triangles = parse_elements(elements)?;

    SurfaceMesh::new(vertices, triangles)
}

/// Lines strictly between a `$Start`/`$End` marker pair, tagged with their
/// 1-based position in the file for error reporting.
fn section<'a>(
    lines: &[&'a str],
    start: &'static str,
    end: &'static str,
) -> Result<Vec<(usize, &'a str)>, MeshError> {
    let begin = lines
        .iter()
        .position(|l| l.trim() == start)
        .ok_or(MeshError::MissingSection(start))?;
    let close = lines[begin + 1..]
        .iter()
        .position(|l| l.trim() == end)
        .ok_or(MeshError::MissingSection(end))?;
    Ok(lines[begin + 1..begin + 1 + close]
        .iter()
        .enumerate()
        .map(|(i, l)| (begin + 2 + i, *l))
        .collect())
}

fn parse_nodes(body: Vec<(usize, &str)>) -> Result<Vec<DVec3>, MeshError> {
    let (count, entries) = split_count(&body, "$Nodes")?;
    let mut vertices = Vec::with_capacity(count);
    for &(line, text) in entries {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(MeshError::MalformedLine {
                line,
                reason: format!("expected `id x y z`, found {} fields", fields.len()),
            });
        }
        let coords: [f64; 3] = [
            parse_f64(fields[1], line)?,
            parse_f64(fields[2], line)?,
            parse_f64(fields[3], line)?,
        ];
        vertices.push(DVec3::from_array(coords));
    }
    if vertices.len() != count {
        return Err(MeshError::MalformedLine {
            line: body.first().map_or(0, |&(l, _)| l),
            reason: format!("node count says {count}, section holds {}", vertices.len()),
        });
    }
    Ok(vertices)
}

fn parse_elements(body: Vec<(usize, &str)>) -> Result<Vec<Triangle>, MeshError> {
    let (count, entries) = split_count(&body, "$Elements")?;
    let mut triangles = Vec::new();
    let mut seen = 0usize;
    for &(line, text) in entries {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < 3 {
            return Err(MeshError::MalformedLine {
                line,
                reason: "expected `id type ntags ...`".to_string(),
            });
        }
        seen += 1;
        let element = parse_usize(fields[0], line)?;
        let element_type = parse_usize(fields[1], line)? as u32;
        let num_tags = parse_usize(fields[2], line)?;

        match element_type {
            ELEM_POINT | ELEM_LINE => continue,
            ELEM_TRIANGLE => {}
            other => {
                return Err(MeshError::UnsupportedElement {
                    element,
                    element_type: other,
                })
            }
        }

        let node_fields = fields.get(3 + num_tags..).ok_or(MeshError::MalformedLine {
            line,
            reason: format!(
                "element declares {num_tags} tags but the line has only {} fields",
                fields.len()
            ),
        })?;
        if node_fields.len() < 3 {
            return Err(MeshError::ShortElement {
                element,
                found: node_fields.len(),
            });
        }
        let mut v = [0usize; 3];
        for (slot, field) in v.iter_mut().zip(node_fields) {
            let id = parse_usize(field, line)?;
            if id == 0 {
                return Err(MeshError::MalformedLine {
                    line,
                    reason: "node ids are 1-based, found 0".to_string(),
                });
            }
            *slot = id - 1;
        }
        triangles.push(Triangle { v });
    }
    if seen != count {
        return Err(MeshError::MalformedLine {
            line: body.first().map_or(0, |&(l, _)| l),
            reason: format!("element count says {count}, section holds {seen}"),
        });
    }
    Ok(triangles)
}

fn split_count<'a, 'b>(
    body: &'b [(usize, &'a str)],
    name: &'static str,
) -> Result<(usize, &'b [(usize, &'a str)]), MeshError> {
    let (&(line, head), tail) = body.split_first().ok_or(MeshError::MissingSection(name))?;
    Ok((parse_usize(head.trim(), line)?, tail))
}

fn parse_f64(field: &str, line: usize) -> Result<f64, MeshError> {
    field.parse().map_err(|_| MeshError::MalformedLine {
        line,
        reason: format!("`{field}` is not a number"),
    })
}

fn parse_usize(field: &str, line: usize) -> Result<usize, MeshError> {
    field.parse().map_err(|_| MeshError::MalformedLine {
        line,
        reason: format!("`{field}` is not a non-negative integer"),
    })
}
