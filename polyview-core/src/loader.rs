//! Loader for the polyhedron text description format.
//!
//! ```text
//! V F            header: vertex and face counts
//! id x y z       V vertex lines
//! a b c [d ...]  F face lines listing vertex ids
//! ```
//!
//! Fields are separated by commas, whitespace, or both. `#` starts a
//! comment that runs to the end of the line; blank lines are skipped.
//! Header counts are checked strictly in both directions.

use std::fs;
use std::path::Path;

use nalgebra::Point3;
use nom::branch::alt;
use nom::character::complete::{char, space0, space1, u32 as vertex_id};
use nom::combinator::{all_consuming, recognize};
use nom::multi::separated_list1;
use nom::number::complete::double;
use nom::sequence::{delimited, tuple};
use nom::IResult;
use tracing::info;

use crate::error::{MeshError, Result};
use crate::mesh::{Polyhedron, VertexId};

/// Cap on pre-allocation from header counts, which are unverified until
/// the declared lines actually parse.
const PREALLOC_LIMIT: usize = 1 << 16;

/// A field separator: a comma with optional surrounding spaces, or spaces.
fn field_sep(input: &str) -> IResult<&str, &str> {
    alt((recognize(tuple((space0, char(','), space0))), space1))(input)
}

/// Header line: vertex count, separator, face count.
fn header(input: &str) -> IResult<&str, (u32, u32)> {
    let (input, _) = space0(input)?;
    let (input, vertices) = vertex_id(input)?;
    let (input, _) = field_sep(input)?;
    let (input, faces) = vertex_id(input)?;
    let (input, _) = space0(input)?;
    Ok((input, (vertices, faces)))
}

/// Vertex line: id followed by three coordinates.
fn vertex_line(input: &str) -> IResult<&str, (VertexId, Point3<f64>)> {
    let (input, _) = space0(input)?;
    let (input, id) = vertex_id(input)?;
    let (input, _) = field_sep(input)?;
    let (input, x) = double(input)?;
    let (input, _) = field_sep(input)?;
    let (input, y) = double(input)?;
    let (input, _) = field_sep(input)?;
    let (input, z) = double(input)?;
    let (input, _) = space0(input)?;
    Ok((input, (id, Point3::new(x, y, z))))
}

/// Face line: a separated list of vertex ids.
fn face_line(input: &str) -> IResult<&str, Vec<VertexId>> {
    delimited(space0, separated_list1(field_sep, vertex_id), space0)(input)
}

/// Run a line parser over an entire line, rejecting trailing garbage.
fn complete_line<'a, O, P>(parser: P, line: &'a str) -> Option<O>
where
    P: FnMut(&'a str) -> IResult<&'a str, O>,
{
    all_consuming(parser)(line).ok().map(|(_, value)| value)
}

/// Parse a polyhedron description from text.
///
/// Errors carry the 1-based line number of the offending input line.
pub fn parse_mesh(input: &str) -> Result<Polyhedron> {
    // Meaningful lines only, each tagged with its 1-based source line.
    let mut lines = input.lines().enumerate().filter_map(|(index, raw)| {
        let content = match raw.find('#') {
            Some(position) => &raw[..position],
            None => raw,
        };
        if content.trim().is_empty() {
            None
        } else {
            Some((index + 1, content))
        }
    });

    let (header_line, header_text) = lines.next().ok_or_else(|| MeshError::Format {
        line: 1,
        message: "missing header line".to_string(),
    })?;
    let (vertex_count, face_count) =
        complete_line(header, header_text).ok_or_else(|| MeshError::Format {
            line: header_line,
            message: "expected header: vertex count and face count".to_string(),
        })?;

    let mut vertices = Vec::with_capacity((vertex_count as usize).min(PREALLOC_LIMIT));
    for supplied in 0..vertex_count {
        let (line, text) = lines.next().ok_or_else(|| MeshError::Format {
            line: header_line,
            message: format!(
                "header declares {} vertices, only {} supplied",
                vertex_count, supplied
            ),
        })?;
        let vertex = complete_line(vertex_line, text).ok_or_else(|| MeshError::Format {
            line,
            message: "expected vertex line: id x y z".to_string(),
        })?;
        vertices.push(vertex);
    }

    let mut faces = Vec::with_capacity((face_count as usize).min(PREALLOC_LIMIT));
    for supplied in 0..face_count {
        let (line, text) = lines.next().ok_or_else(|| MeshError::Format {
            line: header_line,
            message: format!(
                "header declares {} faces, only {} supplied",
                face_count, supplied
            ),
        })?;
        let ids = complete_line(face_line, text).ok_or_else(|| MeshError::Format {
            line,
            message: "expected face line: list of vertex ids".to_string(),
        })?;
        faces.push(ids);
    }

    if let Some((line, _)) = lines.next() {
        return Err(MeshError::Format {
            line,
            message: "content beyond the declared vertex and face counts".to_string(),
        });
    }

    Polyhedron::new(vertices, faces)
}

/// Read and parse a polyhedron description file.
pub fn load_mesh(path: impl AsRef<Path>) -> Result<Polyhedron> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let mesh = parse_mesh(&text)?;
    info!(
        "loaded {} with {} vertices and {} faces",
        path.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}
