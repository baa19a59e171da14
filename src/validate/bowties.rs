//! Bowtie detection: vertices claimed by two or more disconnected fans.
//!
//! A bowtie is a single vertex used by separate fans of triangles that share
//! no adjacency path around it. Each fan is discovered once by orbiting every
//! not-yet-seen face corner; a per-vertex ownership table then catches any
//! later fan that lands on an already-claimed vertex.
//!
//! All scratch state is sized up front from the face and vertex counts and
//! discarded when the scan returns. Allocation failure surfaces as
//! [`MeshValidateError::OutOfMemory`] rather than aborting.

use crate::mesh_error::MeshValidateError;
use crate::topology::index::{UNUSED32, VertexIndex};
use crate::topology::orbit::{OrbitDirection, OrbitIterator};
use crate::validate::Reporter;

/// Scans the mesh for bowtie vertices. Requires adjacency.
///
/// Callers must have range-checked `indices` and `adjacency` first; the
/// ownership table is indexed by raw vertex values.
pub(crate) fn validate_no_bowties<I: VertexIndex>(
    indices: &[I],
    n_faces: usize,
    n_verts: usize,
    adjacency: Option<&[u32]>,
    reporter: &mut Reporter<'_>,
) -> Result<(), MeshValidateError> {
    let Some(adjacency) = adjacency else {
        return Err(MeshValidateError::MissingAdjacency("BOWTIES"));
    };

    log::debug!(
        "bowtie scan scratch: {} corner flags, {} vertex slots",
        n_faces * 3,
        n_verts
    );
    let mut corner_seen = scratch_vec(n_faces * 3, false)?;
    // Per vertex: the seed face of the fan that first claimed it, a
    // representative face of that fan, and whether it was already reported.
    let mut owner = scratch_vec(n_verts, UNUSED32)?;
    let mut fan_face = scratch_vec(n_verts, 0u32)?;
    let mut flagged = scratch_vec(n_verts, false)?;

    for face in 0..n_faces {
        let base = face * 3;
        let (i0, i1, i2) = (indices[base], indices[base + 1], indices[base + 2]);

        if i0 == i1 || i0 == i2 || i1 == i2 {
            // Degenerate faces carry no usable fan information.
            corner_seen[base..base + 3].fill(true);
            continue;
        }

        for corner in 0..3 {
            if corner_seen[base + corner] {
                continue;
            }
            corner_seen[base + corner] = true;

            let pivot = indices[base + corner];
            if pivot.is_unused() {
                // "No vertex" corners anchor no fan.
                continue;
            }
            let slot = pivot.as_usize();

            let orbit =
                OrbitIterator::new(indices, adjacency, face as u32, pivot, OrbitDirection::All)?;
            for item in orbit {
                let visited = item?;
                corner_seen[visited.face as usize * 3 + visited.corner as usize] = true;

                if owner[slot] == UNUSED32 {
                    owner[slot] = face as u32;
                    fan_face[slot] = visited.face;
                } else if owner[slot] != face as u32 && !flagged[slot] {
                    // A second, disconnected fan reached this vertex.
                    flagged[slot] = true;
                    reporter.report(format!(
                        "bowtie around vertex {pivot} shared by faces {} and {}",
                        visited.face, fan_face[slot]
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// Allocates a fixed-size scratch table, reporting failure instead of
/// aborting the process.
fn scratch_vec<T: Clone>(len: usize, fill: T) -> Result<Vec<T>, MeshValidateError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| MeshValidateError::OutOfMemory(len))?;
    v.resize(len, fill);
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;

    #[test]
    fn missing_adjacency_is_a_hard_error() {
        let mut d = Diagnostics::new();
        let mut reporter = Reporter::new(Some(&mut d));
        let err = validate_no_bowties(&[0u32, 1, 2], 1, 3, None, &mut reporter).unwrap_err();
        assert_eq!(err, MeshValidateError::MissingAdjacency("BOWTIES"));
        assert!(d.is_empty());
    }

    #[test]
    fn two_isolated_triangles_sharing_a_vertex() {
        // Faces 0 and 1 touch only at vertex 0: the textbook bowtie.
        let indices = [0u32, 1, 2, 0, 3, 4];
        let adjacency = [UNUSED32; 6];
        let mut d = Diagnostics::new();
        let mut reporter = Reporter::new(Some(&mut d));
        validate_no_bowties(&indices, 2, 5, Some(&adjacency), &mut reporter).unwrap();
        assert_eq!(reporter.ensure_valid(), Err(MeshValidateError::InvalidTopology));
        assert_eq!(d.len(), 1);
        let msg = &d.messages()[0];
        assert!(msg.contains("vertex 0"));
        assert!(msg.contains("faces 1 and 0"));
    }

    #[test]
    fn edge_sharing_triangles_are_clean() {
        // Two triangles glued along edge (1, 2): one fan per shared vertex.
        let indices = [0u32, 1, 2, 2, 1, 3];
        let adjacency = [UNUSED32, 1, UNUSED32, 0, UNUSED32, UNUSED32];
        let mut d = Diagnostics::new();
        let mut reporter = Reporter::new(Some(&mut d));
        validate_no_bowties(&indices, 2, 4, Some(&adjacency), &mut reporter).unwrap();
        reporter.ensure_valid().unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn degenerate_faces_are_ignored() {
        // Face 1 is degenerate and would otherwise bowtie at vertex 0.
        let indices = [0u32, 1, 2, 0, 3, 3];
        let adjacency = [UNUSED32; 6];
        let mut d = Diagnostics::new();
        let mut reporter = Reporter::new(Some(&mut d));
        validate_no_bowties(&indices, 2, 4, Some(&adjacency), &mut reporter).unwrap();
        reporter.ensure_valid().unwrap();
    }
}
