//! Per-face index scan: range checks, degenerate triangles, duplicate
//! neighbors.
//!
//! Faces are visited in index order; within a face the checks run in a fixed
//! order (vertex range, neighbor range per corner, then degenerate, then
//! duplicate neighbor), so both the message order and the identity of the
//! first problem in fail-fast mode are deterministic.

use itertools::Itertools;

use crate::mesh_error::MeshValidateError;
use crate::topology::index::{UNUSED32, VertexIndex};
use crate::validate::{Reporter, ValidateFlags};

/// Scans every face's vertex and neighbor entries.
///
/// Range violations are always reported. The degenerate and
/// duplicate-neighbor checks are gated on [`ValidateFlags::DEGENERATE`] and
/// [`ValidateFlags::BACKFACING`]; the latter is a hard error without
/// adjacency. Degenerate faces skip the duplicate-neighbor check; their
/// adjacency entries carry no meaning.
pub(crate) fn validate_indices<I: VertexIndex>(
    indices: &[I],
    n_faces: usize,
    n_verts: usize,
    adjacency: Option<&[u32]>,
    flags: ValidateFlags,
    reporter: &mut Reporter<'_>,
) -> Result<(), MeshValidateError> {
    if flags.contains(ValidateFlags::BACKFACING) && adjacency.is_none() {
        return Err(MeshValidateError::MissingAdjacency("BACKFACING"));
    }

    for face in 0..n_faces {
        let base = face * 3;

        for corner in 0..3 {
            let i = indices[base + corner];
            if i.as_usize() >= n_verts && !i.is_unused() {
                reporter.report(format!("invalid vertex index {i} on face {face}"))?;
            }

            if let Some(adj) = adjacency {
                let j = adj[base + corner];
                if j as usize >= n_faces && j != UNUSED32 {
                    reporter.report(format!("invalid neighbor index {j} on face {face}"))?;
                }
            }
        }

        let repeated = indices[base..base + 3]
            .iter()
            .copied()
            .tuple_combinations::<(I, I)>()
            .find(|(a, b)| a == b)
            .map(|(a, _)| a);
        if let Some(v) = repeated {
            if flags.contains(ValidateFlags::DEGENERATE) {
                reporter.report(format!("vertex {v} appears more than once in face {face}"))?;
            }
            continue;
        }

        if flags.contains(ValidateFlags::BACKFACING) {
            if let Some(adj) = adjacency {
                let duplicated = adj[base..base + 3]
                    .iter()
                    .copied()
                    .tuple_combinations::<(u32, u32)>()
                    .find(|&(a, b)| a == b && a != UNUSED32)
                    .map(|(a, _)| a);
                if let Some(n) = duplicated {
                    reporter.report(format!(
                        "neighbor face {n} appears more than once on face {face} \
                         (two triangles likely share the same points with opposite winding)"
                    ))?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;

    fn scan(
        indices: &[u32],
        n_verts: usize,
        adjacency: Option<&[u32]>,
        flags: ValidateFlags,
        sink: &mut Diagnostics,
    ) -> Result<(), MeshValidateError> {
        let mut reporter = Reporter::new(Some(sink));
        validate_indices(
            indices,
            indices.len() / 3,
            n_verts,
            adjacency,
            flags,
            &mut reporter,
        )?;
        reporter.ensure_valid()
    }

    #[test]
    fn clean_triangle_passes() {
        let mut d = Diagnostics::new();
        scan(&[0, 1, 2], 3, None, ValidateFlags::empty(), &mut d).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn sentinel_vertex_is_in_range() {
        let mut d = Diagnostics::new();
        scan(&[0, 1, u32::MAX], 2, None, ValidateFlags::empty(), &mut d).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn one_message_per_invalid_corner() {
        let mut d = Diagnostics::new();
        let err = scan(&[9, 1, 8, 0, 1, 2], 3, None, ValidateFlags::empty(), &mut d).unwrap_err();
        assert_eq!(err, MeshValidateError::InvalidTopology);
        assert_eq!(d.len(), 2);
        assert!(d.iter().all(|m| m.contains("face 0")));
    }

    #[test]
    fn degenerate_gated_on_flag() {
        let mut d = Diagnostics::new();
        scan(&[0, 0, 1], 2, None, ValidateFlags::empty(), &mut d).unwrap();

        let err = scan(&[0, 0, 1], 2, None, ValidateFlags::DEGENERATE, &mut d).unwrap_err();
        assert_eq!(err, MeshValidateError::InvalidTopology);
        assert_eq!(d.len(), 1);
        assert!(d.messages()[0].contains("vertex 0"));
    }

    #[test]
    fn backfacing_needs_adjacency() {
        let mut d = Diagnostics::new();
        let err = scan(&[0, 1, 2], 3, None, ValidateFlags::BACKFACING, &mut d).unwrap_err();
        assert_eq!(err, MeshValidateError::MissingAdjacency("BACKFACING"));
        // Hard errors never land in the sink.
        assert!(d.is_empty());
    }

    #[test]
    fn duplicate_neighbor_reported_per_face() {
        // Two triangles over the same three points with opposite winding:
        // every edge of each face borders the other face.
        let indices = [0u32, 1, 2, 2, 1, 0];
        let adjacency = [1u32, 1, 1, 0, 0, 0];
        let mut d = Diagnostics::new();
        let err = scan(
            &indices,
            3,
            Some(&adjacency),
            ValidateFlags::BACKFACING,
            &mut d,
        )
        .unwrap_err();
        assert_eq!(err, MeshValidateError::InvalidTopology);
        assert_eq!(d.len(), 2);
        assert!(d.messages()[0].contains("neighbor face 1"));
        assert!(d.messages()[1].contains("neighbor face 0"));
    }

    #[test]
    fn degenerate_face_skips_duplicate_neighbor_check() {
        let indices = [0u32, 0, 1];
        let adjacency = [5u32, 5, UNUSED32];
        let mut d = Diagnostics::new();
        // Neighbor 5 is out of range too, so expect exactly those two range
        // messages and no duplicate-neighbor message.
        let err = scan(
            &indices,
            2,
            Some(&adjacency),
            ValidateFlags::BACKFACING,
            &mut d,
        )
        .unwrap_err();
        assert_eq!(err, MeshValidateError::InvalidTopology);
        assert_eq!(d.len(), 2);
        assert!(d.iter().all(|m| m.contains("invalid neighbor index 5")));
    }
}
