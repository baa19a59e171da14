//! Validation entry points and orchestration.
//!
//! Two public entry points, [`validate_u16`] and [`validate_u32`], wrap one
//! generic pipeline: argument screening, the per-face index scan, and,
//! when requested, bowtie detection.
//!
//! Reporting runs in one of two modes selected by the optional
//! [`Diagnostics`] argument. With a sink, every problem is recorded and the
//! scan runs to completion; without one, validation stops at the first
//! problem. Both modes share the same detection code via the internal
//! `Reporter`, which only decides what happens when a problem is reported.

pub(crate) mod bowties;
pub(crate) mod indices;

use crate::diagnostics::Diagnostics;
use crate::mesh_error::MeshValidateError;
use crate::topology::index::VertexIndex;

bitflags::bitflags! {
    /// Selects which optional topology checks to run.
    ///
    /// Index and neighbor range checks always run; these flags gate the
    /// checks that are either opinionated (degenerate triangles are legal in
    /// many pipelines) or need adjacency data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ValidateFlags: u32 {
        /// Report triangles whose three vertex indices are not pairwise
        /// distinct.
        const DEGENERATE = 0b0000_0001;
        /// Report faces listing the same neighbor on two edges, the signature
        /// of two triangles sharing the same points with opposite winding.
        /// Requires adjacency.
        const BACKFACING = 0b0000_0010;
        /// Report vertices claimed by two or more disconnected triangle fans.
        /// Requires adjacency.
        const BOWTIES = 0b0000_0100;
    }
}

/// Shared reporting strategy for both validation modes.
///
/// `report` appends to the sink and lets the scan continue; with no sink it
/// returns [`MeshValidateError::InvalidTopology`] so the caller's `?` stops
/// the scan at the first problem.
pub(crate) struct Reporter<'a> {
    sink: Option<&'a mut Diagnostics>,
    failed: bool,
}

impl<'a> Reporter<'a> {
    pub(crate) fn new(sink: Option<&'a mut Diagnostics>) -> Self {
        Self {
            sink,
            failed: false,
        }
    }

    /// Records one topology problem.
    pub(crate) fn report(&mut self, msg: String) -> Result<(), MeshValidateError> {
        self.failed = true;
        match self.sink.as_deref_mut() {
            Some(sink) => {
                sink.push(msg);
                Ok(())
            }
            None => Err(MeshValidateError::InvalidTopology),
        }
    }

    /// Fails if any problem has been reported so far.
    pub(crate) fn ensure_valid(&self) -> Result<(), MeshValidateError> {
        if self.failed {
            Err(MeshValidateError::InvalidTopology)
        } else {
            Ok(())
        }
    }
}

/// Validates a triangle mesh with 16-bit vertex indices.
///
/// See [`validate_u32`]; the contracts are identical.
pub fn validate_u16(
    indices: &[u16],
    n_verts: usize,
    adjacency: Option<&[u32]>,
    flags: ValidateFlags,
    msgs: Option<&mut Diagnostics>,
) -> Result<(), MeshValidateError> {
    validate_impl(indices, n_verts, adjacency, flags, msgs)
}

/// Validates a triangle mesh with 32-bit vertex indices.
///
/// `indices` holds three entries per face; `adjacency`, when present, holds
/// one neighbor face id per face edge (entry `face * 3 + e` is the neighbor
/// across the edge from corner `e` to corner `(e + 1) % 3`), with
/// [`crate::topology::index::UNUSED32`] marking boundaries. Vertex entries
/// equal to the all-bits-set sentinel are accepted as "no vertex".
///
/// Returns `Ok(())` for a sound mesh,
/// [`MeshValidateError::InvalidTopology`] when problems were found (described
/// in `msgs` if supplied), and any other variant for hard errors: bad
/// arguments, a face count overflowing the 32-bit index space, scratch
/// allocation failure, or adjacency too inconsistent to traverse.
pub fn validate_u32(
    indices: &[u32],
    n_verts: usize,
    adjacency: Option<&[u32]>,
    flags: ValidateFlags,
    msgs: Option<&mut Diagnostics>,
) -> Result<(), MeshValidateError> {
    validate_impl(indices, n_verts, adjacency, flags, msgs)
}

fn validate_impl<I: VertexIndex>(
    indices: &[I],
    n_verts: usize,
    adjacency: Option<&[u32]>,
    flags: ValidateFlags,
    mut msgs: Option<&mut Diagnostics>,
) -> Result<(), MeshValidateError> {
    if indices.is_empty() {
        return Err(MeshValidateError::MissingIndices);
    }
    if n_verts == 0 {
        return Err(MeshValidateError::NoVertices);
    }
    if indices.len() % 3 != 0 {
        return Err(MeshValidateError::IndexCountNotTriangular(indices.len()));
    }
    let n_faces = indices.len() / 3;
    if n_faces as u64 * 3 > u64::from(u32::MAX) {
        return Err(MeshValidateError::ArithmeticOverflow(n_faces));
    }
    if let Some(adj) = adjacency {
        if adj.len() != indices.len() {
            return Err(MeshValidateError::AdjacencyLengthMismatch {
                indices: indices.len(),
                adjacency: adj.len(),
            });
        }
    }

    if let Some(sink) = msgs.as_deref_mut() {
        sink.clear();
    }
    log::debug!(
        "validating {n_faces} faces / {n_verts} vertices (adjacency: {}, flags: {flags:?})",
        adjacency.is_some(),
    );

    let mut reporter = Reporter::new(msgs);

    indices::validate_indices(indices, n_faces, n_verts, adjacency, flags, &mut reporter)?;
    // Bowtie detection orbits over adjacency; it is only safe once every
    // index and neighbor entry has passed the range scan.
    reporter.ensure_valid()?;

    if flags.contains(ValidateFlags::BOWTIES) {
        bowties::validate_no_bowties(indices, n_faces, n_verts, adjacency, &mut reporter)?;
    }

    reporter.ensure_valid()
}
