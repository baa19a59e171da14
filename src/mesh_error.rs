//! MeshValidateError: Unified error type for mesh-validate public APIs
//!
//! This error type is used throughout the mesh-validate library to provide
//! robust, non-panicking error handling for all public APIs.
//!
//! Outcomes form a tri-state: `Ok(())` means the mesh is topologically sound,
//! [`MeshValidateError::InvalidTopology`] means problems were found (and, if a
//! diagnostics sink was supplied, described there), and every other variant is
//! a hard error: bad arguments, overflow, allocation failure, or adjacency
//! data too inconsistent to traverse.

use thiserror::Error;

/// Unified error type for mesh-validate operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshValidateError {
    /// The index slice was empty; there is nothing to validate.
    #[error("no indices supplied")]
    MissingIndices,
    /// The vertex count was zero; every vertex index would be out of range.
    #[error("vertex count must be non-zero")]
    NoVertices,
    /// The index slice length is not a multiple of 3, so it cannot describe
    /// whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    IndexCountNotTriangular(usize),
    /// The adjacency slice does not have one entry per face corner.
    #[error("adjacency length {adjacency} does not match index length {indices}")]
    AdjacencyLengthMismatch { indices: usize, adjacency: usize },
    /// A check that depends on adjacency data was requested without it.
    #[error("adjacency information is required to check for {0}")]
    MissingAdjacency(&'static str),
    /// The face count does not fit the 32-bit index space used by adjacency.
    #[error("face count {0} overflows the 32-bit index space")]
    ArithmeticOverflow(usize),
    /// Scratch buffer allocation failed during bowtie detection.
    #[error("failed to allocate scratch memory for {0} entries")]
    OutOfMemory(usize),
    /// An adjacency entry names a face beyond the face count. Raised during
    /// traversal; the range scan reports the same condition as a diagnostic.
    #[error("adjacency for face {face} references out-of-range face {neighbor}")]
    NeighborOutOfRange { face: u32, neighbor: u32 },
    /// An adjacency entry links to a face that does not reference the pivot
    /// vertex the orbit is walking around.
    #[error("face {neighbor}, reached from face {face}, does not reference vertex {vertex}")]
    MissingPivotVertex { face: u32, neighbor: u32, vertex: u32 },
    /// An orbit walked more steps than there are faces without closing or
    /// hitting a boundary; the adjacency links are not symmetric.
    #[error("orbit around vertex {vertex} starting at face {face} does not terminate")]
    UnterminatedOrbit { face: u32, vertex: u32 },
    /// Topology problems were found. When a diagnostics sink was supplied it
    /// holds one message per problem; otherwise validation stopped at the
    /// first problem encountered.
    #[error("mesh topology is invalid")]
    InvalidTopology,
}

impl MeshValidateError {
    /// True for the recoverable outcome: the input was well-formed but its
    /// topology has defects the caller may repair and re-validate.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, MeshValidateError::InvalidTopology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offenders() {
        let err = MeshValidateError::MissingPivotVertex {
            face: 4,
            neighbor: 7,
            vertex: 12,
        };
        let msg = err.to_string();
        assert!(msg.contains('4') && msg.contains('7') && msg.contains("12"));
    }

    #[test]
    fn tri_state_classification() {
        assert!(MeshValidateError::InvalidTopology.is_validation_failure());
        assert!(!MeshValidateError::MissingAdjacency("BOWTIES").is_validation_failure());
        assert!(!MeshValidateError::ArithmeticOverflow(usize::MAX).is_validation_failure());
    }
}
