//! # mesh-validate
//!
//! mesh-validate checks the topology of indexed triangle meshes before they are
//! handed to downstream processing (optimization, cleaning, export). It validates
//! vertex and neighbor-face index ranges, flags degenerate triangles and
//! duplicated neighbor references (two triangles sharing the same three points
//! with opposite winding), and detects bowtie vertices, i.e. vertices claimed by two
//! or more disconnected fans of triangles.
//!
//! ## Features
//! - One generic validation pipeline instantiated for 16-bit and 32-bit vertex
//!   indices ([`validate_u16`], [`validate_u32`])
//! - Orbit traversal primitive over flat index/adjacency arrays
//!   ([`topology::orbit::OrbitIterator`]) for walking a vertex's triangle fan
//! - Optional diagnostics accumulation: pass a [`Diagnostics`] sink to collect
//!   every problem, or omit it to fail fast on the first one
//! - Scratch memory sized once up front from the face and vertex counts; no
//!   allocation during traversal
//!
//! ## Determinism
//!
//! Faces are visited in index order and messages are appended in discovery
//! order, so repeated runs over the same input produce identical diagnostics.
//!
//! ## Usage
//! ```rust
//! use mesh_validate::prelude::*;
//!
//! // One triangle, three distinct vertices, no adjacency.
//! let indices: [u32; 3] = [0, 1, 2];
//! let mut msgs = Diagnostics::new();
//! validate_u32(&indices, 3, None, ValidateFlags::DEGENERATE, Some(&mut msgs)).unwrap();
//! assert!(msgs.is_empty());
//! ```
//!
//! Adjacency construction and mesh repair are out of scope; this crate assumes
//! adjacency (when supplied) was computed elsewhere with the usual convention:
//! entry `face * 3 + e` names the neighbor across the edge from corner `e` to
//! corner `(e + 1) % 3`, with [`topology::index::UNUSED32`] marking a boundary.

pub mod diagnostics;
pub mod mesh_error;
pub mod topology;
pub mod validate;

pub use diagnostics::Diagnostics;
pub use mesh_error::MeshValidateError;
pub use validate::{ValidateFlags, validate_u16, validate_u32};

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::diagnostics::Diagnostics;
    pub use crate::mesh_error::MeshValidateError;
    pub use crate::topology::index::{UNUSED32, VertexIndex};
    pub use crate::topology::orbit::{FaceCorner, OrbitDirection, OrbitIterator};
    pub use crate::validate::{ValidateFlags, validate_u16, validate_u32};
}
