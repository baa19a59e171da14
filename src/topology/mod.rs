//! Topology primitives for indexed triangle meshes.
//!
//! This module provides the building blocks the validators operate on:
//! - The [`index::VertexIndex`] trait abstracting the two supported vertex
//!   index widths (u16, u32) and their shared sentinel convention
//! - The [`orbit::OrbitIterator`] cursor for walking the fan of triangles
//!   around a pivot vertex via adjacency links
//!
//! Everything here works over flat borrowed slices; there are no node objects
//! and no owned mesh representation.

pub mod index;
pub mod orbit;

pub use index::{UNUSED32, VertexIndex};
pub use orbit::{FaceCorner, OrbitDirection, OrbitIterator};
