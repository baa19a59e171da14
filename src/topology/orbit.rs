//! Orbit traversal: walking the fan of triangles around a pivot vertex.
//!
//! The mesh's adjacency array encodes a graph over faces; the orbit iterator
//! is an explicit finite-state cursor over that graph. Given a starting face
//! and a pivot vertex referenced by it, the cursor repeatedly crosses the
//! adjacency edge incident to the pivot in the chosen rotational direction,
//! yielding each visited face together with the corner at which the pivot
//! sits in it.
//!
//! The walk terminates when it wraps around to the starting face (closed fan)
//! or when the active direction hits a mesh boundary. In
//! [`OrbitDirection::All`] mode a boundary does not end the walk: the cursor
//! resumes from the starting face in the opposite direction, so every face of
//! an open fan is still yielded exactly once (the starting face is not
//! yielded a second time).
//!
//! Items are `Result`s because adjacency data can lie: a neighbor entry may
//! point out of range, at a face that does not reference the pivot, or into a
//! cycle that never returns to the start. All three end the iteration with a
//! hard error.

use crate::mesh_error::MeshValidateError;
use crate::topology::index::{UNUSED32, VertexIndex};

/// Rotational direction of an orbit walk around the pivot vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitDirection {
    /// Cross the pivot's clockwise edge each step; stop at the first boundary.
    Clockwise,
    /// Cross the pivot's counter-clockwise edge; stop at the first boundary.
    CounterClockwise,
    /// Walk clockwise first; if a boundary interrupts the walk, resume
    /// counter-clockwise from the starting face. Covers boundary vertices.
    All,
}

/// A face together with the corner (0..=2) holding the orbit's pivot vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceCorner {
    pub face: u32,
    pub corner: u32,
}

/// Cursor over the triangle fan around one pivot vertex.
///
/// Yields `Result<FaceCorner, MeshValidateError>`; the first `Err` item also
/// ends the iteration.
#[derive(Debug)]
pub struct OrbitIterator<'a, I: VertexIndex> {
    indices: &'a [I],
    adjacency: &'a [u32],
    n_faces: usize,
    pivot: I,
    start_face: u32,
    start_corner: u32,
    face: u32,
    corner: u32,
    clockwise: bool,
    stop_on_boundary: bool,
    started: bool,
    done: bool,
    steps: usize,
}

impl<'a, I: VertexIndex> OrbitIterator<'a, I> {
    /// Positions the cursor at `start_face`, on the corner holding `pivot`.
    ///
    /// Fails if `start_face` is out of range or does not reference `pivot`.
    pub fn new(
        indices: &'a [I],
        adjacency: &'a [u32],
        start_face: u32,
        pivot: I,
        direction: OrbitDirection,
    ) -> Result<Self, MeshValidateError> {
        debug_assert_eq!(indices.len(), adjacency.len());
        let n_faces = indices.len() / 3;
        if start_face as usize >= n_faces {
            return Err(MeshValidateError::NeighborOutOfRange {
                face: start_face,
                neighbor: start_face,
            });
        }
        let start_corner = find_corner(indices, start_face, pivot).ok_or(
            MeshValidateError::MissingPivotVertex {
                face: start_face,
                neighbor: start_face,
                vertex: pivot.as_u32(),
            },
        )?;
        Ok(Self {
            indices,
            adjacency,
            n_faces,
            pivot,
            start_face,
            start_corner,
            face: start_face,
            corner: start_corner,
            clockwise: direction != OrbitDirection::CounterClockwise,
            stop_on_boundary: direction != OrbitDirection::All,
            started: false,
            done: false,
            steps: 0,
        })
    }

    /// The vertex this orbit walks around.
    pub fn pivot(&self) -> I {
        self.pivot
    }

    /// Advances the cursor to the next face of the fan.
    ///
    /// Returns `Ok(false)` when the fan is exhausted (wrapped to the start or
    /// out of boundaries to fall back across).
    fn step(&mut self) -> Result<bool, MeshValidateError> {
        loop {
            // A fan has at most n_faces distinct faces; more steps than that
            // means the adjacency links cycle without closing.
            if self.steps >= self.n_faces {
                return Err(MeshValidateError::UnterminatedOrbit {
                    face: self.start_face,
                    vertex: self.pivot.as_u32(),
                });
            }

            let edge = if self.clockwise {
                self.corner
            } else {
                (self.corner + 2) % 3
            };
            let neighbor = self.adjacency[self.face as usize * 3 + edge as usize];

            if neighbor == self.start_face {
                // Wrapped around: the fan is closed.
                self.done = true;
                return Ok(false);
            }

            if neighbor != UNUSED32 {
                if neighbor as usize >= self.n_faces {
                    return Err(MeshValidateError::NeighborOutOfRange {
                        face: self.face,
                        neighbor,
                    });
                }
                let corner = find_corner(self.indices, neighbor, self.pivot).ok_or(
                    MeshValidateError::MissingPivotVertex {
                        face: self.face,
                        neighbor,
                        vertex: self.pivot.as_u32(),
                    },
                )?;
                self.face = neighbor;
                self.corner = corner;
                self.steps += 1;
                return Ok(true);
            }

            // Boundary in the active direction.
            if self.clockwise && !self.stop_on_boundary {
                // Resume from the start face in the opposite direction; the
                // start face itself was already yielded.
                self.clockwise = false;
                self.face = self.start_face;
                self.corner = self.start_corner;
                continue;
            }
            self.done = true;
            return Ok(false);
        }
    }
}

impl<I: VertexIndex> Iterator for OrbitIterator<'_, I> {
    type Item = Result<FaceCorner, MeshValidateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(Ok(FaceCorner {
                face: self.face,
                corner: self.corner,
            }));
        }
        match self.step() {
            Ok(true) => Some(Ok(FaceCorner {
                face: self.face,
                corner: self.corner,
            })),
            Ok(false) => None,
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Locates the corner of `face` holding `pivot`, if any.
///
/// Degenerate faces may hold the pivot at two corners; the lowest one wins.
fn find_corner<I: VertexIndex>(indices: &[I], face: u32, pivot: I) -> Option<u32> {
    let base = face as usize * 3;
    (0..3u32).find(|&c| indices[base + c as usize] == pivot)
}
