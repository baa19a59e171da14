//! `VertexIndex`: the two supported vertex index widths and their sentinel.
//!
//! A mesh picks one unsigned integer width (16- or 32-bit) for all of its
//! vertex indices. The all-bits-set value of that width is reserved as the
//! "unused" sentinel meaning "no vertex"; it is always accepted regardless of
//! the vertex count. Face ids and adjacency entries are 32-bit everywhere,
//! with [`UNUSED32`] as the matching "no neighbor" sentinel.
//!
//! The trait lets one generic validation and traversal implementation serve
//! both widths; the public entry points are thin monomorphic wrappers.

use std::fmt;

use num_traits::{PrimInt, Unsigned};

/// Reserved "no neighbor" sentinel for face ids and adjacency entries.
pub const UNUSED32: u32 = u32::MAX;

/// An unsigned vertex index width usable by the validators.
///
/// Implemented for `u16` and `u32` only; the adjacency side is always `u32`.
pub trait VertexIndex: PrimInt + Unsigned + fmt::Display + fmt::Debug + 'static {
    /// Reserved all-bits-set sentinel meaning "no vertex".
    const UNUSED: Self;

    /// Widen to a `usize` array position.
    fn as_usize(self) -> usize;

    /// Widen to the 32-bit space used by face ids and adjacency entries.
    fn as_u32(self) -> u32;

    /// True for the reserved sentinel value.
    #[inline]
    fn is_unused(self) -> bool {
        self == Self::UNUSED
    }
}

impl VertexIndex for u16 {
    const UNUSED: Self = u16::MAX;

    #[inline]
    fn as_usize(self) -> usize {
        usize::from(self)
    }

    #[inline]
    fn as_u32(self) -> u32 {
        u32::from(self)
    }
}

impl VertexIndex for u32 {
    const UNUSED: Self = u32::MAX;

    #[inline]
    fn as_usize(self) -> usize {
        self as usize
    }

    #[inline]
    fn as_u32(self) -> u32 {
        self
    }
}

#[cfg(test)]
mod layout_tests {
    //! Compile-time assertion that the sentinel convention lines up with the
    //! raw integer widths.
    use super::*;
    use static_assertions::const_assert_eq;

    const_assert_eq!(<u16 as VertexIndex>::UNUSED, u16::MAX);
    const_assert_eq!(<u32 as VertexIndex>::UNUSED, u32::MAX);
    const_assert_eq!(UNUSED32, u32::MAX);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_unused() {
        assert!(u16::MAX.is_unused());
        assert!(u32::MAX.is_unused());
        assert!(!0u16.is_unused());
        assert!(!0u32.is_unused());
    }

    #[test]
    fn widening() {
        assert_eq!(7u16.as_usize(), 7usize);
        assert_eq!(7u16.as_u32(), 7u32);
        assert_eq!(u16::MAX.as_u32(), 0xFFFF);
    }
}
