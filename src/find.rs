//! Membership as a trait witness: locate a target type within a list.
//!
//! `List: Find<Target, Index>` holds exactly when `Target` occupies position
//! `Index` of `List`. The index is usually left to inference:
//!
//! ```
//! use tylist::{index_in, tlist};
//!
//! type L = tlist![u8, u16, u32];
//!
//! assert_eq!(index_in::<L, u32, _>(), 2);
//! ```
//!
//! Absence is a hard failure, an unsatisfied bound, which makes `Find` the
//! right tool for constraining generic code ("this parameter must be one of
//! the listed types"):
//!
//! ```compile_fail
//! use tylist::{index_in, tlist};
//!
//! let _ = index_in::<tlist![u8, u16], u32, _>();
//! ```
//!
//! When the target occurs more than once, every occurrence is a valid
//! witness and inference cannot pick one; the call must name its index
//! explicitly (`index_in::<L, T, U2>()`). For a closed candidate list with
//! first-match-wins tie-breaking, use [`index_of!`](crate::index_of) instead.

use crate::list::{TCons, TList};
use crate::unary::{Unary, S, Z};

/// Witnesses that `Target` occupies position `Index` of the list.
pub trait Find<Target, Index: Unary>: TList {
    /// The witnessed position, as a constant.
    const INDEX: usize = Index::USIZE;
}

impl<Target, Tail: TList> Find<Target, Z> for TCons<Target, Tail> {}

impl<Target, Head, Tail, Index> Find<Target, S<Index>> for TCons<Head, Tail>
where
    Index: Unary,
    Tail: Find<Target, Index>,
{
}

/// The position of `Target` in `List`, found by inference.
///
/// Leave `Index` as `_` unless the target occurs more than once.
pub const fn index_in<List, Target, Index>() -> usize
where
    Index: Unary,
    List: Find<Target, Index>,
{
    <List as Find<Target, Index>>::INDEX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlist;
    use crate::unary::{U0, U2, U3};

    type L = tlist![u8, u16, u32, u64];

    const _: () = assert!(index_in::<L, u8, _>() == 0);
    const _: () = assert!(index_in::<L, u64, _>() == 3);

    // An explicit index disambiguates a repeated target.
    type Dup = tlist![u8, u16, u8];
    const _: () = assert!(index_in::<Dup, u8, U0>() == 0);
    const _: () = assert!(index_in::<Dup, u8, U2>() == 2);

    #[test]
    fn witness_constant_matches_annotation() {
        assert_eq!(<L as Find<u64, U3>>::INDEX, 3);
        assert_eq!(index_in::<L, u16, _>(), 1);
    }
}
