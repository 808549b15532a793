//! Positional lookup: resolve the type at a given index of a list.
//!
//! [`TypeAt`] peels the list recursively: index [`Z`](crate::Z) resolves the
//! head, `S<N>` drops the head and recurses on the tail with `N`. The alias
//! [`At`] is the usual spelling:
//!
//! ```
//! use tylist::{same_type, tlist, At, U0, U3};
//!
//! type L = tlist![u8, u16, u32, u64];
//!
//! const _: () = assert!(same_type!(At<L, U0>, u8));
//! const _: () = assert!(same_type!(At<L, U3>, u64));
//! ```
//!
//! An index at or past the end of the list matches no impl, so resolution
//! fails during translation. This is the loud half of the error taxonomy;
//! contrast [`index_of!`](crate::index_of), whose not-found result is an
//! ordinary value.
//!
//! ```compile_fail
//! use tylist::{tlist, At, U2};
//!
//! fn probe(_: At<tlist![u8, u16], U2>) {}
//! ```

use crate::list::{TCons, TList};
use crate::unary::{Unary, S, Z};

/// Resolves the element at position `N` of a type-level list.
pub trait TypeAt<N: Unary>: TList {
    /// The element at position `N`.
    type Output;
}

impl<Head, Tail: TList> TypeAt<Z> for TCons<Head, Tail> {
    type Output = Head;
}

impl<N: Unary, Head, Tail: TypeAt<N>> TypeAt<S<N>> for TCons<Head, Tail> {
    type Output = <Tail as TypeAt<N>>::Output;
}

/// The type at position `N` of `List`, zero-based.
pub type At<List, N> = <List as TypeAt<N>>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::{U0, U1, U2, U3};
    use crate::{same_type, tlist};

    type L = tlist![u8, u16, u32, u64];

    const _: () = assert!(same_type!(At<L, U0>, u8));
    const _: () = assert!(same_type!(At<L, U1>, u16));
    const _: () = assert!(same_type!(At<L, U3>, u64));

    // Duplicates occupy distinct positions.
    const _: () = assert!(same_type!(At<tlist![u8, u8, u16], U1>, u8));

    // Qualified form and alias agree.
    const _: () = assert!(same_type!(<L as TypeAt<U2>>::Output, At<L, U2>));

    #[test]
    fn single_element_list() {
        assert!(same_type!(At<tlist![i64], U0>, i64));
        assert!(!same_type!(At<tlist![i64], U0>, u64));
    }
}
