// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks: inductive type-level lists.
//!
//! A list of types is spelled flat with [`tlist!`] and encoded inductively as
//! nested [`TCons`] nodes terminated by [`TNil`]:
//!
//! ```
//! use tylist::{same_type, tlist, TCons, TNil};
//!
//! const _: () = assert!(same_type!(
//!     tlist![u8, u16, u32],
//!     TCons<u8, TCons<u16, TCons<u32, TNil>>>,
//! ));
//! ```
//!
//! Lists exist only at the type level. Both node types are uninhabited, so
//! any attempt to obtain a value of one is rejected during translation:
//!
//! ```compile_fail
//! use tylist::{TCons, TNil};
//!
//! // There is no constructor: the fields are private and one is uninhabited.
//! let node = TCons::<u8, TNil> {};
//! ```

use core::convert::Infallible;
use core::marker::PhantomData;

use crate::unary::{Unary, S, Z};

/// The empty type-level list.
///
/// Uninhabited: it classifies an empty sequence of types and nothing else.
pub enum TNil {}

/// A non-empty type-level list: `Head` followed by the list `Tail`.
///
/// Uninhabited, like [`TNil`]; the `Infallible` member forecloses
/// construction even inside this crate.
pub struct TCons<Head, Tail> {
    _marker: PhantomData<(Head, Tail)>,
    _never: Infallible,
}

/// Well-formed type-level lists: [`TNil`], or [`TCons`] with a well-formed
/// tail.
///
/// Carries the list length both as a unary type ([`TList::Len`]) and as a
/// `usize` constant ([`TList::LEN`]).
pub trait TList {
    /// The length as a type-level number, for index arithmetic.
    type Len: Unary;

    /// The length as a constant.
    const LEN: usize;
}

impl TList for TNil {
    type Len = Z;
    const LEN: usize = 0;
}

impl<Head, Tail: TList> TList for TCons<Head, Tail> {
    type Len = S<Tail::Len>;
    const LEN: usize = 1 + Tail::LEN;
}

/// Type-level list concatenation.
///
/// `<Lhs as Concat<Rhs>>::Output` is `Lhs` followed by `Rhs`, preserving the
/// order of both.
pub trait Concat<Rhs>: TList {
    /// The concatenated list.
    type Output: TList;
}

impl<Rhs: TList> Concat<Rhs> for TNil {
    type Output = Rhs;
}

impl<Head, Tail, Rhs> Concat<Rhs> for TCons<Head, Tail>
where
    Tail: Concat<Rhs>,
    Rhs: TList,
{
    type Output = TCons<Head, <Tail as Concat<Rhs>>::Output>;
}

/// The length of a list, as a plain function of its type.
///
/// ```
/// use tylist::{length, tlist};
///
/// const _: () = assert!(length::<tlist![u8, u16, u32]>() == 3);
/// const _: () = assert!(length::<tlist![]>() == 0);
/// ```
pub const fn length<List: TList>() -> usize {
    List::LEN
}

/// Spells a type-level list flat: `tlist![A, B, C]`.
///
/// Expands to the nested [`TCons`]/[`TNil`] encoding. An empty invocation is
/// [`TNil`] itself.
#[macro_export]
macro_rules! tlist {
    () => { $crate::TNil };
    ($Head:ty $(, $Rest:ty)* $(,)?) => {
        $crate::TCons<$Head, $crate::tlist!($($Rest),*)>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::same_type;

    type Three = tlist![u8, u16, u32];

    const _: () = assert!(Three::LEN == 3);
    const _: () = assert!(TNil::LEN == 0);
    const _: () = assert!(<tlist![(), (), (), ()]>::LEN == 4);

    // Repeated element types are a legal list; length counts positions, not
    // distinct types.
    const _: () = assert!(<tlist![u8, u8, u8]>::LEN == 3);

    const _: () = assert!(same_type!(<Three as TList>::Len, crate::unary::U3));

    const _: () = assert!(same_type!(<TNil as Concat<Three>>::Output, Three));
    const _: () = assert!(same_type!(<Three as Concat<TNil>>::Output, Three));
    const _: () = assert!(same_type!(
        <tlist![u8] as Concat<tlist![u16, u32]>>::Output,
        Three,
    ));

    #[test]
    fn length_matches_len() {
        assert_eq!(length::<Three>(), 3);
        assert_eq!(length::<tlist![]>(), 0);
        assert_eq!(length::<Three>(), Three::LEN);
    }

    #[test]
    fn concat_lengths_add() {
        assert_eq!(
            length::<<Three as Concat<tlist![u64, i64]>>::Output>(),
            length::<Three>() + 2
        );
    }
}
