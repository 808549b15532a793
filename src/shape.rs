// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Container shapes: rebinding a type-argument list onto another container.
//!
//! A *shape* is the identity of a parameterized container with its arguments
//! stripped: what is left of `(A, B)` when `A, B` are taken away. The
//! language has no first-class spelling for that entity, so each shape is
//! reified as an uninhabited tag type:
//!
//! - [`ListShape`] for the native [`tlist!`](crate::tlist) containers,
//! - [`TupleShape`] for tuples of any supported arity,
//! - one generated tag per `#[derive(Decompose)]` container.
//!
//! Two traits connect shapes and their instances. [`Apply`] runs a shape
//! forward (arguments in, container out); [`Decompose`] runs an instance
//! backward into its shape and argument list. [`Convert`] composes the two:
//! decompose the source, discard its shape, apply the target shape to the
//! extracted arguments, order and arity intact.
//!
//! ```
//! use tylist::{same_type, tlist, Convert, ListShape, TupleShape};
//!
//! type L = tlist![u8, u16, u32];
//!
//! const _: () = assert!(same_type!(Convert<L, TupleShape>, (u8, u16, u32)));
//! const _: () = assert!(same_type!(Convert<(u8, u16), ListShape>, tlist![u8, u16]));
//! ```
//!
//! Applying a shape to an argument list whose arity it cannot take matches
//! no impl and fails during translation:
//!
//! ```compile_fail
//! use tylist::{tlist, Apply, TupleShape};
//!
//! // Tuple impls stop at arity 16.
//! fn probe(
//!     _: <TupleShape as Apply<tlist![
//!         u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8
//!     ]>>::Output,
//! ) {
//! }
//! ```

use crate::list::{TCons, TList, TNil};

/// A shape applied to an argument list: the fully-built container.
pub trait Apply<Args: TList> {
    /// The container built from `Args`.
    type Output;
}

/// Structural decomposition of a fully-applied container into its shape and
/// its ordered type-argument list.
///
/// Round-trip law: `<T::Shape as Apply<T::Args>>::Output` is `T`.
pub trait Decompose {
    /// The container's template identity.
    type Shape;
    /// The container's type arguments, in declaration order.
    type Args: TList;
}

/// Shape of the native list containers themselves.
///
/// A list is its own argument pack, so applying this shape is the identity
/// on lists.
pub enum ListShape {}

impl<Args: TList> Apply<Args> for ListShape {
    type Output = Args;
}

impl Decompose for TNil {
    type Shape = ListShape;
    type Args = TNil;
}

impl<Head, Tail: TList> Decompose for TCons<Head, Tail> {
    type Shape = ListShape;
    type Args = Self;
}

/// Shape of tuples, all arities under one tag.
pub enum TupleShape {}

tylist_macros::impl_tuple_shapes!(16);

/// The container obtained by applying `Target` to `Source`'s type arguments.
///
/// `Source`'s own shape is discarded; argument order and arity are
/// preserved. Converting back through the source's shape is the identity.
pub type Convert<Source, Target> = <Target as Apply<<Source as Decompose>::Args>>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{same_type, tlist};

    type L = tlist![u8, u16, u32];

    const _: () = assert!(same_type!(Convert<L, TupleShape>, (u8, u16, u32)));
    const _: () = assert!(same_type!(Convert<(u8, u16, u32), ListShape>, L));

    // A list converted to its own shape is itself.
    const _: () = assert!(same_type!(Convert<L, ListShape>, L));

    // Zero and one arity.
    const _: () = assert!(same_type!(Convert<tlist![], TupleShape>, ()));
    const _: () = assert!(same_type!(Convert<(), ListShape>, tlist![]));
    const _: () = assert!(same_type!(Convert<tlist![u8], TupleShape>, (u8,)));

    // Decomposition exposes shape and arguments separately.
    const _: () = assert!(same_type!(<(u8, u16) as Decompose>::Shape, TupleShape));
    const _: () = assert!(same_type!(<(u8, u16) as Decompose>::Args, tlist![u8, u16]));

    #[test]
    fn round_trip_is_identity() {
        assert!(same_type!(Convert<Convert<L, TupleShape>, ListShape>, L));
        assert!(same_type!(
            Convert<Convert<(u8, u16), ListShape>, TupleShape>,
            (u8, u16),
        ));
    }
}
