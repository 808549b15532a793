//! Element-wise transformation of a container's type arguments.
//!
//! [`Mutate`] is the dual of [`Convert`](crate::Convert): where `Convert`
//! swaps the outer container and leaves the arguments alone, `Mutate` keeps
//! the source's own shape and rewrites every argument through a wrapper.
//! The two act on independent axes and commute.
//!
//! A wrapper is a single-argument container reified as a [`TypeFn`]
//! implementor; [`type_fn!`](crate::type_fn) declares one in a line.
//!
//! ```
//! use tylist::{same_type, tlist, type_fn, Mutate};
//!
//! type_fn!(OptionOf => Option);
//!
//! const _: () = assert!(same_type!(
//!     Mutate<tlist![u8, u16], OptionOf>,
//!     tlist![Option<u8>, Option<u16>],
//! ));
//! const _: () = assert!(same_type!(
//!     Mutate<(u8, u16), OptionOf>,
//!     (Option<u8>, Option<u16>),
//! ));
//! ```

use crate::list::{TCons, TList, TNil};
use crate::shape::{Apply, Decompose};

/// A reified type-level function: one input type, one output type.
///
/// Implemented by uninhabited tag types standing for single-argument
/// container templates (and by [`Ident`] for the identity).
pub trait TypeFn<Input> {
    /// The function's result on `Input`.
    type Output;
}

/// The identity wrapper: maps every type to itself.
pub enum Ident {}

impl<T> TypeFn<T> for Ident {
    type Output = T;
}

/// Applies `F` to every element of a type-level list, in order.
pub trait Map<F>: TList {
    /// The mapped list; same length, same order.
    type Output: TList;
}

impl<F> Map<F> for TNil {
    type Output = TNil;
}

impl<F, Head, Tail> Map<F> for TCons<Head, Tail>
where
    F: TypeFn<Head>,
    Tail: Map<F>,
{
    type Output = TCons<<F as TypeFn<Head>>::Output, <Tail as Map<F>>::Output>;
}

/// `Source` with every type argument wrapped by `F`, under `Source`'s own
/// shape.
///
/// Arity- and order-preserving. A wrapper that cannot take some argument
/// (no `TypeFn` impl) is a translation failure.
pub type Mutate<Source, F> = <<Source as Decompose>::Shape as Apply<
    <<Source as Decompose>::Args as Map<F>>::Output,
>>::Output;

/// Declares an uninhabited tag implementing [`TypeFn`] for a single-argument
/// container.
///
/// `type_fn!(VecOf => Vec)` declares `VecOf`, whose application to any `T`
/// is `Vec<T>`. The constructor must be a bare identifier; bring a path into
/// scope with `use` first.
#[macro_export]
macro_rules! type_fn {
    ($(#[$attr:meta])* $vis:vis $Name:ident => $Constructor:ident) => {
        $(#[$attr])*
        $vis enum $Name {}

        impl<T> $crate::TypeFn<T> for $Name {
            type Output = $Constructor<T>;
        }
    };
}
