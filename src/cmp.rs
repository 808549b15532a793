// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type identity as a compile-time boolean.
//!
//! [`same_type!`] resolves to `true` when its two operands name the same
//! type, `false` otherwise, and is usable in any constant context:
//!
//! ```
//! use tylist::same_type;
//!
//! type Byte = u8;
//!
//! const _: () = assert!(same_type!(u8, Byte)); // aliases resolve
//! const _: () = assert!(!same_type!(u8, i8));
//! ```
//!
//! # Mechanism
//!
//! Associated-constant lookup prefers inherent impls over trait impls. The
//! inherent `SAME` on [`TypeEq`] exists only at `TypeEq<T, T>`; every other
//! instantiation falls back to the blanket trait constant, which is `false`.
//! The comparison is therefore semantic (aliases and projections are
//! normalized first), not textual.
//!
//! # Scope of the judgment
//!
//! Identity is judged where the macro is expanded. Inside a generic item, a
//! type parameter `T` is equal to itself and distinct from any concrete
//! type, even at instantiations where the two coincide:
//!
//! ```
//! use tylist::same_type;
//!
//! fn probe<T>() -> bool {
//!     same_type!(T, u8)
//! }
//!
//! // The body was judged with `T` opaque.
//! assert!(!probe::<u8>());
//! ```

use core::convert::Infallible;
use core::marker::PhantomData;

/// Carrier for the identity judgment on its two parameters.
///
/// Uninhabited; only the associated constant resolved against it matters.
/// Prefer [`same_type!`], which supplies the fallback import.
pub struct TypeEq<Lhs: ?Sized, Rhs: ?Sized> {
    _lhs: PhantomData<Lhs>,
    _rhs: PhantomData<Rhs>,
    _never: Infallible,
}

/// Fallback judgment for distinct parameters. Must be in scope for
/// [`same_type!`] to resolve; the macro imports it itself.
#[doc(hidden)]
pub trait NotEq {
    const SAME: bool = false;
}

impl<Lhs: ?Sized, Rhs: ?Sized> NotEq for TypeEq<Lhs, Rhs> {}

impl<T: ?Sized> TypeEq<T, T> {
    /// Judgment for identical parameters; shadows the fallback.
    pub const SAME: bool = true;
}

/// Resolves to `true` when the two operand types are the same type.
///
/// Evaluable in `const` position; see the [module docs](crate::cmp) for the
/// scope of the judgment.
#[macro_export]
macro_rules! same_type {
    ($Lhs:ty, $Rhs:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::cmp::NotEq as _;
        <$crate::cmp::TypeEq<$Lhs, $Rhs>>::SAME
    }};
}

#[cfg(test)]
mod tests {
    const _: () = assert!(same_type!(u8, u8));
    const _: () = assert!(!same_type!(u8, u16));
    const _: () = assert!(same_type!(&'static str, &'static str));
    const _: () = assert!(!same_type!(&'static str, str));

    // Unsized operands are fine.
    const _: () = assert!(same_type!(str, str));
    const _: () = assert!(same_type!([u8], [u8]));
    const _: () = assert!(!same_type!([u8], [u16]));

    // Generic arguments participate in the judgment.
    const _: () = assert!(same_type!(Option<u8>, Option<u8>));
    const _: () = assert!(!same_type!(Option<u8>, Option<u16>));

    type Alias = Option<u8>;
    const _: () = assert!(same_type!(Alias, Option<u8>));

    #[test]
    fn judgment_is_usable_at_runtime_too() {
        assert!(same_type!((), ()));
        assert!(!same_type!((), (u8,)));
    }
}
