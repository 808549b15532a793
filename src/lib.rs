//! Type-level list toolkit: search, index, convert and map over fixed-size
//! heterogeneous lists of types, entirely at compile time.
//!
//! Nothing in this crate exists at runtime. Every public type is
//! uninhabited, every operation resolves during translation, and the results
//! are themselves types or constants. The crate is `no_std` and depends on
//! `core` alone.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   list.rs   │────▶│   index.rs   │     │  search.rs   │
//! │ (TNil,TCons,│     │ (TypeAt, At) │     │ (contains!,  │
//! │   tlist!)   │     └──────────────┘     │  index_of!)  │
//! └─────────────┘     ┌──────────────┐     └──────────────┘
//!        │            │   find.rs    │            │
//!        ├───────────▶│ (Find)       │            ▼
//!        │            └──────────────┘     ┌──────────────┐
//!        ▼                                 │    cmp.rs    │
//! ┌─────────────┐     ┌──────────────┐     │ (same_type!) │
//! │  shape.rs   │────▶│    map.rs    │     └──────────────┘
//! │ (Apply,     │     │ (TypeFn, Map,│
//! │  Decompose, │     │  Mutate)     │
//! │  Convert)   │     └──────────────┘
//! ```
//!
//! | Module   | Facility                                                    |
//! |----------|-------------------------------------------------------------|
//! | `list`   | The tag container: `tlist![A, B, C]`, length, concatenation |
//! | `unary`  | Type-level numbers `Z`/`S<N>`, the index domain             |
//! | `index`  | `At<List, N>`: the type at a position (loud on overflow)    |
//! | `search` | `index_of!`/`contains!`: first-match position, membership   |
//! | `find`   | `Find`: membership as an inference-driven trait witness     |
//! | `cmp`    | `same_type!`: semantic type identity as a `const` bool      |
//! | `shape`  | `Convert`: rebind type arguments onto another container     |
//! | `map`    | `Mutate`: wrap each type argument, keep the container       |
//!
//! # Error taxonomy
//!
//! Failures are compile-time and fall in two classes. Positional overflow
//! ([`At`]), arity-incompatible application ([`Apply`]), and absent-target
//! witnesses ([`Find`]) are *loud*: no impl matches and translation stops.
//! Absence in [`index_of!`] and [`contains!`] is a *quiet*, ordinary value
//! (`None` / `false`).
//!
//! # Usage
//!
//! ```
//! use tylist::{contains, index_of, same_type, tlist, At, Convert, Mutate};
//! use tylist::{type_fn, TupleShape, U1};
//!
//! type Stages = tlist![u8, u16, u32];
//!
//! const _: () = assert!(contains!(u16, [u8, u16, u32]));
//! const _: () = assert!(matches!(index_of!(u32, [u8, u16, u32]), Some(2)));
//! const _: () = assert!(same_type!(At<Stages, U1>, u16));
//!
//! type_fn!(OptionOf => Option);
//!
//! const _: () = assert!(same_type!(Convert<Stages, TupleShape>, (u8, u16, u32)));
//! const _: () = assert!(same_type!(
//!     Mutate<Stages, OptionOf>,
//!     tlist![Option<u8>, Option<u16>, Option<u32>],
//! ));
//! ```

#![no_std]

// Module declarations
pub mod cmp;
pub mod find;
pub mod index;
pub mod list;
pub mod map;
pub mod search;
pub mod shape;
pub mod unary;

// Re-exports for public API
pub use cmp::TypeEq;
pub use find::{index_in, Find};
pub use index::{At, TypeAt};
pub use list::{length, Concat, TCons, TList, TNil};
pub use map::{Ident, Map, Mutate, TypeFn};
pub use shape::{Apply, Convert, Decompose, ListShape, TupleShape};
pub use unary::{Unary, S, Z};
pub use unary::{U0, U1, U10, U11, U12, U2, U3, U4, U5, U6, U7, U8, U9};

// Procedural macros from the member crate
pub use tylist_macros::{nat, Decompose};
