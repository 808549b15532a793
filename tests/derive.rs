//! User-defined containers as first-class sources: `#[derive(Decompose)]`
//! wires a container's type-argument list into the conversion and mutation
//! machinery.

use tylist::{same_type, tlist, type_fn, Convert, Decompose, ListShape, Mutate, TupleShape};

#[derive(Decompose)]
#[allow(dead_code)]
struct Pair<A, B> {
    first: A,
    second: B,
}

#[derive(Decompose)]
#[allow(dead_code)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

#[derive(Decompose)]
struct Unit;

type_fn!(OptionOf => Option);

// The derive reifies the container's shape and argument list.
const _: () = assert!(same_type!(<Pair<u8, u16> as Decompose>::Shape, PairShape));
const _: () = assert!(same_type!(<Pair<u8, u16> as Decompose>::Args, tlist![u8, u16]));
const _: () = assert!(same_type!(<Unit as Decompose>::Args, tlist![]));

// Rebinds in and out of the derived container.
const _: () = assert!(same_type!(Convert<Pair<u8, u16>, TupleShape>, (u8, u16)));
const _: () = assert!(same_type!(Convert<(u8, u16), PairShape>, Pair<u8, u16>));
const _: () = assert!(same_type!(Convert<Pair<u8, u16>, ListShape>, tlist![u8, u16]));

// Containers with the same argument list interconvert.
const _: () = assert!(same_type!(
    Convert<Pair<u8, u16>, EitherShape>,
    Either<u8, u16>,
));
const _: () = assert!(same_type!(
    Convert<Convert<Either<u8, u16>, PairShape>, EitherShape>,
    Either<u8, u16>,
));

// Mutation keeps the derived container's own identity.
const _: () = assert!(same_type!(
    Mutate<Pair<u8, u16>, OptionOf>,
    Pair<Option<u8>, Option<u16>>,
));

// Mutation and conversion commute through derived containers too.
const _: () = assert!(same_type!(
    Convert<Mutate<Either<u8, u16>, OptionOf>, PairShape>,
    Mutate<Convert<Either<u8, u16>, PairShape>, OptionOf>,
));

#[test]
fn zero_parameter_container_round_trips() {
    assert!(same_type!(Convert<Unit, TupleShape>, ()));
    assert!(same_type!(Convert<tlist![], UnitShape>, Unit));
    assert!(same_type!(Mutate<Unit, OptionOf>, Unit));
}
