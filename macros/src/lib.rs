// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros backing the `tylist` type-level toolkit.
//!
//! Three macros live here:
//!
//! 1. **`nat!`**: spell a unary type-level number from an integer literal.
//!    `nat!(3)` expands to `S<S<S<Z>>>`. Usable anywhere a type is expected.
//! 2. **`impl_tuple_shapes!`**: emit the `Apply`/`Decompose` impls that make
//!    tuples first-class decomposable containers, one pair of impls per arity.
//!    Internal to `tylist` itself (the emitted paths start with `crate::`);
//!    invoked exactly once, from `src/shape.rs`.
//! 3. **`#[derive(Decompose)]`**: make a user-defined container decomposable.
//!    Generates an uninhabited `<Name>Shape` tag plus the `Apply` and
//!    `Decompose` impls wiring it to the container's type-argument list.
//!
//! All diagnostics go through [`syn::Error`], never a panic: a malformed
//! input surfaces as a regular compile error pointing at the offending token.
//!
//! The generated code names the host crate by its package name (`::tylist`),
//! so the derive and `nat!` require `tylist` itself as a dependency under
//! that name.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput, GenericParam, LitInt};

/// Expands an integer literal to the unary type-level number it denotes.
///
/// `nat!(0)` is `Z`; `nat!(n)` is `S<` applied `n` times to `Z`.
///
/// # Example
///
/// ```ignore
/// use tylist::{nat, tlist, At};
///
/// type Third = At<tlist![u8, u16, u32, u64], nat!(2)>; // u32
/// ```
#[proc_macro]
pub fn nat(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);
    let value: usize = match lit.base10_parse() {
        Ok(value) => value,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut ty = quote!(::tylist::Z);
    for _ in 0..value {
        ty = quote!(::tylist::S<#ty>);
    }
    ty.into()
}

/// Emits `Apply`/`Decompose` impls for tuples of arity `0..=n`.
///
/// For each arity the generated pair reads:
///
/// ```ignore
/// impl<T0, T1> crate::Apply<tlist![T0, T1]> for crate::TupleShape {
///     type Output = (T0, T1);
/// }
/// impl<T0, T1> crate::Decompose for (T0, T1) {
///     type Shape = crate::TupleShape;
///     type Args = tlist![T0, T1];
/// }
/// ```
///
/// Not useful outside the `tylist` crate: the emitted paths are `crate::`
/// relative, matching dialectic-style in-crate impl generation.
#[proc_macro]
pub fn impl_tuple_shapes(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);
    let max: usize = match lit.base10_parse() {
        Ok(value) => value,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut out = proc_macro2::TokenStream::new();
    for arity in 0..=max {
        let params: Vec<syn::Ident> = (0..arity).map(|i| format_ident!("T{}", i)).collect();

        let mut args = quote!(crate::TNil);
        for param in params.iter().rev() {
            args = quote!(crate::TCons<#param, #args>);
        }

        // `(T0,)` keeps the one-element tuple distinct from a parenthesized type.
        let tuple = quote!(( #(#params,)* ));
        let generics = if params.is_empty() {
            quote!()
        } else {
            quote!(<#(#params),*>)
        };

        out.extend(quote! {
            impl #generics crate::Apply<#args> for crate::TupleShape {
                type Output = #tuple;
            }

            impl #generics crate::Decompose for #tuple {
                type Shape = crate::TupleShape;
                type Args = #args;
            }
        });
    }
    out.into()
}

/// Derives `Decompose` (and the matching `Apply`) for a container type.
///
/// The container's type-argument list is its generic parameters in
/// declaration order; fields play no part. An uninhabited tag named
/// `<Name>Shape`, with the container's visibility, is emitted alongside the
/// impls to stand for the container's template identity.
///
/// Only pure type parameters are supported: a lifetime or const parameter has
/// no place in a type-argument list and is rejected with a compile error.
///
/// # Example
///
/// ```ignore
/// use tylist::{tlist, same_type, Convert, Decompose};
///
/// #[derive(Decompose)]
/// struct Pair<A, B> {
///     first: A,
///     second: B,
/// }
///
/// const _: () = assert!(same_type!(Convert<Pair<u8, u16>, PairShape>, Pair<u8, u16>));
/// ```
#[proc_macro_derive(Decompose)]
pub fn derive_decompose(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    for param in &input.generics.params {
        let unsupported = match param {
            GenericParam::Type(_) => continue,
            GenericParam::Lifetime(_) => "lifetime",
            GenericParam::Const(_) => "const",
        };
        return syn::Error::new_spanned(
            param,
            format!("Decompose supports type parameters only, found a {unsupported} parameter"),
        )
        .to_compile_error()
        .into();
    }

    let name = &input.ident;
    let vis = &input.vis;
    let shape = format_ident!("{}Shape", name);
    let params: Vec<&syn::Ident> = input.generics.type_params().map(|p| &p.ident).collect();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut args = quote!(::tylist::TNil);
    for param in params.iter().rev() {
        args = quote!(::tylist::TCons<#param, #args>);
    }

    let shape_doc = format!("Reified container shape of [`{name}`]. Uninhabited; type-level only.");
    quote! {
        #[doc = #shape_doc]
        #vis enum #shape {}

        impl #impl_generics ::tylist::Apply<#args> for #shape #where_clause {
            type Output = #name #ty_generics;
        }

        impl #impl_generics ::tylist::Decompose for #name #ty_generics #where_clause {
            type Shape = #shape;
            type Args = #args;
        }
    }
    .into()
}
