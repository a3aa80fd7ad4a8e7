//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{Attribute, DeriveInput, LitInt, LitStr, parse_macro_input};

/// Derive macro implementing `Solver` by dispatching to `PartSolver<N>` impls
///
/// # Attributes
///
/// - `max_parts`: Required. Number of parts; part `k` in `1..=max_parts` is
///   routed to `<Self as PartSolver<k>>::solve`, any other part returns
///   `SolveError::PartOutOfRange`.
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocParser, AocSolver, PartSolver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day5;
///
/// impl AocParser for Day5 { /* ... */ }
/// impl PartSolver<1> for Day5 { /* ... */ }
/// impl PartSolver<2> for Day5 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Submits an `aoc_solver::SolverPlugin` to `inventory`, so
/// `SolverRegistryBuilder::register_all_plugins` finds the solver in any
/// binary that links the defining crate.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["easy", "parsing"])
///
/// The type must be a unit struct implementing `Solver`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2023, day = 7, tags = ["2023", "sorting"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn find_attr<'a>(input: &'a DeriveInput, name: &str) -> syn::Result<&'a Attribute> {
    input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident(name))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                format!("missing required #[{name}(...)] attribute"),
            )
        })
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let attr = find_attr(input, "aoc_solver")?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: LitInt = meta.value()?.parse()?;
            max_parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    })?;

    let max_parts = max_parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `max_parts`"))?;
    if max_parts == 0 {
        return Err(syn::Error::new_spanned(attr, "`max_parts` must be at least 1"));
    }

    let arms = (1..=max_parts).map(|part| {
        let part = Literal::u8_unsuffixed(part);
        quote! {
            #part => <Self as ::aoc_solver::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartOutOfRange(part)),
                }
            }
        }
    })
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr = find_attr(input, "aoc")?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: LitInt = meta.value()?.parse()?;
            let parsed: u8 = value.base10_parse()?;
            if !(1..=25).contains(&parsed) {
                return Err(syn::Error::new_spanned(value, "day must be in 1..=25"));
            }
            day = Some(parsed);
        } else if meta.path.is_ident("tags") {
            let content;
            meta.value()?;
            syn::bracketed!(content in meta.input);
            let list = content.parse_terminated(|input| input.parse::<LitStr>(), syn::Token![,])?;
            tags.extend(list);
        } else {
            return Err(meta.error("unsupported aoc attribute, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day`"))?;

    Ok(quote! {
        // Surfaces a missing `Solver` impl at the derive site instead of inside inventory
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
