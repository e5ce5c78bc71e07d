//! Procedural macros for the advent-solver library

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::parse::Parse;
use syn::{DeriveInput, Error, LitInt, LitStr, parse_macro_input};

/// Registers a `Puzzle` type with the plugin system
///
/// # Attributes
///
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. String literals used for filtering, e.g. `["grid", "simulation"]`
///
/// The expansion names `PuzzleRegistryBuilder::register::<Self>`, so a type
/// that does not implement `Puzzle` fails to compile there.
///
/// # Example
///
/// ```ignore
/// #[derive(RegisterPuzzle)]
/// #[puzzle(day = 1, tags = ["search"])]
/// pub struct Solver;
///
/// impl Puzzle for Solver { /* ... */ }
/// ```
#[proc_macro_derive(RegisterPuzzle, attributes(puzzle))]
pub fn derive_register_puzzle(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_register_puzzle(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

struct PuzzleAttr {
    day: u8,
    tags: Vec<String>,
}

fn parse_puzzle_attr(input: &DeriveInput) -> syn::Result<PuzzleAttr> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            Error::new_spanned(&input.ident, "RegisterPuzzle requires #[puzzle(day = N)]")
        })?;

    let mut day: Option<u8> = None;
    let mut tags = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(Error::new_spanned(lit, "day must be within 1..=25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let content;
            let _ = meta.value()?;
            syn::bracketed!(content in meta.input);
            let lits = content.parse_terminated(<LitStr as Parse>::parse, syn::Token![,])?;
            tags.extend(lits.iter().map(LitStr::value));
        } else {
            return Err(meta.error("unsupported puzzle attribute"));
        }
        Ok(())
    })?;

    let day = day.ok_or_else(|| Error::new_spanned(attr, "missing required `day`"))?;
    Ok(PuzzleAttr { day, tags })
}

fn expand_register_puzzle(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "RegisterPuzzle does not support generic types",
        ));
    }

    let name = &input.ident;
    let PuzzleAttr { day, tags } = parse_puzzle_attr(input)?;
    let day = Literal::u8_unsuffixed(day);

    Ok(quote! {
        ::advent_solver::inventory::submit! {
            ::advent_solver::PuzzlePlugin {
                day: #day,
                tags: &[#(#tags),*],
                register: ::advent_solver::PuzzleRegistryBuilder::register::<#name>,
            }
        }
    })
}
