//! Derive macros for the module-store framework
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `module_store_core::action::Action` for action enums
//!
//! # Example
//!
//! ```ignore
//! use module_store_core::action::Action as _;
//! use module_store_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     StartNew,
//!     #[action(name = "toggle")]
//!     ToggleDone { id: u32, done: bool },
//! }
//!
//! assert_eq!(TodoAction::StartNew.name(), "StartNew");
//! assert_eq!(TodoAction::ToggleDone { id: 1, done: true }.name(), "toggle");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derive macro for Action enums
///
/// Implements `Action::name()`, returning the variant name.
///
/// # Attributes
///
/// - `#[action(name = "...")]` - Override the name reported for a variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute is malformed
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut name_arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let reported = match name_override(&variant.attrs) {
            Ok(Some(reported)) => reported,
            Ok(None) => variant_name.to_string(),
            Err(error) => return error.to_compile_error().into(),
        };

        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Unit => quote! { Self::#variant_name },
        };
        name_arms.push(quote! { #pattern => #reported, });
    }

    // Uninhabited enums still need a body that type-checks
    let body = if name_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#name_arms)*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics module_store_core::action::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[action(name = "...")]` from a variant's attributes
fn name_override(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut reported = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                reported = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(reported)
}
