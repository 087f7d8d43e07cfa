//! Proc-macros for dnc.
//!
//! Currently provided:
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder-style methods
//!   for each named field of an option or config struct.
//!
//! ## Field control
//! - `#[with_builders(skip)]`: no builder is generated for the field.
//! - `#[with_builders(some)]`: the field is an `Option<T>`; the builder takes a `T`
//!   and stores `Some(value)`. Used for per-widget overrides that fall back to
//!   the shared config when unset.
//! - `#[with_builders(into)]`: the builder takes `impl Into<FieldType>`.
//!
//! ### Example
//! ```ignore
//! use dnc_macros::WithBuilders;
//! use std::time::Duration;
//!
//! #[derive(Clone, Debug, Default, WithBuilders)]
//! pub struct HoverOptions {
//!     #[with_builders(some)]
//!     pub duration: Option<Duration>,
//!     #[with_builders(into)]
//!     pub element_type: String,
//!     pub repeat: bool,
//! }
//!
//! let options = HoverOptions::default()
//!     .with_duration(Duration::from_millis(800))
//!     .with_element_type("button")
//!     .with_repeat(true);
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields, GenericArgument,
    PathArguments, Type,
};

/// How a single field's builder is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldMode {
    Plain,
    Skip,
    Some,
    Into,
}

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value (builder style) and return `Self`.
///
/// Field attributes:
/// - `#[with_builders(skip)]`: do not generate a builder method for this field.
/// - `#[with_builders(some)]`: take the inner `T` of an `Option<T>` field.
/// - `#[with_builders(into)]`: take `impl Into<T>`.
#[proc_macro_derive(WithBuilders, attributes(with_builders))]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let ident = &input.ident;
    let generics = &input.generics;

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        )
        .to_compile_error()
        .into();
    };

    let Fields::Named(fields_named) = &data_struct.fields else {
        return syn::Error::new(
            data_struct.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut methods = Vec::with_capacity(fields_named.named.len());
    for field in fields_named.named.iter() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };

        let mode = match field_mode(field) {
            Ok(mode) => mode,
            Err(err) => return err.to_compile_error().into(),
        };

        let field_ty = &field.ty;
        let method_ident = format_ident!("with_{}", field_ident);
        let doc = format!("Set `{}`.", field_ident);

        let method = match mode {
            FieldMode::Skip => continue,
            FieldMode::Plain => quote! {
                #[doc = #doc]
                #[inline]
                pub fn #method_ident(mut self, value: #field_ty) -> Self {
                    self.#field_ident = value;
                    self
                }
            },
            FieldMode::Into => quote! {
                #[doc = #doc]
                #[inline]
                pub fn #method_ident(
                    mut self,
                    value: impl ::core::convert::Into<#field_ty>,
                ) -> Self {
                    self.#field_ident = value.into();
                    self
                }
            },
            FieldMode::Some => {
                let Some(inner_ty) = option_inner(field_ty) else {
                    return syn::Error::new(
                        field_ty.span(),
                        "#[with_builders(some)] requires an `Option<T>` field",
                    )
                    .to_compile_error()
                    .into();
                };
                quote! {
                    #[doc = #doc]
                    #[inline]
                    pub fn #method_ident(mut self, value: #inner_ty) -> Self {
                        self.#field_ident = ::core::option::Option::Some(value);
                        self
                    }
                }
            }
        };

        methods.push(method);
    }

    quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    }
    .into()
}

fn field_mode(field: &syn::Field) -> syn::Result<FieldMode> {
    let mut mode = FieldMode::Plain;
    for attr in &field.attrs {
        if !attr.path().is_ident("with_builders") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            let next = if meta.path.is_ident("skip") {
                FieldMode::Skip
            } else if meta.path.is_ident("some") {
                FieldMode::Some
            } else if meta.path.is_ident("into") {
                FieldMode::Into
            } else {
                return Err(meta.error("expected `skip`, `some` or `into`"));
            };
            if mode != FieldMode::Plain && mode != next {
                return Err(meta.error("conflicting #[with_builders] options"));
            }
            mode = next;
            Ok(())
        })?;
    }

    Ok(mode)
}

/// Extract `T` from a type spelled `Option<T>` (optionally path-qualified).
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
