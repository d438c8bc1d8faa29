//! Implementation of the `#[derive(NamedVariants)]` macro.
//!
//! This module validates the input enum and generates the variant table and
//! the variant-to-name mapping.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, parse_macro_input};

/// Main implementation of the `NamedVariants` derive macro.
pub fn derive_named_variants_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match validate(&input) {
        Ok(data_enum) => generate_named_variants(&input.ident, data_enum),
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

/// Checks that the input is a non-generic enum made only of unit variants.
fn validate(input: &DeriveInput) -> syn::Result<&DataEnum> {
    let data_enum = match &input.data {
        Data::Enum(data_enum) => data_enum,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "NamedVariants can only be derived for enums, not structs",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "NamedVariants cannot be derived for unions",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "NamedVariants cannot be derived for generic enums",
        ));
    }

    if data_enum.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "NamedVariants requires at least one variant",
        ));
    }

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "NamedVariants only supports unit variants",
            ));
        }
    }

    Ok(data_enum)
}

/// Generates the trait implementation for a validated enum.
fn generate_named_variants(name: &Ident, data_enum: &DataEnum) -> TokenStream2 {
    let variant_idents: Vec<&Ident> = data_enum
        .variants
        .iter()
        .map(|variant| &variant.ident)
        .collect();

    // `r#type` must be looked up as `type`
    let variant_names: Vec<String> = variant_idents
        .iter()
        .map(|ident| {
            let raw = ident.to_string();
            raw.strip_prefix("r#").map_or_else(|| raw.clone(), str::to_owned)
        })
        .collect();

    quote! {
        impl ::extkit::variants::NamedVariants for #name {
            const VARIANTS: &'static [(&'static str, Self)] = &[
                #((#variant_names, Self::#variant_idents)),*
            ];

            #[inline]
            fn variant_name(&self) -> &'static str {
                match self {
                    #(Self::#variant_idents => #variant_names),*
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> DeriveInput {
        syn::parse_str(source).expect("test input must parse")
    }

    #[test]
    fn accepts_fieldless_enum() {
        let input = parse("enum Light { Red, Amber, Green }");
        let data_enum = validate(&input).expect("fieldless enum is valid");
        assert_eq!(data_enum.variants.len(), 3);
    }

    #[test]
    fn accepts_explicit_discriminants() {
        let input = parse("enum Code { Ok = 0, NotFound = 404 }");
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn rejects_struct() {
        let input = parse("struct Point { x: i32 }");
        let error = validate(&input).unwrap_err();
        assert!(error.to_string().contains("not structs"));
    }

    #[test]
    fn rejects_union() {
        let input = parse("union Bits { word: u32, half: u16 }");
        let error = validate(&input).unwrap_err();
        assert!(error.to_string().contains("unions"));
    }

    #[test]
    fn rejects_generic_enum() {
        let input = parse("enum Tagged<T> { Plain, Marked }");
        let error = validate(&input).unwrap_err();
        assert!(error.to_string().contains("generic"));
    }

    #[test]
    fn rejects_empty_enum() {
        let input = parse("enum Never {}");
        let error = validate(&input).unwrap_err();
        assert!(error.to_string().contains("at least one variant"));
    }

    #[test]
    fn rejects_tuple_variant() {
        let input = parse("enum Shape { Point, Circle(f64) }");
        let error = validate(&input).unwrap_err();
        assert!(error.to_string().contains("unit variants"));
    }

    #[test]
    fn generated_table_lists_variants_in_order() {
        let input = parse("enum Light { Red, Amber, Green }");
        let data_enum = validate(&input).unwrap();
        let generated = generate_named_variants(&input.ident, data_enum).to_string();

        let red = generated.find("\"Red\"").unwrap();
        let amber = generated.find("\"Amber\"").unwrap();
        let green = generated.find("\"Green\"").unwrap();
        assert!(red < amber && amber < green);
    }

    #[test]
    fn raw_identifiers_are_named_without_prefix() {
        let input = parse("enum Keyword { r#type, r#match }");
        let data_enum = validate(&input).unwrap();
        let generated = generate_named_variants(&input.ident, data_enum).to_string();

        assert!(generated.contains("\"type\""));
        assert!(!generated.contains("\"r#type\""));
    }
}
