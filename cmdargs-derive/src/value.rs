use std::collections::HashMap;

use itertools::Itertools as _;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Fields, FieldsNamed, FieldsUnnamed, Generics, Ident, Token, Variant,
    punctuated::Punctuated, spanned::Spanned as _,
};

use crate::common::{IdentString, variant_label};

struct Fallback<'a> {
    variant: &'a Ident,
    field: Option<&'a Ident>,
}

struct AnalyzedEnum<'a> {
    variants: Vec<(String, &'a Ident)>,
    fallback: Option<Fallback<'a>>,
}

impl<'a> AnalyzedEnum<'a> {
    fn from_variants(variants: impl IntoIterator<Item = &'a Variant>) -> syn::Result<Self> {
        let mut fallback = None;
        let mut collected = Vec::new();
        let mut seen = HashMap::new();

        for variant in variants {
            match variant.fields {
                Fields::Unit => {
                    let label = variant_label(&IdentString::new(&variant.ident), &variant.attrs)?;

                    if let Some(previous) = seen.insert(label.clone(), &variant.ident) {
                        return Err(syn::Error::new(
                            variant.span(),
                            format!("variant `{previous}` already uses the label {label:?}"),
                        ));
                    }

                    collected.push((label, &variant.ident));
                }
                Fields::Unnamed(FieldsUnnamed {
                    unnamed: ref fields,
                    ..
                })
                | Fields::Named(FieldsNamed {
                    named: ref fields, ..
                }) => match fields.iter().exactly_one() {
                    Ok(field) => match fallback {
                        Some(_) => {
                            return Err(syn::Error::new(
                                variant.span(),
                                "more than one fallback variant",
                            ));
                        }
                        None => {
                            fallback = Some(Fallback {
                                variant: &variant.ident,
                                field: field.ident.as_ref(),
                            })
                        }
                    },
                    Err(_) => {
                        return Err(syn::Error::new(
                            variant.span(),
                            "variant with more than one field",
                        ));
                    }
                },
            }
        }

        Ok(AnalyzedEnum {
            variants: collected,
            fallback,
        })
    }
}

fn derive_value_enum(
    ident: &Ident,
    variants: &Punctuated<Variant, Token![,]>,
    generics: &Generics,
) -> syn::Result<TokenStream2> {
    let analyzed = AnalyzedEnum::from_variants(variants)?;

    let label_arms = analyzed.variants.iter().map(|(label, variant)| {
        quote! {
            #label => ::core::option::Option::Some(Self::#variant),
        }
    });

    let fallback_arm = match analyzed.fallback {
        Some(fallback) => {
            let variant = fallback.variant;

            let body = match fallback.field {
                Some(field) => quote! { { #field: value } },
                None => quote! { ( value ) },
            };

            quote! {
                _ => match ::cmdargs::Value::from_arg(argument) {
                    ::core::option::Option::Some(value) => ::core::option::Option::Some(
                        Self::#variant #body
                    ),
                    ::core::option::Option::None => ::core::option::Option::None,
                },
            }
        }
        None => quote! {
            _ => ::core::option::Option::None,
        },
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::cmdargs::Value for #ident #ty_generics #where_clause {
            fn from_arg(argument: &str) -> ::core::option::Option<Self> {
                match argument {
                    #(#label_arms)*
                    #fallback_arm
                }
            }
        }
    })
}

fn derive_value_newtype(ident: &Ident, field: Option<&Ident>, generics: &Generics) -> TokenStream2 {
    let struct_body = match field {
        Some(field) => quote! { { #field: value } },
        None => quote! { ( value ) },
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::cmdargs::Value for #ident #ty_generics #where_clause {
            fn from_arg(argument: &str) -> ::core::option::Option<Self> {
                match ::cmdargs::Value::from_arg(argument) {
                    ::core::option::Option::Some(value) => ::core::option::Option::Some(
                        Self #struct_body
                    ),
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }
        }
    }
}

pub fn derive_value_result(item: TokenStream2) -> syn::Result<TokenStream2> {
    let input: DeriveInput = syn::parse2(item)?;

    match input.data {
        Data::Struct(ref data) => {
            let field = data.fields.iter().exactly_one().map_err(|_| {
                syn::Error::new(
                    input.span(),
                    "can only derive `Value` on structs with exactly one field",
                )
            })?;

            Ok(derive_value_newtype(
                &input.ident,
                field.ident.as_ref(),
                &input.generics,
            ))
        }
        Data::Enum(ref data) => derive_value_enum(&input.ident, &data.variants, &input.generics),
        Data::Union(_) => Err(syn::Error::new(
            input.span(),
            "can't derive `Value` on a union",
        )),
    }
}
