use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, Generics, Ident, spanned::Spanned as _};

use crate::common::{FieldRole, IdentString};

fn derive_arguments_struct(
    ident: &Ident,
    data: &DataStruct,
    generics: &Generics,
) -> syn::Result<TokenStream2> {
    let fields = match data.fields {
        Fields::Named(ref fields) => &fields.named,
        Fields::Unnamed(ref fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "can only derive `Arguments` on structs with named fields",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new(
                ident.span(),
                "can only derive `Arguments` on structs with named fields",
            ));
        }
    };

    let declarations = fields
        .iter()
        .filter_map(|field| {
            let ident = IdentString::new(field.ident.as_ref()?);

            Some(
                FieldRole::from_field(&ident, &field.attrs).map(|role| match role {
                    FieldRole::Skip => None,
                    FieldRole::Declared(name) => {
                        let name = name.as_str();
                        Some(quote! {
                            ::cmdargs::Declared::named(
                                #name,
                                ::cmdargs::Declare::declare(&mut self.#ident),
                            )
                        })
                    }
                }),
            )
        })
        .filter_map(Result::transpose)
        .collect::<syn::Result<Vec<_>>>()?;

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::cmdargs::Arguments for #ident #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::cmdargs::Declared<'_>> {
                ::std::vec![ #(#declarations,)* ]
            }
        }
    })
}

pub fn derive_arguments_result(item: TokenStream2) -> syn::Result<TokenStream2> {
    let input: DeriveInput = syn::parse2(item)?;

    match input.data {
        Data::Struct(ref data) => derive_arguments_struct(&input.ident, data, &input.generics),
        Data::Enum(_) => Err(syn::Error::new(
            input.span(),
            "can't derive `Arguments` on an enum",
        )),
        Data::Union(_) => Err(syn::Error::new(
            input.span(),
            "can't derive `Arguments` on a union",
        )),
    }
}
