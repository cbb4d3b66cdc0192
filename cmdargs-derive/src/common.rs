use darling::{FromAttributes, util::SpannedValue};
use heck::ToKebabCase as _;
use proc_macro2::TokenStream as TokenStream2;
use quote::ToTokens;
use syn::{Attribute, Ident, ext::IdentExt as _};

pub struct IdentString<'a> {
    raw: &'a Ident,
    string: String,
}

impl<'a> IdentString<'a> {
    pub fn new(ident: &'a Ident) -> Self {
        Self {
            string: ident.unraw().to_string(),
            raw: ident,
        }
    }

    pub fn as_str(&self) -> &str {
        self.string.as_str()
    }

    pub fn raw(&self) -> &'a Ident {
        self.raw
    }
}

impl ToTokens for IdentString<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        self.raw.to_tokens(tokens);
    }
}

#[derive(FromAttributes, Debug)]
#[darling(attributes(args))]
struct RawFieldAttr {
    rename: Option<SpannedValue<String>>,
    skip: Option<()>,
}

#[derive(FromAttributes, Debug)]
#[darling(attributes(args))]
struct RawVariantAttr {
    rename: Option<SpannedValue<String>>,
}

/// How a struct field takes part in a derived `Arguments` record
pub enum FieldRole {
    Skip,
    Declared(SpannedValue<String>),
}

impl FieldRole {
    pub fn from_field(ident: &IdentString<'_>, attrs: &[Attribute]) -> syn::Result<Self> {
        let parsed = RawFieldAttr::from_attributes(attrs)?;

        match (parsed.skip, parsed.rename) {
            (Some(()), Some(rename)) => Err(syn::Error::new(
                rename.span(),
                "a skipped field can't be renamed",
            )),
            (Some(()), None) => Ok(Self::Skip),
            (None, rename) => compute_name(rename, ident).map(Self::Declared),
        }
    }
}

/// The label an enum variant matches, for a derived `Value`
pub fn variant_label(ident: &IdentString<'_>, attrs: &[Attribute]) -> syn::Result<String> {
    let parsed = RawVariantAttr::from_attributes(attrs)?;

    compute_name(parsed.rename, ident).map(|name| name.as_str().to_owned())
}

/// The explicit name, if given, else the identifier in kebab-case. Names have
/// to survive being written on a command line.
fn compute_name(
    name: Option<SpannedValue<String>>,
    ident: &IdentString<'_>,
) -> syn::Result<SpannedValue<String>> {
    let name = name.unwrap_or_else(|| {
        SpannedValue::new(ident.as_str().to_kebab_case(), ident.raw().span())
    });

    if name.is_empty() {
        Err(syn::Error::new(name.span(), "names must not be empty"))
    } else if name.starts_with('-') {
        Err(syn::Error::new(
            name.span(),
            "names don't start with '-'; dashes are added on the command line",
        ))
    } else if name.contains('=') {
        Err(syn::Error::new(
            name.span(),
            "names must not include an '=', as it is the argument separator",
        ))
    } else if name.contains(|c: char| c.is_whitespace()) {
        Err(syn::Error::new(name.span(), "names shouldn't include whitespace"))
    } else {
        Ok(name)
    }
}
