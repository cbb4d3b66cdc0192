mod arguments;
mod common;
mod value;

use proc_macro::TokenStream;

/**
Derive `Arguments` for a struct with named fields, listing every field (in
declaration order) as a field of the record. Each field's type must be one of
the `cmdargs` slot types.

A field is declared under its own name, converted to kebab-case; fields that
don't set their own names on the command line take this name. Fields can be
customized with `#[args(...)]`:

- `#[args(rename = "name")]` declares the field under a different name.
- `#[args(skip)]` leaves the field out of the record entirely, for fields
  that aren't command-line slots.
*/
#[proc_macro_derive(Arguments, attributes(args))]
pub fn derive_arguments(item: TokenStream) -> TokenStream {
    match arguments::derive_arguments_result(item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/**
Derive `Value` for a type, so that it can be used as the value of any field.

- On an enum, each unit variant matches a single label: the variant's name in
  kebab-case, or the name given with `#[args(rename = "label")]`. Matching is
  exact and case-sensitive. An enum may additionally have one variant with a
  single field, which is tried for any argument that isn't a label.
- On a struct with exactly one field, the argument is converted to that
  field's type and wrapped.
*/
#[proc_macro_derive(Value, attributes(args))]
pub fn derive_value(item: TokenStream) -> TokenStream {
    match value::derive_value_result(item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
