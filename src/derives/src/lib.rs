use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derives `Names` for a persistent entity: `Book` becomes `book` / `books`, and the plural is
/// used as the table name.
#[proc_macro_derive(Names)]
pub fn derive_names(input: TokenStream) -> TokenStream {
    let DeriveInput { ident, .. } = parse_macro_input!(input);
    let singular = ident.to_string().to_lowercase();
    let plural = singular.clone() + "s";
    quote! {
        impl Names for #ident {
            const NAME_SINGULAR: &'static str = #singular;
            const NAME_PLURAL: &'static str = #plural;
            const TABLE_NAME: &'static str = #plural;
        }
    }
    .into()
}
