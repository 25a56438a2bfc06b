use crate::Error;

use proc_macro2::TokenStream;

/// Pretty-prints generated items as Rust source text.
pub fn render(tokens: TokenStream) -> Result<String, Error> {
    let file: syn::File = syn::parse2(tokens)?;
    Ok(prettyplease::unparse(&file))
}
