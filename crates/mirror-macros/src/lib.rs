extern crate proc_macro;

use proc_macro::TokenStream;

/// Generates a `Readonly<Name>` or `Observable<Name>` mirror for a record.
///
/// Fields marked `#[persisted]` are mirrored in declaration order. The mode is
/// chosen with `#[mirror(readonly)]` (the default) or `#[mirror(observable)]`,
/// and `#[mirror(derive(..))]` adds derives to the mirror.
#[proc_macro_derive(Mirror, attributes(mirror, persisted))]
pub fn derive_mirror(input: TokenStream) -> TokenStream {
    match mirror_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
