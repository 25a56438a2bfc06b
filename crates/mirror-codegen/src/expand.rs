mod conversions;
mod mirror_struct;

use crate::Plan;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The compiled record being expanded
    plan: &'a Plan,

    /// Path prefix for runtime helpers
    support: &'a syn::Path,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let marker_impl = self.expand_marker_impl();
        let mirror_struct = self.expand_mirror_struct();
        let conversions = self.expand_conversions();

        quote! {
            #marker_impl
            #mirror_struct
            #conversions
        }
    }
}

/// Assembles the mirror declaration for a compiled record.
///
/// Items are emitted in a fixed order: the `Observable` marker impl (observable
/// mode only), the struct with its fields in schema order, then `new` and
/// `to_persisted`.
pub fn assemble(plan: &Plan) -> TokenStream {
    Expand {
        plan,
        support: &plan.support,
    }
    .expand()
}
