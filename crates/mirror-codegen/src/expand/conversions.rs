use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_conversions(&self) -> TokenStream {
        let mirror_ident = &self.plan.mirror_ident;
        let new_fn = self.expand_new_fn();
        let to_persisted_fn = self.expand_to_persisted_fn();

        quote! {
            impl #mirror_ident {
                #new_fn
                #to_persisted_fn
            }
        }
    }

    /// `new`, assigning every field from its forward expression.
    fn expand_new_fn(&self) -> TokenStream {
        let ident = &self.plan.ident;
        let param = if self.plan.fields.is_empty() {
            quote!(_persisted)
        } else {
            quote!(persisted)
        };

        let fields = self.plan.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let forward = &field.forward;
            quote!(#field_ident: #forward,)
        });

        quote! {
            pub fn new(#param: &#ident) -> Self {
                Self {
                    #( #fields )*
                }
            }
        }
    }

    /// `to_persisted`, starting from the record's default value and assigning
    /// every persisted field from its backward expression.
    fn expand_to_persisted_fn(&self) -> TokenStream {
        let ident = &self.plan.ident;
        let binding = if self.plan.fields.is_empty() {
            quote!(persisted)
        } else {
            quote!(mut persisted)
        };

        let assignments = self.plan.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let backward = &field.backward;
            quote!(persisted.#field_ident = #backward;)
        });

        quote! {
            pub fn to_persisted(&self) -> #ident {
                let #binding = <#ident as ::core::default::Default>::default();
                #( #assignments )*
                persisted
            }
        }
    }
}
