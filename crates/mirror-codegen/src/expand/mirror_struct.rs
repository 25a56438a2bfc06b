use super::Expand;
use crate::schema::AggregateKind;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_marker_impl(&self) -> TokenStream {
        let support = self.support;
        let mirror_ident = &self.plan.mirror_ident;

        match self.plan.config().kind {
            AggregateKind::Value => quote!(),
            AggregateKind::Reference => quote! {
                impl #support::Observable for #mirror_ident {}
            },
        }
    }

    pub(super) fn expand_mirror_struct(&self) -> TokenStream {
        let vis = &self.plan.vis;
        let mirror_ident = &self.plan.mirror_ident;
        let derives = self.expand_derives();
        let fields = self.plan.fields.iter().map(|field| {
            let decl = &field.decl;
            quote!(#vis #decl,)
        });

        quote! {
            #[derive(#( #derives ),*)]
            #vis struct #mirror_ident {
                #( #fields )*
            }
        }
    }

    /// The aggregate kind's derives followed by any extra ones, skipping
    /// extras the kind already provides. Requesting `Eq` brings in
    /// `PartialEq` as well.
    fn expand_derives(&self) -> Vec<TokenStream> {
        let requested = |name: &str| {
            self.plan
                .derives
                .iter()
                .any(|path| path.segments.last().is_some_and(|last| last.ident == name))
        };

        let mut defaults = match self.plan.config().kind {
            AggregateKind::Value => vec![
                ("Debug", quote!(::core::fmt::Debug)),
                ("Clone", quote!(::core::clone::Clone)),
                ("PartialEq", quote!(::core::cmp::PartialEq)),
            ],
            AggregateKind::Reference => vec![("Debug", quote!(::core::fmt::Debug))],
        };

        let has_partial_eq = defaults.iter().any(|(name, _)| *name == "PartialEq");

        if requested("Eq") && !requested("PartialEq") && !has_partial_eq {
            defaults.push(("PartialEq", quote!(::core::cmp::PartialEq)));
        }

        let mut derives: Vec<_> = defaults.iter().map(|(_, path)| path.clone()).collect();

        for path in &self.plan.derives {
            let provided = path
                .segments
                .last()
                .is_some_and(|last| defaults.iter().any(|(name, _)| last.ident == name));

            if !provided {
                derives.push(quote!(#path));
            }
        }

        derives
    }
}
