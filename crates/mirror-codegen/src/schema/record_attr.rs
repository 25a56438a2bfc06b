use super::{ErrorSet, Mode};
use crate::Error;

use quote::ToTokens;

/// Settings from `#[mirror(...)]` on a record.
#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// Mirror mode, `None` when not specified
    pub(crate) mode: Option<Mode>,

    /// Extra derives for the mirror, from `derive(...)`
    pub(crate) derives: Vec<syn::Path>,
}

impl RecordAttr {
    pub(crate) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("mirror") {
                continue;
            }

            if let syn::Meta::Path(_) = &attr.meta {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "expected `#[mirror(readonly)]` or `#[mirror(observable)]`",
                ));
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("derive") {
                    meta.parse_nested_meta(|derive| {
                        self.derives.push(derive.path.clone());
                        Ok(())
                    })
                } else if meta.path.is_ident("mode") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    let mode = lit
                        .value()
                        .parse::<Mode>()
                        .map_err(|err| syn::Error::new_spanned(&lit, err))?;
                    self.set_mode(mode, &lit)
                } else if let Some(ident) = meta.path.get_ident() {
                    let mode = ident
                        .to_string()
                        .parse::<Mode>()
                        .map_err(|err| syn::Error::new_spanned(ident, err))?;
                    self.set_mode(mode, ident)
                } else {
                    let path = &meta.path;
                    Err(syn::Error::new_spanned(
                        path,
                        Error::unrecognized_mode(path.to_token_stream().to_string()),
                    ))
                }
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        errs.finish()
    }

    fn set_mode(&mut self, mode: Mode, tokens: impl ToTokens) -> syn::Result<()> {
        if self.mode.is_some() {
            return Err(syn::Error::new_spanned(tokens, "duplicate mapping mode"));
        }

        self.mode = Some(mode);
        Ok(())
    }
}
