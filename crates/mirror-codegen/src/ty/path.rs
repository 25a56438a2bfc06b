use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use std::fmt;

/// A possibly qualified type name, e.g. `Dog` or `crate::pets::Dog`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypePath {
    /// True when the path starts with `::`
    pub leading_colon: bool,

    /// Path segments, never empty
    pub segments: Vec<String>,
}

impl TypePath {
    pub fn from_ident(ident: impl Into<String>) -> TypePath {
        TypePath {
            leading_colon: false,
            segments: vec![ident.into()],
        }
    }

    /// The last segment, which names the type itself.
    pub fn name(&self) -> &str {
        self.segments
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Returns the same path with `prefix` prepended to the type name, so
    /// that `pets::Dog` becomes `pets::ReadonlyDog`.
    pub fn prefixed(&self, prefix: &str) -> TypePath {
        let mut segments = self.segments.clone();

        if let Some(last) = segments.last_mut() {
            *last = format!("{prefix}{last}");
        }

        TypePath {
            leading_colon: self.leading_colon,
            segments,
        }
    }
}

impl ToTokens for TypePath {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let mut path = syn::Path {
            leading_colon: self.leading_colon.then(Default::default),
            segments: syn::punctuated::Punctuated::new(),
        };

        for segment in &self.segments {
            path.segments
                .push(syn::Ident::new(segment, Span::call_site()).into());
        }

        path.to_tokens(tokens);
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leading_colon {
            f.write_str("::")?;
        }

        f.write_str(&self.segments.join("::"))
    }
}
