use proc_macro2::Span;
use std::fmt::Display;

/// Collects every error found while reading a record so they can be reported
/// together.
#[derive(Debug)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self { errors: vec![] }
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    /// Records a codegen error at `span`.
    pub(crate) fn push_at(&mut self, span: Span, err: impl Display) {
        self.errors.push(syn::Error::new(span, err));
    }

    pub(crate) fn collect(self) -> Option<syn::Error> {
        self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        })
    }

    /// Fails with every collected error, or succeeds when there are none.
    pub(crate) fn finish(self) -> syn::Result<()> {
        match self.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
