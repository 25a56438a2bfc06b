use proc_macro2::Span;
use quote::ToTokens;
use syn::spanned::Spanned;

/// A persisted field of a record, as handed to the plan compiler.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Field name, shared by the record and its mirror
    pub ident: syn::Ident,

    /// The field's declared type, as text
    pub declared_ty: String,

    /// Where the declared type came from, for diagnostics
    pub span: Span,
}

impl FieldDescriptor {
    pub fn new(ident: syn::Ident, declared_ty: impl Into<String>) -> FieldDescriptor {
        FieldDescriptor {
            span: ident.span(),
            ident,
            declared_ty: declared_ty.into(),
        }
    }

    /// Reads a struct field. Returns `Ok(None)` when the field is not marked
    /// `#[persisted]`; such fields never appear in the mirror.
    pub(super) fn from_ast(
        field: &syn::Field,
        record_ident: &syn::Ident,
    ) -> syn::Result<Option<FieldDescriptor>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut persisted = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("persisted") {
                continue;
            }

            if persisted.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[persisted] attribute",
                ));
            }

            if !matches!(attr.meta, syn::Meta::Path(_)) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "#[persisted] does not take arguments",
                ));
            }

            persisted = Some(attr);
        }

        if persisted.is_none() {
            return Ok(None);
        }

        let mut ty = field.ty.clone();
        rewrite_self(&mut ty, record_ident);

        Ok(Some(FieldDescriptor {
            ident: ident.clone(),
            declared_ty: ty.to_token_stream().to_string(),
            span: field.ty.span(),
        }))
    }
}

fn rewrite_self(ty: &mut syn::Type, record: &syn::Ident) {
    use syn::visit_mut::VisitMut;

    struct RewriteSelf<'a>(&'a syn::Ident);

    impl VisitMut for RewriteSelf<'_> {
        fn visit_path_mut(&mut self, path: &mut syn::Path) {
            syn::visit_mut::visit_path_mut(self, path);

            if path.is_ident("Self") {
                path.segments[0].ident = self.0.clone();
            }
        }
    }

    RewriteSelf(record).visit_type_mut(ty);
}
