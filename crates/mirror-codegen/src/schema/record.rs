use super::{ErrorSet, FieldDescriptor, Mode, RecordAttr};
use crate::Error;

/// A persistent record schema: the input of the plan compiler.
#[derive(Debug, Clone)]
pub struct Record {
    /// Record name
    pub ident: syn::Ident,

    /// Visibility given to the mirror and its fields
    pub vis: syn::Visibility,

    /// Which mirror to generate
    pub mode: Mode,

    /// Derives added to the mirror on top of the mode's defaults
    pub derives: Vec<syn::Path>,

    /// Persisted fields, in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl Record {
    /// Creates a public, readonly record with no fields.
    pub fn new(ident: syn::Ident) -> Record {
        Record {
            ident,
            vis: syn::parse_quote!(pub),
            mode: Mode::default(),
            derives: vec![],
            fields: vec![],
        }
    }

    pub fn mode(mut self, mode: Mode) -> Record {
        self.mode = mode;
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Record {
        self.fields.push(field);
        self
    }

    /// Name of the generated mirror, e.g. `ReadonlyPerson`.
    pub fn mirror_ident(&self) -> syn::Ident {
        syn::Ident::new(
            &format!("{}{}", self.mode.config().prefix, self.ident),
            self.ident.span(),
        )
    }

    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Record> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                Error::not_a_record("only structs can be mirrored"),
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                Error::not_a_record("record fields must be named"),
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                Error::not_a_record("generic records are not supported"),
            ));
        }

        let mut attr = RecordAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in &node.named {
            match FieldDescriptor::from_ast(node, &ast.ident) {
                Ok(Some(field)) => fields.push(field),
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        errs.finish()?;

        Ok(Record {
            ident: ast.ident.clone(),
            vis: ast.vis.clone(),
            mode: attr.mode.unwrap_or_default(),
            derives: attr.derives,
            fields,
        })
    }
}
