use crate::schema::{FieldDescriptor, ModeConfig, Mutability};
use crate::ty::{self, Shape, TypeExpr};
use crate::{Error, Options, Resolve};

use proc_macro2::TokenStream;
use quote::quote;

/// How one persisted field appears in, and converts to and from, the mirror.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    /// Field name, shared by the record and the mirror
    pub ident: syn::Ident,

    /// Shape of the declared type
    pub shape: Shape,

    /// The mirror's type for the field, before any observable wrapping
    pub mirror_ty: TokenStream,

    /// Field declaration, without visibility: `name: Type`
    pub decl: TokenStream,

    /// Builds the mirror field from `persisted: &Record`
    pub forward: TokenStream,

    /// Builds the persisted field from `&self`
    pub backward: TokenStream,
}

/// Compiles a single field against the decision table.
///
/// Every expression is generated from a reference to its input, so nested
/// shapes compose without moving out of the record or the mirror.
pub fn compile_field(
    field: &FieldDescriptor,
    config: &ModeConfig,
    resolver: &dyn Resolve,
    options: &Options,
) -> Result<FieldMapping, Error> {
    let ty = ty::parse(&field.declared_ty)?;

    for path in ty.references() {
        if !resolver.is_mapped(path) {
            return Err(Error::unresolved_reference(path.to_string()));
        }
    }

    let mapper = Mapper {
        config,
        support: &options.support,
    };

    let ident = &field.ident;
    let support = &options.support;
    let mirror_ty = mapper.mirror_ty(&ty);

    let (field_ty, forward, backward) = match config.mutability {
        Mutability::Immutable => (
            mirror_ty.clone(),
            mapper.forward(&ty, quote!(&persisted.#ident)),
            mapper.backward(&ty, quote!(&self.#ident)),
        ),
        Mutability::Mutable => {
            let forward = mapper.forward(&ty, quote!(&persisted.#ident));
            let backward = mapper.backward(&ty, quote!(value));

            (
                quote!(#support::Observed<#mirror_ty>),
                quote!(#support::Observed::new(#forward)),
                quote!(#support::Observed::with(&self.#ident, |value| #backward)),
            )
        }
    };

    log::trace!("field `{ident}`: {} as {}", ty, ty.shape());

    Ok(FieldMapping {
        ident: ident.clone(),
        shape: ty.shape(),
        decl: quote!(#ident: #field_ty),
        mirror_ty,
        forward,
        backward,
    })
}

struct Mapper<'a> {
    config: &'a ModeConfig,
    support: &'a syn::Path,
}

impl Mapper<'_> {
    /// `mirror(T)`: primitives stay, references gain the mode prefix, and
    /// containers become their std counterparts.
    fn mirror_ty(&self, ty: &TypeExpr) -> TokenStream {
        let support = self.support;

        match ty {
            TypeExpr::Primitive(primitive) => primitive.to_tokens(support),
            TypeExpr::Reference(path) => {
                let path = path.prefixed(self.config.prefix);
                quote!(#path)
            }
            TypeExpr::Optional(inner) => {
                let inner = self.mirror_ty(inner);
                quote!(::core::option::Option<#inner>)
            }
            TypeExpr::List(elem) => {
                let elem = self.mirror_ty(elem);
                quote!(::std::vec::Vec<#elem>)
            }
            TypeExpr::Set(elem) => {
                let elem = self.mirror_ty(elem);
                quote!(#support::HashSet<#elem>)
            }
            TypeExpr::Map(key, value) => {
                let key = self.persisted_ty(key);
                let value = self.mirror_ty(value);
                quote!(#support::HashMap<#key, #value>)
            }
        }
    }

    /// The persisted spelling of a type. Map keys keep this form.
    fn persisted_ty(&self, ty: &TypeExpr) -> TokenStream {
        let support = self.support;

        match ty {
            TypeExpr::Primitive(primitive) => primitive.to_tokens(support),
            TypeExpr::Reference(path) => quote!(#path),
            TypeExpr::Optional(inner) => {
                let inner = self.persisted_ty(inner);
                quote!(::core::option::Option<#inner>)
            }
            TypeExpr::List(elem) => {
                let elem = self.persisted_ty(elem);
                quote!(#support::List<#elem>)
            }
            TypeExpr::Set(elem) => {
                let elem = self.persisted_ty(elem);
                quote!(#support::MutableSet<#elem>)
            }
            TypeExpr::Map(key, value) => {
                let key = self.persisted_ty(key);
                let value = self.persisted_ty(value);
                quote!(#support::Map<#key, #value>)
            }
        }
    }

    /// Persistent to mirror. `input` evaluates to `&T`.
    fn forward(&self, ty: &TypeExpr, input: TokenStream) -> TokenStream {
        let support = self.support;

        match ty {
            TypeExpr::Primitive(_) => quote!(::core::clone::Clone::clone(#input)),
            TypeExpr::Reference(path) => {
                let mirror = path.prefixed(self.config.prefix);
                quote!(#mirror::new(#input))
            }
            TypeExpr::Optional(inner) if inner.is_primitive() => {
                quote!(::core::clone::Clone::clone(#input))
            }
            TypeExpr::Optional(inner) => {
                let inner = self.forward(inner, quote!(item));
                quote!(::core::option::Option::as_ref(#input).map(|item| #inner))
            }
            TypeExpr::List(elem) => {
                let elem = self.forward(elem, quote!(item));
                quote!(#support::forward_list(#input, |item| #elem))
            }
            TypeExpr::Set(elem) => {
                let elem = self.forward(elem, quote!(item));
                quote!(#support::forward_set(#input, |item| #elem))
            }
            TypeExpr::Map(_, value) => {
                let value = self.forward(value, quote!(value));
                quote!(#support::forward_map(#input, |value| #value))
            }
        }
    }

    /// Mirror to persistent. `input` evaluates to `&mirror(T)`.
    fn backward(&self, ty: &TypeExpr, input: TokenStream) -> TokenStream {
        let support = self.support;

        match ty {
            TypeExpr::Primitive(_) => quote!(::core::clone::Clone::clone(#input)),
            TypeExpr::Reference(path) => {
                let mirror = path.prefixed(self.config.prefix);
                quote!(#mirror::to_persisted(#input))
            }
            TypeExpr::Optional(inner) if inner.is_primitive() => {
                quote!(::core::clone::Clone::clone(#input))
            }
            TypeExpr::Optional(inner) => {
                let inner = self.backward(inner, quote!(item));
                quote!(::core::option::Option::as_ref(#input).map(|item| #inner))
            }
            TypeExpr::List(elem) => {
                let elem = self.backward(elem, quote!(item));
                quote!(#support::backward_list(#input, |item| #elem))
            }
            TypeExpr::Set(elem) => {
                let elem = self.backward(elem, quote!(item));
                quote!(#support::backward_set(#input, |item| #elem))
            }
            TypeExpr::Map(_, value) => {
                let value = self.backward(value, quote!(value));
                quote!(#support::backward_map(#input, |value| #value))
            }
        }
    }
}
