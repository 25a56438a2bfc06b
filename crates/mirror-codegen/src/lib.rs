//! Code generation for `#[derive(Mirror)]` and the `mirror` CLI.
//!
//! A [`Record`] is compiled into a [`Plan`], one [`FieldMapping`] per
//! persisted field, which [`assemble`] turns into the mirror declaration.

mod error;
pub use error::Error;

mod expand;
pub use expand::assemble;

mod plan;
pub use plan::{compile_field, FieldMapping, Plan};

mod render;
pub use render::render;

mod resolve;
pub use resolve::{AssumeMapped, KnownRecords, Resolve};

mod schema;
pub use schema::{AggregateKind, FieldDescriptor, Mode, ModeConfig, Mutability, Record};

mod ty;
pub use ty::{parse, Primitive, Shape, TypeExpr, TypePath};

use proc_macro2::TokenStream;

/// Settings shared by every record compiled in one invocation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Module the generated code calls helpers from
    pub support: syn::Path,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    pub fn support(mut self, support: syn::Path) -> Options {
        self.support = support;
        self
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            support: syn::parse_quote!(::mirror::codegen_support),
        }
    }
}

/// Entry point of `#[derive(Mirror)]`.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let ast: syn::DeriveInput = syn::parse2(input)?;
    let record = Record::from_ast(&ast)?;
    let plan = Plan::compile_all(&record, &AssumeMapped, &Options::default())?;

    Ok(assemble(&plan))
}
