use super::TypePath;

use proc_macro2::TokenStream;
use quote::quote;
use std::fmt;

/// The closed set of scalar types a field may hold directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bool,
    Char,
    Date,
    Data,
    Url,
    Uuid,
}

/// Every accepted spelling, in both Rust and schema form.
const SPELLINGS: &[(&str, Primitive)] = &[
    ("String", Primitive::String),
    ("std::string::String", Primitive::String),
    ("i8", Primitive::I8),
    ("Int8", Primitive::I8),
    ("i16", Primitive::I16),
    ("Int16", Primitive::I16),
    ("i32", Primitive::I32),
    ("Int32", Primitive::I32),
    ("i64", Primitive::I64),
    ("Int64", Primitive::I64),
    ("Int", Primitive::I64),
    ("u8", Primitive::U8),
    ("UInt8", Primitive::U8),
    ("u16", Primitive::U16),
    ("UInt16", Primitive::U16),
    ("u32", Primitive::U32),
    ("UInt32", Primitive::U32),
    ("u64", Primitive::U64),
    ("UInt64", Primitive::U64),
    ("UInt", Primitive::U64),
    ("f32", Primitive::F32),
    ("Float", Primitive::F32),
    ("f64", Primitive::F64),
    ("Double", Primitive::F64),
    ("bool", Primitive::Bool),
    ("Bool", Primitive::Bool),
    ("char", Primitive::Char),
    ("Character", Primitive::Char),
    ("Date", Primitive::Date),
    ("SystemTime", Primitive::Date),
    ("std::time::SystemTime", Primitive::Date),
    ("mirror::Date", Primitive::Date),
    ("Data", Primitive::Data),
    ("mirror::Data", Primitive::Data),
    ("Url", Primitive::Url),
    ("URL", Primitive::Url),
    ("url::Url", Primitive::Url),
    ("mirror::Url", Primitive::Url),
    ("Uuid", Primitive::Uuid),
    ("UUID", Primitive::Uuid),
    ("uuid::Uuid", Primitive::Uuid),
    ("mirror::Uuid", Primitive::Uuid),
];

impl Primitive {
    /// Looks `path` up in the primitive table. A leading `::` is ignored.
    pub fn from_path(path: &TypePath) -> Option<Primitive> {
        let text = path.segments.join("::");

        SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == text)
            .map(|(_, primitive)| *primitive)
    }

    /// The Rust type used for this primitive in generated code.
    pub(crate) fn to_tokens(self, support: &syn::Path) -> TokenStream {
        match self {
            Primitive::String => quote!(::std::string::String),
            Primitive::I8 => quote!(i8),
            Primitive::I16 => quote!(i16),
            Primitive::I32 => quote!(i32),
            Primitive::I64 => quote!(i64),
            Primitive::U8 => quote!(u8),
            Primitive::U16 => quote!(u16),
            Primitive::U32 => quote!(u32),
            Primitive::U64 => quote!(u64),
            Primitive::F32 => quote!(f32),
            Primitive::F64 => quote!(f64),
            Primitive::Bool => quote!(bool),
            Primitive::Char => quote!(char),
            Primitive::Date => quote!(#support::Date),
            Primitive::Data => quote!(#support::Data),
            Primitive::Url => quote!(#support::Url),
            Primitive::Uuid => quote!(#support::Uuid),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Primitive::String => "String",
            Primitive::I8 => "i8",
            Primitive::I16 => "i16",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::U8 => "u8",
            Primitive::U16 => "u16",
            Primitive::U32 => "u32",
            Primitive::U64 => "u64",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
            Primitive::Bool => "bool",
            Primitive::Char => "char",
            Primitive::Date => "Date",
            Primitive::Data => "Data",
            Primitive::Url => "Url",
            Primitive::Uuid => "Uuid",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
