mod lexer;
use lexer::{Lexer, Token};

mod parser;
use parser::Parser;

mod path;
pub use path::TypePath;

mod primitive;
pub use primitive::Primitive;

use crate::Error;

use std::fmt;

/// A parsed field type.
///
/// Optional types never directly wrap another optional type; the parser
/// rejects such declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A scalar from the closed primitive set
    Primitive(Primitive),

    /// A value that may be absent
    Optional(Box<TypeExpr>),

    /// An ordered sequence, `List<T>`
    List(Box<TypeExpr>),

    /// An unordered collection of unique values, `MutableSet<T>`
    Set(Box<TypeExpr>),

    /// A dictionary, `Map<K, V>`
    Map(Box<TypeExpr>, Box<TypeExpr>),

    /// Another record, assumed to be mapped the same way
    Reference(TypePath),
}

/// The six categories every [`TypeExpr`] falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Primitive,
    Optional,
    List,
    Set,
    Map,
    Reference,
}

/// Parses declared type text such as `List<Dog>` or `Map<String, Int>?`.
pub fn parse(text: &str) -> Result<TypeExpr, Error> {
    Parser::new(text).parse()
}

impl TypeExpr {
    pub fn shape(&self) -> Shape {
        match self {
            TypeExpr::Primitive(_) => Shape::Primitive,
            TypeExpr::Optional(_) => Shape::Optional,
            TypeExpr::List(_) => Shape::List,
            TypeExpr::Set(_) => Shape::Set,
            TypeExpr::Map(..) => Shape::Map,
            TypeExpr::Reference(_) => Shape::Reference,
        }
    }

    /// Closed-set membership: only [`TypeExpr::Primitive`] is primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeExpr::Primitive(_))
    }

    /// The wrapped type of an optional, list or set.
    pub fn inner(&self) -> Option<&TypeExpr> {
        match self {
            TypeExpr::Optional(inner) | TypeExpr::List(inner) | TypeExpr::Set(inner) => {
                Some(inner)
            }
            _ => None,
        }
    }

    /// The key and value types of a map.
    pub fn key_value(&self) -> Option<(&TypeExpr, &TypeExpr)> {
        match self {
            TypeExpr::Map(key, value) => Some((key, value)),
            _ => None,
        }
    }

    /// Visits every referenced record path, skipping map keys.
    pub fn references(&self) -> Vec<&TypePath> {
        let mut out = vec![];
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a TypePath>) {
        match self {
            TypeExpr::Primitive(_) => {}
            TypeExpr::Optional(inner) | TypeExpr::List(inner) | TypeExpr::Set(inner) => {
                inner.collect_references(out)
            }
            TypeExpr::Map(_, value) => value.collect_references(out),
            TypeExpr::Reference(path) => out.push(path),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Primitive(primitive) => fmt::Display::fmt(primitive, f),
            TypeExpr::Optional(inner) => write!(f, "Option<{inner}>"),
            TypeExpr::List(elem) => write!(f, "List<{elem}>"),
            TypeExpr::Set(elem) => write!(f, "MutableSet<{elem}>"),
            TypeExpr::Map(key, value) => write!(f, "Map<{key}, {value}>"),
            TypeExpr::Reference(path) => fmt::Display::fmt(path, f),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Primitive => "primitive",
            Shape::Optional => "optional",
            Shape::List => "list",
            Shape::Set => "set",
            Shape::Map => "map",
            Shape::Reference => "reference",
        })
    }
}
