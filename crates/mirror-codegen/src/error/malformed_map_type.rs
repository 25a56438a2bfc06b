use super::Error;

/// Error when a `Map<…>` type does not have exactly a key and a value type.
#[derive(Debug)]
pub(super) struct MalformedMapType {
    ty: Box<str>,
    arity: usize,
}

impl std::error::Error for MalformedMapType {}

impl core::fmt::Display for MalformedMapType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "malformed map type `{}`: expected a key and a value type, found {} type argument{}",
            self.ty,
            self.arity,
            if self.arity == 1 { "" } else { "s" }
        )
    }
}

impl Error {
    /// Creates a malformed map type error.
    pub fn malformed_map_type(ty: impl Into<String>, arity: usize) -> Error {
        Error::from(super::ErrorKind::MalformedMapType(MalformedMapType {
            ty: ty.into().into(),
            arity,
        }))
    }

    /// Returns `true` if this error is a malformed map type error.
    pub fn is_malformed_map_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MalformedMapType(_)))
    }
}
