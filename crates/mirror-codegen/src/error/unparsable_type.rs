use super::Error;

/// Error when a declared field type cannot be resolved to any shape.
///
/// This occurs when:
/// - The type text is empty or contains characters outside the type grammar
/// - Generic brackets are unbalanced or trailing tokens follow the type
/// - A wrapper has the wrong number of type arguments
/// - A generic type other than `List`, `MutableSet`, `Map` or `Option` is used
/// - An optional type is nested directly inside another optional
#[derive(Debug)]
pub(super) struct UnparsableType {
    ty: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for UnparsableType {}

impl core::fmt::Display for UnparsableType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unparsable type `{}`: {}", self.ty, self.reason)
    }
}

impl Error {
    /// Creates an unparsable type error for the type text `ty`.
    pub fn unparsable_type(ty: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnparsableType(UnparsableType {
            ty: ty.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an unparsable type error.
    pub fn is_unparsable_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnparsableType(_)))
    }
}
