use super::Error;

/// Error when a field references a record that no mirror is generated for.
///
/// Only raised when the caller supplies a resolver that knows the full set of
/// mapped records.
#[derive(Debug)]
pub(super) struct UnresolvedReference {
    name: Box<str>,
}

impl std::error::Error for UnresolvedReference {}

impl core::fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolved reference to `{}`: no mirror is generated for this record",
            self.name
        )
    }
}

impl Error {
    /// Creates an unresolved reference error.
    pub fn unresolved_reference(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvedReference(UnresolvedReference {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolved reference error.
    pub fn is_unresolved_reference(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnresolvedReference(_)))
    }
}
